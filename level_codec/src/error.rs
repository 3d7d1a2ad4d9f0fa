use bintree::TreeError;
use thiserror::Error;

/// Encode/decode errors
#[derive(Error, Debug)]
pub enum CodecError {
    /// Sink or source could not be opened, written, or read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Decode was handed a zero-length stream
    #[error("empty stream: a tree needs at least a root word")]
    EmptyStream,

    /// A lone word remained where a child-slot pair was expected
    #[error("malformed stream: lone trailing word {0} where a pair was expected")]
    TrailingWord(u64),

    /// Word pairs remained after every open child slot was filled
    #[error("malformed stream: {0} words left but no open child slots")]
    StrayWords(usize),

    /// Byte stream length is not a whole number of words
    #[error("truncated stream: {0} trailing bytes do not form a whole word")]
    TruncatedWord(usize),

    /// The decoded stream violated a tree invariant (sentinel-valued root)
    #[error(transparent)]
    Tree(#[from] TreeError),
}
