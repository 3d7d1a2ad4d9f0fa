//! # level_codec
//!
//! Breadth-first serialization of [`bintree::Node`] trees to a flat
//! stream of 64-bit words, and reconstruction back from that stream.
//!
//! The wire format is a raw sequence of host-order `u64` words, no
//! header and no terminator: the first word is the root's value, every
//! internal node is followed (in level order) by one word per child
//! slot, and absent children are written as the padding word `0`.
//! Leaves contribute no child words at all, so the stream simply ends
//! once the last internal node's slots are written. The decoder reads
//! word pairs until the stream runs out and relies on that leaf rule
//! to stop at the right point.
//!
//! ```rust
//! use bintree::Node;
//! use level_codec::{encode, decode};
//!
//! let two = Node::with_children(2, Some(Node::new(4).unwrap()), None).unwrap();
//! let three = Node::with_children(
//!     3,
//!     Some(Node::new(6).unwrap()),
//!     Some(Node::new(78).unwrap()),
//! ).unwrap();
//! let root = Node::with_children(1, Some(two), Some(three)).unwrap();
//!
//! let words = encode(&root);
//! assert_eq!(words, vec![1, 2, 3, 4, 0, 6, 78]);
//! assert_eq!(decode(&words).unwrap(), root);
//! ```

pub mod decode;
pub mod encode;
pub mod error;

pub use decode::{decode, load_from_file, read_tree};
pub use encode::{encode, save_to_file, write_tree};
pub use error::CodecError;

/// The on-disk word written for an absent child.
pub const PADDING_WORD: u64 = bintree::RESERVED_VALUE;

/// Size in bytes of one stream word.
pub const WORD_SIZE: usize = std::mem::size_of::<u64>();
