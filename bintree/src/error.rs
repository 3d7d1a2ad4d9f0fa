use thiserror::Error;

/// Tree construction errors
#[derive(Error, Debug)]
pub enum TreeError {
    /// The value collides with the reserved padding word
    #[error("value {0} is reserved as the padding word and cannot be stored")]
    ReservedValue(u64),
}
