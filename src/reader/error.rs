use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReaderError {
    #[error("node name cannot be empty")]
    EmptyName,

    #[error("attribute at position {position} has an empty name")]
    EmptyAttributeName { position: usize },

    #[error("attribute '{name}' is declared more than once")]
    DuplicateAttribute { name: String },

    #[error("child {index} is a placeholder, not a real node")]
    InvalidChild { index: usize },
}

pub type ReaderResult<T> = Result<T, ReaderError>;
