use thiserror::Error;

use crate::reader::ReaderError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImportError {
    #[error("invalid element: {0}")]
    Reader(#[from] ReaderError),

    #[error("document is nested deeper than {limit} levels")]
    DepthLimitExceeded { limit: usize },
}

pub type ImportResult<T> = Result<T, ImportError>;
