use thiserror::Error;

/// Errors returned by fallible queue operations.
///
/// An empty container is not an error: operations that may find nothing return `Option`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("index {index} is out of bounds for a queue of {len} entries")]
    IndexOutOfBounds { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
