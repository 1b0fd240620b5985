use thiserror::Error;

#[derive(Error, Debug)]
pub enum UtilError {
    #[error("Division by zero: cannot average an empty sequence")]
    DivisionByZero,

    #[error("File not found: {path}")]
    NotFound { path: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid path '{path}': {reason}")]
    InvalidPathError { path: String, reason: String },
}

pub type Result<T> = std::result::Result<T, UtilError>;

impl UtilError {
    /// Wraps an IO error, turning `ErrorKind::NotFound` into the dedicated
    /// variant so callers can match on a missing file directly.
    pub fn from_io(path: &str, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            UtilError::NotFound {
                path: path.to_string(),
            }
        } else {
            UtilError::IoError(err)
        }
    }
}
