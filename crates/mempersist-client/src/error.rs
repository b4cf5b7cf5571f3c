use std::fmt;

/// Result type for mempersist-client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur when talking to the Nowledge Mem API
#[derive(Debug)]
pub enum Error {
    /// Transport-level failure (connection, timeout, body decode)
    Http(reqwest::Error),

    /// The server answered with a non-success status
    Status { code: u16, body: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Http(err) => write!(f, "Request failed: {}", err),
            Error::Status { code, body } => write!(f, "API returned {}: {}", code, body),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Http(err) => Some(err),
            Error::Status { .. } => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err)
    }
}
