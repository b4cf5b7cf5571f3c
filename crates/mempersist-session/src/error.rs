use std::fmt;
use std::path::PathBuf;

/// Result type for mempersist-session operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the session layer
#[derive(Debug)]
pub enum Error {
    /// IO operation failed
    Io(std::io::Error),

    /// Environment is unusable (no home directory, bad settings)
    Config(String),

    /// No session directory exists for the project
    SessionDirNotFound { searched: PathBuf, project: PathBuf },

    /// The session directory holds no eligible session files
    NoSessionFiles { dir: PathBuf },

    /// A session file yielded zero conversational messages
    EmptySession { session_file: PathBuf },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Config error: {}", msg),
            Error::SessionDirNotFound { searched, project } => write!(
                f,
                "Session directory not found: {}\nExpected encoding for: {}\nMake sure Claude Code has created sessions for this project.",
                searched.display(),
                project.display()
            ),
            Error::NoSessionFiles { dir } => {
                write!(f, "No session files found in {}", dir.display())
            }
            Error::EmptySession { session_file } => write!(
                f,
                "No conversational messages found in {}",
                session_file.display()
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}
