use std::fmt;
use std::io;

/// Errors constructing a session. Everything after construction is a defined state.
#[derive(Debug)]
pub enum SessionError {
    /// No game with this identifier is in the catalogue
    UnknownGame(String),
    /// The default progress store could not be opened
    Storage(io::Error),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::UnknownGame(id) => write!(f, "Unknown game: {}", id),
            SessionError::Storage(e) => write!(f, "Progress storage unavailable: {}", e),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Storage(e) => Some(e),
            SessionError::UnknownGame(_) => None,
        }
    }
}

impl From<io::Error> for SessionError {
    fn from(e: io::Error) -> Self {
        SessionError::Storage(e)
    }
}
