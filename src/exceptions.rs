use std::{fmt, io};
use std::error::Error;

#[derive(Debug)]
pub enum RelabelError {
    Io(io::Error),
    InvalidSubstitution(String, String),
}

impl fmt::Display for RelabelError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "IO error: {}", err),
            Self::InvalidSubstitution(value, reason) => {
                write!(f, "Invalid substitution {:?}: {}", value, reason)
            }
        }
    }
}

impl From<io::Error> for RelabelError {
    fn from(err: io::Error) -> RelabelError {
        RelabelError::Io(err)
    }
}

impl Error for RelabelError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::InvalidSubstitution(..) => None,
        }
    }
}
