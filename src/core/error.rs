use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Io,
    InputUnreadable,     // corpus cannot be opened or decoded
    ExistingUnreadable,  // prior artifact exists but cannot be read
    OutputUnwritable,    // artifact cannot be created, written or replaced
    Locked,              // another run holds the output lock
    InvalidArgument,
    Internal,
}

#[derive(Debug)]
pub struct Error {
    pub kind: ErrorKind,
    pub context: String,
}

impl Error {
    pub fn new(kind: ErrorKind, context: String) -> Self {
        Error { kind, context }
    }

    pub fn input_unreadable(stage: &str, err: impl fmt::Display) -> Self {
        Error::new(ErrorKind::InputUnreadable, format!("{}: {}", stage, err))
    }

    pub fn existing_unreadable(path: &Path, err: impl fmt::Display) -> Self {
        Error::new(
            ErrorKind::ExistingUnreadable,
            format!("reading prior artifact {}: {}", path.display(), err),
        )
    }

    pub fn output_unwritable(path: &Path, err: impl fmt::Display) -> Self {
        Error::new(
            ErrorKind::OutputUnwritable,
            format!("writing artifact {}: {}", path.display(), err),
        )
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.context)
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error {
            kind: ErrorKind::Io,
            context: err.to_string(),
        }
    }
}

impl From<regex::Error> for Error {
    fn from(err: regex::Error) -> Self {
        Error {
            kind: ErrorKind::Internal,
            context: format!("Regex error: {}", err),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
