use std::fmt;

use thiserror::Error;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InvalidArgument => "invalid_argument",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum SliceError {
    #[error("slice step cannot be zero")]
    ZeroStep,
    #[error("attempt to assign sequence of size {actual} to extended slice of size {expected}")]
    LengthMismatch { expected: usize, actual: usize },
}

impl SliceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ZeroStep | Self::LengthMismatch { .. } => ErrorKind::InvalidArgument,
        }
    }
}
