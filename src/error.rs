use alloc::{string::FromUtf8Error, sync::Arc};
use core::error;
use core::fmt::{self, Display, Formatter};
use std::io;

/// A DOM error.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// A node insertion that would break the tree hierarchy.
    HierarchyRequest,
    /// A tag or attribute name with invalid characters.
    InvalidCharacter(String),
    /// A serialization failure.
    Serialize(Arc<str>),
}

impl error::Error for Error {}

impl Display for Error {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::HierarchyRequest => write!(formatter, "node cannot be inserted at this point"),
            Self::InvalidCharacter(name) => {
                write!(formatter, "invalid character in name: {name:?}")
            }
            Self::Serialize(error) => write!(formatter, "{error}"),
        }
    }
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Self::Serialize(error.to_string().into())
    }
}

impl From<FromUtf8Error> for Error {
    fn from(error: FromUtf8Error) -> Self {
        Self::Serialize(error.to_string().into())
    }
}
