//! A custom archtab error
//!

use alloc::string::String;
use core::fmt;
use core::result;
#[cfg(feature = "std")]
use std::error;

/// The lookup key that had no entry in the architecture table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    /// A numeric architecture identifier
    Id(u32),
    /// An architecture name
    Name(String),
}

impl fmt::Display for Key {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Key::Id(id) => write!(fmt, "{}", id),
            Key::Name(ref name) => write!(fmt, "{}", name),
        }
    }
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
/// A custom archtab error
pub enum Error {
    /// The identifier or name is not in the architecture table
    NotSupported(Key),
}

impl Error {
    pub(crate) fn unsupported_id(id: u32) -> Self {
        Error::NotSupported(Key::Id(id))
    }

    pub(crate) fn unsupported_name(name: &str) -> Self {
        Error::NotSupported(Key::Name(name.into()))
    }

    /// The key that failed to resolve
    pub fn key(&self) -> &Key {
        match *self {
            Error::NotSupported(ref key) => key,
        }
    }
}

#[cfg(feature = "std")]
impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::NotSupported(ref key) => write!(fmt, "Architecture isn't supported: {}", key),
        }
    }
}

/// The result of a table lookup
pub type Result<T> = result::Result<T, Error>;
