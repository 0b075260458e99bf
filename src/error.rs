//! Error enum
use std::fmt;
use std::string::FromUtf8Error;

use crate::index::DocId;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    /// Two streams that should be aligned line by line are not.
    /// `position` is the (0-based) index of the first unpaired line.
    LengthMismatch {
        position: usize,
    },
    UnknownDocument(DocId),
    MalformedRecord(String),
    Base64(base64::DecodeError),
    Utf8(FromUtf8Error),
    Splitter(String),
    Custom(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {}", e),
            Error::LengthMismatch { position } => write!(
                f,
                "parallel streams have different lengths (first unpaired line: {})",
                position + 1
            ),
            Error::UnknownDocument(id) => write!(f, "document {} is not in the index", id),
            Error::MalformedRecord(r) => write!(f, "malformed record: {:?}", r),
            Error::Base64(e) => write!(f, "invalid base64 payload: {}", e),
            Error::Utf8(e) => write!(f, "payload is not valid utf-8: {}", e),
            Error::Splitter(e) => write!(f, "sentence splitter: {}", e),
            Error::Custom(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<base64::DecodeError> for Error {
    fn from(e: base64::DecodeError) -> Error {
        Error::Base64(e)
    }
}

impl From<FromUtf8Error> for Error {
    fn from(e: FromUtf8Error) -> Error {
        Error::Utf8(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}
