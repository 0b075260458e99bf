//! Per-line document payloads.
//!
//! Preprocessing stores one document per line, base64 encoded so that
//! the markup/text can hold newlines.
use base64::{engine::general_purpose, Engine as _};

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Payload {
    /// line is the base64 encoding of an utf-8 document
    Base64,
    /// line is the document itself
    Raw,
}

impl Payload {
    pub fn decode(&self, line: String) -> Result<String, Error> {
        match self {
            Payload::Raw => Ok(line),
            Payload::Base64 => {
                let bytes = general_purpose::STANDARD.decode(line.trim())?;
                Ok(String::from_utf8(bytes)?)
            }
        }
    }
}

impl Default for Payload {
    fn default() -> Self {
        Payload::Base64
    }
}
