/*!
# IO utilities

Reading of the line-oriented files produced by preprocessing: document payloads, URLs
and candidate lists, possibly gzip or xz compressed.
!*/
mod payload;
pub mod reader;

pub use payload::Payload;
pub use reader::{LineReader, Parallel};
