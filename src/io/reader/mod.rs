/*! Input reading utilities

- [LineReader]: lines of plain, gzip or xz files (or standard input).
- [Parallel]: pairs line-aligned streams, such as a payload file and its URL file.

!*/
mod parallel;
mod textreader;

pub use parallel::Parallel;
pub use textreader::{Compression, LineReader};
