//! # linkalign
//!
//! Building blocks for the document alignment step of parallel corpus mining:
//!
//! - [rescore]: rescoring of alignment candidates using the edit distance between
//!   the link structures of documents (see [links] and [index]),
//! - [extract]: sentence extraction from plain text documents, using an external sentence splitter (see [splitter]).
//!
//! Inputs are line-oriented, possibly compressed files (see [io]).
#[macro_use]
extern crate log;

pub mod error;
pub mod extract;
pub mod filtering;
pub mod index;
pub mod io;
pub mod links;
pub mod rescore;
pub mod splitter;
