/*! Document index

Maps document identifiers to link signatures (see [crate::links]).

Identifiers are assigned sequentially while ingesting document collections:
ingesting a first collection of `n1` documents from offset `1` gives them ids `1..=n1`,
and returns `n1 + 1`, which is then used as the offset of the second collection.

The whole index is kept in memory since candidates can reference any document, in any order.
!*/
use std::collections::HashMap;

use crate::{error::Error, links};

/// Document identifier, 1-based.
pub type DocId = u64;

#[derive(Debug, Default)]
pub struct DocumentIndex {
    signatures: HashMap<DocId, String>,
}

impl DocumentIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ingest a collection of `(html, url)` documents, assigning ids from `offset`.
    ///
    /// Returns the next free id.
    /// Stops at the first error (see [crate::io::Parallel] for length mismatches).
    pub fn ingest<I, H, U>(&mut self, documents: I, offset: DocId) -> Result<DocId, Error>
    where
        I: IntoIterator<Item = Result<(H, U), Error>>,
        H: AsRef<str>,
        U: AsRef<str>,
    {
        let mut id = offset;
        for document in documents {
            let (html, url) = document?;
            self.insert(id, links::signature(html.as_ref(), url.as_ref()));
            id += 1;
        }

        info!("indexed {} documents (ids {}..{})", id - offset, offset, id);
        Ok(id)
    }

    /// Insert a signature, replacing the previous one if the id was already taken.
    pub fn insert(&mut self, id: DocId, signature: String) {
        if self.signatures.insert(id, signature).is_some() {
            warn!("document {} indexed twice, keeping the latest signature", id);
        }
    }

    /// Get the signature of a document.
    pub fn get(&self, id: DocId) -> Option<&str> {
        self.signatures.get(&id).map(String::as_str)
    }

    /// Get the signature of a document, failing on unknown ids.
    pub fn signature(&self, id: DocId) -> Result<&str, Error> {
        self.get(id).ok_or(Error::UnknownDocument(id))
    }

    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }
}
