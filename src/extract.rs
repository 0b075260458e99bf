/*! Sentence extraction

Turns documents (plain text + URL) into `url\tsentence` lines:

- documents with an empty text are skipped,
- text is split using a [SentenceSplitter],
- sentences are trimmed, empty and too long ones (see [Prune]) are removed.
!*/
use std::vec::IntoIter;

use crate::{
    error::Error,
    filtering::{Filter, Prune},
    splitter::SentenceSplitter,
};

pub struct Extractor<S> {
    splitter: S,
    prune: Prune,
    documents: usize,
    sentences: usize,
}

impl<S: SentenceSplitter> Extractor<S> {
    pub fn new(splitter: S, prune: Prune) -> Self {
        Self {
            splitter,
            prune,
            documents: 0,
            sentences: 0,
        }
    }

    /// Extract the sentence lines of a single document.
    pub fn extract_document(&mut self, text: &str, url: &str) -> Result<Vec<String>, Error> {
        if text.is_empty() {
            return Ok(Vec::new());
        }

        let url = url.trim();
        let lines: Vec<String> = self
            .splitter
            .split(text)?
            .iter()
            .map(|sentence| sentence.trim())
            .filter(|sentence| !sentence.is_empty())
            .filter(|sentence| self.prune.detect(*sentence))
            .map(|sentence| format!("{}\t{}", url, sentence))
            .collect();

        self.documents += 1;
        self.sentences += lines.len();
        Ok(lines)
    }

    /// Lazily extract sentence lines from `(text, url)` documents.
    pub fn extract<I, T, U>(&mut self, documents: I) -> Sentences<'_, S, I::IntoIter>
    where
        I: IntoIterator<Item = Result<(T, U), Error>>,
        T: AsRef<str>,
        U: AsRef<str>,
    {
        Sentences {
            extractor: self,
            documents: documents.into_iter(),
            pending: Vec::new().into_iter(),
        }
    }

    /// Number of non-empty documents processed so far.
    pub fn documents(&self) -> usize {
        self.documents
    }

    /// Number of sentence lines produced so far.
    pub fn sentences(&self) -> usize {
        self.sentences
    }
}

/// Iterator over the sentence lines of a document stream. See [Extractor::extract].
pub struct Sentences<'a, S, I> {
    extractor: &'a mut Extractor<S>,
    documents: I,
    pending: IntoIter<String>,
}

impl<'a, S, I, T, U> Iterator for Sentences<'a, S, I>
where
    S: SentenceSplitter,
    I: Iterator<Item = Result<(T, U), Error>>,
    T: AsRef<str>,
    U: AsRef<str>,
{
    type Item = Result<String, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(line) = self.pending.next() {
                return Some(Ok(line));
            }

            let (text, url) = match self.documents.next()? {
                Ok(document) => document,
                Err(e) => return Some(Err(e)),
            };

            match self
                .extractor
                .extract_document(text.as_ref(), url.as_ref())
            {
                Ok(lines) => self.pending = lines.into_iter(),
                Err(e) => return Some(Err(e)),
            }
        }
    }
}
