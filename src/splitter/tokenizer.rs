//! Sentence splitters.
//!
//! Both splitters normalize text the same way (blank lines are collapsed, surrounding
//! whitespace is removed) and drop segments rejected by [DigitsPunctuation].
use crate::{
    error::Error,
    filtering::{DigitsPunctuation, Filter},
};

use super::LineTransform;

/// Marker line emitted by the external splitter once a text has been processed.
pub const PARAGRAPH_MARKER: &str = "<P>";

pub trait SentenceSplitter {
    /// Split a document into sentences.
    fn split(&mut self, text: &str) -> Result<Vec<String>, Error>;
}

fn normalize(text: &str) -> String {
    text.replace("\n\n", "\n").trim().to_string()
}

fn keep(segments: &str, filter: &DigitsPunctuation) -> Vec<String> {
    segments
        .split('\n')
        .filter(|segment| filter.detect(*segment))
        .map(String::from)
        .collect()
}

/// Splitter backed by an external line transform (usually a [super::Process]).
///
/// The text is HTML-escaped and written as-is; segments are then read until
/// a [PARAGRAPH_MARKER] line, and unescaped.
pub struct Tokenizer<T> {
    transform: T,
    filter: DigitsPunctuation,
}

impl<T: LineTransform> Tokenizer<T> {
    pub fn new(transform: T) -> Self {
        Self {
            transform,
            filter: DigitsPunctuation::default(),
        }
    }
}

impl<T: LineTransform> SentenceSplitter for Tokenizer<T> {
    fn split(&mut self, text: &str) -> Result<Vec<String>, Error> {
        let text = normalize(text);
        self.transform
            .write_line(&html_escape::encode_quoted_attribute(&text))?;

        let mut segments = String::new();
        loop {
            let segment = self.transform.read_line()?.ok_or_else(|| {
                Error::Splitter(format!("output ended before {}", PARAGRAPH_MARKER))
            })?;
            let segment = segment.trim();
            trace!("segment: {}", segment);

            if segment == PARAGRAPH_MARKER {
                break;
            }
            if !segment.is_empty() {
                segments.push_str(segment);
                segments.push('\n');
            }
        }

        let segments = html_escape::decode_html_entities(&segments);
        Ok(keep(&segments, &self.filter))
    }
}

/// Splitter for already tokenized text: one sentence per line.
#[derive(Debug, Default)]
pub struct Newlines {
    filter: DigitsPunctuation,
}

impl SentenceSplitter for Newlines {
    fn split(&mut self, text: &str) -> Result<Vec<String>, Error> {
        Ok(keep(&normalize(text), &self.filter))
    }
}

impl<S: SentenceSplitter + ?Sized> SentenceSplitter for Box<S> {
    fn split(&mut self, text: &str) -> Result<Vec<String>, Error> {
        (**self).split(text)
    }
}
