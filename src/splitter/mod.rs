/*! Sentence splitting.

The actual splitting is delegated to an external tool, seen as a [LineTransform]
(write a line, read lines back). [Process] provides it over a child process.

[SentenceSplitter] is implemented by:
- [Tokenizer], which drives a [LineTransform],
- [Newlines], for text that is already one sentence per line.

!*/
mod tokenizer;
mod transform;

pub use tokenizer::{Newlines, SentenceSplitter, Tokenizer, PARAGRAPH_MARKER};
pub use transform::{LineTransform, Process};
