/*! Filtering utilities

Filters operate on sentence level and implement [Filter]:
`detect` returns `true` for content that should be kept.

- [DigitsPunctuation] removes single-token segments made mostly of digits and punctuation.
- [Prune] removes sentences that are too long.
! */
mod filter;
mod sentence;

pub use filter::Filter;
pub use sentence::{DigitsPunctuation, Prune, PruneType};
