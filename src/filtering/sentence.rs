//! sentence-level filtering
use std::str::FromStr;

use super::Filter;

/// Rejects segments that are a single token mostly made of ASCII digits and punctuation
/// (page numbers, dates, separators...).
///
/// A single-token segment is rejected if more than half (rounded down) of its chars
/// are ASCII digits or ASCII punctuation.
#[derive(Debug, Default)]
pub struct DigitsPunctuation;

impl Filter<&str> for DigitsPunctuation {
    fn detect(&self, segment: &str) -> bool {
        let mut tokens = segment.split_whitespace();
        match (tokens.next(), tokens.next()) {
            (Some(token), None) => {
                let noisy = token
                    .chars()
                    .filter(|c| c.is_ascii_digit() || c.is_ascii_punctuation())
                    .count();
                noisy <= token.chars().count() / 2
            }
            _ => true,
        }
    }
}

/// Unit used to measure sentences when pruning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PruneType {
    Words,
    Chars,
}

impl FromStr for PruneType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "words" => Ok(PruneType::Words),
            "chars" => Ok(PruneType::Chars),
            other => Err(format!("unknown prune type {:?} (words, chars)", other)),
        }
    }
}

/// Rejects sentences longer than a threshold, measured in whitespace-separated words or in chars.
///
/// Default is 80 words.
#[derive(Debug)]
pub struct Prune {
    threshold: usize,
    kind: PruneType,
}

impl Prune {
    pub fn new(threshold: usize, kind: PruneType) -> Self {
        Self { threshold, kind }
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    pub fn kind(&self) -> PruneType {
        self.kind
    }
}

impl Default for Prune {
    fn default() -> Self {
        Self {
            threshold: 80,
            kind: PruneType::Words,
        }
    }
}

impl Filter<&str> for Prune {
    fn detect(&self, sentence: &str) -> bool {
        let length = match self.kind {
            PruneType::Words => sentence.split_whitespace().count(),
            PruneType::Chars => sentence.chars().count(),
        };
        length <= self.threshold
    }
}

#[cfg(test)]
mod tests {
    use super::{DigitsPunctuation, Filter, Prune, PruneType};

    #[test]
    fn digits_punctuation() {
        let f = DigitsPunctuation::default();
        assert_eq!(f.detect("12/04/2021"), false);
        assert_eq!(f.detect("-----"), false);
        assert_eq!(f.detect("  42  "), false);
        // 2 noisy chars out of 4: not more than half
        assert_eq!(f.detect("ab12"), true);
        // 3 out of 5, 5/2 = 2
        assert_eq!(f.detect("ab123"), false);
        assert_eq!(f.detect("Hello"), true);
        assert_eq!(f.detect("1 2 3"), true);
        assert_eq!(f.detect("Chapter 12."), true);
        assert_eq!(f.detect(""), true);
    }

    #[test]
    fn digits_punctuation_non_ascii() {
        let f = DigitsPunctuation::default();
        // full-width digits and non-ascii punctuation are not counted
        assert_eq!(f.detect("１２３"), true);
        assert_eq!(f.detect("«»…"), true);
    }

    #[test]
    fn prune_default() {
        let f = Prune::default();
        assert_eq!(f.threshold(), 80);
        assert_eq!(f.kind(), PruneType::Words);

        let valid = vec!["word"; 80].join(" ");
        let invalid = vec!["word"; 81].join(" ");
        assert_eq!(f.detect(valid.as_str()), true);
        assert_eq!(f.detect(invalid.as_str()), false);
    }

    #[test]
    fn prune_chars() {
        let f = Prune::new(5, PruneType::Chars);
        assert_eq!(f.detect("ééééé"), true);
        assert_eq!(f.detect("a b c"), true);
        assert_eq!(f.detect("abcdef"), false);
    }

    #[test]
    fn prune_type_from_str() {
        assert_eq!("words".parse::<PruneType>(), Ok(PruneType::Words));
        assert_eq!("chars".parse::<PruneType>(), Ok(PruneType::Chars));
        assert!("bytes".parse::<PruneType>().is_err());
    }
}
