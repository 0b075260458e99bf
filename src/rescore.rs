/*! Structural rescoring of alignment candidates

Candidate records come from a reverse index, one line per source document:

```text
<source id>\t<candidate id>:<score>\t<candidate id>:<score>...
```

Each candidate gets the normalized edit distance between the link signatures of
the source and the candidate appended:

```text
<source id>\t<candidate id>:<score>:<distance>\t...
```

Records without candidates are dropped.
!*/
use std::str::FromStr;

use crate::{
    error::Error,
    index::{DocId, DocumentIndex},
};

/// A candidate token. The token is kept verbatim so that previous annotations are not altered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    id: DocId,
    token: String,
}

impl Candidate {
    pub fn id(&self) -> DocId {
        self.id
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

impl FromStr for Candidate {
    type Err = Error;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let id = token
            .split_once(':')
            .and_then(|(id, _)| id.parse().ok())
            .ok_or_else(|| Error::MalformedRecord(token.to_string()))?;

        Ok(Self {
            id,
            token: token.to_string(),
        })
    }
}

/// A source document and its (non-empty) candidate list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateRecord {
    source: DocId,
    source_field: String,
    candidates: Vec<Candidate>,
}

impl CandidateRecord {
    /// Parse a reverse index line.
    ///
    /// Returns `Ok(None)` when the line holds no candidate.
    pub fn parse(line: &str) -> Result<Option<Self>, Error> {
        let mut fields = line.trim().split('\t');
        let source_field = fields.next().unwrap_or_default();
        let candidates = fields
            .map(Candidate::from_str)
            .collect::<Result<Vec<_>, _>>()?;

        if candidates.is_empty() {
            return Ok(None);
        }

        let source = source_field
            .parse()
            .map_err(|_| Error::MalformedRecord(line.to_string()))?;

        Ok(Some(Self {
            source,
            source_field: source_field.to_string(),
            candidates,
        }))
    }

    pub fn source(&self) -> DocId {
        self.source
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }
}

/// Levenshtein distance between two signatures, divided by the length of the longest one.
///
/// Lengths are counted in chars. If any of the signatures is empty, the distance is `0.0`.
pub fn normalized_distance(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let longest = a.chars().count().max(b.chars().count());
    strsim::levenshtein(a, b) as f64 / longest as f64
}

/// Render a score as the shortest decimal string that reads back to the same value.
///
/// Integral values keep a `.0` fraction and small values use a two-digit exponent
/// (`0.0`, `1.0`, `0.25`, `5e-05`), which is what downstream tools expect.
pub fn render_score(score: f64) -> String {
    let repr = format!("{:?}", score);
    match repr.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => repr,
    }
}

/// Annotate every candidate of a record with its normalized distance to the source.
pub fn rescore(record: &CandidateRecord, index: &DocumentIndex) -> Result<String, Error> {
    let source = index.signature(record.source)?;

    let mut line = record.source_field.clone();
    for candidate in &record.candidates {
        let signature = index.signature(candidate.id)?;
        let distance = normalized_distance(source, signature);

        line.push('\t');
        line.push_str(&candidate.token);
        line.push(':');
        line.push_str(&render_score(distance));
    }

    Ok(line)
}

/// Lazily rescores candidate records.
///
/// Yields one line per record with at least one candidate.
/// Errors (unknown documents, malformed records) are yielded as they are met,
/// lines yielded before an error stay valid.
pub struct Rescorer<'a, I> {
    records: I,
    index: &'a DocumentIndex,
    rescored: usize,
    skipped: usize,
}

impl<'a, I> Rescorer<'a, I> {
    pub fn new<R>(records: R, index: &'a DocumentIndex) -> Self
    where
        R: IntoIterator<IntoIter = I>,
    {
        Self {
            records: records.into_iter(),
            index,
            rescored: 0,
            skipped: 0,
        }
    }

    /// Number of records rescored so far.
    pub fn rescored(&self) -> usize {
        self.rescored
    }

    /// Number of records without candidates met so far.
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

impl<'a, I, S> Iterator for Rescorer<'a, I>
where
    I: Iterator<Item = Result<S, Error>>,
    S: AsRef<str>,
{
    type Item = Result<String, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.records.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(e)),
            };

            match CandidateRecord::parse(line.as_ref()) {
                Ok(Some(record)) => {
                    self.rescored += 1;
                    return Some(rescore(&record, self.index));
                }
                Ok(None) => {
                    self.skipped += 1;
                }
                Err(e) => return Some(Err(e)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index(docs: &[(DocId, &str)]) -> DocumentIndex {
        let mut index = DocumentIndex::new();
        for (id, signature) in docs {
            index.insert(*id, signature.to_string());
        }
        index
    }

    fn run(lines: &[&str], index: &DocumentIndex) -> Vec<Result<String, Error>> {
        let lines: Vec<Result<String, Error>> = lines.iter().map(|l| Ok(l.to_string())).collect();
        Rescorer::new(lines, index).collect()
    }

    #[test]
    fn example_record() {
        let index = index(&[(5, "abc"), (10, "abc"), (11, "xyz")]);
        let out = run(&["5\t10:0.2\t11:0.7"], &index);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].as_ref().unwrap(), "5\t10:0.2:0.0\t11:0.7:1.0");
    }

    #[test]
    fn no_candidates() {
        let index = index(&[(3, "abc")]);
        let lines = vec![Ok::<_, Error>("3".to_string()), Ok("3\t".to_string()), Ok("".to_string())];
        let mut rescorer = Rescorer::new(lines, &index);
        assert!(rescorer.next().is_none());
        assert_eq!(rescorer.skipped(), 3);
        assert_eq!(rescorer.rescored(), 0);
    }

    #[test]
    fn keeps_previous_annotations() {
        let index = index(&[(1, "abcd"), (2, "abcf")]);
        let out = run(&["1\t2:0.5:0.1\n"], &index);
        assert_eq!(out[0].as_ref().unwrap(), "1\t2:0.5:0.1:0.25");
    }

    #[test]
    fn self_distance() {
        for s in ["a", "/index.html/contact", "ñandú/ü"] {
            assert_eq!(normalized_distance(s, s), 0.0);
        }
    }

    #[test]
    fn empty_signatures() {
        assert_eq!(normalized_distance("", ""), 0.0);
        assert_eq!(normalized_distance("", "/a/b"), 0.0);
        assert_eq!(normalized_distance("/a/b", ""), 0.0);
    }

    #[test]
    fn symmetric_and_bounded() {
        let sigs = ["/a", "/a/b/c", "/x/y", "ab", "ba", "/é/ü", "zzzzzzzzzzzz"];
        for a in sigs {
            for b in sigs {
                let d = normalized_distance(a, b);
                assert_eq!(d, normalized_distance(b, a));
                assert!((0.0..=1.0).contains(&d), "{} {} -> {}", a, b, d);
            }
        }
    }

    #[test]
    fn counts_chars() {
        // one substitution over three chars, not over bytes
        assert_eq!(normalized_distance("éaa", "baa"), 1.0 / 3.0);
    }

    #[test]
    fn render() {
        assert_eq!(render_score(0.0), "0.0");
        assert_eq!(render_score(1.0), "1.0");
        assert_eq!(render_score(0.25), "0.25");
        assert_eq!(render_score(1.0 / 3.0), "0.3333333333333333");
        assert_eq!(render_score(0.00005), "5e-05");
        assert_eq!(render_score(0.000125), "0.000125");
    }

    #[test]
    fn unknown_candidate() {
        let index = index(&[(1, "a")]);
        let out = run(&["1\t1:0.3", "1\t2:0.3", "1\t1:0.3"], &index);
        assert_eq!(out[0].as_ref().unwrap(), "1\t1:0.3:0.0");
        assert!(matches!(out[1], Err(Error::UnknownDocument(2))));
    }

    #[test]
    fn unknown_source() {
        let index = index(&[(1, "a")]);
        let out = run(&["7\t1:0.3"], &index);
        assert!(matches!(out[0], Err(Error::UnknownDocument(7))));
    }

    #[test]
    fn malformed() {
        let index = index(&[(1, "a")]);
        for line in ["1\t1", "1\tx:0.3", "x\t1:0.3", "1\t1:0.3\t\t1:0.2", "1\t-1:0.3"] {
            let out = run(&[line], &index);
            assert!(
                matches!(out[0], Err(Error::MalformedRecord(_))),
                "{:?}",
                line
            );
        }
    }

    #[test]
    fn parse_record() {
        let record = CandidateRecord::parse("4\t8:0.1\t9:0.2").unwrap().unwrap();
        assert_eq!(record.source(), 4);
        let ids: Vec<DocId> = record.candidates().iter().map(Candidate::id).collect();
        assert_eq!(ids, vec![8, 9]);
        assert_eq!(record.candidates()[1].token(), "9:0.2");
    }
}
