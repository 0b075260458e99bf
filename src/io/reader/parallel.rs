//! Pairing of line-aligned streams.
//!
//! Document collections are stored as several files whose lines correspond 1:1
//! (line `n` of the HTML file belongs to line `n` of the URL file).
//! [Parallel] makes that contract explicit and fails when it is broken.
use crate::error::Error;

/// Zips two fallible streams together.
///
/// Yields an [Error::LengthMismatch] (and then stops) when one of the streams ends before the other.
/// Errors from the underlying streams are forwarded, and also stop iteration.
pub struct Parallel<A, B> {
    left: A,
    right: B,
    position: usize,
    done: bool,
}

impl<A, B> Parallel<A, B>
where
    A: Iterator,
    B: Iterator,
{
    pub fn new<IA, IB>(left: IA, right: IB) -> Self
    where
        IA: IntoIterator<IntoIter = A>,
        IB: IntoIterator<IntoIter = B>,
    {
        Self {
            left: left.into_iter(),
            right: right.into_iter(),
            position: 0,
            done: false,
        }
    }
}

impl<A, B, L, R> Iterator for Parallel<A, B>
where
    A: Iterator<Item = Result<L, Error>>,
    B: Iterator<Item = Result<R, Error>>,
{
    type Item = Result<(L, R), Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let item = match (self.left.next(), self.right.next()) {
            (None, None) => None,
            (Some(Ok(l)), Some(Ok(r))) => Some(Ok((l, r))),
            (Some(Err(e)), _) | (_, Some(Err(e))) => Some(Err(e)),
            (Some(Ok(_)), None) | (None, Some(Ok(_))) => Some(Err(Error::LengthMismatch {
                position: self.position,
            })),
        };

        match item {
            Some(Ok(_)) => self.position += 1,
            _ => self.done = true,
        }

        item
    }
}

#[cfg(test)]
mod tests {
    use super::Parallel;
    use crate::error::Error;

    fn ok(items: &[&str]) -> Vec<Result<String, Error>> {
        items.iter().map(|x| Ok(x.to_string())).collect()
    }

    #[test]
    fn same_length() {
        let pairs: Vec<(String, String)> = Parallel::new(ok(&["a", "b"]), ok(&["1", "2"]))
            .map(Result::unwrap)
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("a".to_string(), "1".to_string()),
                ("b".to_string(), "2".to_string())
            ]
        );
    }

    #[test]
    fn left_longer() {
        let mut p = Parallel::new(ok(&["a", "b", "c"]), ok(&["1", "2"]));
        assert!(p.next().unwrap().is_ok());
        assert!(p.next().unwrap().is_ok());
        assert!(matches!(
            p.next(),
            Some(Err(Error::LengthMismatch { position: 2 }))
        ));
        assert!(p.next().is_none());
    }

    #[test]
    fn right_longer() {
        let mut p = Parallel::new(ok(&[]), ok(&["1"]));
        assert!(matches!(
            p.next(),
            Some(Err(Error::LengthMismatch { position: 0 }))
        ));
        assert!(p.next().is_none());
    }

    #[test]
    fn forwards_errors() {
        let left = vec![Ok("a".to_string()), Err(Error::Custom("boom".to_string()))];
        let mut p = Parallel::new(left, ok(&["1", "2"]));
        assert!(p.next().unwrap().is_ok());
        assert!(matches!(p.next(), Some(Err(Error::Custom(_)))));
        assert!(p.next().is_none());
    }

    #[test]
    fn empty() {
        assert!(Parallel::new(ok(&[]), ok(&[])).next().is_none());
    }
}
