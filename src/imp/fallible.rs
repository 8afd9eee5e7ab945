use std::{iter::Fuse, ops::ControlFlow};

use crate::{BoxError, Error, Result, Sink, Source};

/// A [`Source`] over an iterator of `Result`s, consumed as the runs go.
///
/// `Ok` items are pushed downstream. The first `Err` item fails the run with
/// [`Error::Source`], wrapping the original error. Items after the failing one
/// stay in the iterator.
///
/// This `struct` is created by [`try_from_iter()`](crate::try_from_iter).
///
/// # Examples
///
/// ```
/// use transducer::try_from_iter;
///
/// let lines = ["1", "2", "oops", "4"].map(|line| line.parse::<u8>());
/// let mut numbers = try_from_iter(lines);
///
/// let err = numbers.collect().unwrap_err();
/// assert!(err.is_source());
/// assert_eq!(err.to_string(), "invalid digit found in string");
///
/// assert_eq!(numbers.collect()?, [4]);
/// # Ok::<(), transducer::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Fallible<I> {
    iter: Fuse<I>,
}

impl<I> Fallible<I> {
    /// Creates a source over the remaining items of `iter`.
    pub fn new(iter: impl IntoIterator<IntoIter = I>) -> Self
    where
        I: Iterator,
    {
        Self {
            iter: iter.into_iter().fuse(),
        }
    }
}

impl<T, E, I> Source for Fallible<I>
where
    I: Iterator<Item = Result<T, E>>,
    E: Into<BoxError>,
{
    type Item = T;

    fn feed<S: Sink<T>>(&mut self, sink: &mut S) -> Result<()> {
        if sink.break_hint() {
            return Ok(());
        }

        for item in self.iter.by_ref() {
            let item = item.map_err(Error::from_source)?;
            if let ControlFlow::Break(()) = sink.push(item)? {
                break;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fails_at_the_first_error() {
        let items: [Result<i32, &str>; 3] = [Ok(1), Err("bad"), Ok(3)];
        let mut source = Fallible::new(items);

        let mut sink = Vec::new();
        let err = source.feed(&mut sink).unwrap_err();
        assert!(err.is_source());
        assert_eq!(err.to_string(), "bad");
        // The sink saw what came before the failure; the run discards it.
        assert_eq!(sink, [1]);

        let mut rest = Vec::new();
        source.feed(&mut rest).unwrap();
        assert_eq!(rest, [3]);
    }
}
