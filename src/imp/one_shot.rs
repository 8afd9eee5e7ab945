use std::iter::Fuse;

use crate::{Result, Sink, Source};

/// A [`Source`] over an iterator, consumed as the runs go.
///
/// A run pulls items until the iterator is exhausted or the pipeline stops
/// early (e.g. [`take`](crate::ops::take)). Items not pulled stay for the next
/// run; once the iterator is exhausted, every run yields an empty result.
///
/// This `struct` is created by [`from_iter()`](crate::from_iter).
///
/// # Examples
///
/// ```
/// use transducer::{from_iter, ops};
///
/// let mut letters = from_iter("abcde".chars());
///
/// assert_eq!(letters.run(ops::take(2))?, ['a', 'b']);
/// assert_eq!(letters.collect()?, ['c', 'd', 'e']);
/// assert!(letters.collect()?.is_empty());
/// # Ok::<(), transducer::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct OneShot<I> {
    iter: Fuse<I>,
}

impl<I: Iterator> OneShot<I> {
    /// Creates a source over the remaining items of `iter`.
    pub fn new(iter: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            iter: iter.into_iter().fuse(),
        }
    }
}

impl<I: Iterator> Source for OneShot<I> {
    type Item = I::Item;

    fn feed<S: Sink<I::Item>>(&mut self, sink: &mut S) -> Result<()> {
        if sink.break_hint() {
            return Ok(());
        }

        // Peeking would cost an item of the caller's iterator, so only
        // report exhaustion when the iterator says so for free.
        if self.iter.size_hint().1 == Some(0) {
            tracing::trace!("one-shot source is already drained");
        }

        sink.push_many(self.iter.by_ref()).map(drop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Operator, ops};

    #[test]
    fn stops_pulling_when_the_sink_stops() {
        let mut pulled = 0;
        let mut source = OneShot::new((1..=5).inspect(|_| pulled += 1));

        let mut sink = ops::take(2).bind(Vec::new());
        source.feed(&mut sink).unwrap();
        assert_eq!(sink.complete().unwrap(), [1, 2]);

        let mut rest = Vec::new();
        source.feed(&mut rest).unwrap();
        assert_eq!(rest, [3, 4, 5]);

        drop(source);
        assert_eq!(pulled, 5);
    }

    #[test]
    fn pulls_nothing_for_a_closed_sink() {
        let mut source = OneShot::new([1, 2, 3]);

        let mut sink = ops::take(0).bind(Vec::new());
        source.feed(&mut sink).unwrap();
        assert!(sink.complete().unwrap().is_empty());

        let mut rest = Vec::new();
        source.feed(&mut rest).unwrap();
        assert_eq!(rest, [1, 2, 3]);
    }
}
