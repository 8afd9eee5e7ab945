use crate::{Result, Sink, Source};

/// A [`Source`] over an owned collection.
///
/// Every run pushes clones of the items, so running the same transducer twice
/// yields the same result.
///
/// This `struct` is created by [`transducer()`](crate::transducer).
///
/// # Examples
///
/// ```
/// use transducer::{ops, transducer};
///
/// let mut numbers = transducer([1, 2, 3]);
///
/// assert_eq!(numbers.run(ops::map(|x: i32| x * 2))?, [2, 4, 6]);
/// assert_eq!(numbers.run(ops::map(|x: i32| x * 2))?, [2, 4, 6]);
/// # Ok::<(), transducer::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reusable<T> {
    items: Box<[T]>,
}

impl<T> Reusable<T> {
    /// Creates a source over the items of `items`.
    pub fn new(items: impl IntoIterator<Item = T>) -> Self {
        Self {
            items: items.into_iter().collect(),
        }
    }

    /// Returns the items of this source.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T: Clone> Source for Reusable<T> {
    type Item = T;

    fn feed<S: Sink<T>>(&mut self, sink: &mut S) -> Result<()> {
        sink.push_many(self.items.iter().cloned()).map(drop)
    }
}

impl<T> From<Vec<T>> for Reusable<T> {
    fn from(items: Vec<T>) -> Self {
        Self {
            items: items.into_boxed_slice(),
        }
    }
}
