use std::ops::ControlFlow;

use crate::Result;

/// Receives items one at a time and produces a final output.
///
/// A sink is the "receiving half" of a pipeline. Every operator stage is a sink
/// that forwards (possibly transformed) items to the sink after it, and the last
/// sink of a run is the accumulator, a plain [`Vec`].
///
/// This trait requires two core methods:
///
/// - [`push`](Sink::push): receives an item and tells whether the sink still
///   accepts items *after* this one.
/// - [`complete`](Sink::complete): flushes whatever the sink holds back and
///   returns the output.
///
/// # Examples
///
/// A sink that keeps only the longest word it has seen:
///
/// ```
/// use std::ops::ControlFlow;
/// use transducer::{Result, Sink};
///
/// #[derive(Default)]
/// struct Longest(String);
///
/// impl Sink<String> for Longest {
///     type Output = String;
///
///     fn push(&mut self, word: String) -> Result<ControlFlow<()>> {
///         if word.len() > self.0.len() {
///             self.0 = word;
///         }
///
///         Ok(ControlFlow::Continue(()))
///     }
///
///     fn complete(self) -> Result<String> {
///         Ok(self.0)
///     }
/// }
///
/// let mut sink = Longest::default();
/// let _ = sink.push_many("a quick brown fox".split(' ').map(String::from))?;
/// assert_eq!(sink.complete()?, "quick");
/// # Ok::<(), transducer::Error>(())
/// ```
pub trait Sink<T>: Sized {
    /// The result this sink yields on [`complete`](Sink::complete).
    type Output;

    /// Receives an item.
    ///
    /// Returns [`Continue(())`] if the sink still accepts items, or
    /// [`Break(())`] if it accepts no more from now on. Once a sink has answered
    /// [`Break(())`], any further item is dropped and answered with
    /// [`Break(())`] again.
    ///
    /// An `Err` aborts the run. The caller must not push anything else, and
    /// must not call [`complete`](Sink::complete).
    ///
    /// [`Continue(())`]: ControlFlow::Continue
    /// [`Break(())`]: ControlFlow::Break
    fn push(&mut self, item: T) -> Result<ControlFlow<()>>;

    /// Consumes the sink, flushes anything held back, and returns the output.
    ///
    /// A stage that only emits at the end (like [`fold`](crate::ops::fold))
    /// pushes its value downstream here, then completes the downstream sink.
    fn complete(self) -> Result<Self::Output>;

    /// Returns `true` if the sink already refuses items.
    ///
    /// Sources check this before pulling the first item, so a sink that will
    /// never accept anything (e.g. `take(0)`) does not cost an item.
    #[inline]
    fn break_hint(&self) -> bool {
        false
    }

    /// Receives every item of an iterator, stopping at the first
    /// [`Break(())`](ControlFlow::Break).
    ///
    /// No item is pulled from the iterator after the sink stops, so the
    /// remainder of a borrowed iterator can still be used.
    ///
    /// # Examples
    ///
    /// ```
    /// use transducer::{ops, Operator, Sink};
    ///
    /// let mut items = 1..=10;
    /// let mut sink = ops::take(3).bind(Vec::new());
    ///
    /// assert!(sink.push_many(&mut items)?.is_break());
    /// assert_eq!(sink.complete()?, [1, 2, 3]);
    /// assert_eq!(items.next(), Some(4));
    /// # Ok::<(), transducer::Error>(())
    /// ```
    fn push_many(&mut self, items: impl IntoIterator<Item = T>) -> Result<ControlFlow<()>> {
        if self.break_hint() {
            return Ok(ControlFlow::Break(()));
        }

        for item in items {
            if self.push(item)?.is_break() {
                return Ok(ControlFlow::Break(()));
            }
        }

        Ok(ControlFlow::Continue(()))
    }
}

/// The accumulator: collects every item in arrival order.
impl<T> Sink<T> for Vec<T> {
    type Output = Self;

    #[inline]
    fn push(&mut self, item: T) -> Result<ControlFlow<()>> {
        Vec::push(self, item);
        Ok(ControlFlow::Continue(()))
    }

    #[inline]
    fn complete(self) -> Result<Self::Output> {
        Ok(self)
    }

    fn push_many(&mut self, items: impl IntoIterator<Item = T>) -> Result<ControlFlow<()>> {
        self.extend(items);
        Ok(ControlFlow::Continue(()))
    }
}
