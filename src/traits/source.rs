use crate::{Result, Sink};

/// A finite supply of items that can be pushed into a [`Sink`].
///
/// A source is the "producing half" of a pipeline. It is owned by a
/// [`Transducer`](crate::Transducer) and fed into a freshly bound chain of
/// stages on every run.
///
/// The crate provides three:
///
/// - [`Reusable`](crate::Reusable): an owned collection, cloned on every run;
/// - [`OneShot`](crate::OneShot): an iterator, drained across runs;
/// - [`Fallible`](crate::Fallible): an iterator of `Result`s, drained across runs.
///
/// # Examples
///
/// ```
/// use transducer::{ops, Result, Sink, Source, Transducer};
///
/// /// Counts down from `n` to 1.
/// struct Countdown(u32);
///
/// impl Source for Countdown {
///     type Item = u32;
///
///     fn feed<S: Sink<u32>>(&mut self, sink: &mut S) -> Result<()> {
///         sink.push_many((1..=self.0).rev()).map(drop)
///     }
/// }
///
/// let mut countdown = Transducer::new(Countdown(3));
/// assert_eq!(countdown.collect()?, [3, 2, 1]);
/// assert_eq!(countdown.run(ops::map(|n: u32| n * 10))?, [30, 20, 10]);
/// # Ok::<(), transducer::Error>(())
/// ```
pub trait Source {
    /// The type of the items this source produces.
    type Item;

    /// Pushes items into `sink` until the source runs dry or the sink stops.
    ///
    /// Must not call [`Sink::complete`]; the caller does. Implementors should
    /// check [`Sink::break_hint`] before producing the first item, which
    /// [`Sink::push_many`] does on its own.
    ///
    /// Any failure, from producing an item or from the sink, is returned as-is.
    fn feed<S: Sink<Self::Item>>(&mut self, sink: &mut S) -> Result<()>;
}
