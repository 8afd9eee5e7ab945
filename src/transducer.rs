use std::{any::type_name, fmt::Debug};

use crate::{
    BoxError, Fallible, OneShot, Operator, Result, Reusable, Sink, Source, pipeline::Pipeline,
};

/// Binds a finite [`Source`] and runs chains of operators over it.
///
/// Every run is synchronous and eager: it returns once the source is
/// exhausted (or a stage has stopped it) and every stage has completed. The
/// result is always a `Vec`, in the order the last stage emitted it, even when
/// the chain reduces everything to one value.
///
/// Any failure from the source or from an operator is returned as-is, with no
/// partial result.
///
/// # Examples
///
/// ```
/// use transducer::{ops, transducer};
///
/// let mut numbers = transducer([1, 2, 3, 4]);
///
/// // Zero operators.
/// assert_eq!(numbers.collect()?, [1, 2, 3, 4]);
///
/// // A tuple of operators, applied from left to right.
/// let evens_doubled = numbers.run((ops::filter(|x: &i32| x % 2 == 0), ops::map(|x: i32| x * 2)))?;
/// assert_eq!(evens_doubled, [4, 8]);
///
/// // The builder, which infers closure parameter types.
/// let sum = numbers.pipeline().fold(0, |sum, x| *sum += x).run()?;
/// assert_eq!(sum, [10]);
/// # Ok::<(), transducer::Error>(())
/// ```
#[derive(Clone)]
pub struct Transducer<S> {
    source: S,
}

impl<S: Source> Transducer<S> {
    /// Creates a transducer over `source`.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Applies `op` to the source and returns everything it emits.
    ///
    /// `op` may be a single operator, `()` for none, a tuple of up to nine
    /// operators (each consuming what the previous one emits), nested tuples
    /// or [`then`](Operator::then) chains for more, or a
    /// [`Stages`](crate::Stages) list built at runtime.
    ///
    /// # Examples
    ///
    /// ```
    /// use transducer::{ops, transducer};
    ///
    /// let result = transducer(["a", "bb", "ccc"]).run((
    ///     ops::map(|s: &str| s.len()),
    ///     ops::filter(|n: &usize| *n > 1),
    /// ))?;
    ///
    /// assert_eq!(result, [2, 3]);
    /// # Ok::<(), transducer::Error>(())
    /// ```
    pub fn run<O: Operator<S::Item>>(&mut self, op: O) -> Result<Vec<O::Out>> {
        execute(&mut self.source, op)
    }

    /// Returns the items of the source unchanged.
    ///
    /// This is a run with zero operators.
    pub fn collect(&mut self) -> Result<Vec<S::Item>> {
        self.run(())
    }

    /// Starts a typed chain of operators over the source.
    ///
    /// Unlike [`run`](Transducer::run), closures given to the builder need no
    /// parameter annotations.
    pub fn pipeline(&mut self) -> Pipeline<'_, S, ()> {
        Pipeline::new(&mut self.source)
    }

    /// Returns a reference to the source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Returns the source.
    pub fn into_source(self) -> S {
        self.source
    }
}

impl<S: Debug> Debug for Transducer<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transducer")
            .field("source", &self.source)
            .finish()
    }
}

/// Creates a transducer over an owned collection.
///
/// The items are gathered once. Every run works on clones of them, so the same
/// transducer can run any number of times.
///
/// # Examples
///
/// ```
/// use transducer::{ops, transducer};
///
/// let mut words = transducer(vec!["apple", "kiwi", "banana"]);
///
/// assert_eq!(words.run(ops::filter(|w: &&str| w.len() > 4))?, ["apple", "banana"]);
/// assert_eq!(words.run(ops::count())?, [3]);
/// # Ok::<(), transducer::Error>(())
/// ```
pub fn transducer<T: Clone>(items: impl IntoIterator<Item = T>) -> Transducer<Reusable<T>> {
    Transducer::new(Reusable::new(items))
}

/// Creates a transducer over an iterator, consumed as the runs go.
///
/// A run drains the iterator, or stops pulling as soon as the chain says it is
/// done. Running again picks up where the last run stopped; once the iterator
/// is exhausted, every run returns an empty `Vec`.
///
/// # Examples
///
/// ```
/// use transducer::{from_iter, ops};
///
/// let mut squares = from_iter((1..=3).map(|x| x * x));
///
/// assert_eq!(squares.collect()?, [1, 4, 9]);
/// assert!(squares.collect()?.is_empty());
/// # Ok::<(), transducer::Error>(())
/// ```
pub fn from_iter<I: IntoIterator>(iter: I) -> Transducer<OneShot<I::IntoIter>> {
    Transducer::new(OneShot::new(iter))
}

/// Creates a transducer over an iterator of `Result`s, consumed as the runs go.
///
/// The first `Err` item fails the run with
/// [`Error::Source`](crate::Error::Source), wrapping the original error.
pub fn try_from_iter<T, E, I>(iter: I) -> Transducer<Fallible<I::IntoIter>>
where
    I: IntoIterator<Item = std::result::Result<T, E>>,
    E: Into<BoxError>,
{
    Transducer::new(Fallible::new(iter))
}

/// Binds `op` to a fresh accumulator, feeds the source through it, and
/// completes it.
pub(crate) fn execute<S, O>(source: &mut S, op: O) -> Result<Vec<O::Out>>
where
    S: Source,
    O: Operator<S::Item>,
{
    let _span = tracing::trace_span!("transducer.run", source = type_name::<S>()).entered();

    let mut stage = op.bind(Vec::new());
    let outcome = source.feed(&mut stage).and_then(|()| stage.complete());

    match &outcome {
        Ok(items) => tracing::trace!(emitted = items.len(), "run completed"),
        Err(err) => tracing::debug!(error = %err, "run failed"),
    }

    outcome
}
