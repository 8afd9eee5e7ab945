use std::fmt::Debug;

#[cfg(feature = "itertools")]
use crate::MinMax;
use crate::{
    Count, Filter, FilterMap, FlatMap, Fold, Inspect, Last, Map, Operator, Reduce, Result, Scan,
    Skip, Source, Take, TakeWhile, Then, TryMap, transducer::execute,
};

/// A typed chain of operators over a borrowed source, built one stage at a
/// time.
///
/// Every method adds one stage and keeps the full type of the chain, so the
/// closures it takes are inferred from what the previous stage emits. There is
/// no limit on the number of stages.
///
/// This `struct` is created by [`Transducer::pipeline()`](crate::Transducer::pipeline).
///
/// # Examples
///
/// ```
/// use transducer::from_iter;
///
/// let lines = ["3 4", "x", "5"];
/// let mut source = from_iter(lines);
///
/// let total = source
///     .pipeline()
///     .flat_map(|line| line.split(' '))
///     .filter_map(|word| word.parse::<u32>().ok())
///     .map(|n| n * n)
///     .fold(0, |sum, n| *sum += n)
///     .run()?;
///
/// assert_eq!(total, [50]);
/// # Ok::<(), transducer::Error>(())
/// ```
pub struct Pipeline<'a, S, O> {
    source: &'a mut S,
    op: O,
}

impl<'a, S: Source> Pipeline<'a, S, ()> {
    pub(crate) fn new(source: &'a mut S) -> Self {
        Self { source, op: () }
    }
}

impl<'a, S: Source, O: Operator<S::Item>> Pipeline<'a, S, O> {
    /// Adds any operator as the next stage.
    ///
    /// # Examples
    ///
    /// ```
    /// use transducer::{ops, transducer};
    ///
    /// let result = transducer(1..=6)
    ///     .pipeline()
    ///     .pipe((ops::skip(1), ops::take(3)))
    ///     .map(|x| x * 10)
    ///     .run()?;
    ///
    /// assert_eq!(result, [20, 30, 40]);
    /// # Ok::<(), transducer::Error>(())
    /// ```
    pub fn pipe<P: Operator<O::Out>>(self, next: P) -> Pipeline<'a, S, Then<O, P>> {
        Pipeline {
            source: self.source,
            op: Then::new(self.op, next),
        }
    }

    /// Adds a [`map`](crate::ops::map) stage.
    pub fn map<B, F>(self, f: F) -> Pipeline<'a, S, Then<O, Map<F>>>
    where
        F: FnMut(O::Out) -> B,
    {
        self.pipe(Map::new(f))
    }

    /// Adds a [`filter`](crate::ops::filter) stage.
    pub fn filter<F>(self, pred: F) -> Pipeline<'a, S, Then<O, Filter<F>>>
    where
        F: FnMut(&O::Out) -> bool,
    {
        self.pipe(Filter::new(pred))
    }

    /// Adds a [`filter_map`](crate::ops::filter_map) stage.
    pub fn filter_map<B, F>(self, f: F) -> Pipeline<'a, S, Then<O, FilterMap<F>>>
    where
        F: FnMut(O::Out) -> Option<B>,
    {
        self.pipe(FilterMap::new(f))
    }

    /// Adds a [`try_map`](crate::ops::try_map) stage.
    ///
    /// # Examples
    ///
    /// ```
    /// use transducer::transducer;
    ///
    /// let err = transducer(["1", "2", "three"])
    ///     .pipeline()
    ///     .try_map(|s| s.parse::<u8>())
    ///     .run()
    ///     .unwrap_err();
    ///
    /// assert_eq!(err.to_string(), "invalid digit found in string");
    /// ```
    pub fn try_map<B, E, F>(self, f: F) -> Pipeline<'a, S, Then<O, TryMap<F>>>
    where
        F: FnMut(O::Out) -> Result<B, E>,
        E: Into<crate::BoxError>,
    {
        self.pipe(TryMap::new(f))
    }

    /// Adds a [`flat_map`](crate::ops::flat_map) stage.
    pub fn flat_map<U, F>(self, f: F) -> Pipeline<'a, S, Then<O, FlatMap<F>>>
    where
        F: FnMut(O::Out) -> U,
        U: IntoIterator,
    {
        self.pipe(FlatMap::new(f))
    }

    /// Adds an [`inspect`](crate::ops::inspect) stage.
    pub fn inspect<F>(self, f: F) -> Pipeline<'a, S, Then<O, Inspect<F>>>
    where
        F: FnMut(&O::Out),
    {
        self.pipe(Inspect::new(f))
    }

    /// Adds a [`take`](crate::ops::take) stage.
    pub fn take(self, n: usize) -> Pipeline<'a, S, Then<O, Take>> {
        self.pipe(Take::new(n))
    }

    /// Adds a [`skip`](crate::ops::skip) stage.
    pub fn skip(self, n: usize) -> Pipeline<'a, S, Then<O, Skip>> {
        self.pipe(Skip::new(n))
    }

    /// Adds a [`take_while`](crate::ops::take_while) stage.
    pub fn take_while<F>(self, pred: F) -> Pipeline<'a, S, Then<O, TakeWhile<F>>>
    where
        F: FnMut(&O::Out) -> bool,
    {
        self.pipe(TakeWhile::new(pred))
    }

    /// Adds a [`scan`](crate::ops::scan) stage.
    pub fn scan<A, F>(self, init: A, f: F) -> Pipeline<'a, S, Then<O, Scan<A, F>>>
    where
        A: Clone,
        F: FnMut(&mut A, O::Out),
    {
        self.pipe(Scan::new(init, f))
    }

    /// Adds a [`fold`](crate::ops::fold) stage.
    pub fn fold<A, F>(self, init: A, f: F) -> Pipeline<'a, S, Then<O, Fold<A, F>>>
    where
        F: FnMut(&mut A, O::Out),
    {
        self.pipe(Fold::new(init, f))
    }

    /// Adds a [`reduce`](crate::ops::reduce) stage.
    pub fn reduce<F>(self, f: F) -> Pipeline<'a, S, Then<O, Reduce<F>>>
    where
        F: FnMut(O::Out, O::Out) -> O::Out,
    {
        self.pipe(Reduce::new(f))
    }

    /// Adds a [`last`](crate::ops::last) stage.
    pub fn last(self) -> Pipeline<'a, S, Then<O, Last>> {
        self.pipe(Last::new())
    }

    /// Adds a [`count`](crate::ops::count) stage.
    pub fn count(self) -> Pipeline<'a, S, Then<O, Count>> {
        self.pipe(Count::new())
    }

    /// Adds a [`min_max`](crate::ops::min_max) stage.
    #[cfg(feature = "itertools")]
    #[cfg_attr(docsrs, doc(cfg(feature = "itertools")))]
    pub fn min_max(self) -> Pipeline<'a, S, Then<O, MinMax>>
    where
        O::Out: PartialOrd,
    {
        self.pipe(MinMax::new())
    }

    /// Runs the chain over the source and returns everything the last stage
    /// emitted.
    ///
    /// See [`Transducer::run()`](crate::Transducer::run).
    pub fn run(self) -> Result<Vec<O::Out>> {
        execute(self.source, self.op)
    }
}

impl<S, O: Debug> Debug for Pipeline<'_, S, O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("op", &self.op)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use crate::{Stages, from_iter, ops, transducer};

    #[test]
    fn empty_pipeline_returns_the_source() {
        assert_eq!(transducer([1, 2]).pipeline().run().unwrap(), [1, 2]);
    }

    #[test]
    fn stages_infer_their_types() {
        let mut people = transducer([("ann", 31), ("bob", 17), ("cid", 45)]);

        let adults = people
            .pipeline()
            .filter(|(_, age)| *age >= 18)
            .map(|(name, _)| name.to_uppercase())
            .run()
            .unwrap();

        assert_eq!(adults, ["ANN", "CID"]);
    }

    #[test]
    fn matches_the_tuple_form() {
        let mut numbers = transducer(0..20);

        let built = numbers
            .pipeline()
            .skip(2)
            .filter(|x| x % 3 != 0)
            .scan(0, |sum, x| *sum += x)
            .take_while(|sum| *sum < 60)
            .last()
            .run()
            .unwrap();

        let tupled = numbers
            .run((
                ops::skip(2),
                ops::filter(|x: &i32| x % 3 != 0),
                ops::scan(0, |sum: &mut i32, x: i32| *sum += x),
                ops::take_while(|sum: &i32| *sum < 60),
                ops::last(),
            ))
            .unwrap();

        assert_eq!(built, tupled);
        assert_eq!(built, [47]);
    }

    #[test]
    fn more_stages_than_a_tuple_holds() {
        let result = transducer([1_u64])
            .pipeline()
            .map(|x| x + 1)
            .map(|x| x * 2)
            .map(|x| x + 1)
            .map(|x| x * 2)
            .map(|x| x + 1)
            .map(|x| x * 2)
            .map(|x| x + 1)
            .map(|x| x * 2)
            .map(|x| x + 1)
            .map(|x| x * 2)
            .map(|x| x + 1)
            .run()
            .unwrap();

        assert_eq!(result, [95]);
    }

    #[test]
    fn accepts_runtime_stages() {
        let doublings = Stages::new((0..4).map(|_| ops::map(|x: u32| x * 2)));
        let result = from_iter([1_u32, 2])
            .pipeline()
            .pipe(doublings)
            .count()
            .run()
            .unwrap();

        assert_eq!(result, [2]);
    }

    #[test]
    fn reduce_and_flat_map() {
        let result = transducer(["ab", "", "cde"])
            .pipeline()
            .flat_map(|s| s.chars())
            .inspect(|c| assert!(c.is_ascii_lowercase()))
            .reduce(|a, b| a.max(b))
            .run()
            .unwrap();

        assert_eq!(result, ['e']);
    }
}
