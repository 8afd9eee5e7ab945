//! Ready-made operators.
//!
//! Each function builds an [`Operator`](crate::Operator) to pass to
//! [`Transducer::run()`](crate::Transducer::run), alone or in a tuple, or to
//! chain with [`Operator::then()`](crate::Operator::then).
//!
//! Closures passed here are type-checked before the operator meets its input
//! type, so annotate their parameters (`|x: i32| ...`). The
//! [`Pipeline`](crate::Pipeline) builder has the same operators as methods and
//! infers the parameter types for you.
//!
//! # Examples
//!
//! ```
//! use transducer::{ops, transducer};
//!
//! let result = transducer([1, 2, 3, 4, 5]).run((
//!     ops::filter(|x: &i32| x % 2 == 1),
//!     ops::map(|x: i32| x * x),
//!     ops::fold(0, |sum: &mut i32, x: i32| *sum += x),
//! ))?;
//!
//! assert_eq!(result, [35]);
//! # Ok::<(), transducer::Error>(())
//! ```

#[cfg(feature = "itertools")]
use crate::MinMax;
use crate::{
    Count, Filter, FilterMap, FlatMap, Fold, Inspect, Last, Map, Reduce, Scan, Skip, Take,
    TakeWhile, TryMap,
};

/// Emits `f(x)` for each item `x`.
///
/// ```
/// use transducer::{ops, transducer};
///
/// assert_eq!(transducer([1, 2, 3]).run(ops::map(|x: i32| x * 2))?, [2, 4, 6]);
/// # Ok::<(), transducer::Error>(())
/// ```
#[inline]
pub fn map<F>(f: F) -> Map<F> {
    Map::new(f)
}

/// Emits the items for which `pred` returns `true`.
///
/// ```
/// use transducer::{ops, transducer};
///
/// assert_eq!(transducer([1, 2, 3, 4]).run(ops::filter(|x: &i32| x % 2 == 0))?, [2, 4]);
/// # Ok::<(), transducer::Error>(())
/// ```
#[inline]
pub fn filter<F>(pred: F) -> Filter<F> {
    Filter::new(pred)
}

/// Emits `y` for each item `x` where `f(x)` returns `Some(y)`.
#[inline]
pub fn filter_map<F>(f: F) -> FilterMap<F> {
    FilterMap::new(f)
}

/// Emits `y` for each item `x` where `f(x)` returns `Ok(y)`, and fails the
/// run with the first `Err`.
#[inline]
pub fn try_map<F>(f: F) -> TryMap<F> {
    TryMap::new(f)
}

/// Emits, in order, every item of the iterable `f(x)` for each item `x`.
///
/// ```
/// use transducer::{ops, transducer};
///
/// let result = transducer([1, 3]).run(ops::flat_map(|x: u8| x..x + 2))?;
/// assert_eq!(result, [1, 2, 3, 4]);
/// # Ok::<(), transducer::Error>(())
/// ```
#[inline]
pub fn flat_map<F>(f: F) -> FlatMap<F> {
    FlatMap::new(f)
}

/// Calls `f` on a reference to each item, then emits the item unchanged.
#[inline]
pub fn inspect<F>(f: F) -> Inspect<F> {
    Inspect::new(f)
}

/// Emits the first `n` items, then stops the source.
#[inline]
pub fn take(n: usize) -> Take {
    Take::new(n)
}

/// Drops the first `n` items and emits the rest.
#[inline]
pub fn skip(n: usize) -> Skip {
    Skip::new(n)
}

/// Emits items while `pred` holds, and stops the source at the first item
/// that fails it.
#[inline]
pub fn take_while<F>(pred: F) -> TakeWhile<F> {
    TakeWhile::new(pred)
}

/// Updates an accumulator, starting at `init`, with each item, and emits a
/// clone of the accumulator every time.
#[inline]
pub fn scan<A, F>(init: A, f: F) -> Scan<A, F> {
    Scan::new(init, f)
}

/// Updates an accumulator, starting at `init`, with each item, and emits it
/// once the source is done.
///
/// The result of the run is still a `Vec`:
///
/// ```
/// use transducer::{ops, transducer};
///
/// let sum = transducer([1, 2, 3]).run(ops::fold(0, |sum: &mut i32, x: i32| *sum += x))?;
/// assert_eq!(sum, [6]);
/// # Ok::<(), transducer::Error>(())
/// ```
#[inline]
pub fn fold<A, F>(init: A, f: F) -> Fold<A, F> {
    Fold::new(init, f)
}

/// Reduces the items with `f`, starting from the first one, and emits the
/// result once the source is done. Emits nothing for an empty source.
///
/// ```
/// use transducer::{from_iter, ops, transducer};
///
/// assert_eq!(transducer([1, 2, 3]).run(ops::reduce(|a: i32, b: i32| a + b))?, [6]);
/// assert!(from_iter(std::iter::empty::<i32>()).run(ops::reduce(|a: i32, b: i32| a + b))?.is_empty());
/// # Ok::<(), transducer::Error>(())
/// ```
#[inline]
pub fn reduce<F>(f: F) -> Reduce<F> {
    Reduce::new(f)
}

/// Emits the last item once the source is done. Emits nothing for an empty
/// source.
#[inline]
pub fn last() -> Last {
    Last::new()
}

/// Emits the number of items once the source is done.
#[inline]
pub fn count() -> Count {
    Count::new()
}

/// Emits the minimum and maximum items as an
/// [`itertools::MinMaxResult`] once the source is done.
///
/// ```
/// use itertools::MinMaxResult;
/// use transducer::{ops, transducer};
///
/// let result = transducer([3, 1, 4, 1, 5]).run(ops::min_max())?;
/// assert_eq!(result, [MinMaxResult::MinMax(1, 5)]);
/// # Ok::<(), transducer::Error>(())
/// ```
#[cfg(feature = "itertools")]
#[cfg_attr(docsrs, doc(cfg(feature = "itertools")))]
#[inline]
pub fn min_max() -> MinMax {
    MinMax::new()
}
