use std::{mem, ops::ControlFlow};

use itertools::MinMaxResult;

use crate::{Operator, Result, Sink};

/// An [`Operator`] that emits the minimum and maximum items as a
/// [`MinMaxResult`] when the source is done.
///
/// The value is emitted even for an empty source
/// ([`MinMaxResult::NoElements`]). Ties follow [`Itertools::minmax()`]:
/// the first minimum and the last maximum win.
///
/// This `struct` is created by [`ops::min_max()`](crate::ops::min_max) and
/// [`Pipeline::min_max()`](crate::Pipeline::min_max).
///
/// [`Itertools::minmax()`]: itertools::Itertools::minmax
#[derive(Debug, Clone, Default)]
pub struct MinMax {
    _priv: (),
}

impl MinMax {
    pub(crate) fn new() -> Self {
        Self::default()
    }
}

impl<T: PartialOrd> Operator<T> for MinMax {
    type Out = MinMaxResult<T>;
    type Stage<S: Sink<MinMaxResult<T>>> = MinMaxStage<S, T>;

    #[inline]
    fn bind<S: Sink<MinMaxResult<T>>>(self, downstream: S) -> Self::Stage<S> {
        MinMaxStage {
            downstream,
            state: MinMaxResult::NoElements,
        }
    }
}

/// The stage of [`MinMax`].
#[derive(Debug)]
pub struct MinMaxStage<S, T> {
    downstream: S,
    state: MinMaxResult<T>,
}

impl<T: PartialOrd, S: Sink<MinMaxResult<T>>> Sink<T> for MinMaxStage<S, T> {
    type Output = S::Output;

    fn push(&mut self, item: T) -> Result<ControlFlow<()>> {
        self.state = match mem::replace(&mut self.state, MinMaxResult::NoElements) {
            MinMaxResult::NoElements => MinMaxResult::OneElement(item),
            MinMaxResult::OneElement(first) if item < first => MinMaxResult::MinMax(item, first),
            MinMaxResult::OneElement(first) => MinMaxResult::MinMax(first, item),
            MinMaxResult::MinMax(min, max) if item < min => MinMaxResult::MinMax(item, max),
            MinMaxResult::MinMax(min, max) if item >= max => MinMaxResult::MinMax(min, item),
            state @ MinMaxResult::MinMax(..) => state,
        };

        Ok(ControlFlow::Continue(()))
    }

    fn complete(self) -> Result<Self::Output> {
        let mut downstream = self.downstream;
        let _ = downstream.push(self.state)?;
        downstream.complete()
    }

    #[inline]
    fn break_hint(&self) -> bool {
        self.downstream.break_hint()
    }
}

#[cfg(test)]
mod proptests {
    use itertools::Itertools;
    use proptest::collection::vec as propvec;
    use proptest::prelude::*;

    use crate::ops;
    use crate::test_utils::proptest_operator;

    proptest! {
        #[test]
        fn matches_itertools_minmax(nums in propvec(any::<i32>(), ..100)) {
            proptest_operator(
                || nums.iter().copied(),
                ops::min_max,
                |iter| vec![iter.minmax()],
            )?;
        }

        #[test]
        fn ties_keep_first_min_and_last_max(keys in propvec(..4_u8, ..50)) {
            // Pairs compare by key only, so the index tells which tie won.
            #[derive(Debug, Clone, Copy)]
            struct Keyed(u8, usize);

            impl PartialEq for Keyed {
                fn eq(&self, other: &Self) -> bool {
                    self.0 == other.0
                }
            }

            impl PartialOrd for Keyed {
                fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                    self.0.partial_cmp(&other.0)
                }
            }

            let keyed = || keys.iter().enumerate().map(|(i, &k)| Keyed(k, i));
            let indices = |res: itertools::MinMaxResult<Keyed>| match res {
                itertools::MinMaxResult::NoElements => None,
                itertools::MinMaxResult::OneElement(x) => Some((x.1, x.1)),
                itertools::MinMaxResult::MinMax(min, max) => Some((min.1, max.1)),
            };

            let ours = crate::from_iter(keyed()).run(ops::min_max()).unwrap();
            prop_assert_eq!(ours.len(), 1);
            let ours = ours.into_iter().next().map(indices);
            prop_assert_eq!(ours, Some(indices(keyed().minmax())));
        }
    }
}
