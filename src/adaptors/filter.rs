use std::{fmt::Debug, ops::ControlFlow};

use crate::{Operator, Result, Sink};

/// An [`Operator`] that only emits the items satisfying a predicate.
///
/// This `struct` is created by [`ops::filter()`](crate::ops::filter) and
/// [`Pipeline::filter()`](crate::Pipeline::filter).
#[derive(Clone)]
pub struct Filter<F> {
    pred: F,
}

impl<F> Filter<F> {
    pub(crate) fn new(pred: F) -> Self {
        Self { pred }
    }
}

impl<T, F: FnMut(&T) -> bool> Operator<T> for Filter<F> {
    type Out = T;
    type Stage<S: Sink<T>> = FilterStage<S, F>;

    #[inline]
    fn bind<S: Sink<T>>(self, downstream: S) -> Self::Stage<S> {
        FilterStage {
            downstream,
            pred: self.pred,
        }
    }
}

/// The stage of [`Filter`].
pub struct FilterStage<S, F> {
    downstream: S,
    pred: F,
}

impl<T, S: Sink<T>, F: FnMut(&T) -> bool> Sink<T> for FilterStage<S, F> {
    type Output = S::Output;

    #[inline]
    fn push(&mut self, item: T) -> Result<ControlFlow<()>> {
        if (self.pred)(&item) {
            self.downstream.push(item)
        } else {
            // Rejecting an item says nothing about whether the downstream is done.
            Ok(ControlFlow::Continue(()))
        }
    }

    #[inline]
    fn complete(self) -> Result<Self::Output> {
        self.downstream.complete()
    }

    #[inline]
    fn break_hint(&self) -> bool {
        self.downstream.break_hint()
    }

    fn push_many(&mut self, items: impl IntoIterator<Item = T>) -> Result<ControlFlow<()>> {
        self.downstream
            .push_many(items.into_iter().filter(&mut self.pred))
    }
}

impl<F> Debug for Filter<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Filter").finish_non_exhaustive()
    }
}

impl<S: Debug, F> Debug for FilterStage<S, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterStage")
            .field("downstream", &self.downstream)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod proptests {
    use proptest::collection::vec as propvec;
    use proptest::prelude::*;

    use crate::ops;
    use crate::test_utils::proptest_operator;

    proptest! {
        #[test]
        fn matches_iterator_filter(nums in propvec(any::<i32>(), ..100)) {
            proptest_operator(
                || nums.iter().copied(),
                || ops::filter(|x: &i32| x % 3 == 0),
                |iter| iter.filter(|x| x % 3 == 0).collect(),
            )?;
        }

        #[test]
        fn filter_then_take_pulls_like_iterators(
            nums in propvec(any::<i32>(), ..100),
            n in ..20_usize,
        ) {
            proptest_operator(
                || nums.iter().copied(),
                || (ops::filter(|x: &i32| x % 2 == 0), ops::take(n)),
                |iter| iter.filter(|x| x % 2 == 0).take(n).collect(),
            )?;
        }
    }
}
