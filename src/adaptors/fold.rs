use std::{fmt::Debug, ops::ControlFlow};

use crate::{Operator, Result, Sink};

/// An [`Operator`] that accumulates every item into a value and emits it once,
/// when the source is done.
///
/// The accumulator is emitted even if no item arrived. The run still returns a
/// `Vec`, holding that single value.
///
/// This `struct` is created by [`ops::fold()`](crate::ops::fold) and
/// [`Pipeline::fold()`](crate::Pipeline::fold).
#[derive(Clone)]
pub struct Fold<A, F> {
    init: A,
    f: F,
}

impl<A, F> Fold<A, F> {
    pub(crate) fn new(init: A, f: F) -> Self {
        Self { init, f }
    }
}

impl<T, A, F: FnMut(&mut A, T)> Operator<T> for Fold<A, F> {
    type Out = A;
    type Stage<S: Sink<A>> = FoldStage<S, A, F>;

    #[inline]
    fn bind<S: Sink<A>>(self, downstream: S) -> Self::Stage<S> {
        FoldStage {
            downstream,
            accum: self.init,
            f: self.f,
        }
    }
}

/// The stage of [`Fold`].
pub struct FoldStage<S, A, F> {
    downstream: S,
    accum: A,
    f: F,
}

impl<T, S, A, F> Sink<T> for FoldStage<S, A, F>
where
    S: Sink<A>,
    F: FnMut(&mut A, T),
{
    type Output = S::Output;

    #[inline]
    fn push(&mut self, item: T) -> Result<ControlFlow<()>> {
        (self.f)(&mut self.accum, item);
        Ok(ControlFlow::Continue(()))
    }

    fn complete(self) -> Result<Self::Output> {
        let mut downstream = self.downstream;
        let _ = downstream.push(self.accum)?;
        downstream.complete()
    }

    #[inline]
    fn break_hint(&self) -> bool {
        self.downstream.break_hint()
    }

    fn push_many(&mut self, items: impl IntoIterator<Item = T>) -> Result<ControlFlow<()>> {
        if self.break_hint() {
            return Ok(ControlFlow::Break(()));
        }

        for item in items {
            (self.f)(&mut self.accum, item);
        }

        Ok(ControlFlow::Continue(()))
    }
}

impl<A: Debug, F> Debug for Fold<A, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fold")
            .field("init", &self.init)
            .finish_non_exhaustive()
    }
}

impl<S: Debug, A: Debug, F> Debug for FoldStage<S, A, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FoldStage")
            .field("downstream", &self.downstream)
            .field("accum", &self.accum)
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
        fn matches_iterator_fold(nums in propvec(any::<i64>(), ..100)) {
            proptest_operator(
                || nums.iter().copied(),
                || ops::fold(0_i64, |sum: &mut i64, x: i64| *sum = sum.wrapping_add(x)),
                |iter| vec![iter.fold(0_i64, i64::wrapping_add)],
            )?;
        }
    }
}
