use std::ops::ControlFlow;

use crate::{Operator, Result, Sink};

/// An [`Operator`] that drops the first `n` items and emits the rest.
///
/// This `struct` is created by [`ops::skip()`](crate::ops::skip) and
/// [`Pipeline::skip()`](crate::Pipeline::skip).
#[derive(Debug, Clone)]
pub struct Skip {
    n: usize,
}

impl Skip {
    pub(crate) fn new(n: usize) -> Self {
        Self { n }
    }
}

impl<T> Operator<T> for Skip {
    type Out = T;
    type Stage<S: Sink<T>> = SkipStage<S>;

    #[inline]
    fn bind<S: Sink<T>>(self, downstream: S) -> Self::Stage<S> {
        SkipStage {
            downstream,
            remaining: self.n,
        }
    }
}

/// The stage of [`Skip`].
#[derive(Debug)]
pub struct SkipStage<S> {
    downstream: S,
    remaining: usize,
}

impl<T, S: Sink<T>> Sink<T> for SkipStage<S> {
    type Output = S::Output;

    #[inline]
    fn push(&mut self, item: T) -> Result<ControlFlow<()>> {
        if self.remaining > 0 {
            self.remaining -= 1;
            return Ok(ControlFlow::Continue(()));
        }

        self.downstream.push(item)
    }

    #[inline]
    fn complete(self) -> Result<Self::Output> {
        self.downstream.complete()
    }

    #[inline]
    fn break_hint(&self) -> bool {
        self.downstream.break_hint()
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
        fn matches_iterator_skip(
            nums in propvec(any::<i32>(), ..100),
            n in ..150_usize,
        ) {
            proptest_operator(
                || nums.iter().copied(),
                || ops::skip(n),
                |iter| iter.skip(n).collect(),
            )?;
        }
    }
}
