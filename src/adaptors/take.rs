use std::ops::ControlFlow;

use crate::{Operator, Result, Sink};

/// An [`Operator`] that emits the first `n` items, then stops the source.
///
/// This `struct` is created by [`ops::take()`](crate::ops::take) and
/// [`Pipeline::take()`](crate::Pipeline::take).
#[derive(Debug, Clone)]
pub struct Take {
    n: usize,
}

impl Take {
    pub(crate) fn new(n: usize) -> Self {
        Self { n }
    }
}

impl<T> Operator<T> for Take {
    type Out = T;
    type Stage<S: Sink<T>> = TakeStage<S>;

    #[inline]
    fn bind<S: Sink<T>>(self, downstream: S) -> Self::Stage<S> {
        TakeStage {
            downstream,
            remaining: self.n,
        }
    }
}

/// The stage of [`Take`].
#[derive(Debug)]
pub struct TakeStage<S> {
    downstream: S,
    remaining: usize,
}

impl<T, S: Sink<T>> Sink<T> for TakeStage<S> {
    type Output = S::Output;

    #[inline]
    fn push(&mut self, item: T) -> Result<ControlFlow<()>> {
        // Must stay. `take(0)` is closed before it has said so.
        if self.remaining == 0 {
            return Ok(ControlFlow::Break(()));
        }

        self.remaining -= 1;
        let cf = self.downstream.push(item)?;

        if self.remaining == 0 {
            Ok(ControlFlow::Break(()))
        } else {
            Ok(cf)
        }
    }

    #[inline]
    fn complete(self) -> Result<Self::Output> {
        self.downstream.complete()
    }

    #[inline]
    fn break_hint(&self) -> bool {
        self.remaining == 0 || self.downstream.break_hint()
    }

    fn push_many(&mut self, items: impl IntoIterator<Item = T>) -> Result<ControlFlow<()>> {
        if self.remaining == 0 {
            return Ok(ControlFlow::Break(()));
        }

        let remaining = &mut self.remaining;
        let cf = self.downstream.push_many(
            items
                .into_iter()
                .take(*remaining)
                // The downstream may stop before the quota is met.
                .inspect(|_| *remaining -= 1),
        )?;

        if self.remaining == 0 {
            Ok(ControlFlow::Break(()))
        } else {
            Ok(cf)
        }
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
        fn matches_iterator_take(
            nums in propvec(any::<i32>(), ..100),
            n in ..150_usize,
        ) {
            proptest_operator(
                || nums.iter().copied(),
                || ops::take(n),
                |iter| iter.take(n).collect(),
            )?;
        }

        #[test]
        fn nested_takes(
            nums in propvec(any::<i32>(), ..100),
            n in ..50_usize,
            m in ..50_usize,
        ) {
            proptest_operator(
                || nums.iter().copied(),
                || (ops::take(n), ops::take(m)),
                |iter| iter.take(n).take(m).collect(),
            )?;
        }
    }
}
