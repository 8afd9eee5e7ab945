use std::ops::ControlFlow;

use crate::{Operator, Result, Sink};

/// An [`Operator`] that emits the number of items when the source is done.
///
/// An empty source yields `vec![0]`.
///
/// This `struct` is created by [`ops::count()`](crate::ops::count) and
/// [`Pipeline::count()`](crate::Pipeline::count).
#[derive(Debug, Clone, Default)]
pub struct Count {
    _priv: (),
}

impl Count {
    pub(crate) fn new() -> Self {
        Self::default()
    }
}

impl<T> Operator<T> for Count {
    type Out = usize;
    type Stage<S: Sink<usize>> = CountStage<S>;

    #[inline]
    fn bind<S: Sink<usize>>(self, downstream: S) -> Self::Stage<S> {
        CountStage {
            downstream,
            count: 0,
        }
    }
}

/// The stage of [`Count`].
#[derive(Debug)]
pub struct CountStage<S> {
    downstream: S,
    count: usize,
}

impl<T, S: Sink<usize>> Sink<T> for CountStage<S> {
    type Output = S::Output;

    #[inline]
    fn push(&mut self, _: T) -> Result<ControlFlow<()>> {
        self.count += 1;
        Ok(ControlFlow::Continue(()))
    }

    fn complete(self) -> Result<Self::Output> {
        let mut downstream = self.downstream;
        let _ = downstream.push(self.count)?;
        downstream.complete()
    }

    #[inline]
    fn break_hint(&self) -> bool {
        self.downstream.break_hint()
    }

    fn push_many(&mut self, items: impl IntoIterator<Item = T>) -> Result<ControlFlow<()>> {
        if Sink::<T>::break_hint(self) {
            return Ok(ControlFlow::Break(()));
        }

        self.count += items.into_iter().count();
        Ok(ControlFlow::Continue(()))
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
        fn matches_iterator_count(
            nums in propvec(any::<i32>(), ..100),
            n in ..150_usize,
        ) {
            proptest_operator(
                || nums.iter().copied(),
                || (ops::skip(n), ops::count()),
                |iter| vec![iter.skip(n).count()],
            )?;
        }
    }
}
