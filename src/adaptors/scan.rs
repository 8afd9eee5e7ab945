use std::{fmt::Debug, ops::ControlFlow};

use crate::{Operator, Result, Sink};

/// An [`Operator`] that updates an accumulator with each item and emits a
/// copy of the accumulator every time.
///
/// This `struct` is created by [`ops::scan()`](crate::ops::scan) and
/// [`Pipeline::scan()`](crate::Pipeline::scan).
#[derive(Clone)]
pub struct Scan<A, F> {
    init: A,
    f: F,
}

impl<A, F> Scan<A, F> {
    pub(crate) fn new(init: A, f: F) -> Self {
        Self { init, f }
    }
}

impl<T, A: Clone, F: FnMut(&mut A, T)> Operator<T> for Scan<A, F> {
    type Out = A;
    type Stage<S: Sink<A>> = ScanStage<S, A, F>;

    #[inline]
    fn bind<S: Sink<A>>(self, downstream: S) -> Self::Stage<S> {
        ScanStage {
            downstream,
            accum: self.init,
            f: self.f,
        }
    }
}

/// The stage of [`Scan`].
pub struct ScanStage<S, A, F> {
    downstream: S,
    accum: A,
    f: F,
}

impl<T, S, A, F> Sink<T> for ScanStage<S, A, F>
where
    S: Sink<A>,
    A: Clone,
    F: FnMut(&mut A, T),
{
    type Output = S::Output;

    #[inline]
    fn push(&mut self, item: T) -> Result<ControlFlow<()>> {
        (self.f)(&mut self.accum, item);
        self.downstream.push(self.accum.clone())
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

impl<A: Debug, F> Debug for Scan<A, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scan")
            .field("init", &self.init)
            .finish_non_exhaustive()
    }
}

impl<S: Debug, A: Debug, F> Debug for ScanStage<S, A, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScanStage")
            .field("downstream", &self.downstream)
            .field("accum", &self.accum)
            .finish_non_exhaustive()
    }
}
