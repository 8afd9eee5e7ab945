use std::{fmt::Debug, ops::ControlFlow};

use crate::{Operator, Result, Sink};

/// An [`Operator`] that emits items while a predicate holds, and stops the
/// source at the first item that fails it.
///
/// The failing item is consumed but not emitted.
///
/// This `struct` is created by [`ops::take_while()`](crate::ops::take_while)
/// and [`Pipeline::take_while()`](crate::Pipeline::take_while).
#[derive(Clone)]
pub struct TakeWhile<F> {
    pred: F,
}

impl<F> TakeWhile<F> {
    pub(crate) fn new(pred: F) -> Self {
        Self { pred }
    }
}

impl<T, F: FnMut(&T) -> bool> Operator<T> for TakeWhile<F> {
    type Out = T;
    type Stage<S: Sink<T>> = TakeWhileStage<S, F>;

    #[inline]
    fn bind<S: Sink<T>>(self, downstream: S) -> Self::Stage<S> {
        TakeWhileStage {
            downstream,
            pred: self.pred,
            done: false,
        }
    }
}

/// The stage of [`TakeWhile`].
pub struct TakeWhileStage<S, F> {
    downstream: S,
    pred: F,
    done: bool,
}

impl<T, S: Sink<T>, F: FnMut(&T) -> bool> Sink<T> for TakeWhileStage<S, F> {
    type Output = S::Output;

    #[inline]
    fn push(&mut self, item: T) -> Result<ControlFlow<()>> {
        if self.done {
            return Ok(ControlFlow::Break(()));
        }

        if (self.pred)(&item) {
            self.downstream.push(item)
        } else {
            self.done = true;
            Ok(ControlFlow::Break(()))
        }
    }

    #[inline]
    fn complete(self) -> Result<Self::Output> {
        self.downstream.complete()
    }

    #[inline]
    fn break_hint(&self) -> bool {
        self.done || self.downstream.break_hint()
    }
}

impl<F> Debug for TakeWhile<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TakeWhile").finish_non_exhaustive()
    }
}

impl<S: Debug, F> Debug for TakeWhileStage<S, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TakeWhileStage")
            .field("downstream", &self.downstream)
            .field("done", &self.done)
            .finish_non_exhaustive()
    }
}
