use std::{fmt::Debug, ops::ControlFlow};

use crate::{Operator, Result, Sink};

/// An [`Operator`] that reduces all items into one, using the first item as
/// the initial value, and emits it when the source is done.
///
/// Nothing is emitted for an empty source. Otherwise the run returns a `Vec`
/// holding the single reduced value.
///
/// This `struct` is created by [`ops::reduce()`](crate::ops::reduce) and
/// [`Pipeline::reduce()`](crate::Pipeline::reduce).
#[derive(Clone)]
pub struct Reduce<F> {
    f: F,
}

impl<F> Reduce<F> {
    pub(crate) fn new(f: F) -> Self {
        Self { f }
    }
}

impl<T, F: FnMut(T, T) -> T> Operator<T> for Reduce<F> {
    type Out = T;
    type Stage<S: Sink<T>> = ReduceStage<S, T, F>;

    #[inline]
    fn bind<S: Sink<T>>(self, downstream: S) -> Self::Stage<S> {
        ReduceStage {
            downstream,
            accum: None,
            f: self.f,
        }
    }
}

/// The stage of [`Reduce`].
pub struct ReduceStage<S, T, F> {
    downstream: S,
    accum: Option<T>,
    f: F,
}

impl<T, S: Sink<T>, F: FnMut(T, T) -> T> Sink<T> for ReduceStage<S, T, F> {
    type Output = S::Output;

    #[inline]
    fn push(&mut self, item: T) -> Result<ControlFlow<()>> {
        self.accum = Some(match self.accum.take() {
            Some(accum) => (self.f)(accum, item),
            None => item,
        });

        Ok(ControlFlow::Continue(()))
    }

    fn complete(self) -> Result<Self::Output> {
        let mut downstream = self.downstream;
        if let Some(accum) = self.accum {
            let _ = downstream.push(accum)?;
        }

        downstream.complete()
    }

    #[inline]
    fn break_hint(&self) -> bool {
        self.downstream.break_hint()
    }
}

impl<F> Debug for Reduce<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Reduce").finish_non_exhaustive()
    }
}

impl<S: Debug, T: Debug, F> Debug for ReduceStage<S, T, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReduceStage")
            .field("downstream", &self.downstream)
            .field("accum", &self.accum)
            .finish_non_exhaustive()
    }
}
