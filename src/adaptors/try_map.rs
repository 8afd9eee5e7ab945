use std::{fmt::Debug, ops::ControlFlow};

use crate::{BoxError, Error, Operator, Result, Sink};

/// An [`Operator`] that emits the `Ok` results of a fallible closure and fails
/// the run at the first `Err`.
///
/// The error is returned to the caller as [`Error::Operator`], wrapping the
/// closure's error unchanged.
///
/// This `struct` is created by [`ops::try_map()`](crate::ops::try_map) and
/// [`Pipeline::try_map()`](crate::Pipeline::try_map).
#[derive(Clone)]
pub struct TryMap<F> {
    f: F,
}

impl<F> TryMap<F> {
    pub(crate) fn new(f: F) -> Self {
        Self { f }
    }
}

impl<A, B, E, F> Operator<A> for TryMap<F>
where
    F: FnMut(A) -> Result<B, E>,
    E: Into<BoxError>,
{
    type Out = B;
    type Stage<S: Sink<B>> = TryMapStage<S, F>;

    #[inline]
    fn bind<S: Sink<B>>(self, downstream: S) -> Self::Stage<S> {
        TryMapStage {
            downstream,
            f: self.f,
        }
    }
}

/// The stage of [`TryMap`].
pub struct TryMapStage<S, F> {
    downstream: S,
    f: F,
}

impl<A, B, E, S, F> Sink<A> for TryMapStage<S, F>
where
    S: Sink<B>,
    F: FnMut(A) -> Result<B, E>,
    E: Into<BoxError>,
{
    type Output = S::Output;

    #[inline]
    fn push(&mut self, item: A) -> Result<ControlFlow<()>> {
        let item = (self.f)(item).map_err(Error::from_operator)?;
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

impl<F> Debug for TryMap<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TryMap").finish_non_exhaustive()
    }
}

impl<S: Debug, F> Debug for TryMapStage<S, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TryMapStage")
            .field("downstream", &self.downstream)
            .finish_non_exhaustive()
    }
}
