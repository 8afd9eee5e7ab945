use std::{fmt::Debug, ops::ControlFlow};

use crate::{Operator, Result, Sink};

/// An [`Operator`] that emits the result of a closure on each item.
///
/// This `struct` is created by [`ops::map()`](crate::ops::map) and
/// [`Pipeline::map()`](crate::Pipeline::map). See their documentation for more.
#[derive(Clone)]
pub struct Map<F> {
    f: F,
}

impl<F> Map<F> {
    pub(crate) fn new(f: F) -> Self {
        Self { f }
    }
}

impl<A, B, F: FnMut(A) -> B> Operator<A> for Map<F> {
    type Out = B;
    type Stage<S: Sink<B>> = MapStage<S, F>;

    #[inline]
    fn bind<S: Sink<B>>(self, downstream: S) -> Self::Stage<S> {
        MapStage {
            downstream,
            f: self.f,
        }
    }
}

/// The stage of [`Map`].
pub struct MapStage<S, F> {
    downstream: S,
    f: F,
}

impl<A, B, S, F> Sink<A> for MapStage<S, F>
where
    S: Sink<B>,
    F: FnMut(A) -> B,
{
    type Output = S::Output;

    #[inline]
    fn push(&mut self, item: A) -> Result<ControlFlow<()>> {
        self.downstream.push((self.f)(item))
    }

    #[inline]
    fn complete(self) -> Result<Self::Output> {
        self.downstream.complete()
    }

    #[inline]
    fn break_hint(&self) -> bool {
        self.downstream.break_hint()
    }

    fn push_many(&mut self, items: impl IntoIterator<Item = A>) -> Result<ControlFlow<()>> {
        self.downstream
            .push_many(items.into_iter().map(&mut self.f))
    }
}

impl<F> Debug for Map<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Map").finish_non_exhaustive()
    }
}

impl<S: Debug, F> Debug for MapStage<S, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapStage")
            .field("downstream", &self.downstream)
            .finish_non_exhaustive()
    }
}
