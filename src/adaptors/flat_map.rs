use std::{fmt::Debug, ops::ControlFlow};

use crate::{Operator, Result, Sink};

/// An [`Operator`] that maps each item to an iterable and emits its items in
/// order.
///
/// This `struct` is created by [`ops::flat_map()`](crate::ops::flat_map) and
/// [`Pipeline::flat_map()`](crate::Pipeline::flat_map).
#[derive(Clone)]
pub struct FlatMap<F> {
    f: F,
}

impl<F> FlatMap<F> {
    pub(crate) fn new(f: F) -> Self {
        Self { f }
    }
}

impl<A, U, F> Operator<A> for FlatMap<F>
where
    F: FnMut(A) -> U,
    U: IntoIterator,
{
    type Out = U::Item;
    type Stage<S: Sink<U::Item>> = FlatMapStage<S, F>;

    #[inline]
    fn bind<S: Sink<U::Item>>(self, downstream: S) -> Self::Stage<S> {
        FlatMapStage {
            downstream,
            f: self.f,
        }
    }
}

/// The stage of [`FlatMap`].
pub struct FlatMapStage<S, F> {
    downstream: S,
    f: F,
}

impl<A, U, S, F> Sink<A> for FlatMapStage<S, F>
where
    S: Sink<U::Item>,
    F: FnMut(A) -> U,
    U: IntoIterator,
{
    type Output = S::Output;

    #[inline]
    fn push(&mut self, item: A) -> Result<ControlFlow<()>> {
        self.downstream.push_many((self.f)(item))
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

impl<F> Debug for FlatMap<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlatMap").finish_non_exhaustive()
    }
}

impl<S: Debug, F> Debug for FlatMapStage<S, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlatMapStage")
            .field("downstream", &self.downstream)
            .finish_non_exhaustive()
    }
}
