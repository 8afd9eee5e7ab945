use std::ops::ControlFlow;

use crate::{Operator, Result, Sink};

/// An [`Operator`] that emits the last item when the source is done.
///
/// Nothing is emitted for an empty source.
///
/// This `struct` is created by [`ops::last()`](crate::ops::last) and
/// [`Pipeline::last()`](crate::Pipeline::last).
#[derive(Debug, Clone, Default)]
pub struct Last {
    _priv: (),
}

impl Last {
    pub(crate) fn new() -> Self {
        Self::default()
    }
}

impl<T> Operator<T> for Last {
    type Out = T;
    type Stage<S: Sink<T>> = LastStage<S, T>;

    #[inline]
    fn bind<S: Sink<T>>(self, downstream: S) -> Self::Stage<S> {
        LastStage {
            downstream,
            last: None,
        }
    }
}

/// The stage of [`Last`].
#[derive(Debug)]
pub struct LastStage<S, T> {
    downstream: S,
    last: Option<T>,
}

impl<T, S: Sink<T>> Sink<T> for LastStage<S, T> {
    type Output = S::Output;

    #[inline]
    fn push(&mut self, item: T) -> Result<ControlFlow<()>> {
        self.last = Some(item);
        Ok(ControlFlow::Continue(()))
    }

    fn complete(self) -> Result<Self::Output> {
        let mut downstream = self.downstream;
        if let Some(last) = self.last {
            let _ = downstream.push(last)?;
        }

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

        if let Some(last) = items.into_iter().last() {
            self.last = Some(last);
        }

        Ok(ControlFlow::Continue(()))
    }
}
