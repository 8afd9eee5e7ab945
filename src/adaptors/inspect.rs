use std::{fmt::Debug, ops::ControlFlow};

use crate::{Operator, Result, Sink};

/// An [`Operator`] that calls a closure on a reference to each item, then
/// emits the item unchanged.
///
/// This `struct` is created by [`ops::inspect()`](crate::ops::inspect) and
/// [`Pipeline::inspect()`](crate::Pipeline::inspect).
#[derive(Clone)]
pub struct Inspect<F> {
    f: F,
}

impl<F> Inspect<F> {
    pub(crate) fn new(f: F) -> Self {
        Self { f }
    }
}

impl<T, F: FnMut(&T)> Operator<T> for Inspect<F> {
    type Out = T;
    type Stage<S: Sink<T>> = InspectStage<S, F>;

    #[inline]
    fn bind<S: Sink<T>>(self, downstream: S) -> Self::Stage<S> {
        InspectStage {
            downstream,
            f: self.f,
        }
    }
}

/// The stage of [`Inspect`].
pub struct InspectStage<S, F> {
    downstream: S,
    f: F,
}

impl<T, S: Sink<T>, F: FnMut(&T)> Sink<T> for InspectStage<S, F> {
    type Output = S::Output;

    #[inline]
    fn push(&mut self, item: T) -> Result<ControlFlow<()>> {
        (self.f)(&item);
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

    fn push_many(&mut self, items: impl IntoIterator<Item = T>) -> Result<ControlFlow<()>> {
        self.downstream
            .push_many(items.into_iter().inspect(&mut self.f))
    }
}

impl<F> Debug for Inspect<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Inspect").finish_non_exhaustive()
    }
}

impl<S: Debug, F> Debug for InspectStage<S, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InspectStage")
            .field("downstream", &self.downstream)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use crate::{ops, transducer};

    #[test]
    fn sees_every_item_in_order() {
        let mut seen = Vec::new();
        let result = transducer([3, 1, 2])
            .run(ops::inspect(|x: &i32| seen.push(*x)))
            .unwrap();

        assert_eq!(result, [3, 1, 2]);
        assert_eq!(seen, [3, 1, 2]);
    }

    #[test]
    fn sees_nothing_past_a_stop() {
        let mut seen = 0;
        let result = transducer(1..=10)
            .run((ops::inspect(|_: &i32| seen += 1), ops::take(4)))
            .unwrap();

        assert_eq!(result, [1, 2, 3, 4]);
        assert_eq!(seen, 4);
    }
}
