use std::{fmt::Debug, ops::ControlFlow};

use crate::{Operator, Result, Sink};

/// An [`Operator`] that both filters and maps items.
///
/// This `struct` is created by [`ops::filter_map()`](crate::ops::filter_map)
/// and [`Pipeline::filter_map()`](crate::Pipeline::filter_map).
#[derive(Clone)]
pub struct FilterMap<F> {
    f: F,
}

impl<F> FilterMap<F> {
    pub(crate) fn new(f: F) -> Self {
        Self { f }
    }
}

impl<A, B, F: FnMut(A) -> Option<B>> Operator<A> for FilterMap<F> {
    type Out = B;
    type Stage<S: Sink<B>> = FilterMapStage<S, F>;

    #[inline]
    fn bind<S: Sink<B>>(self, downstream: S) -> Self::Stage<S> {
        FilterMapStage {
            downstream,
            f: self.f,
        }
    }
}

/// The stage of [`FilterMap`].
pub struct FilterMapStage<S, F> {
    downstream: S,
    f: F,
}

impl<A, B, S, F> Sink<A> for FilterMapStage<S, F>
where
    S: Sink<B>,
    F: FnMut(A) -> Option<B>,
{
    type Output = S::Output;

    #[inline]
    fn push(&mut self, item: A) -> Result<ControlFlow<()>> {
        match (self.f)(item) {
            Some(item) => self.downstream.push(item),
            None => Ok(ControlFlow::Continue(())),
        }
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
            .push_many(items.into_iter().filter_map(&mut self.f))
    }
}

impl<F> Debug for FilterMap<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterMap").finish_non_exhaustive()
    }
}

impl<S: Debug, F> Debug for FilterMapStage<S, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterMapStage")
            .field("downstream", &self.downstream)
            .finish_non_exhaustive()
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
        fn matches_iterator_filter_map(words in propvec("[0-9a]{1,3}", ..50)) {
            proptest_operator(
                || words.iter().map(String::as_str),
                || ops::filter_map(|s: &str| s.parse::<u16>().ok()),
                |iter| iter.filter_map(|s| s.parse::<u16>().ok()).collect(),
            )?;
        }
    }
}
