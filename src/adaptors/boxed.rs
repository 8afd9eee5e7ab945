use std::{fmt::Debug, ops::ControlFlow};

use crate::{Operator, Relay, Result, Sink};

/// A type-erased [`Operator`] from `In` to `Out`.
///
/// Lets a chain be named in a signature, or different operators share one
/// type (e.g. in a [`Stages`](crate::Stages) list).
///
/// This `struct` is created by [`Operator::boxed()`]. See its documentation
/// for more.
///
/// # Examples
///
/// ```
/// use transducer::{ops, transducer, BoxedOperator, Operator};
///
/// fn words() -> BoxedOperator<'static, &'static str, String> {
///     ops::flat_map(|line: &'static str| line.split_whitespace())
///         .then(ops::map(str::to_uppercase))
///         .boxed()
/// }
///
/// let result = transducer(["a b", "c"]).run(words())?;
/// assert_eq!(result, ["A", "B", "C"]);
/// # Ok::<(), transducer::Error>(())
/// ```
pub struct BoxedOperator<'a, In, Out> {
    bind: Box<dyn FnOnce(Relay<Out>) -> Box<dyn ErasedStage<In> + 'a> + 'a>,
}

impl<'a, In, Out> BoxedOperator<'a, In, Out> {
    pub(crate) fn new<O>(op: O) -> Self
    where
        O: Operator<In, Out = Out> + 'a,
        O::Stage<Relay<Out>>: 'a,
    {
        Self {
            bind: Box::new(move |relay: Relay<Out>| -> Box<dyn ErasedStage<In> + 'a> {
                Box::new(op.bind(relay))
            }),
        }
    }
}

impl<'a, In, Out> Operator<In> for BoxedOperator<'a, In, Out> {
    type Out = Out;
    type Stage<S: Sink<Out>> = BoxedStage<'a, In, Out, S>;

    fn bind<S: Sink<Out>>(self, downstream: S) -> Self::Stage<S> {
        let relay = Relay::default();
        BoxedStage {
            inner: (self.bind)(relay.clone()),
            relay,
            downstream,
        }
    }
}

/// The stage of [`BoxedOperator`].
pub struct BoxedStage<'a, In, Out, S> {
    inner: Box<dyn ErasedStage<In> + 'a>,
    relay: Relay<Out>,
    downstream: S,
}

impl<In, Out, S: Sink<Out>> Sink<In> for BoxedStage<'_, In, Out, S> {
    type Output = S::Output;

    fn push(&mut self, item: In) -> Result<ControlFlow<()>> {
        let inner = self.inner.push(item)?;
        let downstream = self.relay.drain_into(&mut self.downstream)?;

        if inner.is_break() || downstream.is_break() {
            Ok(ControlFlow::Break(()))
        } else {
            Ok(ControlFlow::Continue(()))
        }
    }

    fn complete(self) -> Result<Self::Output> {
        let mut downstream = self.downstream;
        self.inner.complete()?;
        let _ = self.relay.drain_into(&mut downstream)?;
        downstream.complete()
    }

    #[inline]
    fn break_hint(&self) -> bool {
        self.inner.break_hint() || self.downstream.break_hint()
    }
}

/// The object-safe part of a stage bound to a [`Relay`].
trait ErasedStage<In> {
    fn push(&mut self, item: In) -> Result<ControlFlow<()>>;

    fn break_hint(&self) -> bool;

    fn complete(self: Box<Self>) -> Result<()>;
}

impl<In, P: Sink<In, Output = ()>> ErasedStage<In> for P {
    #[inline]
    fn push(&mut self, item: In) -> Result<ControlFlow<()>> {
        Sink::push(self, item)
    }

    #[inline]
    fn break_hint(&self) -> bool {
        Sink::break_hint(self)
    }

    fn complete(self: Box<Self>) -> Result<()> {
        Sink::complete(*self)
    }
}

impl<In, Out> Debug for BoxedOperator<'_, In, Out> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoxedOperator").finish_non_exhaustive()
    }
}

impl<In, Out: Debug, S: Debug> Debug for BoxedStage<'_, In, Out, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoxedStage")
            .field("relay", &self.relay)
            .field("downstream", &self.downstream)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod proptests {
    use proptest::collection::vec as propvec;
    use proptest::prelude::*;

    use crate::test_utils::proptest_operator;
    use crate::{Operator, ops};

    proptest! {
        #[test]
        fn behaves_like_the_operator_it_erases(
            nums in propvec(..20_u8, ..100),
            n in ..50_usize,
        ) {
            proptest_operator(
                || nums.iter().copied(),
                || {
                    ops::flat_map(|x: u8| [x; 2])
                        .then(ops::take(n))
                        .boxed()
                        .then(ops::map(u32::from))
                },
                |iter| iter.flat_map(|x| [x; 2]).take(n).map(u32::from).collect(),
            )?;
        }
    }
}
