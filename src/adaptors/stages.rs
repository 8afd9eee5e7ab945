use std::{fmt::Debug, ops::ControlFlow};

use crate::{Operator, Relay, Result, Sink};

/// An [`Operator`] made of a list of operators whose length is only known at
/// runtime.
///
/// Unlike tuples and [`then`](Operator::then) chains, every operator in the
/// list must keep the item type (`T` to `T`). Combine with
/// [`boxed`](Operator::boxed) to mix different operators in one list.
///
/// An empty list lets every item through unchanged.
///
/// # Examples
///
/// ```
/// use transducer::{ops, transducer, Stages};
///
/// let increments = Stages::new((0..12).map(|_| ops::map(|x: u64| x + 1)));
/// assert_eq!(transducer([0, 100]).run(increments)?, [12, 112]);
/// # Ok::<(), transducer::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Stages<O> {
    ops: Vec<O>,
}

impl<O> Stages<O> {
    /// Creates an operator that applies `ops` from first to last.
    pub fn new(ops: impl IntoIterator<Item = O>) -> Self {
        Self {
            ops: ops.into_iter().collect(),
        }
    }

    /// Returns the number of operators in the list.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Returns `true` if the list holds no operator.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

impl<O> FromIterator<O> for Stages<O> {
    fn from_iter<I: IntoIterator<Item = O>>(ops: I) -> Self {
        Self::new(ops)
    }
}

impl<T, O: Operator<T, Out = T>> Operator<T> for Stages<O> {
    type Out = T;
    type Stage<S: Sink<T>> = StagesStage<T, O::Stage<Relay<T>>, S>;

    fn bind<S: Sink<T>>(self, downstream: S) -> Self::Stage<S> {
        let (stages, relays) = self
            .ops
            .into_iter()
            .map(|op| {
                let relay = Relay::default();
                (op.bind(relay.clone()), relay)
            })
            .unzip();

        StagesStage {
            stages,
            relays,
            downstream,
            stopped: false,
        }
    }
}

/// The stage of [`Stages`].
///
/// Stage `i` pushes into relay `i`, which is drained into stage `i + 1` (or
/// into the downstream sink for the last one) before the next item comes in.
pub struct StagesStage<T, P, S> {
    stages: Vec<P>,
    relays: Vec<Relay<T>>,
    downstream: S,
    stopped: bool,
}

impl<T, P, S> StagesStage<T, P, S>
where
    P: Sink<T, Output = ()>,
    S: Sink<T>,
{
    /// Moves everything queued in the relays down the chain.
    fn flush(&mut self) -> Result<ControlFlow<()>> {
        let mut cf = ControlFlow::Continue(());

        for (i, relay) in self.relays.iter().enumerate() {
            let flowed = match self.stages.get_mut(i + 1) {
                Some(next) => relay.drain_into(next)?,
                None => relay.drain_into(&mut self.downstream)?,
            };

            if flowed.is_break() {
                cf = ControlFlow::Break(());
            }
        }

        Ok(cf)
    }
}

impl<T, P, S> Sink<T> for StagesStage<T, P, S>
where
    P: Sink<T, Output = ()>,
    S: Sink<T>,
{
    type Output = S::Output;

    fn push(&mut self, item: T) -> Result<ControlFlow<()>> {
        if self.stopped {
            return Ok(ControlFlow::Break(()));
        }

        let cf = match self.stages.first_mut() {
            Some(first) => {
                let pushed = first.push(item)?;
                let flushed = self.flush()?;
                if pushed.is_break() { pushed } else { flushed }
            }
            None => self.downstream.push(item)?,
        };

        self.stopped = cf.is_break();
        Ok(cf)
    }

    fn complete(self) -> Result<Self::Output> {
        let Self {
            stages,
            relays,
            mut downstream,
            ..
        } = self;

        // Whatever a stage emits on completion reaches the next stage
        // before that one completes.
        let mut inbox: Option<Relay<T>> = None;
        for (mut stage, outbox) in stages.into_iter().zip(relays) {
            if let Some(inbox) = inbox {
                let _ = inbox.drain_into(&mut stage)?;
            }

            stage.complete()?;
            inbox = Some(outbox);
        }

        if let Some(inbox) = inbox {
            let _ = inbox.drain_into(&mut downstream)?;
        }

        downstream.complete()
    }

    fn break_hint(&self) -> bool {
        self.stopped
            || self.stages.iter().any(|stage| stage.break_hint())
            || self.downstream.break_hint()
    }
}

impl<T: Debug, P: Debug, S: Debug> Debug for StagesStage<T, P, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StagesStage")
            .field("stages", &self.stages)
            .field("relays", &self.relays)
            .field("downstream", &self.downstream)
            .field("stopped", &self.stopped)
            .finish()
    }
}


#[cfg(test)]
mod proptests {
    use proptest::collection::vec as propvec;
    use proptest::prelude::*;

    use crate::{Operator, Stages, ops, transducer};

    proptest! {
        #[test]
        fn matches_the_typed_chain(
            nums in propvec(any::<i16>(), ..100),
            n in ..50_usize,
            m in ..10_usize,
        ) {
            let typed = transducer(nums.clone())
                .run((
                    ops::skip(m),
                    ops::flat_map(|x: i16| [x, x.wrapping_neg()]),
                    ops::take(n),
                    ops::scan(0_i16, |acc: &mut i16, x: i16| *acc = acc.wrapping_add(x)),
                ))
                .unwrap();

            let dynamic = transducer(nums)
                .run(Stages::new([
                    ops::skip(m).boxed(),
                    ops::flat_map(|x: i16| [x, x.wrapping_neg()]).boxed(),
                    ops::take(n).boxed(),
                    ops::scan(0_i16, |acc: &mut i16, x: i16| *acc = acc.wrapping_add(x)).boxed(),
                ]))
                .unwrap();

            prop_assert_eq!(typed, dynamic);
        }
    }
}
