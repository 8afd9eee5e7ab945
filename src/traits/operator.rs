use crate::{BoxedOperator, Relay, Sink, Then};

/// A composable transformation step from items of `In` to items of
/// [`Out`](Operator::Out).
///
/// An operator is a transformer of sinks: [`bind`](Operator::bind) wraps the
/// sink that receives `Out` items into a *stage*, a sink that receives `In`
/// items. Binding a chain from the last operator to the first yields a single
/// sink the source can push into.
///
/// Ready-made operators live in [`ops`](crate::ops). Operators compose with
/// [`then`](Operator::then), with tuples of up to nine operators, or with
/// [`Stages`](crate::Stages) for a list whose length is only known at runtime.
///
/// # Implementing
///
/// Define the operator, define its stage, implement [`Sink`] for the stage.
/// A stage forwards items (or whatever it makes of them) to its downstream sink
/// and answers with the downstream's [`ControlFlow`](std::ops::ControlFlow).
///
/// ```
/// use std::ops::ControlFlow;
/// use transducer::{ops, transducer, Operator, Result, Sink};
///
/// /// Emits every item twice.
/// struct Twice;
///
/// struct TwiceStage<S>(S);
///
/// impl<T: Clone> Operator<T> for Twice {
///     type Out = T;
///     type Stage<S: Sink<T>> = TwiceStage<S>;
///
///     fn bind<S: Sink<T>>(self, downstream: S) -> TwiceStage<S> {
///         TwiceStage(downstream)
///     }
/// }
///
/// impl<T: Clone, S: Sink<T>> Sink<T> for TwiceStage<S> {
///     type Output = S::Output;
///
///     fn push(&mut self, item: T) -> Result<ControlFlow<()>> {
///         self.0.push(item.clone())?;
///         self.0.push(item)
///     }
///
///     fn complete(self) -> Result<S::Output> {
///         self.0.complete()
///     }
/// }
///
/// let result = transducer([1, 2]).run((Twice, ops::map(|x: i32| x + 1)))?;
/// assert_eq!(result, [2, 2, 3, 3]);
/// # Ok::<(), transducer::Error>(())
/// ```
pub trait Operator<In> {
    /// The type of the items this operator emits.
    type Out;

    /// The sink this operator becomes once bound to a downstream sink `S`.
    type Stage<S: Sink<Self::Out>>: Sink<In, Output = S::Output>;

    /// Wraps `downstream` into a stage receiving `In` items.
    fn bind<S: Sink<Self::Out>>(self, downstream: S) -> Self::Stage<S>;

    /// Chains `next` after this operator.
    ///
    /// # Examples
    ///
    /// ```
    /// use transducer::{ops, transducer, Operator};
    ///
    /// let even_squares = ops::filter(|x: &i32| x % 2 == 0).then(ops::map(|x: i32| x * x));
    /// assert_eq!(transducer([1, 2, 3, 4]).run(even_squares)?, [4, 16]);
    /// # Ok::<(), transducer::Error>(())
    /// ```
    #[inline]
    fn then<P: Operator<Self::Out>>(self, next: P) -> Then<Self, P>
    where
        Self: Sized,
    {
        Then::new(self, next)
    }

    /// Erases the type of this operator.
    ///
    /// Useful to name a chain in a signature, or to mix different operators in
    /// one [`Stages`](crate::Stages) list.
    ///
    /// # Examples
    ///
    /// ```
    /// use transducer::{ops, transducer, BoxedOperator, Operator, Stages};
    ///
    /// let steps: Vec<BoxedOperator<'_, i32, i32>> = vec![
    ///     ops::map(|x: i32| x + 1).boxed(),
    ///     ops::filter(|x: &i32| x % 3 != 0).boxed(),
    ///     ops::take(3).boxed(),
    /// ];
    ///
    /// assert_eq!(transducer(0..10).run(Stages::new(steps))?, [1, 2, 4]);
    /// # Ok::<(), transducer::Error>(())
    /// ```
    fn boxed<'a>(self) -> BoxedOperator<'a, In, Self::Out>
    where
        Self: Sized + 'a,
        Self::Stage<Relay<Self::Out>>: 'a,
    {
        BoxedOperator::new(self)
    }
}
