use crate::{Operator, Sink};

/// An [`Operator`] that runs two operators in sequence.
///
/// This `struct` is created by [`Operator::then()`] and
/// [`Pipeline::pipe()`](crate::Pipeline::pipe). See their documentation for more.
#[derive(Debug, Clone)]
pub struct Then<O1, O2> {
    first: O1,
    second: O2,
}

impl<O1, O2> Then<O1, O2> {
    pub(crate) fn new(first: O1, second: O2) -> Self {
        Self { first, second }
    }
}

impl<In, O1, O2> Operator<In> for Then<O1, O2>
where
    O1: Operator<In>,
    O2: Operator<O1::Out>,
{
    type Out = O2::Out;
    type Stage<S: Sink<O2::Out>> = O1::Stage<O2::Stage<S>>;

    #[inline]
    fn bind<S: Sink<O2::Out>>(self, downstream: S) -> Self::Stage<S> {
        self.first.bind(self.second.bind(downstream))
    }
}

/// Zero operators: every item passes through unchanged.
impl<In> Operator<In> for () {
    type Out = In;
    type Stage<S: Sink<In>> = S;

    #[inline]
    fn bind<S: Sink<In>>(self, downstream: S) -> S {
        downstream
    }
}

macro_rules! tuple_operator {
    () => {};
    ($O1:ident $o1:ident $(, $O:ident $o:ident)*) => {
        /// Operators applied from left to right; each one consumes what the
        /// previous one emits.
        impl<In, $O1, $($O,)*> Operator<In> for ($O1, $($O,)*)
        where
            $O1: Operator<In>,
            ($($O,)*): Operator<$O1::Out>,
        {
            type Out = <($($O,)*) as Operator<$O1::Out>>::Out;
            type Stage<S: Sink<Self::Out>> =
                $O1::Stage<<($($O,)*) as Operator<$O1::Out>>::Stage<S>>;

            #[inline]
            fn bind<S: Sink<Self::Out>>(self, downstream: S) -> Self::Stage<S> {
                let ($o1, $($o,)*) = self;
                // The rest may be an operator for more than one input type.
                let rest = <($($O,)*) as Operator<$O1::Out>>::bind(($($o,)*), downstream);
                $o1.bind(rest)
            }
        }

        tuple_operator!($($O $o),*);
    };
}

tuple_operator!(O1 o1, O2 o2, O3 o3, O4 o4, O5 o5, O6 o6, O7 o7, O8 o8, O9 o9);
