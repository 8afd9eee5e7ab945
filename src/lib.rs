//! Runs composable operators over a finite source and collects what comes out.
//!
//! A [`Transducer`] binds a [`Source`] (a collection, or an iterator) and applies chains of
//! [`Operator`]s to it. Every run is synchronous and eager, and its result is always a [`Vec`]
//! of whatever the last operator emitted, in order.
//!
//! # Motivation
//!
//! An [`Iterator`] chain is a value built around one particular source. To describe the
//! processing once and run it over different sources, we would write a generic function, or a
//! closure that takes the iterator. Neither can be stored in a list, built at runtime, or told
//! apart from the source it runs on.
//!
//! An [`Operator`] describes only the processing. It is a plain value, independent of where the
//! items come from:
//!
//! ```
//! use transducer::{from_iter, ops, transducer};
//!
//! let first_odd_squares = (
//!     ops::filter(|x: &u32| x % 2 == 1),
//!     ops::map(|x: u32| x * x),
//!     ops::take(3),
//! );
//!
//! // Over a collection that can be run again and again...
//! let mut numbers = transducer([1, 2, 3, 4, 5, 6, 7, 8]);
//! assert_eq!(numbers.run(first_odd_squares.clone())?, [1, 9, 25]);
//!
//! // ...or over an iterator that is consumed, even an infinite one.
//! let mut naturals = from_iter(1..);
//! assert_eq!(naturals.run(first_odd_squares)?, [1, 9, 25]);
//! # Ok::<(), transducer::Error>(())
//! ```
//!
//! Since [`take`](ops::take) said it was done, the run over `1..` stops pulling, and the
//! remaining items stay in the iterator for the next run.
//!
//! # Composition
//!
//! Operators compose in several ways. Each one consumes what the previous one emits:
//!
//! - `()` lets everything through.
//! - A tuple of up to nine operators. Tuples nest for longer chains.
//! - [`Operator::then`], for a chain of any length.
//! - [`Transducer::pipeline`], a builder that infers the parameter types of the closures it
//!   takes.
//! - [`Stages`], a list of same-type operators whose length is only known at runtime, with
//!   [`Operator::boxed`] to mix different operators in it.
//!
//! ```
//! use transducer::{ops, transducer};
//!
//! let mut words = transducer(["tide", "pool", "", "crab"]);
//!
//! let letters = words
//!     .pipeline()
//!     .filter(|w| !w.is_empty())
//!     .flat_map(|w| w.chars())
//!     .count()
//!     .run()?;
//!
//! assert_eq!(letters, [12]);
//! # Ok::<(), transducer::Error>(())
//! ```
//!
//! # Sink and Operator
//!
//! Items are pushed, not pulled. Roughly:
//!
//! ```
//! # use std::ops::ControlFlow;
//! # type Result<T> = std::result::Result<T, ()>;
//! pub trait Sink<T> {
//!     type Output;
//!     fn push(&mut self, item: T) -> Result<ControlFlow<()>>;
//!     fn complete(self) -> Result<Self::Output>;
//! }
//!
//! pub trait Operator<In> {
//!     type Out;
//!     type Stage<S: Sink<Self::Out>>: Sink<In, Output = S::Output>;
//!     fn bind<S: Sink<Self::Out>>(self, downstream: S) -> Self::Stage<S>;
//! }
//! ```
//!
//! A [`Sink`] receives items one at a time. Its [`ControlFlow`](std::ops::ControlFlow) tells
//! the source whether to keep going: [`Break`](std::ops::ControlFlow::Break) means it wants
//! no more. Once the source is done, [`complete`](Sink::complete) lets it flush what it held
//! back (a [`fold`](ops::fold) emits its accumulator there).
//!
//! An [`Operator`] wraps a downstream sink into a new one. A run binds the whole chain to a
//! fresh `Vec`, feeds the source through it, and completes it.
//!
//! # Errors
//!
//! A failure from the source or from an operator ends the run with an [`Error`] that wraps the
//! original error unchanged. There is no partial result. Panics raised by user closures are not
//! caught.
//!
//! # Logging
//!
//! Runs emit [`tracing`](https://docs.rs/tracing) events at the `trace` and `debug` levels.
//! Nothing is printed unless the application installs a subscriber.
//!
//! # Features
//!
//! - `itertools`: enables [`ops::min_max`], which emits an `itertools::MinMaxResult`.

#![cfg_attr(docsrs, feature(doc_cfg))]

mod adaptors;
mod error;
mod imp;
pub mod ops;
mod pipeline;
pub mod prelude;
mod traits;
mod transducer;

#[cfg(test)]
mod test_utils;

pub use adaptors::*;
pub use error::*;
pub use imp::*;
pub use pipeline::Pipeline;
pub use traits::*;
pub use transducer::{Transducer, from_iter, transducer, try_from_iter};

#[cfg(test)]
mod tests {
    use crate::{Operator, Stages, from_iter, ops, transducer};

    #[test]
    fn operators_are_reusable_values() {
        let op = (ops::map(|x: i32| x + 1), ops::filter(|x: &i32| x % 2 == 0));

        assert_eq!(transducer([1, 2, 3]).run(op.clone()).unwrap(), [2, 4]);
        assert_eq!(from_iter([7, 8]).run(op).unwrap(), [8]);
    }

    #[test]
    fn all_composition_styles_agree() {
        let mut numbers = transducer(1..=30);

        let tupled = numbers
            .run((
                ops::filter(|x: &i32| x % 3 == 0),
                ops::map(|x: i32| x * 2),
                ops::take(4),
            ))
            .unwrap();

        let chained = numbers
            .run(
                ops::filter(|x: &i32| x % 3 == 0)
                    .then(ops::map(|x: i32| x * 2))
                    .then(ops::take(4)),
            )
            .unwrap();

        let built = numbers
            .pipeline()
            .filter(|x| x % 3 == 0)
            .map(|x| x * 2)
            .take(4)
            .run()
            .unwrap();

        let dynamic = numbers
            .run(Stages::new([
                ops::filter(|x: &i32| x % 3 == 0).boxed(),
                ops::map(|x: i32| x * 2).boxed(),
                ops::take(4).boxed(),
            ]))
            .unwrap();

        assert_eq!(tupled, [6, 12, 18, 24]);
        assert_eq!(chained, tupled);
        assert_eq!(built, tupled);
        assert_eq!(dynamic, tupled);
    }

    #[test]
    fn item_type_changes_along_the_chain() {
        let result = transducer(["1", "22", "333"])
            .run((
                ops::map(|s: &str| s.len()),
                ops::map(|n: usize| n as f64 / 2.0),
                ops::map(|x: f64| format!("{x:.1}")),
            ))
            .unwrap();

        assert_eq!(result, ["0.5", "1.0", "1.5"]);
    }
}
