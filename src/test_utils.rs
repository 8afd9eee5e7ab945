use std::fmt::Debug;

use proptest::{prelude::*, test_runner::TestCaseResult};

use crate::{Operator, Sink, from_iter};

/// Checks that an operator behaves like the equivalent `Iterator` chain.
///
/// The operator is driven three ways: item by item through [`Sink::push`],
/// through [`Sink::push_many`], and through a transducer run. Each way must
/// produce the output of `iter_way`, and leave as many items unpulled as
/// `iter_way` does.
pub fn proptest_operator<I, O>(
    mut iter_factory: impl FnMut() -> I,
    mut op_factory: impl FnMut() -> O,
    iter_way: impl FnOnce(&mut I) -> Vec<O::Out>,
) -> TestCaseResult
where
    I: Iterator,
    O: Operator<I::Item, Out: PartialEq + Debug>,
{
    let mut iter = iter_factory();
    let expected = iter_way(&mut iter);
    let expected_rem = iter.count();

    // `push()`
    let mut stage = op_factory().bind(Vec::new());
    let mut iter = iter_factory();
    if !stage.break_hint() {
        for item in iter.by_ref() {
            if stage.push(item).unwrap().is_break() {
                break;
            }
        }
    }
    prop_assert_eq!(
        &stage.complete().unwrap(),
        &expected,
        "`push()`'s result mismatched"
    );
    prop_assert_eq!(iter.count(), expected_rem, "`push()` pulled wrongly");

    // `push_many()`
    let mut stage = op_factory().bind(Vec::new());
    let mut iter = iter_factory();
    let _ = stage.push_many(iter.by_ref()).unwrap();
    prop_assert_eq!(
        &stage.complete().unwrap(),
        &expected,
        "`push_many()`'s result mismatched"
    );
    prop_assert_eq!(iter.count(), expected_rem, "`push_many()` pulled wrongly");

    // `Transducer::run()`
    let mut iter = iter_factory();
    prop_assert_eq!(
        &from_iter(iter.by_ref()).run(op_factory()).unwrap(),
        &expected,
        "`run()`'s result mismatched"
    );
    prop_assert_eq!(iter.count(), expected_rem, "`run()` pulled wrongly");

    Ok(())
}
