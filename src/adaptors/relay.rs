use std::{cell::RefCell, collections::VecDeque, fmt::Debug, ops::ControlFlow, rc::Rc};

use crate::{Result, Sink};

/// A [`Sink`] that queues items for another part of the same run to pick up.
///
/// Clones share the same queue. A relay is what a type-erased stage
/// ([`BoxedOperator`](crate::BoxedOperator)) or a runtime-length chain
/// ([`Stages`](crate::Stages)) binds its operators to: the stage pushes into
/// the relay, then drains it into the next sink.
pub struct Relay<T> {
    queue: Rc<RefCell<VecDeque<T>>>,
}

impl<T> Relay<T> {
    /// Moves every queued item into `sink`, in order.
    ///
    /// Stops at the first [`Break(())`](ControlFlow::Break) and drops what is
    /// left, since the sink refuses it anyway.
    pub(crate) fn drain_into<S: Sink<T>>(&self, sink: &mut S) -> Result<ControlFlow<()>> {
        while let Some(item) = self.pop() {
            if sink.push(item)?.is_break() {
                self.queue.borrow_mut().clear();
                return Ok(ControlFlow::Break(()));
            }
        }

        Ok(ControlFlow::Continue(()))
    }

    // The borrow must end before the item is pushed anywhere.
    fn pop(&self) -> Option<T> {
        self.queue.borrow_mut().pop_front()
    }
}

impl<T> Sink<T> for Relay<T> {
    type Output = ();

    #[inline]
    fn push(&mut self, item: T) -> Result<ControlFlow<()>> {
        self.queue.borrow_mut().push_back(item);
        Ok(ControlFlow::Continue(()))
    }

    #[inline]
    fn complete(self) -> Result<()> {
        Ok(())
    }
}

impl<T> Default for Relay<T> {
    fn default() -> Self {
        Self {
            queue: Rc::default(),
        }
    }
}

impl<T> Clone for Relay<T> {
    fn clone(&self) -> Self {
        Self {
            queue: Rc::clone(&self.queue),
        }
    }
}

impl<T: Debug> Debug for Relay<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Relay")
            .field("queue", &self.queue.borrow())
            .finish()
    }
}
