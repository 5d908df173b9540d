// src/variable/mod.rs

use crate::autograd::Function;
use crate::payload::Payload;
use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::{Rc, Weak};

mod autograd;

/// Internal storage of a value node.
///
/// Wrapped in `Rc<RefCell<VariableData>>` by [`Variable`] so that the operation which consumed
/// a node and the caller that created it can both reach the same gradient slot.
pub struct VariableData<P: Payload> {
    /// The numeric value. Never replaced after construction.
    pub(crate) data: P,
    /// Gradient of the backward-pass output with respect to `data`.
    /// `None` until a backward pass (or the caller) writes it; "no gradient yet" is not zero.
    pub(crate) grad: Option<P>,
    /// The operation invocation that produced this node. Roots (caller-created nodes) have `None`.
    pub(crate) creator: Option<Function<P>>,
}

/// A value node of the computation graph.
///
/// `Variable` is a cheap handle: cloning it clones the `Rc`, not the payload, and every clone
/// observes the same `grad` and `creator`.
pub struct Variable<P: Payload> {
    pub(crate) node: Rc<RefCell<VariableData<P>>>,
}

impl<P: Payload> Variable<P> {
    /// Creates a root node: no gradient, no creator.
    pub fn new(data: P) -> Self {
        Variable {
            node: Rc::new(RefCell::new(VariableData {
                data,
                grad: None,
                creator: None,
            })),
        }
    }

    /// Borrows the node's internal data immutably.
    pub(crate) fn read_data(&self) -> Ref<'_, VariableData<P>> {
        self.node.borrow()
    }

    /// Borrows the node's internal data mutably.
    pub(crate) fn write_data(&self) -> RefMut<'_, VariableData<P>> {
        self.node.borrow_mut()
    }

    pub(crate) fn downgrade(&self) -> Weak<RefCell<VariableData<P>>> {
        Rc::downgrade(&self.node)
    }

    pub(crate) fn from_weak(weak: &Weak<RefCell<VariableData<P>>>) -> Option<Self> {
        weak.upgrade().map(|node| Variable { node })
    }

    /// Returns a clone of the payload.
    pub fn data(&self) -> P {
        self.read_data().data.clone()
    }

    pub fn shape(&self) -> Vec<usize> {
        self.read_data().data.shape()
    }

    /// Identity comparison: `true` if both handles point at the same node.
    pub fn ptr_eq(&self, other: &Variable<P>) -> bool {
        Rc::ptr_eq(&self.node, &other.node)
    }
}

// Clone the handle, not the node.
impl<P: Payload> Clone for Variable<P> {
    fn clone(&self) -> Self {
        Variable {
            node: Rc::clone(&self.node),
        }
    }
}

impl<P: Payload> fmt::Debug for Variable<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.node.try_borrow() {
            Ok(guard) => write!(
                f,
                "Variable(shape={:?}, has_grad={}, creator={:?})",
                guard.data.shape(),
                guard.grad.is_some(),
                guard.creator.as_ref().map(|c| c.name())
            ),
            Err(_) => write!(f, "Variable(<mutably borrowed>)"),
        }
    }
}

#[cfg(test)]
#[path = "variable_test.rs"]
mod tests;
