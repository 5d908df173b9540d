// src/variable/autograd.rs

use crate::autograd::{graph, Function};
use crate::error::GradChainError;
use crate::payload::Payload;
use crate::variable::Variable;

impl<P: Payload> Variable<P> {
    /// Returns a clone of the gradient, if one has been computed or set.
    pub fn grad(&self) -> Option<P> {
        self.read_data().grad.clone()
    }

    /// Sets the gradient explicitly, e.g. to seed a backward pass with something other than ones.
    ///
    /// # Errors
    /// Returns `GradChainError::ShapeMismatch` if `grad` does not have the shape of `data`.
    pub fn set_grad(&self, grad: P) -> Result<(), GradChainError> {
        let mut guard = self.write_data();
        let expected = guard.data.shape();
        let actual = grad.shape();
        if expected != actual {
            return Err(GradChainError::shape_mismatch(&expected, &actual, "set_grad"));
        }
        guard.grad = Some(grad);
        Ok(())
    }

    /// Resets the gradient to `None`.
    ///
    /// Gradients are never cleared automatically; call this before running a second backward
    /// pass that should not start from the previous terminal gradient.
    pub fn clear_grad(&self) {
        self.write_data().grad = None;
    }

    /// Returns the operation invocation that produced this node, if any.
    pub fn creator(&self) -> Option<Function<P>> {
        self.read_data().creator.clone()
    }

    /// Binds `func` as this node's creator.
    ///
    /// Called once by [`Function::call`] on the node it creates; rebinding is not forbidden.
    pub fn set_creator(&self, func: &Function<P>) {
        self.write_data().creator = Some(func.clone());
    }

    /// `true` for nodes supplied directly by a caller.
    pub fn is_root(&self) -> bool {
        self.read_data().creator.is_none()
    }

    /// Propagates gradients from this node to every ancestor along its creator links.
    ///
    /// If this node has no gradient yet it is seeded with ones of the same shape (d self / d self).
    /// A gradient set earlier with [`set_grad`](Self::set_grad) is used as-is. On a root node
    /// this is a no-op.
    ///
    /// Ancestor gradients are overwritten, not accumulated. If propagation fails, an
    /// auto-seeded gradient on this node is removed again; gradients already written to
    /// ancestors before the failure are kept.
    pub fn backward(&self) -> Result<(), GradChainError> {
        graph::backward(self)
    }
}
