// Operation contract and the per-invocation operation node.

use crate::error::GradChainError;
use crate::payload::Payload;
use crate::variable::{Variable, VariableData};
use std::cell::RefCell;
use std::fmt::{self, Debug};
use std::rc::{Rc, Weak};

/// The forward/backward pair every differentiable computation provides.
///
/// Implementations only see raw payloads, never graph nodes. Both methods have default bodies
/// that fail with [`GradChainError::NotImplemented`], so a variant that forgets one of them is
/// reported to the caller instead of silently producing a value.
pub trait Operation<P: Payload>: Debug {
    /// Name used in logs and error messages.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Computes the output payload from the input payload.
    fn forward(&self, x: &P) -> Result<P, GradChainError> {
        let _ = x;
        Err(GradChainError::NotImplemented {
            operation: self.name().to_string(),
            method: "forward",
        })
    }

    /// Computes \( \frac{dL}{dx} \) from the upstream gradient `gy` = \( \frac{dL}{dy} \).
    ///
    /// `x` is the input payload captured when the operation was applied, for derivatives that
    /// depend on where they are evaluated.
    fn backward(&self, x: &P, gy: &P) -> Result<P, GradChainError> {
        let _ = (x, gy);
        Err(GradChainError::NotImplemented {
            operation: self.name().to_string(),
            method: "backward",
        })
    }
}

/// Internal state of an operation node.
pub(crate) struct FunctionData<P: Payload> {
    op: Box<dyn Operation<P>>,
    input: Option<Variable<P>>,
    /// Weak: the output owns its creator, so a strong link back would form a cycle.
    output: Option<Weak<RefCell<VariableData<P>>>>,
}

/// One application of an [`Operation`]: the graph edge between an input and an output node.
///
/// Create a fresh `Function` for every invocation; [`call`](Function::call) is the only place
/// graph edges are created.
pub struct Function<P: Payload> {
    node: Rc<RefCell<FunctionData<P>>>,
}

impl<P: Payload> Function<P> {
    pub fn new<O: Operation<P> + 'static>(op: O) -> Self {
        Function {
            node: Rc::new(RefCell::new(FunctionData {
                op: Box::new(op),
                input: None,
                output: None,
            })),
        }
    }

    pub fn name(&self) -> String {
        self.node.borrow().op.name().to_string()
    }

    /// Applies the operation to `input` and records the edge.
    ///
    /// Runs `forward` on the input payload, wraps the result in a new [`Variable`], stamps this
    /// function as its creator, and remembers both ends for the backward pass. The edge is only
    /// recorded once `forward` succeeds.
    pub fn call(&self, input: &Variable<P>) -> Result<Variable<P>, GradChainError> {
        let y = {
            let x = input.read_data();
            self.node.borrow().op.forward(&x.data)?
        };

        let output = Variable::new(y);
        output.set_creator(self);

        let mut guard = self.node.borrow_mut();
        if guard.input.is_some() {
            log::warn!(
                "Operation '{}' applied more than once; its graph edge now points at the latest call.",
                guard.op.name()
            );
        }
        guard.input = Some(input.clone());
        guard.output = Some(output.downgrade());
        Ok(output)
    }

    /// The node consumed by the last invocation.
    pub fn input(&self) -> Option<Variable<P>> {
        self.node.borrow().input.clone()
    }

    /// The node produced by the last invocation, if it is still alive.
    pub fn output(&self) -> Option<Variable<P>> {
        self.node
            .borrow()
            .output
            .as_ref()
            .and_then(Variable::from_weak)
    }

    /// Runs the operation's forward rule on a raw payload without touching the graph.
    pub fn forward(&self, x: &P) -> Result<P, GradChainError> {
        self.node.borrow().op.forward(x)
    }

    /// Maps the gradient of this invocation's output to the gradient of its input.
    ///
    /// # Errors
    /// `GradChainError::InvalidState` if the function was never applied to an input.
    pub fn backward(&self, gy: &P) -> Result<P, GradChainError> {
        let guard = self.node.borrow();
        let input = guard.input.as_ref().ok_or_else(|| {
            GradChainError::InvalidState(format!(
                "backward called on '{}' before it was applied to an input",
                guard.op.name()
            ))
        })?;
        let x = input.read_data();
        guard.op.backward(&x.data, gy)
    }

    /// Identity comparison: `true` if both handles point at the same invocation.
    pub fn ptr_eq(&self, other: &Function<P>) -> bool {
        Rc::ptr_eq(&self.node, &other.node)
    }
}

impl<P: Payload> Clone for Function<P> {
    fn clone(&self) -> Self {
        Function {
            node: Rc::clone(&self.node),
        }
    }
}

impl<P: Payload> Debug for Function<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.node.try_borrow() {
            Ok(guard) => write!(
                f,
                "Function(op={:?}, has_input={}, has_output={})",
                guard.op,
                guard.input.is_some(),
                guard.output.as_ref().map_or(false, |w| w.strong_count() > 0)
            ),
            Err(_) => write!(f, "Function(<mutably borrowed>)"),
        }
    }
}

#[cfg(test)]
#[path = "function_test.rs"]
mod tests;
