// src/ops/math_elem/exp.rs

use crate::autograd::{Function, Operation};
use crate::error::GradChainError;
use crate::payload::Payload;
use crate::variable::Variable;

/// Element-wise natural exponential, \( y = e^x \).
#[derive(Debug, Default, Clone, Copy)]
pub struct Exp;

impl<P: Payload> Operation<P> for Exp {
    fn name(&self) -> &str {
        "Exp"
    }

    fn forward(&self, x: &P) -> Result<P, GradChainError> {
        Ok(x.exp())
    }

    /// \( \frac{dL}{dx} = \frac{dL}{dy} \cdot e^x \).
    fn backward(&self, x: &P, gy: &P) -> Result<P, GradChainError> {
        x.exp().mul(gy)
    }
}

/// Computes `e^x`, recording the operation in the graph.
pub fn exp<P: Payload>(x: &Variable<P>) -> Result<Variable<P>, GradChainError> {
    Function::new(Exp).call(x)
}

#[cfg(test)]
#[path = "exp_test.rs"]
mod tests;
