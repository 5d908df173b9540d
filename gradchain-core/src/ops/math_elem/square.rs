// src/ops/math_elem/square.rs

use crate::autograd::{Function, Operation};
use crate::error::GradChainError;
use crate::payload::{Numeric, Payload};
use crate::variable::Variable;

/// Element-wise square, \( y = x^2 \).
#[derive(Debug, Default, Clone, Copy)]
pub struct Square;

impl<P: Payload> Operation<P> for Square {
    fn name(&self) -> &str {
        "Square"
    }

    fn forward(&self, x: &P) -> Result<P, GradChainError> {
        Ok(x.powi(2))
    }

    /// \( \frac{dL}{dx} = \frac{dL}{dy} \cdot 2x \), with `x` the value seen by `forward`.
    fn backward(&self, x: &P, gy: &P) -> Result<P, GradChainError> {
        let two = P::Elem::from_f64(2.0)?;
        x.mul_scalar(two).mul(gy)
    }
}

/// Squares `x`, recording the operation in the graph.
pub fn square<P: Payload>(x: &Variable<P>) -> Result<Variable<P>, GradChainError> {
    Function::new(Square).call(x)
}

#[cfg(test)]
#[path = "square_test.rs"]
mod tests;
