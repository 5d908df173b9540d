//! # Automatic differentiation (`autograd`)
//!
//! - [`Operation`]: the forward/backward contract of a differentiable computation.
//! - [`Function`]: one invocation of an operation; the edge linking an input node to the
//!   output node it produced. Edges are recorded while the forward code runs (define-by-run).
//! - `graph`: the backward engine behind [`Variable::backward`](crate::Variable::backward).
//! - [`grad_check`]: finite-difference verification of the engine's gradients.

pub mod function;
pub mod grad_check;
pub(crate) mod graph;

pub use function::{Function, Operation};
pub use grad_check::{check_grad, numerical_diff, GradCheckConfig, GradCheckError};
