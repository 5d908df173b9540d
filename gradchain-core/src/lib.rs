//! Define-by-run reverse-mode automatic differentiation.
//!
//! Forward code is ordinary function composition over [`Variable`]s; every operation applied
//! along the way records a back-reference from its output to itself. Calling
//! [`Variable::backward`] on the final value replays those links to fill in the gradient of
//! every ancestor.
//!
//! ```
//! use gradchain_core::{exp, square, GradChainError, Variable};
//!
//! fn main() -> Result<(), GradChainError> {
//!     let x = Variable::new(0.5f64);
//!     let y = square(&exp(&square(&x)?)?)?;
//!     y.backward()?;
//!     let dx = x.grad().unwrap();
//!     assert!((dx - 3.297442541400256).abs() < 1e-9);
//!     Ok(())
//! }
//! ```

pub mod autograd;
pub mod creation;
pub mod error;
pub mod ops;
pub mod payload;
pub mod utils;
pub mod variable;

pub use autograd::{Function, Operation};
pub use error::GradChainError;
pub use ops::{exp, square, Exp, Square};
pub use payload::{Numeric, Payload};
pub use variable::Variable;

// Re-export crates appearing in the public API
pub use ndarray;
pub use num_traits;
