//! # Operations (`ops`)
//!
//! Concrete [`Operation`](crate::Operation) variants and the free functions that apply them.
//!
//! Each operation lives in its own file with:
//! - a unit struct implementing `Operation` (the forward rule and its derivative);
//! - a wrapper function (`square`, `exp`) that creates a fresh [`Function`](crate::Function)
//!   and applies it, so chains read as nested calls: `square(&exp(&square(&x)?)?)?`.

pub mod math_elem;

pub use math_elem::{exp, square, Exp, Square};
