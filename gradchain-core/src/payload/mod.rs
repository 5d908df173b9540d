//! # Payload boundary (`payload`)
//!
//! The engine never looks inside the numbers it differentiates. Everything it needs from the
//! numeric array type is collected in the [`Payload`] trait: shape introspection, elementwise
//! arithmetic, the exponential, and the "ones of the same shape" constructor used to seed the
//! terminal gradient of a backward pass.
//!
//! Implementations are provided for plain `f32`/`f64` scalars (shape `[]`) and for
//! dynamically-dimensioned `ndarray::ArrayD<T>`.

use crate::error::GradChainError;
use num_traits::{Float, NumAssignOps, NumCast};
use std::fmt::Debug;

mod array;
mod scalar;

/// A trait representing the element types usable inside a payload.
///
/// Strictly reserved for floating point types (`f32`, `f64`): derivatives of `exp`
/// and friends make no sense over integers.
pub trait Numeric: Float + NumAssignOps + Debug + Send + Sync + 'static {
    /// Converts an `f64` constant (an epsilon, a tolerance) into this element type.
    fn from_f64(value: f64) -> Result<Self, GradChainError> {
        <Self as NumCast>::from(value).ok_or_else(|| {
            GradChainError::InternalError(format!("Cannot represent {} in the payload element type", value))
        })
    }

    /// Widens the element to `f64` for comparisons.
    fn as_f64(self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }
}

impl Numeric for f32 {}
impl Numeric for f64 {}

/// The numeric value carried by a [`Variable`](crate::Variable).
///
/// Binary arithmetic is shape-checked and fails with
/// [`GradChainError::ShapeMismatch`] rather than broadcasting.
pub trait Payload: Clone + Debug + PartialEq + 'static {
    type Elem: Numeric;

    /// Shape of the payload; `[]` for a scalar.
    fn shape(&self) -> Vec<usize>;

    /// Number of elements.
    fn numel(&self) -> usize {
        self.shape().iter().product()
    }

    /// A payload of the same shape filled with the multiplicative identity.
    fn ones_like(&self) -> Self;

    /// A payload of the same shape filled with zeros.
    fn zeros_like(&self) -> Self;

    fn add(&self, rhs: &Self) -> Result<Self, GradChainError>;

    fn sub(&self, rhs: &Self) -> Result<Self, GradChainError>;

    fn mul(&self, rhs: &Self) -> Result<Self, GradChainError>;

    /// Elementwise integer power.
    fn powi(&self, n: i32) -> Self;

    /// Elementwise natural exponential.
    fn exp(&self) -> Self;

    fn add_scalar(&self, value: Self::Elem) -> Self;

    fn mul_scalar(&self, value: Self::Elem) -> Self;

    /// Elements in logical (row-major) order.
    fn to_vec(&self) -> Vec<Self::Elem>;

    /// Builds a payload of the given shape from row-major elements.
    fn from_shape_vec(shape: &[usize], data: Vec<Self::Elem>) -> Result<Self, GradChainError>;
}

/// Fails with `ShapeMismatch` unless both payloads share a shape.
pub(crate) fn check_same_shape<P: Payload>(
    lhs: &P,
    rhs: &P,
    operation: &str,
) -> Result<(), GradChainError> {
    let (expected, actual) = (lhs.shape(), rhs.shape());
    if expected != actual {
        return Err(GradChainError::shape_mismatch(&expected, &actual, operation));
    }
    Ok(())
}

#[cfg(test)]
#[path = "payload_test.rs"]
mod tests;
