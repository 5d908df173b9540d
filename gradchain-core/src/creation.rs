// src/creation.rs

use crate::error::GradChainError;
use crate::payload::{Numeric, Payload};
use ndarray::{ArrayD, IxDyn};
use rand::distributions::uniform::SampleUniform;
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

/// Creates a zero-dimensional array holding `value`.
///
/// Useful when a caller wants array semantics (shape `[]`) rather than a bare float.
pub fn scalar<T: Numeric>(value: T) -> ArrayD<T> {
    ArrayD::from_elem(IxDyn(&[]), value)
}

/// Creates an array from row-major data and a shape.
///
/// # Errors
/// Returns `GradChainError::TensorCreationError` if `data.len()` does not match the number of
/// elements described by `shape`.
pub fn from_vec<T: Numeric>(data: Vec<T>, shape: &[usize]) -> Result<ArrayD<T>, GradChainError> {
    <ArrayD<T> as Payload>::from_shape_vec(shape, data)
}

/// Creates an array filled with ones.
pub fn ones<T: Numeric>(shape: &[usize]) -> ArrayD<T> {
    ArrayD::from_elem(IxDyn(shape), T::one())
}

/// Creates an array filled with zeros.
pub fn zeros<T: Numeric>(shape: &[usize]) -> ArrayD<T> {
    ArrayD::from_elem(IxDyn(shape), T::zero())
}

/// Creates an array with elements drawn uniformly from `[low, high)` using the thread RNG.
///
/// # Errors
/// Returns `GradChainError::InvalidArgument` if `low >= high` (or either bound is NaN).
pub fn rand_uniform<T>(shape: &[usize], low: T, high: T) -> Result<ArrayD<T>, GradChainError>
where
    T: Numeric + SampleUniform,
{
    rand_uniform_with(&mut rand::thread_rng(), shape, low, high)
}

/// Same as [`rand_uniform`] with a caller-provided RNG (seeded tests).
pub fn rand_uniform_with<T, R>(
    rng: &mut R,
    shape: &[usize],
    low: T,
    high: T,
) -> Result<ArrayD<T>, GradChainError>
where
    T: Numeric + SampleUniform,
    R: Rng + ?Sized,
{
    if !(low < high) {
        return Err(GradChainError::InvalidArgument(format!(
            "rand_uniform requires low < high, got low={:?}, high={:?}",
            low, high
        )));
    }
    Ok(ArrayD::from_shape_simple_fn(IxDyn(shape), || rng.gen_range(low..high)))
}

/// Creates an array with elements drawn from the standard normal distribution.
pub fn randn<T>(shape: &[usize]) -> ArrayD<T>
where
    T: Numeric,
    StandardNormal: Distribution<T>,
{
    randn_with(&mut rand::thread_rng(), shape)
}

/// Same as [`randn`] with a caller-provided RNG.
pub fn randn_with<T, R>(rng: &mut R, shape: &[usize]) -> ArrayD<T>
where
    T: Numeric,
    R: Rng + ?Sized,
    StandardNormal: Distribution<T>,
{
    ArrayD::from_shape_simple_fn(IxDyn(shape), || StandardNormal.sample(&mut *rng))
}

#[cfg(test)]
#[path = "creation_test.rs"]
mod tests;
