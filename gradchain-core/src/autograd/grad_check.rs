use crate::error::GradChainError;
use crate::payload::{Numeric, Payload};
use crate::variable::Variable;
use num_traits::Float;
use thiserror::Error;

/// Parameters of a finite-difference gradient check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradCheckConfig {
    /// Half-width of the central difference.
    pub epsilon: f64,
    /// Largest accepted absolute difference between analytical and numerical gradients.
    pub tolerance: f64,
}

impl Default for GradCheckConfig {
    fn default() -> Self {
        GradCheckConfig {
            epsilon: 1e-4,
            tolerance: 1e-4,
        }
    }
}

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed at element {element_index}: analytical grad {analytical_grad:?} != numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        element_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(GradChainError),
    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(GradChainError),
    #[error("Input has no gradient after the backward pass (did the function return its input?)")]
    MissingAnalyticalGrad,
    #[error("Numerical gradient is NaN or infinite at element {element_index}. Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        element_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite at element {element_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { element_index: usize, value: f64 },
    #[error("Payload error during intermediate calculation: {0}")]
    TensorError(GradChainError),
}

impl From<GradChainError> for GradCheckError {
    fn from(err: GradChainError) -> Self {
        GradCheckError::TensorError(err)
    }
}

/// Central-difference estimate \( \frac{f(x + \epsilon) - f(x - \epsilon)}{2\epsilon} \).
///
/// `eps` is added to every element of `x` at once, so for array payloads the result is the
/// elementwise derivative of an elementwise `f`. `f` is evaluated on fresh root variables;
/// `x` and its graph are left untouched.
pub fn numerical_diff<P, F>(f: F, x: &Variable<P>, eps: f64) -> Result<P, GradChainError>
where
    P: Payload,
    F: Fn(&Variable<P>) -> Result<Variable<P>, GradChainError>,
{
    let eps = P::Elem::from_f64(eps)?;
    let data = x.data();
    let x0 = Variable::new(data.add_scalar(-eps));
    let x1 = Variable::new(data.add_scalar(eps));
    let y0 = f(&x0)?;
    let y1 = f(&x1)?;
    let diff = y1.data().sub(&y0.data())?;
    Ok(diff.mul_scalar((eps + eps).recip()))
}

/// Checks the gradient produced by the backward engine against finite differences.
///
/// Runs `f` on a fresh root holding `x`, calls `backward()` with the default (ones) seed, and
/// compares the resulting input gradient, element by element, with the central difference of
/// `sum(f(x))` obtained by perturbing one element at a time.
pub fn check_grad<P, F>(f: F, x: &P, config: GradCheckConfig) -> Result<(), GradCheckError>
where
    P: Payload,
    F: Fn(&Variable<P>) -> Result<Variable<P>, GradChainError>,
{
    let input = Variable::new(x.clone());
    let output = f(&input).map_err(GradCheckError::ForwardPassError)?;
    output.backward().map_err(GradCheckError::BackwardPassError)?;
    let analytical: Vec<f64> = input
        .grad()
        .ok_or(GradCheckError::MissingAnalyticalGrad)?
        .to_vec()
        .into_iter()
        .map(Numeric::as_f64)
        .collect();

    let shape = x.shape();
    let base = x.to_vec();
    let eps = P::Elem::from_f64(config.epsilon)?;

    for (element_index, &analytical_grad) in analytical.iter().enumerate() {
        let loss_plus = perturbed_loss(&f, &shape, &base, element_index, eps)?;
        let loss_minus = perturbed_loss(&f, &shape, &base, element_index, -eps)?;
        let numerical_grad = (loss_plus - loss_minus) / (2.0 * config.epsilon);

        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                element_index,
                loss_plus,
                loss_minus,
            });
        }
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                element_index,
                value: analytical_grad,
            });
        }

        let difference = (analytical_grad - numerical_grad).abs();
        log::debug!(
            "check_grad element {}: analytical={} numerical={} diff={}",
            element_index,
            analytical_grad,
            numerical_grad,
            difference
        );
        if difference > config.tolerance {
            return Err(GradCheckError::GradientMismatch {
                element_index,
                analytical_grad,
                numerical_grad,
                difference,
            });
        }
    }
    Ok(())
}

/// `sum(f(x))` with `delta` added to element `index` of `x`.
fn perturbed_loss<P, F>(
    f: &F,
    shape: &[usize],
    base: &[P::Elem],
    index: usize,
    delta: P::Elem,
) -> Result<f64, GradCheckError>
where
    P: Payload,
    F: Fn(&Variable<P>) -> Result<Variable<P>, GradChainError>,
{
    let mut data = base.to_vec();
    data[index] += delta;
    let perturbed = Variable::new(P::from_shape_vec(shape, data)?);
    let output = f(&perturbed).map_err(GradCheckError::ForwardPassError)?;
    Ok(output.data().to_vec().into_iter().map(Numeric::as_f64).sum())
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
