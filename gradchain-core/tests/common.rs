use gradchain_core::{exp, square, GradChainError, Payload, Variable};

// Helpers shared by the integration tests.
// allow(dead_code) because each test crate uses a different subset.

/// Initialises logging once per test binary; `RUST_LOG=trace` shows each propagated edge.
#[allow(dead_code)]
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// y = (e^(x^2))^2
#[allow(dead_code)]
pub fn composite<P: Payload>(x: &Variable<P>) -> Result<Variable<P>, GradChainError> {
    square(&exp(&square(x)?)?)
}

/// Closed-form derivative of `composite`: 4x e^(2x^2).
#[allow(dead_code)]
pub fn composite_derivative(x: f64) -> f64 {
    4.0 * x * (2.0 * x * x).exp()
}
