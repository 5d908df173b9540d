//! Walks through y = (e^(x^2))^2 at x = 0.5 three ways: the chain rule applied by hand,
//! the backward engine, and a central-difference estimate.
//!
//! Run with `RUST_LOG=trace` to see each gradient the engine propagates.

use gradchain_core::autograd::numerical_diff;
use gradchain_core::{exp, square, GradChainError, Variable};

fn f(x: &Variable<f64>) -> Result<Variable<f64>, GradChainError> {
    square(&exp(&square(x)?)?)
}

fn manual_backward(x: f64) -> f64 {
    println!("--- Forward pass ---");
    let a = x * x;
    let b = a.exp();
    let y = b * b;
    println!("x = {x}");
    println!("a = x^2 = {a}");
    println!("b = e^a = {b}");
    println!("y = b^2 = {y}");

    println!("\n--- Chain rule by hand ---");
    let gy = 1.0;
    println!("dy/dy = {gy}");
    let gb = 2.0 * b * gy;
    println!("dy/db = 2 * b * dy/dy = {gb}");
    let ga = a.exp() * gb;
    println!("dy/da = e^a * dy/db = {ga}");
    let gx = 2.0 * x * ga;
    println!("dy/dx = 2 * x * dy/da = {gx}");
    gx
}

fn main() -> Result<(), GradChainError> {
    env_logger::init();

    let manual = manual_backward(0.5);

    let x = Variable::new(0.5f64);
    let y = f(&x)?;
    y.backward()?;
    let automatic = x.grad().unwrap_or(f64::NAN);

    let numerical = numerical_diff(f, &x, 1e-4)?;

    println!("\n--- Comparison ---");
    println!("manual:     {manual}");
    println!("backward(): {automatic}");
    println!("numerical:  {numerical}");
    println!("|backward - numerical| = {:e}", (automatic - numerical).abs());
    Ok(())
}
