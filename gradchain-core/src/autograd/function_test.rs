use super::*;
use crate::ops::{Exp, Square};
use approx::assert_relative_eq;

/// Operation that provides neither rule.
#[derive(Debug)]
struct Unimplemented;

impl Operation<f64> for Unimplemented {
    fn name(&self) -> &str {
        "Unimplemented"
    }
}

#[test]
fn test_base_forward_is_not_implemented() {
    let f = Function::new(Unimplemented);
    let x = Variable::new(1.0f64);
    let err = f.call(&x).unwrap_err();
    assert_eq!(
        err,
        GradChainError::NotImplemented {
            operation: "Unimplemented".to_string(),
            method: "forward",
        }
    );
    // A failed call leaves no edge behind.
    assert!(f.input().is_none());
    assert!(f.output().is_none());
}

#[test]
fn test_base_backward_is_not_implemented() {
    let err = Unimplemented.backward(&1.0, &1.0).unwrap_err();
    assert!(matches!(
        err,
        GradChainError::NotImplemented { method: "backward", .. }
    ));
}

#[test]
fn test_backward_before_call_is_invalid_state() {
    let f = Function::<f64>::new(Square);
    match f.backward(&1.0) {
        Err(GradChainError::InvalidState(msg)) => assert!(msg.contains("Square")),
        other => panic!("Expected InvalidState, got {:?}", other),
    }
}

#[test]
fn test_call_binds_input_and_output() -> Result<(), GradChainError> {
    let f = Function::new(Exp);
    let x = Variable::new(1.0f64);
    let y = f.call(&x)?;
    assert!(f.input().unwrap().ptr_eq(&x));
    assert!(f.output().unwrap().ptr_eq(&y));
    assert!(y.creator().unwrap().ptr_eq(&f));
    assert_relative_eq!(y.data(), std::f64::consts::E, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_backward_uses_captured_input() -> Result<(), GradChainError> {
    let f = Function::new(Square);
    let x = Variable::new(3.0f64);
    let _y = f.call(&x)?;
    // d(x^2)/dx at x=3 scaled by gy=0.5
    assert_relative_eq!(f.backward(&0.5)?, 3.0, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_output_is_weak() -> Result<(), GradChainError> {
    let f = Function::new(Square);
    let x = Variable::new(2.0f64);
    let y = f.call(&x)?;
    drop(y);
    assert!(f.output().is_none(), "Function must not keep its output alive");
    assert!(f.input().is_some());
    Ok(())
}

#[test]
fn test_second_call_rebinds_edge() -> Result<(), GradChainError> {
    let f = Function::new(Square);
    let a = Variable::new(1.0f64);
    let b = Variable::new(2.0f64);
    let ya = f.call(&a)?;
    let yb = f.call(&b)?;
    assert!(f.input().unwrap().ptr_eq(&b));
    assert!(f.output().unwrap().ptr_eq(&yb));
    // Both outputs still name this invocation as creator.
    assert!(ya.creator().unwrap().ptr_eq(&f));
    Ok(())
}

#[test]
fn test_forward_does_not_touch_graph() -> Result<(), GradChainError> {
    let f = Function::new(Square);
    assert_eq!(f.forward(&4.0f64)?, 16.0);
    assert!(f.input().is_none());
    Ok(())
}
