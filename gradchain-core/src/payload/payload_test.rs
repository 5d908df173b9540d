use super::*;
use crate::error::GradChainError;
use approx::assert_relative_eq;
use ndarray::{arr0, ArrayD, IxDyn};

fn array(data: Vec<f64>, shape: &[usize]) -> ArrayD<f64> {
    ArrayD::from_shape_vec(IxDyn(shape), data).unwrap()
}

#[test]
fn test_scalar_shape_is_empty() {
    assert_eq!(Payload::shape(&0.5f64), Vec::<usize>::new());
    assert_eq!(Payload::numel(&0.5f32), 1);
}

#[test]
fn test_scalar_ones_like() {
    assert_eq!(Payload::ones_like(&3.25f64), 1.0);
    assert_eq!(Payload::zeros_like(&3.25f32), 0.0);
}

#[test]
fn test_scalar_exp_and_powi() {
    assert_relative_eq!(Payload::exp(&1.0f64), std::f64::consts::E, epsilon = 1e-12);
    assert_relative_eq!(Payload::powi(&1.5f64, 2), 2.25, epsilon = 1e-12);
}

#[test]
fn test_array_ones_like_keeps_shape() {
    let a = array(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]);
    let ones = a.ones_like();
    assert_eq!(Payload::shape(&ones), vec![2, 3]);
    assert!(ones.iter().all(|&v| v == 1.0));
}

#[test]
fn test_zero_dim_array_ones_like() {
    let a = arr0(0.5f64).into_dyn();
    let ones = a.ones_like();
    assert_eq!(Payload::shape(&ones), Vec::<usize>::new());
    assert_eq!(ones.to_vec(), vec![1.0]);
}

#[test]
fn test_array_elementwise_arithmetic() -> Result<(), GradChainError> {
    let a = array(vec![1.0, 2.0, 3.0], &[3]);
    let b = array(vec![4.0, 5.0, 6.0], &[3]);
    assert_eq!(Payload::add(&a, &b)?.to_vec(), vec![5.0, 7.0, 9.0]);
    assert_eq!(Payload::sub(&b, &a)?.to_vec(), vec![3.0, 3.0, 3.0]);
    assert_eq!(Payload::mul(&a, &b)?.to_vec(), vec![4.0, 10.0, 18.0]);
    assert_eq!(a.add_scalar(1.0).to_vec(), vec![2.0, 3.0, 4.0]);
    assert_eq!(a.mul_scalar(2.0).to_vec(), vec![2.0, 4.0, 6.0]);
    Ok(())
}

#[test]
fn test_array_binary_op_shape_mismatch() {
    let a = array(vec![1.0, 2.0, 3.0], &[3]);
    let b = array(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]);
    match Payload::mul(&a, &b) {
        Err(GradChainError::ShapeMismatch { expected, actual, operation }) => {
            assert_eq!(expected, vec![3]);
            assert_eq!(actual, vec![2, 2]);
            assert_eq!(operation, "mul");
        }
        other => panic!("Expected ShapeMismatch, got {:?}", other),
    }
}

#[test]
fn test_from_shape_vec_rejects_bad_length() {
    let result = <ArrayD<f64> as Payload>::from_shape_vec(&[2, 2], vec![1.0, 2.0, 3.0]);
    assert_eq!(
        result.unwrap_err(),
        GradChainError::TensorCreationError { data_len: 3, shape: vec![2, 2] }
    );

    let scalar = <f64 as Payload>::from_shape_vec(&[], vec![1.0, 2.0]);
    assert!(scalar.is_err());
    assert_eq!(<f64 as Payload>::from_shape_vec(&[], vec![7.0]), Ok(7.0));
}

#[test]
fn test_numeric_conversions() -> Result<(), GradChainError> {
    let eps = <f32 as Numeric>::from_f64(1e-4)?;
    assert_relative_eq!(eps, 1e-4f32, epsilon = 1e-10);
    assert_eq!(2.5f32.as_f64(), 2.5);
    Ok(())
}
