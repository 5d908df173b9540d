// src/payload/array.rs

use super::{check_same_shape, Numeric, Payload};
use crate::error::GradChainError;
use ndarray::{ArrayBase, ArrayD, IxDyn, Zip};

impl<T: Numeric> Payload for ArrayD<T> {
    type Elem = T;

    fn shape(&self) -> Vec<usize> {
        ArrayBase::shape(self).to_vec()
    }

    fn ones_like(&self) -> Self {
        ArrayD::from_elem(self.raw_dim(), T::one())
    }

    fn zeros_like(&self) -> Self {
        ArrayD::from_elem(self.raw_dim(), T::zero())
    }

    fn add(&self, rhs: &Self) -> Result<Self, GradChainError> {
        check_same_shape(self, rhs, "add")?;
        Ok(Zip::from(self).and(rhs).map_collect(|&a, &b| a + b))
    }

    fn sub(&self, rhs: &Self) -> Result<Self, GradChainError> {
        check_same_shape(self, rhs, "sub")?;
        Ok(Zip::from(self).and(rhs).map_collect(|&a, &b| a - b))
    }

    fn mul(&self, rhs: &Self) -> Result<Self, GradChainError> {
        check_same_shape(self, rhs, "mul")?;
        Ok(Zip::from(self).and(rhs).map_collect(|&a, &b| a * b))
    }

    fn powi(&self, n: i32) -> Self {
        self.mapv(|v| v.powi(n))
    }

    fn exp(&self) -> Self {
        self.mapv(|v| v.exp())
    }

    fn add_scalar(&self, value: T) -> Self {
        self.mapv(|v| v + value)
    }

    fn mul_scalar(&self, value: T) -> Self {
        self.mapv(|v| v * value)
    }

    fn to_vec(&self) -> Vec<T> {
        self.iter().copied().collect()
    }

    fn from_shape_vec(shape: &[usize], data: Vec<T>) -> Result<Self, GradChainError> {
        let data_len = data.len();
        ArrayD::from_shape_vec(IxDyn(shape), data).map_err(|_| GradChainError::TensorCreationError {
            data_len,
            shape: shape.to_vec(),
        })
    }
}
