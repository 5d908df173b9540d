// Bare floats act as zero-dimensional payloads.

use super::Payload;
use crate::error::GradChainError;

macro_rules! impl_scalar_payload {
    ($t:ty) => {
        impl Payload for $t {
            type Elem = $t;

            fn shape(&self) -> Vec<usize> {
                Vec::new()
            }

            fn ones_like(&self) -> Self {
                1.0
            }

            fn zeros_like(&self) -> Self {
                0.0
            }

            fn add(&self, rhs: &Self) -> Result<Self, GradChainError> {
                Ok(*self + *rhs)
            }

            fn sub(&self, rhs: &Self) -> Result<Self, GradChainError> {
                Ok(*self - *rhs)
            }

            fn mul(&self, rhs: &Self) -> Result<Self, GradChainError> {
                Ok(*self * *rhs)
            }

            fn powi(&self, n: i32) -> Self {
                <$t>::powi(*self, n)
            }

            fn exp(&self) -> Self {
                <$t>::exp(*self)
            }

            fn add_scalar(&self, value: $t) -> Self {
                *self + value
            }

            fn mul_scalar(&self, value: $t) -> Self {
                *self * value
            }

            fn to_vec(&self) -> Vec<$t> {
                vec![*self]
            }

            fn from_shape_vec(shape: &[usize], data: Vec<$t>) -> Result<Self, GradChainError> {
                match (shape.is_empty(), data.as_slice()) {
                    (true, [value]) => Ok(*value),
                    _ => Err(GradChainError::TensorCreationError {
                        data_len: data.len(),
                        shape: shape.to_vec(),
                    }),
                }
            }
        }
    };
}

impl_scalar_payload!(f32);
impl_scalar_payload!(f64);
