//! Element-wise arithmetic with broadcasting, and the 2-D matrix product
//!
//! Binary operations first agree on a common shape according to the
//! [`BufferConfig`] broadcasting rule, then combine element pairs.

use super::types::DenseND;
use crate::config::{Broadcasting, BufferConfig};
use ndarray::{Array2, Ix2, IxDyn, Zip};
use num_traits::Num;

/// Check if two shapes can be broadcast together (numpy rules).
pub fn shapes_broadcastable(shape1: &[usize], shape2: &[usize]) -> bool {
    let len1 = shape1.len();
    let len2 = shape2.len();
    let max_len = len1.max(len2);

    for i in 0..max_len {
        let dim1 = if i < len1 { shape1[len1 - 1 - i] } else { 1 };
        let dim2 = if i < len2 { shape2[len2 - 1 - i] } else { 1 };

        if dim1 != dim2 && dim1 != 1 && dim2 != 1 {
            return false;
        }
    }
    true
}

/// Compute the broadcast result shape of two shapes.
///
/// Returns `None` if the shapes are incompatible.
///
/// # Examples
///
/// ```
/// use flextensor_core::broadcast_shape;
///
/// assert_eq!(broadcast_shape(&[10, 1], &[1, 10]), Some(vec![10, 10]));
/// assert_eq!(broadcast_shape(&[3, 4], &[4]), Some(vec![3, 4]));
/// assert_eq!(broadcast_shape(&[3], &[4]), None);
/// ```
pub fn broadcast_shape(shape1: &[usize], shape2: &[usize]) -> Option<Vec<usize>> {
    if !shapes_broadcastable(shape1, shape2) {
        return None;
    }

    let len1 = shape1.len();
    let len2 = shape2.len();
    let max_len = len1.max(len2);
    let mut result = Vec::with_capacity(max_len);

    for i in 0..max_len {
        let dim1 = if i < len1 { shape1[len1 - 1 - i] } else { 1 };
        let dim2 = if i < len2 { shape2[len2 - 1 - i] } else { 1 };

        // A zero-length dimension wins over a stretched one
        result.push(if dim1 == 1 { dim2 } else { dim1 });
    }

    result.reverse();
    Some(result)
}

impl<T> DenseND<T>
where
    T: Clone + Num,
{
    /// Broadcast the tensor to a larger shape.
    ///
    /// # Errors
    ///
    /// Returns an error if the shapes are not broadcastable.
    ///
    /// # Examples
    ///
    /// ```
    /// use flextensor_core::DenseND;
    ///
    /// let tensor = DenseND::<f64>::from_vec(vec![2.0], &[1]).unwrap();
    /// let broadcast = tensor.broadcast_to(&[3, 4]).unwrap();
    /// assert_eq!(broadcast.shape(), &[3, 4]);
    /// assert_eq!(broadcast[&[2, 3]], 2.0);
    /// ```
    pub fn broadcast_to(&self, target_shape: &[usize]) -> anyhow::Result<Self> {
        if self.shape() == target_shape {
            return Ok(self.clone());
        }
        let view = self.data.broadcast(IxDyn(target_shape)).ok_or_else(|| {
            anyhow::anyhow!(
                "Shapes {:?} and {:?} are not broadcastable",
                self.shape(),
                target_shape
            )
        })?;
        Ok(Self {
            data: view.to_owned(),
        })
    }

    /// Combine two tensors element by element after agreeing on a shape.
    ///
    /// # Errors
    ///
    /// Returns an error when the shapes cannot be combined under
    /// `config.broadcasting`.
    ///
    /// # Examples
    ///
    /// ```
    /// use flextensor_core::{BufferConfig, DenseND};
    ///
    /// let a = DenseND::<f64>::arange(3).reshape(&[3, 1]).unwrap();
    /// let b = DenseND::<f64>::arange(2).reshape(&[1, 2]).unwrap();
    /// let max = a.zip_with(&b, &BufferConfig::default(), |x, y| if x > y { x } else { y }).unwrap();
    /// assert_eq!(max.shape(), &[3, 2]);
    /// assert_eq!(max[&[0, 1]], 1.0);
    /// ```
    pub fn zip_with<F>(&self, other: &Self, config: &BufferConfig, f: F) -> anyhow::Result<Self>
    where
        F: Fn(T, T) -> T,
    {
        let target = match config.broadcasting {
            Broadcasting::Strict if self.shape() != other.shape() => {
                anyhow::bail!(
                    "Shape mismatch under strict broadcasting: {:?} vs {:?}",
                    self.shape(),
                    other.shape()
                );
            }
            Broadcasting::Strict => self.shape().to_vec(),
            Broadcasting::Numpy => {
                broadcast_shape(self.shape(), other.shape()).ok_or_else(|| {
                    anyhow::anyhow!(
                        "Shapes {:?} and {:?} are not broadcastable",
                        self.shape(),
                        other.shape()
                    )
                })?
            }
        };

        let not_broadcastable = || {
            anyhow::anyhow!(
                "Shapes {:?} and {:?} are not broadcastable",
                self.shape(),
                other.shape()
            )
        };
        let lhs = self
            .data
            .broadcast(IxDyn(&target))
            .ok_or_else(not_broadcastable)?;
        let rhs = other
            .data
            .broadcast(IxDyn(&target))
            .ok_or_else(not_broadcastable)?;

        let data = Zip::from(&lhs)
            .and(&rhs)
            .map_collect(|a, b| f(a.clone(), b.clone()));
        Ok(Self { data })
    }

    /// Element-wise sum with default broadcasting.
    pub fn add(&self, other: &Self) -> anyhow::Result<Self> {
        self.add_with(other, &BufferConfig::default())
    }

    /// Element-wise sum under an explicit configuration.
    pub fn add_with(&self, other: &Self, config: &BufferConfig) -> anyhow::Result<Self> {
        self.zip_with(other, config, |a, b| a + b)
    }

    /// Element-wise difference with default broadcasting.
    pub fn sub(&self, other: &Self) -> anyhow::Result<Self> {
        self.sub_with(other, &BufferConfig::default())
    }

    /// Element-wise difference under an explicit configuration.
    pub fn sub_with(&self, other: &Self, config: &BufferConfig) -> anyhow::Result<Self> {
        self.zip_with(other, config, |a, b| a - b)
    }

    /// Element-wise product with default broadcasting.
    ///
    /// ```
    /// use flextensor_core::DenseND;
    ///
    /// let y = DenseND::<f64>::arange(3).reshape(&[3, 1]).unwrap();
    /// let x = DenseND::<f64>::arange(4).reshape(&[1, 4]).unwrap();
    /// let table = y.mul(&x).unwrap();
    /// assert_eq!(table.shape(), &[3, 4]);
    /// assert_eq!(table[&[2, 3]], 6.0);
    /// ```
    pub fn mul(&self, other: &Self) -> anyhow::Result<Self> {
        self.mul_with(other, &BufferConfig::default())
    }

    /// Element-wise product under an explicit configuration.
    pub fn mul_with(&self, other: &Self, config: &BufferConfig) -> anyhow::Result<Self> {
        self.zip_with(other, config, |a, b| a * b)
    }

    /// Element-wise quotient with default broadcasting.
    pub fn div(&self, other: &Self) -> anyhow::Result<Self> {
        self.div_with(other, &BufferConfig::default())
    }

    /// Element-wise quotient under an explicit configuration.
    pub fn div_with(&self, other: &Self, config: &BufferConfig) -> anyhow::Result<Self> {
        self.zip_with(other, config, |a, b| a / b)
    }

    /// Matrix multiplication of two rank-2 tensors.
    ///
    /// # Errors
    ///
    /// Returns an error if either operand is not 2-D or the inner sizes differ.
    ///
    /// # Examples
    ///
    /// ```
    /// use flextensor_core::DenseND;
    ///
    /// let a = DenseND::<f64>::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
    /// let b = DenseND::<f64>::from_vec(vec![5.0, 6.0, 7.0, 8.0], &[2, 2]).unwrap();
    ///
    /// let c = a.matmul(&b).unwrap();
    /// assert_eq!(c[&[0, 0]], 19.0);
    /// assert_eq!(c[&[1, 1]], 50.0);
    /// ```
    pub fn matmul(&self, other: &Self) -> anyhow::Result<Self> {
        if self.rank() != 2 || other.rank() != 2 {
            anyhow::bail!(
                "Matrix multiplication requires 2D tensors, got ranks {} and {}",
                self.rank(),
                other.rank()
            );
        }

        let lhs = self.data.view().into_dimensionality::<Ix2>()?;
        let rhs = other.data.view().into_dimensionality::<Ix2>()?;
        let (m, k1) = lhs.dim();
        let (k2, n) = rhs.dim();

        if k1 != k2 {
            anyhow::bail!(
                "Matrix dimensions incompatible: ({}, {}) × ({}, {})",
                m,
                k1,
                k2,
                n
            );
        }

        let result = Array2::from_shape_fn((m, n), |(i, j)| {
            let mut sum = T::zero();
            for k in 0..k1 {
                sum = sum + lhs[[i, k]].clone() * rhs[[k, j]].clone();
            }
            sum
        });

        Ok(Self {
            data: result.into_dyn(),
        })
    }
}
