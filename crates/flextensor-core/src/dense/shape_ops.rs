//! Shape manipulation operations on tensors
//!
//! Reshape, permute, and unit-axis insertion/removal. These are the
//! primitives the labeled-axis planner composes; none of them reorders
//! elements in logical row-major order except `permute`.

use super::types::DenseND;
use ndarray::{Axis, IxDyn};
use num_traits::Num;

impl<T> DenseND<T>
where
    T: Clone + Num,
{
    /// Reshape the tensor to a new shape
    ///
    /// Elements are read and written in logical row-major order.
    ///
    /// # Errors
    ///
    /// Returns an error if the total size doesn't match.
    ///
    /// # Examples
    ///
    /// ```
    /// use flextensor_core::DenseND;
    ///
    /// let tensor = DenseND::<f64>::zeros(&[2, 3, 4]);
    /// let reshaped = tensor.reshape(&[6, 4]).unwrap();
    /// assert_eq!(reshaped.shape(), &[6, 4]);
    /// ```
    pub fn reshape(&self, new_shape: &[usize]) -> anyhow::Result<Self> {
        let new_size: usize = new_shape.iter().product();
        let old_size = self.len();
        if new_size != old_size {
            anyhow::bail!(
                "Cannot reshape tensor of size {} into shape {:?} (size {})",
                old_size,
                new_shape,
                new_size
            );
        }
        if let Ok(reshaped) = self.data.view().into_shape_with_order(IxDyn(new_shape)) {
            Ok(Self {
                data: reshaped.to_owned(),
            })
        } else {
            // Non-contiguous after a permute: fall back to a logical-order copy
            Self::from_vec(self.to_vec(), new_shape)
        }
    }

    /// Permute (transpose) the axes of the tensor.
    ///
    /// `axes[i]` names the source axis that lands at position `i`.
    ///
    /// # Errors
    ///
    /// Returns an error if `axes` is not a valid permutation.
    ///
    /// # Examples
    ///
    /// ```
    /// use flextensor_core::DenseND;
    ///
    /// let tensor = DenseND::<f64>::zeros(&[2, 3, 4]);
    /// let permuted = tensor.permute(&[2, 0, 1]).unwrap();
    /// assert_eq!(permuted.shape(), &[4, 2, 3]);
    /// ```
    pub fn permute(&self, axes: &[usize]) -> anyhow::Result<Self> {
        if axes.len() != self.rank() {
            anyhow::bail!(
                "Permutation axes length {} does not match tensor rank {}",
                axes.len(),
                self.rank()
            );
        }
        let mut seen = vec![false; self.rank()];
        for &axis in axes {
            if axis >= self.rank() {
                anyhow::bail!("Invalid axis {} for rank {}", axis, self.rank());
            }
            if seen[axis] {
                anyhow::bail!("Duplicate axis {} in permutation", axis);
            }
            seen[axis] = true;
        }
        let permuted = self.data.clone().permuted_axes(IxDyn(axes));
        Ok(Self { data: permuted })
    }

    /// Insert a new dimension of size 1 at `axis` (`0..=rank`).
    ///
    /// # Examples
    ///
    /// ```
    /// use flextensor_core::DenseND;
    ///
    /// let tensor = DenseND::<f64>::zeros(&[2, 3]);
    /// assert_eq!(tensor.insert_axis(2).unwrap().shape(), &[2, 3, 1]);
    /// assert_eq!(tensor.insert_axis(0).unwrap().shape(), &[1, 2, 3]);
    /// ```
    pub fn insert_axis(&self, axis: usize) -> anyhow::Result<Self> {
        if axis > self.rank() {
            anyhow::bail!(
                "Cannot insert axis at {} for tensor of rank {}",
                axis,
                self.rank()
            );
        }
        Ok(Self {
            data: self.data.clone().insert_axis(Axis(axis)),
        })
    }

    /// Remove a degenerate (size-1) dimension by reshaping it away.
    ///
    /// # Errors
    ///
    /// Returns an error if the axis is out of bounds or doesn't have size 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use flextensor_core::DenseND;
    ///
    /// let tensor = DenseND::<f64>::zeros(&[3, 1, 5]);
    /// assert_eq!(tensor.remove_axis(1).unwrap().shape(), &[3, 5]);
    /// assert!(tensor.remove_axis(0).is_err());
    /// ```
    pub fn remove_axis(&self, axis: usize) -> anyhow::Result<Self> {
        if axis >= self.rank() {
            anyhow::bail!("Axis {} out of bounds for rank {}", axis, self.rank());
        }
        if self.shape()[axis] != 1 {
            anyhow::bail!(
                "Cannot remove axis {} with size {}",
                axis,
                self.shape()[axis]
            );
        }

        let mut new_shape = self.shape().to_vec();
        new_shape.remove(axis);
        self.reshape(&new_shape)
    }
}
