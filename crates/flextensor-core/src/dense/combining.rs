//! Tensor combining and splitting operations
//!
//! Concatenation along an existing axis and splitting into equal blocks.
//! Together they generalize a row-major reshape to non-adjacent axes.

use super::types::DenseND;
use ndarray::Axis;
use num_traits::Num;

impl<T> DenseND<T>
where
    T: Clone + Num,
{
    /// Concatenate multiple tensors along an existing axis.
    ///
    /// All tensors must have the same shape except along the concatenation axis.
    ///
    /// # Complexity
    ///
    /// O(n) where n is the total number of elements across all tensors
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The tensor list is empty
    /// - Shapes are incompatible
    /// - Axis is out of bounds
    ///
    /// # Examples
    ///
    /// ```
    /// use flextensor_core::DenseND;
    ///
    /// let a = DenseND::<f64>::ones(&[2, 3]);
    /// let b = DenseND::<f64>::zeros(&[2, 3]);
    ///
    /// let concatenated = DenseND::concatenate(&[a, b], 0).unwrap();
    /// assert_eq!(concatenated.shape(), &[4, 3]);
    /// ```
    pub fn concatenate(tensors: &[Self], axis: usize) -> anyhow::Result<Self> {
        if tensors.is_empty() {
            anyhow::bail!("Cannot concatenate empty tensor list");
        }

        let rank = tensors[0].rank();
        if axis >= rank {
            anyhow::bail!("Axis {} out of bounds for rank {}", axis, rank);
        }

        let reference_shape = tensors[0].shape();
        for (i, tensor) in tensors.iter().enumerate().skip(1) {
            if tensor.rank() != rank {
                anyhow::bail!("Tensor {} has rank {}, expected {}", i, tensor.rank(), rank);
            }
            for (dim, (&s1, &s2)) in reference_shape
                .iter()
                .zip(tensor.shape().iter())
                .enumerate()
            {
                if dim != axis && s1 != s2 {
                    anyhow::bail!("Shape mismatch at dimension {}: {} vs {}", dim, s1, s2);
                }
            }
        }

        let views: Vec<_> = tensors.iter().map(|t| t.data.view()).collect();
        let concatenated = ndarray::concatenate(Axis(axis), &views)?;

        Ok(Self { data: concatenated })
    }

    /// Split a tensor into `num_splits` equal blocks along an axis.
    ///
    /// # Complexity
    ///
    /// O(n) where n is the total number of elements
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Axis is out of bounds
    /// - `num_splits` is zero
    /// - The axis size is not evenly divisible by `num_splits`
    ///
    /// # Examples
    ///
    /// ```
    /// use flextensor_core::DenseND;
    ///
    /// let tensor = DenseND::<f64>::ones(&[4, 3]);
    /// let parts = tensor.split(2, 0).unwrap();
    ///
    /// assert_eq!(parts.len(), 2);
    /// assert_eq!(parts[0].shape(), &[2, 3]);
    /// assert_eq!(parts[1].shape(), &[2, 3]);
    /// ```
    pub fn split(&self, num_splits: usize, axis: usize) -> anyhow::Result<Vec<Self>> {
        if axis >= self.rank() {
            anyhow::bail!("Axis {} out of bounds for rank {}", axis, self.rank());
        }
        if num_splits == 0 {
            anyhow::bail!("Number of splits must be greater than 0");
        }

        let axis_size = self.shape()[axis];
        if axis_size % num_splits != 0 {
            anyhow::bail!(
                "Axis size {} is not evenly divisible by num_splits {}",
                axis_size,
                num_splits
            );
        }

        let split_size = axis_size / num_splits;
        let mut result = Vec::with_capacity(num_splits);

        for i in 0..num_splits {
            let indices: Vec<usize> = (i * split_size..(i + 1) * split_size).collect();
            result.push(self.select_indices(&indices, axis)?);
        }

        Ok(result)
    }
}
