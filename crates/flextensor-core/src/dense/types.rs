//! Dense tensor type definition and basic operations
//!
//! This module defines the core `DenseND<T>` type and provides creation
//! and accessor methods. Shape, slicing, combining and arithmetic operations
//! live in the sibling modules.

use ndarray::{Array, ArrayView, IxDyn};
use num_traits::Num;

/// Dense N-dimensional buffer backed by an `ndarray` dynamic-rank array.
///
/// This is the storage collaborator behind labeled tensors: it knows nothing
/// about axis names, only positions.
///
/// # Type Parameters
///
/// * `T` - The element type (typically `f32` or `f64`)
///
/// # Memory Layout
///
/// Freshly built buffers are C-contiguous (row-major). Permutation only
/// rewrites strides, so element order is always observed logically.
///
/// # Examples
///
/// ```
/// use flextensor_core::DenseND;
///
/// let tensor = DenseND::<f64>::zeros(&[2, 3, 4]);
/// assert_eq!(tensor.shape(), &[2, 3, 4]);
/// assert_eq!(tensor.rank(), 3);
/// ```
#[derive(Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(bound(serialize = "T: serde::Serialize")))]
#[cfg_attr(
    feature = "serde",
    serde(bound(deserialize = "T: serde::Deserialize<'de>"))
)]
pub struct DenseND<T> {
    /// Underlying ndarray storage
    pub(crate) data: Array<T, IxDyn>,
}

impl<T> DenseND<T>
where
    T: Clone + Num,
{
    /// Create a tensor from an existing ndarray
    ///
    /// # Examples
    ///
    /// ```
    /// use ndarray::{Array, IxDyn};
    /// use flextensor_core::DenseND;
    ///
    /// let arr = Array::<f64, _>::zeros(IxDyn(&[2, 3]));
    /// let tensor = DenseND::from_array(arr);
    /// assert_eq!(tensor.shape(), &[2, 3]);
    /// ```
    pub fn from_array(array: Array<T, IxDyn>) -> Self {
        Self { data: array }
    }

    /// Create a tensor from a vector with given shape
    ///
    /// # Arguments
    ///
    /// * `vec` - Flattened data in row-major order
    /// * `shape` - Target shape
    ///
    /// # Errors
    ///
    /// Returns an error if the element count doesn't match the shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use flextensor_core::DenseND;
    ///
    /// let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    /// let tensor = DenseND::from_vec(data, &[2, 3]).unwrap();
    /// assert_eq!(tensor.shape(), &[2, 3]);
    /// assert_eq!(tensor[&[1, 2]], 6.0);
    /// ```
    pub fn from_vec(vec: Vec<T>, shape: &[usize]) -> anyhow::Result<Self> {
        let total: usize = shape.iter().product();
        if vec.len() != total {
            anyhow::bail!(
                "Shape {:?} requires {} elements, but got {}",
                shape,
                total,
                vec.len()
            );
        }
        let array = Array::from_shape_vec(IxDyn(shape), vec)?;
        Ok(Self { data: array })
    }

    /// Create a tensor filled with a single value.
    pub fn from_elem(shape: &[usize], value: T) -> Self {
        Self {
            data: Array::from_elem(IxDyn(shape), value),
        }
    }

    /// Create a tensor filled with zeros.
    ///
    /// ```
    /// use flextensor_core::DenseND;
    ///
    /// let tensor = DenseND::<f32>::zeros(&[2, 2]);
    /// assert_eq!(tensor[&[1, 1]], 0.0);
    /// ```
    pub fn zeros(shape: &[usize]) -> Self {
        Self::from_elem(shape, T::zero())
    }

    /// Create a tensor filled with ones.
    pub fn ones(shape: &[usize]) -> Self {
        Self::from_elem(shape, T::one())
    }

    /// Create a rank-1 tensor holding `0, 1, ..., n - 1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use flextensor_core::DenseND;
    ///
    /// let x = DenseND::<f64>::arange(4);
    /// assert_eq!(x.shape(), &[4]);
    /// assert_eq!(x[&[3]], 3.0);
    /// ```
    pub fn arange(n: usize) -> Self {
        let mut values = Vec::with_capacity(n);
        let mut next = T::zero();
        for _ in 0..n {
            values.push(next.clone());
            next = next + T::one();
        }
        Self {
            data: Array::from_vec(values).into_dyn(),
        }
    }

    /// Get the rank (number of dimensions) of this tensor
    ///
    /// ```
    /// use flextensor_core::DenseND;
    ///
    /// let tensor = DenseND::<f32>::zeros(&[2, 3, 4]);
    /// assert_eq!(tensor.rank(), 3);
    /// ```
    pub fn rank(&self) -> usize {
        self.data.ndim()
    }

    /// Get the shape of this tensor
    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    /// Get the total number of elements
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the tensor is empty (has zero elements)
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Check if the tensor is contiguous in memory.
    pub fn is_contiguous(&self) -> bool {
        self.data.is_standard_layout()
    }

    /// Borrow the underlying array.
    pub fn as_array(&self) -> &Array<T, IxDyn> {
        &self.data
    }

    /// Consume the tensor and return the underlying array.
    pub fn into_array(self) -> Array<T, IxDyn> {
        self.data
    }

    /// Immutable view over the whole buffer.
    pub fn view(&self) -> ArrayView<'_, T, IxDyn> {
        self.data.view()
    }

    /// Bounds-checked element access.
    ///
    /// Returns `None` when the index has the wrong length or is out of range.
    pub fn get(&self, index: &[usize]) -> Option<&T> {
        if index.len() != self.rank() {
            return None;
        }
        self.data.get(IxDyn(index))
    }

    /// Elements in logical row-major order, regardless of memory layout.
    pub fn to_vec(&self) -> Vec<T> {
        self.data.iter().cloned().collect()
    }
}
