//! Trait implementations for `DenseND`
//!
//! - `Index` / `IndexMut` by slice or fixed-size array of positions
//! - `Debug`, `Display`
//! - `From<ArrayD<T>>`

use super::types::DenseND;
use crate::config::BufferConfig;
use ndarray::{ArrayD, IxDyn};
use num_traits::Num;
use std::fmt;

impl<T> std::ops::Index<&[usize]> for DenseND<T> {
    type Output = T;
    fn index(&self, index: &[usize]) -> &Self::Output {
        &self.data[IxDyn(index)]
    }
}

impl<T> std::ops::IndexMut<&[usize]> for DenseND<T> {
    fn index_mut(&mut self, index: &[usize]) -> &mut Self::Output {
        &mut self.data[IxDyn(index)]
    }
}

impl<T, const N: usize> std::ops::Index<&[usize; N]> for DenseND<T> {
    type Output = T;
    fn index(&self, index: &[usize; N]) -> &Self::Output {
        &self.data[IxDyn(index)]
    }
}

impl<T, const N: usize> std::ops::IndexMut<&[usize; N]> for DenseND<T> {
    fn index_mut(&mut self, index: &[usize; N]) -> &mut Self::Output {
        &mut self.data[IxDyn(index)]
    }
}

impl<T: fmt::Debug + Clone + Num> fmt::Debug for DenseND<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DenseND")
            .field("shape", &self.shape())
            .field("rank", &self.rank())
            .field("data", &self.data)
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for DenseND<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.data, f)
    }
}

impl<T: fmt::Display> DenseND<T> {
    /// Render the buffer as text, honoring `config.precision`.
    ///
    /// # Examples
    ///
    /// ```
    /// use flextensor_core::{BufferConfig, DenseND};
    ///
    /// let tensor = DenseND::<f64>::from_vec(vec![0.5, 1.26], &[2]).unwrap();
    /// let text = tensor.render(&BufferConfig::default().with_precision(1));
    /// assert_eq!(text, "[0.5, 1.3]");
    /// ```
    pub fn render(&self, config: &BufferConfig) -> String {
        match config.precision {
            Some(precision) => format!("{:.*}", precision, self.data),
            None => format!("{}", self.data),
        }
    }
}

impl<T> From<ArrayD<T>> for DenseND<T> {
    fn from(data: ArrayD<T>) -> Self {
        Self { data }
    }
}
