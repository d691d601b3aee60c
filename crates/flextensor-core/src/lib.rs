//! # flextensor-core
//!
//! Dense N-dimensional buffer layer for flextensor.
//!
//! This crate provides the positional building blocks that labeled-axis
//! tensors are planned on top of:
//!
//! - **Dense tensor representation** ([`DenseND`]) backed by `ndarray`
//! - **Per-axis slicing** ([`AxisSlice`]) with numpy semantics
//! - **Shape operations** (reshape, permute, insert/remove unit axes)
//! - **Split and concatenate** along arbitrary axes
//! - **Broadcasting arithmetic** and a 2-D matrix product, configured by
//!   [`BufferConfig`]
//!
//! ## Memory Layout
//!
//! Tensors default to C-contiguous (row-major) layout. Permutation rewrites
//! strides only; reshape copies when the current layout cannot be viewed in
//! the new shape.
//!
//! ## Safety
//!
//! All indexing through the fallible API is bounds-checked. No unsafe code.
//!
//! ## Quick Start
//!
//! ```
//! use flextensor_core::{AxisSlice, DenseND};
//!
//! let tensor = DenseND::<f64>::arange(24).reshape(&[2, 3, 4]).unwrap();
//!
//! // Take the last row of the middle axis
//! let sliced = tensor.slice_axis(1, &AxisSlice::Index(-1)).unwrap();
//! assert_eq!(sliced.shape(), &[2, 4]);
//!
//! // Permute axes (transpose generalization)
//! let permuted = tensor.permute(&[2, 0, 1]).unwrap();
//! assert_eq!(permuted.shape(), &[4, 2, 3]);
//! ```
//!
//! ## Broadcasting
//!
//! ```
//! use flextensor_core::{BufferConfig, DenseND};
//!
//! let y = DenseND::<f64>::arange(10).reshape(&[10, 1]).unwrap();
//! let x = DenseND::<f64>::arange(10).reshape(&[1, 10]).unwrap();
//!
//! let table = y.mul(&x).unwrap();
//! assert_eq!(table.shape(), &[10, 10]);
//!
//! // Strict mode refuses to stretch operands
//! assert!(y.mul_with(&x, &BufferConfig::strict()).is_err());
//! ```

pub mod config;
pub mod dense;

#[cfg(test)]
mod property_tests;

pub use config::{Broadcasting, BufferConfig};
pub use dense::{broadcast_shape, shapes_broadcastable, AxisSlice, DenseND};
