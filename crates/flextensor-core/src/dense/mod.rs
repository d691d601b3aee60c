//! Dense tensor implementation
//!
//! Split by concern:
//! - `types`: the `DenseND` type, creation and accessors
//! - `shape_ops`: reshape, permute, unit-axis insertion and removal
//! - `indexing`: `AxisSlice` and per-axis selection
//! - `combining`: split and concatenate
//! - `elementwise`: broadcasting arithmetic and matrix product
//! - `densend_traits`: `Index`, `Debug`, `Display`, conversions

pub mod combining;
pub mod densend_traits;
pub mod elementwise;
pub mod indexing;
pub mod shape_ops;
pub mod types;

pub use elementwise::{broadcast_shape, shapes_broadcastable};
pub use indexing::AxisSlice;
pub use types::DenseND;
