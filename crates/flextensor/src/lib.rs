//! # flextensor
//!
//! Labeled-axis tensors: every dimension of a dense buffer carries a name
//! (or is anonymous), and one indexing call can slice, reorder, insert,
//! drop and merge dimensions by name.
//!
//! ## Quick Start
//!
//! ```
//! use flextensor::{ix, FlexTensor};
//!
//! let ratings = FlexTensor::<f64>::from_vec(
//!     (0..12).map(|v| v as f64).collect(),
//!     &[4, 3],
//!     ["customers", "values"],
//! )
//! .unwrap();
//!
//! // Reorder by name
//! let by_value = ratings.index(ix!["values", "customers"]).unwrap();
//! assert_eq!(by_value.shape(), &[3, 4]);
//!
//! // Slice by name; an integer index drops the axis
//! let first = ratings.index(ix![("customers", 0)]).unwrap();
//! assert_eq!(first.axis_names(), vec!["values"]);
//!
//! // Insert a unit axis and merge axes
//! let flat = ratings.index(ix!["", ["values", "customers"]]).unwrap();
//! assert_eq!(flat.shape(), &[1, 12]);
//! ```
//!
//! ## Index Expressions
//!
//! An index expression is a list of [`AxisArg`]s, usually built with
//! [`ix!`]:
//!
//! | Form | Effect |
//! |---|---|
//! | `"name"` or a position | place that axis next |
//! | `("name", slice)` | slice the axis; an integer index removes it |
//! | `["a", "b", ..]` | merge the axes into one, row-major in listed order |
//! | `""` / [`NEW_AXIS`] / [`AxisArg::new_axes`] | insert size-1 axes |
//! | `..` / [`ELLIPSIS`] | all unmentioned axes, in original order |
//!
//! Axes that are not mentioned and have no ellipsis to go to are appended
//! after the explicitly placed ones.
//!
//! ## Arithmetic
//!
//! Elementwise operations broadcast like numpy and merge labels from the
//! trailing end; a placeholder on the left takes the right operand's name.
//! [`FlexTensor::pivot`] multiplies two rank-2 tensors and keeps the outer
//! labels.
//!
//! ```
//! use flextensor::{ix, FlexTensor};
//!
//! let values: Vec<f64> = (0..10).map(|v| v as f64).collect();
//! let y = FlexTensor::from_vec(values.clone(), &[10], ["y"]).unwrap();
//! let x = FlexTensor::from_vec(values, &[10], ["x"]).unwrap();
//!
//! let table = (&y.index(ix!["y", ""]).unwrap() * &x.index(ix!["", "x"]).unwrap()).unwrap();
//! assert_eq!(table.shape(), &[10, 10]);
//! assert_eq!(table.axis_names(), vec!["y", "x"]);
//! ```
//!
//! ## Logging
//!
//! Plans and permutations are reported through the `log` facade at
//! `debug`/`trace` level. No logger is installed by the library.
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for tensors, labels and
//!   [`BufferConfig`]. Deserialized tensors are checked like constructed
//!   ones: unique names, one label per dimension.

pub(crate) mod assembler;
pub mod args;
pub mod error;
pub(crate) mod executor;
pub mod label;
pub mod merge;
pub mod parser;
pub mod registry;
pub mod tensor;


pub use args::{AxisArg, ELLIPSIS, NEW_AXIS};
pub use error::{AxisError, Result};
pub use label::{AxisLabel, Label};
pub use registry::{AxisRegistry, Resolved};
pub use tensor::FlexTensor;

pub use flextensor_core::{AxisSlice, Broadcasting, BufferConfig, DenseND};

/// Build an index expression.
///
/// Each element is converted with [`AxisArg::from`].
///
/// ```
/// use flextensor::{ix, AxisArg};
///
/// let args = ix!["a", ("b", 0), ["c", "d"], "", ..];
/// assert_eq!(args.len(), 5);
/// assert_eq!(args[3], AxisArg::NewAxis);
/// assert_eq!(args[4], AxisArg::Ellipsis);
/// ```
#[macro_export]
macro_rules! ix {
    ($($arg:expr),* $(,)?) => {
        vec![$($crate::AxisArg::from($arg)),*]
    };
}

pub mod prelude {
    //! Prelude module for convenient imports
    //!
    //! ```
    //! use flextensor::prelude::*;
    //!
    //! let t = FlexTensor::new(DenseND::<f64>::zeros(&[2, 3]), ["rows", "cols"]).unwrap();
    //! assert_eq!(t.index(ix!["cols", ..]).unwrap().shape(), &[3, 2]);
    //! ```

    pub use crate::ix;
    pub use crate::{
        AxisArg, AxisError, AxisLabel, AxisSlice, BufferConfig, DenseND, FlexTensor, Label,
        ELLIPSIS, NEW_AXIS,
    };
}
