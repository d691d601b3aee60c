//! Error types for labeled-axis operations
//!
//! Axis bookkeeping failures get their own variants; anything the dense
//! buffer reports is carried unchanged in [`AxisError::Buffer`].
//!
//! # Examples
//!
//! ```
//! use flextensor::{AxisError, FlexTensor};
//!
//! let t = FlexTensor::<f64>::from_vec(vec![0.0; 6], &[2, 3], ["rows", "cols"]).unwrap();
//! match t.shape_of(["depth"]) {
//!     Err(AxisError::UnknownAxis { label }) => assert_eq!(label, "depth"),
//!     other => panic!("unexpected: {:?}", other),
//! }
//! ```

use thiserror::Error;

/// Errors raised while resolving, planning or combining labeled axes
#[derive(Error, Debug)]
pub enum AxisError {
    /// Name not present in the tensor's axis list
    #[error("Unknown axis '{label}'")]
    UnknownAxis { label: String },

    /// Integer label outside `-rank..rank`
    #[error("Axis position {position} out of range for rank {rank}")]
    PositionOutOfRange { position: isize, rank: usize },

    /// More than one ellipsis in a single index expression
    #[error("An index expression may contain at most one ellipsis")]
    DuplicateEllipsis,

    /// The same source axis used by more than one specifier
    #[error("Axis '{label}' is referenced more than once")]
    DuplicateAxis { label: String },

    /// Flatten group without members
    #[error("Flatten group must name at least one axis")]
    EmptyGroup,

    /// A name given to more than one dimension
    #[error("Axis name '{label}' is used for more than one dimension")]
    DuplicateLabel { label: String },

    /// Elementwise operands whose shapes cannot be combined
    #[error("Shapes {left:?} and {right:?} are not compatible")]
    AxisMismatch { left: Vec<usize>, right: Vec<usize> },

    /// Label list whose length differs from the buffer's rank
    #[error("{labels} axis labels given for a rank-{rank} buffer")]
    LabelCount { labels: usize, rank: usize },

    /// Pivot product on operands that are not both rank 2
    #[error("Pivot product requires rank-2 operands, got ranks {left} and {right}")]
    UnsupportedRank { left: usize, right: usize },

    /// Failure reported by the dense buffer layer
    #[error("Buffer error: {0}")]
    Buffer(#[from] anyhow::Error),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, AxisError>;
