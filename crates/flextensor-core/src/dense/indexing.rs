//! Indexing and slicing operations for tensors
//!
//! Provides numpy-style selection along a single axis. An integer index
//! collapses the axis; a range keeps it.

use super::types::DenseND;
use ndarray::Axis;
use num_traits::Num;
use std::fmt;
use std::ops::{Range, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive};

/// A selection along one axis, with numpy semantics.
///
/// # Examples
///
/// ```
/// use flextensor_core::AxisSlice;
///
/// let index: AxisSlice = 2usize.into();
/// assert!(index.collapses());
///
/// let range: AxisSlice = (1..3).into();
/// assert!(!range.collapses());
///
/// // Every other element, walking backwards
/// let reversed = AxisSlice::range(None, None, -2);
/// assert!(!reversed.collapses());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AxisSlice {
    /// A single position. Negative values count from the end.
    Index(isize),
    /// A half-open range with a non-zero step. Missing bounds default to the
    /// start or end of the axis in the direction of `step`.
    Range {
        start: Option<isize>,
        end: Option<isize>,
        step: isize,
    },
}

impl AxisSlice {
    /// The full axis, `[:]`.
    pub const FULL: AxisSlice = AxisSlice::Range {
        start: None,
        end: None,
        step: 1,
    };

    /// A stepped range, `[start:end:step]`.
    pub fn range(start: Option<isize>, end: Option<isize>, step: isize) -> Self {
        AxisSlice::Range { start, end, step }
    }

    /// Whether applying this slice removes the dimension.
    pub fn collapses(&self) -> bool {
        matches!(self, AxisSlice::Index(_))
    }

    /// Resolve the slice to concrete positions along an axis of length `len`.
    ///
    /// For `Index` this yields exactly one position.
    ///
    /// # Errors
    ///
    /// Returns an error for an out-of-range index or a zero step.
    ///
    /// # Examples
    ///
    /// ```
    /// use flextensor_core::AxisSlice;
    ///
    /// assert_eq!(AxisSlice::Index(-1).positions(4).unwrap(), vec![3]);
    /// assert_eq!(AxisSlice::range(Some(-3), None, 1).positions(5).unwrap(), vec![2, 3, 4]);
    /// assert_eq!(AxisSlice::range(None, None, -2).positions(5).unwrap(), vec![4, 2, 0]);
    /// ```
    pub fn positions(&self, len: usize) -> anyhow::Result<Vec<usize>> {
        let n = len as isize;
        match *self {
            AxisSlice::Index(i) => {
                let resolved = if i < 0 { i + n } else { i };
                if resolved < 0 || resolved >= n {
                    anyhow::bail!("Index {} out of bounds for axis with size {}", i, len);
                }
                Ok(vec![resolved as usize])
            }
            AxisSlice::Range { start, end, step } => {
                if step == 0 {
                    anyhow::bail!("Slice step cannot be zero");
                }
                // Clamp bounds the way numpy does
                let clamp = |bound: isize, low: isize, high: isize| {
                    let b = if bound < 0 { bound + n } else { bound };
                    b.clamp(low, high)
                };
                let mut positions = Vec::new();
                if step > 0 {
                    let lo = start.map_or(0, |s| clamp(s, 0, n));
                    let hi = end.map_or(n, |e| clamp(e, 0, n));
                    let mut i = lo;
                    while i < hi {
                        positions.push(i as usize);
                        i += step;
                    }
                } else {
                    let hi = start.map_or(n - 1, |s| clamp(s, -1, n - 1));
                    let lo = end.map_or(-1, |e| clamp(e, -1, n - 1));
                    let mut i = hi;
                    while i > lo {
                        positions.push(i as usize);
                        i += step;
                    }
                }
                Ok(positions)
            }
        }
    }
}

impl fmt::Display for AxisSlice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisSlice::Index(i) => write!(f, "{}", i),
            AxisSlice::Range { start, end, step } => {
                if let Some(s) = start {
                    write!(f, "{}", s)?;
                }
                write!(f, ":")?;
                if let Some(e) = end {
                    write!(f, "{}", e)?;
                }
                if *step != 1 {
                    write!(f, ":{}", step)?;
                }
                Ok(())
            }
        }
    }
}

impl From<usize> for AxisSlice {
    fn from(i: usize) -> Self {
        AxisSlice::Index(i as isize)
    }
}

impl From<isize> for AxisSlice {
    fn from(i: isize) -> Self {
        AxisSlice::Index(i)
    }
}

impl From<i32> for AxisSlice {
    fn from(i: i32) -> Self {
        AxisSlice::Index(i as isize)
    }
}

impl From<Range<usize>> for AxisSlice {
    fn from(r: Range<usize>) -> Self {
        AxisSlice::range(Some(r.start as isize), Some(r.end as isize), 1)
    }
}

impl From<Range<isize>> for AxisSlice {
    fn from(r: Range<isize>) -> Self {
        AxisSlice::range(Some(r.start), Some(r.end), 1)
    }
}

impl From<Range<i32>> for AxisSlice {
    fn from(r: Range<i32>) -> Self {
        AxisSlice::range(Some(r.start as isize), Some(r.end as isize), 1)
    }
}

impl From<RangeInclusive<usize>> for AxisSlice {
    fn from(r: RangeInclusive<usize>) -> Self {
        AxisSlice::range(Some(*r.start() as isize), Some(*r.end() as isize + 1), 1)
    }
}

impl From<RangeFrom<usize>> for AxisSlice {
    fn from(r: RangeFrom<usize>) -> Self {
        AxisSlice::range(Some(r.start as isize), None, 1)
    }
}

impl From<RangeTo<usize>> for AxisSlice {
    fn from(r: RangeTo<usize>) -> Self {
        AxisSlice::range(None, Some(r.end as isize), 1)
    }
}

impl From<RangeToInclusive<usize>> for AxisSlice {
    fn from(r: RangeToInclusive<usize>) -> Self {
        AxisSlice::range(None, Some(r.end as isize + 1), 1)
    }
}

impl From<RangeFull> for AxisSlice {
    fn from(_: RangeFull) -> Self {
        AxisSlice::FULL
    }
}

impl<T> DenseND<T>
where
    T: Clone + Num,
{
    /// Apply a slice along one axis.
    ///
    /// An `Index` removes the axis from the result; a `Range` keeps it with
    /// the selected length.
    ///
    /// # Errors
    ///
    /// Returns an error if the axis is out of bounds, the index is out of
    /// range, or the step is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use flextensor_core::{AxisSlice, DenseND};
    ///
    /// let tensor = DenseND::<f64>::arange(12).reshape(&[3, 4]).unwrap();
    ///
    /// let row = tensor.slice_axis(0, &AxisSlice::Index(1)).unwrap();
    /// assert_eq!(row.shape(), &[4]);
    /// assert_eq!(row[&[0]], 4.0);
    ///
    /// let cols = tensor.slice_axis(1, &(1..3).into()).unwrap();
    /// assert_eq!(cols.shape(), &[3, 2]);
    /// assert_eq!(cols[&[2, 1]], 10.0);
    /// ```
    pub fn slice_axis(&self, axis: usize, slice: &AxisSlice) -> anyhow::Result<Self> {
        if axis >= self.rank() {
            anyhow::bail!("Axis {} out of bounds for rank {}", axis, self.rank());
        }
        let positions = slice.positions(self.shape()[axis])?;
        let data = match slice {
            AxisSlice::Index(_) => self.data.index_axis(Axis(axis), positions[0]).to_owned(),
            AxisSlice::Range { .. } => self.data.select(Axis(axis), &positions),
        };
        Ok(Self { data })
    }

    /// Select specific positions along an axis, keeping the axis.
    ///
    /// # Errors
    ///
    /// Returns an error if the axis or any position is out of bounds.
    pub fn select_indices(&self, indices: &[usize], axis: usize) -> anyhow::Result<Self> {
        if axis >= self.rank() {
            anyhow::bail!("Axis {} out of bounds for rank {}", axis, self.rank());
        }

        for &idx in indices {
            if idx >= self.shape()[axis] {
                anyhow::bail!(
                    "Index {} out of bounds for axis {} with size {}",
                    idx,
                    axis,
                    self.shape()[axis]
                );
            }
        }

        Ok(Self {
            data: self.data.select(Axis(axis), indices),
        })
    }
}
