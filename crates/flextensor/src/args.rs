//! Index arguments
//!
//! [`AxisArg`] is the tagged form of everything that may appear in an index
//! expression. Conversions let plain Rust values stand in for each kind:
//!
//! | Value | Argument |
//! |---|---|
//! | `"name"`, `2usize`, `-1` | [`AxisArg::Label`] |
//! | `("name", slice)` | [`AxisArg::Slice`] |
//! | `["a", "b"]`, `vec![..]` | [`AxisArg::Flatten`] |
//! | `""` | [`AxisArg::NewAxis`] |
//! | `..` | [`AxisArg::Ellipsis`] |

use crate::label::Label;
use flextensor_core::AxisSlice;
use std::ops::RangeFull;

/// Insert one unit axis.
pub const NEW_AXIS: AxisArg = AxisArg::NewAxis;

/// All axes not referenced elsewhere, in original order.
pub const ELLIPSIS: AxisArg = AxisArg::Ellipsis;

/// One element of an index expression.
///
/// # Examples
///
/// ```
/// use flextensor::{AxisArg, AxisSlice, Label};
///
/// assert_eq!(AxisArg::from("rows"), AxisArg::Label(Label::from("rows")));
/// assert_eq!(AxisArg::from(""), AxisArg::NewAxis);
/// assert_eq!(AxisArg::from(..), AxisArg::Ellipsis);
/// assert_eq!(
///     AxisArg::from(("rows", 1..3)),
///     AxisArg::Slice(Label::from("rows"), AxisSlice::range(Some(1), Some(3), 1))
/// );
/// assert_eq!(
///     AxisArg::from(["a", "b"]),
///     AxisArg::Flatten(vec![Label::from("a"), Label::from("b")])
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AxisArg {
    /// Move an existing axis to the next output position
    Label(Label),
    /// Slice or index an axis, then place it unless the slice collapses it
    Slice(Label, AxisSlice),
    /// Merge the listed axes into one, row-major in listed order
    Flatten(Vec<Label>),
    /// A new size-1 axis
    NewAxis,
    /// Several new size-1 axes
    NewAxes(usize),
    /// Where unreferenced axes go
    Ellipsis,
}

impl AxisArg {
    /// `n` consecutive new axes.
    pub fn new_axes(n: usize) -> Self {
        AxisArg::NewAxes(n)
    }

    /// Slice clause on `label`.
    pub fn slice(label: impl Into<Label>, slice: impl Into<AxisSlice>) -> Self {
        AxisArg::Slice(label.into(), slice.into())
    }

    /// Flatten group over `labels`.
    pub fn flatten<I, L>(labels: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<Label>,
    {
        AxisArg::Flatten(labels.into_iter().map(Into::into).collect())
    }
}

impl From<&str> for AxisArg {
    fn from(name: &str) -> Self {
        if name.is_empty() {
            AxisArg::NewAxis
        } else {
            AxisArg::Label(Label::from(name))
        }
    }
}

impl From<String> for AxisArg {
    fn from(name: String) -> Self {
        AxisArg::from(name.as_str())
    }
}

impl From<&String> for AxisArg {
    fn from(name: &String) -> Self {
        AxisArg::from(name.as_str())
    }
}

impl From<usize> for AxisArg {
    fn from(position: usize) -> Self {
        AxisArg::Label(Label::from(position))
    }
}

impl From<isize> for AxisArg {
    fn from(position: isize) -> Self {
        AxisArg::Label(Label::from(position))
    }
}

impl From<i32> for AxisArg {
    fn from(position: i32) -> Self {
        AxisArg::Label(Label::from(position))
    }
}

impl From<Label> for AxisArg {
    fn from(label: Label) -> Self {
        AxisArg::Label(label)
    }
}

impl From<&AxisArg> for AxisArg {
    fn from(arg: &AxisArg) -> Self {
        arg.clone()
    }
}

impl From<RangeFull> for AxisArg {
    fn from(_: RangeFull) -> Self {
        AxisArg::Ellipsis
    }
}

impl<L, S> From<(L, S)> for AxisArg
where
    L: Into<Label>,
    S: Into<AxisSlice>,
{
    fn from((label, slice): (L, S)) -> Self {
        AxisArg::slice(label, slice)
    }
}

impl<L, const N: usize> From<[L; N]> for AxisArg
where
    L: Into<Label>,
{
    fn from(labels: [L; N]) -> Self {
        AxisArg::flatten(labels)
    }
}

impl<L> From<Vec<L>> for AxisArg
where
    L: Into<Label>,
{
    fn from(labels: Vec<L>) -> Self {
        AxisArg::flatten(labels)
    }
}
