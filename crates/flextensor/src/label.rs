//! Axis labels
//!
//! Two related types:
//! - [`AxisLabel`] is what a tensor stores per dimension: a name or the
//!   anonymous placeholder.
//! - [`Label`] is what callers use to refer to an axis: a name or an
//!   integer position.

use std::fmt;

/// The label stored for one dimension of a tensor.
///
/// The empty string converts to [`AxisLabel::Placeholder`]. Placeholders may
/// repeat within a tensor and can only be addressed by position.
///
/// # Examples
///
/// ```
/// use flextensor::AxisLabel;
///
/// let named = AxisLabel::from("time");
/// assert_eq!(named.name(), Some("time"));
///
/// let anonymous = AxisLabel::from("");
/// assert!(anonymous.is_placeholder());
/// assert_eq!(anonymous.to_string(), "");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AxisLabel {
    /// A non-empty axis name
    Named(String),
    /// The anonymous label
    #[default]
    Placeholder,
}

impl AxisLabel {
    /// Build a label from a name; an empty name yields the placeholder.
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        if name.is_empty() {
            AxisLabel::Placeholder
        } else {
            AxisLabel::Named(name)
        }
    }

    /// Whether this is the anonymous label.
    pub fn is_placeholder(&self) -> bool {
        matches!(self, AxisLabel::Placeholder)
    }

    /// The name, if any.
    pub fn name(&self) -> Option<&str> {
        match self {
            AxisLabel::Named(name) => Some(name),
            AxisLabel::Placeholder => None,
        }
    }
}

impl fmt::Display for AxisLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name().unwrap_or(""))
    }
}

impl From<&str> for AxisLabel {
    fn from(name: &str) -> Self {
        AxisLabel::named(name)
    }
}

impl From<String> for AxisLabel {
    fn from(name: String) -> Self {
        AxisLabel::named(name)
    }
}

impl From<&String> for AxisLabel {
    fn from(name: &String) -> Self {
        AxisLabel::named(name.as_str())
    }
}

impl From<&AxisLabel> for AxisLabel {
    fn from(label: &AxisLabel) -> Self {
        label.clone()
    }
}

/// A reference to an axis by name or by position.
///
/// Negative positions count from the last axis.
///
/// ```
/// use flextensor::Label;
///
/// assert_eq!(Label::from("rows"), Label::Name("rows".to_string()));
/// assert_eq!(Label::from(1usize), Label::Position(1));
/// assert_eq!(Label::from(-1), Label::Position(-1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Label {
    Name(String),
    Position(isize),
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Name(name) => f.write_str(name),
            Label::Position(position) => write!(f, "{}", position),
        }
    }
}

impl From<&str> for Label {
    fn from(name: &str) -> Self {
        Label::Name(name.to_string())
    }
}

impl From<String> for Label {
    fn from(name: String) -> Self {
        Label::Name(name)
    }
}

impl From<&String> for Label {
    fn from(name: &String) -> Self {
        Label::Name(name.clone())
    }
}

impl From<usize> for Label {
    fn from(position: usize) -> Self {
        Label::Position(position as isize)
    }
}

impl From<isize> for Label {
    fn from(position: isize) -> Self {
        Label::Position(position)
    }
}

impl From<i32> for Label {
    fn from(position: i32) -> Self {
        Label::Position(position as isize)
    }
}

impl From<&Label> for Label {
    fn from(label: &Label) -> Self {
        label.clone()
    }
}
