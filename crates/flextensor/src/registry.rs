//! Axis registry: the ordered label list of a tensor
//!
//! Resolves caller [`Label`]s to positions and enforces that a non-placeholder
//! name appears at most once.

use crate::error::{AxisError, Result};
use crate::label::{AxisLabel, Label};
use std::collections::HashSet;

/// Result of resolving one or more labels.
///
/// A single label resolves to [`Resolved::One`]; any other count gives
/// [`Resolved::Many`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    One(usize),
    Many(Vec<usize>),
}

impl Resolved {
    /// Positions as a list, whatever the count.
    pub fn into_vec(self) -> Vec<usize> {
        match self {
            Resolved::One(position) => vec![position],
            Resolved::Many(positions) => positions,
        }
    }
}

/// Ordered axis labels, one per dimension.
///
/// # Examples
///
/// ```
/// use flextensor::{AxisRegistry, Label};
///
/// let registry = AxisRegistry::new(["batch", "", "features"]).unwrap();
/// assert_eq!(registry.resolve(&Label::from("features")).unwrap(), 2);
/// assert_eq!(registry.resolve(&Label::from(-2)).unwrap(), 1);
/// assert!(registry.resolve(&Label::from("")).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<AxisLabel>", into = "Vec<AxisLabel>")
)]
pub struct AxisRegistry {
    labels: Vec<AxisLabel>,
}

impl AxisRegistry {
    /// Build a registry from labels.
    ///
    /// # Errors
    ///
    /// [`AxisError::DuplicateLabel`] if a name appears twice.
    pub fn new<I, N>(labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = N>,
        N: Into<AxisLabel>,
    {
        let labels: Vec<AxisLabel> = labels.into_iter().map(Into::into).collect();
        let mut seen = HashSet::new();
        for name in labels.iter().filter_map(AxisLabel::name) {
            if !seen.insert(name) {
                return Err(AxisError::DuplicateLabel {
                    label: name.to_string(),
                });
            }
        }
        Ok(Self { labels })
    }

    /// A registry of `rank` placeholders.
    pub fn anonymous(rank: usize) -> Self {
        Self {
            labels: vec![AxisLabel::Placeholder; rank],
        }
    }

    /// Fit `names` to a buffer of rank `rank`.
    ///
    /// Missing trailing names become placeholders. Returns the registry and
    /// the number of surplus names, each of which asks for an extra unit
    /// dimension at the end of the buffer.
    pub fn padded<I, N>(names: I, rank: usize) -> Result<(Self, usize)>
    where
        I: IntoIterator<Item = N>,
        N: Into<AxisLabel>,
    {
        let mut registry = Self::new(names)?;
        let surplus = registry.len().saturating_sub(rank);
        if registry.len() < rank {
            registry.labels.resize(rank, AxisLabel::Placeholder);
        }
        Ok((registry, surplus))
    }

    /// Labels in axis order.
    pub fn labels(&self) -> &[AxisLabel] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&AxisLabel> {
        self.labels.get(position)
    }

    /// Position of a named axis. Placeholders never match.
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.labels
            .iter()
            .position(|label| label.name() == Some(name))
    }

    /// Resolve a label to a position.
    ///
    /// # Errors
    ///
    /// - [`AxisError::UnknownAxis`] for a name that is absent (or empty)
    /// - [`AxisError::PositionOutOfRange`] for a position outside `-rank..rank`
    pub fn resolve(&self, label: &Label) -> Result<usize> {
        match label {
            Label::Name(name) => {
                self.position_of(name)
                    .ok_or_else(|| AxisError::UnknownAxis {
                        label: name.clone(),
                    })
            }
            Label::Position(position) => {
                let rank = self.len() as isize;
                let resolved = if *position < 0 {
                    position + rank
                } else {
                    *position
                };
                if resolved < 0 || resolved >= rank {
                    return Err(AxisError::PositionOutOfRange {
                        position: *position,
                        rank: self.len(),
                    });
                }
                Ok(resolved as usize)
            }
        }
    }

    /// Resolve several labels, collapsing a single result.
    ///
    /// ```
    /// use flextensor::{AxisRegistry, Label, Resolved};
    ///
    /// let registry = AxisRegistry::new(["a", "b", "c"]).unwrap();
    /// assert_eq!(registry.resolve_many(&[Label::from("b")]).unwrap(), Resolved::One(1));
    /// assert_eq!(
    ///     registry.resolve_many(&[Label::from("c"), Label::from(0usize)]).unwrap(),
    ///     Resolved::Many(vec![2, 0])
    /// );
    /// ```
    pub fn resolve_many(&self, labels: &[Label]) -> Result<Resolved> {
        let positions = labels
            .iter()
            .map(|label| self.resolve(label))
            .collect::<Result<Vec<_>>>()?;
        Ok(match positions.as_slice() {
            [single] => Resolved::One(*single),
            _ => Resolved::Many(positions),
        })
    }

    /// Label names in order, with `""` for placeholders.
    pub fn names(&self) -> Vec<String> {
        self.labels.iter().map(ToString::to_string).collect()
    }
}

impl TryFrom<Vec<AxisLabel>> for AxisRegistry {
    type Error = AxisError;

    fn try_from(labels: Vec<AxisLabel>) -> Result<Self> {
        Self::new(labels)
    }
}

impl From<AxisRegistry> for Vec<AxisLabel> {
    fn from(registry: AxisRegistry) -> Self {
        registry.labels
    }
}
