//! Index expression parser
//!
//! Classifies each [`AxisArg`] once, resolving labels against the source
//! tensor's registry, and produces an [`IndexPlan`]. Axis identities of the
//! source tensor are its original positions.

use crate::args::AxisArg;
use crate::error::{AxisError, Result};
use crate::label::Label;
use crate::registry::AxisRegistry;
use flextensor_core::AxisSlice;

/// Stable identity of an axis during one indexing call
pub type AxisId = usize;

/// A resolved plan step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Specifier {
    /// Place an existing axis at the next output position
    Select(AxisId),
    /// Slice an axis; placed unless the slice collapses it
    Slice(AxisId, AxisSlice),
    /// Merge at least two axes, row-major in this order
    Flatten(Vec<AxisId>),
    /// Create a size-1 axis at the next output position
    NewAxis,
}

impl Specifier {
    /// Whether this step contributes an axis to the output.
    pub fn produces_output(&self) -> bool {
        match self {
            Specifier::Slice(_, slice) => !slice.collapses(),
            _ => true,
        }
    }
}

/// Parsed index expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexPlan {
    /// Steps in argument order
    pub steps: Vec<Specifier>,
    /// Source axes no step mentions, in original order
    pub unreferenced: Vec<AxisId>,
    /// Output position of the ellipsis, if one was given
    pub ellipsis: Option<usize>,
}

/// Parse an index expression against `registry`.
///
/// # Errors
///
/// - [`AxisError::UnknownAxis`] / [`AxisError::PositionOutOfRange`] for
///   unresolvable labels
/// - [`AxisError::DuplicateAxis`] when a source axis is used twice
/// - [`AxisError::DuplicateEllipsis`] on a second ellipsis
/// - [`AxisError::EmptyGroup`] for a flatten group without members
///
/// # Examples
///
/// ```
/// use flextensor::parser::{parse, Specifier};
/// use flextensor::{ix, AxisRegistry};
///
/// let registry = AxisRegistry::new(["a", "b", "c"]).unwrap();
/// let plan = parse(&ix!["c", .., ""], &registry).unwrap();
///
/// assert_eq!(plan.steps, vec![Specifier::Select(2), Specifier::NewAxis]);
/// assert_eq!(plan.unreferenced, vec![0, 1]);
/// assert_eq!(plan.ellipsis, Some(1));
/// ```
pub fn parse(args: &[AxisArg], registry: &AxisRegistry) -> Result<IndexPlan> {
    let mut referenced = vec![false; registry.len()];
    let mut steps = Vec::with_capacity(args.len());
    let mut ellipsis = None;
    let mut outputs = 0;

    let mut claim = |label: &Label| -> Result<AxisId> {
        let id = registry.resolve(label)?;
        if referenced[id] {
            return Err(AxisError::DuplicateAxis {
                label: label.to_string(),
            });
        }
        referenced[id] = true;
        Ok(id)
    };

    for arg in args {
        let step = match arg {
            AxisArg::Label(label) => Specifier::Select(claim(label)?),
            AxisArg::Slice(label, slice) => Specifier::Slice(claim(label)?, *slice),
            AxisArg::Flatten(labels) => match labels.as_slice() {
                [] => return Err(AxisError::EmptyGroup),
                [single] => Specifier::Select(claim(single)?),
                group => {
                    let ids = group.iter().map(&mut claim).collect::<Result<_>>()?;
                    Specifier::Flatten(ids)
                }
            },
            AxisArg::NewAxis => Specifier::NewAxis,
            AxisArg::NewAxes(n) => {
                steps.extend(std::iter::repeat(Specifier::NewAxis).take(*n));
                outputs += n;
                continue;
            }
            AxisArg::Ellipsis => {
                if ellipsis.is_some() {
                    return Err(AxisError::DuplicateEllipsis);
                }
                ellipsis = Some(outputs);
                continue;
            }
        };
        if step.produces_output() {
            outputs += 1;
        }
        steps.push(step);
    }

    let unreferenced = referenced
        .iter()
        .enumerate()
        .filter(|(_, seen)| !**seen)
        .map(|(id, _)| id)
        .collect();

    Ok(IndexPlan {
        steps,
        unreferenced,
        ellipsis,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ix;

    fn registry() -> AxisRegistry {
        AxisRegistry::new(["a", "b", "c", "d"]).unwrap()
    }

    #[test]
    fn test_plain_labels_and_positions() {
        let plan = parse(&ix!["d", 0usize], &registry()).unwrap();
        assert_eq!(
            plan.steps,
            vec![Specifier::Select(3), Specifier::Select(0)]
        );
        assert_eq!(plan.unreferenced, vec![1, 2]);
        assert_eq!(plan.ellipsis, None);
    }

    #[test]
    fn test_collapsing_slice_skips_output_position() {
        let plan = parse(&ix![("a", 0), .., "c"], &registry()).unwrap();
        assert_eq!(plan.ellipsis, Some(0));
        assert_eq!(plan.unreferenced, vec![1, 3]);

        let plan = parse(&ix![("a", 0..1), .., "c"], &registry()).unwrap();
        assert_eq!(plan.ellipsis, Some(1));
    }

    #[test]
    fn test_flatten_groups() {
        let plan = parse(&ix![["c", "a"], "b"], &registry()).unwrap();
        assert_eq!(
            plan.steps,
            vec![Specifier::Flatten(vec![2, 0]), Specifier::Select(1)]
        );

        // A one-member group is a plain label
        let plan = parse(&ix![["b"]], &registry()).unwrap();
        assert_eq!(plan.steps, vec![Specifier::Select(1)]);

        let empty: Vec<&str> = vec![];
        assert!(matches!(
            parse(&ix![empty], &registry()),
            Err(AxisError::EmptyGroup)
        ));
    }

    #[test]
    fn test_new_axes_advance_output() {
        let plan = parse(&ix![AxisArg::new_axes(2), .., ""], &registry()).unwrap();
        assert_eq!(plan.steps.len(), 3);
        assert_eq!(plan.ellipsis, Some(2));
        assert_eq!(plan.unreferenced, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_duplicate_ellipsis() {
        assert!(matches!(
            parse(&ix![.., "a", ..], &registry()),
            Err(AxisError::DuplicateEllipsis)
        ));
    }

    #[test]
    fn test_duplicate_axis() {
        assert!(matches!(
            parse(&ix!["a", ("a", 1)], &registry()),
            Err(AxisError::DuplicateAxis { .. })
        ));
        // Name and position of the same axis
        assert!(matches!(
            parse(&ix!["b", 1usize], &registry()),
            Err(AxisError::DuplicateAxis { .. })
        ));
        assert!(matches!(
            parse(&ix![["a", "b"], "b"], &registry()),
            Err(AxisError::DuplicateAxis { .. })
        ));
    }

    #[test]
    fn test_unknown_axis() {
        assert!(matches!(
            parse(&ix!["z"], &registry()),
            Err(AxisError::UnknownAxis { label }) if label == "z"
        ));
        assert!(matches!(
            parse(&ix![7usize], &registry()),
            Err(AxisError::PositionOutOfRange { position: 7, rank: 4 })
        ));
    }
}
