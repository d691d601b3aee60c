//! Output labels for binary operations
//!
//! Elementwise operations align labels from the trailing end, the same way
//! shapes broadcast. The pivot product keeps the two outer labels of a
//! rank-2 by rank-2 product.

use crate::error::{AxisError, Result};
use crate::label::AxisLabel;
use crate::registry::AxisRegistry;
use flextensor_core::{broadcast_shape, Broadcasting, BufferConfig};

/// Check that two shapes can be combined under `config`.
pub fn check_compatible(left: &[usize], right: &[usize], config: &BufferConfig) -> Result<()> {
    let compatible = match config.broadcasting {
        Broadcasting::Numpy => broadcast_shape(left, right).is_some(),
        Broadcasting::Strict => left == right,
    };
    if compatible {
        Ok(())
    } else {
        Err(AxisError::AxisMismatch {
            left: left.to_vec(),
            right: right.to_vec(),
        })
    }
}

/// Merge labels position by position.
///
/// The left label wins unless it is a placeholder. A right-hand name that
/// the result already uses elsewhere is not copied, so names stay unique.
///
/// # Errors
///
/// [`AxisError::DuplicateLabel`] if the merged labels repeat a name.
///
/// # Examples
///
/// ```
/// use flextensor::merge::merge_labels;
/// use flextensor::AxisRegistry;
///
/// let left = AxisRegistry::new(["customers", "values"]).unwrap();
/// let right = AxisRegistry::new(["", "values"]).unwrap();
/// assert_eq!(merge_labels(&left, &right).unwrap().names(), vec!["customers", "values"]);
///
/// let rank1 = AxisRegistry::new(["x"]).unwrap();
/// let rank2 = AxisRegistry::new(["y", ""]).unwrap();
/// assert_eq!(merge_labels(&rank2, &rank1).unwrap().names(), vec!["y", "x"]);
/// ```
pub fn merge_labels(left: &AxisRegistry, right: &AxisRegistry) -> Result<AxisRegistry> {
    let rank = left.len().max(right.len());
    let aligned = |registry: &AxisRegistry, i: usize| {
        let offset = rank - registry.len();
        i.checked_sub(offset)
            .and_then(|p| registry.get(p))
            .cloned()
            .unwrap_or_default()
    };

    let lefts: Vec<AxisLabel> = (0..rank).map(|i| aligned(left, i)).collect();
    let mut merged = lefts.clone();
    for (i, slot) in merged.iter_mut().enumerate() {
        if !slot.is_placeholder() {
            continue;
        }
        let candidate = aligned(right, i);
        let taken = candidate
            .name()
            .is_some_and(|name| lefts.iter().any(|l| l.name() == Some(name)));
        if !taken {
            *slot = candidate;
        }
    }

    AxisRegistry::new(merged)
}

/// Labels of a rank-2 pivot product: `[left[0], right[1]]`.
///
/// # Errors
///
/// - [`AxisError::UnsupportedRank`] unless both operands are rank 2
/// - [`AxisError::DuplicateLabel`] if both outer labels carry the same name
pub fn pivot_labels(left: &AxisRegistry, right: &AxisRegistry) -> Result<AxisRegistry> {
    match (left.labels(), right.labels()) {
        ([row, _], [_, col]) => AxisRegistry::new([row.clone(), col.clone()]),
        _ => Err(AxisError::UnsupportedRank {
            left: left.len(),
            right: right.len(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry(names: &[&str]) -> AxisRegistry {
        AxisRegistry::new(names.iter().copied()).unwrap()
    }

    #[test]
    fn test_left_wins() {
        let merged = merge_labels(&registry(&["a", "b"]), &registry(&["c", "d"])).unwrap();
        assert_eq!(merged.names(), vec!["a", "b"]);
    }

    #[test]
    fn test_placeholders_filled_from_right() {
        let merged = merge_labels(&registry(&["", "b"]), &registry(&["c", ""])).unwrap();
        assert_eq!(merged.names(), vec!["c", "b"]);
    }

    #[test]
    fn test_broadcast_pair_labels() {
        // [y, ""] * ["", x]
        let merged = merge_labels(&registry(&["y", ""]), &registry(&["", "x"])).unwrap();
        assert_eq!(merged.names(), vec!["y", "x"]);
    }

    #[test]
    fn test_right_name_already_used() {
        let merged = merge_labels(&registry(&["a", ""]), &registry(&["b", "a"])).unwrap();
        assert_eq!(merged.names(), vec!["a", ""]);
    }

    #[test]
    fn test_merge_keeps_every_label() {
        let merged = merge_labels(
            &registry(&["", "", "c"]),
            &registry(&["a", "b", ""]),
        )
        .unwrap();
        assert_eq!(merged.names(), vec!["a", "b", "c"]);

        // Placeholders the right side cannot fill stay placeholders
        let merged = merge_labels(&registry(&["", "a"]), &registry(&["a"])).unwrap();
        assert_eq!(merged.names(), vec!["", "a"]);
    }

    #[test]
    fn test_check_compatible() {
        let numpy = BufferConfig::default();
        assert!(check_compatible(&[4, 1], &[1, 3], &numpy).is_ok());
        assert!(matches!(
            check_compatible(&[4, 2], &[3], &numpy),
            Err(AxisError::AxisMismatch { .. })
        ));
        assert!(check_compatible(&[4, 1], &[4, 3], &BufferConfig::strict()).is_err());
    }

    #[test]
    fn test_pivot_labels() {
        let axes = pivot_labels(
            &registry(&["customers", "values"]),
            &registry(&["values", "movies"]),
        )
        .unwrap();
        assert_eq!(axes.names(), vec!["customers", "movies"]);

        assert!(matches!(
            pivot_labels(&registry(&["a"]), &registry(&["b", "c"])),
            Err(AxisError::UnsupportedRank { left: 1, right: 2 })
        ));
    }
}
