//! Property-based tests for buffer operations
//!
//! Uses proptest to check the layout invariants the labeled-axis planner
//! relies on across randomly generated shapes.

#[cfg(test)]
mod tests {
    use crate::{broadcast_shape, AxisSlice, DenseND};
    use proptest::prelude::*;

    // Valid tensor shapes (1-4D, small sizes)
    fn shape_strategy() -> impl Strategy<Value = Vec<usize>> {
        prop::collection::vec(1usize..6, 1..=4)
    }

    fn iota(shape: &[usize]) -> DenseND<f64> {
        let total: usize = shape.iter().product();
        DenseND::<f64>::arange(total).reshape(shape).unwrap()
    }

    proptest! {
        #[test]
        fn prop_reshape_roundtrip(shape in shape_strategy()) {
            let tensor = iota(&shape);
            let flat = tensor.reshape(&[tensor.len()]).unwrap();
            let restored = flat.reshape(&shape).unwrap();
            prop_assert_eq!(restored, tensor);
        }

        #[test]
        fn prop_reverse_permute_is_involution(shape in shape_strategy()) {
            let tensor = iota(&shape);
            let perm: Vec<usize> = (0..tensor.rank()).rev().collect();
            let twice = tensor.permute(&perm).unwrap().permute(&perm).unwrap();
            prop_assert_eq!(twice, tensor);
        }

        #[test]
        fn prop_permute_moves_shape(shape in shape_strategy()) {
            let tensor = iota(&shape);
            let rank = tensor.rank();
            let perm: Vec<usize> = (0..rank).map(|i| (i + 1) % rank).collect();
            let permuted = tensor.permute(&perm).unwrap();
            for (i, &p) in perm.iter().enumerate() {
                prop_assert_eq!(permuted.shape()[i], shape[p]);
            }
            prop_assert_eq!(permuted.len(), tensor.len());
        }

        #[test]
        fn prop_full_slice_is_identity(shape in shape_strategy(), axis_seed in 0usize..4) {
            let tensor = iota(&shape);
            let axis = axis_seed % tensor.rank();
            let sliced = tensor.slice_axis(axis, &AxisSlice::FULL).unwrap();
            prop_assert_eq!(sliced, tensor);
        }

        #[test]
        fn prop_index_slice_drops_axis(shape in shape_strategy(), axis_seed in 0usize..4) {
            let tensor = iota(&shape);
            let axis = axis_seed % tensor.rank();
            let sliced = tensor.slice_axis(axis, &AxisSlice::Index(0)).unwrap();
            let mut expected = shape.clone();
            expected.remove(axis);
            prop_assert_eq!(sliced.shape(), expected.as_slice());
        }

        #[test]
        fn prop_range_slice_length(len in 1usize..20, start in -25isize..25, end in -25isize..25) {
            let slice = AxisSlice::range(Some(start), Some(end), 1);
            let positions = slice.positions(len).unwrap();
            prop_assert!(positions.len() <= len);
            prop_assert!(positions.windows(2).all(|w| w[1] == w[0] + 1));
            prop_assert!(positions.iter().all(|&p| p < len));
        }

        #[test]
        fn prop_unit_split_concat_merges_row_major(rows in 1usize..6, cols in 1usize..6) {
            // Splitting the outer axis into unit blocks and joining along the
            // inner axis lays the data out exactly like a flat reshape.
            let tensor = iota(&[rows, cols]);
            let blocks = tensor.split(rows, 0).unwrap();
            let joined = DenseND::concatenate(&blocks, 1).unwrap();
            let merged = joined.remove_axis(0).unwrap();
            prop_assert_eq!(merged, tensor.reshape(&[rows * cols]).unwrap());
        }

        #[test]
        fn prop_broadcast_shape_symmetric(a in shape_strategy(), b in shape_strategy()) {
            prop_assert_eq!(broadcast_shape(&a, &b), broadcast_shape(&b, &a));
        }

        #[test]
        fn prop_addition_commutative(shape in shape_strategy()) {
            let a = iota(&shape);
            let b = DenseND::<f64>::from_elem(&shape, 0.5);
            prop_assert_eq!(a.add(&b).unwrap(), b.add(&a).unwrap());
        }

        #[test]
        fn prop_insert_axis_len(shape in shape_strategy(), at_seed in 0usize..5) {
            let tensor = iota(&shape);
            let at = at_seed % (tensor.rank() + 1);
            let inserted = tensor.insert_axis(at).unwrap();
            prop_assert_eq!(inserted.rank(), tensor.rank() + 1);
            prop_assert_eq!(inserted.shape()[at], 1);
            prop_assert_eq!(inserted.remove_axis(at).unwrap(), tensor);
        }
    }
}
