//! Integration tests for flextensor
//!
//! End-to-end scenarios through the public API.

use flextensor::{ix, AxisArg, AxisError, AxisSlice, BufferConfig, DenseND, FlexTensor, Resolved};

fn iota(shape: &[usize], names: &[&str]) -> FlexTensor<f64> {
    let total = shape.iter().product();
    let data = DenseND::<f64>::arange(total).reshape(shape).unwrap();
    FlexTensor::new(data, names.iter().copied()).unwrap()
}

#[test]
fn test_movie_ratings_pivot() {
    let _ = env_logger::builder().is_test(true).try_init();

    let ratings = FlexTensor::from_vec(
        vec![
            5.0, 1.0, 0.0, //
            4.0, 0.0, 2.0, //
            0.0, 5.0, 4.0, //
            1.0, 4.0, 5.0,
        ],
        &[4, 3],
        ["customers", "values"],
    )
    .unwrap();
    let movies = FlexTensor::from_vec(
        vec![
            1.0, 0.0, 0.0, //
            0.0, 1.0, 0.5, //
            0.0, 0.5, 1.0,
        ],
        &[3, 3],
        ["movies", "values"],
    )
    .unwrap();

    let left = ratings.index(ix!["customers", "values"]).unwrap();
    let right = movies.index(ix!["values", "movies"]).unwrap();
    let scores = left.pivot(&right).unwrap();

    assert_eq!(scores.shape(), &[4, 3]);
    assert_eq!(scores.axis_names(), vec!["customers", "movies"]);

    let expected = ratings
        .data()
        .matmul(&movies.data().permute(&[1, 0]).unwrap())
        .unwrap();
    assert_eq!(scores.data(), &expected);
    assert_eq!(scores.data()[&[2, 1]], 5.0 + 2.0);
}

#[test]
fn test_multiplication_table() {
    let values: Vec<f64> = (0..10).map(|v| v as f64).collect();
    let y = FlexTensor::from_vec(values.clone(), &[10], ["y"]).unwrap();
    let x = FlexTensor::from_vec(values, &[10], ["x"]).unwrap();

    let column = y.index(ix!["y", ""]).unwrap();
    let row = x.index(ix!["", "x"]).unwrap();
    assert_eq!(column.shape(), &[10, 1]);
    assert_eq!(row.shape(), &[1, 10]);

    let table = (&column * &row).unwrap();
    assert_eq!(table.shape(), &[10, 10]);
    assert_eq!(table.axis_names(), vec!["y", "x"]);
    for i in 0..10 {
        for j in 0..10 {
            assert_eq!(table.data()[&[i, j]], (i * j) as f64);
        }
    }
}

#[test]
fn test_elementwise_label_merge() {
    let a = iota(&[4, 3], &["customers", "values"]);
    let b = iota(&[4, 3], &["", "values"]);
    let product = (&a * &b).unwrap();
    assert_eq!(product.axis_names(), vec!["customers", "values"]);

    // Placeholder on the left takes the right name
    let swapped = (&b * &a).unwrap();
    assert_eq!(swapped.axis_names(), vec!["customers", "values"]);
}

#[test]
fn test_broadcast_lower_rank_operand() {
    let grid = iota(&[2, 3], &["rows", ""]);
    let offsets = iota(&[3], &["cols"]);
    let shifted = (&grid + &offsets).unwrap();
    assert_eq!(shifted.axis_names(), vec!["rows", "cols"]);
    assert_eq!(shifted.data()[&[1, 2]], 5.0 + 2.0);
}

#[test]
fn test_mixed_expression() {
    let _ = env_logger::builder().is_test(true).try_init();

    // time x channel x height x width
    let t = iota(&[5, 3, 4, 6], &["time", "channel", "height", "width"]);

    let out = t
        .index(ix![
            ("time", -1),
            ["height", "width"],
            "",
            ("channel", AxisSlice::range(None, None, -1)),
        ])
        .unwrap();

    assert_eq!(out.shape(), &[24, 1, 3]);
    assert_eq!(out.axis_names(), vec!["height", "", "channel"]);
    for c in 0..3 {
        for h in 0..4 {
            for w in 0..6 {
                assert_eq!(
                    out.data()[&[h * 6 + w, 0, c]],
                    t.data()[&[4, 2 - c, h, w]]
                );
            }
        }
    }
}

#[test]
fn test_ellipsis_in_the_middle() {
    let t = iota(&[2, 3, 4, 5], &["a", "b", "c", "d"]);
    let out = t.index(ix!["d", .., "a"]).unwrap();
    assert_eq!(out.axis_names(), vec!["d", "b", "c", "a"]);
    assert_eq!(out.shape(), &[5, 3, 4, 2]);
    assert_eq!(out.data()[&[4, 2, 3, 1]], t.data()[&[1, 2, 3, 4]]);
}

#[test]
fn test_positions_address_original_axes() {
    let t = iota(&[2, 3, 4], &["", "", ""]);
    let out = t.index(ix![(0usize, 1), 2usize, 1usize]).unwrap();
    assert_eq!(out.shape(), &[4, 3]);
    assert_eq!(out.data()[&[3, 2]], t.data()[&[1, 2, 3]]);

    let from_end = t.index(ix![-1]).unwrap();
    assert_eq!(from_end.shape(), &[4, 2, 3]);
}

#[test]
fn test_multiple_new_axes() {
    let t = iota(&[3], &["n"]);
    let out = t
        .index(vec![AxisArg::new_axes(2), AxisArg::from("n"), AxisArg::NewAxis])
        .unwrap();
    assert_eq!(out.shape(), &[1, 1, 3, 1]);
    assert_eq!(out.axis_names(), vec!["", "", "n", ""]);
}

#[test]
fn test_relabel_and_construct_from_tensor() {
    let t = iota(&[2, 3], &["a", "b"]);
    let copy = FlexTensor::new(&t, ["rows", "cols", "extra"]).unwrap();
    assert_eq!(copy.shape(), &[2, 3, 1]);
    assert_eq!(copy.axis_names(), vec!["rows", "cols", "extra"]);
    assert_eq!(t.axis_names(), vec!["a", "b"]);

    assert_eq!(copy.ax(["cols"]).unwrap(), Resolved::One(1));
    assert_eq!(copy.shape_of(["extra", "rows"]).unwrap(), vec![1, 2]);
}

#[test]
fn test_error_kinds() {
    let t = iota(&[2, 3], &["a", "b"]);

    assert!(matches!(
        t.index(ix!["missing"]),
        Err(AxisError::UnknownAxis { .. })
    ));
    assert!(matches!(
        t.index(ix![.., ..]),
        Err(AxisError::DuplicateEllipsis)
    ));
    assert!(matches!(
        t.index(ix!["a", ["a", "b"]]),
        Err(AxisError::DuplicateAxis { .. })
    ));
    assert!(matches!(
        t.index(ix![("a", 2)]),
        Err(AxisError::Buffer(_))
    ));
    assert!(matches!(
        t.pivot(&iota(&[3], &["x"])),
        Err(AxisError::UnsupportedRank { left: 2, right: 1 })
    ));
    assert!(matches!(
        t.mul_with(&iota(&[1, 3], &[]), &BufferConfig::strict()),
        Err(AxisError::AxisMismatch { .. })
    ));
}

#[test]
fn test_merge_and_pivot_axes_preview() {
    let a = iota(&[4, 3], &["customers", "values"]);
    let b = iota(&[3, 3], &["values", "movies"]);
    assert_eq!(a.pivot_axes(&b).unwrap().names(), vec!["customers", "movies"]);
    assert!(a.merge_axes(&b).is_err());
    assert_eq!(
        a.merge_axes(&a).unwrap().names(),
        vec!["customers", "values"]
    );
}
