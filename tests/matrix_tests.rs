//! Tests for the dense matrix container.
//!
//! ## Test Organization
//!
//! 1. **Construction** - shape checking, named constructors
//! 2. **Access** - element and row queries, diagonal
//! 3. **Mutation** - row swaps and in-place row combination
//! 4. **Finiteness** - NaN/infinity detection

use gaussdet::prelude::*;

// ============================================================================
// Construction Tests
// ============================================================================

/// Well-formed nested rows build the expected matrix.
#[test]
fn test_from_rows() {
    let m = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    assert_eq!(m.rows(), 2);
    assert_eq!(m.cols(), 2);
    assert!(m.is_square());
    assert_eq!(m.get(0, 1), 2.0);
    assert_eq!(m.get(1, 0), 3.0);
}

/// Ragged rows are rejected with the offending index.
#[test]
fn test_ragged_rows_rejected() {
    let err = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]).unwrap_err();
    assert_eq!(
        err,
        DetError::RaggedRows {
            row: 1,
            got: 1,
            expected: 2
        }
    );
}

/// Empty shapes are rejected everywhere.
#[test]
fn test_empty_shapes_rejected() {
    assert_eq!(
        Matrix::<f64>::from_rows(&[]).unwrap_err(),
        DetError::EmptyMatrix
    );
    assert_eq!(
        Matrix::<f64>::from_rows(&[vec![]]).unwrap_err(),
        DetError::EmptyMatrix
    );
    assert_eq!(Matrix::<f64>::zeros(0, 3).unwrap_err(), DetError::EmptyMatrix);
    assert_eq!(Matrix::<f64>::zeros(3, 0).unwrap_err(), DetError::EmptyMatrix);
    assert_eq!(
        Matrix::<f64>::from_vec(0, 0, vec![]).unwrap_err(),
        DetError::EmptyMatrix
    );
}

/// Flat buffers must match the requested dimensions exactly.
#[test]
fn test_from_vec_shape_mismatch() {
    let err = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0]).unwrap_err();
    assert_eq!(err, DetError::ShapeMismatch { got: 3, expected: 4 });

    let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    assert_eq!(m.row(1), &[4.0, 5.0, 6.0]);
    assert!(!m.is_square());
}

/// Named constructors: zeros, identity, diagonal.
#[test]
fn test_named_constructors() {
    let z = Matrix::<f64>::zeros(2, 3).unwrap();
    assert!(z.as_slice().iter().all(|&v| v == 0.0));

    let i = Matrix::<f64>::identity(3).unwrap();
    for r in 0..3 {
        for c in 0..3 {
            assert_eq!(i.get(r, c), if r == c { 1.0 } else { 0.0 });
        }
    }

    let d = Matrix::diagonal(&[2.0, 5.0]).unwrap();
    assert_eq!(d.diag(), vec![2.0, 5.0]);
    assert_eq!(d.get(0, 1), 0.0);
}

// ============================================================================
// Mutation Tests
// ============================================================================

/// Row swaps exchange full rows in place.
#[test]
fn test_swap_rows() {
    let mut m = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    m.swap_rows(0, 1);
    assert_eq!(m.row(0), &[3.0, 4.0]);
    assert_eq!(m.row(1), &[1.0, 2.0]);

    // Same-index swap is a no-op.
    let before = m.clone();
    m.swap_rows(1, 1);
    assert_eq!(m, before);

    // Order of indices does not matter.
    m.swap_rows(1, 0);
    let mut n = before;
    n.swap_rows(0, 1);
    assert_eq!(m, n);
}

/// Row combination updates only columns at or right of `from_col`.
#[test]
fn test_row_axpy_column_restriction() {
    let mut m = Matrix::from_rows(&[vec![2.0, 4.0, 6.0], vec![1.0, 3.0, 5.0]]).unwrap();

    // row1 -= 0.5 * row0, starting at column 1.
    m.row_axpy(1, 0, 0.5, 1);
    assert_eq!(m.row(0), &[2.0, 4.0, 6.0]);
    assert_eq!(m.row(1), &[1.0, 1.0, 2.0]);
}

/// Row combination works in both row orders.
#[test]
fn test_row_axpy_directions() {
    let mut m = Matrix::from_rows(&[vec![2.0, 4.0], vec![1.0, 3.0]]).unwrap();
    m.row_axpy(0, 1, 2.0, 0);
    assert_eq!(m.row(0), &[0.0, -2.0]);
    assert_eq!(m.row(1), &[1.0, 3.0]);
}

// ============================================================================
// Finiteness Tests
// ============================================================================

/// Non-finite entries are located by position.
#[test]
fn test_first_non_finite() {
    let m = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    assert!(m.is_finite());
    assert_eq!(m.first_non_finite(), None);

    let m = Matrix::from_rows(&[vec![1.0, 2.0], vec![f64::NAN, 4.0]]).unwrap();
    assert!(!m.is_finite());
    assert_eq!(m.first_non_finite(), Some((1, 0)));
}
