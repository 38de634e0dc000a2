//! Tests for the determinant engine.
//!
//! These tests verify the core algorithmic properties of traced Gaussian
//! elimination with partial pivoting:
//! - Identity and triangular invariance
//! - Zero-pivot early termination on singular matrices
//! - Sign accumulation across row swaps
//! - Determinism of the produced trace
//! - The concrete 2x2 reference scenario
//!
//! ## Test Organization
//!
//! 1. **Identity Property** - det 1, no swaps
//! 2. **Singular Matrices** - zero rows, dependent rows
//! 3. **Sign Tracking** - swap counting and signed products
//! 4. **Triangular Inputs** - invariance of already-triangular matrices
//! 5. **Determinism** - entry-for-entry trace equality
//! 6. **Reference Scenario** - the [[0, 2], [3, 4]] walkthrough
//! 7. **Input Validation** - shape and finiteness errors

use approx::assert_relative_eq;

use gaussdet::prelude::*;

fn det_of(rows: &[Vec<f64>]) -> DetReport<f64> {
    let m = Matrix::from_rows(rows).unwrap();
    Gaussdet::new().build().unwrap().determinant(&m).unwrap()
}

fn swap_entries(report: &DetReport<f64>) -> usize {
    report
        .trace
        .iter()
        .filter(|e| matches!(e.detail, Some(StepDetail::Swap { .. })))
        .count()
}

// ============================================================================
// Identity Property Tests
// ============================================================================

/// The identity matrix has determinant 1 and triggers no swaps, for any order.
#[test]
fn test_identity_determinant_is_one() {
    for n in 1..=6 {
        let m = Matrix::<f64>::identity(n).unwrap();
        let report = Gaussdet::new().build().unwrap().determinant(&m).unwrap();

        assert_eq!(report.determinant, 1.0, "identity order {n}");
        assert_eq!(report.sign, 1);
        assert_eq!(report.swaps, 0);
        assert_eq!(swap_entries(&report), 0);
        assert_eq!(report.termination, Termination::Triangularized);
    }
}

/// A 1x1 matrix reports its single entry as the determinant.
#[test]
fn test_order_one_matrix() {
    let report = det_of(&[vec![7.5]]);
    assert_eq!(report.determinant, 7.5);
    assert_eq!(report.swaps, 0);
}

// ============================================================================
// Singular Matrix Tests
// ============================================================================

/// An all-zero row forces a zero pivot and an exactly-zero determinant.
#[test]
fn test_zero_row_terminates_early() {
    let report = det_of(&[
        vec![1.0, 2.0, 3.0],
        vec![0.0, 0.0, 0.0],
        vec![4.0, 5.0, 6.0],
    ]);

    assert_eq!(report.determinant, 0.0);
    assert!(report.is_singular());

    // The terminal entry reports the detection; nothing follows it.
    let last = report.trace.last().unwrap();
    assert_eq!(last.kind, EntryKind::Result);
    let column = match last.detail {
        Some(StepDetail::ZeroPivot { column }) => column,
        ref other => panic!("expected ZeroPivot detail, got {other:?}"),
    };
    assert_eq!(report.termination, Termination::ZeroPivot { column });

    // Elimination must not proceed past the detection column.
    for entry in &report.trace {
        if let Some(StepDetail::DiagonalMultiply { row, .. }) = entry.detail {
            assert!(row < column);
        }
    }
}

/// Linearly dependent rows are detected as singular.
#[test]
fn test_dependent_rows_are_singular() {
    let report = det_of(&[vec![1.0, 2.0], vec![2.0, 4.0]]);
    assert_eq!(report.determinant, 0.0);
    assert!(report.is_singular());
}

/// A pivot below the absolute tolerance counts as zero.
#[test]
fn test_tolerance_boundary() {
    let tiny = 1e-12;
    let m = Matrix::from_rows(&[vec![tiny, 0.0], vec![0.0, 1.0]]).unwrap();

    let default_report = Gaussdet::new().build().unwrap().determinant(&m).unwrap();
    assert!(default_report.is_singular());

    // A tighter tolerance accepts the tiny pivot.
    let strict = Gaussdet::new()
        .tolerance(1e-15)
        .relative_tolerance(1e-15)
        .build()
        .unwrap()
        .determinant(&m)
        .unwrap();
    assert!(!strict.is_singular());
    assert_relative_eq!(strict.determinant, tiny, max_relative = 1e-12);
}

// ============================================================================
// Sign Tracking Tests
// ============================================================================

/// One swap flips the sign; the determinant is the signed diagonal product.
#[test]
fn test_single_swap_sign() {
    let report = det_of(&[vec![0.0, 2.0], vec![3.0, 4.0]]);

    assert_eq!(report.swaps, 1);
    assert_eq!(report.sign, -1);

    let diag_product: f64 = report.triangular.diag().iter().product();
    assert_relative_eq!(
        report.determinant,
        f64::from(report.sign) * diag_product,
        max_relative = 1e-12
    );
}

/// `sign == (-1)^k` for `k` swaps, and `det == sign * product(diagonal)`.
#[test]
fn test_sign_matches_swap_count() {
    let cases: &[&[Vec<f64>]] = &[
        &[vec![2.0, 1.0, 1.0], vec![4.0, 3.0, 3.0], vec![8.0, 7.0, 9.0]],
        &[vec![0.0, 1.0], vec![1.0, 0.0]],
        &[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0], vec![7.0, 8.0, 10.0]],
    ];

    for rows in cases {
        let report = det_of(rows);
        let expected_sign = if report.swaps % 2 == 0 { 1 } else { -1 };
        assert_eq!(report.sign, expected_sign);
        assert_eq!(swap_entries(&report), report.swaps);

        if !report.is_singular() {
            let diag_product: f64 = report.triangular.diag().iter().product();
            assert_relative_eq!(
                report.determinant,
                f64::from(report.sign) * diag_product,
                max_relative = 1e-10
            );
        }
    }
}

/// Cross-check a 3x3 determinant against its closed form.
#[test]
fn test_three_by_three_closed_form() {
    // det = 2*(27-21) - 1*(36-24) + 1*(28-24) = 4
    let report = det_of(&[
        vec![2.0, 1.0, 1.0],
        vec![4.0, 3.0, 3.0],
        vec![8.0, 7.0, 9.0],
    ]);
    assert_relative_eq!(report.determinant, 4.0, max_relative = 1e-12);
}

// ============================================================================
// Triangular Input Tests
// ============================================================================

/// Upper-triangular inputs see no swaps and only zero elimination factors.
#[test]
fn test_upper_triangular_invariance() {
    let report = det_of(&[
        vec![2.0, 3.0, 1.0],
        vec![0.0, 4.0, 5.0],
        vec![0.0, 0.0, 6.0],
    ]);

    assert_eq!(report.swaps, 0);
    assert_eq!(report.determinant, 48.0);

    for entry in &report.trace {
        if let Some(StepDetail::RowCombine { factor, .. }) = entry.detail {
            assert_eq!(factor, 0.0, "upper-triangular factors must be zero");
        }
    }
}

/// Diagonal matrices behave like both triangular forms at once.
#[test]
fn test_diagonal_matrix() {
    let m = Matrix::diagonal(&[2.0, -3.0, 4.0]).unwrap();
    let report = Gaussdet::new().build().unwrap().determinant(&m).unwrap();

    assert_eq!(report.swaps, 0);
    assert_eq!(report.determinant, -24.0);
}

/// Diagonally dominant lower-triangular input: determinant is the
/// diagonal product even though elimination rewrites sub-diagonal rows.
#[test]
fn test_lower_triangular_determinant() {
    let report = det_of(&[
        vec![5.0, 0.0, 0.0],
        vec![1.0, 4.0, 0.0],
        vec![2.0, 3.0, 6.0],
    ]);

    assert_eq!(report.swaps, 0);
    assert_relative_eq!(report.determinant, 120.0, max_relative = 1e-12);
}

// ============================================================================
// Determinism Tests
// ============================================================================

/// Two runs on separately-constructed, value-equal inputs produce
/// identical determinants and identical traces entry-for-entry.
#[test]
fn test_determinism_entry_for_entry() {
    let rows = [
        vec![0.0, 2.0, 1.0],
        vec![3.0, 4.0, -1.0],
        vec![2.0, -5.0, 7.0],
    ];

    let first = Matrix::from_rows(&rows).unwrap();
    let second = Matrix::from_rows(&rows).unwrap();

    let a = Gaussdet::new().build().unwrap().determinant(&first).unwrap();
    let b = Gaussdet::new()
        .build()
        .unwrap()
        .determinant(&second)
        .unwrap();

    assert_eq!(a.determinant, b.determinant);
    assert_eq!(a.trace.len(), b.trace.len());
    assert_eq!(a.trace, b.trace);
}

// ============================================================================
// Reference Scenario
// ============================================================================

/// The full [[0, 2], [3, 4]] walkthrough from pivot search to -6.
#[test]
fn test_reference_scenario() {
    let report = det_of(&[vec![0.0, 2.0], vec![3.0, 4.0]]);

    // Closed form: 0*4 - 2*3 = -6.
    assert_eq!(report.determinant, -6.0);
    assert_eq!(report.sign, -1);
    assert_eq!(report.swaps, 1);

    // The swap selected row 1 (|3| > |0|) and flipped the sign.
    let swap = report
        .trace
        .iter()
        .find_map(|e| match &e.detail {
            Some(StepDetail::Swap {
                rows,
                sign_after,
                det_after,
                ..
            }) => Some((*rows, *sign_after, *det_after)),
            _ => None,
        })
        .expect("swap entry");
    assert_eq!(swap.0, (0, 1));
    assert_eq!(swap.1, -1);
    assert_eq!(swap.2, -1.0);

    // After the swap the matrix is [[3, 4], [0, 2]].
    let swapped = Matrix::from_rows(&[vec![3.0, 4.0], vec![0.0, 2.0]]).unwrap();
    let swap_entry = report
        .trace
        .iter()
        .find(|e| matches!(e.detail, Some(StepDetail::Swap { .. })))
        .unwrap();
    assert_eq!(swap_entry.snapshot.as_ref().unwrap(), &swapped);

    // Diagonal folds: det -> -3, then -> -6.
    let folds: Vec<(f64, f64)> = report
        .trace
        .iter()
        .filter_map(|e| match e.detail {
            Some(StepDetail::DiagonalMultiply {
                det_before,
                det_after,
                ..
            }) => Some((det_before, det_after)),
            _ => None,
        })
        .collect();
    assert_eq!(folds, vec![(-1.0, -3.0), (-3.0, -6.0)]);

    // The elimination factor for row 1 is 0/3 = 0.
    let factor = report
        .trace
        .iter()
        .find_map(|e| match e.detail {
            Some(StepDetail::RowCombine { factor, .. }) => Some(factor),
            _ => None,
        })
        .expect("row combine entry");
    assert_eq!(factor, 0.0);
}

// ============================================================================
// Input Validation Tests
// ============================================================================

/// Non-square inputs fail before any trace is produced.
#[test]
fn test_non_square_is_rejected() {
    let m = Matrix::from_rows(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
    let err = Gaussdet::new().build().unwrap().determinant(&m).unwrap_err();
    assert_eq!(err, DetError::NotSquare { rows: 2, cols: 3 });
}

/// NaN and infinite entries are rejected with their position.
#[test]
fn test_non_finite_entries_are_rejected() {
    let m = Matrix::from_rows(&[vec![1.0, f64::NAN], vec![3.0, 4.0]]).unwrap();
    let model = Gaussdet::new().build().unwrap();
    assert_eq!(
        model.determinant(&m).unwrap_err(),
        DetError::NonFiniteEntry { row: 0, col: 1 }
    );

    let m = Matrix::from_rows(&[vec![1.0, 2.0], vec![f64::INFINITY, 4.0]]).unwrap();
    assert_eq!(
        model.determinant(&m).unwrap_err(),
        DetError::NonFiniteEntry { row: 1, col: 0 }
    );
}

/// The caller's matrix is never mutated by a run.
#[test]
fn test_input_matrix_is_untouched() {
    let m = Matrix::from_rows(&[vec![0.0, 2.0], vec![3.0, 4.0]]).unwrap();
    let original = m.clone();

    let _ = Gaussdet::new().build().unwrap().determinant(&m).unwrap();
    assert_eq!(m, original);
}
