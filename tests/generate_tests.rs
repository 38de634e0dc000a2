#![cfg(feature = "generate")]
//! Tests for the random matrix constructors.
//!
//! ## Test Organization
//!
//! 1. **Shapes** - dimensions of each constructor
//! 2. **Values** - range bounds and integer-valuedness
//! 3. **Structure** - triangular and diagonal zero patterns
//! 4. **Reproducibility** - seeded generation
//! 5. **Integration** - generated matrices through the engine

use rand::rngs::StdRng;
use rand::SeedableRng;

use gaussdet::generate;
use gaussdet::prelude::*;

// ============================================================================
// Shape Tests
// ============================================================================

/// Each constructor produces its documented dimensions.
#[test]
fn test_generated_shapes() {
    let mut rng = StdRng::seed_from_u64(42);

    let m: Matrix<f64> = generate::square(&mut rng, 4, -10..10).unwrap();
    assert_eq!((m.rows(), m.cols()), (4, 4));

    let m: Matrix<f64> = generate::row_vector(&mut rng, 5, -10..10).unwrap();
    assert_eq!((m.rows(), m.cols()), (1, 5));

    let m: Matrix<f64> = generate::column_vector(&mut rng, 3, -10..10).unwrap();
    assert_eq!((m.rows(), m.cols()), (3, 1));

    let m: Matrix<f64> = generate::rectangular(&mut rng, 2, 5, -10..10).unwrap();
    assert_eq!((m.rows(), m.cols()), (2, 5));
}

/// Zero-sized shapes are rejected.
#[test]
fn test_zero_sized_shapes_rejected() {
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(
        generate::square::<f64, _>(&mut rng, 0, -10..10).unwrap_err(),
        DetError::EmptyMatrix
    );
    assert_eq!(
        generate::rectangular::<f64, _>(&mut rng, 3, 0, -10..10).unwrap_err(),
        DetError::EmptyMatrix
    );
}

// ============================================================================
// Value Tests
// ============================================================================

/// Entries are integer-valued and inside the half-open range.
#[test]
fn test_value_range() {
    let mut rng = StdRng::seed_from_u64(7);
    let m: Matrix<f64> = generate::square(&mut rng, 6, -10..10).unwrap();

    for &v in m.as_slice() {
        assert!(v >= -10.0 && v < 10.0);
        assert_eq!(v.fract(), 0.0, "entries must be integer-valued");
    }
}

// ============================================================================
// Structure Tests
// ============================================================================

/// Triangular and diagonal constructors zero the right entries.
#[test]
fn test_structural_zeros() {
    let mut rng = StdRng::seed_from_u64(3);

    let u: Matrix<f64> = generate::upper_triangular(&mut rng, 5, 1..10).unwrap();
    for r in 0..5 {
        for c in 0..r {
            assert_eq!(u.get(r, c), 0.0);
        }
    }

    let l: Matrix<f64> = generate::lower_triangular(&mut rng, 5, 1..10).unwrap();
    for r in 0..5 {
        for c in (r + 1)..5 {
            assert_eq!(l.get(r, c), 0.0);
        }
    }

    let d: Matrix<f64> = generate::diagonal(&mut rng, 4, 1..10).unwrap();
    for r in 0..4 {
        for c in 0..4 {
            if r != c {
                assert_eq!(d.get(r, c), 0.0);
            }
        }
    }
}

// ============================================================================
// Reproducibility Tests
// ============================================================================

/// The same seed yields the same matrix.
#[test]
fn test_seeded_reproducibility() {
    let a: Matrix<f64> = generate::square(&mut StdRng::seed_from_u64(42), 4, -10..10).unwrap();
    let b: Matrix<f64> = generate::square(&mut StdRng::seed_from_u64(42), 4, -10..10).unwrap();
    assert_eq!(a, b);
}

// ============================================================================
// Integration Tests
// ============================================================================

/// A generated upper-triangular matrix runs through the engine with a
/// determinant equal to its diagonal product.
#[test]
fn test_generated_triangular_determinant() {
    let mut rng = StdRng::seed_from_u64(11);
    let m: Matrix<f64> = generate::upper_triangular(&mut rng, 5, 1..10).unwrap();

    let report = Gaussdet::new().build().unwrap().determinant(&m).unwrap();
    let expected: f64 = m.diag().iter().product();

    assert_eq!(report.determinant, expected);
    assert_eq!(report.swaps, 0);
}
