//! LaTeX rendering of matrices and trace entries.
//!
//! ## Purpose
//!
//! This module walks a trace in order and formats each entry into LaTeX
//! math, mirroring the typeset step-by-step derivation a teaching
//! document would show: matrix bodies, operation blocks for swaps,
//! diagonal folds and row combinations, and the final derivation.
//!
//! ## Design notes
//!
//! * **Schema only**: Rendering needs nothing beyond the public entry
//!   schema; it never inspects engine internals.
//! * **Pure strings**: Output is plain LaTeX source. Assembling a
//!   document and compiling it are downstream concerns.
//! * **One-based labels**: Row indices are shown one-based (`F_1`, `F_2`)
//!   to match the conventional notation for elementary row operations.
//!
//! ## Non-goals
//!
//! * Document assembly (preamble, sections) and PDF compilation.
//! * Configurable numeric precision (fixed at two decimals).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::string::String;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::matrix::Matrix;
use crate::trace::entry::{StepDetail, TraceEntry};

#[inline]
fn num<T: Float>(v: T) -> String {
    format!("{:.2}", v.to_f64().unwrap_or(f64::NAN))
}

// ============================================================================
// Matrix Rendering
// ============================================================================

/// Render a matrix as a `pmatrix` body.
pub fn matrix_to_latex<T: Float>(matrix: &Matrix<T>) -> String {
    let mut out = String::from("\\begin{pmatrix}\n");
    for r in 0..matrix.rows() {
        let row: Vec<String> = (0..matrix.cols()).map(|c| num(matrix.get(r, c))).collect();
        out.push_str(&row.join(" & "));
        out.push_str(" \\\\\n");
    }
    out.push_str("\\end{pmatrix}");
    out
}

// ============================================================================
// Entry Rendering
// ============================================================================

/// Render one trace entry as LaTeX math (without surrounding delimiters).
pub fn entry_to_latex<T: Float>(entry: &TraceEntry<T>) -> String {
    let snapshot = entry.snapshot.as_ref().map(matrix_to_latex);

    let body = match &entry.detail {
        None => String::new(),
        Some(StepDetail::Swap {
            rows,
            det_before,
            det_after,
            ..
        }) => format!(
            "\\begin{{aligned}}\n\
             \\text{{Operation:}} &\\quad F_{{{}}} \\leftrightarrow F_{{{}}} \\\\\n\
             \\text{{Determinant:}} &\\quad \\det \\leftarrow -1 \\times \\det \\\\\n\
             &\\quad = -1 \\times {} = {}\n\
             \\end{{aligned}}",
            rows.0 + 1,
            rows.1 + 1,
            num(*det_before),
            num(*det_after),
        ),
        Some(StepDetail::DiagonalMultiply {
            row,
            pivot,
            det_before,
            det_after,
        }) => format!(
            "\\begin{{aligned}}\n\
             \\text{{Operation:}} &\\quad \\det \\leftarrow a_{{{},{}}} \\times \\det \\\\\n\
             &\\quad = {} \\times {} \\\\\n\
             &\\quad = {}\n\
             \\end{{aligned}}",
            row + 1,
            row + 1,
            num(*pivot),
            num(*det_before),
            num(*det_after),
        ),
        Some(StepDetail::RowCombine {
            source,
            target,
            factor,
        }) => format!(
            "\\begin{{aligned}}\n\
             \\text{{Operation:}} &\\quad F_{{{}}} \\leftarrow F_{{{}}} - {} \\cdot F_{{{}}} \\\\\n\
             \\text{{Effect:}} &\\quad \\text{{does not change the determinant}}\n\
             \\end{{aligned}}",
            target + 1,
            target + 1,
            num(*factor),
            source + 1,
        ),
        Some(StepDetail::ZeroPivot { .. }) => String::from("\\det(A) = 0"),
        Some(StepDetail::Determinant {
            sign,
            diagonal,
            determinant,
        }) => {
            let product: Vec<String> = diagonal.iter().map(|&d| num(d)).collect();
            let prefix = if *sign < 0 { "-" } else { "" };
            format!(
                "\\begin{{aligned}}\n\
                 \\det(A) &= {}{} \\\\\n\
                 &= {}\n\
                 \\end{{aligned}}",
                prefix,
                product.join(" \\times "),
                num(*determinant),
            )
        }
    };

    match (body.is_empty(), snapshot) {
        (true, Some(mat)) => mat,
        (true, None) => String::new(),
        (false, Some(mat)) => format!("{body}\n\\quad \\rightarrow \\quad\n{mat}"),
        (false, None) => body,
    }
}

// ============================================================================
// Trace Rendering
// ============================================================================

/// Render a full trace as a sequence of titled display-math blocks.
pub fn trace_to_latex<T: Float>(trace: &[TraceEntry<T>]) -> String {
    let mut out = String::new();
    for entry in trace {
        out.push_str(&format!("\\subsection*{{{}}}\n", entry.title));
        let body = entry_to_latex(entry);
        if !body.is_empty() {
            out.push_str("\\[\n");
            out.push_str(&body);
            out.push_str("\n\\]\n");
        }
    }
    out
}
