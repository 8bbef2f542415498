//! Closed-form 2x2 inversion
//!
//! No pivoting or decomposition: only 2x2 matrices are invertible here.

use tensorcalc_types::{Matrix, Operation, Result, Tensor, TensorError};

fn require_2x2(m: &Matrix) -> Result<()> {
    if m.rows() != 2 || m.cols() != 2 {
        return Err(TensorError::UnsupportedOperands {
            operation: Operation::Inverse,
            reason: format!(
                "only 2x2 matrix inversion is supported, got {}x{}",
                m.rows(),
                m.cols()
            ),
        });
    }
    Ok(())
}

/// `ad - bc` for `[[a, b], [c, d]]`
pub fn determinant_2x2(m: &Matrix) -> Result<f64> {
    require_2x2(m)?;
    Ok(m[(0, 0)] * m[(1, 1)] - m[(0, 1)] * m[(1, 0)])
}

/// Adjugate over determinant
///
/// Fails with `NotInvertible` when the determinant is exactly zero; there is
/// no tolerance, so nearly singular matrices still invert.
pub fn inverse_2x2(m: &Matrix) -> Result<Matrix> {
    let det = determinant_2x2(m)?;
    if det == 0.0 {
        return Err(TensorError::NotInvertible { determinant: det });
    }

    let (a, b, c, d) = (m[(0, 0)], m[(0, 1)], m[(1, 0)], m[(1, 1)]);
    Matrix::new(vec![d / det, -b / det, -c / det, a / det], 2, 2)
}

/// Invert a tensor; only 2x2 matrices are accepted
pub fn inverse(t: &Tensor) -> Result<Tensor> {
    match t {
        Tensor::Matrix(m) => inverse_2x2(m).map(Tensor::from),
        other => Err(TensorError::UnsupportedOperands {
            operation: Operation::Inverse,
            reason: format!("inversion is only defined for 2x2 matrices, got a {}", other.rank()),
        }),
    }
}
