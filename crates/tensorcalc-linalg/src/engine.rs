//! Operation dispatch
//!
//! `apply` runs a single `Operation` on one or two operands. `calculate` is
//! the entry point for callers that also declare which dimension they are
//! working in: the declaration is checked against the operands' own ranks
//! rather than trusted.

use crate::elementwise::{subtract, sum};
use crate::inverse::inverse;
use crate::multiply::multiply;
use tensorcalc_types::{Operation, Rank, Result, Tensor, TensorError};
use tracing::debug;

/// Run `operation` on `left` (and `right`, for binary operations)
///
/// `Inverse` only reads `left`; a right operand passed along with it is
/// ignored.
pub fn apply(operation: Operation, left: &Tensor, right: Option<&Tensor>) -> Result<Tensor> {
    debug!(
        %operation,
        left = %left.shape(),
        right = ?right.map(|t| t.shape().to_string()),
        "applying tensor operation"
    );

    let result = match (operation, right) {
        (Operation::Inverse, _) => inverse(left),
        (binary, None) => Err(TensorError::MissingOperand(binary)),
        (Operation::Sum, Some(right)) => sum(left, right),
        (Operation::Subtract, Some(right)) => subtract(left, right),
        (Operation::Multiply, Some(right)) => multiply(left, right),
    };

    match &result {
        Ok(t) => debug!(%operation, shape = %t.shape(), "tensor operation succeeded"),
        Err(e) => debug!(%operation, error = %e, kind = ?e.kind(), "tensor operation rejected"),
    }
    result
}

/// Run `operation` for a caller working in the declared `rank`
///
/// Fails without computing anything if the operation is not offered for that
/// rank or if an operand's actual rank differs from the declaration.
pub fn calculate(
    rank: Rank,
    operation: Operation,
    left: &Tensor,
    right: Option<&Tensor>,
) -> Result<Tensor> {
    if !operation.is_supported_for(rank) {
        return Err(TensorError::UnsupportedOperands {
            operation,
            reason: format!("{} is not available for {} operands", operation, rank),
        });
    }

    let operands = std::iter::once(left).chain(if operation.is_unary() { None } else { right });
    for operand in operands {
        if operand.rank() != rank {
            return Err(TensorError::DeclaredRankMismatch {
                declared: rank,
                actual: operand.rank(),
            });
        }
    }

    apply(operation, left, right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tensorcalc_types::ErrorKind;

    fn vector(data: &[f64]) -> Tensor {
        Tensor::vector(data.to_vec()).unwrap()
    }

    #[test]
    fn test_apply_each_operation() {
        let a = vector(&[1.0, 2.0, 3.0]);
        let b = vector(&[4.0, 5.0, 6.0]);
        assert_eq!(
            apply(Operation::Sum, &a, Some(&b)).unwrap(),
            vector(&[5.0, 7.0, 9.0])
        );
        assert_eq!(
            apply(Operation::Subtract, &b, Some(&a)).unwrap(),
            vector(&[3.0, 3.0, 3.0])
        );
        assert_eq!(
            apply(Operation::Multiply, &a, Some(&b)).unwrap(),
            vector(&[4.0, 10.0, 18.0])
        );

        let m = Tensor::matrix(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(
            apply(Operation::Inverse, &m, None).unwrap(),
            Tensor::matrix(vec![vec![-2.0, 1.0], vec![1.5, -0.5]]).unwrap()
        );
    }

    #[test]
    fn test_apply_missing_operand() {
        let a = vector(&[1.0]);
        let err = apply(Operation::Sum, &a, None).unwrap_err();
        assert_eq!(err, TensorError::MissingOperand(Operation::Sum));
    }

    #[test]
    fn test_inverse_ignores_right_operand() {
        let m = Tensor::matrix(vec![vec![2.0, 0.0], vec![0.0, 2.0]]).unwrap();
        let stale = vector(&[1.0, 2.0, 3.0]);
        let result = apply(Operation::Inverse, &m, Some(&stale)).unwrap();
        assert_eq!(result.data(), &[0.5, 0.0, 0.0, 0.5]);
    }

    #[test]
    fn test_calculate_checks_declared_rank() {
        let v = vector(&[1.0, 2.0, 3.0]);
        let err = calculate(Rank::Matrix, Operation::Sum, &v, Some(&v)).unwrap_err();
        assert_eq!(
            err,
            TensorError::DeclaredRankMismatch {
                declared: Rank::Matrix,
                actual: Rank::Vector
            }
        );

        let m = Tensor::zeros(Rank::Matrix);
        let err = calculate(Rank::Matrix, Operation::Sum, &m, Some(&v)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedOperands);
    }

    #[test]
    fn test_calculate_inverse_only_for_matrices() {
        let c = Tensor::zeros(Rank::Cube);
        let err = calculate(Rank::Cube, Operation::Inverse, &c, None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedOperands);
        assert_eq!(
            err.to_string(),
            "unsupported operands for inverse: inverse is not available for cube operands"
        );
    }

    #[test]
    fn test_calculate_cube_multiply() {
        let zero = Tensor::zeros(Rank::Cube);
        let result = calculate(Rank::Cube, Operation::Multiply, &zero, Some(&zero)).unwrap();
        assert_eq!(result, zero);
    }

    #[test]
    fn test_calculate_inverse_skips_right_rank_check() {
        let m = Tensor::matrix(vec![vec![1.0, 1.0], vec![0.0, 1.0]]).unwrap();
        let stale = Tensor::zeros(Rank::Vector);
        let result = calculate(Rank::Matrix, Operation::Inverse, &m, Some(&stale)).unwrap();
        assert_eq!(result.data(), &[1.0, -1.0, 0.0, 1.0]);
    }
}
