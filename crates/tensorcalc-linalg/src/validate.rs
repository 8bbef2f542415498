//! Cross-operand checks shared by every binary operation
//!
//! Operands are trusted to be internally well-formed; only compatibility
//! between the two of them is checked here, and always before any arithmetic.

use tensorcalc_types::{Operation, Rank, Result, Tensor, TensorError};

/// Both operands must carry the same rank tag
pub(crate) fn same_rank(operation: Operation, a: &Tensor, b: &Tensor) -> Result<Rank> {
    let (left, right) = (a.rank(), b.rank());
    if left != right {
        return Err(TensorError::RankMismatch {
            operation,
            left,
            right,
        });
    }
    Ok(left)
}

/// Same rank and identical size along every dimension
pub(crate) fn same_shape(operation: Operation, a: &Tensor, b: &Tensor) -> Result<()> {
    let rank = same_rank(operation, a, b)?;
    let (left, right) = (a.shape(), b.shape());
    if left != right {
        return Err(TensorError::ShapeMismatch { rank, left, right });
    }
    Ok(())
}
