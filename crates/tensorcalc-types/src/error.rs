//! Error types for tensor construction and tensor arithmetic

use crate::operation::Operation;
use crate::tensor::{Rank, Shape};
use thiserror::Error;

/// Result alias used throughout the workspace
pub type Result<T> = std::result::Result<T, TensorError>;

/// Coarse classification of a [`TensorError`]
///
/// Callers that only need to know *why* an operation was refused (and not the
/// exact dimensions involved) match on this instead of on the error itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Same rank, different size along some dimension
    ShapeMismatch,
    /// No operation is defined for this rank/shape combination
    UnsupportedOperands,
    /// Determinant is exactly zero
    NotInvertible,
}

/// Errors raised by tensor construction and by the arithmetic engine
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TensorError {
    /// Operands share a rank but disagree on a dimension
    #[error("{label} mismatch: {left} vs {right}", label = .rank.mismatch_label())]
    ShapeMismatch {
        rank: Rank,
        left: Shape,
        right: Shape,
    },

    /// Left column count differs from right row count in a matrix product
    #[error(
        "incompatible dimensions for matrix multiplication: left has {left_cols} columns, right has {right_rows} rows"
    )]
    IncompatibleDimensions { left_cols: usize, right_rows: usize },

    /// Operands classify to different ranks
    #[error("unsupported operands for {operation}: {left} and {right}")]
    RankMismatch {
        operation: Operation,
        left: Rank,
        right: Rank,
    },

    /// The operation has no definition for this operand shape
    #[error("unsupported operands for {operation}: {reason}")]
    UnsupportedOperands {
        operation: Operation,
        reason: String,
    },

    /// Operand rank differs from the dimension the caller declared
    #[error("declared {declared} operands, got a {actual}")]
    DeclaredRankMismatch { declared: Rank, actual: Rank },

    /// A binary operation was invoked with a single operand
    #[error("{0} requires a second operand")]
    MissingOperand(Operation),

    /// 2x2 matrix with a zero determinant
    #[error("matrix is not invertible (determinant is {determinant})")]
    NotInvertible { determinant: f64 },

    #[error("invalid tensor: {0}")]
    InvalidTensor(String),

    #[error("unsupported dimension {0}: expected 1, 2 or 3")]
    InvalidRank(u8),

    #[error("unknown operation '{0}'")]
    UnknownOperation(String),
}

impl TensorError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TensorError::ShapeMismatch { .. } => ErrorKind::ShapeMismatch,
            TensorError::NotInvertible { .. } => ErrorKind::NotInvertible,
            TensorError::IncompatibleDimensions { .. }
            | TensorError::RankMismatch { .. }
            | TensorError::UnsupportedOperands { .. }
            | TensorError::DeclaredRankMismatch { .. }
            | TensorError::MissingOperand(_)
            | TensorError::InvalidTensor(_)
            | TensorError::InvalidRank(_)
            | TensorError::UnknownOperation(_) => ErrorKind::UnsupportedOperands,
        }
    }

    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        TensorError::InvalidTensor(msg.into())
    }
}
