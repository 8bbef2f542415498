//! Operation selector

use crate::error::TensorError;
use crate::tensor::Rank;
use std::fmt;
use std::str::FromStr;

/// Arithmetic operation requested by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Operation {
    Sum,
    Subtract,
    Multiply,
    /// Unary; only defined for 2x2 matrices
    Inverse,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Sum,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Inverse,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Operation::Sum => "sum",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Inverse => "inverse",
        }
    }

    /// Number of operands the operation consumes
    pub fn arity(&self) -> usize {
        match self {
            Operation::Inverse => 1,
            _ => 2,
        }
    }

    pub fn is_unary(&self) -> bool {
        self.arity() == 1
    }

    /// Whether the operation is offered for operands of the given rank
    ///
    /// Inversion is only offered for matrices; everything else works on all
    /// three ranks.
    pub fn is_supported_for(&self, rank: Rank) -> bool {
        match self {
            Operation::Inverse => rank == Rank::Matrix,
            _ => true,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = TensorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| TensorError::UnknownOperation(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!("sum".parse::<Operation>().unwrap(), Operation::Sum);
        assert_eq!("Subtract".parse::<Operation>().unwrap(), Operation::Subtract);
        assert_eq!(" multiply ".parse::<Operation>().unwrap(), Operation::Multiply);
        assert_eq!("inverse".parse::<Operation>().unwrap(), Operation::Inverse);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "divide".parse::<Operation>().unwrap_err();
        assert_eq!(err, TensorError::UnknownOperation("divide".to_string()));
    }

    #[test]
    fn test_arity() {
        assert!(Operation::Inverse.is_unary());
        assert_eq!(Operation::Sum.arity(), 2);
        assert_eq!(Operation::Multiply.arity(), 2);
    }

    #[test]
    fn test_inverse_only_for_matrices() {
        assert!(Operation::Inverse.is_supported_for(Rank::Matrix));
        assert!(!Operation::Inverse.is_supported_for(Rank::Vector));
        assert!(!Operation::Inverse.is_supported_for(Rank::Cube));
        assert!(Operation::Multiply.is_supported_for(Rank::Cube));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Operation::Subtract).unwrap();
        assert_eq!(json, "\"subtract\"");
        let op: Operation = serde_json::from_str("\"inverse\"").unwrap();
        assert_eq!(op, Operation::Inverse);
    }
}
