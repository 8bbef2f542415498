//! Structural rank detection for loosely-typed input
//!
//! Callers hand over nested JSON arrays whose rank is not known up front. The
//! rank is read off the nesting of the *first* element:
//! - first element is an array whose first element is an array: cube
//! - first element is an array: matrix
//! - anything else: vector
//!
//! Once classified, the value is converted into the explicit [`Tensor`] enum
//! and never inspected structurally again.

use crate::error::{Result, TensorError};
use crate::tensor::core::{Rank, Tensor};
use serde_json::Value;

/// Derive the rank of a nested-array value, or `None` if it is not an array
pub fn classify(value: &Value) -> Option<Rank> {
    let items = value.as_array()?;
    match items.first() {
        Some(Value::Array(inner)) => match inner.first() {
            Some(Value::Array(_)) => Some(Rank::Cube),
            _ => Some(Rank::Matrix),
        },
        _ => Some(Rank::Vector),
    }
}

fn numbers(items: &[Value]) -> Result<Vec<f64>> {
    items
        .iter()
        .map(|v| {
            v.as_f64()
                .ok_or_else(|| TensorError::invalid(format!("expected a number, got {}", v)))
        })
        .collect()
}

fn array(value: &Value) -> Result<&[Value]> {
    value
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| TensorError::invalid(format!("expected an array, got {}", value)))
}

fn rows(items: &[Value]) -> Result<Vec<Vec<f64>>> {
    items.iter().map(|row| numbers(array(row)?)).collect()
}

impl Tensor {
    /// Classify a nested-array value and build the matching tensor
    pub fn from_json(value: &Value) -> Result<Tensor> {
        let rank = classify(value)
            .ok_or_else(|| TensorError::invalid(format!("expected an array, got {}", value)))?;
        let items = array(value)?;

        match rank {
            Rank::Vector => Tensor::vector(numbers(items)?),
            Rank::Matrix => Tensor::matrix(rows(items)?),
            Rank::Cube => {
                let layers = items
                    .iter()
                    .map(|layer| rows(array(layer)?))
                    .collect::<Result<Vec<_>>>()?;
                Tensor::cube(layers)
            }
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            Tensor::Vector(v) => Value::from(v.data().to_vec()),
            Tensor::Matrix(m) => Value::from(m.to_rows()),
            Tensor::Cube(c) => Value::from(c.to_layers()),
        }
    }
}
