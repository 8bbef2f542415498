//! Elementwise addition, subtraction and negation
//!
//! Results always have the shape of the operands.

use crate::validate::same_shape;
use tensorcalc_types::{Operation, Result, Tensor};

fn zip_with(
    operation: Operation,
    a: &Tensor,
    b: &Tensor,
    f: impl Fn(f64, f64) -> f64,
) -> Result<Tensor> {
    same_shape(operation, a, b)?;
    let data = a
        .data()
        .iter()
        .zip(b.data())
        .map(|(&x, &y)| f(x, y))
        .collect();
    a.with_data(data)
}

/// `a + b` entry by entry
pub fn sum(a: &Tensor, b: &Tensor) -> Result<Tensor> {
    zip_with(Operation::Sum, a, b, |x, y| x + y)
}

/// `a - b` entry by entry
pub fn subtract(a: &Tensor, b: &Tensor) -> Result<Tensor> {
    zip_with(Operation::Subtract, a, b, |x, y| x - y)
}

/// `-t` entry by entry
pub fn negate(t: &Tensor) -> Result<Tensor> {
    t.with_data(t.data().iter().map(|x| -x).collect())
}
