//! Value types for the tensorcalc engine
//!
//! - `tensor`: the `Tensor` tagged union (vector, matrix, cube), shapes, ranks
//!   and constructors, plus structural classification of JSON input
//! - `operation`: the `Operation` selector
//! - `error`: `TensorError` and its coarse `ErrorKind`

pub mod error;
pub mod operation;
pub mod tensor;

// Re-exports
pub use error::{ErrorKind, Result, TensorError};
pub use operation::Operation;
pub use tensor::{Cube, Matrix, Rank, Shape, Tensor, Vector};
