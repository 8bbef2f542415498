//! Tensorcalc arithmetic engine
//!
//! Pure, synchronous operations over vectors, matrices and 3x3x3 cubes:
//!
//! - `elementwise`: `sum`, `subtract`, `negate`
//! - `multiply`: Hadamard product for vectors, matrix product for matrices,
//!   per-depth-slice product for cubes
//! - `inverse`: closed-form 2x2 inversion
//! - `engine`: `apply` / `calculate`, dispatching on an `Operation`
//!
//! Every function borrows its inputs and returns a freshly allocated tensor or
//! a `TensorError`. Operand compatibility is checked before any arithmetic, so
//! a failed call never produces a partial result.
//!
//! ```
//! use tensorcalc_linalg::apply;
//! use tensorcalc_types::{Operation, Tensor};
//!
//! let a = Tensor::matrix(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
//! let b = Tensor::matrix(vec![vec![5.0, 6.0], vec![7.0, 8.0]]).unwrap();
//! let product = apply(Operation::Multiply, &a, Some(&b)).unwrap();
//! assert_eq!(product.to_string(), "[[19, 22], [43, 50]]");
//! ```

pub mod elementwise;
pub mod engine;
pub mod inverse;
pub mod multiply;

mod validate;

// Re-export main entry points
pub use elementwise::{negate, subtract, sum};
pub use engine::{apply, calculate};
pub use inverse::{determinant_2x2, inverse, inverse_2x2};
pub use multiply::{multiply, multiply_cubes, multiply_matrices, multiply_vectors};
