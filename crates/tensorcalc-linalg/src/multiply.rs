//! Multiplication, one algorithm per rank
//!
//! - vectors: elementwise (Hadamard) product, not a dot product
//! - matrices: the usual matrix product
//! - cubes: fixed 3x3x3 product computed independently for each depth slice

use tensorcalc_types::{Cube, Matrix, Operation, Rank, Result, Shape, Tensor, TensorError, Vector};

/// Side length the cube product is defined for
pub const CUBE_SIDE: usize = 3;

/// Elementwise product of two vectors of equal length
pub fn multiply_vectors(a: &Vector, b: &Vector) -> Result<Vector> {
    if a.len() != b.len() {
        return Err(TensorError::ShapeMismatch {
            rank: Rank::Vector,
            left: Shape::new(vec![a.len()]),
            right: Shape::new(vec![b.len()]),
        });
    }
    Vector::new(a.data().iter().zip(b.data()).map(|(x, y)| x * y).collect())
}

/// Matrix product: `result[i][j] = sum_k a[i][k] * b[k][j]`
pub fn multiply_matrices(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    if a.cols() != b.rows() {
        return Err(TensorError::IncompatibleDimensions {
            left_cols: a.cols(),
            right_rows: b.rows(),
        });
    }

    let (rows, cols, inner) = (a.rows(), b.cols(), a.cols());
    let mut data = vec![0.0; rows * cols];
    for i in 0..rows {
        for j in 0..cols {
            let mut acc = 0.0;
            for k in 0..inner {
                acc += a[(i, k)] * b[(k, j)];
            }
            data[i * cols + j] = acc;
        }
    }
    Matrix::new(data, rows, cols)
}

fn is_cube_side(c: &Cube) -> bool {
    c.layers() == CUBE_SIDE && c.rows() == CUBE_SIDE && c.cols() == CUBE_SIDE
}

/// Per-depth-slice product of two 3x3x3 cubes
///
/// `result[i][j][k] = sum_l a[i][l][k] * b[l][j][k]`. The depth index `k` is
/// carried through untouched; only the middle index is contracted. Cubes of
/// any other size are rejected.
pub fn multiply_cubes(a: &Cube, b: &Cube) -> Result<Cube> {
    for c in [a, b] {
        if !is_cube_side(c) {
            return Err(TensorError::UnsupportedOperands {
                operation: Operation::Multiply,
                reason: format!(
                    "cube multiplication requires {n}x{n}x{n} cubes, got {}x{}x{}",
                    c.layers(),
                    c.rows(),
                    c.cols(),
                    n = CUBE_SIDE
                ),
            });
        }
    }

    let n = CUBE_SIDE;
    let mut data = vec![0.0; n * n * n];
    for i in 0..n {
        for j in 0..n {
            for k in 0..n {
                let mut acc = 0.0;
                for l in 0..n {
                    acc += a[(i, l, k)] * b[(l, j, k)];
                }
                data[(i * n + j) * n + k] = acc;
            }
        }
    }
    Cube::new(data, n, n, n)
}

/// Multiply two tensors using the algorithm for their shared rank
pub fn multiply(a: &Tensor, b: &Tensor) -> Result<Tensor> {
    match (a, b) {
        (Tensor::Vector(x), Tensor::Vector(y)) => multiply_vectors(x, y).map(Tensor::from),
        (Tensor::Matrix(x), Tensor::Matrix(y)) => multiply_matrices(x, y).map(Tensor::from),
        (Tensor::Cube(x), Tensor::Cube(y)) => multiply_cubes(x, y).map(Tensor::from),
        _ => Err(TensorError::RankMismatch {
            operation: Operation::Multiply,
            left: a.rank(),
            right: b.rank(),
        }),
    }
}
