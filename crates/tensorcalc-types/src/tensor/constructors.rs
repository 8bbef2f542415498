//! Zero-filled and identity tensors

use crate::error::Result;
use crate::tensor::core::{Cube, Matrix, Rank, Tensor, Vector};

/// Length of the default vector operand
pub const DEFAULT_VECTOR_LEN: usize = 3;
/// Side of the default square matrix operand
pub const DEFAULT_MATRIX_SIDE: usize = 2;
/// Side of the default cube operand
pub const DEFAULT_CUBE_SIDE: usize = 3;

impl Vector {
    pub fn zeros(len: usize) -> Result<Self> {
        Vector::new(vec![0.0; len])
    }
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        Matrix::new(vec![0.0; rows * cols], rows, cols)
    }

    pub fn identity(n: usize) -> Result<Self> {
        let mut m = Matrix::zeros(n, n)?;
        for i in 0..n {
            m.data[i * n + i] = 1.0;
        }
        Ok(m)
    }
}

impl Cube {
    pub fn zeros(layers: usize, rows: usize, cols: usize) -> Result<Self> {
        Cube::new(vec![0.0; layers * rows * cols], layers, rows, cols)
    }
}

impl Tensor {
    /// Zero-filled operand of the default size for `rank`
    ///
    /// A length-3 vector, a 2x2 matrix, or a 3x3x3 cube. An all-zero tensor is
    /// an ordinary value, not an absent one.
    pub fn zeros(rank: Rank) -> Tensor {
        match rank {
            Rank::Vector => Tensor::Vector(Vector {
                data: vec![0.0; DEFAULT_VECTOR_LEN],
            }),
            Rank::Matrix => Tensor::Matrix(Matrix {
                rows: DEFAULT_MATRIX_SIDE,
                cols: DEFAULT_MATRIX_SIDE,
                data: vec![0.0; DEFAULT_MATRIX_SIDE * DEFAULT_MATRIX_SIDE],
            }),
            Rank::Cube => Tensor::Cube(Cube {
                layers: DEFAULT_CUBE_SIDE,
                rows: DEFAULT_CUBE_SIDE,
                cols: DEFAULT_CUBE_SIDE,
                data: vec![0.0; DEFAULT_CUBE_SIDE.pow(3)],
            }),
        }
    }

    /// Zero-filled operand for the caller's numeric dimension selector (1, 2 or 3)
    pub fn zeros_for_dimension(dimension: u8) -> Result<Tensor> {
        let rank = Rank::try_from(dimension)?;
        Ok(Tensor::zeros(rank))
    }

    pub fn vector(data: Vec<f64>) -> Result<Tensor> {
        Vector::new(data).map(Tensor::from)
    }

    pub fn matrix(rows: Vec<Vec<f64>>) -> Result<Tensor> {
        Matrix::from_rows(rows).map(Tensor::from)
    }

    pub fn cube(layers: Vec<Vec<Vec<f64>>>) -> Result<Tensor> {
        Cube::from_layers(layers).map(Tensor::from)
    }
}

