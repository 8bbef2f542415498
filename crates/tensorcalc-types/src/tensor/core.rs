use crate::error::{Result, TensorError};
use std::fmt;
use std::ops::Index;

// ============================================================================
// Rank
// ============================================================================

/// Number of nested dimensions of a tensor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u8", into = "u8")
)]
pub enum Rank {
    Vector = 1,
    Matrix = 2,
    Cube = 3,
}

impl Rank {
    pub fn name(&self) -> &'static str {
        match self {
            Rank::Vector => "vector",
            Rank::Matrix => "matrix",
            Rank::Cube => "cube",
        }
    }

    /// Prefix used when two operands of this rank disagree on size
    pub(crate) fn mismatch_label(&self) -> &'static str {
        match self {
            Rank::Vector => "vector length",
            Rank::Matrix => "matrix dimension",
            Rank::Cube => "cube dimension",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for Rank {
    type Error = TensorError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            1 => Ok(Rank::Vector),
            2 => Ok(Rank::Matrix),
            3 => Ok(Rank::Cube),
            other => Err(TensorError::InvalidRank(other)),
        }
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> u8 {
        rank as u8
    }
}

// ============================================================================
// Shape
// ============================================================================

/// Concrete sizes along each dimension, outermost first
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shape {
    dims: Vec<usize>,
}

impl Shape {
    pub fn new(dims: Vec<usize>) -> Self {
        Shape { dims }
    }

    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    pub fn num_elements(&self) -> usize {
        self.dims.iter().product()
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, dim) in self.dims.iter().enumerate() {
            if i > 0 {
                f.write_str("x")?;
            }
            write!(f, "{}", dim)?;
        }
        Ok(())
    }
}

// ============================================================================
// Vector
// ============================================================================

/// Rank-1 tensor of any positive length
#[derive(Debug, Clone, PartialEq)]
pub struct Vector {
    pub(crate) data: Vec<f64>,
}

impl Vector {
    pub fn new(data: Vec<f64>) -> Result<Self> {
        if data.is_empty() {
            return Err(TensorError::invalid("vector must have at least one element"));
        }
        Ok(Vector { data })
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn data(&self) -> &[f64] {
        &self.data
    }

    pub fn into_data(self) -> Vec<f64> {
        self.data
    }

    pub fn get(&self, i: usize) -> Option<f64> {
        self.data.get(i).copied()
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, i: usize) -> &f64 {
        &self.data[i]
    }
}

// ============================================================================
// Matrix
// ============================================================================

/// Rank-2 tensor stored row-major
///
/// Rectangular by construction: `data.len() == rows * cols`.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    pub(crate) rows: usize,
    pub(crate) cols: usize,
    pub(crate) data: Vec<f64>,
}

impl Matrix {
    /// Build a matrix from row-major data
    pub fn new(data: Vec<f64>, rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(TensorError::invalid(format!(
                "matrix dimensions must be positive, got {}x{}",
                rows, cols
            )));
        }
        if data.len() != rows * cols {
            return Err(TensorError::invalid(format!(
                "{}x{} matrix needs {} elements, got {}",
                rows,
                cols,
                rows * cols,
                data.len()
            )));
        }
        Ok(Matrix { rows, cols, data })
    }

    /// Build a matrix from nested rows; every row must match the first row's length
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let cols = rows.first().map(Vec::len).unwrap_or(0);
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != cols) {
            return Err(TensorError::invalid(format!(
                "row {} has {} elements, expected {}",
                i,
                row.len(),
                cols
            )));
        }
        let n = rows.len();
        Matrix::new(rows.into_iter().flatten().collect(), n, cols)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn data(&self) -> &[f64] {
        &self.data
    }

    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        if i < self.rows && j < self.cols {
            Some(self.data[i * self.cols + j])
        } else {
            None
        }
    }

    pub fn row(&self, i: usize) -> Option<&[f64]> {
        if i < self.rows {
            Some(&self.data[i * self.cols..(i + 1) * self.cols])
        } else {
            None
        }
    }

    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.data.chunks(self.cols).map(<[f64]>::to_vec).collect()
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        assert!(
            i < self.rows && j < self.cols,
            "index ({}, {}) out of bounds for {}x{} matrix",
            i,
            j,
            self.rows,
            self.cols
        );
        &self.data[i * self.cols + j]
    }
}

// ============================================================================
// Cube
// ============================================================================

/// Rank-3 tensor: `layers` matrices of identical `rows x cols` size
///
/// Element `[i][j][k]` lives at `(i * rows + j) * cols + k`.
#[derive(Debug, Clone, PartialEq)]
pub struct Cube {
    pub(crate) layers: usize,
    pub(crate) rows: usize,
    pub(crate) cols: usize,
    pub(crate) data: Vec<f64>,
}

impl Cube {
    pub fn new(data: Vec<f64>, layers: usize, rows: usize, cols: usize) -> Result<Self> {
        if layers == 0 || rows == 0 || cols == 0 {
            return Err(TensorError::invalid(format!(
                "cube dimensions must be positive, got {}x{}x{}",
                layers, rows, cols
            )));
        }
        let expected = layers * rows * cols;
        if data.len() != expected {
            return Err(TensorError::invalid(format!(
                "{}x{}x{} cube needs {} elements, got {}",
                layers,
                rows,
                cols,
                expected,
                data.len()
            )));
        }
        Ok(Cube {
            layers,
            rows,
            cols,
            data,
        })
    }

    /// Build a cube from nested layers; every layer must match the first
    pub fn from_layers(layers: Vec<Vec<Vec<f64>>>) -> Result<Self> {
        let mut matrices: Vec<Matrix> = Vec::with_capacity(layers.len());
        for (i, layer) in layers.into_iter().enumerate() {
            let matrix = Matrix::from_rows(layer)
                .map_err(|e| TensorError::invalid(format!("layer {}: {}", i, e)))?;
            if let Some(first) = matrices.first() {
                if first.rows != matrix.rows || first.cols != matrix.cols {
                    return Err(TensorError::invalid(format!(
                        "layer {} is {}x{}, expected {}x{}",
                        i, matrix.rows, matrix.cols, first.rows, first.cols
                    )));
                }
            }
            matrices.push(matrix);
        }

        let (rows, cols) = matrices.first().map(|m| (m.rows, m.cols)).unwrap_or((0, 0));
        let count = matrices.len();
        let data = matrices.into_iter().flat_map(|m| m.data).collect();
        Cube::new(data, count, rows, cols)
    }

    pub fn layers(&self) -> usize {
        self.layers
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn data(&self) -> &[f64] {
        &self.data
    }

    pub fn get(&self, i: usize, j: usize, k: usize) -> Option<f64> {
        if i < self.layers && j < self.rows && k < self.cols {
            Some(self.data[(i * self.rows + j) * self.cols + k])
        } else {
            None
        }
    }

    /// Copy of layer `i` as a matrix
    pub fn layer(&self, i: usize) -> Option<Matrix> {
        if i >= self.layers {
            return None;
        }
        let size = self.rows * self.cols;
        Some(Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data[i * size..(i + 1) * size].to_vec(),
        })
    }

    pub fn to_layers(&self) -> Vec<Vec<Vec<f64>>> {
        self.data
            .chunks(self.rows * self.cols)
            .map(|layer| layer.chunks(self.cols).map(<[f64]>::to_vec).collect())
            .collect()
    }
}

impl Index<(usize, usize, usize)> for Cube {
    type Output = f64;

    fn index(&self, (i, j, k): (usize, usize, usize)) -> &f64 {
        assert!(
            i < self.layers && j < self.rows && k < self.cols,
            "index ({}, {}, {}) out of bounds for {}x{}x{} cube",
            i,
            j,
            k,
            self.layers,
            self.rows,
            self.cols
        );
        &self.data[(i * self.rows + j) * self.cols + k]
    }
}

// ============================================================================
// Tensor
// ============================================================================

/// A vector, matrix or cube of real numbers
#[derive(Debug, Clone, PartialEq)]
pub enum Tensor {
    Vector(Vector),
    Matrix(Matrix),
    Cube(Cube),
}

impl Tensor {
    pub fn rank(&self) -> Rank {
        match self {
            Tensor::Vector(_) => Rank::Vector,
            Tensor::Matrix(_) => Rank::Matrix,
            Tensor::Cube(_) => Rank::Cube,
        }
    }

    pub fn shape(&self) -> Shape {
        match self {
            Tensor::Vector(v) => Shape::new(vec![v.len()]),
            Tensor::Matrix(m) => Shape::new(vec![m.rows, m.cols]),
            Tensor::Cube(c) => Shape::new(vec![c.layers, c.rows, c.cols]),
        }
    }

    /// Flat row-major view of every entry
    pub fn data(&self) -> &[f64] {
        match self {
            Tensor::Vector(v) => &v.data,
            Tensor::Matrix(m) => &m.data,
            Tensor::Cube(c) => &c.data,
        }
    }

    /// New tensor with this tensor's shape and the given row-major entries
    pub fn with_data(&self, data: Vec<f64>) -> Result<Tensor> {
        match self {
            Tensor::Vector(_) => Vector::new(data).map(Tensor::from),
            Tensor::Matrix(m) => Matrix::new(data, m.rows, m.cols).map(Tensor::from),
            Tensor::Cube(c) => Cube::new(data, c.layers, c.rows, c.cols).map(Tensor::from),
        }
    }

    pub fn as_vector(&self) -> Option<&Vector> {
        match self {
            Tensor::Vector(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_matrix(&self) -> Option<&Matrix> {
        match self {
            Tensor::Matrix(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_cube(&self) -> Option<&Cube> {
        match self {
            Tensor::Cube(c) => Some(c),
            _ => None,
        }
    }
}
