use crate::tensor::core::{Cube, Matrix, Tensor, Vector};
use std::fmt;

fn write_row(f: &mut fmt::Formatter<'_>, row: &[f64]) -> fmt::Result {
    f.write_str("[")?;
    for (i, x) in row.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", x)?;
    }
    f.write_str("]")
}

fn write_rows(f: &mut fmt::Formatter<'_>, data: &[f64], cols: usize) -> fmt::Result {
    f.write_str("[")?;
    for (i, row) in data.chunks(cols).enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write_row(f, row)?;
    }
    f.write_str("]")
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_row(f, self.data())
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_rows(f, self.data(), self.cols())
    }
}

impl fmt::Display for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, layer) in self.data().chunks(self.rows() * self.cols()).enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write_rows(f, layer, self.cols())?;
        }
        f.write_str("]")
    }
}

impl fmt::Display for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tensor::Vector(v) => v.fmt(f),
            Tensor::Matrix(m) => m.fmt(f),
            Tensor::Cube(c) => c.fmt(f),
        }
    }
}
