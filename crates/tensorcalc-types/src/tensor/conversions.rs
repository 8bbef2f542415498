use crate::error::TensorError;
use crate::tensor::core::{Cube, Matrix, Tensor, Vector};

// ============================================================================
// Tagging
// ============================================================================

impl From<Vector> for Tensor {
    fn from(v: Vector) -> Self {
        Tensor::Vector(v)
    }
}

impl From<Matrix> for Tensor {
    fn from(m: Matrix) -> Self {
        Tensor::Matrix(m)
    }
}

impl From<Cube> for Tensor {
    fn from(c: Cube) -> Self {
        Tensor::Cube(c)
    }
}

// ============================================================================
// Nested Vec conversion
// ============================================================================

impl TryFrom<Vec<f64>> for Tensor {
    type Error = TensorError;

    fn try_from(data: Vec<f64>) -> Result<Self, Self::Error> {
        Tensor::vector(data)
    }
}

impl TryFrom<Vec<Vec<f64>>> for Tensor {
    type Error = TensorError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Tensor::matrix(rows)
    }
}

impl TryFrom<Vec<Vec<Vec<f64>>>> for Tensor {
    type Error = TensorError;

    fn try_from(layers: Vec<Vec<Vec<f64>>>) -> Result<Self, Self::Error> {
        Tensor::cube(layers)
    }
}

// ============================================================================
// Serde: tensors travel as nested arrays
// ============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for Tensor {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Tensor::Vector(v) => serde::Serialize::serialize(v.data(), serializer),
            Tensor::Matrix(m) => serde::Serialize::serialize(&m.to_rows(), serializer),
            Tensor::Cube(c) => serde::Serialize::serialize(&c.to_layers(), serializer),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Tensor {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = <serde_json::Value as serde::Deserialize>::deserialize(deserializer)?;
        Tensor::from_json(&value).map_err(serde::de::Error::custom)
    }
}
