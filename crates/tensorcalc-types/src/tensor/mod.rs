mod conversions;
mod core;
mod display;

pub mod constructors;

#[cfg(feature = "serde")]
pub mod classify;


// Re-export main types
pub use self::core::{Cube, Matrix, Rank, Shape, Tensor, Vector};

#[cfg(feature = "serde")]
pub use classify::classify;
