pub mod angle_2d;

pub use angle_2d::{angle_between_vectors, vector_between};

/// 2D point type (screen-space pixel or ratio coordinates).
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;
