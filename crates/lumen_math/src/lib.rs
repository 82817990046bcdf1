// Re-export glam for convenience
pub use glam::*;

// Lumen math types
mod aabb;
mod interval;
mod ray;

pub use aabb::{Aabb, Axis};
pub use interval::Interval;
pub use ray::Ray;
