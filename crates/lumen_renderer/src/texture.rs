//! Procedural textures sampled by materials.

use crate::Color;
use lumen_math::Vec3;

/// Spatial frequency of the checker pattern.
const CHECKER_FREQUENCY: f32 = 10.0;

/// A procedural color source.
///
/// Textures are evaluated at the world-space hit point; `u`/`v` are carried
/// through for completeness but no current primitive computes them.
#[derive(Debug, Clone, PartialEq)]
pub enum Texture {
    /// The same color everywhere.
    Constant(Color),
    /// A 3D checkerboard alternating between two child textures.
    Checker { even: Box<Texture>, odd: Box<Texture> },
}

impl Texture {
    /// Create a constant-color texture.
    pub fn constant(color: Color) -> Self {
        Texture::Constant(color)
    }

    /// Create a checker texture from two child textures.
    pub fn checker(even: impl Into<Texture>, odd: impl Into<Texture>) -> Self {
        Texture::Checker {
            even: Box::new(even.into()),
            odd: Box::new(odd.into()),
        }
    }

    /// Evaluate the texture color.
    pub fn value(&self, u: f32, v: f32, p: Vec3) -> Color {
        match self {
            Texture::Constant(color) => *color,
            Texture::Checker { even, odd } => {
                let sines = (CHECKER_FREQUENCY * p.x).sin()
                    * (CHECKER_FREQUENCY * p.y).sin()
                    * (CHECKER_FREQUENCY * p.z).sin();
                if sines < 0.0 {
                    odd.value(u, v, p)
                } else {
                    even.value(u, v, p)
                }
            }
        }
    }
}

impl From<Color> for Texture {
    fn from(color: Color) -> Self {
        Texture::Constant(color)
    }
}
