//! Math utilities and types
//!
//! Thin aliases over `nalgebra` used by the menu geometry.

pub use nalgebra::{Vector2, Vector4, Matrix4};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 4D vector type, also used for RGBA colors
pub type Vec4 = Vector4<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// 2D point in either projection space or window space
pub type Point = nalgebra::Point2<f32>;

/// Build an orthographic projection centred on the origin
///
/// Covers `[-width/2, width/2] x [-height/2, height/2]` with a `[-1, 1]`
/// depth range, matching the space all menu geometry is authored in.
pub fn centered_ortho(width: f32, height: f32) -> Mat4 {
    Mat4::new_orthographic(-width / 2.0, width / 2.0, -height / 2.0, height / 2.0, -1.0, 1.0)
}

/// Opaque RGBA color from 0..1 components
pub fn rgb(r: f32, g: f32, b: f32) -> Vec4 {
    Vec4::new(r, g, b, 1.0)
}
