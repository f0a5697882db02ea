//! affinum - Affine transform math for 2D and 3D rendering
//!
//! Small value types (vectors, 3x3 and 4x4 matrices) and the builders that
//! compose them into homogeneous transforms: scale, rotation, translation,
//! shear, reflection and orthographic projection.
//!
//! Matrices are stored row-major as `elements[row][col]` and act on column
//! vectors, so `projection * camera * model` applies `model` first:
//!
//! ```
//! use affinum::{Mat3, Vec2};
//!
//! let model: Mat3 = Mat3::translate(2.0, 3.0) * Mat3::rotate(90.0) * Mat3::scale(2.0, 4.0);
//! let p = model.transform_point(Vec2::new(1.0, 1.0));
//! assert!((p.x - -2.0).abs() < 1e-5);
//! assert!((p.y - 5.0).abs() < 1e-5);
//! ```
//!
//! Every operation is a pure function of its arguments. Degenerate input
//! (division by zero, normalizing a zero vector) follows IEEE-754 and yields
//! infinity or NaN instead of an error.

pub mod error;
pub mod matrix;
pub mod transform;
pub mod uniform;
pub mod vector;

pub use error::AffineError;
pub use matrix::{Mat3, Mat4};
pub use uniform::{
    set_uniform, MatrixLayout, UniformKind, UniformLocation, UniformPayload, UniformTarget,
    UniformValue,
};
pub use vector::{Vec2, Vec3, Vec4};
