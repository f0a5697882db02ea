//! Handing vectors and matrices to a shader.
//!
//! [`UniformValue`] is the closed set of uploadable values. A rendering layer
//! implements [`UniformTarget`] and receives flattened [`UniformPayload`]s
//! through [`set_uniform`].

mod target;
mod value;

pub use target::{set_uniform, UniformLocation, UniformTarget};
pub use value::{MatrixLayout, UniformKind, UniformPayload, UniformValue};
