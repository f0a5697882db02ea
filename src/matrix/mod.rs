//! Square matrices stored row-major as `elements[row][col]`.

mod mat3;
mod mat4;

pub use mat3::Mat3;
pub use mat4::Mat4;
