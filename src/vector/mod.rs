//! Fixed-width float vectors.
//!
//! Each width carries its own operation set; there is no generic dimension.

mod vec2;
mod vec3;
mod vec4;

pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec4::Vec4;
