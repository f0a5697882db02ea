//! Affine transform builders.
//!
//! 2D transforms are associated functions on [`Mat3`](crate::Mat3) and 3D
//! transforms on [`Mat4`](crate::Mat4). Everything composes with `*`, right to
//! left: `translate * rotate * scale` scales first.

mod planar;
mod spatial;
