//! 3D transform builders on homogeneous 4x4 matrices.
//!
//! Rotation about an arbitrary axis is not provided.

use crate::matrix::Mat4;
use crate::vector::Vec3;
use num_traits::Float;

impl<F: Float> Mat4<F> {
    /// Creates a translation by `(dx, dy, dz)`, stored in column 3.
    pub fn translate(dx: F, dy: F, dz: F) -> Self {
        let mut m = Self::identity();
        m.elements[0][3] = dx;
        m.elements[1][3] = dy;
        m.elements[2][3] = dz;
        m
    }

    /// Creates a translation by `offset`.
    #[inline]
    pub fn translation(offset: Vec3<F>) -> Self {
        Self::translate(offset.x, offset.y, offset.z)
    }

    /// Creates a non-uniform scale around the origin.
    pub fn scale(sx: F, sy: F, sz: F) -> Self {
        let mut m = Self::identity();
        m.elements[0][0] = sx;
        m.elements[1][1] = sy;
        m.elements[2][2] = sz;
        m
    }

    /// Creates an OpenGL-style orthographic projection with the depth range
    /// fixed to `near = -1`, `far = 1`.
    #[inline]
    pub fn orthographic(left: F, right: F, bottom: F, top: F) -> Self {
        Self::orthographic_with_depth(left, right, bottom, top, -F::one(), F::one())
    }

    /// Creates an OpenGL-style orthographic projection mapping the box
    /// `[left, right] × [bottom, top] × [-near, -far]` onto the `[-1, 1]` cube.
    pub fn orthographic_with_depth(left: F, right: F, bottom: F, top: F, near: F, far: F) -> Self {
        let two = F::one() + F::one();
        let mut m = Self::zero();
        m.elements[0][0] = two / (right - left);
        m.elements[1][1] = two / (top - bottom);
        m.elements[2][2] = -two / (far - near);
        m.elements[0][3] = -(right + left) / (right - left);
        m.elements[1][3] = -(top + bottom) / (top - bottom);
        m.elements[2][3] = -(far + near) / (far - near);
        m.elements[3][3] = F::one();
        m
    }

    /// Returns a transform that applies `self` first, then `next`.
    #[inline]
    pub fn then(&self, next: Self) -> Self {
        next.multiply(self)
    }
}
