//! 2D transform builders on homogeneous 3x3 matrices.

use crate::matrix::Mat3;
use crate::vector::Vec2;
use num_traits::Float;

impl<F: Float> Mat3<F> {
    /// Creates a translation by `(dx, dy)`.
    ///
    /// ```text
    /// | 1  0  dx |
    /// | 0  1  dy |
    /// | 0  0  1  |
    /// ```
    pub fn translate(dx: F, dy: F) -> Self {
        let mut m = Self::identity();
        m.elements[0][2] = dx;
        m.elements[1][2] = dy;
        m
    }

    /// Creates a translation by `offset`.
    #[inline]
    pub fn translation(offset: Vec2<F>) -> Self {
        Self::translate(offset.x, offset.y)
    }

    /// Creates a rotation around the origin.
    ///
    /// Angle is in degrees, positive is counter-clockwise.
    #[inline]
    pub fn rotate(degrees: F) -> Self {
        Self::rotate_radians(degrees.to_radians())
    }

    /// Creates a rotation around the origin, angle in radians.
    pub fn rotate_radians(angle: F) -> Self {
        let (sin_a, cos_a) = angle.sin_cos();
        let mut m = Self::identity();
        m.elements[0][0] = cos_a;
        m.elements[0][1] = -sin_a;
        m.elements[1][0] = sin_a;
        m.elements[1][1] = cos_a;
        m
    }

    /// Creates a rotation of `degrees` around `center`.
    pub fn rotate_around(degrees: F, center: Vec2<F>) -> Self {
        Self::translation(-center)
            .then(Self::rotate(degrees))
            .then(Self::translation(center))
    }

    /// Creates a non-uniform scale around the origin.
    pub fn scale(sx: F, sy: F) -> Self {
        let mut m = Self::identity();
        m.elements[0][0] = sx;
        m.elements[1][1] = sy;
        m
    }

    /// Creates a shear: `x += shx * y`, `y += shy * x`.
    pub fn shear(shx: F, shy: F) -> Self {
        let mut m = Self::identity();
        m.elements[0][1] = shx;
        m.elements[1][0] = shy;
        m
    }

    /// Creates a reflection across the line through the origin along `axis`.
    ///
    /// The axis doesn't need to be normalized. A zero axis yields the identity.
    pub fn reflect(axis: Vec2<F>) -> Self {
        let Some(d) = axis.try_normalize() else {
            return Self::identity();
        };

        // R = 2 * (d ⊗ d) - I
        let two = F::one() + F::one();
        let mut m = Self::identity();
        m.elements[0][0] = two * d.x * d.x - F::one();
        m.elements[0][1] = two * d.x * d.y;
        m.elements[1][0] = two * d.x * d.y;
        m.elements[1][1] = two * d.y * d.y - F::one();
        m
    }

    /// Creates an orthographic projection mapping `[left, right] × [bottom, top]`
    /// onto `[-1, 1] × [-1, 1]`.
    ///
    /// Zero-width or zero-height bounds produce infinite or NaN elements.
    pub fn orthographic(left: F, right: F, bottom: F, top: F) -> Self {
        let two = F::one() + F::one();
        let mut m = Self::zero();
        m.elements[0][0] = two / (right - left);
        m.elements[1][1] = two / (top - bottom);
        m.elements[0][2] = -(right + left) / (right - left);
        m.elements[1][2] = -(top + bottom) / (top - bottom);
        m.elements[2][2] = F::one();
        m
    }

    /// Returns a transform that applies `self` first, then `next`.
    ///
    /// Equivalent to `next * self`.
    #[inline]
    pub fn then(&self, next: Self) -> Self {
        next.multiply(self)
    }
}
