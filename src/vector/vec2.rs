//! 2D vector type.

use num_traits::Float;
use std::ops::{Add, AddAssign, Div, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

/// A 2D vector of floats.
///
/// Generic over floating-point types, `f32` by default. The named fields and
/// the indexed view (`v[0]`, `v[1]`) address the same components.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vec2<F = f32> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    /// Creates a new vector.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    /// Creates a zero vector.
    #[inline]
    pub fn zero() -> Self {
        Self::splat(F::zero())
    }

    /// Creates a vector with every component set to `k`.
    #[inline]
    pub fn splat(k: F) -> Self {
        Self { x: k, y: k }
    }

    /// Creates a unit vector along the X axis.
    #[inline]
    pub fn unit_x() -> Self {
        Self::new(F::one(), F::zero())
    }

    /// Creates a unit vector along the Y axis.
    #[inline]
    pub fn unit_y() -> Self {
        Self::new(F::zero(), F::one())
    }

    /// Creates a vector from its array view.
    #[inline]
    pub fn from_array(elements: [F; 2]) -> Self {
        Self::new(elements[0], elements[1])
    }

    /// Returns the components as an array, in index order.
    #[inline]
    pub fn to_array(self) -> [F; 2] {
        [self.x, self.y]
    }

    /// Multiplies the vectors component by component.
    #[inline]
    pub fn mul_elementwise(self, other: Self) -> Self {
        Self::new(self.x * other.x, self.y * other.y)
    }

    /// Divides the vectors component by component.
    ///
    /// Zero divisor components yield IEEE infinity or NaN.
    #[inline]
    pub fn div_elementwise(self, other: Self) -> Self {
        Self::new(self.x / other.x, self.y / other.y)
    }

    /// Multiplies every component by `k`.
    #[inline]
    pub fn scale(self, k: F) -> Self {
        Self::new(self.x * k, self.y * k)
    }

    /// Computes the dot product with another vector.
    #[inline]
    pub fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y
    }

    /// Computes the 2D cross product (perpendicular dot product).
    ///
    /// Returns the z-component of the 3D cross product if the vectors
    /// were extended to 3D with z=0. Positive means `other` is counter-clockwise
    /// from `self`.
    #[inline]
    pub fn cross(self, other: Self) -> F {
        self.x * other.y - self.y * other.x
    }

    /// Returns the squared magnitude (length squared).
    #[inline]
    pub fn magnitude_squared(self) -> F {
        self.dot(self)
    }

    /// Returns the magnitude (length) of the vector.
    #[inline]
    pub fn magnitude(self) -> F {
        self.magnitude_squared().sqrt()
    }

    /// Returns the distance from `self` to `other`.
    #[inline]
    pub fn distance(self, other: Self) -> F {
        (other - self).magnitude()
    }

    /// Returns the squared distance from `self` to `other`.
    #[inline]
    pub fn distance_squared(self, other: Self) -> F {
        (other - self).magnitude_squared()
    }

    /// Returns the vector scaled to unit length.
    ///
    /// A zero vector has no direction: the result is NaN in every component.
    /// Use [`try_normalize`](Self::try_normalize) when the input may be zero.
    #[inline]
    pub fn normalize(self) -> Self {
        self.scale(F::one() / self.magnitude())
    }

    /// Returns a normalized (unit length) vector.
    ///
    /// Returns `None` if the vector is zero or too small to normalize reliably.
    #[inline]
    pub fn try_normalize(self) -> Option<Self> {
        let mag = self.magnitude();
        if mag > F::epsilon() {
            Some(self / mag)
        } else {
            None
        }
    }

    /// Returns a vector perpendicular to this one (rotated 90 degrees counter-clockwise).
    #[inline]
    pub fn perpendicular(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Returns the step from `self` toward `target`, scaled by `rate`.
    ///
    /// This is the offset only: `self` is not added back. Use
    /// [`interpolate`](Self::interpolate) for the interpolated point.
    #[inline]
    pub fn lerp(self, target: Self, rate: F) -> Self {
        (target - self).scale(rate)
    }

    /// Linearly interpolates between `self` and `target`.
    ///
    /// When `t = 0`, returns `self`. When `t = 1`, returns `target`.
    #[inline]
    pub fn interpolate(self, target: Self, t: F) -> Self {
        self + self.lerp(target, t)
    }
}

impl<F: Float> Add for Vec2<F> {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl<F: Float> Sub for Vec2<F> {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl<F: Float> Mul<F> for Vec2<F> {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: F) -> Self {
        self.scale(scalar)
    }
}

impl<F: Float> Div<F> for Vec2<F> {
    type Output = Self;

    #[inline]
    fn div(self, scalar: F) -> Self {
        Self::new(self.x / scalar, self.y / scalar)
    }
}

impl<F: Float> Neg for Vec2<F> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl<F: Float> AddAssign for Vec2<F> {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl<F: Float> SubAssign for Vec2<F> {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl<F: Float> MulAssign<F> for Vec2<F> {
    #[inline]
    fn mul_assign(&mut self, scalar: F) {
        *self = self.scale(scalar);
    }
}

impl<F> Index<usize> for Vec2<F> {
    type Output = F;

    fn index(&self, index: usize) -> &F {
        match index {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("Vec2 index out of range: {index}"),
        }
    }
}

impl<F> IndexMut<usize> for Vec2<F> {
    fn index_mut(&mut self, index: usize) -> &mut F {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("Vec2 index out of range: {index}"),
        }
    }
}

impl<F: Float> From<[F; 2]> for Vec2<F> {
    #[inline]
    fn from(elements: [F; 2]) -> Self {
        Self::from_array(elements)
    }
}

impl<F: Float> From<Vec2<F>> for [F; 2] {
    #[inline]
    fn from(v: Vec2<F>) -> Self {
        v.to_array()
    }
}

impl<F: Float> Default for Vec2<F> {
    fn default() -> Self {
        Self::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_new() {
        let v: Vec2<f32> = Vec2::new(3.0, 4.0);
        assert_eq!(v.x, 3.0);
        assert_eq!(v.y, 4.0);
    }

    #[test]
    fn test_dot_product() {
        let a: Vec2<f32> = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, 4.0);
        assert_eq!(a.dot(b), 11.0);
    }

    #[test]
    fn test_cross_product() {
        let a: Vec2<f32> = Vec2::unit_x();
        let b = Vec2::unit_y();
        assert_eq!(a.cross(b), 1.0);
        assert_eq!(b.cross(a), -1.0);

        let c = Vec2::new(2.0, 3.0);
        let d = Vec2::new(5.0, 7.0);
        assert_eq!(c.cross(d), 2.0 * 7.0 - 3.0 * 5.0);
    }

    #[test]
    fn test_magnitude() {
        let v: Vec2<f32> = Vec2::new(3.0, 4.0);
        assert_eq!(v.magnitude_squared(), 25.0);
        assert_eq!(v.magnitude(), 5.0);
    }

    #[test]
    fn test_distance() {
        let a: Vec2<f32> = Vec2::new(1.0, 1.0);
        let b = Vec2::new(4.0, 5.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(a.distance_squared(b), 25.0);
        assert_eq!(b.distance(a), 5.0);
    }

    #[test]
    fn test_normalize() {
        let v: Vec2<f32> = Vec2::new(3.0, 4.0);
        let n = v.normalize();
        assert_relative_eq!(n.magnitude(), 1.0, epsilon = 1e-6);
        assert_relative_eq!(n.x, 0.6, epsilon = 1e-6);
        assert_relative_eq!(n.y, 0.8, epsilon = 1e-6);
    }

    #[test]
    fn test_normalize_zero_is_nan() {
        let n: Vec2<f32> = Vec2::zero().normalize();
        assert!(n.x.is_nan());
        assert!(n.y.is_nan());
    }

    #[test]
    fn test_try_normalize_zero() {
        let v: Vec2<f32> = Vec2::zero();
        assert!(v.try_normalize().is_none());
        assert!(Vec2::new(0.0_f32, 2.0).try_normalize().is_some());
    }

    #[test]
    fn test_perpendicular() {
        let v: Vec2<f32> = Vec2::new(1.0, 0.0);
        let p = v.perpendicular();
        assert_eq!(p.x, 0.0);
        assert_eq!(p.y, 1.0);
        assert_eq!(v.dot(p), 0.0);
    }

    #[test]
    fn test_lerp_returns_offset() {
        let current: Vec2<f32> = Vec2::new(2.0, 2.0);
        let target = Vec2::new(10.0, 20.0);
        let step = current.lerp(target, 0.5);
        assert_eq!(step, Vec2::new(4.0, 9.0));
    }

    #[test]
    fn test_interpolate() {
        let a: Vec2<f32> = Vec2::new(0.0, 0.0);
        let b = Vec2::new(10.0, 20.0);
        assert_eq!(a.interpolate(b, 0.5), Vec2::new(5.0, 10.0));
        assert_eq!(a.interpolate(b, 0.0), a);
        assert_eq!(a.interpolate(b, 1.0), b);
    }

    #[test]
    fn test_arithmetic() {
        let a: Vec2<f32> = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, 4.0);

        assert_eq!(a + b, Vec2::new(4.0, 6.0));
        assert_eq!(b - a, Vec2::new(2.0, 2.0));
        assert_eq!(a.mul_elementwise(b), Vec2::new(3.0, 8.0));
        assert_eq!(b.div_elementwise(a), Vec2::new(3.0, 2.0));
        assert_eq!(a * 2.0, Vec2::new(2.0, 4.0));
        assert_eq!(a.scale(2.0), a * 2.0);
        assert_eq!(b / 2.0, Vec2::new(1.5, 2.0));
        assert_eq!(-a, Vec2::new(-1.0, -2.0));
    }

    #[test]
    fn test_assign_ops() {
        let mut v: Vec2<f32> = Vec2::new(1.0, 2.0);
        v += Vec2::new(1.0, 1.0);
        assert_eq!(v, Vec2::new(2.0, 3.0));
        v -= Vec2::new(0.5, 0.5);
        assert_eq!(v, Vec2::new(1.5, 2.5));
        v *= 2.0;
        assert_eq!(v, Vec2::new(3.0, 5.0));
    }

    #[test]
    fn test_divide_by_zero_propagates() {
        let v: Vec2<f32> = Vec2::new(1.0, 0.0).div_elementwise(Vec2::new(0.0, 0.0));
        assert!(v.x.is_infinite());
        assert!(v.y.is_nan());
    }

    #[test]
    fn test_index_aliases_fields() {
        let mut v: Vec2<f32> = Vec2::new(7.0, 8.0);
        assert_eq!(v[0], v.x);
        assert_eq!(v[1], v.y);

        v[1] = 42.0;
        assert_eq!(v.y, 42.0);
        v.x = -1.0;
        assert_eq!(v[0], -1.0);
        assert_eq!(v.to_array(), [-1.0, 42.0]);
    }

    #[test]
    #[should_panic(expected = "index out of range")]
    fn test_index_out_of_range() {
        let v: Vec2<f32> = Vec2::zero();
        let _ = v[2];
    }

    #[test]
    fn test_array_conversions() {
        let v: Vec2<f32> = [1.0, 2.0].into();
        let a: [f32; 2] = v.into();
        assert_eq!(a, [1.0, 2.0]);
        assert_eq!(Vec2::from_array(a), v);
    }

    #[test]
    fn test_f64_support() {
        let v: Vec2<f64> = Vec2::new(3.0, 4.0);
        assert_relative_eq!(v.normalize().x, 0.6, epsilon = 1e-12);
    }
}
