//! 3D vector type, also the homogeneous form of a 2D point.

use super::Vec2;
use num_traits::Float;
use std::ops::{Add, AddAssign, Div, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

/// A 3D vector of floats.
///
/// Generic over floating-point types, `f32` by default. The named fields and
/// the indexed view (`v[0]`..`v[2]`) address the same components.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vec3<F = f32> {
    pub x: F,
    pub y: F,
    pub z: F,
}

impl<F: Float> Vec3<F> {
    /// Creates a new vector.
    #[inline]
    pub fn new(x: F, y: F, z: F) -> Self {
        Self { x, y, z }
    }

    /// Creates a zero vector.
    #[inline]
    pub fn zero() -> Self {
        Self::splat(F::zero())
    }

    /// Creates a vector with every component set to `k`.
    #[inline]
    pub fn splat(k: F) -> Self {
        Self { x: k, y: k, z: k }
    }

    /// Creates a unit vector along the X axis.
    #[inline]
    pub fn unit_x() -> Self {
        Self::new(F::one(), F::zero(), F::zero())
    }

    /// Creates a unit vector along the Y axis.
    #[inline]
    pub fn unit_y() -> Self {
        Self::new(F::zero(), F::one(), F::zero())
    }

    /// Creates a unit vector along the Z axis.
    #[inline]
    pub fn unit_z() -> Self {
        Self::new(F::zero(), F::zero(), F::one())
    }

    /// Extends a 2D vector with a `z` component.
    ///
    /// `z = 1` gives the homogeneous form of a point, `z = 0` of a direction.
    #[inline]
    pub fn from_vec2(v: Vec2<F>, z: F) -> Self {
        Self::new(v.x, v.y, z)
    }

    /// Drops the `z` component.
    #[inline]
    pub fn truncate(self) -> Vec2<F> {
        Vec2::new(self.x, self.y)
    }

    /// Creates a vector from its array view.
    #[inline]
    pub fn from_array(elements: [F; 3]) -> Self {
        Self::new(elements[0], elements[1], elements[2])
    }

    /// Returns the components as an array, in index order.
    #[inline]
    pub fn to_array(self) -> [F; 3] {
        [self.x, self.y, self.z]
    }

    /// Multiplies the vectors component by component.
    #[inline]
    pub fn mul_elementwise(self, other: Self) -> Self {
        Self::new(self.x * other.x, self.y * other.y, self.z * other.z)
    }

    /// Divides the vectors component by component.
    ///
    /// Zero divisor components yield IEEE infinity or NaN.
    #[inline]
    pub fn div_elementwise(self, other: Self) -> Self {
        Self::new(self.x / other.x, self.y / other.y, self.z / other.z)
    }

    /// Multiplies every component by `k`.
    #[inline]
    pub fn scale(self, k: F) -> Self {
        Self::new(self.x * k, self.y * k, self.z * k)
    }

    /// Computes the dot product with another vector.
    #[inline]
    pub fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Computes the right-handed cross product with another vector.
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
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
    /// A zero vector yields NaN components.
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

    /// Returns the step from `self` toward `target`, scaled by `rate`.
    ///
    /// `self` is not added back; see [`interpolate`](Self::interpolate).
    #[inline]
    pub fn lerp(self, target: Self, rate: F) -> Self {
        (target - self).scale(rate)
    }

    /// Linearly interpolates between `self` and `target`.
    #[inline]
    pub fn interpolate(self, target: Self, t: F) -> Self {
        self + self.lerp(target, t)
    }
}

impl<F: Float> Add for Vec3<F> {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl<F: Float> Sub for Vec3<F> {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl<F: Float> Mul<F> for Vec3<F> {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: F) -> Self {
        self.scale(scalar)
    }
}

impl<F: Float> Div<F> for Vec3<F> {
    type Output = Self;

    #[inline]
    fn div(self, scalar: F) -> Self {
        Self::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }
}

impl<F: Float> Neg for Vec3<F> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl<F: Float> AddAssign for Vec3<F> {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl<F: Float> SubAssign for Vec3<F> {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl<F: Float> MulAssign<F> for Vec3<F> {
    #[inline]
    fn mul_assign(&mut self, scalar: F) {
        *self = self.scale(scalar);
    }
}

impl<F> Index<usize> for Vec3<F> {
    type Output = F;

    fn index(&self, index: usize) -> &F {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vec3 index out of range: {index}"),
        }
    }
}

impl<F> IndexMut<usize> for Vec3<F> {
    fn index_mut(&mut self, index: usize) -> &mut F {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Vec3 index out of range: {index}"),
        }
    }
}

impl<F: Float> From<[F; 3]> for Vec3<F> {
    #[inline]
    fn from(elements: [F; 3]) -> Self {
        Self::from_array(elements)
    }
}

impl<F: Float> From<Vec3<F>> for [F; 3] {
    #[inline]
    fn from(v: Vec3<F>) -> Self {
        v.to_array()
    }
}

impl<F: Float> Default for Vec3<F> {
    fn default() -> Self {
        Self::zero()
    }
}
