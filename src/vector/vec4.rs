//! 4D vector type, doubling as an RGBA colour.

use super::Vec3;
use num_traits::Float;
use std::ops::{Add, AddAssign, Div, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

/// A 4D vector of floats.
///
/// The colour accessors [`r`](Self::r), [`g`](Self::g), [`b`](Self::b) and
/// [`a`](Self::a) read `x`, `y`, `z` and `w` respectively, and the indexed
/// view `v[0]`..`v[3]` addresses the same fields in that order.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vec4<F = f32> {
    pub x: F,
    pub y: F,
    pub z: F,
    pub w: F,
}

impl<F: Float> Vec4<F> {
    /// Creates a new vector.
    #[inline]
    pub fn new(x: F, y: F, z: F, w: F) -> Self {
        Self { x, y, z, w }
    }

    /// Creates a colour from its channels.
    #[inline]
    pub fn rgba(r: F, g: F, b: F, a: F) -> Self {
        Self::new(r, g, b, a)
    }

    /// Creates a zero vector.
    #[inline]
    pub fn zero() -> Self {
        Self::splat(F::zero())
    }

    /// Creates a vector with every component set to `k`.
    #[inline]
    pub fn splat(k: F) -> Self {
        Self::new(k, k, k, k)
    }

    /// Extends a 3D vector with a `w` component.
    #[inline]
    pub fn from_vec3(v: Vec3<F>, w: F) -> Self {
        Self::new(v.x, v.y, v.z, w)
    }

    /// Drops the `w` component.
    #[inline]
    pub fn truncate(self) -> Vec3<F> {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Creates a vector from its array view.
    #[inline]
    pub fn from_array(elements: [F; 4]) -> Self {
        Self::new(elements[0], elements[1], elements[2], elements[3])
    }

    /// Returns the components as an array, in index order.
    #[inline]
    pub fn to_array(self) -> [F; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Red channel (`x`).
    #[inline]
    pub fn r(&self) -> F {
        self.x
    }

    /// Green channel (`y`).
    #[inline]
    pub fn g(&self) -> F {
        self.y
    }

    /// Blue channel (`z`).
    #[inline]
    pub fn b(&self) -> F {
        self.z
    }

    /// Alpha channel (`w`).
    #[inline]
    pub fn a(&self) -> F {
        self.w
    }

    /// Mutable red channel (`x`).
    #[inline]
    pub fn r_mut(&mut self) -> &mut F {
        &mut self.x
    }

    /// Mutable green channel (`y`).
    #[inline]
    pub fn g_mut(&mut self) -> &mut F {
        &mut self.y
    }

    /// Mutable blue channel (`z`).
    #[inline]
    pub fn b_mut(&mut self) -> &mut F {
        &mut self.z
    }

    /// Mutable alpha channel (`w`).
    #[inline]
    pub fn a_mut(&mut self) -> &mut F {
        &mut self.w
    }

    /// Multiplies component by component.
    #[inline]
    pub fn mul_elementwise(self, other: Self) -> Self {
        Self::new(
            self.x * other.x,
            self.y * other.y,
            self.z * other.z,
            self.w * other.w,
        )
    }

    /// Divides component by component. Zero divisors follow IEEE-754.
    #[inline]
    pub fn div_elementwise(self, other: Self) -> Self {
        Self::new(
            self.x / other.x,
            self.y / other.y,
            self.z / other.z,
            self.w / other.w,
        )
    }

    /// Multiplies every component by `k`.
    #[inline]
    pub fn scale(self, k: F) -> Self {
        Self::new(self.x * k, self.y * k, self.z * k, self.w * k)
    }

    /// Computes the dot product with another vector.
    #[inline]
    pub fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Returns the squared magnitude over all four components.
    #[inline]
    pub fn magnitude_squared(self) -> F {
        self.dot(self)
    }

    /// Returns the magnitude (length).
    #[inline]
    pub fn magnitude(self) -> F {
        self.magnitude_squared().sqrt()
    }

    /// Returns the distance to another vector.
    #[inline]
    pub fn distance(self, other: Self) -> F {
        (other - self).magnitude()
    }

    /// Returns the squared distance to another vector.
    #[inline]
    pub fn distance_squared(self, other: Self) -> F {
        (other - self).magnitude_squared()
    }

    /// Returns the vector scaled to unit length; NaN for a zero vector.
    #[inline]
    pub fn normalize(self) -> Self {
        self.scale(F::one() / self.magnitude())
    }

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

impl<F: Float> Add for Vec4<F> {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(
            self.x + other.x,
            self.y + other.y,
            self.z + other.z,
            self.w + other.w,
        )
    }
}

impl<F: Float> Sub for Vec4<F> {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(
            self.x - other.x,
            self.y - other.y,
            self.z - other.z,
            self.w - other.w,
        )
    }
}

impl<F: Float> Mul<F> for Vec4<F> {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: F) -> Self {
        self.scale(scalar)
    }
}

impl<F: Float> Div<F> for Vec4<F> {
    type Output = Self;

    #[inline]
    fn div(self, scalar: F) -> Self {
        Self::new(
            self.x / scalar,
            self.y / scalar,
            self.z / scalar,
            self.w / scalar,
        )
    }
}

impl<F: Float> Neg for Vec4<F> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl<F: Float> AddAssign for Vec4<F> {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl<F: Float> SubAssign for Vec4<F> {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl<F: Float> MulAssign<F> for Vec4<F> {
    #[inline]
    fn mul_assign(&mut self, scalar: F) {
        *self = self.scale(scalar);
    }
}

impl<F> Index<usize> for Vec4<F> {
    type Output = F;

    fn index(&self, index: usize) -> &F {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("Vec4 index out of range: {index}"),
        }
    }
}

impl<F> IndexMut<usize> for Vec4<F> {
    fn index_mut(&mut self, index: usize) -> &mut F {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            3 => &mut self.w,
            _ => panic!("Vec4 index out of range: {index}"),
        }
    }
}

impl<F: Float> From<[F; 4]> for Vec4<F> {
    #[inline]
    fn from(elements: [F; 4]) -> Self {
        Self::from_array(elements)
    }
}

impl<F: Float> From<Vec4<F>> for [F; 4] {
    #[inline]
    fn from(v: Vec4<F>) -> Self {
        v.to_array()
    }
}

impl<F: Float> Default for Vec4<F> {
    fn default() -> Self {
        Self::zero()
    }
}
