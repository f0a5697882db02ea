//! 4x4 matrix type for 3D homogeneous transforms.

use crate::vector::{Vec3, Vec4};
use num_traits::Float;
use std::fmt;
use std::ops::{Mul, MulAssign};

/// A 4x4 matrix stored as `elements[row][col]`.
///
/// Same conventions as [`Mat3`](super::Mat3): column vectors, and `a * b`
/// applies `b` first. Translation lives in column 3.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat4<F = f32> {
    pub elements: [[F; 4]; 4],
}

impl<F: Float> Mat4<F> {
    /// Creates a matrix from its row-major element grid.
    #[inline]
    pub fn new(elements: [[F; 4]; 4]) -> Self {
        Self { elements }
    }

    /// Creates a matrix with every element zero.
    #[inline]
    pub fn zero() -> Self {
        Self::splat(F::zero())
    }

    /// Creates a matrix with every element set to `k`.
    #[inline]
    pub fn splat(k: F) -> Self {
        Self::new([[k; 4]; 4])
    }

    /// Creates a matrix with `k` on the diagonal and zero elsewhere.
    pub fn diagonal(k: F) -> Self {
        let mut m = Self::zero();
        for i in 0..4 {
            m.elements[i][i] = k;
        }
        m
    }

    /// Creates the identity matrix.
    #[inline]
    pub fn identity() -> Self {
        Self::diagonal(F::one())
    }

    /// Creates a matrix whose rows are the given vectors.
    #[inline]
    pub fn from_rows(r0: Vec4<F>, r1: Vec4<F>, r2: Vec4<F>, r3: Vec4<F>) -> Self {
        Self::new([r0.to_array(), r1.to_array(), r2.to_array(), r3.to_array()])
    }

    /// Creates a matrix whose columns are the given vectors.
    #[inline]
    pub fn from_columns(c0: Vec4<F>, c1: Vec4<F>, c2: Vec4<F>, c3: Vec4<F>) -> Self {
        Self::from_rows(c0, c1, c2, c3).transpose()
    }

    /// Returns row `r`. Panics if `r >= 4`.
    #[inline]
    pub fn row(&self, r: usize) -> Vec4<F> {
        Vec4::from_array(self.elements[r])
    }

    /// Returns column `c`. Panics if `c >= 4`.
    #[inline]
    pub fn column(&self, c: usize) -> Vec4<F> {
        Vec4::new(
            self.elements[0][c],
            self.elements[1][c],
            self.elements[2][c],
            self.elements[3][c],
        )
    }

    /// Computes the matrix product `self * rhs` (`rhs` applied first).
    pub fn multiply(&self, rhs: &Self) -> Self {
        let mut result = Self::zero();
        for r in 0..4 {
            for c in 0..4 {
                let mut sum = F::zero();
                for k in 0..4 {
                    sum = sum + self.elements[r][k] * rhs.elements[k][c];
                }
                result.elements[r][c] = sum;
            }
        }
        result
    }

    /// Returns the matrix with rows and columns swapped.
    pub fn transpose(&self) -> Self {
        let mut result = *self;
        for r in 0..4 {
            for c in 0..4 {
                result.elements[r][c] = self.elements[c][r];
            }
        }
        result
    }

    /// Applies the matrix to a column vector.
    pub fn transform(&self, v: Vec4<F>) -> Vec4<F> {
        let mut result = Vec4::zero();
        for r in 0..4 {
            result[r] = self.row(r).dot(v);
        }
        result
    }

    /// Applies the matrix to a 3D point (homogeneous `w = 1`), without a perspective divide.
    #[inline]
    pub fn transform_point(&self, p: Vec3<F>) -> Vec3<F> {
        self.transform(Vec4::from_vec3(p, F::one())).truncate()
    }

    /// Applies the matrix to a 3D direction (homogeneous `w = 0`).
    #[inline]
    pub fn transform_vector(&self, v: Vec3<F>) -> Vec3<F> {
        self.transform(Vec4::from_vec3(v, F::zero())).truncate()
    }

    /// Applies [`transform_point`](Self::transform_point) to every point.
    pub fn transform_points(&self, points: &[Vec3<F>]) -> Vec<Vec3<F>> {
        points.iter().map(|p| self.transform_point(*p)).collect()
    }

    /// Returns true if every element is within `epsilon` of `other`'s.
    pub fn abs_diff_eq(&self, other: &Self, epsilon: F) -> bool {
        self.elements
            .iter()
            .flatten()
            .zip(other.elements.iter().flatten())
            .all(|(a, b)| (*a - *b).abs() <= epsilon)
    }

    /// Returns true if this is approximately the identity matrix.
    pub fn is_identity(&self, epsilon: F) -> bool {
        self.abs_diff_eq(&Self::identity(), epsilon)
    }

    /// Flattens to 16 floats in `elements[row][col]` order.
    pub fn to_row_major(&self) -> [F; 16] {
        let mut out = [F::zero(); 16];
        for (i, value) in self.elements.iter().flatten().enumerate() {
            out[i] = *value;
        }
        out
    }

    /// Flattens to 16 floats column by column.
    #[inline]
    pub fn to_column_major(&self) -> [F; 16] {
        self.transpose().to_row_major()
    }
}

impl<F: Float> Default for Mat4<F> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<F: Float> Mul for Mat4<F> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl<F: Float> MulAssign for Mat4<F> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.multiply(&rhs);
    }
}

impl<F: Float> Mul<Vec4<F>> for Mat4<F> {
    type Output = Vec4<F>;

    #[inline]
    fn mul(self, rhs: Vec4<F>) -> Vec4<F> {
        self.transform(rhs)
    }
}

impl<F: Float> From<[[F; 4]; 4]> for Mat4<F> {
    #[inline]
    fn from(elements: [[F; 4]; 4]) -> Self {
        Self::new(elements)
    }
}

impl<F: Float + fmt::Display> fmt::Display for Mat4<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.elements.iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, value) in row.iter().enumerate() {
                if c > 0 {
                    f.write_str(" ")?;
                }
                match f.precision() {
                    Some(precision) => write!(f, "{:.*}", precision, value)?,
                    None => write!(f, "{}", value)?,
                }
            }
        }
        Ok(())
    }
}
