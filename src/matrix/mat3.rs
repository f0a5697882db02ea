//! 3x3 matrix type, the homogeneous form of a 2D affine transform.

use crate::vector::{Vec2, Vec3};
use num_traits::Float;
use std::fmt;
use std::ops::{Mul, MulAssign};

/// A 3x3 matrix stored as `elements[row][col]`.
///
/// Matrices act on column vectors: `m * v` computes
/// `result[r] = Σ_c m[r][c] * v[c]`, so in `a * b` the transform `b` is
/// applied first. A model-camera-projection chain is written
/// `projection * camera * model`.
///
/// ```text
/// | e00 e01 e02 |
/// | e10 e11 e12 |
/// | e20 e21 e22 |
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat3<F = f32> {
    pub elements: [[F; 3]; 3],
}

impl<F: Float> Mat3<F> {
    /// Creates a matrix from its row-major element grid.
    #[inline]
    pub fn new(elements: [[F; 3]; 3]) -> Self {
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
        Self::new([[k; 3]; 3])
    }

    /// Creates a matrix with `k` on the diagonal and zero elsewhere.
    pub fn diagonal(k: F) -> Self {
        let mut m = Self::zero();
        for i in 0..3 {
            m.elements[i][i] = k;
        }
        m
    }

    /// Creates the identity matrix.
    #[inline]
    pub fn identity() -> Self {
        Self::diagonal(F::one())
    }

    /// Creates a matrix whose rows are `r0`, `r1` and `r2`.
    #[inline]
    pub fn from_rows(r0: Vec3<F>, r1: Vec3<F>, r2: Vec3<F>) -> Self {
        Self::new([r0.to_array(), r1.to_array(), r2.to_array()])
    }

    /// Creates a matrix whose columns are `c0`, `c1` and `c2`.
    #[inline]
    pub fn from_columns(c0: Vec3<F>, c1: Vec3<F>, c2: Vec3<F>) -> Self {
        Self::from_rows(c0, c1, c2).transpose()
    }

    /// Returns row `r`. Panics if `r >= 3`.
    #[inline]
    pub fn row(&self, r: usize) -> Vec3<F> {
        Vec3::from_array(self.elements[r])
    }

    /// Returns column `c`. Panics if `c >= 3`.
    #[inline]
    pub fn column(&self, c: usize) -> Vec3<F> {
        Vec3::new(
            self.elements[0][c],
            self.elements[1][c],
            self.elements[2][c],
        )
    }

    /// Computes the matrix product `self * rhs`.
    ///
    /// The result applies `rhs` first, then `self`.
    pub fn multiply(&self, rhs: &Self) -> Self {
        let mut result = Self::zero();
        for r in 0..3 {
            for c in 0..3 {
                let mut sum = F::zero();
                for k in 0..3 {
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
        for r in 0..3 {
            for c in 0..3 {
                result.elements[r][c] = self.elements[c][r];
            }
        }
        result
    }

    /// Applies the matrix to a column vector.
    pub fn transform(&self, v: Vec3<F>) -> Vec3<F> {
        let mut result = Vec3::zero();
        for r in 0..3 {
            result[r] = self.row(r).dot(v);
        }
        result
    }

    /// Applies the matrix to a 2D point (homogeneous `z = 1`).
    ///
    /// No perspective divide is performed; the bottom row is assumed affine.
    #[inline]
    pub fn transform_point(&self, p: Vec2<F>) -> Vec2<F> {
        self.transform(Vec3::from_vec2(p, F::one())).truncate()
    }

    /// Applies the matrix to a 2D direction (homogeneous `z = 0`), ignoring translation.
    #[inline]
    pub fn transform_vector(&self, v: Vec2<F>) -> Vec2<F> {
        self.transform(Vec3::from_vec2(v, F::zero())).truncate()
    }

    /// Applies the matrix to multiple points.
    pub fn transform_points(&self, points: &[Vec2<F>]) -> Vec<Vec2<F>> {
        points.iter().map(|p| self.transform_point(*p)).collect()
    }

    /// Returns the determinant.
    pub fn determinant(&self) -> F {
        let m = &self.elements;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Returns the inverse matrix, if it exists.
    ///
    /// Returns `None` if the determinant is zero or its reciprocal is not
    /// finite. Small but nonzero determinants (large-world projections, tiny
    /// scales) still invert.
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det == F::zero() || !det.is_finite() {
            return None;
        }
        let inv_det = F::one() / det;
        if !inv_det.is_finite() {
            return None;
        }

        let m = &self.elements;
        // Adjugate (transposed cofactor matrix) scaled by 1/det.
        let cofactor = |r0: usize, r1: usize, c0: usize, c1: usize| {
            m[r0][c0] * m[r1][c1] - m[r0][c1] * m[r1][c0]
        };

        Some(Self::new([
            [
                cofactor(1, 2, 1, 2) * inv_det,
                -cofactor(0, 2, 1, 2) * inv_det,
                cofactor(0, 1, 1, 2) * inv_det,
            ],
            [
                -cofactor(1, 2, 0, 2) * inv_det,
                cofactor(0, 2, 0, 2) * inv_det,
                -cofactor(0, 1, 0, 2) * inv_det,
            ],
            [
                cofactor(1, 2, 0, 1) * inv_det,
                -cofactor(0, 2, 0, 1) * inv_det,
                cofactor(0, 1, 0, 1) * inv_det,
            ],
        ]))
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

    /// Flattens to 9 floats in `elements[row][col]` order.
    pub fn to_row_major(&self) -> [F; 9] {
        let mut out = [F::zero(); 9];
        for (i, value) in self.elements.iter().flatten().enumerate() {
            out[i] = *value;
        }
        out
    }

    /// Flattens to 9 floats column by column.
    #[inline]
    pub fn to_column_major(&self) -> [F; 9] {
        self.transpose().to_row_major()
    }
}

impl<F: Float> Default for Mat3<F> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<F: Float> Mul for Mat3<F> {
    type Output = Self;

    /// The result applies `rhs` first, then `self`.
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl<F: Float> MulAssign for Mat3<F> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.multiply(&rhs);
    }
}

impl<F: Float> Mul<Vec3<F>> for Mat3<F> {
    type Output = Vec3<F>;

    #[inline]
    fn mul(self, rhs: Vec3<F>) -> Vec3<F> {
        self.transform(rhs)
    }
}

impl<F: Float> From<[[F; 3]; 3]> for Mat3<F> {
    #[inline]
    fn from(elements: [[F; 3]; 3]) -> Self {
        Self::new(elements)
    }
}

impl<F: Float + fmt::Display> fmt::Display for Mat3<F> {
    /// One row per line, elements separated by spaces. Honours `{:.N}`.
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

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample() -> Mat3<f32> {
        Mat3::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 10.0]])
    }

    #[test]
    fn test_diagonal_and_identity() {
        let d: Mat3<f32> = Mat3::diagonal(3.0);
        assert_eq!(
            d.elements,
            [[3.0, 0.0, 0.0], [0.0, 3.0, 0.0], [0.0, 0.0, 3.0]]
        );
        assert_eq!(Mat3::<f32>::identity(), Mat3::diagonal(1.0));
        assert_eq!(Mat3::<f32>::default(), Mat3::identity());
    }

    #[test]
    fn test_splat() {
        let m: Mat3<f32> = Mat3::splat(2.0);
        assert!(m.elements.iter().flatten().all(|v| *v == 2.0));
    }

    #[test]
    fn test_from_rows() {
        let v1: Vec3<f32> = Vec3::new(1.0, 2.0, 3.0);
        let v2 = Vec3::new(4.0, 5.0, 6.0);
        let v3 = Vec3::new(7.0, 8.0, 9.0);
        let m = Mat3::from_rows(v1, v2, v3);

        assert_eq!(m.elements[0], v1.to_array());
        assert_eq!(m.elements[1], v2.to_array());
        assert_eq!(m.elements[2], v3.to_array());
        assert_eq!(m.row(1), v2);
    }

    #[test]
    fn test_from_columns() {
        let v1: Vec3<f32> = Vec3::new(1.0, 2.0, 3.0);
        let v2 = Vec3::new(4.0, 5.0, 6.0);
        let v3 = Vec3::new(7.0, 8.0, 9.0);
        let m = Mat3::from_columns(v1, v2, v3);

        assert_eq!(m.elements[0], [1.0, 4.0, 7.0]);
        assert_eq!(m.column(0), v1);
        assert_eq!(m.column(2), v3);
        assert_eq!(m, Mat3::from_rows(v1, v2, v3).transpose());
    }

    #[test]
    fn test_multiply() {
        let a: Mat3<f32> = Mat3::new([[1.0, 2.0, 0.0], [0.0, 1.0, 0.0], [3.0, 0.0, 1.0]]);
        let b = Mat3::new([[2.0, 0.0, 1.0], [1.0, 1.0, 0.0], [0.0, 4.0, 1.0]]);
        let ab = a * b;

        // result[r][c] = Σ_k a[r][k] * b[k][c]
        assert_eq!(
            ab.elements,
            [[4.0, 2.0, 1.0], [1.0, 1.0, 0.0], [6.0, 4.0, 4.0]]
        );
        assert_ne!(ab, b * a);
    }

    #[test]
    fn test_multiply_identity() {
        let m = sample();
        assert_eq!(Mat3::identity() * m, m);
        assert_eq!(m * Mat3::identity(), m);
    }

    #[test]
    fn test_mul_assign() {
        let mut m: Mat3<f32> = Mat3::diagonal(2.0);
        m *= Mat3::diagonal(3.0);
        assert_eq!(m, Mat3::diagonal(6.0));
    }

    #[test]
    fn test_transpose() {
        let m = sample();
        let t = m.transpose();
        for r in 0..3 {
            for c in 0..3 {
                assert_eq!(t.elements[r][c], m.elements[c][r]);
            }
        }
        assert_eq!(t.transpose(), m);
    }

    #[test]
    fn test_transform() {
        let m = sample();
        let v = Vec3::new(1.0, 0.0, -1.0);
        assert_eq!(m.transform(v), Vec3::new(-2.0, -2.0, -3.0));
        assert_eq!(m * v, m.transform(v));
    }

    #[test]
    fn test_transform_point_and_vector() {
        let m: Mat3<f32> = Mat3::new([[1.0, 0.0, 5.0], [0.0, 1.0, -2.0], [0.0, 0.0, 1.0]]);
        assert_eq!(m.transform_point(Vec2::new(1.0, 1.0)), Vec2::new(6.0, -1.0));
        assert_eq!(m.transform_vector(Vec2::new(1.0, 1.0)), Vec2::new(1.0, 1.0));

        let out = m.transform_points(&[Vec2::zero(), Vec2::new(1.0, 2.0)]);
        assert_eq!(out, vec![Vec2::new(5.0, -2.0), Vec2::new(6.0, 0.0)]);
    }

    #[test]
    fn test_determinant() {
        assert_eq!(Mat3::<f32>::identity().determinant(), 1.0);
        assert_eq!(Mat3::<f32>::diagonal(2.0).determinant(), 8.0);
        assert_relative_eq!(sample().determinant(), -3.0, epsilon = 1e-5);
    }

    #[test]
    fn test_inverse() {
        let m = sample();
        let inv = m.inverse().unwrap();
        assert!((m * inv).is_identity(1e-5));
        assert!((inv * m).is_identity(1e-5));
    }

    #[test]
    fn test_inverse_with_small_determinant() {
        let projection: Mat3<f32> = Mat3::orthographic(0.0, 10000.0, 0.0, 10000.0);
        assert!(projection.determinant() < f32::EPSILON);

        let unproject = projection.inverse().unwrap();
        let world = unproject.transform_point(Vec2::new(-0.5, 0.5));
        assert_relative_eq!(world.x, 2500.0, max_relative = 1e-5);
        assert_relative_eq!(world.y, 7500.0, max_relative = 1e-5);

        let shrink: Mat3<f32> = Mat3::scale(1e-4, 1e-4);
        let grow = shrink.inverse().unwrap();
        let p = grow.transform_point(shrink.transform_point(Vec2::new(3.0, 4.0)));
        assert_relative_eq!(p.x, 3.0, max_relative = 1e-5);
        assert_relative_eq!(p.y, 4.0, max_relative = 1e-5);
    }

    #[test]
    fn test_non_finite_no_inverse() {
        let m: Mat3<f32> = Mat3::diagonal(f32::INFINITY);
        assert!(m.inverse().is_none());
        let tiny: Mat3<f32> = Mat3::diagonal(1e-20);
        assert!(tiny.inverse().is_none());
    }

    #[test]
    fn test_singular_no_inverse() {
        let m: Mat3<f32> = Mat3::new([[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [0.0, 0.0, 1.0]]);
        assert!(m.inverse().is_none());
        assert!(Mat3::<f32>::zero().inverse().is_none());
    }

    #[test]
    fn test_flatten() {
        let m = sample();
        assert_eq!(
            m.to_row_major(),
            [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 10.0]
        );
        assert_eq!(
            m.to_column_major(),
            [1.0, 4.0, 7.0, 2.0, 5.0, 8.0, 3.0, 6.0, 10.0]
        );
    }

    #[test]
    fn test_abs_diff_eq() {
        let a: Mat3<f32> = Mat3::identity();
        let mut b = a;
        b.elements[1][2] = 1e-7;
        assert!(a.abs_diff_eq(&b, 1e-6));
        b.elements[1][2] = 1e-3;
        assert!(!a.abs_diff_eq(&b, 1e-6));
    }

    #[test]
    fn test_display() {
        let m: Mat3<f32> = Mat3::diagonal(1.0);
        assert_eq!(
            format!("{:.1}", m),
            "1.0 0.0 0.0\n0.0 1.0 0.0\n0.0 0.0 1.0"
        );
        assert_eq!(format!("{}", Mat3::<f32>::splat(2.0)), "2 2 2\n2 2 2\n2 2 2");
    }
}
