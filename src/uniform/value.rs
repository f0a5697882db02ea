//! Uniform values and their upload payloads.

use crate::matrix::{Mat3, Mat4};
use crate::vector::{Vec2, Vec3, Vec4};
use num_traits::Float;
use std::fmt;

/// Element order used when flattening a matrix for upload.
///
/// [`RowMajor`](Self::RowMajor) is the storage order of [`Mat3`]/[`Mat4`]
/// (`elements[row][col]`) and the default. [`ColumnMajor`](Self::ColumnMajor)
/// is for targets that upload without transposing (OpenGL with
/// `transpose = GL_FALSE`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MatrixLayout {
    /// Row by row, `elements[0][0], elements[0][1], ..`.
    #[default]
    RowMajor,
    /// Column by column, `elements[0][0], elements[1][0], ..`.
    ColumnMajor,
}

/// The shader-side type of a uniform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UniformKind {
    /// `int`
    Int,
    /// `uint`
    Uint,
    /// `float`
    Float,
    /// `vec2`
    Vec2,
    /// `vec3`
    Vec3,
    /// `vec4`
    Vec4,
    /// `mat3`
    Mat3,
    /// `mat4`
    Mat4,
}

impl UniformKind {
    /// Number of scalar components the kind occupies.
    pub fn component_count(self) -> usize {
        match self {
            UniformKind::Int | UniformKind::Uint | UniformKind::Float => 1,
            UniformKind::Vec2 => 2,
            UniformKind::Vec3 => 3,
            UniformKind::Vec4 => 4,
            UniformKind::Mat3 => 9,
            UniformKind::Mat4 => 16,
        }
    }

    /// Returns true for the matrix kinds, whose payload depends on [`MatrixLayout`].
    pub fn is_matrix(self) -> bool {
        matches!(self, UniformKind::Mat3 | UniformKind::Mat4)
    }
}

impl fmt::Display for UniformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            UniformKind::Int => "int",
            UniformKind::Uint => "uint",
            UniformKind::Float => "float",
            UniformKind::Vec2 => "vec2",
            UniformKind::Vec3 => "vec3",
            UniformKind::Vec4 => "vec4",
            UniformKind::Mat3 => "mat3",
            UniformKind::Mat4 => "mat4",
        };
        f.write_str(name)
    }
}

/// A value destined for a shader uniform.
///
/// One closed set of variants stands in for a family of per-type setters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UniformValue<F = f32> {
    Int(i32),
    Uint(u32),
    Float(F),
    Vec2(Vec2<F>),
    Vec3(Vec3<F>),
    Vec4(Vec4<F>),
    Mat3(Mat3<F>),
    Mat4(Mat4<F>),
}

/// The flattened data handed to a [`UniformTarget`](super::UniformTarget).
#[derive(Debug, Clone, PartialEq)]
pub enum UniformPayload<F = f32> {
    Int(i32),
    Uint(u32),
    /// Float components in upload order; matrices follow the target's layout.
    Floats(Vec<F>),
}

impl<F: Float> UniformValue<F> {
    /// Returns the shader-side type of the value.
    pub fn kind(&self) -> UniformKind {
        match self {
            UniformValue::Int(_) => UniformKind::Int,
            UniformValue::Uint(_) => UniformKind::Uint,
            UniformValue::Float(_) => UniformKind::Float,
            UniformValue::Vec2(_) => UniformKind::Vec2,
            UniformValue::Vec3(_) => UniformKind::Vec3,
            UniformValue::Vec4(_) => UniformKind::Vec4,
            UniformValue::Mat3(_) => UniformKind::Mat3,
            UniformValue::Mat4(_) => UniformKind::Mat4,
        }
    }

    /// Flattens the value for upload, ordering matrix elements per `layout`.
    pub fn payload(&self, layout: MatrixLayout) -> UniformPayload<F> {
        match *self {
            UniformValue::Int(v) => UniformPayload::Int(v),
            UniformValue::Uint(v) => UniformPayload::Uint(v),
            UniformValue::Float(v) => UniformPayload::Floats(vec![v]),
            UniformValue::Vec2(v) => UniformPayload::Floats(v.to_array().to_vec()),
            UniformValue::Vec3(v) => UniformPayload::Floats(v.to_array().to_vec()),
            UniformValue::Vec4(v) => UniformPayload::Floats(v.to_array().to_vec()),
            UniformValue::Mat3(m) => UniformPayload::Floats(match layout {
                MatrixLayout::RowMajor => m.to_row_major().to_vec(),
                MatrixLayout::ColumnMajor => m.to_column_major().to_vec(),
            }),
            UniformValue::Mat4(m) => UniformPayload::Floats(match layout {
                MatrixLayout::RowMajor => m.to_row_major().to_vec(),
                MatrixLayout::ColumnMajor => m.to_column_major().to_vec(),
            }),
        }
    }
}

impl<F> UniformPayload<F> {
    /// Returns the float components, or `None` for integer payloads.
    pub fn floats(&self) -> Option<&[F]> {
        match self {
            UniformPayload::Floats(data) => Some(data),
            UniformPayload::Int(_) | UniformPayload::Uint(_) => None,
        }
    }
}

impl<F> From<i32> for UniformValue<F> {
    fn from(v: i32) -> Self {
        UniformValue::Int(v)
    }
}

impl<F> From<u32> for UniformValue<F> {
    fn from(v: u32) -> Self {
        UniformValue::Uint(v)
    }
}

impl From<f32> for UniformValue<f32> {
    fn from(v: f32) -> Self {
        UniformValue::Float(v)
    }
}

impl From<f64> for UniformValue<f64> {
    fn from(v: f64) -> Self {
        UniformValue::Float(v)
    }
}

impl<F> From<Vec2<F>> for UniformValue<F> {
    fn from(v: Vec2<F>) -> Self {
        UniformValue::Vec2(v)
    }
}

impl<F> From<Vec3<F>> for UniformValue<F> {
    fn from(v: Vec3<F>) -> Self {
        UniformValue::Vec3(v)
    }
}

impl<F> From<Vec4<F>> for UniformValue<F> {
    fn from(v: Vec4<F>) -> Self {
        UniformValue::Vec4(v)
    }
}

impl<F> From<Mat3<F>> for UniformValue<F> {
    fn from(m: Mat3<F>) -> Self {
        UniformValue::Mat3(m)
    }
}

impl<F> From<Mat4<F>> for UniformValue<F> {
    fn from(m: Mat4<F>) -> Self {
        UniformValue::Mat4(m)
    }
}
