//! The seam between the math types and a graphics API's uniform upload.

use super::{MatrixLayout, UniformKind, UniformPayload, UniformValue};
use crate::error::AffineError;
use num_traits::Float;

/// Opaque uniform location handed out by a [`UniformTarget`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UniformLocation(pub i32);

/// A shader program (or anything shaped like one) that accepts uniforms.
///
/// Implemented by the rendering layer. Matrices arrive in storage order
/// unless the target asks for [`MatrixLayout::ColumnMajor`]; this crate never
/// transposes on its own.
pub trait UniformTarget<F: Float> {
    /// Resolves a uniform name, `None` if the program has no such uniform.
    fn locate(&self, name: &str) -> Option<UniformLocation>;

    /// The declared type at `location`, when the target knows it.
    fn declared_kind(&self, _location: UniformLocation) -> Option<UniformKind> {
        None
    }

    /// Element order the target expects for matrix payloads.
    fn matrix_layout(&self) -> MatrixLayout {
        MatrixLayout::RowMajor
    }

    /// Uploads an already-validated payload.
    fn write(&mut self, location: UniformLocation, kind: UniformKind, payload: UniformPayload<F>);
}

/// Sets the uniform `name` on `target` to `value`.
///
/// Fails with [`AffineError::UnknownUniform`] if the name does not resolve and
/// with [`AffineError::KindMismatch`] if the target declares a different type.
/// Nothing is written on failure.
pub fn set_uniform<F, T>(
    target: &mut T,
    name: &str,
    value: impl Into<UniformValue<F>>,
) -> Result<UniformLocation, AffineError>
where
    F: Float,
    T: UniformTarget<F> + ?Sized,
{
    let value = value.into();
    let kind = value.kind();

    let Some(location) = target.locate(name) else {
        log::warn!("uniform `{name}` not found, dropping {kind} value");
        return Err(AffineError::UnknownUniform {
            name: name.to_owned(),
        });
    };

    if let Some(expected) = target.declared_kind(location) {
        if expected != kind {
            log::warn!("uniform `{name}` is declared {expected}, refusing {kind} value");
            return Err(AffineError::KindMismatch {
                name: name.to_owned(),
                expected,
                found: kind,
            });
        }
    }

    let layout = target.matrix_layout();
    if kind.is_matrix() {
        log::trace!("uniform `{name}` @ {}: {kind} ({layout:?})", location.0);
    } else {
        log::trace!("uniform `{name}` @ {}: {kind}", location.0);
    }
    target.write(location, kind, value.payload(layout));
    Ok(location)
}
