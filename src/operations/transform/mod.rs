//! Homogeneous 3x3 transformation matrices for the plane.
//!
//! Each constructor yields an immutable wrapper around a [`Matrix`]; compose
//! them with [`compose`] or [`crate::math::ops::multiply`] and apply the
//! result to a point or path.

mod general;
mod rotate;
mod scale;
mod translate;

pub use general::{about_pivot, compose};
pub(crate) use general::pivoted;
pub use rotate::RotationMatrix;
pub use scale::ScalingMatrix;
pub use translate::TranslationMatrix;

/// Implements read-only matrix access for a transformation matrix newtype.
macro_rules! impl_transform_matrix {
    ($name:ident) => {
        impl $name {
            /// Unwraps the underlying 3x3 matrix.
            #[must_use]
            pub fn into_matrix(self) -> $crate::math::Matrix {
                self.0
            }
        }

        impl ::std::ops::Deref for $name {
            type Target = $crate::math::Matrix;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl AsRef<$crate::math::Matrix> for $name {
            fn as_ref(&self) -> &$crate::math::Matrix {
                &self.0
            }
        }

        impl From<$name> for $crate::math::Matrix {
            fn from(m: $name) -> Self {
                m.0
            }
        }
    };
}

pub(crate) use impl_transform_matrix;
