pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use error::{AffinityError, Axis, MatrixError, PathError, Result};
pub use geometry::{
    MatrixRepresentable, Path, Point, Rotatable, Scalable, Transformable, Translatable,
};
pub use math::Matrix;
pub use operations::transform::{RotationMatrix, ScalingMatrix, TranslationMatrix};
