//! # cagey-math
//! Small fixed-size linear algebra for games and graphics.
//!
//! Contains unit-tagged angles, vectors of 2 to 4 elements and column-major
//! matrices of 2 to 4 columns and rows. Element types are restricted to the
//! primitive integers and floats of 8 to 64 bits, see [`VectorElement`].
//! Vectors and matrices share the memory layout of plain arrays and can be
//! cast to flat buffers with [`bytemuck`].
#![warn(missing_docs)]

pub mod elem;
pub mod error;
pub mod matrix;
pub mod units;
pub mod util;
pub mod vector;

pub use elem::{FloatElement, SignedElement, VectorElement};
pub use error::ParseAngleError;
pub use matrix::{
    determinant, inverse, transpose, try_inverse, Determinant, Invertible, Matrix, Matrix22,
    Matrix22d, Matrix22f, Matrix22i, Matrix22u, Matrix33, Matrix33d, Matrix33f, Matrix33i,
    Matrix33u, Matrix44, Matrix44d, Matrix44f, Matrix44i, Matrix44u,
};
pub use units::{Angle, AngleUnit, Degree, Radian, UDegree, URadian};
pub use util::{equals, Dim, FuzzyEq, SupportedDim};
pub use vector::{
    cross, dot, is_zero_length, length, length_inverted, length_squared, normalize,
    try_normalize, Vector, Vector2, Vector2d, Vector2f, Vector2i, Vector2u, Vector3, Vector3d,
    Vector3f, Vector3i, Vector3u, Vector4, Vector4d, Vector4f, Vector4i, Vector4u,
};

/// Creates a [`Degree<f64>`](crate::Degree) angle.
///
/// ```
/// use cagey_math::{deg, Degree};
/// assert_eq!(deg!(90.0), Degree::<f64>::new(90.0));
/// ```
#[macro_export]
macro_rules! deg {
    ($val:expr) => {
        $crate::units::Degree::<f64>::new($val)
    };
}

/// Creates a [`Degree<f32>`](crate::Degree) angle.
#[macro_export]
macro_rules! degf {
    ($val:expr) => {
        $crate::units::Degree::<f32>::new($val)
    };
}

/// Creates a [`Radian<f64>`](crate::Radian) angle.
///
/// ```
/// use cagey_math::{rad, Radian};
/// assert_eq!(rad!(0.5), Radian::<f64>::new(0.5));
/// ```
#[macro_export]
macro_rules! rad {
    ($val:expr) => {
        $crate::units::Radian::<f64>::new($val)
    };
}

/// Creates a [`Radian<f32>`](crate::Radian) angle.
#[macro_export]
macro_rules! radf {
    ($val:expr) => {
        $crate::units::Radian::<f32>::new($val)
    };
}
