//! Free function forms of the matrix methods.

use super::Matrix;
use crate::{
    elem::{FloatElement, SignedElement, VectorElement},
    util::{Dim, SupportedDim},
};

/// Square matrices with a determinant.
pub trait Determinant {
    /// Element type.
    type Output;

    /// Returns the determinant.
    fn determinant(&self) -> Self::Output;
}

/// Square matrices with a closed-form inverse.
pub trait Invertible: Sized {
    /// Returns the inverse without checking the determinant.
    fn inverse(&self) -> Self;

    /// Returns the inverse, or `None` if the matrix is singular.
    fn try_inverse(&self) -> Option<Self>;
}

macro_rules! impl_square_traits {
    ($($n:literal),*) => {
        $(
            impl<T: SignedElement> Determinant for Matrix<T, $n, $n> {
                type Output = T;

                #[inline]
                fn determinant(&self) -> T { Matrix::<T, $n, $n>::determinant(self) }
            }

            impl<T: FloatElement> Invertible for Matrix<T, $n, $n> {
                #[inline]
                fn inverse(&self) -> Self { Matrix::<T, $n, $n>::inverse(self) }

                #[inline]
                fn try_inverse(&self) -> Option<Self> { Matrix::<T, $n, $n>::try_inverse(self) }
            }
        )*
    };
}

impl_square_traits!(2, 3);

/// Transpose of a matrix of any shape.
#[inline]
pub fn transpose<T: VectorElement, const C: usize, const R: usize>(
    m: &Matrix<T, C, R>,
) -> Matrix<T, R, C>
where
    Dim<C>: SupportedDim,
    Dim<R>: SupportedDim,
{
    m.transpose()
}

/// Determinant of a 2×2 or 3×3 matrix.
#[inline]
pub fn determinant<M: Determinant>(m: &M) -> M::Output { m.determinant() }

/// Inverse of a 2×2 or 3×3 matrix. See [`Matrix::inverse`].
#[inline]
pub fn inverse<M: Invertible>(m: &M) -> M { m.inverse() }

/// Inverse of a 2×2 or 3×3 matrix, or `None` if it is singular.
#[inline]
pub fn try_inverse<M: Invertible>(m: &M) -> Option<M> { m.try_inverse() }

/// Element-wise comparison within the machine epsilon of `T`.
#[inline]
pub fn fuzzy_equals<T: VectorElement, const C: usize, const R: usize>(
    a: &Matrix<T, C, R>,
    b: &Matrix<T, C, R>,
) -> bool
where
    Dim<C>: SupportedDim,
    Dim<R>: SupportedDim,
{
    a.fuzzy_equals(b, T::EPSILON)
}

/// Element-wise comparison within `epsilon`.
#[inline]
pub fn fuzzy_equals_eps<T: VectorElement, const C: usize, const R: usize>(
    a: &Matrix<T, C, R>,
    b: &Matrix<T, C, R>,
    epsilon: T,
) -> bool
where
    Dim<C>: SupportedDim,
    Dim<R>: SupportedDim,
{
    a.fuzzy_equals(b, epsilon)
}
