//! Free function forms of the vector geometry methods.

use super::Vector;
use crate::{
    elem::{FloatElement, VectorElement},
    util::{Dim, SupportedDim},
};

/// Dot product of two vectors.
#[inline]
pub fn dot<T: VectorElement, const N: usize>(a: &Vector<T, N>, b: &Vector<T, N>) -> T
where
    Dim<N>: SupportedDim,
{
    a.dot(b)
}

/// Cross product of two 3-element vectors.
#[inline]
pub fn cross<T: VectorElement>(a: &Vector<T, 3>, b: &Vector<T, 3>) -> Vector<T, 3> { a.cross(b) }

/// Squared length of a vector.
#[inline]
pub fn length_squared<T: VectorElement, const N: usize>(v: &Vector<T, N>) -> T
where
    Dim<N>: SupportedDim,
{
    v.length_squared()
}

/// Euclidean length of a vector.
#[inline]
pub fn length<T: FloatElement, const N: usize>(v: &Vector<T, N>) -> T
where
    Dim<N>: SupportedDim,
{
    v.length()
}

/// Reciprocal of the length of a vector.
#[inline]
pub fn length_inverted<T: FloatElement, const N: usize>(v: &Vector<T, N>) -> T
where
    Dim<N>: SupportedDim,
{
    v.length_inverted()
}

/// Returns true if the vector is too short to be normalized.
#[inline]
pub fn is_zero_length<T: FloatElement, const N: usize>(v: &Vector<T, N>) -> bool
where
    Dim<N>: SupportedDim,
{
    v.is_zero_length()
}

/// Unit vector with the direction of `v`. See [`Vector::normalize`].
#[inline]
pub fn normalize<T: FloatElement, const N: usize>(v: &Vector<T, N>) -> Vector<T, N>
where
    Dim<N>: SupportedDim,
{
    v.normalize()
}

/// Unit vector with the direction of `v`, if it has one.
#[inline]
pub fn try_normalize<T: FloatElement, const N: usize>(v: &Vector<T, N>) -> Option<Vector<T, N>>
where
    Dim<N>: SupportedDim,
{
    v.try_normalize()
}

/// Element-wise comparison within the machine epsilon of `T`.
#[inline]
pub fn fuzzy_equals<T: VectorElement, const N: usize>(a: &Vector<T, N>, b: &Vector<T, N>) -> bool
where
    Dim<N>: SupportedDim,
{
    a.fuzzy_equals(b, T::EPSILON)
}

/// Element-wise comparison within `epsilon`.
#[inline]
pub fn fuzzy_equals_eps<T: VectorElement, const N: usize>(
    a: &Vector<T, N>,
    b: &Vector<T, N>,
    epsilon: T,
) -> bool
where
    Dim<N>: SupportedDim,
{
    a.fuzzy_equals(b, epsilon)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::{Vector2d, Vector2f, Vector3f, Vector3i, Vector4d};
    use approx::assert_relative_eq;

    #[test]
    fn free_functions_match_methods() {
        let a = Vector2d::new(1.2, 3.4);
        let b = Vector2d::new(7.0, 8.0);
        assert_eq!(dot(&a, &b), 1.2 * 7.0 + 3.4 * 8.0);
        assert_eq!(dot(&a, &b), a.dot(&b));

        assert_eq!(
            cross(&Vector3f::new(5.0, 1.0, 4.0), &Vector3f::new(-1.0, 0.0, 2.0)),
            Vector3f::new(2.0, -14.0, 1.0)
        );
        assert_eq!(
            cross(&Vector3i::x_axis(), &Vector3i::y_axis()),
            Vector3i::z_axis()
        );

        let v = Vector4d::new(1.0, 1.0, 1.0, 1.0);
        assert_eq!(length_squared(&v), 4.0);
        assert_eq!(length(&v), 2.0);
        assert_eq!(length_inverted(&v), 0.5);
        assert!(!is_zero_length(&v));
        assert_relative_eq!(normalize(&v), Vector4d::splat(0.5));
        assert_eq!(try_normalize(&v), Some(Vector4d::splat(0.5)));
        assert_eq!(try_normalize(&Vector4d::ZERO), None);
        assert!(is_zero_length(&Vector4d::ZERO));
    }

    #[test]
    fn fuzzy_comparison() {
        let a = Vector2f::new(1.0, 2.0);
        let b = Vector2f::new(1.0 + f32::EPSILON * 0.5, 2.0);
        assert!(fuzzy_equals(&a, &b));
        assert!(!fuzzy_equals(&a, &Vector2f::new(1.001, 2.0)));
        assert!(fuzzy_equals_eps(&a, &Vector2f::new(1.001, 2.0), 0.01));
        assert!(!fuzzy_equals_eps(&Vector3i::ZERO, &Vector3i::ONE, 0));
        assert!(fuzzy_equals_eps(&Vector3i::ZERO, &Vector3i::ONE, 1));
    }
}
