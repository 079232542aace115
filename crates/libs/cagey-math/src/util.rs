//! Compile-time extent markers and fuzzy scalar comparison.

use crate::elem::VectorElement;

/// Type level carrier of a vector or matrix extent.
pub struct Dim<const N: usize>;

/// Extents vectors and matrices can be instantiated with: 2, 3 and 4.
///
/// Every generic item of the crate is bounded by `Dim<N>: SupportedDim`, so
/// `Vector<f32, 5>` is rejected by the type checker.
pub trait SupportedDim {}

impl SupportedDim for Dim<2> {}
impl SupportedDim for Dim<3> {}
impl SupportedDim for Dim<4> {}

/// Post-monomorphization check that an `M`-extent source holds at least `N`
/// elements.
pub(crate) struct AssertNotLonger<const N: usize, const M: usize>;

impl<const N: usize, const M: usize> AssertNotLonger<N, M> {
    pub(crate) const OK: () = assert!(N <= M, "source vector is shorter than the target");
}

/// Approximate equality.
pub trait FuzzyEq {
    /// Returns true if `self` and `other` are equal within the tolerance of
    /// the underlying element type.
    fn fuzzy_eq(&self, other: &Self) -> bool;
}

impl<T: VectorElement> FuzzyEq for T {
    #[inline]
    fn fuzzy_eq(&self, other: &Self) -> bool { scalar_equals(*self, *other) }
}

/// Fuzzy equality of two scalars, two angles of the same unit, or two vectors
/// or matrices of the same shape.
///
/// For scalars and angles the test combines an absolute error bound near
/// zero with a relative error bound elsewhere; for integer element types it
/// is exact equality.
pub fn equals<F: FuzzyEq>(a: F, b: F) -> bool { a.fuzzy_eq(&b) }

/// Relative-and-absolute error comparison of two scalars.
fn scalar_equals<T: VectorElement>(x: T, y: T) -> bool {
    if x == y {
        return true;
    }

    let eps = T::EPSILON;
    if eps == T::ZERO {
        return false;
    }

    let diff = x.abs_delta(y);
    // Relative error is meaningless when one of the values is zero.
    if x == T::ZERO || y == T::ZERO || diff < eps {
        return diff < eps;
    }

    diff / (x.magnitude() + y.magnitude()) < eps
}
