//! Column-major matrices with 2 to 4 columns and rows.

mod func;
mod ops;

pub use func::*;

use crate::{
    elem::{FloatElement, SignedElement, VectorElement},
    util::{Dim, FuzzyEq, SupportedDim},
    vector::Vector,
};
use core::{
    fmt::{Display, Formatter},
    ops::{Index, IndexMut},
};
use num_traits::AsPrimitive;

/// A matrix of `C` columns and `R` rows, stored column by column.
///
/// `m[c]` is the `c`-th column and `m[c][r]` the element at column `c`, row
/// `r`. The layout is that of `[[T; R]; C]`, so a matrix can be handed to
/// graphics APIs expecting column-major data.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Matrix<T: VectorElement, const C: usize, const R: usize>(pub(crate) [Vector<T, R>; C])
where
    Dim<C>: SupportedDim,
    Dim<R>: SupportedDim;

/// A 2×2 matrix.
pub type Matrix22<T> = Matrix<T, 2, 2>;
/// A 3×3 matrix.
pub type Matrix33<T> = Matrix<T, 3, 3>;
/// A 4×4 matrix.
pub type Matrix44<T> = Matrix<T, 4, 4>;

/// A 2×2 matrix of `f32`.
pub type Matrix22f = Matrix22<f32>;
/// A 2×2 matrix of `f64`.
pub type Matrix22d = Matrix22<f64>;
/// A 2×2 matrix of `i32`.
pub type Matrix22i = Matrix22<i32>;
/// A 2×2 matrix of `u32`.
pub type Matrix22u = Matrix22<u32>;
/// A 3×3 matrix of `f32`.
pub type Matrix33f = Matrix33<f32>;
/// A 3×3 matrix of `f64`.
pub type Matrix33d = Matrix33<f64>;
/// A 3×3 matrix of `i32`.
pub type Matrix33i = Matrix33<i32>;
/// A 3×3 matrix of `u32`.
pub type Matrix33u = Matrix33<u32>;
/// A 4×4 matrix of `f32`.
pub type Matrix44f = Matrix44<f32>;
/// A 4×4 matrix of `f64`.
pub type Matrix44d = Matrix44<f64>;
/// A 4×4 matrix of `i32`.
pub type Matrix44i = Matrix44<i32>;
/// A 4×4 matrix of `u32`.
pub type Matrix44u = Matrix44<u32>;

static_assertions::assert_eq_size!(Matrix22<f32>, [f32; 4]);
static_assertions::assert_eq_size!(Matrix33<u8>, [u8; 9]);
static_assertions::assert_eq_size!(Matrix44<f64>, [f64; 16]);
static_assertions::assert_eq_size!(Matrix<i16, 2, 4>, [i16; 8]);
static_assertions::assert_eq_align!(Matrix44f, f32);

impl<T: VectorElement, const C: usize, const R: usize> Matrix<T, C, R>
where
    Dim<C>: SupportedDim,
    Dim<R>: SupportedDim,
{
    /// Number of columns.
    pub const COLS: usize = C;

    /// Number of rows.
    pub const ROWS: usize = R;

    /// All elements set to zero.
    pub const ZERO: Self = Self([Vector::<T, R>::ZERO; C]);

    /// Creates a matrix from its columns.
    #[inline]
    pub const fn from_cols(cols: [Vector<T, R>; C]) -> Self { Self(cols) }

    /// Returns a matrix with all elements set to zero.
    #[inline]
    pub const fn zero() -> Self { Self::ZERO }

    /// Returns a matrix with every element set to `value`.
    ///
    /// This is not a scaled identity: off-diagonal elements are set too.
    #[inline]
    pub fn splat(value: T) -> Self { Self([Vector::splat(value); C]) }

    /// Same as [`Matrix::splat`].
    #[inline]
    pub fn fill(value: T) -> Self { Self::splat(value) }

    /// Creates a matrix by calling `f(col, row)` for every element.
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> T) -> Self {
        Self(core::array::from_fn(|c| Vector::from_fn(|r| f(c, r))))
    }

    /// Returns the columns.
    #[inline]
    pub const fn as_cols(&self) -> &[Vector<T, R>; C] { &self.0 }

    /// Returns the columns mutably.
    #[inline]
    pub fn as_cols_mut(&mut self) -> &mut [Vector<T, R>; C] { &mut self.0 }

    /// Returns the elements in column-major order.
    #[inline]
    pub fn as_slice(&self) -> &[T] { bytemuck::cast_slice(&self.0) }

    /// Returns the elements in column-major order, mutably.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] { bytemuck::cast_slice_mut(&mut self.0) }

    /// Returns a copy of column `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= C`.
    #[inline]
    pub fn col(&self, i: usize) -> Vector<T, R> { self.0[i] }

    /// Returns a copy of row `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= R`.
    #[inline]
    pub fn row(&self, i: usize) -> Vector<T, C> { Vector::from_fn(|c| self.0[c][i]) }

    /// Applies `f` to every element.
    #[inline]
    pub fn map<U: VectorElement>(self, mut f: impl FnMut(T) -> U) -> Matrix<U, C, R> {
        Matrix(self.0.map(|col| col.map(&mut f)))
    }

    /// Converts each element with `as` semantics.
    #[inline]
    pub fn cast<U: VectorElement>(self) -> Matrix<U, C, R>
    where
        T: AsPrimitive<U>,
    {
        self.map(|x| x.as_())
    }

    /// Swaps rows and columns: `result[r][c] == self[c][r]`.
    #[inline]
    #[must_use]
    pub fn transpose(&self) -> Matrix<T, R, C> { Matrix::from_fn(|c, r| self.0[r][c]) }

    /// Returns true if every pair of elements differs by at most `epsilon`.
    pub fn fuzzy_equals(&self, other: &Self, epsilon: T) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(a, b)| a.fuzzy_equals(b, epsilon))
    }
}

impl<T: VectorElement, const N: usize> Matrix<T, N, N>
where
    Dim<N>: SupportedDim,
{
    /// The identity matrix.
    #[inline]
    pub fn identity() -> Self {
        Self::from_fn(|c, r| if c == r { T::ONE } else { T::ZERO })
    }

    /// Returns the elements on the main diagonal.
    #[inline]
    pub fn diagonal(&self) -> Vector<T, N> { Vector::from_fn(|i| self.0[i][i]) }
}

impl<T: VectorElement> Matrix<T, 2, 2> {
    /// Creates a matrix from its columns.
    #[inline]
    pub const fn new(c0: Vector<T, 2>, c1: Vector<T, 2>) -> Self { Self([c0, c1]) }

    /// Creates a matrix from its elements in column-major order: `(x1, y1)`
    /// is the first column, `(x2, y2)` the second.
    #[inline]
    pub const fn from_elements(x1: T, y1: T, x2: T, y2: T) -> Self {
        Self([Vector([x1, y1]), Vector([x2, y2])])
    }
}

impl<T: VectorElement> Matrix<T, 3, 3> {
    /// Creates a matrix from its columns.
    #[inline]
    pub const fn new(c0: Vector<T, 3>, c1: Vector<T, 3>, c2: Vector<T, 3>) -> Self {
        Self([c0, c1, c2])
    }
}

impl<T: VectorElement> Matrix<T, 4, 4> {
    /// Creates a matrix from its columns.
    #[inline]
    pub const fn new(c0: Vector<T, 4>, c1: Vector<T, 4>, c2: Vector<T, 4>, c3: Vector<T, 4>) -> Self {
        Self([c0, c1, c2, c3])
    }
}

impl<T: SignedElement> Matrix<T, 2, 2> {
    /// Determinant, `m[0][0] * m[1][1] - m[1][0] * m[0][1]`.
    #[inline]
    pub fn determinant(&self) -> T {
        let m = &self.0;
        m[0][0] * m[1][1] - m[1][0] * m[0][1]
    }
}

impl<T: SignedElement> Matrix<T, 3, 3> {
    /// Determinant, as the scalar triple product of the columns.
    #[inline]
    pub fn determinant(&self) -> T {
        let [c0, c1, c2] = &self.0;
        c0.dot(&c1.cross(c2))
    }
}

impl<T: FloatElement> Matrix<T, 2, 2> {
    /// Inverse, computed as the adjugate divided by the determinant.
    ///
    /// A singular matrix yields non-finite elements. Use
    /// [`Matrix::try_inverse`] when the input may be singular.
    #[must_use]
    pub fn inverse(&self) -> Self {
        let inv_det = T::ONE / self.determinant();
        let [[a, b], [c, d]] = [self.0[0].0, self.0[1].0];
        Self::from_elements(d * inv_det, -b * inv_det, -c * inv_det, a * inv_det)
    }

    /// Inverse, or `None` if the determinant is zero.
    #[must_use]
    pub fn try_inverse(&self) -> Option<Self> {
        if self.determinant() == T::ZERO {
            log::trace!("refusing to invert singular matrix {}", self);
            return None;
        }
        Some(self.inverse())
    }
}

impl<T: FloatElement> Matrix<T, 3, 3> {
    /// Inverse, computed as the adjugate divided by the determinant.
    ///
    /// A singular matrix yields non-finite elements. Use
    /// [`Matrix::try_inverse`] when the input may be singular.
    #[must_use]
    pub fn inverse(&self) -> Self {
        let [c0, c1, c2] = &self.0;
        // Rows of the adjugate are the pairwise cross products of the columns.
        let rows = [c1.cross(c2), c2.cross(c0), c0.cross(c1)];
        let inv_det = T::ONE / c0.dot(&rows[0]);
        Matrix::from_cols(rows).transpose() * inv_det
    }

    /// Inverse, or `None` if the determinant is zero.
    #[must_use]
    pub fn try_inverse(&self) -> Option<Self> {
        if self.determinant() == T::ZERO {
            log::trace!("refusing to invert singular matrix {}", self);
            return None;
        }
        Some(self.inverse())
    }
}

impl<T: VectorElement, const C: usize, const R: usize> Default for Matrix<T, C, R>
where
    Dim<C>: SupportedDim,
    Dim<R>: SupportedDim,
{
    #[inline]
    fn default() -> Self { Self::ZERO }
}

impl<T: VectorElement, const C: usize, const R: usize> From<[Vector<T, R>; C]> for Matrix<T, C, R>
where
    Dim<C>: SupportedDim,
    Dim<R>: SupportedDim,
{
    #[inline]
    fn from(cols: [Vector<T, R>; C]) -> Self { Self(cols) }
}

impl<T: VectorElement, const C: usize, const R: usize> From<[[T; R]; C]> for Matrix<T, C, R>
where
    Dim<C>: SupportedDim,
    Dim<R>: SupportedDim,
{
    #[inline]
    fn from(cols: [[T; R]; C]) -> Self { Self(cols.map(Vector)) }
}

impl<T: VectorElement, const C: usize, const R: usize> From<Matrix<T, C, R>> for [[T; R]; C]
where
    Dim<C>: SupportedDim,
    Dim<R>: SupportedDim,
{
    #[inline]
    fn from(m: Matrix<T, C, R>) -> Self { m.0.map(Vector::to_array) }
}

/// Flat column-major conversions for the square sizes.
macro_rules! impl_from_flat_array {
    ($($n:literal => $len:literal),*) => {
        $(
            impl<T: VectorElement> From<[T; $len]> for Matrix<T, $n, $n> {
                #[inline]
                fn from(elems: [T; $len]) -> Self { Self::from_fn(|c, r| elems[c * $n + r]) }
            }

            impl<T: VectorElement> From<Matrix<T, $n, $n>> for [T; $len] {
                #[inline]
                fn from(m: Matrix<T, $n, $n>) -> Self { bytemuck::cast(m) }
            }
        )*
    };
}

impl_from_flat_array!(2 => 4, 3 => 9, 4 => 16);

impl<T: VectorElement, const C: usize, const R: usize> Index<usize> for Matrix<T, C, R>
where
    Dim<C>: SupportedDim,
    Dim<R>: SupportedDim,
{
    type Output = Vector<T, R>;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output { &self.0[index] }
}

impl<T: VectorElement, const C: usize, const R: usize> IndexMut<usize> for Matrix<T, C, R>
where
    Dim<C>: SupportedDim,
    Dim<R>: SupportedDim,
{
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output { &mut self.0[index] }
}

impl<T: VectorElement, const C: usize, const R: usize> Display for Matrix<T, C, R>
where
    Dim<C>: SupportedDim,
    Dim<R>: SupportedDim,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "[")?;
        for (i, col) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            Display::fmt(col, f)?;
        }
        write!(f, "]")
    }
}

impl<T: VectorElement, const C: usize, const R: usize> FuzzyEq for Matrix<T, C, R>
where
    Dim<C>: SupportedDim,
    Dim<R>: SupportedDim,
{
    #[inline]
    fn fuzzy_eq(&self, other: &Self) -> bool { self.fuzzy_equals(other, T::EPSILON) }
}

// SAFETY: `Matrix` is `repr(transparent)` over an array of `Pod` vectors.
unsafe impl<T: VectorElement, const C: usize, const R: usize> bytemuck::Zeroable
    for Matrix<T, C, R>
where
    Dim<C>: SupportedDim,
    Dim<R>: SupportedDim,
{
}

// SAFETY: see `Zeroable` above.
unsafe impl<T: VectorElement, const C: usize, const R: usize> bytemuck::Pod for Matrix<T, C, R>
where
    Dim<C>: SupportedDim,
    Dim<R>: SupportedDim,
{
}

impl<T, const C: usize, const R: usize> approx::AbsDiffEq for Matrix<T, C, R>
where
    T: VectorElement + approx::AbsDiffEq,
    T::Epsilon: Copy,
    Dim<C>: SupportedDim,
    Dim<R>: SupportedDim,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon { T::default_epsilon() }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T, const C: usize, const R: usize> approx::RelativeEq for Matrix<T, C, R>
where
    T: VectorElement + approx::RelativeEq,
    T::Epsilon: Copy,
    Dim<C>: SupportedDim,
    Dim<R>: SupportedDim,
{
    fn default_max_relative() -> Self::Epsilon { T::default_max_relative() }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<T, const C: usize, const R: usize> approx::UlpsEq for Matrix<T, C, R>
where
    T: VectorElement + approx::UlpsEq,
    T::Epsilon: Copy,
    Dim<C>: SupportedDim,
    Dim<R>: SupportedDim,
{
    fn default_max_ulps() -> u32 { T::default_max_ulps() }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}

#[cfg(feature = "serde")]
impl<T, const C: usize, const R: usize> serde::Serialize for Matrix<T, C, R>
where
    T: VectorElement + serde::Serialize,
    Dim<C>: SupportedDim,
    Dim<R>: SupportedDim,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeTuple;

        let mut tuple = serializer.serialize_tuple(C)?;
        for col in &self.0 {
            tuple.serialize_element(col)?;
        }
        tuple.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, T, const C: usize, const R: usize> serde::Deserialize<'de> for Matrix<T, C, R>
where
    T: VectorElement + serde::Deserialize<'de>,
    Dim<C>: SupportedDim,
    Dim<R>: SupportedDim,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct MatrixVisitor<T, const C: usize, const R: usize>(core::marker::PhantomData<T>);

        impl<'de, T, const C: usize, const R: usize> serde::de::Visitor<'de> for MatrixVisitor<T, C, R>
        where
            T: VectorElement + serde::Deserialize<'de>,
            Dim<C>: SupportedDim,
            Dim<R>: SupportedDim,
        {
            type Value = Matrix<T, C, R>;

            fn expecting(&self, formatter: &mut Formatter) -> core::fmt::Result {
                write!(formatter, "a sequence of {} columns of {} numbers", C, R)
            }

            fn visit_seq<V>(self, mut seq: V) -> Result<Self::Value, V::Error>
            where
                V: serde::de::SeqAccess<'de>,
            {
                let mut cols = [Vector::<T, R>::ZERO; C];
                for (i, col) in cols.iter_mut().enumerate() {
                    *col = seq
                        .next_element()?
                        .ok_or_else(|| serde::de::Error::invalid_length(i, &self))?;
                }
                Ok(Matrix(cols))
            }
        }

        deserializer.deserialize_tuple(C, MatrixVisitor::<T, C, R>(core::marker::PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::{Vector2f, Vector3d, Vector3f, Vector4f};
    use approx::{assert_relative_eq, assert_ulps_eq};
    use core::mem::{align_of, size_of};
    use proptest::prelude::*;

    static_assertions::assert_impl_all!(Matrix33d: Copy, Send, Sync, bytemuck::Pod, Default);

    macro_rules! check_layout {
        ($($t:ty),*) => {
            $(
                assert_eq!(size_of::<Matrix<$t, 2, 3>>(), 6 * size_of::<$t>());
                assert_eq!(size_of::<Matrix<$t, 3, 2>>(), 6 * size_of::<$t>());
                assert_eq!(size_of::<Matrix<$t, 4, 3>>(), 12 * size_of::<$t>());
                assert_eq!(size_of::<Matrix44<$t>>(), 16 * size_of::<$t>());
                assert_eq!(align_of::<Matrix33<$t>>(), align_of::<$t>());
            )*
        };
    }

    fn m22(cols: [[f32; 2]; 2]) -> Matrix22f { Matrix22f::from(cols) }

    #[test]
    fn layout_is_column_major() {
        check_layout!(f32, f64, i8, i16, i32, i64, u8, u16, u32, u64);

        let m = m22([[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(<[f32; 4]>::from(m), [1.0, 2.0, 3.0, 4.0]);
        assert_eq!(m[1][0], 3.0);
        assert_eq!(m[0][1], 2.0);
    }

    #[test]
    fn construction() {
        assert_eq!(Matrix33f::default(), Matrix33f::ZERO);
        assert_eq!(Matrix22i::zero(), Matrix22i::from([0, 0, 0, 0]));
        assert_eq!(Matrix22i::splat(3), Matrix22i::from([3; 4]));
        assert_eq!(Matrix22i::fill(3), Matrix22i::splat(3));
        assert_eq!(
            Matrix22f::new(Vector2f::new(1.0, 2.0), Vector2f::new(3.0, 4.0)),
            Matrix22f::from_elements(1.0, 2.0, 3.0, 4.0)
        );
        assert_eq!(
            Matrix22f::from_elements(1.0, 2.0, 3.0, 4.0),
            Matrix22f::from([1.0, 2.0, 3.0, 4.0])
        );
        assert_eq!(
            Matrix33i::from([1, 2, 3, 4, 5, 6, 7, 8, 9]).col(2).as_slice(),
            &[7, 8, 9]
        );
        assert_eq!(
            Matrix44u::from_fn(|c, r| (c * 4 + r) as u32),
            Matrix44u::from(core::array::from_fn::<u32, 16, _>(|i| i as u32))
        );
        assert_eq!(
            <[[i32; 2]; 2]>::from(Matrix22i::from_elements(1, 2, 3, 4)),
            [[1, 2], [3, 4]]
        );

        let cols = [Vector3f::x_axis(), Vector3f::y_axis(), Vector3f::z_axis()];
        assert_eq!(Matrix33f::from_cols(cols), Matrix33f::identity());
        assert_eq!(Matrix33f::from(cols).as_cols(), &cols);
    }

    #[test]
    fn identity() {
        let id = Matrix44f::identity();
        for c in 0..4 {
            for r in 0..4 {
                assert_eq!(id[c][r], if c == r { 1.0 } else { 0.0 });
            }
        }
        assert_eq!(id.diagonal(), Vector4f::ONE);
        assert_eq!(Matrix22i::identity(), Matrix22i::from_elements(1, 0, 0, 1));
    }

    #[test]
    fn rows_and_columns() {
        let m = Matrix::<i32, 3, 2>::from([[1, 2], [3, 4], [5, 6]]);
        assert_eq!(m.col(1).as_slice(), &[3, 4]);
        assert_eq!(m.row(0).as_slice(), &[1, 3, 5]);
        assert_eq!(m.row(1).as_slice(), &[2, 4, 6]);

        let mut m = m;
        m[2][1] = 60;
        m.as_cols_mut()[0].set_x(10);
        m.as_mut_slice()[2] = 30;
        assert_eq!(m.as_slice(), &[10, 2, 30, 4, 5, 60]);
    }

    #[test]
    #[should_panic]
    fn column_index_out_of_range_panics() {
        let m = Matrix22f::identity();
        let i = m.as_cols().len();
        let _ = m[i];
    }

    #[test]
    fn transpose() {
        let m = Matrix::<i32, 3, 2>::from([[1, 2], [3, 4], [5, 6]]);
        let t = m.transpose();
        assert_eq!(t, Matrix::<i32, 2, 3>::from([[1, 3, 5], [2, 4, 6]]));
        for c in 0..3 {
            for r in 0..2 {
                assert_eq!(t[r][c], m[c][r]);
            }
        }
        assert_eq!(t.transpose(), m);
    }

    #[test]
    fn determinant() {
        assert_eq!(m22([[1.0, 2.0], [3.0, 4.0]]).determinant(), -2.0);
        assert_eq!(Matrix22i::from_elements(1, 2, 3, 4).determinant(), -2);
        assert_eq!(Matrix33i::identity().determinant(), 1);
        assert_eq!(Matrix33i::from([2, 0, 0, 0, 3, 0, 0, 0, 4]).determinant(), 24);
        assert_eq!(Matrix33i::from([1, 2, 3, 4, 5, 6, 7, 8, 9]).determinant(), 0);
        assert_eq!(Matrix33i::from([2, -3, 1, 2, 0, -1, 1, 4, 5]).determinant(), 49);
    }

    #[test]
    fn inverse() {
        let m = m22([[4.0, 2.0], [7.0, 6.0]]);
        let inv = m.inverse();
        assert_ulps_eq!(inv, m22([[0.6, -0.2], [-0.7, 0.4]]));
        assert_ulps_eq!(inv.row(0), Vector2f::new(0.6, -0.7));
        assert_ulps_eq!(inv.row(1), Vector2f::new(-0.2, 0.4));
        assert_relative_eq!(m * inv, Matrix22f::identity(), epsilon = 1.0e-6);
        assert_relative_eq!(inv * m, Matrix22f::identity(), epsilon = 1.0e-6);

        let m = Matrix33d::from([2.0, -3.0, 1.0, 2.0, 0.0, -1.0, 1.0, 4.0, 5.0]);
        let inv = m.inverse();
        assert_relative_eq!(m * inv, Matrix33d::identity(), epsilon = 1.0e-12);
        assert_relative_eq!(inv * m, Matrix33d::identity(), epsilon = 1.0e-12);
        assert_relative_eq!(Matrix33d::identity().inverse(), Matrix33d::identity());
    }

    #[test]
    fn singular_matrices_are_rejected() {
        assert_eq!(m22([[1.0, 2.0], [2.0, 4.0]]).try_inverse(), None);
        assert_eq!(Matrix33d::ZERO.try_inverse(), None);
        assert!(Matrix22f::ZERO.inverse().as_slice().iter().all(|x| !x.is_finite()));
        assert_eq!(
            Matrix22d::from_elements(2.0, 0.0, 0.0, 4.0).try_inverse(),
            Some(Matrix22d::from_elements(0.5, 0.0, 0.0, 0.25))
        );
    }

    #[test]
    fn fuzzy_comparison() {
        let a = Matrix22f::from_elements(0.1 + 0.2, 1.0, 2.0, 3.0);
        let b = Matrix22f::from_elements(0.3, 1.0, 2.0, 3.0);
        assert!(crate::equals(a, b));
        assert!(a.fuzzy_equals(&b, f32::EPSILON));
        assert!(!a.fuzzy_equals(&Matrix22f::from_elements(0.3, 1.0, 2.0, 3.1), 0.01));
    }

    #[test]
    fn fuzzy_comparison_of_distant_integers() {
        let a = Matrix22i::from_elements(i32::MAX, 0, 0, 1);
        let b = Matrix22i::from_elements(-1, 0, 0, 1);
        assert!(!crate::equals(a, b));
        assert!(!a.fuzzy_equals(&b, i32::MAX));

        let c = Matrix22::<i8>::splat(127);
        let d = Matrix22::<i8>::splat(-128);
        assert!(!c.fuzzy_equals(&d, i8::MAX));
        assert!(!crate::equals(c, d));
    }

    #[test]
    fn conversion() {
        let m = Matrix22d::from_elements(1.5, -2.5, 3.9, 4.0);
        assert_eq!(m.cast::<i32>(), Matrix22i::from_elements(1, -2, 3, 4));
        assert_eq!(
            Matrix22i::from_elements(1, 2, 3, 4).map(|x| x * 10),
            Matrix22i::from_elements(10, 20, 30, 40)
        );
    }

    #[test]
    fn formatting() {
        assert_eq!(Matrix22i::from_elements(1, 2, 3, 4).to_string(), "[(1, 2), (3, 4)]");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn de_serialization() {
        let m = Matrix22i::from_elements(1, 2, 3, 4);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "[[1,2],[3,4]]");
        assert_eq!(serde_json::from_str::<Matrix22i>(&json).unwrap(), m);
        assert!(serde_json::from_str::<Matrix22i>("[[1,2]]").is_err());
        assert!(serde_json::from_str::<Matrix22i>("[[1,2],[3]]").is_err());

        let m = Matrix33f::identity();
        let yaml = serde_yaml::to_string(&m).unwrap();
        assert_eq!(serde_yaml::from_str::<Matrix33f>(&yaml).unwrap(), m);
    }

    fn matrix33() -> impl Strategy<Value = Matrix33d> {
        prop::array::uniform9(-10.0f64..10.0).prop_map(Matrix33d::from)
    }

    proptest! {
        #[test]
        fn inverse_law(m in matrix33()) {
            prop_assume!(m.determinant().abs() > 1.0e-2);
            let id = Matrix33d::identity();
            let scale = m.as_slice().iter().fold(1.0f64, |acc, x| acc.max(x.abs()));
            let tol = 1.0e-9 * scale / m.determinant().abs().min(1.0);
            prop_assert!(approx::abs_diff_eq!(m * m.inverse(), id, epsilon = tol));
            prop_assert_eq!(m.try_inverse(), Some(m.inverse()));
        }

        #[test]
        fn transpose_is_an_involution(m in matrix33()) {
            prop_assert_eq!(m.transpose().transpose(), m);
            prop_assert!(approx::relative_eq!(m.transpose().determinant(), m.determinant(), epsilon = 1.0e-9));
        }

        #[test]
        fn column_vector_semantics(a in matrix33(), b in matrix33(), v in prop::array::uniform3(-10.0f64..10.0)) {
            let v = Vector3d::from(v);
            prop_assert!(approx::relative_eq!((a * b) * v, a * (b * v), epsilon = 1.0e-9));
        }
    }
}
