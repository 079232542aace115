//! Fixed-size vectors of 2, 3 or 4 elements.

mod func;
mod ops;

pub use func::*;

use crate::{
    elem::{FloatElement, VectorElement},
    util::{AssertNotLonger, Dim, FuzzyEq, SupportedDim},
};
use core::{
    fmt::{Display, Formatter},
    ops::{Index, IndexMut},
};
use num_traits::AsPrimitive;

/// A fixed-size vector of `N` elements of type `T`.
///
/// The vector has exactly the layout of `[T; N]`: no padding, the alignment
/// of `T`, components stored in declaration order. It can therefore be cast
/// to and from flat buffers with [`bytemuck`].
///
/// Components are reachable by position (`v[0]`) and by name: `x y z w` and
/// `r g b a`, plus `w h` (width, height) on 2-element vectors. All names are
/// accessors over the same storage.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Vector<T: VectorElement, const N: usize>(pub(crate) [T; N])
where
    Dim<N>: SupportedDim;

/// A 2-element vector.
pub type Vector2<T> = Vector<T, 2>;
/// A 3-element vector.
pub type Vector3<T> = Vector<T, 3>;
/// A 4-element vector.
pub type Vector4<T> = Vector<T, 4>;

/// A 2-element vector of `f32`.
pub type Vector2f = Vector2<f32>;
/// A 2-element vector of `f64`.
pub type Vector2d = Vector2<f64>;
/// A 2-element vector of `i32`.
pub type Vector2i = Vector2<i32>;
/// A 2-element vector of `u32`.
pub type Vector2u = Vector2<u32>;
/// A 3-element vector of `f32`.
pub type Vector3f = Vector3<f32>;
/// A 3-element vector of `f64`.
pub type Vector3d = Vector3<f64>;
/// A 3-element vector of `i32`.
pub type Vector3i = Vector3<i32>;
/// A 3-element vector of `u32`.
pub type Vector3u = Vector3<u32>;
/// A 4-element vector of `f32`.
pub type Vector4f = Vector4<f32>;
/// A 4-element vector of `f64`.
pub type Vector4d = Vector4<f64>;
/// A 4-element vector of `i32`.
pub type Vector4i = Vector4<i32>;
/// A 4-element vector of `u32`.
pub type Vector4u = Vector4<u32>;

static_assertions::assert_eq_size!(Vector2<u8>, [u8; 2]);
static_assertions::assert_eq_size!(Vector3<i16>, [i16; 3]);
static_assertions::assert_eq_size!(Vector4<f64>, [f64; 4]);
static_assertions::assert_eq_align!(Vector3<f64>, f64);
static_assertions::assert_eq_align!(Vector4<u16>, u16);

impl<T: VectorElement, const N: usize> Vector<T, N>
where
    Dim<N>: SupportedDim,
{
    /// Number of elements.
    pub const LEN: usize = N;

    /// All elements set to zero.
    pub const ZERO: Self = Self([T::ZERO; N]);

    /// All elements set to one.
    pub const ONE: Self = Self([T::ONE; N]);

    /// Creates a vector from an array of its elements.
    #[inline]
    pub const fn from_array(data: [T; N]) -> Self { Self(data) }

    /// Creates a vector with all elements set to `value`.
    #[inline]
    pub fn splat(value: T) -> Self { Self([value; N]) }

    /// Returns a vector with all elements set to zero.
    #[inline]
    pub const fn zero() -> Self { Self::ZERO }

    /// Returns the unit vector along the first axis.
    #[inline]
    pub fn x_axis() -> Self { Self::axis(0) }

    /// Returns the unit vector along the second axis.
    #[inline]
    pub fn y_axis() -> Self { Self::axis(1) }

    #[inline]
    fn axis(i: usize) -> Self {
        let mut data = [T::ZERO; N];
        data[i] = T::ONE;
        Self(data)
    }

    /// Creates a vector by calling `f` with the index of each element.
    #[inline]
    pub fn from_fn(f: impl FnMut(usize) -> T) -> Self { Self(core::array::from_fn(f)) }

    /// Copies the first `N` elements of a vector at least as long as this
    /// one, discarding the rest.
    ///
    /// Using a shorter source fails to compile.
    #[inline]
    pub fn from_prefix<const M: usize>(other: Vector<T, M>) -> Self
    where
        Dim<M>: SupportedDim,
    {
        #[allow(clippy::let_unit_value)]
        let () = AssertNotLonger::<N, M>::OK;
        Self::from_fn(|i| other.0[i])
    }

    /// Converts each element with `as` semantics.
    #[inline]
    pub fn cast<U: VectorElement>(self) -> Vector<U, N>
    where
        T: AsPrimitive<U>,
    {
        self.map(|x| x.as_())
    }

    /// Applies `f` to every element.
    #[inline]
    pub fn map<U: VectorElement>(self, f: impl FnMut(T) -> U) -> Vector<U, N> {
        Vector(self.0.map(f))
    }

    /// Returns the elements as an array reference.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] { &self.0 }

    /// Returns the elements as an array.
    #[inline]
    pub fn to_array(self) -> [T; N] { self.0 }

    /// Returns the elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] { &self.0 }

    /// Returns the elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] { &mut self.0 }

    /// Returns an iterator over the elements.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> { self.0.iter() }

    /// Returns a mutable iterator over the elements.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> { self.0.iter_mut() }

    /// Sum of the element-wise products.
    #[inline]
    pub fn dot(&self, other: &Self) -> T {
        self.0
            .iter()
            .zip(other.0.iter())
            .fold(T::ZERO, |acc, (&a, &b)| acc + a * b)
    }

    /// Squared length, `dot(self, self)`.
    #[inline]
    pub fn length_squared(&self) -> T { self.dot(self) }

    /// Returns true if every pair of elements differs by at most `epsilon`.
    #[inline]
    pub fn fuzzy_equals(&self, other: &Self, epsilon: T) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(&a, &b)| a.is_within(b, epsilon))
    }
}

impl<T: FloatElement, const N: usize> Vector<T, N>
where
    Dim<N>: SupportedDim,
{
    /// Euclidean length.
    #[inline]
    pub fn length(&self) -> T { self.length_squared().sqrt() }

    /// Reciprocal of the length.
    #[inline]
    pub fn length_inverted(&self) -> T { T::ONE / self.length() }

    /// Returns true if the squared length is below the squared machine
    /// epsilon.
    #[inline]
    pub fn is_zero_length(&self) -> bool {
        self.length_squared().magnitude() < T::EPSILON * T::EPSILON
    }

    /// Scales the vector to unit length.
    ///
    /// No check is performed: a zero vector yields non-finite components.
    /// Use [`Vector::try_normalize`] when the input may be degenerate.
    #[inline]
    #[must_use]
    pub fn normalize(&self) -> Self { *self * self.length_inverted() }

    /// Scales the vector to unit length, or returns `None` if it has zero
    /// length.
    #[inline]
    #[must_use]
    pub fn try_normalize(&self) -> Option<Self> {
        if self.is_zero_length() {
            log::trace!("refusing to normalize zero-length vector {}", self);
            return None;
        }
        Some(self.normalize())
    }
}

/// Generates named component accessors for one vector extent.
macro_rules! impl_component_accessors {
    ($n:literal => $($name:ident: $idx:literal),+ $(,)?) => {
        paste::paste! {
            impl<T: VectorElement> Vector<T, $n> {
                $(
                    #[doc = concat!("Returns the `", stringify!($name), "` component.")]
                    #[inline]
                    pub const fn $name(&self) -> T { self.0[$idx] }

                    #[doc = concat!("Returns a mutable reference to the `", stringify!($name), "` component.")]
                    #[inline]
                    pub fn [<$name _mut>](&mut self) -> &mut T { &mut self.0[$idx] }

                    #[doc = concat!("Sets the `", stringify!($name), "` component.")]
                    #[inline]
                    pub fn [<set_ $name>](&mut self, value: T) { self.0[$idx] = value; }
                )+
            }
        }
    };
}

impl_component_accessors!(2 => x: 0, y: 1, r: 0, g: 1, w: 0, h: 1);
impl_component_accessors!(3 => x: 0, y: 1, z: 2, r: 0, g: 1, b: 2);
impl_component_accessors!(4 => x: 0, y: 1, z: 2, w: 3, r: 0, g: 1, b: 2, a: 3);

/// Generates swizzles copying a prefix of the vector.
macro_rules! impl_swizzles {
    ($n:literal => $($name:ident: $m:literal),+ $(,)?) => {
        impl<T: VectorElement> Vector<T, $n> {
            $(
                #[doc = concat!("Returns a copy of the `", stringify!($name), "` components.")]
                #[inline]
                pub fn $name(&self) -> Vector<T, $m> { Vector::from_prefix(*self) }
            )+
        }
    };
}

impl_swizzles!(2 => xy: 2, rg: 2);
impl_swizzles!(3 => xy: 2, rg: 2, xyz: 3, rgb: 3);
impl_swizzles!(4 => xy: 2, rg: 2, xyz: 3, rgb: 3);

impl<T: VectorElement> Vector<T, 2> {
    /// Creates a vector from its components.
    #[inline]
    pub const fn new(x: T, y: T) -> Self { Self([x, y]) }

    /// Appends `z`, producing a 3-element vector.
    #[inline]
    pub fn extend(self, z: T) -> Vector<T, 3> { Vector([self.0[0], self.0[1], z]) }
}

impl<T: VectorElement> Vector<T, 3> {
    /// Creates a vector from its components.
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self { Self([x, y, z]) }

    /// Appends `w`, producing a 4-element vector.
    #[inline]
    pub fn extend(self, w: T) -> Vector<T, 4> {
        Vector([self.0[0], self.0[1], self.0[2], w])
    }

    /// Drops the last component.
    #[inline]
    pub fn truncate(self) -> Vector<T, 2> { Vector([self.0[0], self.0[1]]) }

    /// Returns the unit vector along the third axis.
    #[inline]
    pub fn z_axis() -> Self { Self::axis(2) }

    /// Standard 3D cross product.
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        let [ax, ay, az] = self.0;
        let [bx, by, bz] = other.0;
        Self([ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx])
    }
}

impl<T: VectorElement> Vector<T, 4> {
    /// Creates a vector from its components.
    #[inline]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self { Self([x, y, z, w]) }

    /// Drops the last component.
    #[inline]
    pub fn truncate(self) -> Vector<T, 3> { Vector([self.0[0], self.0[1], self.0[2]]) }

    /// Returns the unit vector along the third axis.
    #[inline]
    pub fn z_axis() -> Self { Self::axis(2) }

    /// Returns the unit vector along the fourth axis.
    #[inline]
    pub fn w_axis() -> Self { Self::axis(3) }
}

impl<T: VectorElement> From<(Vector<T, 2>, T)> for Vector<T, 3> {
    #[inline]
    fn from((xy, z): (Vector<T, 2>, T)) -> Self { xy.extend(z) }
}

impl<T: VectorElement> From<(Vector<T, 3>, T)> for Vector<T, 4> {
    #[inline]
    fn from((xyz, w): (Vector<T, 3>, T)) -> Self { xyz.extend(w) }
}

impl<T: VectorElement, const N: usize> Default for Vector<T, N>
where
    Dim<N>: SupportedDim,
{
    #[inline]
    fn default() -> Self { Self::ZERO }
}

impl<T: VectorElement, const N: usize> From<[T; N]> for Vector<T, N>
where
    Dim<N>: SupportedDim,
{
    #[inline]
    fn from(data: [T; N]) -> Self { Self(data) }
}

impl<T: VectorElement, const N: usize> From<Vector<T, N>> for [T; N]
where
    Dim<N>: SupportedDim,
{
    #[inline]
    fn from(v: Vector<T, N>) -> Self { v.0 }
}

impl<T: VectorElement, const N: usize> AsRef<[T]> for Vector<T, N>
where
    Dim<N>: SupportedDim,
{
    #[inline]
    fn as_ref(&self) -> &[T] { &self.0 }
}

impl<T: VectorElement, const N: usize> AsMut<[T]> for Vector<T, N>
where
    Dim<N>: SupportedDim,
{
    #[inline]
    fn as_mut(&mut self) -> &mut [T] { &mut self.0 }
}

impl<T: VectorElement, const N: usize> Index<usize> for Vector<T, N>
where
    Dim<N>: SupportedDim,
{
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output { &self.0[index] }
}

impl<T: VectorElement, const N: usize> IndexMut<usize> for Vector<T, N>
where
    Dim<N>: SupportedDim,
{
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output { &mut self.0[index] }
}

impl<T: VectorElement, const N: usize> IntoIterator for Vector<T, N>
where
    Dim<N>: SupportedDim,
{
    type Item = T;
    type IntoIter = core::array::IntoIter<T, N>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter { self.0.into_iter() }
}

impl<'a, T: VectorElement, const N: usize> IntoIterator for &'a Vector<T, N>
where
    Dim<N>: SupportedDim,
{
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter { self.0.iter() }
}

impl<T: VectorElement, const N: usize> Display for Vector<T, N>
where
    Dim<N>: SupportedDim,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "(")?;
        for (i, elem) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            Display::fmt(elem, f)?;
        }
        write!(f, ")")
    }
}

impl<T: VectorElement, const N: usize> FuzzyEq for Vector<T, N>
where
    Dim<N>: SupportedDim,
{
    #[inline]
    fn fuzzy_eq(&self, other: &Self) -> bool { self.fuzzy_equals(other, T::EPSILON) }
}

// SAFETY: `Vector` is `repr(transparent)` over `[T; N]` and `T` is `Pod`.
unsafe impl<T: VectorElement, const N: usize> bytemuck::Zeroable for Vector<T, N> where
    Dim<N>: SupportedDim
{
}

// SAFETY: see `Zeroable` above.
unsafe impl<T: VectorElement, const N: usize> bytemuck::Pod for Vector<T, N> where
    Dim<N>: SupportedDim
{
}

impl<T, const N: usize> approx::AbsDiffEq for Vector<T, N>
where
    T: VectorElement + approx::AbsDiffEq,
    T::Epsilon: Copy,
    Dim<N>: SupportedDim,
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

impl<T, const N: usize> approx::RelativeEq for Vector<T, N>
where
    T: VectorElement + approx::RelativeEq,
    T::Epsilon: Copy,
    Dim<N>: SupportedDim,
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

impl<T, const N: usize> approx::UlpsEq for Vector<T, N>
where
    T: VectorElement + approx::UlpsEq,
    T::Epsilon: Copy,
    Dim<N>: SupportedDim,
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
impl<T, const N: usize> serde::Serialize for Vector<T, N>
where
    T: VectorElement + serde::Serialize,
    Dim<N>: SupportedDim,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeTuple;

        let mut tuple = serializer.serialize_tuple(N)?;
        for elem in &self.0 {
            tuple.serialize_element(elem)?;
        }
        tuple.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, T, const N: usize> serde::Deserialize<'de> for Vector<T, N>
where
    T: VectorElement + serde::Deserialize<'de>,
    Dim<N>: SupportedDim,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct VectorVisitor<T, const N: usize>(core::marker::PhantomData<T>);

        impl<'de, T, const N: usize> serde::de::Visitor<'de> for VectorVisitor<T, N>
        where
            T: VectorElement + serde::Deserialize<'de>,
            Dim<N>: SupportedDim,
        {
            type Value = Vector<T, N>;

            fn expecting(&self, formatter: &mut Formatter) -> core::fmt::Result {
                write!(formatter, "a sequence of {} numbers", N)
            }

            fn visit_seq<V>(self, mut seq: V) -> Result<Self::Value, V::Error>
            where
                V: serde::de::SeqAccess<'de>,
            {
                let mut data = [T::ZERO; N];
                for (i, elem) in data.iter_mut().enumerate() {
                    *elem = seq
                        .next_element()?
                        .ok_or_else(|| serde::de::Error::invalid_length(i, &self))?;
                }
                Ok(Vector(data))
            }
        }

        deserializer.deserialize_tuple(N, VectorVisitor::<T, N>(core::marker::PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_relative_eq, assert_ulps_eq};
    use core::mem::{align_of, size_of};
    use proptest::prelude::*;

    static_assertions::assert_impl_all!(Vector3f: Copy, Send, Sync, bytemuck::Pod, Default);
    static_assertions::assert_impl_all!(Vector2i: Eq, core::hash::Hash);
    static_assertions::assert_not_impl_any!(Vector2f: Eq);

    macro_rules! check_layout {
        ($($t:ty),*) => {
            $(
                assert_eq!(size_of::<Vector2<$t>>(), 2 * size_of::<$t>());
                assert_eq!(size_of::<Vector3<$t>>(), 3 * size_of::<$t>());
                assert_eq!(size_of::<Vector4<$t>>(), 4 * size_of::<$t>());
                assert_eq!(align_of::<Vector2<$t>>(), align_of::<$t>());
                assert_eq!(align_of::<Vector3<$t>>(), align_of::<$t>());
                assert_eq!(align_of::<Vector4<$t>>(), align_of::<$t>());
            )*
        };
    }

    #[test]
    fn layout_matches_packed_array() {
        check_layout!(f32, f64, i8, i16, i32, i64, u8, u16, u32, u64);

        let v = Vector4f::new(1.0, 2.0, 3.0, 4.0);
        let flat: &[f32] = bytemuck::cast_slice(core::slice::from_ref(&v));
        assert_eq!(flat, &[1.0, 2.0, 3.0, 4.0]);
        let back: &Vector2f = bytemuck::from_bytes(bytemuck::bytes_of(&[5.0f32, 6.0]));
        assert_eq!(*back, Vector2f::new(5.0, 6.0));
    }

    #[test]
    fn construction() {
        assert_eq!(Vector3f::default(), Vector3f::new(0.0, 0.0, 0.0));
        assert_eq!(Vector3f::zero(), Vector3f::ZERO);
        assert_eq!(Vector4i::splat(7), Vector4i::new(7, 7, 7, 7));
        assert_eq!(Vector2u::from([1, 2]), Vector2u::new(1, 2));
        assert_eq!(<[u32; 2]>::from(Vector2u::new(1, 2)), [1, 2]);
        assert_eq!(Vector3i::from_fn(|i| i as i32 * 2), Vector3i::new(0, 2, 4));
        assert_eq!(Vector4f::ONE.as_array(), &[1.0; 4]);
    }

    #[test]
    fn widening_and_truncation() {
        let v2 = Vector2f::new(1.0, 2.0);
        let v3 = v2.extend(3.0);
        assert_eq!(v3, Vector3f::new(1.0, 2.0, 3.0));
        let v4 = Vector4f::from((v3, 4.0));
        assert_eq!(v4, Vector4f::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(Vector3f::from((v2, 9.0)), Vector3f::new(1.0, 2.0, 9.0));

        assert_eq!(v4.truncate(), v3);
        assert_eq!(v3.truncate(), v2);
        assert_eq!(Vector2f::from_prefix(v4), v2);
        assert_eq!(Vector3f::from_prefix(v4), v3);
        assert_eq!(Vector4f::from_prefix(v4), v4);
    }

    #[test]
    fn element_conversion() {
        let v = Vector3d::new(1.9, -2.5, 3.0);
        assert_eq!(v.cast::<i32>(), Vector3i::new(1, -2, 3));
        assert_eq!(Vector2i::new(3, 4).cast::<f32>(), Vector2f::new(3.0, 4.0));
        assert_eq!(Vector2u::new(300, 2).cast::<u8>(), Vector2::<u8>::new(44, 2));
    }

    #[test]
    fn factories() {
        assert_eq!(Vector2i::x_axis(), Vector2i::new(1, 0));
        assert_eq!(Vector2i::y_axis(), Vector2i::new(0, 1));
        assert_eq!(Vector3i::x_axis(), Vector3i::new(1, 0, 0));
        assert_eq!(Vector3i::y_axis(), Vector3i::new(0, 1, 0));
        assert_eq!(Vector3i::z_axis(), Vector3i::new(0, 0, 1));
        assert_eq!(Vector4f::x_axis(), Vector4f::new(1.0, 0.0, 0.0, 0.0));
        assert_eq!(Vector4f::y_axis(), Vector4f::new(0.0, 1.0, 0.0, 0.0));
        assert_eq!(Vector4f::z_axis(), Vector4f::new(0.0, 0.0, 1.0, 0.0));
        assert_eq!(Vector4f::w_axis(), Vector4f::new(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn named_components_share_storage() {
        let mut v = Vector2f::new(1.0, 2.0);
        v.set_x(5.0);
        assert_eq!(v[0], 5.0);
        assert_eq!(v.r(), 5.0);
        assert_eq!(v.w(), 5.0);
        *v.h_mut() = 6.0;
        assert_eq!(v.y(), 6.0);
        assert_eq!(v.g(), 6.0);
        assert_eq!(v[1], 6.0);

        let mut v = Vector4i::new(1, 2, 3, 4);
        *v.z_mut() = 30;
        v.set_a(40);
        v[1] = 20;
        assert_eq!(v.b(), 30);
        assert_eq!(v.w(), 40);
        assert_eq!(v.g(), 20);
        assert_eq!(v.as_slice(), &[1, 20, 30, 40]);

        let mut v = Vector3u::new(1, 2, 3);
        v.set_b(9);
        assert_eq!(v.z(), 9);
        assert_eq!(v[2], 9);
    }

    #[test]
    fn swizzles() {
        let v = Vector4i::new(1, 2, 3, 4);
        assert_eq!(v.xy(), Vector2i::new(1, 2));
        assert_eq!(v.rg(), Vector2i::new(1, 2));
        assert_eq!(v.xyz(), Vector3i::new(1, 2, 3));
        assert_eq!(v.rgb(), Vector3i::new(1, 2, 3));
        assert_eq!(v.xyz().xy(), v.xy());
        assert_eq!(Vector2i::new(8, 9).xy(), Vector2i::new(8, 9));
    }

    #[test]
    #[should_panic]
    fn indexing_out_of_range_panics() {
        let v = Vector3f::ZERO;
        let i = v.as_slice().len();
        let _ = v[i];
    }

    #[test]
    fn geometry() {
        let a = Vector2d::new(1.2, 3.4);
        let b = Vector2d::new(7.0, 8.0);
        assert_eq!(a.dot(&b), 1.2 * 7.0 + 3.4 * 8.0);

        let c = Vector3f::new(5.0, 1.0, 4.0).cross(&Vector3f::new(-1.0, 0.0, 2.0));
        assert_eq!(c, Vector3f::new(2.0, -14.0, 1.0));

        let v = Vector3f::new(3.0, 4.0, 0.0);
        assert_eq!(v.length_squared(), 25.0);
        assert_eq!(v.length(), 5.0);
        assert_eq!(v.length_inverted(), 0.2);
        assert_ulps_eq!(v.normalize(), Vector3f::new(0.6, 0.8, 0.0));
        assert_eq!(Vector3i::new(1, 2, 3).length_squared(), 14);
    }

    #[test]
    fn zero_length() {
        assert!(Vector3f::ZERO.is_zero_length());
        assert!(Vector2d::splat(1.0e-170).is_zero_length());
        assert!(!Vector2f::new(1.0e-3, 0.0).is_zero_length());
        assert_eq!(Vector4f::ZERO.try_normalize(), None);
        assert!(Vector4f::ZERO.normalize().iter().all(|x| !x.is_finite()));
        assert_eq!(
            Vector2f::new(0.0, 2.0).try_normalize(),
            Some(Vector2f::new(0.0, 1.0))
        );
    }

    #[test]
    fn fuzzy_comparison() {
        let a = Vector3f::new(0.1 + 0.2, 1.0, 2.0);
        let b = Vector3f::new(0.3, 1.0, 2.0);
        assert!(a.fuzzy_equals(&b, f32::EPSILON));
        assert!(crate::equals(a, b));
        assert!(!a.fuzzy_equals(&Vector3f::new(0.3, 1.0, 2.1), f32::EPSILON));
        assert!(a.fuzzy_equals(&Vector3f::new(0.3, 1.0, 2.1), 0.2));
        assert!(Vector2u::new(3, 5).fuzzy_equals(&Vector2u::new(5, 3), 2));
        assert!(!Vector2u::new(3, 5).fuzzy_equals(&Vector2u::new(5, 3), 1));
    }

    #[test]
    fn fuzzy_comparison_of_distant_integers() {
        assert!(!Vector2::<i8>::new(127, 0).fuzzy_equals(&Vector2::new(-128, 0), 0));
        assert!(!Vector2::<i8>::new(127, 0).fuzzy_equals(&Vector2::new(-128, 0), i8::MAX));
        assert!(!crate::equals(Vector2i::new(i32::MAX, 0), Vector2i::new(-1, 0)));
        assert!(!crate::equals(Vector3::<i64>::splat(i64::MIN), Vector3::splat(i64::MAX)));
        assert!(Vector2::<i8>::new(100, 0).fuzzy_equals(&Vector2::new(-27, 0), i8::MAX));
    }

    #[test]
    fn formatting() {
        assert_eq!(Vector3i::new(1, -2, 3).to_string(), "(1, -2, 3)");
        assert_eq!(Vector2f::new(0.5, 1.0).to_string(), "(0.5, 1)");
    }

    #[test]
    fn iteration() {
        let v = Vector4u::new(1, 2, 3, 4);
        assert_eq!(v.into_iter().sum::<u32>(), 10);
        assert_eq!((&v).into_iter().count(), 4);
        let mut w = v;
        w.iter_mut().for_each(|x| *x *= 2);
        assert_eq!(w, Vector4u::new(2, 4, 6, 8));
        assert_eq!(v.map(|x| x as f32 * 0.5), Vector4f::new(0.5, 1.0, 1.5, 2.0));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn de_serialization() {
        let v = Vector3f::new(1.0, 2.5, -3.0);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "[1.0,2.5,-3.0]");
        assert_eq!(serde_json::from_str::<Vector3f>(&json).unwrap(), v);
        assert!(serde_json::from_str::<Vector3f>("[1.0,2.5]").is_err());

        let yaml = serde_yaml::to_string(&Vector2i::new(4, 5)).unwrap();
        assert_eq!(serde_yaml::from_str::<Vector2i>(&yaml).unwrap(), Vector2i::new(4, 5));
    }

    fn vector3() -> impl Strategy<Value = Vector3d> {
        prop::array::uniform3(-1.0e3f64..1.0e3).prop_map(Vector3d::from)
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent(v in vector3()) {
            prop_assume!(v.length() > 1.0e-6);
            let n = v.normalize();
            prop_assert!(approx::relative_eq!(n.length(), 1.0, epsilon = 1.0e-12));
            prop_assert!(approx::relative_eq!(n.normalize(), n, epsilon = 1.0e-12));
        }

        #[test]
        fn cross_is_orthogonal(a in vector3(), b in vector3()) {
            let c = a.cross(&b);
            let scale = a.length() * b.length() * (a.length() + b.length()) + 1.0;
            prop_assert!(c.dot(&a).abs() / scale < 1.0e-12);
            prop_assert!(c.dot(&b).abs() / scale < 1.0e-12);
        }

        #[test]
        fn dot_is_commutative(a in vector3(), b in vector3()) {
            prop_assert_eq!(a.dot(&b), b.dot(&a));
        }
    }

    #[test]
    fn length_of_unit_axes() {
        assert_relative_eq!(Vector4d::w_axis().length(), 1.0);
        assert_relative_eq!(Vector2f::y_axis().length_inverted(), 1.0);
    }
}
