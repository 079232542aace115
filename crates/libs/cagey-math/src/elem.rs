//! Element types accepted by vectors, matrices and angles.

use core::{
    fmt::{Debug, Display},
    ops::Neg,
    str::FromStr,
};
use num_traits::{Num, NumCast};

mod private {
    pub trait Sealed {}
}

/// Primitive numeric types usable as the components of a
/// [`Vector`](crate::Vector), a [`Matrix`](crate::Matrix) or an
/// [`Angle`](crate::Angle).
///
/// Implemented for `f32`, `f64`, `i8`, `i16`, `i32`, `i64`, `u8`, `u16`, `u32`
/// and `u64` only. The trait is sealed: instantiating a vector over any other
/// type (`bool`, `usize`, `i128`, ...) does not compile.
pub trait VectorElement:
    private::Sealed
    + Copy
    + Default
    + Debug
    + Display
    + FromStr
    + PartialEq
    + PartialOrd
    + Num
    + NumCast
    + bytemuck::Pod
    + Send
    + Sync
    + 'static
{
    /// Additive identity.
    const ZERO: Self;

    /// Multiplicative identity.
    const ONE: Self;

    /// Machine epsilon of the type; zero for integers.
    const EPSILON: Self;

    /// Returns `|self - other|`, subtracting the smaller value from the larger
    /// so it is usable on unsigned types.
    ///
    /// Integer types saturate at `MAX` when the distance does not fit.
    #[inline]
    fn abs_delta(self, other: Self) -> Self {
        if self > other {
            self - other
        } else {
            other - self
        }
    }

    /// Returns true if `|self - other| <= epsilon`.
    ///
    /// A distance too large for the type is never within `epsilon`.
    #[inline]
    fn is_within(self, other: Self, epsilon: Self) -> bool { self.abs_delta(other) <= epsilon }

    /// Returns the absolute value.
    #[inline]
    fn magnitude(self) -> Self { self.abs_delta(Self::ZERO) }
}

/// Element types with a sign, i.e. everything but the unsigned integers.
pub trait SignedElement: VectorElement + Neg<Output = Self> + num_traits::Signed {}

/// Floating point element types.
pub trait FloatElement:
    SignedElement + num_traits::Float + approx::RelativeEq<Epsilon = Self> + approx::UlpsEq
{
    /// Archimedes' constant.
    const PI: Self;

    /// Multiplier converting degrees to radians, `π / 180`.
    const DEG_TO_RAD: Self;

    /// Multiplier converting radians to degrees, `180 / π`.
    const RAD_TO_DEG: Self;
}

macro_rules! impl_vector_element {
    (@int $($t:ty),*) => {
        $(
            impl private::Sealed for $t {}

            impl VectorElement for $t {
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const EPSILON: Self = 0;

                #[inline]
                fn abs_delta(self, other: Self) -> Self {
                    let (hi, lo) = if self > other { (self, other) } else { (other, self) };
                    hi.checked_sub(lo).unwrap_or(<$t>::MAX)
                }

                #[inline]
                fn is_within(self, other: Self, epsilon: Self) -> bool {
                    let (hi, lo) = if self > other { (self, other) } else { (other, self) };
                    hi.checked_sub(lo).is_some_and(|delta| delta <= epsilon)
                }
            }
        )*
    };
    (@float $($t:ident),*) => {
        $(
            impl private::Sealed for $t {}

            impl VectorElement for $t {
                const ZERO: Self = 0.0;
                const ONE: Self = 1.0;
                const EPSILON: Self = $t::EPSILON;
            }

            impl SignedElement for $t {}

            impl FloatElement for $t {
                const PI: Self = core::$t::consts::PI;
                const DEG_TO_RAD: Self = core::$t::consts::PI / 180.0;
                const RAD_TO_DEG: Self = 180.0 / core::$t::consts::PI;
            }
        )*
    };
}

impl_vector_element!(@int i8, i16, i32, i64, u8, u16, u32, u64);
impl_vector_element!(@float f32, f64);

impl SignedElement for i8 {}
impl SignedElement for i16 {}
impl SignedElement for i32 {}
impl SignedElement for i64 {}
