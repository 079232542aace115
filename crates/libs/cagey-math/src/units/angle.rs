use crate::{
    elem::{FloatElement, SignedElement, VectorElement},
    error::ParseAngleError,
    util::FuzzyEq,
};
use core::{
    fmt::{Debug, Display},
    marker::PhantomData,
    str::FromStr,
};
use num_traits::AsPrimitive;

/// Radian unit.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct URadian;

/// Degree unit.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UDegree;

/// Unit trait for angle units.
pub trait AngleUnit:
    Debug + Default + Copy + Clone + PartialEq + Eq + PartialOrd + Ord + Send + Sync + 'static
{
    /// The name of the unit.
    const NAME: &'static str;

    /// The symbols of the unit; the first one is used for display.
    const SYMBOLS: &'static [&'static str];

    /// The conversion factor from radians.
    fn factor_from_rad<T: FloatElement>() -> T;

    /// The conversion factor from degrees.
    fn factor_from_deg<T: FloatElement>() -> T;
}

impl AngleUnit for URadian {
    const NAME: &'static str = "radian";
    const SYMBOLS: &'static [&'static str] = &["rad"];

    #[inline]
    fn factor_from_rad<T: FloatElement>() -> T { T::ONE }

    #[inline]
    fn factor_from_deg<T: FloatElement>() -> T { T::DEG_TO_RAD }
}

impl AngleUnit for UDegree {
    const NAME: &'static str = "degree";
    const SYMBOLS: &'static [&'static str] = &["deg", "°"];

    #[inline]
    fn factor_from_rad<T: FloatElement>() -> T { T::RAD_TO_DEG }

    #[inline]
    fn factor_from_deg<T: FloatElement>() -> T { T::ONE }
}

/// Angle with unit.
///
/// The unit is part of the type; the stored value is never reinterpreted at
/// runtime. Converting between degrees and radians is explicit, through
/// [`From`] or [`Angle::to_radians`]/[`Angle::to_degrees`].
///
/// Comparison operators compare the raw values exactly. For floating point
/// angles prefer [`Angle::equals`] (or [`crate::equals`]).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Angle<A: AngleUnit, T: VectorElement = f32> {
    pub(crate) value: T,
    pub(crate) unit: PhantomData<A>,
}

/// Type alias for `Angle<URadian, T>`.
pub type Radian<T = f32> = Angle<URadian, T>;

/// Type alias for `Angle<UDegree, T>`.
pub type Degree<T = f32> = Angle<UDegree, T>;

impl<A: AngleUnit, T: VectorElement> Debug for Angle<A, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Angle {{ value: {:?}, unit: {} }}",
            self.value,
            A::SYMBOLS[0]
        )
    }
}

impl<A: AngleUnit, T: VectorElement> Display for Angle<A, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {}", self.value, A::SYMBOLS[0])
    }
}

impl<A: AngleUnit, T: VectorElement> Default for Angle<A, T> {
    fn default() -> Self { Self::ZERO }
}

impl<A: AngleUnit, T: VectorElement> Angle<A, T> {
    /// Zero angle.
    pub const ZERO: Self = Self::new(T::ZERO);

    /// Creates a new angle from a raw value expressed in the unit `A`.
    pub const fn new(value: T) -> Self {
        Angle {
            value,
            unit: PhantomData,
        }
    }

    /// Returns the raw value of the angle.
    #[inline]
    pub const fn value(&self) -> T { self.value }

    /// Converts the underlying element type with `as` semantics, keeping the
    /// unit.
    #[inline]
    pub fn cast<U: VectorElement>(self) -> Angle<A, U>
    where
        T: AsPrimitive<U>,
    {
        Angle::new(self.value.as_())
    }

    /// Determines whether the angle is greater than zero.
    #[inline]
    pub fn is_positive(&self) -> bool { self.value > T::ZERO }

    /// Fuzzy comparison of two angles of the same unit.
    #[inline]
    pub fn equals(&self, other: &Self) -> bool { self.value.fuzzy_eq(&other.value) }

    /// Returns the smaller of the two angles.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        if other.value < self.value {
            other
        } else {
            self
        }
    }

    /// Returns the larger of the two angles.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        if other.value > self.value {
            other
        } else {
            self
        }
    }

    /// Clamps the angle between `min` and `max`.
    #[inline]
    pub fn clamp(self, min: Self, max: Self) -> Self { self.max(min).min(max) }
}

impl<A: AngleUnit, T: SignedElement> Angle<A, T> {
    /// Returns the absolute value of the angle.
    #[inline]
    pub fn abs(self) -> Self { Self::new(self.value.magnitude()) }
}

impl<T: FloatElement> Angle<UDegree, T> {
    /// Converts to radians.
    #[inline]
    pub fn to_radians(self) -> Radian<T> { Angle::new(self.value * T::DEG_TO_RAD) }

    /// Returns the angle unchanged.
    #[inline]
    pub fn to_degrees(self) -> Self { self }

    /// Computes the sine of the angle.
    pub fn sin(&self) -> T { self.to_radians().sin() }
    /// Computes the cosine of the angle.
    pub fn cos(&self) -> T { self.to_radians().cos() }
    /// Computes the tangent of the angle.
    pub fn tan(&self) -> T { self.to_radians().tan() }
}

impl<T: FloatElement> Angle<URadian, T> {
    /// Converts to degrees.
    #[inline]
    pub fn to_degrees(self) -> Degree<T> { Angle::new(self.value * T::RAD_TO_DEG) }

    /// Returns the angle unchanged.
    #[inline]
    pub fn to_radians(self) -> Self { self }

    /// Computes the sine of the angle.
    pub fn sin(&self) -> T { self.value.sin() }
    /// Computes the cosine of the angle.
    pub fn cos(&self) -> T { self.value.cos() }
    /// Computes the tangent of the angle.
    pub fn tan(&self) -> T { self.value.tan() }
}

macro_rules! impl_angle_consts {
    ($($t:ident),*) => {
        $(
            impl Angle<URadian, $t> {
                /// PI in radians.
                pub const PI: Self = Self::new(core::$t::consts::PI);
                /// PI/2 in radians.
                pub const HALF_PI: Self = Self::new(core::$t::consts::FRAC_PI_2);
                /// 2 * PI in radians.
                pub const TWO_PI: Self = Self::new(core::$t::consts::TAU);
            }

            impl Angle<UDegree, $t> {
                /// PI in degrees.
                pub const PI: Self = Self::new(180.0);
                /// PI/2 in degrees.
                pub const HALF_PI: Self = Self::new(90.0);
                /// 2 * PI in degrees.
                pub const TWO_PI: Self = Self::new(360.0);
            }
        )*
    };
}

impl_angle_consts!(f32, f64);

impl<T: FloatElement> From<Degree<T>> for Radian<T> {
    fn from(angle: Degree<T>) -> Self { angle.to_radians() }
}

impl<T: FloatElement> From<Radian<T>> for Degree<T> {
    fn from(angle: Radian<T>) -> Self { angle.to_degrees() }
}

impl<A: AngleUnit, T: VectorElement> FuzzyEq for Angle<A, T> {
    #[inline]
    fn fuzzy_eq(&self, other: &Self) -> bool { self.equals(other) }
}

impl<'a, A: AngleUnit, T: FloatElement> TryFrom<&'a str> for Angle<A, T> {
    type Error = ParseAngleError;

    fn try_from(s: &'a str) -> Result<Self, Self::Error> {
        let s = s.trim();
        if let Some(value) = s.strip_suffix('°') {
            let value = parse_value::<T>(value)?;
            return Ok(Self::new(A::factor_from_deg::<T>() * value));
        }

        let bytes = s.as_bytes();
        let i = super::findr_first_non_ascii_alphabetic(bytes)
            .ok_or_else(|| ParseAngleError::InvalidValue(s.to_owned()))?;
        // Splitting at an ASCII letter boundary keeps both halves valid UTF-8.
        let (value, unit) = s.split_at(i);
        if unit.is_empty() {
            return Err(ParseAngleError::MissingUnit(s.to_owned()));
        }
        let value = parse_value::<T>(value)?;
        match unit {
            "rad" | "rads" | "radian" | "radians" => {
                Ok(Self::new(A::factor_from_rad::<T>() * value))
            }
            "deg" | "degs" | "degree" | "degrees" => {
                Ok(Self::new(A::factor_from_deg::<T>() * value))
            }
            _ => Err(ParseAngleError::UnknownUnit(unit.to_owned())),
        }
    }
}

fn parse_value<T: FloatElement>(s: &str) -> Result<T, ParseAngleError> {
    let s = s.trim();
    s.parse::<T>()
        .map_err(|_| ParseAngleError::InvalidValue(s.to_owned()))
}

impl<A: AngleUnit, T: FloatElement> FromStr for Angle<A, T> {
    type Err = ParseAngleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> { Self::try_from(s) }
}

impl<A: AngleUnit, T: VectorElement> core::ops::Div for Angle<A, T> {
    type Output = T;

    /// Ratio of two angles of the same unit.
    fn div(self, rhs: Self) -> Self::Output { self.value / rhs.value }
}

impl<A: AngleUnit, T: SignedElement> core::ops::Neg for Angle<A, T> {
    type Output = Self;

    fn neg(self) -> Self::Output { Self::new(-self.value) }
}

impl_ops!(Add, Sub for Angle where A: AngleUnit, T: VectorElement);
impl_ops_with_scalar!(Mul, Div for Angle where A: AngleUnit, T: VectorElement);
impl_scalar_lhs!(Angle where A: AngleUnit; f32, f64, i8, i16, i32, i64, u8, u16, u32, u64);

impl<A: AngleUnit, T: VectorElement + approx::AbsDiffEq> approx::AbsDiffEq for Angle<A, T>
where
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon { T::default_epsilon() }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.value.abs_diff_eq(&other.value, epsilon)
    }
}

impl<A: AngleUnit, T: VectorElement + approx::RelativeEq> approx::RelativeEq for Angle<A, T>
where
    T::Epsilon: Copy,
{
    fn default_max_relative() -> Self::Epsilon { T::default_max_relative() }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.value.relative_eq(&other.value, epsilon, max_relative)
    }
}

impl<A: AngleUnit, T: VectorElement + approx::UlpsEq> approx::UlpsEq for Angle<A, T>
where
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 { T::default_max_ulps() }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.value.ulps_eq(&other.value, epsilon, max_ulps)
    }
}

/// Customized serialization for the `Angle` type.
#[cfg(feature = "serde")]
impl<A: AngleUnit, T: VectorElement> serde::Serialize for Angle<A, T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Customized deserialization for the `Angle` type.
#[cfg(feature = "serde")]
impl<'de, A: AngleUnit, T: FloatElement> serde::Deserialize<'de> for Angle<A, T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct AngleVisitor<A, T>(PhantomData<(A, T)>);

        impl<'de, A: AngleUnit, T: FloatElement> serde::de::Visitor<'de> for AngleVisitor<A, T> {
            type Value = Angle<A, T>;

            fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
                write!(
                    formatter,
                    "a string containing a number and a unit of angle"
                )
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Angle::<A, T>::try_from(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(AngleVisitor::<A, T>(PhantomData))
    }
}
