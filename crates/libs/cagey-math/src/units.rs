//! Scalar quantities tagged with a unit at the type level.

/// Implements a binary operator and its compound assignment form between two
/// quantities sharing the same unit and element type.
macro_rules! impl_ops {
    ($($op:ident),* for $t:ident where $unit:ident: $unit_trait:ident, $elem:ident: $elem_trait:ident) => {
        paste::paste! {
            $(
                impl<$unit: $unit_trait, $elem: $elem_trait> core::ops::$op for $t<$unit, $elem> {
                    type Output = Self;

                    #[inline]
                    fn [<$op:lower>](mut self, rhs: Self) -> Self::Output {
                        core::ops::[<$op Assign>]::[<$op:lower _assign>](&mut self, rhs);
                        self
                    }
                }

                impl<$unit: $unit_trait, $elem: $elem_trait> core::ops::[<$op Assign>] for $t<$unit, $elem> {
                    #[inline]
                    fn [<$op:lower _assign>](&mut self, rhs: Self) {
                        self.value = core::ops::$op::[<$op:lower>](self.value, rhs.value);
                    }
                }
            )*
        }
    };
}

/// Implements scaling of a quantity by a raw scalar, in both the binary and
/// the compound assignment form.
macro_rules! impl_ops_with_scalar {
    ($($op:ident),* for $t:ident where $unit:ident: $unit_trait:ident, $elem:ident: $elem_trait:ident) => {
        paste::paste! {
            $(
                impl<$unit: $unit_trait, $elem: $elem_trait> core::ops::$op<$elem> for $t<$unit, $elem> {
                    type Output = Self;

                    #[inline]
                    fn [<$op:lower>](mut self, rhs: $elem) -> Self::Output {
                        core::ops::[<$op Assign>]::[<$op:lower _assign>](&mut self, rhs);
                        self
                    }
                }

                impl<$unit: $unit_trait, $elem: $elem_trait> core::ops::[<$op Assign>]<$elem> for $t<$unit, $elem> {
                    #[inline]
                    fn [<$op:lower _assign>](&mut self, rhs: $elem) {
                        self.value = core::ops::$op::[<$op:lower>](self.value, rhs);
                    }
                }
            )*
        }
    };
}

/// Implements `scalar * quantity` and the conversion of a quantity back to
/// its raw value for each listed primitive.
macro_rules! impl_scalar_lhs {
    ($t:ident where $unit:ident: $unit_trait:ident; $($prim:ty),*) => {
        $(
            impl<$unit: $unit_trait> core::ops::Mul<$t<$unit, $prim>> for $prim {
                type Output = $t<$unit, $prim>;

                #[inline]
                fn mul(self, rhs: $t<$unit, $prim>) -> Self::Output { rhs * self }
            }

            impl<$unit: $unit_trait> From<$t<$unit, $prim>> for $prim {
                #[inline]
                fn from(quantity: $t<$unit, $prim>) -> Self { quantity.value }
            }
        )*
    };
}

mod angle;

pub use angle::*;

/// Returns the index where the trailing run of ASCII letters starts, or
/// `None` if the whole input is letters.
fn findr_first_non_ascii_alphabetic(s: &[u8]) -> Option<usize> {
    let mut i = s.len();
    while i > 0 {
        if s[i - 1].is_ascii_alphabetic() {
            i -= 1;
        } else {
            return Some(i);
        }
    }
    None
}
