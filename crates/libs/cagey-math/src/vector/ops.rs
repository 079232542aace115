use super::Vector;
use crate::{
    elem::{SignedElement, VectorElement},
    util::{Dim, SupportedDim},
};
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Element-wise vector/vector operators, for owned and borrowed operands.
macro_rules! impl_vector_ops {
    ($($trait:ident, $op:ident, $assign_trait:ident, $assign_op:ident);*) => {
        $(
            impl<T: VectorElement, const N: usize> $assign_trait for Vector<T, N>
            where
                Dim<N>: SupportedDim,
            {
                #[inline]
                fn $assign_op(&mut self, rhs: Self) {
                    self.0.iter_mut().zip(rhs.0).for_each(|(a, b)| *a = $trait::$op(*a, b));
                }
            }

            impl<T: VectorElement, const N: usize> $assign_trait<&Vector<T, N>> for Vector<T, N>
            where
                Dim<N>: SupportedDim,
            {
                #[inline]
                fn $assign_op(&mut self, rhs: &Vector<T, N>) { self.$assign_op(*rhs) }
            }

            impl<T: VectorElement, const N: usize> $trait for Vector<T, N>
            where
                Dim<N>: SupportedDim,
            {
                type Output = Self;

                #[inline]
                fn $op(mut self, rhs: Self) -> Self {
                    self.$assign_op(rhs);
                    self
                }
            }

            impl<T: VectorElement, const N: usize> $trait<&Vector<T, N>> for Vector<T, N>
            where
                Dim<N>: SupportedDim,
            {
                type Output = Vector<T, N>;

                #[inline]
                fn $op(self, rhs: &Vector<T, N>) -> Vector<T, N> { self.$op(*rhs) }
            }

            impl<T: VectorElement, const N: usize> $trait<Vector<T, N>> for &Vector<T, N>
            where
                Dim<N>: SupportedDim,
            {
                type Output = Vector<T, N>;

                #[inline]
                fn $op(self, rhs: Vector<T, N>) -> Vector<T, N> { (*self).$op(rhs) }
            }

            impl<T: VectorElement, const N: usize> $trait<&Vector<T, N>> for &Vector<T, N>
            where
                Dim<N>: SupportedDim,
            {
                type Output = Vector<T, N>;

                #[inline]
                fn $op(self, rhs: &Vector<T, N>) -> Vector<T, N> { (*self).$op(*rhs) }
            }
        )*
    };
}

/// Vector/scalar operators, for owned and borrowed vectors.
macro_rules! impl_scalar_ops {
    ($($trait:ident, $op:ident, $assign_trait:ident, $assign_op:ident);*) => {
        $(
            impl<T: VectorElement, const N: usize> $assign_trait<T> for Vector<T, N>
            where
                Dim<N>: SupportedDim,
            {
                #[inline]
                fn $assign_op(&mut self, rhs: T) {
                    self.0.iter_mut().for_each(|a| *a = $trait::$op(*a, rhs));
                }
            }

            impl<T: VectorElement, const N: usize> $trait<T> for Vector<T, N>
            where
                Dim<N>: SupportedDim,
            {
                type Output = Self;

                #[inline]
                fn $op(mut self, rhs: T) -> Self {
                    self.$assign_op(rhs);
                    self
                }
            }

            impl<T: VectorElement, const N: usize> $trait<T> for &Vector<T, N>
            where
                Dim<N>: SupportedDim,
            {
                type Output = Vector<T, N>;

                #[inline]
                fn $op(self, rhs: T) -> Vector<T, N> { (*self).$op(rhs) }
            }
        )*
    };
}

/// `scalar * vector` and `scalar / vector` for each primitive element type.
macro_rules! impl_scalar_lhs_ops {
    ($($t:ty),*) => {
        $(
            impl<const N: usize> Mul<Vector<$t, N>> for $t
            where
                Dim<N>: SupportedDim,
            {
                type Output = Vector<$t, N>;

                #[inline]
                fn mul(self, rhs: Vector<$t, N>) -> Self::Output { rhs * self }
            }

            impl<const N: usize> Mul<&Vector<$t, N>> for $t
            where
                Dim<N>: SupportedDim,
            {
                type Output = Vector<$t, N>;

                #[inline]
                fn mul(self, rhs: &Vector<$t, N>) -> Self::Output { *rhs * self }
            }

            impl<const N: usize> Div<Vector<$t, N>> for $t
            where
                Dim<N>: SupportedDim,
            {
                type Output = Vector<$t, N>;

                #[inline]
                fn div(self, rhs: Vector<$t, N>) -> Self::Output { rhs.map(|x| self / x) }
            }

            impl<const N: usize> Div<&Vector<$t, N>> for $t
            where
                Dim<N>: SupportedDim,
            {
                type Output = Vector<$t, N>;

                #[inline]
                fn div(self, rhs: &Vector<$t, N>) -> Self::Output { self / *rhs }
            }
        )*
    };
}

impl_vector_ops! {
    Add, add, AddAssign, add_assign;
    Sub, sub, SubAssign, sub_assign
}

impl_scalar_ops! {
    Mul, mul, MulAssign, mul_assign;
    Div, div, DivAssign, div_assign
}

impl_scalar_lhs_ops!(f32, f64, i8, i16, i32, i64, u8, u16, u32, u64);

impl<T: SignedElement, const N: usize> Neg for Vector<T, N>
where
    Dim<N>: SupportedDim,
{
    type Output = Self;

    #[inline]
    fn neg(self) -> Self { self.map(|x| -x) }
}

impl<T: SignedElement, const N: usize> Neg for &Vector<T, N>
where
    Dim<N>: SupportedDim,
{
    type Output = Vector<T, N>;

    #[inline]
    fn neg(self) -> Vector<T, N> { -*self }
}
