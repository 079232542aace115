use super::Matrix;
use crate::{
    elem::{SignedElement, VectorElement},
    util::{Dim, SupportedDim},
    vector::Vector,
};
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Element-wise matrix/matrix operators, for owned and borrowed operands.
macro_rules! impl_matrix_ops {
    ($($trait:ident, $op:ident, $assign_trait:ident, $assign_op:ident);*) => {
        $(
            impl<T: VectorElement, const C: usize, const R: usize> $assign_trait for Matrix<T, C, R>
            where
                Dim<C>: SupportedDim,
                Dim<R>: SupportedDim,
            {
                #[inline]
                fn $assign_op(&mut self, rhs: Self) {
                    self.0.iter_mut().zip(rhs.0).for_each(|(a, b)| $assign_trait::$assign_op(a, b));
                }
            }

            impl<T: VectorElement, const C: usize, const R: usize> $assign_trait<&Matrix<T, C, R>>
                for Matrix<T, C, R>
            where
                Dim<C>: SupportedDim,
                Dim<R>: SupportedDim,
            {
                #[inline]
                fn $assign_op(&mut self, rhs: &Matrix<T, C, R>) { self.$assign_op(*rhs) }
            }

            impl<T: VectorElement, const C: usize, const R: usize> $trait for Matrix<T, C, R>
            where
                Dim<C>: SupportedDim,
                Dim<R>: SupportedDim,
            {
                type Output = Self;

                #[inline]
                fn $op(mut self, rhs: Self) -> Self {
                    self.$assign_op(rhs);
                    self
                }
            }

            impl<T: VectorElement, const C: usize, const R: usize> $trait<&Matrix<T, C, R>>
                for Matrix<T, C, R>
            where
                Dim<C>: SupportedDim,
                Dim<R>: SupportedDim,
            {
                type Output = Matrix<T, C, R>;

                #[inline]
                fn $op(self, rhs: &Matrix<T, C, R>) -> Matrix<T, C, R> { self.$op(*rhs) }
            }

            impl<T: VectorElement, const C: usize, const R: usize> $trait<Matrix<T, C, R>>
                for &Matrix<T, C, R>
            where
                Dim<C>: SupportedDim,
                Dim<R>: SupportedDim,
            {
                type Output = Matrix<T, C, R>;

                #[inline]
                fn $op(self, rhs: Matrix<T, C, R>) -> Matrix<T, C, R> { (*self).$op(rhs) }
            }

            impl<T: VectorElement, const C: usize, const R: usize> $trait<&Matrix<T, C, R>>
                for &Matrix<T, C, R>
            where
                Dim<C>: SupportedDim,
                Dim<R>: SupportedDim,
            {
                type Output = Matrix<T, C, R>;

                #[inline]
                fn $op(self, rhs: &Matrix<T, C, R>) -> Matrix<T, C, R> { (*self).$op(*rhs) }
            }
        )*
    };
}

/// Matrix/scalar operators applied to every element.
macro_rules! impl_scalar_ops {
    ($($trait:ident, $op:ident, $assign_trait:ident, $assign_op:ident);*) => {
        $(
            impl<T: VectorElement, const C: usize, const R: usize> $assign_trait<T> for Matrix<T, C, R>
            where
                Dim<C>: SupportedDim,
                Dim<R>: SupportedDim,
            {
                #[inline]
                fn $assign_op(&mut self, rhs: T) {
                    self.as_mut_slice().iter_mut().for_each(|a| *a = $trait::$op(*a, rhs));
                }
            }

            impl<T: VectorElement, const C: usize, const R: usize> $trait<T> for Matrix<T, C, R>
            where
                Dim<C>: SupportedDim,
                Dim<R>: SupportedDim,
            {
                type Output = Self;

                #[inline]
                fn $op(mut self, rhs: T) -> Self {
                    self.$assign_op(rhs);
                    self
                }
            }

            impl<T: VectorElement, const C: usize, const R: usize> $trait<T> for &Matrix<T, C, R>
            where
                Dim<C>: SupportedDim,
                Dim<R>: SupportedDim,
            {
                type Output = Matrix<T, C, R>;

                #[inline]
                fn $op(self, rhs: T) -> Matrix<T, C, R> { (*self).$op(rhs) }
            }
        )*
    };
}

/// `scalar + matrix`, `scalar - matrix` and `scalar * matrix` for each
/// primitive element type.
macro_rules! impl_scalar_lhs_ops {
    ($($t:ty),*) => {
        $(
            impl<const C: usize, const R: usize> Add<Matrix<$t, C, R>> for $t
            where
                Dim<C>: SupportedDim,
                Dim<R>: SupportedDim,
            {
                type Output = Matrix<$t, C, R>;

                #[inline]
                fn add(self, rhs: Matrix<$t, C, R>) -> Self::Output { rhs + self }
            }

            impl<const C: usize, const R: usize> Sub<Matrix<$t, C, R>> for $t
            where
                Dim<C>: SupportedDim,
                Dim<R>: SupportedDim,
            {
                type Output = Matrix<$t, C, R>;

                #[inline]
                fn sub(self, rhs: Matrix<$t, C, R>) -> Self::Output { rhs.map(|x| self - x) }
            }

            impl<const C: usize, const R: usize> Mul<Matrix<$t, C, R>> for $t
            where
                Dim<C>: SupportedDim,
                Dim<R>: SupportedDim,
            {
                type Output = Matrix<$t, C, R>;

                #[inline]
                fn mul(self, rhs: Matrix<$t, C, R>) -> Self::Output { rhs * self }
            }
        )*
    };
}

impl_matrix_ops! {
    Add, add, AddAssign, add_assign;
    Sub, sub, SubAssign, sub_assign
}

impl_scalar_ops! {
    Add, add, AddAssign, add_assign;
    Sub, sub, SubAssign, sub_assign;
    Mul, mul, MulAssign, mul_assign;
    Div, div, DivAssign, div_assign
}

impl_scalar_lhs_ops!(f32, f64, i8, i16, i32, i64, u8, u16, u32, u64);

impl<T: SignedElement, const C: usize, const R: usize> Neg for Matrix<T, C, R>
where
    Dim<C>: SupportedDim,
    Dim<R>: SupportedDim,
{
    type Output = Self;

    #[inline]
    fn neg(self) -> Self { self.map(|x| -x) }
}

impl<T: SignedElement, const C: usize, const R: usize> Neg for &Matrix<T, C, R>
where
    Dim<C>: SupportedDim,
    Dim<R>: SupportedDim,
{
    type Output = Matrix<T, C, R>;

    #[inline]
    fn neg(self) -> Matrix<T, C, R> { -*self }
}

/// Matrix times column vector: the columns of the matrix weighted by the
/// elements of the vector.
impl<T: VectorElement, const C: usize, const R: usize> Mul<Vector<T, C>> for Matrix<T, C, R>
where
    Dim<C>: SupportedDim,
    Dim<R>: SupportedDim,
{
    type Output = Vector<T, R>;

    #[inline]
    fn mul(self, rhs: Vector<T, C>) -> Self::Output { &self * &rhs }
}

impl<T: VectorElement, const C: usize, const R: usize> Mul<&Vector<T, C>> for &Matrix<T, C, R>
where
    Dim<C>: SupportedDim,
    Dim<R>: SupportedDim,
{
    type Output = Vector<T, R>;

    fn mul(self, rhs: &Vector<T, C>) -> Self::Output {
        self.0
            .iter()
            .zip(rhs.iter())
            .fold(Vector::ZERO, |acc, (col, &k)| acc + *col * k)
    }
}

/// Row vector times matrix: the dot product of the vector with each column.
impl<T: VectorElement, const C: usize, const R: usize> Mul<Matrix<T, C, R>> for Vector<T, R>
where
    Dim<C>: SupportedDim,
    Dim<R>: SupportedDim,
{
    type Output = Vector<T, C>;

    #[inline]
    fn mul(self, rhs: Matrix<T, C, R>) -> Self::Output { &self * &rhs }
}

impl<T: VectorElement, const C: usize, const R: usize> Mul<&Matrix<T, C, R>> for &Vector<T, R>
where
    Dim<C>: SupportedDim,
    Dim<R>: SupportedDim,
{
    type Output = Vector<T, C>;

    #[inline]
    fn mul(self, rhs: &Matrix<T, C, R>) -> Self::Output { Vector::from_fn(|c| self.dot(&rhs.0[c])) }
}

/// Matrix product: `Matrix<C, R> * Matrix<K, C> -> Matrix<K, R>`.
impl<T: VectorElement, const C: usize, const R: usize, const K: usize> Mul<Matrix<T, K, C>>
    for Matrix<T, C, R>
where
    Dim<C>: SupportedDim,
    Dim<R>: SupportedDim,
    Dim<K>: SupportedDim,
{
    type Output = Matrix<T, K, R>;

    #[inline]
    fn mul(self, rhs: Matrix<T, K, C>) -> Self::Output { &self * &rhs }
}

impl<T: VectorElement, const C: usize, const R: usize, const K: usize> Mul<&Matrix<T, K, C>>
    for &Matrix<T, C, R>
where
    Dim<C>: SupportedDim,
    Dim<R>: SupportedDim,
    Dim<K>: SupportedDim,
{
    type Output = Matrix<T, K, R>;

    #[inline]
    fn mul(self, rhs: &Matrix<T, K, C>) -> Self::Output {
        Matrix(rhs.0.map(|col| self * &col))
    }
}

impl<T: VectorElement, const C: usize> MulAssign<Matrix<T, C, C>> for Matrix<T, C, C>
where
    Dim<C>: SupportedDim,
{
    #[inline]
    fn mul_assign(&mut self, rhs: Matrix<T, C, C>) { *self = &*self * &rhs; }
}
