//! Implementations of `std::ops` and comparison traits.

use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::{Arithmetic, Operand, Scalar};

use super::Vector;

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

// More general impl than what the derive generates.
impl<T, U, const N: usize> PartialEq<Vector<U, N>> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U, N>) -> bool {
        self.0 == other.0
    }
}

impl<T, const N: usize> Eq for Vector<T, N> where T: Eq {}

impl<T, U, const N: usize> PartialEq<[U; N]> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.0.eq(other)
    }
}

impl<T, U, const N: usize> PartialEq<Vector<U, N>> for [T; N]
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U, N>) -> bool {
        *self == other.0
    }
}

impl<T, U, const N: usize> PartialEq<[U]> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.0.eq(other)
    }
}

/// Component-wise negation.
impl<T: Scalar, const N: usize> Neg for Vector<T, N> {
    type Output = Self;

    fn neg(self) -> Self {
        self.invert_new()
    }
}

/// Component-wise addition of any [`Operand`].
impl<T: Scalar, O: Operand<T, N>, const N: usize> Add<O> for Vector<T, N> {
    type Output = Self;

    fn add(self, rhs: O) -> Self {
        self.add_new(rhs)
    }
}

impl<T: Scalar, O: Operand<T, N>, const N: usize> AddAssign<O> for Vector<T, N> {
    fn add_assign(&mut self, rhs: O) {
        self.add_mut(rhs);
    }
}

/// Component-wise subtraction of any [`Operand`].
impl<T: Scalar, O: Operand<T, N>, const N: usize> Sub<O> for Vector<T, N> {
    type Output = Self;

    fn sub(self, rhs: O) -> Self {
        self.sub_new(rhs)
    }
}

impl<T: Scalar, O: Operand<T, N>, const N: usize> SubAssign<O> for Vector<T, N> {
    fn sub_assign(&mut self, rhs: O) {
        self.sub_mut(rhs);
    }
}

/// Component-wise multiplication by any [`Operand`].
///
/// With a scalar operand, this scales the vector.
impl<T: Scalar, O: Operand<T, N>, const N: usize> Mul<O> for Vector<T, N> {
    type Output = Self;

    fn mul(self, rhs: O) -> Self {
        self.mul_new(rhs)
    }
}

impl<T: Scalar, O: Operand<T, N>, const N: usize> MulAssign<O> for Vector<T, N> {
    fn mul_assign(&mut self, rhs: O) {
        self.mul_mut(rhs);
    }
}

// NB: there is no `Div` impl, since division by a zero component has to be reported to the caller.

#[cfg(feature = "approx")]
impl<T, const N: usize> approx::AbsDiffEq for Vector<T, N>
where
    T: approx::AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

#[cfg(feature = "approx")]
impl<T, const N: usize> approx::RelativeEq for Vector<T, N>
where
    T: approx::RelativeEq,
    T::Epsilon: Copy,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

#[cfg(feature = "approx")]
impl<T, const N: usize> approx::UlpsEq for Vector<T, N>
where
    T: approx::UlpsEq,
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}
