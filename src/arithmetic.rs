//! Component-wise arithmetic.
//!
//! Each operation comes in three forms that only differ in where the result goes:
//!
//! - `*_mut` overwrites the receiver and returns it again for chaining.
//! - `*_into` writes into a caller-supplied [`WriteVector`] and returns it.
//! - `*_new` returns a fresh value of the receiver's concrete type (see [`Instantiate`]).
//!
//! All forms accept every [`Operand`] shape and compute their result with the same kernel, from
//! component arrays copied out of both inputs before anything is written.

use std::array;

use crate::{
    error::{Result, VectorError},
    Instantiate, Operand, ReadVector, Scalar, WriteVector,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Add,
    Sub,
    RevSub,
    Mul,
}

fn combine<T: Scalar, const N: usize>(op: Op, lhs: [T; N], rhs: [T; N]) -> [T; N] {
    array::from_fn(|i| {
        let (l, r) = (lhs[i], rhs[i]);
        match op {
            Op::Add => l + r,
            Op::Sub => l - r,
            Op::RevSub => r - l,
            Op::Mul => l * r,
        }
    })
}

/// Divides `numerator` by `denominator` component-wise, after checking every divisor.
fn divide<T: Scalar, const N: usize>(numerator: [T; N], denominator: [T; N]) -> Result<[T; N]> {
    if let Some(index) = denominator.iter().position(|&d| d == T::ZERO) {
        return Err(VectorError::DivisionByZero { index });
    }
    Ok(array::from_fn(|i| numerator[i] / denominator[i]))
}

/// Component-wise arithmetic on readable vectors.
///
/// This trait is implemented for every [`ReadVector`]. The `*_mut` forms additionally require the
/// receiver to implement [`WriteVector`], and the `*_new` forms require [`Instantiate`].
///
/// # Examples
///
/// ```
/// # use zaru_vecmath::*;
/// let mut v = vec2(1.0, 2.0);
/// v.add_mut(1.0).mul_mut([2.0, 0.5]);
/// assert_eq!(v, vec2(4.0, 1.5));
///
/// let mut out = [0.0; 2];
/// v.rev_sub_into(10.0, &mut out);
/// assert_eq!(out, [6.0, 8.5]);
///
/// assert_eq!(v.div_new(0.5), Ok(vec2(8.0, 3.0)));
/// assert!(v.div_new([1.0, 0.0]).is_err());
/// ```
pub trait Arithmetic<T: Scalar, const N: usize>: ReadVector<T, N> {
    /// Adds `rhs` to `self`.
    fn add_mut(&mut self, rhs: impl Operand<T, N>) -> &mut Self
    where
        Self: WriteVector<T, N>,
    {
        let result = combine(Op::Add, self.to_array(), rhs.into_components());
        self.set_array(result);
        self
    }

    /// Writes `self + rhs` into `out`.
    fn add_into<'a, W>(&self, rhs: impl Operand<T, N>, out: &'a mut W) -> &'a mut W
    where
        W: WriteVector<T, N> + ?Sized,
    {
        out.set_array(combine(Op::Add, self.to_array(), rhs.into_components()));
        out
    }

    /// Returns `self + rhs`.
    fn add_new(&self, rhs: impl Operand<T, N>) -> Self
    where
        Self: Instantiate<T, N>,
    {
        self.instantiate(combine(Op::Add, self.to_array(), rhs.into_components()))
    }

    /// Subtracts `rhs` from `self`.
    fn sub_mut(&mut self, rhs: impl Operand<T, N>) -> &mut Self
    where
        Self: WriteVector<T, N>,
    {
        let result = combine(Op::Sub, self.to_array(), rhs.into_components());
        self.set_array(result);
        self
    }

    /// Writes `self - rhs` into `out`.
    fn sub_into<'a, W>(&self, rhs: impl Operand<T, N>, out: &'a mut W) -> &'a mut W
    where
        W: WriteVector<T, N> + ?Sized,
    {
        out.set_array(combine(Op::Sub, self.to_array(), rhs.into_components()));
        out
    }

    /// Returns `self - rhs`.
    fn sub_new(&self, rhs: impl Operand<T, N>) -> Self
    where
        Self: Instantiate<T, N>,
    {
        self.instantiate(combine(Op::Sub, self.to_array(), rhs.into_components()))
    }

    /// Replaces `self` with `rhs - self`.
    fn rev_sub_mut(&mut self, rhs: impl Operand<T, N>) -> &mut Self
    where
        Self: WriteVector<T, N>,
    {
        let result = combine(Op::RevSub, self.to_array(), rhs.into_components());
        self.set_array(result);
        self
    }

    /// Writes `rhs - self` into `out`.
    fn rev_sub_into<'a, W>(&self, rhs: impl Operand<T, N>, out: &'a mut W) -> &'a mut W
    where
        W: WriteVector<T, N> + ?Sized,
    {
        out.set_array(combine(Op::RevSub, self.to_array(), rhs.into_components()));
        out
    }

    /// Returns `rhs - self`.
    fn rev_sub_new(&self, rhs: impl Operand<T, N>) -> Self
    where
        Self: Instantiate<T, N>,
    {
        self.instantiate(combine(Op::RevSub, self.to_array(), rhs.into_components()))
    }

    /// Multiplies `self` by `rhs` component-wise.
    fn mul_mut(&mut self, rhs: impl Operand<T, N>) -> &mut Self
    where
        Self: WriteVector<T, N>,
    {
        let result = combine(Op::Mul, self.to_array(), rhs.into_components());
        self.set_array(result);
        self
    }

    /// Writes `self * rhs` into `out`.
    fn mul_into<'a, W>(&self, rhs: impl Operand<T, N>, out: &'a mut W) -> &'a mut W
    where
        W: WriteVector<T, N> + ?Sized,
    {
        out.set_array(combine(Op::Mul, self.to_array(), rhs.into_components()));
        out
    }

    /// Returns `self * rhs`.
    fn mul_new(&self, rhs: impl Operand<T, N>) -> Self
    where
        Self: Instantiate<T, N>,
    {
        self.instantiate(combine(Op::Mul, self.to_array(), rhs.into_components()))
    }

    /// Divides `self` by `rhs` component-wise.
    ///
    /// Fails with [`VectorError::DivisionByZero`] if any component of `rhs` is zero, in which case
    /// `self` is left unchanged.
    fn div_mut(&mut self, rhs: impl Operand<T, N>) -> Result<&mut Self>
    where
        Self: WriteVector<T, N>,
    {
        let result = divide(self.to_array(), rhs.into_components())?;
        self.set_array(result);
        Ok(self)
    }

    /// Writes `self / rhs` into `out`.
    ///
    /// Fails with [`VectorError::DivisionByZero`] if any component of `rhs` is zero, in which case
    /// `out` is left unchanged.
    fn div_into<'a, W>(&self, rhs: impl Operand<T, N>, out: &'a mut W) -> Result<&'a mut W>
    where
        W: WriteVector<T, N> + ?Sized,
    {
        out.set_array(divide(self.to_array(), rhs.into_components())?);
        Ok(out)
    }

    /// Returns `self / rhs`.
    ///
    /// Fails with [`VectorError::DivisionByZero`] if any component of `rhs` is zero.
    fn div_new(&self, rhs: impl Operand<T, N>) -> Result<Self>
    where
        Self: Instantiate<T, N>,
    {
        Ok(self.instantiate(divide(self.to_array(), rhs.into_components())?))
    }

    /// Replaces `self` with `rhs / self`.
    ///
    /// Fails with [`VectorError::DivisionByZero`] if any component of `self` is zero, in which
    /// case `self` is left unchanged.
    fn rev_div_mut(&mut self, rhs: impl Operand<T, N>) -> Result<&mut Self>
    where
        Self: WriteVector<T, N>,
    {
        let result = divide(rhs.into_components(), self.to_array())?;
        self.set_array(result);
        Ok(self)
    }

    /// Writes `rhs / self` into `out`.
    fn rev_div_into<'a, W>(&self, rhs: impl Operand<T, N>, out: &'a mut W) -> Result<&'a mut W>
    where
        W: WriteVector<T, N> + ?Sized,
    {
        out.set_array(divide(rhs.into_components(), self.to_array())?);
        Ok(out)
    }

    /// Returns `rhs / self`.
    fn rev_div_new(&self, rhs: impl Operand<T, N>) -> Result<Self>
    where
        Self: Instantiate<T, N>,
    {
        Ok(self.instantiate(divide(rhs.into_components(), self.to_array())?))
    }

    /// Negates every component of `self`, by multiplying it with -1.
    fn invert_mut(&mut self) -> &mut Self
    where
        Self: WriteVector<T, N>,
    {
        self.mul_mut([-T::ONE; N])
    }

    /// Writes `self * -1` into `out`.
    fn invert_into<'a, W>(&self, out: &'a mut W) -> &'a mut W
    where
        W: WriteVector<T, N> + ?Sized,
    {
        self.mul_into([-T::ONE; N], out)
    }

    /// Returns `self * -1`.
    fn invert_new(&self) -> Self
    where
        Self: Instantiate<T, N>,
    {
        self.mul_new([-T::ONE; N])
    }

    /// Replaces `self` with `1 - self`.
    fn inverse_mut(&mut self) -> &mut Self
    where
        Self: WriteVector<T, N>,
    {
        self.rev_sub_mut([T::ONE; N])
    }

    /// Writes `1 - self` into `out`.
    fn inverse_into<'a, W>(&self, out: &'a mut W) -> &'a mut W
    where
        W: WriteVector<T, N> + ?Sized,
    {
        self.rev_sub_into([T::ONE; N], out)
    }

    /// Returns `1 - self`.
    fn inverse_new(&self) -> Self
    where
        Self: Instantiate<T, N>,
    {
        self.rev_sub_new([T::ONE; N])
    }

    /// Replaces `self` with `base - self`.
    fn inverse_with_mut(&mut self, base: impl Operand<T, N>) -> &mut Self
    where
        Self: WriteVector<T, N>,
    {
        self.rev_sub_mut(base)
    }

    /// Writes `base - self` into `out`.
    fn inverse_with_into<'a, W>(&self, base: impl Operand<T, N>, out: &'a mut W) -> &'a mut W
    where
        W: WriteVector<T, N> + ?Sized,
    {
        self.rev_sub_into(base, out)
    }

    /// Returns `base - self`.
    fn inverse_with_new(&self, base: impl Operand<T, N>) -> Self
    where
        Self: Instantiate<T, N>,
    {
        self.rev_sub_new(base)
    }
}

impl<T, V, const N: usize> Arithmetic<T, N> for V
where
    T: Scalar,
    V: ReadVector<T, N> + ?Sized,
{
}

#[cfg(test)]
mod tests {
    use crate::{vec2, vec3, vec4, ErrorKind, Vec2d, Vec3d};

    use super::*;

    #[test]
    fn formulas() {
        let a = vec3(6.0, -4.0, 1.5);
        let b = vec3(2.0, 8.0, -0.5);
        assert_eq!(a.add_new(b), vec3(8.0, 4.0, 1.0));
        assert_eq!(a.sub_new(b), vec3(4.0, -12.0, 2.0));
        assert_eq!(a.rev_sub_new(b), vec3(-4.0, 12.0, -2.0));
        assert_eq!(a.mul_new(b), vec3(12.0, -32.0, -0.75));
        assert_eq!(a.div_new(b), Ok(vec3(3.0, -0.5, -3.0)));
        assert_eq!(a.rev_div_new(b), Ok(vec3(2.0 / 6.0, -2.0, -0.5 / 1.5)));
    }

    #[test]
    fn division_by_zero_reports_first_index() {
        let a = vec4(1.0f32, 2.0, 3.0, 4.0);
        let err = a.div_new([1.0, 0.0, 5.0, 0.0]).unwrap_err();
        assert_eq!(err, VectorError::DivisionByZero { index: 1 });
        assert_eq!(err.kind(), ErrorKind::DivisionByZero);

        let err = vec4(1.0f32, 2.0, -0.0, 0.0).rev_div_new(1.0f32).unwrap_err();
        assert_eq!(err, VectorError::DivisionByZero { index: 2 });
    }

    #[test]
    fn failed_division_writes_nothing() {
        let mut v = vec2(3.0, 4.0);
        assert!(v.div_mut([2.0, 0.0]).is_err());
        assert_eq!(v, vec2(3.0, 4.0));

        let mut out = [9.0; 2];
        assert!(v.div_into(0.0, &mut out).is_err());
        assert_eq!(out, [9.0; 2]);

        let mut z = vec2(0.0, 1.0);
        assert!(z.rev_div_mut(5.0).is_err());
        assert_eq!(z, vec2(0.0, 1.0));
        assert!(z.rev_div_into(5.0, &mut out).is_err());
        assert_eq!(out, [9.0; 2]);
    }

    #[test]
    fn into_returns_sink() {
        let a = vec3(1.0, 2.0, 3.0);
        let mut out = Vec3d::ZERO;
        a.add_into(1.0, &mut out).mul_mut(2.0);
        assert_eq!(out, vec3(4.0, 6.0, 8.0));

        let mut raw = [0.0; 3];
        assert_eq!(*a.rev_div_into(6.0, &mut raw).unwrap(), [6.0, 3.0, 2.0]);

        let mut out = Vec2d::splat(f64::NAN);
        vec2(6.0, 8.0).div_into([2.0, 4.0], &mut out).unwrap();
        assert_eq!(out, vec2(3.0, 2.0));
        vec2(6.0, 8.0).div_into(-2.0, &mut out).unwrap().add_mut(1.0);
        assert_eq!(out, vec2(-2.0, -3.0));
    }

    #[test]
    fn receiver_as_operand() {
        let v = vec3(1.5, -2.0, 4.0);
        assert_eq!(v.add_new(&v), vec3(3.0, -4.0, 8.0));
        assert_eq!(v.sub_new(&v), Vec3d::ZERO);
        assert_eq!(v.div_new(&v), Ok(vec3(1.0, 1.0, 1.0)));

        let mut m = v;
        m.mul_mut(m);
        assert_eq!(m, v.mul_new(&v));

        let mut out = Vec3d::ZERO;
        v.rev_sub_into(&v, &mut out);
        assert_eq!(out, Vec3d::ZERO);
    }

    #[test]
    fn chaining() {
        let mut v = vec2(1.0, 1.0);
        v.add_mut(1.0).sub_mut([0.5, 1.5]).rev_sub_mut(2.0).mul_mut((4.0, 2.0));
        assert_eq!(v, vec2(2.0, 3.0));
        v.div_mut(2.0).unwrap().rev_div_mut(3.0).unwrap();
        assert_eq!(v, vec2(3.0, 2.0));
    }

    #[test]
    fn inversions() {
        let v = vec3(0.25, -1.0, 3.0);
        assert_eq!(v.invert_new(), vec3(-0.25, 1.0, -3.0));
        assert_eq!(v.inverse_new(), vec3(0.75, 2.0, -2.0));
        assert_eq!(v.inverse_with_new(10.0), vec3(9.75, 11.0, 7.0));

        let mut m = v;
        m.invert_mut().inverse_mut();
        assert_eq!(m, vec3(1.25, 0.0, 4.0));

        let mut out = [0.0; 3];
        v.inverse_with_into([1.0, 2.0, 3.0], &mut out);
        assert_eq!(out, [0.75, 3.0, 0.0]);
        v.invert_into(&mut out);
        assert_eq!(out, [-0.25, 1.0, -3.0]);
        v.inverse_into(&mut out);
        assert_eq!(out, [0.75, 2.0, -2.0]);

        let mut w = v;
        w.inverse_with_mut(v);
        assert_eq!(w, Vec3d::ZERO);
    }

    #[test]
    fn arrays_as_receivers() {
        let a = [1.0f32, 2.0];
        assert_eq!(a.add_new(1.0f32), [2.0, 3.0]);
        let mut m = a;
        m.mul_mut(vec2(3.0f32, 3.0));
        assert_eq!(m, [3.0, 6.0]);
    }
}
