//! Vector length and normalization.
//!
//! Operations come in up to three flavors:
//!
//! - The plain form (eg. [`Magnitude::reciprocal_length`]) fails with a division-by-zero error
//!   when the vector has zero length.
//! - The `*_safe` form checks [`Magnitude::is_zero`] first and substitutes `0` (or leaves the
//!   vector unchanged) instead of failing.
//! - The `*_safe_with_margin` form does the same, but treats every component within a tolerance
//!   of zero as zero (see [`Magnitude::is_zero_with_margin`]).

use crate::{
    error::{check_tolerance, Result, VectorError},
    Arithmetic, Instantiate, Operand, Scalar, WriteVector,
};

fn within_margin<T: Scalar, const N: usize>(components: [T; N], margin: T) -> bool {
    components.into_iter().all(|c| -margin <= c && c <= margin)
}

/// Computes the length as `scale * sqrt(sum((c / scale)^2))`, where `scale` is the largest
/// absolute component, so that the intermediate sum neither overflows nor underflows.
fn scaled_length<T: Scalar, const N: usize>(components: [T; N]) -> T {
    let scale = components
        .into_iter()
        .fold(T::ZERO, |acc, c| acc.max(c.max(-c)));
    if scale == T::ZERO || !scale.is_finite() {
        return components
            .into_iter()
            .fold(T::ZERO, |acc, c| acc + c * c)
            .sqrt();
    }
    let sum = components.into_iter().fold(T::ZERO, |acc, c| {
        let c = c / scale;
        acc + c * c
    });
    scale * sum.sqrt()
}

/// Length, zero detection and normalization of readable vectors.
///
/// This trait is implemented for every [`ReadVector`][crate::ReadVector].
///
/// # Examples
///
/// ```
/// # use zaru_vecmath::*;
/// let v = vec2(0.0, 4.0);
/// assert_eq!(v.length(), 4.0);
/// assert_eq!(v.reciprocal_length(), Ok(0.25));
/// assert_eq!(v.normal_new(), Ok(vec2(0.0, 1.0)));
///
/// let zero = Vec2d::ZERO;
/// assert!(zero.reciprocal_length().is_err());
/// assert_eq!(zero.reciprocal_length_safe(), 0.0);
/// assert_eq!(zero.normal_safe_new(), zero);
/// ```
pub trait Magnitude<T: Scalar, const N: usize>: Arithmetic<T, N> {
    /// Computes the dot product of `self` and `rhs`.
    fn dot(&self, rhs: impl Operand<T, N>) -> T {
        self.to_array()
            .into_iter()
            .zip(rhs.into_components())
            .fold(T::ZERO, |acc, (a, b)| acc + a * b)
    }

    /// Returns the squared length of `self`.
    ///
    /// This is the plain sum of squares. It overflows to infinity (or underflows to zero) when the
    /// components are large (or small) enough, even if the length itself is representable.
    fn squared_length(&self) -> T {
        self.to_array()
            .into_iter()
            .fold(T::ZERO, |acc, c| acc + c * c)
    }

    /// Returns the length of `self`.
    ///
    /// When the squared length is zero or not finite, the components are rescaled by the largest
    /// absolute component first. The result is only infinite if the length exceeds the range of
    /// `T`.
    fn length(&self) -> T {
        let squared = self.squared_length();
        if squared != T::ZERO && squared.is_finite() {
            return squared.sqrt();
        }
        scaled_length(self.to_array())
    }

    /// Returns `1 / length`.
    ///
    /// Fails with [`VectorError::ZeroLength`] if the length is zero. That includes vectors so short
    /// that `1 / length` overflows to infinity (eg. a vector whose only non-zero component is
    /// subnormal).
    fn reciprocal_length(&self) -> Result<T> {
        let length = self.length();
        let rlen = T::ONE / length;
        if length == T::ZERO || (length > T::ZERO && !rlen.is_finite()) {
            return Err(VectorError::ZeroLength);
        }
        Ok(rlen)
    }

    /// Returns whether every component is exactly zero.
    ///
    /// Both `0.0` and `-0.0` count as zero.
    fn is_zero(&self) -> bool {
        self.to_array().into_iter().all(|c| c == T::ZERO)
    }

    /// Returns whether every component lies in the closed interval `[-tolerance, tolerance]`.
    ///
    /// Fails with [`VectorError::NegativeTolerance`] if `tolerance` is negative or `NaN`.
    fn is_zero_with_margin(&self, tolerance: T) -> Result<bool> {
        let tolerance = check_tolerance(tolerance)?;
        Ok(within_margin(self.to_array(), tolerance))
    }

    /// Returns whether every component is within [`Scalar::DEFAULT_MARGIN`] of zero.
    ///
    /// Equivalent to `is_zero_with_margin(T::DEFAULT_MARGIN)`.
    fn is_nearly_zero(&self) -> bool {
        within_margin(self.to_array(), T::DEFAULT_MARGIN)
    }

    /// Returns the squared length, or `0` if `self` is the zero vector.
    fn squared_length_safe(&self) -> T {
        if self.is_zero() {
            return T::ZERO;
        }
        self.squared_length()
    }

    /// Returns the length, or `0` if `self` is the zero vector.
    fn length_safe(&self) -> T {
        if self.is_zero() {
            return T::ZERO;
        }
        self.length()
    }

    /// Returns `1 / length`, or `0` if the length is zero.
    fn reciprocal_length_safe(&self) -> T {
        if self.is_zero() {
            log::trace!("reciprocal length of zero vector, substituting 0");
            return T::ZERO;
        }
        match self.reciprocal_length() {
            Ok(rlen) => rlen,
            Err(_) => {
                log::trace!("length of {:?} too small to invert, substituting 0", self.to_array());
                T::ZERO
            }
        }
    }

    /// Returns the squared length, or `0` if every component is within `tolerance` of zero.
    fn squared_length_safe_with_margin(&self, tolerance: T) -> Result<T> {
        if self.is_zero_with_margin(tolerance)? {
            return Ok(T::ZERO);
        }
        Ok(self.squared_length())
    }

    /// Returns the length, or `0` if every component is within `tolerance` of zero.
    fn length_safe_with_margin(&self, tolerance: T) -> Result<T> {
        if self.is_zero_with_margin(tolerance)? {
            return Ok(T::ZERO);
        }
        Ok(self.length())
    }

    /// Returns `1 / length`, or `0` if every component is within `tolerance` of zero.
    fn reciprocal_length_safe_with_margin(&self, tolerance: T) -> Result<T> {
        if self.is_zero_with_margin(tolerance)? {
            log::trace!("reciprocal length within margin {tolerance} of zero, substituting 0");
            return Ok(T::ZERO);
        }
        Ok(self.reciprocal_length_safe())
    }

    /// Scales `self` to unit length.
    ///
    /// Fails with [`VectorError::ZeroLength`] (leaving `self` unchanged) if the length is zero.
    fn normal_mut(&mut self) -> Result<&mut Self>
    where
        Self: WriteVector<T, N>,
    {
        let rlen = self.reciprocal_length()?;
        Ok(self.mul_mut([rlen; N]))
    }

    /// Writes `self` scaled to unit length into `out`.
    ///
    /// Fails with [`VectorError::ZeroLength`] (leaving `out` unchanged) if the length is zero.
    fn normal_into<'a, W>(&self, out: &'a mut W) -> Result<&'a mut W>
    where
        W: WriteVector<T, N> + ?Sized,
    {
        let rlen = self.reciprocal_length()?;
        Ok(self.mul_into([rlen; N], out))
    }

    /// Returns `self` scaled to unit length.
    ///
    /// Fails with [`VectorError::ZeroLength`] if the length is zero.
    fn normal_new(&self) -> Result<Self>
    where
        Self: Instantiate<T, N>,
    {
        let rlen = self.reciprocal_length()?;
        Ok(self.mul_new([rlen; N]))
    }

    /// Scales `self` to unit length, leaving it unchanged if its length is zero.
    fn normal_safe_mut(&mut self) -> &mut Self
    where
        Self: WriteVector<T, N>,
    {
        match self.reciprocal_length() {
            Ok(rlen) => self.mul_mut([rlen; N]),
            Err(_) => {
                log::trace!("normalizing zero-length vector, leaving it unchanged");
                self
            }
        }
    }

    /// Writes `self` scaled to unit length into `out`, or an unchanged copy of `self` if its
    /// length is zero.
    fn normal_safe_into<'a, W>(&self, out: &'a mut W) -> &'a mut W
    where
        W: WriteVector<T, N> + ?Sized,
    {
        match self.reciprocal_length() {
            Ok(rlen) => self.mul_into([rlen; N], out),
            Err(_) => {
                log::trace!("normalizing zero-length vector, copying it unchanged");
                out.set_array(self.to_array());
                out
            }
        }
    }

    /// Returns `self` scaled to unit length, or an unchanged copy of `self` if its length is zero.
    fn normal_safe_new(&self) -> Self
    where
        Self: Instantiate<T, N>,
    {
        match self.reciprocal_length() {
            Ok(rlen) => self.mul_new([rlen; N]),
            Err(_) => {
                log::trace!("normalizing zero-length vector, copying it unchanged");
                self.new_with(self)
            }
        }
    }

    /// Scales `self` to unit length, leaving it unchanged if every component is within
    /// `tolerance` of zero.
    fn normal_safe_with_margin_mut(&mut self, tolerance: T) -> Result<&mut Self>
    where
        Self: WriteVector<T, N>,
    {
        if self.is_zero_with_margin(tolerance)? {
            log::trace!("normalizing vector within margin {tolerance} of zero, leaving it unchanged");
            return Ok(self);
        }
        Ok(self.normal_safe_mut())
    }

    /// Writes `self` scaled to unit length into `out`, or an unchanged copy of `self` if every
    /// component is within `tolerance` of zero.
    fn normal_safe_with_margin_into<'a, W>(&self, tolerance: T, out: &'a mut W) -> Result<&'a mut W>
    where
        W: WriteVector<T, N> + ?Sized,
    {
        if self.is_zero_with_margin(tolerance)? {
            log::trace!("normalizing vector within margin {tolerance} of zero, copying it unchanged");
            out.set_array(self.to_array());
            return Ok(out);
        }
        Ok(self.normal_safe_into(out))
    }

    /// Returns `self` scaled to unit length, or an unchanged copy of `self` if every component is
    /// within `tolerance` of zero.
    fn normal_safe_with_margin_new(&self, tolerance: T) -> Result<Self>
    where
        Self: Instantiate<T, N>,
    {
        if self.is_zero_with_margin(tolerance)? {
            log::trace!("normalizing vector within margin {tolerance} of zero, copying it unchanged");
            return Ok(self.new_with(self));
        }
        Ok(self.normal_safe_new())
    }
}

impl<T, V, const N: usize> Magnitude<T, N> for V
where
    T: Scalar,
    V: Arithmetic<T, N> + ?Sized,
{
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::{test::init_logger, vec2, vec3, vec4, ErrorKind, Vec3d, Vec3f, Vec4d};

    use super::*;

    #[test]
    fn lengths() {
        let v = vec3(2.0, -3.0, 6.0);
        assert_eq!(v.squared_length(), 49.0);
        assert_eq!(v.length(), 7.0);
        assert_relative_eq!(v.reciprocal_length().unwrap(), 1.0 / 7.0);
        assert_eq!(v.dot(vec3(1.0, 1.0, 1.0)), 5.0);
        assert_eq!(v.dot(&v), v.squared_length());
        assert_eq!(v.length_safe(), 7.0);
        assert_eq!(v.squared_length_safe(), 49.0);
    }

    #[test]
    fn zero_vector() {
        init_logger();

        let z = Vec4d::ZERO;
        assert!(z.is_zero());
        assert_eq!(z.length(), 0.0);
        assert_eq!(z.length_safe(), 0.0);
        assert_eq!(z.squared_length_safe(), 0.0);
        assert_eq!(z.reciprocal_length_safe(), 0.0);
        assert_eq!(z.reciprocal_length(), Err(VectorError::ZeroLength));
        assert_eq!(
            z.normal_new().unwrap_err().kind(),
            ErrorKind::DivisionByZero
        );
        assert_eq!(z.normal_safe_new(), z);

        let neg = vec2(-0.0f32, 0.0);
        assert!(neg.is_zero());
        assert_eq!(neg.reciprocal_length_safe(), 0.0);
    }

    #[cfg(feature = "approx")]
    #[test]
    fn tiny_lengths() {
        init_logger();

        let tiny = vec2(1e-30f32, 0.0);
        assert!(!tiny.is_zero());
        assert_eq!(tiny.squared_length(), 0.0);
        assert_eq!(tiny.length(), 1e-30);
        assert_eq!(tiny.length_safe(), 1e-30);
        assert_relative_eq!(tiny.reciprocal_length().unwrap(), 1e30, max_relative = 1e-6);
        assert_relative_eq!(tiny.normal_new().unwrap(), vec2(1.0, 0.0), epsilon = 1e-6);
        assert_relative_eq!(tiny.normal_safe_new(), vec2(1.0, 0.0), epsilon = 1e-6);

        let subnormal = vec2(f32::MIN_POSITIVE / 1024.0, 0.0);
        assert_eq!(subnormal.length(), subnormal[0]);
        assert_eq!(subnormal.reciprocal_length(), Err(VectorError::ZeroLength));
        assert_eq!(subnormal.reciprocal_length_safe(), 0.0);
        assert_eq!(subnormal.normal_safe_new(), subnormal);
        assert!(subnormal.normal_new().is_err());
    }

    #[cfg(feature = "approx")]
    #[test]
    fn huge_lengths() {
        let huge = vec2(1e30f32, 1e30);
        assert_eq!(huge.squared_length(), f32::INFINITY);
        assert_relative_eq!(huge.length(), 1e30 * 2f32.sqrt());
        let half = 0.5f32.sqrt();
        assert_relative_eq!(huge.normal_new().unwrap(), vec2(half, half), epsilon = 1e-6);

        let mut m = vec3(-1e200f64, 0.0, 1e200);
        m.normal_safe_mut();
        assert_relative_eq!(m, vec3(-(0.5f64.sqrt()), 0.0, 0.5f64.sqrt()), epsilon = 1e-12);

        let long = vec2(1e200f64, 0.0);
        assert_eq!(long.length(), 1e200);
        assert_relative_eq!(long.reciprocal_length().unwrap(), 1e-200);

        assert_eq!(vec2(f64::MAX, f64::MAX).length(), f64::INFINITY);
        assert_eq!(vec2(f64::INFINITY, 1.0).length(), f64::INFINITY);
        assert!(vec2(f64::NAN, 1e200).length().is_nan());
    }

    #[test]
    fn margin() {
        let v = vec3(0.5, -0.5, 0.25);
        assert_eq!(v.is_zero_with_margin(0.5), Ok(true));
        assert_eq!(v.is_zero_with_margin(0.4), Ok(false));
        assert_eq!(v.is_zero_with_margin(0.0), Ok(false));
        assert_eq!(Vec3d::ZERO.is_zero_with_margin(0.0), Ok(true));

        assert_eq!(v.length_safe_with_margin(0.5), Ok(0.0));
        assert_eq!(v.squared_length_safe_with_margin(0.5), Ok(0.0));
        assert_eq!(v.reciprocal_length_safe_with_margin(0.5), Ok(0.0));
        assert_eq!(v.squared_length_safe_with_margin(0.1), Ok(0.5625));
        assert_eq!(v.length_safe_with_margin(0.1), Ok(0.75));
        assert_relative_eq!(
            v.reciprocal_length_safe_with_margin(0.1).unwrap(),
            1.0 / 0.75
        );
    }

    #[test]
    fn invalid_margin() {
        let v = vec2(1.0, 2.0);
        for tolerance in [-1.0, -f64::MIN_POSITIVE, f64::NAN] {
            let err = v.is_zero_with_margin(tolerance).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidArgument);
            assert!(v.length_safe_with_margin(tolerance).is_err());
            assert!(v.squared_length_safe_with_margin(tolerance).is_err());
            assert!(v.reciprocal_length_safe_with_margin(tolerance).is_err());
            assert!(v.normal_safe_with_margin_new(tolerance).is_err());
        }
    }

    #[test]
    fn nearly_zero() {
        assert!(vec2(f32::EPSILON, -f32::EPSILON).is_nearly_zero());
        assert!(!vec2(f32::EPSILON * 2.0, 0.0).is_nearly_zero());
        assert!(Vec3f::ZERO.is_nearly_zero());

        for v in [
            vec3(f64::EPSILON, 0.0, -f64::EPSILON),
            vec3(0.0, f64::EPSILON * 1.5, 0.0),
            vec3(-f64::EPSILON * 1.5, 0.0, 0.0),
            vec3(f64::NAN, 0.0, 0.0),
        ] {
            assert_eq!(
                Ok(v.is_nearly_zero()),
                v.is_zero_with_margin(f64::DEFAULT_MARGIN)
            );
        }
    }

    #[test]
    fn normals() {
        let v = vec4(1.0, -1.0, 1.0, -1.0);
        let expected = vec4(0.5, -0.5, 0.5, -0.5);
        assert_eq!(v.normal_new(), Ok(expected));
        assert_eq!(v.normal_safe_new(), expected);
        assert_eq!(v.normal_safe_with_margin_new(0.5), Ok(expected));

        let mut m = v;
        m.normal_mut().unwrap();
        assert_eq!(m, expected);

        let mut out = [0.0; 4];
        v.normal_into(&mut out).unwrap();
        assert_eq!(out, expected);

        let mut out = [0.0; 4];
        v.normal_safe_into(&mut out);
        assert_eq!(out, expected);
    }

    #[test]
    fn normal_failures_leave_sinks() {
        init_logger();

        let mut z = Vec3d::ZERO;
        assert!(z.normal_mut().is_err());
        assert_eq!(z, Vec3d::ZERO);

        let mut out = [7.0; 3];
        assert!(z.normal_into(&mut out).is_err());
        assert_eq!(out, [7.0; 3]);

        z.normal_safe_mut();
        assert_eq!(z, Vec3d::ZERO);
        z.normal_safe_into(&mut out);
        assert_eq!(out, [0.0; 3]);
    }

    #[test]
    fn normal_within_margin_unchanged() {
        init_logger();

        let small = vec2(0.001, -0.002);
        assert_eq!(small.normal_safe_with_margin_new(0.01), Ok(small));

        let mut m = small;
        m.normal_safe_with_margin_mut(0.01).unwrap();
        assert_eq!(m, small);

        let mut out = [1.0; 2];
        small.normal_safe_with_margin_into(0.01, &mut out).unwrap();
        assert_eq!(out, [0.001, -0.002]);

        let n = small.normal_safe_with_margin_new(0.0001).unwrap();
        assert_relative_eq!(n.length(), 1.0, epsilon = 1e-12);
    }

    #[cfg(feature = "approx")]
    #[test]
    fn safe_normals_outside_margin() {
        let v = vec3(3.0, 0.0, -4.0);
        let expected = vec3(0.6, 0.0, -0.8);

        let mut m = v;
        m.normal_safe_mut();
        assert_relative_eq!(m, expected);

        let mut m = v;
        m.normal_safe_with_margin_mut(1.0).unwrap();
        assert_relative_eq!(m, expected);

        let mut out = [f64::NAN; 3];
        v.normal_safe_with_margin_into(1.0, &mut out).unwrap();
        assert_relative_eq!(Vec3d::from(out), expected);

        assert_relative_eq!(v.normal_safe_with_margin_new(1.0).unwrap(), expected);
    }
}
