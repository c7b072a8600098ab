//! Numeric traits implemented by the supported component types.

use std::{fmt, ops};

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// Types that support computing their square root.
pub trait Sqrt {
    fn sqrt(self) -> Self;
}

/// Types that support a `min` and `max` operation.
///
/// [`f32`] and [`f64`] implement this trait in terms of the [`f32::min`] and [`f32::max`] functions
/// ([`f64::min`] and [`f64::max`] respectively), so a `NaN` operand yields the other operand.
pub trait MinMax: Sized {
    fn min(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;
    fn clamp(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }
}

/// Floating-point types that can be used as vector components.
///
/// This is implemented for [`f32`] and [`f64`]. Every operation in this crate is generic over this
/// trait, so both widths share one implementation.
pub trait Scalar:
    Zero
    + One
    + Sqrt
    + MinMax
    + ops::Neg<Output = Self>
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialOrd
    + Copy
    + Into<f64>
    + fmt::Debug
    + fmt::Display
    + Send
    + Sync
    + 'static
{
    /// Tolerance used by [`Magnitude::is_nearly_zero`][crate::Magnitude::is_nearly_zero].
    ///
    /// This is the machine epsilon of the type.
    const DEFAULT_MARGIN: Self;

    /// Returns `true` if `self` is neither infinite nor `NaN`.
    fn is_finite(self) -> bool;
}

macro_rules! float_scalar {
    ($($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = 0.0;
            }

            impl One for $types {
                const ONE: Self = 1.0;
            }

            impl Sqrt for $types {
                fn sqrt(self) -> Self {
                    self.sqrt()
                }
            }

            impl MinMax for $types {
                fn min(self, other: Self) -> Self {
                    self.min(other)
                }

                fn max(self, other: Self) -> Self {
                    self.max(other)
                }
            }

            impl Scalar for $types {
                const DEFAULT_MARGIN: Self = <$types>::EPSILON;

                fn is_finite(self) -> bool {
                    <$types>::is_finite(self)
                }
            }
        )+
    };
}
float_scalar!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_max_ignore_nan() {
        assert_eq!(MinMax::min(f32::NAN, 1.0), 1.0);
        assert_eq!(MinMax::max(2.0, f64::NAN), 2.0);
        assert_eq!(MinMax::clamp(5.0f32, -1.0, 1.0), 1.0);
        assert_eq!(MinMax::clamp(-5.0f64, -1.0, 1.0), -1.0);
    }

    #[test]
    fn constants() {
        assert_eq!(<f32 as Zero>::ZERO, 0.0);
        assert_eq!(<f64 as One>::ONE, 1.0);
        assert_eq!(<f64 as Scalar>::DEFAULT_MARGIN, f64::EPSILON);
        assert_eq!(Sqrt::sqrt(16.0f32), 4.0);
        assert!(Scalar::is_finite(f64::MAX));
        assert!(!Scalar::is_finite(f32::INFINITY));
        assert!(!Scalar::is_finite(f64::NAN));
    }
}
