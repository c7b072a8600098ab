//! Right-hand side operands of binary vector operations.

use crate::{ReadVector, Scalar};

/// Values usable as the right-hand side of a binary vector operation.
///
/// Three shapes of operand are supported, and all of them are turned into one component per
/// dimension before the operation runs:
///
/// - A full vector: a reference to anything implementing [`ReadVector`], or a
///   [`Vector`][crate::Vector] by value.
/// - A single scalar ([`f32`] or [`f64`]), which is broadcast to every component.
/// - One scalar per component, as an `[T; N]` array or as a tuple of 2, 3, or 4 scalars.
///
/// # Examples
///
/// ```
/// # use zaru_vecmath::*;
/// let v = vec3(1.0, 2.0, 3.0);
/// assert_eq!(v.add_new(1.0), v.add_new([1.0, 1.0, 1.0]));
/// assert_eq!(v.add_new((1.0, 1.0, 1.0)), v.add_new(&Vector::splat(1.0)));
/// ```
pub trait Operand<T: Scalar, const N: usize> {
    /// Converts this operand into one value per component.
    fn into_components(self) -> [T; N];
}

macro_rules! broadcast_operand {
    ($($types:ty),+) => {
        $(
            impl<const N: usize> Operand<$types, N> for $types {
                #[inline]
                fn into_components(self) -> [$types; N] {
                    [self; N]
                }
            }
        )+
    };
}
broadcast_operand!(f32, f64);

impl<T: Scalar, const N: usize> Operand<T, N> for [T; N] {
    #[inline]
    fn into_components(self) -> [T; N] {
        self
    }
}

impl<'a, T, V, const N: usize> Operand<T, N> for &'a V
where
    T: Scalar,
    V: ReadVector<T, N> + ?Sized,
{
    #[inline]
    fn into_components(self) -> [T; N] {
        self.to_array()
    }
}

impl<T: Scalar> Operand<T, 2> for (T, T) {
    #[inline]
    fn into_components(self) -> [T; 2] {
        [self.0, self.1]
    }
}

impl<T: Scalar> Operand<T, 3> for (T, T, T) {
    #[inline]
    fn into_components(self) -> [T; 3] {
        [self.0, self.1, self.2]
    }
}

impl<T: Scalar> Operand<T, 4> for (T, T, T, T) {
    #[inline]
    fn into_components(self) -> [T; 4] {
        [self.0, self.1, self.2, self.3]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn components<O: Operand<f64, 3>>(operand: O) -> [f64; 3] {
        operand.into_components()
    }

    #[test]
    fn shapes_agree() {
        let expected = [2.5; 3];
        assert_eq!(components(2.5), expected);
        assert_eq!(components([2.5, 2.5, 2.5]), expected);
        assert_eq!(components((2.5, 2.5, 2.5)), expected);
        assert_eq!(components(&[2.5, 2.5, 2.5]), expected);
    }

    #[test]
    fn per_component_order() {
        let [x, y]: [f32; 2] = (1.0f32, 2.0f32).into_components();
        assert_eq!((x, y), (1.0, 2.0));
        let c: [f32; 4] = (1.0f32, 2.0, 3.0, 4.0).into_components();
        assert_eq!(c, [1.0, 2.0, 3.0, 4.0]);
    }
}
