//! Creating new values of a vector's own concrete type.

use crate::{Operand, ReadVector, Scalar};

/// Vectors that can create further values of their own concrete type.
///
/// Every `*_new` operation in this crate (eg. [`Arithmetic::add_new`]) produces its result by
/// calling [`Instantiate::instantiate`] on the receiver, never by naming a concrete type. A custom
/// vector type implementing this trait therefore gets results of its own type back from every
/// operation, through arbitrarily long chains:
///
/// ```
/// # use zaru_vecmath::*;
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// struct Velocity([f64; 2]);
///
/// impl ReadVector<f64, 2> for Velocity {
///     fn get(&self, index: usize) -> f64 {
///         self.0[index]
///     }
/// }
///
/// impl Instantiate<f64, 2> for Velocity {
///     fn instantiate(&self, components: [f64; 2]) -> Self {
///         Velocity(components)
///     }
/// }
///
/// let v: Velocity = Velocity([1.0, 2.0]).add_new(1.0).mul_new([2.0, 3.0]);
/// assert_eq!(v, Velocity([4.0, 9.0]));
/// ```
///
/// Since `instantiate` receives `&self`, implementations can carry over per-value state that is
/// not part of the components (a coordinate space tag, for instance).
///
/// [`Arithmetic::add_new`]: crate::Arithmetic::add_new
pub trait Instantiate<T: Scalar, const N: usize>: ReadVector<T, N> + Sized {
    /// Creates a value of the same concrete type as `self`, holding `components`.
    fn instantiate(&self, components: [T; N]) -> Self;

    /// Creates a zero vector of the same concrete type as `self`.
    fn new_zero(&self) -> Self {
        self.instantiate([T::ZERO; N])
    }

    /// Creates a vector of the same concrete type as `self` from any [`Operand`].
    ///
    /// This accepts a broadcast scalar, per-component scalars, or a reference to another readable
    /// vector to copy.
    fn new_with(&self, value: impl Operand<T, N>) -> Self {
        self.instantiate(value.into_components())
    }
}

impl<T: Scalar, const N: usize> Instantiate<T, N> for [T; N] {
    #[inline]
    fn instantiate(&self, components: [T; N]) -> Self {
        components
    }
}
