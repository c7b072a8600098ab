//! Access capabilities of vector values.
//!
//! Every operation in this crate is written against the smallest of these traits it needs:
//!
//! - [`ReadVector`] exposes component values. Queries like [`Magnitude::length`] and
//!   [`Extrema::min_component`] only ever need this.
//! - [`WriteVector`] exposes component assignment. Result sinks of the `*_into` operations only
//!   need this.
//! - [`ReadWriteVector`] is the union of both, required by the `*_mut` operations, which read the
//!   current value before overwriting it.
//!
//! [`Magnitude::length`]: crate::Magnitude::length
//! [`Extrema::min_component`]: crate::Extrema::min_component

use std::array;

use crate::{
    error::{Result, VectorError},
    Scalar,
};

/// Names of the first four vector components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
    W,
}

impl Axis {
    /// All axes, in component order.
    pub const ALL: [Axis; 4] = [Axis::X, Axis::Y, Axis::Z, Axis::W];

    /// Returns the component index this axis refers to.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the axis naming component `index`, if it has a name.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Read access to the components of an `N`-dimensional vector.
pub trait ReadVector<T: Scalar, const N: usize> {
    /// Returns the component at `index`.
    ///
    /// # Panics
    ///
    /// Implementations panic if `index` is not less than `N`.
    fn get(&self, index: usize) -> T;

    /// Returns the component at `index`, or [`None`] if `index` is out of range.
    fn try_get(&self, index: usize) -> Option<T> {
        if index < N {
            Some(self.get(index))
        } else {
            None
        }
    }

    /// Returns the component named by `axis`.
    ///
    /// # Panics
    ///
    /// This panics if the vector has no such component (eg. [`Axis::Z`] of a 2D vector).
    fn get_axis(&self, axis: Axis) -> T {
        self.get(axis.index())
    }

    /// Copies all components into an array.
    fn to_array(&self) -> [T; N] {
        array::from_fn(|i| self.get(i))
    }

    /// Compares the components of `self` and `other` for exact equality.
    ///
    /// `other` may be any readable vector of the same dimension, regardless of its concrete type.
    fn eq_components<V>(&self, other: &V) -> bool
    where
        V: ReadVector<T, N> + ?Sized,
    {
        (0..N).all(|i| self.get(i) == other.get(i))
    }
}

/// Write access to the components of an `N`-dimensional vector.
pub trait WriteVector<T: Scalar, const N: usize> {
    /// Sets the component at `index` to `value`.
    ///
    /// # Panics
    ///
    /// Implementations panic if `index` is not less than `N`.
    fn set(&mut self, index: usize, value: T);

    /// Sets the component named by `axis` to `value`.
    ///
    /// # Panics
    ///
    /// This panics if the vector has no such component.
    fn set_axis(&mut self, axis: Axis, value: T) {
        self.set(axis.index(), value);
    }

    /// Sets every component to `value`.
    fn set_all(&mut self, value: T) {
        self.set_array([value; N]);
    }

    /// Sets all components from an array.
    fn set_array(&mut self, values: [T; N]) {
        for (i, value) in values.into_iter().enumerate() {
            self.set(i, value);
        }
    }

    /// Copies all components of `other` into `self`.
    fn set_from<V>(&mut self, other: &V)
    where
        V: ReadVector<T, N> + ?Sized,
    {
        self.set_array(other.to_array());
    }

    /// Sets all components from a slice.
    ///
    /// Fails with [`VectorError::ComponentCount`] (leaving `self` untouched) if `values` does not
    /// contain exactly `N` elements.
    fn set_slice(&mut self, values: &[T]) -> Result<()> {
        let values = <[T; N]>::try_from(values).map_err(|_| VectorError::ComponentCount {
            expected: N,
            actual: values.len(),
        })?;
        self.set_array(values);
        Ok(())
    }
}

/// Combined read and write access.
///
/// This is implemented automatically for every type implementing both [`ReadVector`] and
/// [`WriteVector`].
pub trait ReadWriteVector<T: Scalar, const N: usize>: ReadVector<T, N> + WriteVector<T, N> {}

impl<T, V, const N: usize> ReadWriteVector<T, N> for V
where
    T: Scalar,
    V: ReadVector<T, N> + WriteVector<T, N> + ?Sized,
{
}

impl<T: Scalar, const N: usize> ReadVector<T, N> for [T; N] {
    #[inline]
    fn get(&self, index: usize) -> T {
        self[index]
    }

    #[inline]
    fn to_array(&self) -> [T; N] {
        *self
    }
}

impl<T: Scalar, const N: usize> WriteVector<T, N> for [T; N] {
    #[inline]
    fn set(&mut self, index: usize, value: T) {
        self[index] = value;
    }

    #[inline]
    fn set_array(&mut self, values: [T; N]) {
        *self = values;
    }
}
