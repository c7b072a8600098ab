//! Searching for the smallest and largest component of a vector.

use crate::{ReadVector, Scalar};

/// A component value together with its index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extremum<T> {
    value: T,
    index: usize,
}

impl<T: Copy> Extremum<T> {
    #[inline]
    pub fn new(value: T, index: usize) -> Self {
        Self { value, index }
    }

    /// The component value.
    #[inline]
    pub fn value(&self) -> T {
        self.value
    }

    /// The index of the component.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }
}

/// Caller-supplied destinations for the results of [`Extrema::min_component_into`] and
/// [`Extrema::max_component_into`].
pub trait ExtremumSink<T> {
    fn store(&mut self, value: T, index: usize);
}

/// `(value, index)` pairs.
impl<T> ExtremumSink<T> for (T, usize) {
    fn store(&mut self, value: T, index: usize) {
        *self = (value, index);
    }
}

impl<T: Copy> ExtremumSink<T> for Option<Extremum<T>> {
    fn store(&mut self, value: T, index: usize) {
        *self = Some(Extremum::new(value, index));
    }
}

/// Finds the extreme component of `v`, replacing the current candidate only when `better` says
/// so.
///
/// Components are visited from index 0 upwards, so with a strict comparison, the lowest index wins
/// ties.
fn scan<T, V, const N: usize>(v: &V, better: impl Fn(T, T) -> bool) -> Extremum<T>
where
    T: Scalar,
    V: ReadVector<T, N> + ?Sized,
{
    let mut best = Extremum::new(v.get(0), 0);
    for index in 1..N {
        let candidate = v.get(index);
        if better(candidate, best.value) {
            best = Extremum::new(candidate, index);
        }
    }
    best
}

/// Minimum and maximum components of readable vectors.
///
/// This trait is implemented for every [`ReadVector`]. When several components share the extreme
/// value, the one with the lowest index is reported.
///
/// `NaN` components are never selected, unless the first component is `NaN` (in which case it is
/// never replaced).
///
/// # Panics
///
/// All methods panic if `N` is 0.
///
/// # Examples
///
/// ```
/// # use zaru_vecmath::*;
/// let v = vec4(3.0, -1.0, 7.0, -1.0);
/// assert_eq!(v.min_component(), Extremum::new(-1.0, 1));
/// assert_eq!(v.max_index(), 2);
///
/// let mut sink: (f64, usize) = (0.0, 0);
/// v.max_component_into(&mut sink);
/// assert_eq!(sink, (7.0, 2));
/// ```
pub trait Extrema<T: Scalar, const N: usize>: ReadVector<T, N> {
    /// Returns the smallest component and its index.
    fn min_component(&self) -> Extremum<T> {
        scan(self, |candidate, current| candidate < current)
    }

    /// Returns the largest component and its index.
    fn max_component(&self) -> Extremum<T> {
        scan(self, |candidate, current| candidate > current)
    }

    /// Stores the smallest component and its index in `sink`.
    fn min_component_into<'a, S>(&self, sink: &'a mut S) -> &'a mut S
    where
        S: ExtremumSink<T> + ?Sized,
    {
        let min = self.min_component();
        sink.store(min.value, min.index);
        sink
    }

    /// Stores the largest component and its index in `sink`.
    fn max_component_into<'a, S>(&self, sink: &'a mut S) -> &'a mut S
    where
        S: ExtremumSink<T> + ?Sized,
    {
        let max = self.max_component();
        sink.store(max.value, max.index);
        sink
    }

    /// Returns the value of the smallest component.
    fn min_value(&self) -> T {
        self.min_component().value()
    }

    /// Returns the index of the smallest component.
    fn min_index(&self) -> usize {
        self.min_component().index()
    }

    /// Returns the value of the largest component.
    fn max_value(&self) -> T {
        self.max_component().value()
    }

    /// Returns the index of the largest component.
    fn max_index(&self) -> usize {
        self.max_component().index()
    }
}

impl<T, V, const N: usize> Extrema<T, N> for V
where
    T: Scalar,
    V: ReadVector<T, N> + ?Sized,
{
}
