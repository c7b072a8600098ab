//! Small-dimension vector algebra for 2, 3 and 4 component [`f32`] and [`f64`] vectors.
//!
//! # Motivation
//!
//! Geometry code tends to juggle many vector-like types: plain arrays, GPU buffer structs, tagged
//! points that remember their coordinate space. This library implements its operations once,
//! against small capability traits, so that all of these types get the same arithmetic,
//! normalization and extremum queries without conversions.
//!
//! # Overview
//!
//! - [`ReadVector`], [`WriteVector`] and [`ReadWriteVector`] describe what a type lets an
//!   operation do with its components. [`Instantiate`] lets a type create new values of itself.
//! - [`Arithmetic`] provides component-wise `add`, `sub`, `rev_sub`, `mul`, `div` and `rev_div`,
//!   plus `invert` (negation) and `inverse` (`1 - v`). Every operation takes any [`Operand`]
//!   (another vector, a broadcast scalar, or one scalar per component) and comes in a `*_mut`,
//!   `*_into` and `*_new` form.
//! - [`Magnitude`] provides the dot product, lengths and normalization, with *safe* variants that
//!   substitute `0` (or leave the vector unchanged) instead of failing on zero-length vectors.
//! - [`Extrema`] finds the smallest and largest component and its index.
//! - [`Vector`] is a ready-made `Copy` vector type implementing all capabilities.
//!
//! ```
//! use zaru_vecmath::*;
//!
//! let a = vec3(1.0, 2.0, 2.0);
//! assert_eq!(a.length(), 3.0);
//! assert_eq!(a.sub_new(1.0).max_component(), Extremum::new(1.0, 1));
//!
//! let mut out = [0.0; 3];
//! a.mul_into((2.0, 0.0, -1.0), &mut out);
//! assert_eq!(out, [2.0, 0.0, -2.0]);
//!
//! assert!(Vec3d::ZERO.normal_new().is_err());
//! assert_eq!(Vec3d::ZERO.normal_safe_new(), Vec3d::ZERO);
//! ```
//!
//! # Goals & Non-Goals
//!
//! - Only support small, statically-sized vectors. Dimensions are const generic parameters.
//! - Never divide by zero silently. Divisions check every divisor first and report the lowest
//!   offending component through [`VectorError`], without writing a partial result.
//! - Reading the receiver as an operand (`v.add_mut(v)`) is always allowed and behaves as if the
//!   operand had been copied first.
//! - No matrices, quaternions, or integer vectors.
//!
//! # Features
//!
//! - `bytemuck` (default): [`bytemuck::Zeroable`] and [`bytemuck::Pod`] impls for [`Vector`].
//! - `approx` (default): `approx::{AbsDiffEq, RelativeEq, UlpsEq}` impls for [`Vector`].
//!
//! # Logging
//!
//! The library logs through the [`log`] crate. *Safe* operations emit `trace` records when they
//! substitute a fallback value. No logger is installed by this crate.

mod arithmetic;
mod capability;
mod error;
mod extremum;
mod instantiate;
mod magnitude;
mod operand;
mod traits;
mod vector;


pub use arithmetic::*;
pub use capability::*;
pub use error::{ErrorKind, Result, VectorError};
pub use extremum::*;
pub use instantiate::*;
pub use magnitude::*;
pub use operand::*;
pub use traits::*;
pub use vector::*;
