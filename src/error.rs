//! Error types.

use thiserror::Error;

use crate::Scalar;

/// Convenience alias for results of fallible vector operations.
pub type Result<T, E = VectorError> = std::result::Result<T, E>;

/// Errors raised by vector operations.
///
/// Every variant belongs to one of two broad categories, returned by [`VectorError::kind`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[non_exhaustive]
pub enum VectorError {
    /// A component of the divisor was exactly zero.
    ///
    /// `index` is the lowest offending component.
    #[error("division by zero in component {index}")]
    DivisionByZero { index: usize },

    /// The vector has zero length, so its reciprocal length is undefined.
    #[error("division by zero: vector has zero length")]
    ZeroLength,

    /// A tolerance margin was negative or `NaN`.
    #[error("tolerance must be non-negative, got {tolerance}")]
    NegativeTolerance { tolerance: f64 },

    /// A slice of components had the wrong length for the vector's dimension.
    #[error("expected {expected} components, got {actual}")]
    ComponentCount { expected: usize, actual: usize },
}

/// Broad category of a [`VectorError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An unchecked division would have divided by zero.
    DivisionByZero,
    /// The caller passed an argument outside of the operation's domain.
    InvalidArgument,
}

impl VectorError {
    /// Returns the category this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::DivisionByZero { .. } | Self::ZeroLength => ErrorKind::DivisionByZero,
            Self::NegativeTolerance { .. } | Self::ComponentCount { .. } => {
                ErrorKind::InvalidArgument
            }
        }
    }
}

/// Rejects tolerances that are negative or `NaN`.
pub(crate) fn check_tolerance<T: Scalar>(tolerance: T) -> Result<T> {
    if tolerance >= T::ZERO {
        Ok(tolerance)
    } else {
        Err(VectorError::NegativeTolerance {
            tolerance: tolerance.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds() {
        assert_eq!(
            VectorError::DivisionByZero { index: 1 }.kind(),
            ErrorKind::DivisionByZero
        );
        assert_eq!(VectorError::ZeroLength.kind(), ErrorKind::DivisionByZero);
        assert_eq!(
            VectorError::NegativeTolerance { tolerance: -1.0 }.kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            VectorError::ComponentCount {
                expected: 3,
                actual: 2
            }
            .kind(),
            ErrorKind::InvalidArgument
        );
    }

    #[test]
    fn messages() {
        assert_eq!(
            VectorError::DivisionByZero { index: 2 }.to_string(),
            "division by zero in component 2"
        );
        assert_eq!(
            VectorError::NegativeTolerance { tolerance: -0.5 }.to_string(),
            "tolerance must be non-negative, got -0.5"
        );
        assert_eq!(
            VectorError::ComponentCount {
                expected: 4,
                actual: 1
            }
            .to_string(),
            "expected 4 components, got 1"
        );
    }

    #[test]
    fn tolerance_check() {
        assert_eq!(check_tolerance(0.0f32), Ok(0.0));
        assert_eq!(check_tolerance(0.25f64), Ok(0.25));
        assert_eq!(
            check_tolerance(-0.25f64),
            Err(VectorError::NegativeTolerance { tolerance: -0.25 })
        );
        assert!(check_tolerance(f32::NAN).is_err());
    }
}
