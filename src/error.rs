use thiserror::Error;

/// Failures when building geometry from foreign data.
///
/// The geometry operations themselves are total; only conversions can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeomError {
    /// Slice or array row had the wrong number of scalars
    #[error("expected {expected} values, found {found}")]
    WrongLength { expected: usize, found: usize },
    /// Value has no representation in the target scalar domain (NaN, inf, overflow)
    #[error("value out of range for target coordinate type")]
    OutOfRange,
}

pub type GeomResult<T> = Result<T, GeomError>;
