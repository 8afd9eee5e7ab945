//! Failures surfaced by a pipeline run.

use thiserror::Error;

/// The type-erased error a source or an operator fails with.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Canonical result of this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A failure raised while a pipeline runs.
///
/// The original error is kept as-is: [`Display`](std::fmt::Display) and
/// [`source`](std::error::Error::source) forward to it, and it can be recovered
/// with [`downcast`](Error::downcast) or [`into_inner`](Error::into_inner).
///
/// # Examples
///
/// ```
/// use transducer::{from_iter, ops};
///
/// let err = from_iter(["1", "x", "3"])
///     .run(ops::try_map(|s: &str| s.parse::<i32>()))
///     .unwrap_err();
///
/// assert!(err.is_operator());
/// assert!(err.downcast_ref::<std::num::ParseIntError>().is_some());
/// ```
#[derive(Debug, Error)]
pub enum Error {
    /// The source failed to produce an item.
    #[error(transparent)]
    Source(BoxError),

    /// An operator failed to process an item.
    #[error(transparent)]
    Operator(BoxError),
}

impl Error {
    /// Wraps a failure raised while producing an item.
    pub fn from_source(err: impl Into<BoxError>) -> Self {
        Self::Source(err.into())
    }

    /// Wraps a failure raised by an operator.
    pub fn from_operator(err: impl Into<BoxError>) -> Self {
        Self::Operator(err.into())
    }

    /// Returns `true` if the source failed.
    pub fn is_source(&self) -> bool {
        matches!(self, Self::Source(_))
    }

    /// Returns `true` if an operator failed.
    pub fn is_operator(&self) -> bool {
        matches!(self, Self::Operator(_))
    }

    /// Returns a reference to the original error if it is of type `E`.
    pub fn downcast_ref<E: std::error::Error + 'static>(&self) -> Option<&E> {
        self.inner().downcast_ref()
    }

    /// Recovers the original error if it is of type `E`.
    ///
    /// Gives the error back unchanged otherwise.
    pub fn downcast<E: std::error::Error + 'static>(self) -> Result<E, Self> {
        match self {
            Self::Source(err) => err.downcast().map(|err| *err).map_err(Self::Source),
            Self::Operator(err) => err.downcast().map(|err| *err).map_err(Self::Operator),
        }
    }

    /// Returns the original error.
    pub fn into_inner(self) -> BoxError {
        match self {
            Self::Source(err) | Self::Operator(err) => err,
        }
    }

    fn inner(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
        match self {
            Self::Source(err) | Self::Operator(err) => err.as_ref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fmt;

    use super::*;

    #[derive(Debug, PartialEq)]
    struct Boom(u8);

    impl fmt::Display for Boom {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "boom #{}", self.0)
        }
    }

    impl std::error::Error for Boom {}

    #[test]
    fn display_is_the_original() {
        assert_eq!(Error::from_operator(Boom(3)).to_string(), "boom #3");
        assert_eq!(Error::from_source(Boom(4)).to_string(), "boom #4");
    }

    #[test]
    fn downcast_recovers_the_original() {
        let err = Error::from_source(Boom(1));
        assert!(err.is_source());
        assert!(!err.is_operator());
        assert_eq!(err.downcast_ref::<Boom>(), Some(&Boom(1)));
        assert_eq!(err.downcast::<Boom>().ok(), Some(Boom(1)));
    }

    #[test]
    fn downcast_to_the_wrong_type_gives_the_error_back() {
        let err = Error::from_operator(Boom(2))
            .downcast::<std::fmt::Error>()
            .unwrap_err();

        assert!(err.is_operator());
        assert_eq!(err.into_inner().to_string(), "boom #2");
    }
}
