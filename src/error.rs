//! Errors raised by [`Maybe`](crate::Maybe) and the pattern matchers.

use thiserror::Error;

/// The reason an operation was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum Misuse {
    /// The payload of an absent value was read.
    #[error("the value is absent")]
    AbsentValue,
    /// The absent-case handler of a matcher was registered twice.
    #[error("a None handler is already registered")]
    NoneHandlerSet,
    /// The generic present-case handler of a matcher was registered twice.
    #[error("a Some handler is already registered")]
    SomeHandlerSet,
    /// A literal handler was registered for a value that already has one.
    #[error("a Some handler is already registered for this literal")]
    DuplicateLiteral,
    /// A handler was registered after the matcher was first evaluated.
    #[error("the matcher has already been evaluated")]
    Evaluated,
}

/// Errors from constructing, reading or matching a [`Maybe`](crate::Maybe).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum Error {
    /// A present value was requested from an absent input.
    #[error("invalid argument: a present value can not be built from an absent input")]
    InvalidArgument,
    /// The operation is not valid in the current state.
    #[error("invalid operation: {0}")]
    InvalidOperation(#[from] Misuse),
}

impl Error {
    /// True if this is an [`Error::InvalidOperation`].
    pub fn is_invalid_operation(&self) -> bool {
        matches!(self, Error::InvalidOperation(_))
    }

    /// The misuse behind an [`Error::InvalidOperation`], if any.
    pub fn misuse(&self) -> Option<Misuse> {
        match self {
            Error::InvalidOperation(m) => Some(*m),
            Error::InvalidArgument => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Error, Misuse};

    #[test]
    fn test_error_display() {
        let e: Error = Misuse::Evaluated.into();
        assert!(e.is_invalid_operation());
        assert_eq!(e.misuse(), Some(Misuse::Evaluated));
        assert_eq!(
            e.to_string(),
            "invalid operation: the matcher has already been evaluated"
        );
        assert!(!Error::InvalidArgument.is_invalid_operation());
        assert_eq!(Error::InvalidArgument.misuse(), None);
    }
}
