//! Misuse conditions raised by [`Outcome`](crate::Outcome).
//!
//! Every variant describes a programming error at the call site rather than a
//! recoverable failure. The panicking accessors use the `Display` output of
//! these variants as their panic message, and the fallible conversions
//! (`TryFrom`, [`Outcome::into_result`](crate::Outcome::into_result)) return
//! them directly.
//!
//! # Examples
//!
//! ```
//! use result_rail::{Outcome, OutcomeError};
//!
//! let uninit: Outcome<i32, &str> = Outcome::default();
//! assert_eq!(uninit.into_result(), Err(OutcomeError::Uninitialized));
//! assert_eq!(OutcomeError::Uninitialized.to_string(), "invalid result type");
//! ```
use core::fmt::{self, Display};

/// Misuse of an [`Outcome`](crate::Outcome) that cannot be answered sensibly.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum OutcomeError {
    /// The outcome was never built through `new_ok`/`new_err`.
    Uninitialized,
    /// A success value was requested but none is held.
    MissingOk,
    /// An error value was requested but none is held.
    MissingErr,
}

impl OutcomeError {
    /// Raises this condition as a panic.
    ///
    /// All fatal paths of the crate funnel through here so the panic message
    /// stays identical to the `Display` output.
    #[cold]
    #[track_caller]
    pub(crate) fn raise(self) -> ! {
        panic!("{}", self)
    }

    /// Raises this condition prefixed with a caller supplied message.
    #[cold]
    #[track_caller]
    pub(crate) fn raise_with(self, msg: &str) -> ! {
        panic!("{}: {}", msg, self)
    }
}

impl Display for OutcomeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutcomeError::Uninitialized => f.write_str("invalid result type"),
            OutcomeError::MissingOk => f.write_str("outcome holds no success value"),
            OutcomeError::MissingErr => f.write_str("outcome holds no error value"),
        }
    }
}

impl core::error::Error for OutcomeError {}

/// Surfaces misuse at an I/O boundary as [`std::io::ErrorKind::InvalidData`].
///
/// # Examples
///
/// ```
/// use result_rail::OutcomeError;
///
/// let io: std::io::Error = OutcomeError::Uninitialized.into();
/// assert_eq!(io.kind(), std::io::ErrorKind::InvalidData);
/// ```
#[cfg(feature = "std")]
impl From<OutcomeError> for std::io::Error {
    fn from(misuse: OutcomeError) -> Self {
        std::io::Error::new(std::io::ErrorKind::InvalidData, misuse)
    }
}
