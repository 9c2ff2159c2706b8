//! Construction helper bound to a fixed `T`/`E` pair.
//!
//! Spelling out `Outcome::<Config, LoadError>::new_ok(..)` at every return
//! site gets noisy. A [`ResultScope`] fixes both type parameters once and
//! exposes short `ok`/`err` constructors instead.
//!
//! # Examples
//!
//! ```
//! use result_rail::scope::{scope, ResultScope};
//! use result_rail::Outcome;
//!
//! fn parse_port(raw: &str) -> Outcome<u16, String> {
//!     let r = scope::<u16, String>();
//!     match raw.parse() {
//!         Ok(port) => r.ok(port),
//!         Err(_) => r.err(format!("not a port: {raw}")),
//!     }
//! }
//!
//! assert_eq!(parse_port("8080").unwrap(), 8080);
//! assert!(parse_port("eighty").is_err());
//! ```
use crate::outcome::Outcome;
use core::fmt;
use core::marker::PhantomData;

/// Stateless factory producing [`Outcome<T, E>`] values.
///
/// Zero-sized; copying or dropping it costs nothing.
pub struct ResultScope<T, E> {
    _types: PhantomData<fn() -> (T, E)>,
}

impl<T, E> ResultScope<T, E> {
    /// Binds a new scope to `T` and `E`.
    #[must_use]
    #[inline]
    pub const fn new() -> Self {
        Self {
            _types: PhantomData,
        }
    }

    /// Wraps `value` as a success. Delegates to [`Outcome::new_ok`].
    #[inline]
    pub fn ok(&self, value: T) -> Outcome<T, E> {
        Outcome::new_ok(value)
    }

    /// Wraps `error` as a failure. Delegates to [`Outcome::new_err`].
    #[inline]
    pub fn err(&self, error: E) -> Outcome<T, E> {
        Outcome::new_err(error)
    }

    /// Runs `f` with this scope and returns whatever it produces.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::scope::ResultScope;
    ///
    /// let total = ResultScope::<i32, &str>::new().within(|r| {
    ///     r.ok(40).and_then(|v| r.ok(v + 2))
    /// });
    /// assert_eq!(total.unwrap(), 42);
    /// ```
    #[inline]
    pub fn within<R, F>(self, f: F) -> R
    where
        F: FnOnce(Self) -> R,
    {
        f(self)
    }
}

// No bounds on `T`/`E`.
impl<T, E> Clone for ResultScope<T, E> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, E> Copy for ResultScope<T, E> {}

impl<T, E> Default for ResultScope<T, E> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> fmt::Debug for ResultScope<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResultScope")
            .field("ok", &core::any::type_name::<T>())
            .field("err", &core::any::type_name::<E>())
            .finish()
    }
}

/// Shorthand for [`ResultScope::new`].
#[must_use]
#[inline]
pub const fn scope<T, E>() -> ResultScope<T, E> {
    ResultScope::new()
}
