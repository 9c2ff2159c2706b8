use crate::error::OutcomeError;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tri-state container for the outcome of a fallible computation.
///
/// `Outcome<T, E>` holds exactly one success value of type `T` or exactly one
/// error value of type `E` when built through [`Outcome::new_ok`] or
/// [`Outcome::new_err`]. The third variant, [`Outcome::Uninit`], is what
/// [`Default`] produces and marks a value that was never given a branch.
///
/// Presence queries ([`is_ok`](Outcome::is_ok), [`is_err`](Outcome::is_err)
/// and their `_and` forms) refuse to answer for `Uninit` and panic instead.
/// The default-tolerant accessors ([`unwrap_or`](Outcome::unwrap_or),
/// [`unwrap_or_default`](Outcome::unwrap_or_default),
/// [`unwrap_err_or`](Outcome::unwrap_err_or)) never look at validity and
/// simply fall back.
///
/// # Serde Support
///
/// With the `serde` feature, `Outcome` implements `Serialize` and
/// `Deserialize` when `T` and `E` do, using serde's externally tagged enum
/// representation.
///
/// # Type Parameters
///
/// * `T` - The success value type
/// * `E` - The error value type
///
/// # Examples
///
/// ```
/// use result_rail::Outcome;
///
/// let ok = Outcome::<i32, String>::new_ok(42);
/// assert!(ok.is_ok());
/// assert_eq!(ok.unwrap(), 42);
///
/// let err = Outcome::<i32, &str>::new_err("boom");
/// assert!(err.is_err());
/// assert_eq!(err.unwrap_or(99), 99);
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum Outcome<T, E> {
    /// Never constructed through a sanctioned constructor.
    Uninit,
    /// Holds the success value.
    Ok(T),
    /// Holds the error value.
    Err(E),
}

impl<T, E> Default for Outcome<T, E> {
    #[inline]
    fn default() -> Self {
        Self::Uninit
    }
}

impl<T, E> Outcome<T, E> {
    /// Creates a successful outcome.
    ///
    /// # Arguments
    ///
    /// * `value` - The success value to wrap
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::new_ok(42);
    /// assert_eq!(o.ok(), Some(42));
    /// ```
    #[inline]
    pub const fn new_ok(value: T) -> Self {
        Self::Ok(value)
    }

    /// Creates a failed outcome.
    ///
    /// # Arguments
    ///
    /// * `error` - The error value to wrap
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::new_err("boom");
    /// assert_eq!(o.err(), Some("boom"));
    /// ```
    #[inline]
    pub const fn new_err(error: E) -> Self {
        Self::Err(error)
    }

    /// Returns `true` if the outcome was never given a branch.
    ///
    /// This is the only presence probe that does not panic on an
    /// uninitialized outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::Outcome;
    ///
    /// assert!(Outcome::<i32, &str>::default().is_uninit());
    /// assert!(!Outcome::<i32, &str>::new_ok(1).is_uninit());
    /// ```
    #[must_use]
    #[inline]
    pub const fn is_uninit(&self) -> bool {
        matches!(self, Self::Uninit)
    }

    /// Returns `true` if the outcome holds a success value.
    ///
    /// # Panics
    ///
    /// Panics with "invalid result type" if the outcome is [`Outcome::Uninit`].
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::Outcome;
    ///
    /// assert!(Outcome::<i32, &str>::new_ok(42).is_ok());
    /// assert!(!Outcome::<i32, &str>::new_err("boom").is_ok());
    /// ```
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn is_ok(&self) -> bool {
        match self {
            Self::Ok(_) => true,
            Self::Err(_) => false,
            Self::Uninit => OutcomeError::Uninitialized.raise(),
        }
    }

    /// Returns `true` if the outcome holds an error value.
    ///
    /// # Panics
    ///
    /// Panics with "invalid result type" if the outcome is [`Outcome::Uninit`].
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::Outcome;
    ///
    /// assert!(Outcome::<i32, &str>::new_err("boom").is_err());
    /// assert!(!Outcome::<i32, &str>::new_ok(42).is_err());
    /// ```
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn is_err(&self) -> bool {
        match self {
            Self::Ok(_) => false,
            Self::Err(_) => true,
            Self::Uninit => OutcomeError::Uninitialized.raise(),
        }
    }

    /// Returns `true` if the outcome is successful and `f` accepts the value.
    ///
    /// # Arguments
    ///
    /// * `f` - Predicate applied to the success value
    ///
    /// # Panics
    ///
    /// Panics if the outcome is [`Outcome::Uninit`], like [`is_ok`](Outcome::is_ok).
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::Outcome;
    ///
    /// assert!(Outcome::<i32, &str>::new_ok(4).is_ok_and(|v| v % 2 == 0));
    /// assert!(!Outcome::<i32, &str>::new_err("odd").is_ok_and(|v| v % 2 == 0));
    /// ```
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn is_ok_and<F>(self, f: F) -> bool
    where
        F: FnOnce(T) -> bool,
    {
        match self {
            Self::Ok(value) => f(value),
            Self::Err(_) => false,
            Self::Uninit => OutcomeError::Uninitialized.raise(),
        }
    }

    /// Returns `true` if the outcome failed and `f` accepts the error.
    ///
    /// # Arguments
    ///
    /// * `f` - Predicate applied to the error value
    ///
    /// # Panics
    ///
    /// Panics if the outcome is [`Outcome::Uninit`], like [`is_err`](Outcome::is_err).
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::new_err("timeout");
    /// assert!(o.is_err_and(|e| e.starts_with("time")));
    /// ```
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn is_err_and<F>(self, f: F) -> bool
    where
        F: FnOnce(E) -> bool,
    {
        match self {
            Self::Ok(_) => false,
            Self::Err(error) => f(error),
            Self::Uninit => OutcomeError::Uninitialized.raise(),
        }
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics if the outcome does not hold a success value.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::new_ok(42).unwrap(), 42);
    /// ```
    ///
    /// ```should_panic
    /// use result_rail::Outcome;
    ///
    /// Outcome::<i32, &str>::new_err("boom").unwrap();
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Ok(value) => value,
            _ => OutcomeError::MissingOk.raise(),
        }
    }

    /// Returns the error value.
    ///
    /// # Panics
    ///
    /// Panics if the outcome does not hold an error value.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::new_err("boom").unwrap_err(), "boom");
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap_err(self) -> E {
        match self {
            Self::Err(error) => error,
            _ => OutcomeError::MissingErr.raise(),
        }
    }

    /// Returns the success value, panicking with `msg` if there is none.
    ///
    /// # Panics
    ///
    /// Panics with `msg` followed by the misuse description if the outcome
    /// does not hold a success value.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::Outcome;
    ///
    /// let port = Outcome::<u16, &str>::new_ok(8080).expect("port must be parsed");
    /// assert_eq!(port, 8080);
    /// ```
    #[inline]
    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        match self {
            Self::Ok(value) => value,
            _ => OutcomeError::MissingOk.raise_with(msg),
        }
    }

    /// Returns the error value, panicking with `msg` if there is none.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::Outcome;
    ///
    /// let err = Outcome::<u16, &str>::new_err("bad port").expect_err("parse should fail");
    /// assert_eq!(err, "bad port");
    /// ```
    #[inline]
    #[track_caller]
    pub fn expect_err(self, msg: &str) -> E {
        match self {
            Self::Err(error) => error,
            _ => OutcomeError::MissingErr.raise_with(msg),
        }
    }

    /// Returns the success value or `default`.
    ///
    /// Never panics, not even on an uninitialized outcome.
    ///
    /// # Arguments
    ///
    /// * `default` - Returned when no success value is held
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::new_ok(42).unwrap_or(99), 42);
    /// assert_eq!(Outcome::<i32, &str>::new_err("boom").unwrap_or(99), 99);
    /// assert_eq!(Outcome::<i32, &str>::default().unwrap_or(99), 99);
    /// ```
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Ok(value) => value,
            _ => default,
        }
    }

    /// Returns the success value or `T::default()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::default().unwrap_or_default(), 0);
    /// ```
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Self::Ok(value) => value,
            _ => T::default(),
        }
    }

    /// Returns the success value or computes one from the error.
    ///
    /// # Panics
    ///
    /// Panics with "invalid result type" if the outcome is [`Outcome::Uninit`],
    /// which has no error to hand to `f`.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::Outcome;
    ///
    /// let len = Outcome::<usize, &str>::new_err("four").unwrap_or_else(|e| e.len());
    /// assert_eq!(len, 4);
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => f(error),
            Self::Uninit => OutcomeError::Uninitialized.raise(),
        }
    }

    /// Returns the error value or `default`.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::new_err("boom").unwrap_err_or("none"), "boom");
    /// assert_eq!(Outcome::<i32, &str>::default().unwrap_err_or("none"), "none");
    /// ```
    #[inline]
    pub fn unwrap_err_or(self, default: E) -> E {
        match self {
            Self::Err(error) => error,
            _ => default,
        }
    }

    /// Converts the success branch into an [`Option`], discarding any error.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::new_ok(7).ok(), Some(7));
    /// assert_eq!(Outcome::<i32, &str>::new_err("boom").ok(), None);
    /// ```
    #[must_use]
    #[inline]
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Ok(value) => Some(value),
            _ => None,
        }
    }

    /// Converts the error branch into an [`Option`], discarding any success.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::new_err("boom").err(), Some("boom"));
    /// assert_eq!(Outcome::<i32, &str>::default().err(), None);
    /// ```
    #[must_use]
    #[inline]
    pub fn err(self) -> Option<E> {
        match self {
            Self::Err(error) => Some(error),
            _ => None,
        }
    }

    /// Borrows the held value without consuming the outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::Outcome;
    ///
    /// let o = Outcome::<String, &str>::new_ok("hello".to_string());
    /// assert_eq!(o.as_ref().map_ok_and(|s| s.len()).unwrap(), 5);
    /// assert!(o.is_ok());
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(error),
            Self::Uninit => Outcome::Uninit,
        }
    }

    /// Mutably borrows the held value.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::Outcome;
    ///
    /// let mut o = Outcome::<i32, &str>::new_ok(1);
    /// if let Outcome::Ok(v) = o.as_mut() {
    ///     *v += 1;
    /// }
    /// assert_eq!(o.unwrap(), 2);
    /// ```
    #[inline]
    pub fn as_mut(&mut self) -> Outcome<&mut T, &mut E> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(error),
            Self::Uninit => Outcome::Uninit,
        }
    }

    /// Calls `f` with a reference to the success value, if any.
    ///
    /// The outcome is returned unchanged on every branch.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::Outcome;
    ///
    /// let mut seen = None;
    /// let o = Outcome::<i32, &str>::new_ok(42).inspect(|v| seen = Some(*v));
    /// assert_eq!(seen, Some(42));
    /// assert_eq!(o.unwrap(), 42);
    /// ```
    #[inline]
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Ok(value) = &self {
            f(value);
        }
        self
    }

    /// Calls `f` with a reference to the error value, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::Outcome;
    ///
    /// let mut seen = None;
    /// let o = Outcome::<i32, &str>::new_err("boom").inspect_err(|e| seen = Some(*e));
    /// assert_eq!(seen, Some("boom"));
    /// assert!(o.is_err());
    /// ```
    #[inline]
    pub fn inspect_err<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Self::Err(error) = &self {
            f(error);
        }
        self
    }

    /// Replaces the success value with `value`, keeping any error as is.
    ///
    /// # Arguments
    ///
    /// * `value` - The new success value; dropped if the outcome is not `Ok`
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::new_ok(42).map_ok("x");
    /// assert_eq!(o.unwrap(), "x");
    ///
    /// let o = Outcome::<i32, &str>::new_err("boom").map_ok("x");
    /// assert_eq!(o.unwrap_err(), "boom");
    /// ```
    #[inline]
    pub fn map_ok<U>(self, value: U) -> Outcome<U, E> {
        self.map_ok_and(|_| value)
    }

    /// Maps the success value through `f`, keeping any error as is.
    ///
    /// # Arguments
    ///
    /// * `f` - A function that transforms the success value from `T` to `U`
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::new_ok(21).map_ok_and(|v| v * 2);
    /// assert_eq!(o.unwrap(), 42);
    /// ```
    #[inline]
    pub fn map_ok_and<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(f(value)),
            Self::Err(error) => Outcome::Err(error),
            Self::Uninit => Outcome::Uninit,
        }
    }

    /// Replaces the error value with `error`, keeping any success as is.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::new_err("boom").map_err(500u16);
    /// assert_eq!(o.unwrap_err(), 500);
    ///
    /// let o = Outcome::<i32, &str>::new_ok(42).map_err(500u16);
    /// assert_eq!(o.unwrap(), 42);
    /// ```
    #[inline]
    pub fn map_err<EU>(self, error: EU) -> Outcome<T, EU> {
        self.map_err_and(|_| error)
    }

    /// Maps the error value through `f`, keeping any success as is.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::new_err("boom").map_err_and(|e| e.len());
    /// assert_eq!(o.unwrap_err(), 4);
    /// ```
    #[inline]
    pub fn map_err_and<EU, F>(self, f: F) -> Outcome<T, EU>
    where
        F: FnOnce(E) -> EU,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(f(error)),
            Self::Uninit => Outcome::Uninit,
        }
    }

    /// Chains a computation that may itself fail.
    ///
    /// Behaves like [`Result::and_then`]: `f` runs only for a success value,
    /// errors and the uninitialized state pass through.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::Outcome;
    ///
    /// fn half(v: i32) -> Outcome<i32, &'static str> {
    ///     if v % 2 == 0 {
    ///         Outcome::new_ok(v / 2)
    ///     } else {
    ///         Outcome::new_err("odd")
    ///     }
    /// }
    ///
    /// assert_eq!(Outcome::new_ok(8).and_then(half).and_then(half).unwrap(), 2);
    /// assert_eq!(Outcome::new_ok(6).and_then(half).and_then(half).unwrap_err(), "odd");
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Ok(value) => f(value),
            Self::Err(error) => Outcome::Err(error),
            Self::Uninit => Outcome::Uninit,
        }
    }

    /// Recovers from an error by running `op` on it.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::new_err("boom").or_else(|_| Outcome::<i32, ()>::new_ok(0));
    /// assert_eq!(o.unwrap(), 0);
    /// ```
    #[inline]
    pub fn or_else<EU, F>(self, op: F) -> Outcome<T, EU>
    where
        F: FnOnce(E) -> Outcome<T, EU>,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => op(error),
            Self::Uninit => Outcome::Uninit,
        }
    }

    /// Converts into a standard [`Result`], rejecting the uninitialized state.
    ///
    /// # Errors
    ///
    /// Returns [`OutcomeError::Uninitialized`] for [`Outcome::Uninit`].
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::{Outcome, OutcomeError};
    ///
    /// assert_eq!(Outcome::<i32, &str>::new_ok(1).into_result(), Ok(Ok(1)));
    /// assert_eq!(Outcome::<i32, &str>::new_err("e").into_result(), Ok(Err("e")));
    /// assert_eq!(
    ///     Outcome::<i32, &str>::default().into_result(),
    ///     Err(OutcomeError::Uninitialized)
    /// );
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<Result<T, E>, OutcomeError> {
        match self {
            Self::Ok(value) => Ok(Ok(value)),
            Self::Err(error) => Ok(Err(error)),
            Self::Uninit => Err(OutcomeError::Uninitialized),
        }
    }
}
