use crate::error::OutcomeError;
use crate::outcome::core::Outcome;

/// Produces an independent copy of whichever value is held.
///
/// Cloning [`Outcome::Uninit`] is treated as a programming error.
///
/// # Panics
///
/// Panics with "invalid result type" when `self` is uninitialized.
///
/// # Examples
///
/// ```
/// use result_rail::Outcome;
///
/// let original = Outcome::<String, &str>::new_ok("payload".to_string());
/// let copy = original.clone();
/// assert_eq!(copy, original);
/// ```
impl<T: Clone, E: Clone> Clone for Outcome<T, E> {
    #[track_caller]
    fn clone(&self) -> Self {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value.clone()),
            Outcome::Err(error) => Outcome::Err(error.clone()),
            Outcome::Uninit => OutcomeError::Uninitialized.raise(),
        }
    }
}

/// Lifts a standard `Result` into a sanctioned `Ok`/`Err` outcome.
///
/// # Examples
///
/// ```
/// use result_rail::Outcome;
///
/// let o: Outcome<i32, &str> = Ok(3).into();
/// assert!(o.is_ok());
/// ```
impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Ok(value),
            Err(error) => Outcome::Err(error),
        }
    }
}

/// Lowers an outcome into a standard `Result`.
///
/// # Examples
///
/// ```
/// use result_rail::{Outcome, OutcomeError};
///
/// let r: Result<Result<i32, &str>, OutcomeError> = Outcome::<i32, &str>::new_err("e").try_into();
/// assert_eq!(r, Ok(Err("e")));
/// ```
impl<T, E> TryFrom<Outcome<T, E>> for Result<T, E> {
    type Error = OutcomeError;

    #[inline]
    fn try_from(outcome: Outcome<T, E>) -> Result<Self, Self::Error> {
        outcome.into_result()
    }
}

/// Collects success values, stopping at the first error.
///
/// # Panics
///
/// Panics if an uninitialized outcome is reached before any error.
///
/// # Examples
///
/// ```
/// use result_rail::Outcome;
///
/// let all: Outcome<Vec<i32>, &str> =
///     vec![Outcome::new_ok(1), Outcome::new_ok(2)].into_iter().collect();
/// assert_eq!(all.unwrap(), vec![1, 2]);
///
/// let first_err: Outcome<Vec<i32>, &str> =
///     vec![Outcome::new_ok(1), Outcome::new_err("a"), Outcome::new_err("b")]
///         .into_iter()
///         .collect();
/// assert_eq!(first_err.unwrap_err(), "a");
/// ```
impl<A, E, V> FromIterator<Outcome<A, E>> for Outcome<V, E>
where
    V: FromIterator<A>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Outcome<A, E>>,
    {
        let mut error = None;
        let collected: V = iter
            .into_iter()
            .map_while(|item| match item {
                Outcome::Ok(value) => Some(value),
                Outcome::Err(e) => {
                    error = Some(e);
                    None
                }
                Outcome::Uninit => OutcomeError::Uninitialized.raise(),
            })
            .collect();

        match error {
            Some(e) => Outcome::Err(e),
            None => Outcome::Ok(collected),
        }
    }
}
