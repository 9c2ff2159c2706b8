//! Conversion helpers between [`Outcome`], `Result` and `Option`.
//!
//! These adapters make it straightforward to hand outcomes to APIs that speak
//! the standard types, or to lift existing `Result`s into the outcome world.
//!
//! # Examples
//!
//! ```
//! use result_rail::convert::*;
//!
//! let outcome = result_to_outcome(Ok::<i32, &str>(42));
//! assert!(outcome.is_ok());
//!
//! assert_eq!(outcome_to_option_result(outcome), Some(Ok(42)));
//! ```

use crate::error::OutcomeError;
use crate::outcome::Outcome;

/// Converts a `Result` to an `Outcome`.
///
/// # Returns
///
/// * `Outcome::Ok(value)` if result is `Ok`
/// * `Outcome::Err(error)` if result is `Err`
///
/// # Examples
///
/// ```
/// use result_rail::convert::result_to_outcome;
///
/// let outcome = result_to_outcome(Err::<i32, &str>("failed"));
/// assert!(outcome.is_err());
/// ```
#[inline]
pub fn result_to_outcome<T, E>(result: Result<T, E>) -> Outcome<T, E> {
    result.into()
}

/// Converts an `Outcome` to a `Result`, panicking on the uninitialized state.
///
/// # Panics
///
/// Panics with "invalid result type" if `outcome` is [`Outcome::Uninit`].
///
/// # Examples
///
/// ```
/// use result_rail::convert::outcome_to_result;
/// use result_rail::Outcome;
///
/// assert_eq!(outcome_to_result(Outcome::<i32, &str>::new_ok(1)), Ok(1));
/// ```
#[inline]
#[track_caller]
pub fn outcome_to_result<T, E>(outcome: Outcome<T, E>) -> Result<T, E> {
    match outcome.into_result() {
        Ok(result) => result,
        Err(misuse) => misuse.raise(),
    }
}

/// Converts an `Outcome` to `Option<Result>`, mapping the uninitialized state to `None`.
///
/// # Examples
///
/// ```
/// use result_rail::convert::outcome_to_option_result;
/// use result_rail::Outcome;
///
/// assert_eq!(outcome_to_option_result(Outcome::<i32, &str>::new_err("e")), Some(Err("e")));
/// assert_eq!(outcome_to_option_result(Outcome::<i32, &str>::default()), None);
/// ```
#[inline]
pub fn outcome_to_option_result<T, E>(outcome: Outcome<T, E>) -> Option<Result<T, E>> {
    outcome.into_result().ok()
}

/// Collects outcomes into a single outcome of a collection.
///
/// Stops at the first error. Unlike the `FromIterator` impl, an uninitialized
/// item is reported as [`OutcomeError::Uninitialized`] instead of panicking.
///
/// # Errors
///
/// Returns [`OutcomeError::Uninitialized`] if an uninitialized outcome is
/// reached before any error.
///
/// # Examples
///
/// ```
/// use result_rail::convert::collect_outcomes;
/// use result_rail::{Outcome, OutcomeError};
///
/// let items = vec![Outcome::<i32, &str>::new_ok(1), Outcome::new_ok(2)];
/// let collected: Outcome<Vec<i32>, &str> = collect_outcomes(items).unwrap();
/// assert_eq!(collected.unwrap(), vec![1, 2]);
///
/// let items = vec![Outcome::<i32, &str>::new_ok(1), Outcome::default()];
/// let collected: Result<Outcome<Vec<i32>, &str>, _> = collect_outcomes(items);
/// assert_eq!(collected.unwrap_err(), OutcomeError::Uninitialized);
/// ```
pub fn collect_outcomes<A, E, V, I>(outcomes: I) -> Result<Outcome<V, E>, OutcomeError>
where
    I: IntoIterator<Item = Outcome<A, E>>,
    V: FromIterator<A>,
{
    let mut stop = None;
    let collected: V = outcomes
        .into_iter()
        .map_while(|item| match item.into_result() {
            Ok(Ok(value)) => Some(value),
            Ok(Err(error)) => {
                stop = Some(Ok(error));
                None
            }
            Err(misuse) => {
                stop = Some(Err(misuse));
                None
            }
        })
        .collect();

    match stop {
        None => Ok(Outcome::Ok(collected)),
        Some(Ok(error)) => Ok(Outcome::Err(error)),
        Some(Err(misuse)) => Err(misuse),
    }
}
