//! Tracing integration for result-rail.
//!
//! Adds pass-through combinators that report the error branch, or an
//! uninitialized outcome, as `tracing` events without changing the value.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! result-rail = { version = "0.1", features = ["tracing"] }
//! ```
//!
//! # Examples
//!
//! ```
//! use result_rail::tracing_ext::TracingOutcomeExt;
//! use result_rail::Outcome;
//!
//! let o = Outcome::<i32, &str>::new_err("disk full").trace_err("writing snapshot");
//! assert_eq!(o.unwrap_err(), "disk full");
//! ```

use core::fmt::Debug;

use crate::outcome::Outcome;

/// Extension trait that logs an [`Outcome`] and hands it back unchanged.
pub trait TracingOutcomeExt: Sized {
    /// Emits an `ERROR` event with `message` and the error value when the
    /// outcome holds an error.
    fn trace_err(self, message: &str) -> Self;

    /// Emits a `WARN` event when the outcome is uninitialized.
    fn trace_uninit(self) -> Self;
}

impl<T, E: Debug> TracingOutcomeExt for Outcome<T, E> {
    fn trace_err(self, message: &str) -> Self {
        self.inspect_err(|error| {
            tracing::error!(error = ?error, "{}", message);
        })
    }

    fn trace_uninit(self) -> Self {
        if self.is_uninit() {
            tracing::warn!(
                ok_type = core::any::type_name::<T>(),
                err_type = core::any::type_name::<E>(),
                "outcome was never initialized"
            );
        }
        self
    }
}
