//! A tri-state outcome type with loud failure on misuse.
//!
//! [`Outcome<T, E>`] holds a success value or an error value, and starts out
//! as an explicit uninitialized state when built through [`Default`]. Presence
//! queries panic on that state, while the `unwrap_or*` accessors fall back
//! quietly. [`ResultScope`] binds `T` and `E` once so call sites can write
//! `r.ok(v)` / `r.err(e)`.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `result_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Basic Outcome
//!
//! ```
//! use result_rail::Outcome;
//!
//! let answer = Outcome::<i32, String>::new_ok(42);
//! assert!(answer.is_ok());
//!
//! let renamed = answer.map_ok("x");
//! assert_eq!(renamed.unwrap(), "x");
//!
//! let failed = Outcome::<i32, &str>::new_err("boom");
//! assert_eq!(failed.unwrap_or(99), 99);
//! ```
//!
//! ## Uninitialized Outcome
//!
//! ```
//! use result_rail::Outcome;
//!
//! let blank: Outcome<i32, &str> = Outcome::default();
//! assert_eq!(blank.unwrap_or_default(), 0);
//! ```
//!
//! ```should_panic
//! use result_rail::Outcome;
//!
//! let blank: Outcome<i32, &str> = Outcome::default();
//! let _ = blank.is_ok(); // panics: invalid result type
//! ```
//!
//! ## Scoped Construction
//!
//! ```
//! use result_rail::scope;
//!
//! let r = scope::<u8, &str>();
//! let checks = [r.ok(1), r.err("too big"), r.ok(3)];
//! assert_eq!(checks.iter().filter(|o| o.is_ok()).count(), 2);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

/// Conversions between `Outcome`, `Result` and `Option`
pub mod convert;
/// Misuse conditions and their panic messages
pub mod error;
/// The `Outcome` type and its trait implementations
pub mod outcome;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Type-bound construction helper
pub mod scope;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use convert::*;
pub use error::OutcomeError;
pub use outcome::Outcome;
pub use scope::{scope, ResultScope};
