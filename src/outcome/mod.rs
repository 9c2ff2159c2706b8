//! The [`Outcome`] type and its trait implementations.
//!
//! An [`Outcome`] is either a success value, an error value, or the
//! uninitialized default. Construction goes through [`Outcome::new_ok`] and
//! [`Outcome::new_err`] (or a bound [`ResultScope`](crate::scope::ResultScope));
//! everything else is a pure function of the receiver.
//!
//! # Key Components
//!
//! - [`Outcome`] - The tri-state container with its query, extraction and mapping API
//! - Iterator adapters over the success value
//! - `Clone`, `From`, `TryFrom` and `FromIterator` implementations
//!
//! # Examples
//!
//! ```
//! use result_rail::outcome::Outcome;
//!
//! let ok: Outcome<i32, String> = Outcome::new_ok(42);
//! assert!(ok.is_ok());
//!
//! let err: Outcome<i32, &str> = Outcome::new_err("boom");
//! assert_eq!(err.map_ok("x").unwrap_err(), "boom");
//! ```
pub mod core;
pub mod iter;
pub mod traits;

pub use self::core::*;
pub use self::iter::*;
// traits only holds impl blocks, which apply as soon as the module compiles
