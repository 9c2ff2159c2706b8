//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use result_rail::prelude::*;
//!
//! fn lookup(id: u32) -> Outcome<&'static str, OutcomeError> {
//!     let r = scope();
//!     if id == 1 { r.ok("root") } else { r.err(OutcomeError::MissingOk) }
//! }
//!
//! assert_eq!(lookup(1).unwrap(), "root");
//! assert!(lookup(2).is_err());
//! ```

pub use crate::error::OutcomeError;
pub use crate::outcome::Outcome;
pub use crate::scope::{scope, ResultScope};

#[cfg(feature = "tracing")]
pub use crate::tracing_ext::TracingOutcomeExt;
