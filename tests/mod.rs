pub mod outcome;
pub mod scope;

#[cfg(feature = "tracing")]
pub mod tracing_ext;
