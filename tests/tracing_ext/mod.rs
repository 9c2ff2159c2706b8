//! Tests for tracing integration.

mod events;
mod tracing_tests;
