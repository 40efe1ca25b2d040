//! Test utilities for Siidona services.
//!
//! Provides `MockSession` for building session cookies in router tests.
//! Import in test code only, never in production code.

pub mod session;
