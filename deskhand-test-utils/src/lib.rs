//! Test utilities shared across the deskhand workspace
//!
//! This crate provides common testing infrastructure including:
//! - Scoped environment variable overrides ([`EnvVarGuard`])
//!
//! The clippy dead_code lint is disabled for this crate because test utilities
//! may not be used by all tests, and the compiler cannot detect usage across
//! crate boundaries in development dependencies.

#![allow(dead_code)]

pub mod env;

// Re-export commonly used items
pub use env::EnvVarGuard;
