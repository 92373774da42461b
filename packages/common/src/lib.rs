//! Common infrastructure shared by the saslmech crates
//!
//! This crate provides:
//! - Error handling with context propagation
//! - Logging bootstrap on top of the `log` facade

pub mod error;

pub use error::*;
