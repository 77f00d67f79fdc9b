//! Core infrastructure — shared foundation used across the whole crate.
//!
//! - **config** — settings schema, loading and the resolved registry.
//! - **error** — application-wide error enum.

pub mod config;
pub mod error;
