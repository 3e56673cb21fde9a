//! # cp-core
//!
//! Core types, traits, and error definitions for creational-patterns.
//!
//! This crate provides the building blocks for the Singleton exercise: the
//! [`SameInstance`] identity trait and the `is_singleton` family of checks,
//! the shared [`Handle`] reference, the error type, and process-wide
//! [`Settings`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

/// Shared reference handle (`Handle<T>`).
pub mod handle;

/// Design patterns: identity checks.
pub mod patterns;

/// Global library settings (default sample count).
pub mod settings;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use handle::Handle;
pub use patterns::identity::{
    check_identity, is_singleton, is_singleton_default, is_singleton_n, try_is_singleton,
    IdentityReport, SameInstance,
};
pub use settings::Settings;
