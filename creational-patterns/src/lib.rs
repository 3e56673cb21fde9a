//! # creational-patterns
//!
//! Exercises for the creational design patterns.  This crate is a **façade**
//! that re-exports the public items of `cp-core`; application code should
//! depend on it rather than on `cp-core` directly.
//!
//! ## Quick start
//!
//! ```rust
//! use creational_patterns::is_singleton;
//!
//! static GLOBAL: [i32; 3] = [1, 2, 3];
//!
//! fn shared() -> &'static [i32; 3] {
//!     &GLOBAL
//! }
//!
//! assert!(is_singleton(shared));
//! assert!(!is_singleton(|| std::sync::Arc::new(GLOBAL)));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, identity checks, and error definitions.
pub use cp_core as core;

pub use cp_core::{
    check_identity, is_singleton, is_singleton_default, is_singleton_n, try_is_singleton, Error,
    Handle, IdentityReport, Result, SameInstance, Settings,
};
