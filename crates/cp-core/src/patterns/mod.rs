//! Patterns sub-module: identity checks for the Singleton pattern.

pub mod identity;
