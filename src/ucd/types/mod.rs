//! Foundational data structures, error types, and property value definitions.

pub mod error;
pub mod models;
pub mod properties;
