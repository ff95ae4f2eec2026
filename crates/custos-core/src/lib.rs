#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Custos Core
//!
//! Leaf types shared by the custos crates. This crate has no internal
//! custos dependencies.
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`access`]: The two-valued access level
//! - [`resource`]: Owned resources and their identifiers
//! - [`subject`]: Principals that hold resources

pub mod access;
pub mod error;
pub mod resource;
pub mod subject;

// Re-exports for convenience
pub use access::AccessLevel;
pub use error::{Error, Result};
pub use resource::{Resource, ResourceId};
pub use subject::Subject;
