//! # custos-acl
//!
//! In-memory access control list for custos.
//!
//! This crate provides the [`Acl`] container:
//! - Subjects keyed by value, each holding any number of owned resources
//! - A binary access level per (subject, resource) pair
//! - Globally increasing resource ids, starting at 1
//! - Ownership hand-back through `try_pop`
//!
//! The leaf types from `custos-core` are re-exported, so most callers only
//! depend on this crate.

#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod acl;
pub mod config;
mod proptests;

pub use acl::{Acl, AclStats};
pub use config::{AclConfig, PopPolicy};

// Re-export key types at crate root for convenience
pub use custos_core::{AccessLevel, Error, Resource, ResourceId, Result, Subject};
