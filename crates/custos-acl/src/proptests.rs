//! Property-based tests for the access list.
