//! Arbor Tree Storage
//!
//! This crate provides the in-memory node graph behind a handle:
//! - Node storage keyed by id, plus the root id
//! - Sequential id allocation that never reuses an id
//! - Subtree and ancestry walks guarded by visited sets
//! - Integrity checking of parent/child references

mod integrity;
mod tree;

pub use tree::*;
