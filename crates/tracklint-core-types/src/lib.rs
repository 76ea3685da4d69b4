//! Core types shared across tracklint crates
//!
//! This crate provides foundational types used by the error and logging
//! facilities:
//!
//! - **Correlation types**: RunId, one per lint invocation
//! - **Schema constants**: Canonical field keys and event names

pub mod correlation;
pub mod schema;

pub use correlation::RunId;
