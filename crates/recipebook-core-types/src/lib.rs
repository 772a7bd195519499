//! Core types shared across recipebook facilities
//!
//! This crate provides the foundational types used by both the error and
//! logging facilities:
//!
//! - **Correlation types**: RequestId for tagging one command's events
//! - **Schema constants**: Canonical field keys and event names

pub mod correlation;
pub mod schema;

pub use correlation::RequestId;
