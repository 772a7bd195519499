//! Command orchestration layer.
//!
//! ## Logging Ownership
//!
//! Functions in `identity` and `recipe` own lifecycle logging:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on failure
//!
//! The store underneath only uses `tracing::debug!()`.

pub mod engine_command;
pub mod engine_query;
pub mod identity;
pub mod recipe;
pub mod view;
