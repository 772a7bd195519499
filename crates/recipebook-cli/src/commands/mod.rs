//! Subcommand implementations
//!
//! Each handler goes through the engine so that lifecycle logging and view
//! refresh happen the same way for every front end.

pub mod identity;
pub mod recipe;
