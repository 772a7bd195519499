//! Recipebook Store - SQLite persistence for identities and recipes
//!
//! Provides:
//! - Connection opening
//! - Idempotent schema creation for the `users` and `recipes` tables
//! - Repository functions decoding rows into typed records
//! - `RecipeStore`, the owned handle the UI layer works through

pub mod db;
pub mod errors;
pub mod repo;
pub mod schema;
pub mod store;

// Re-export key types
pub use errors::Result;
pub use store::{RecipeStore, DEFAULT_DB_FILE};
