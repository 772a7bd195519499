//! Recipebook Core - domain records, validation rules and shared facilities
//!
//! This crate provides:
//! - Typed Identity and Recipe records
//! - Input validation for user-entered text and uploaded images
//! - The structured error facility (`ExError`, `ExErrorKind`)
//! - The structured logging facility and its lifecycle macros

pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod rules;

// Used by the logging macros so callers need no direct dependency
pub use recipebook_core_types as core_types;

// Re-export commonly used types
pub use errors::{ExError, ExErrorKind, JournalError, Result};
pub use model::{Identity, IdentityId, NewRecipe, Recipe, RecipeId};
