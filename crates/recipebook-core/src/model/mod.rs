//! Typed records for the journal's two entities

pub mod identity;
pub mod recipe;

pub use identity::{Identity, IdentityId};
pub use recipe::{NewRecipe, Recipe, RecipeId, CREATED_AT_FORMAT};
