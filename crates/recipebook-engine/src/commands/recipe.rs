//! Recipe command handlers with boundary logging.
//!
//! Recipes are always owned by the current identity; commands issued before
//! an identity is registered fail with `IdentityMissing`.

#![allow(clippy::result_large_err)]

use recipebook_core::errors::JournalError;
use recipebook_core::{log_op_end, log_op_error, log_op_start, Identity, NewRecipe, Recipe, RecipeId};
use recipebook_store::errors::Result;
use recipebook_store::RecipeStore;

/// Add a recipe for the current identity
///
/// ## Arguments
///
/// - `title`: Recipe title
/// - `note`: Free-text recipe note
/// - `image`: Optional raw image bytes, stored as-is
/// - `store`: The open recipe store
///
/// ## Errors
///
/// - `IdentityMissing`: No identity registered yet
/// - `Validation`: Title or note is empty after trimming
/// - `StorageUnavailable`: Database error
pub fn recipe_add(
    title: &str,
    note: &str,
    image: Option<Vec<u8>>,
    store: &RecipeStore,
) -> Result<Recipe> {
    log_op_start!(
        "recipe_add",
        image_len = image.as_ref().map_or(0, Vec::len) as u64
    );
    let start = std::time::Instant::now();

    let result = recipe_add_impl(title, note, image, store).map_err(|e| {
        log_op_error!(
            "recipe_add",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "recipe_add",
        duration_ms = start.elapsed().as_millis() as u64,
        recipe_id = result.id.0
    );

    Ok(result)
}

fn recipe_add_impl(
    title: &str,
    note: &str,
    image: Option<Vec<u8>>,
    store: &RecipeStore,
) -> Result<Recipe> {
    let owner = require_identity(store)?;

    let mut input = NewRecipe::new(owner.name, title, note);
    input.image = image;
    store.add_recipe(input)
}

/// List the current identity's recipes, newest first
///
/// ## Errors
///
/// - `IdentityMissing`: No identity registered yet
/// - `StorageUnavailable`: Database error
pub fn recipe_list(store: &RecipeStore) -> Result<Vec<Recipe>> {
    log_op_start!("recipe_list");
    let start = std::time::Instant::now();

    let result = require_identity(store)
        .and_then(|owner| store.list_recipes(&owner.name))
        .map_err(|e| {
            log_op_error!(
                "recipe_list",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

    log_op_end!(
        "recipe_list",
        duration_ms = start.elapsed().as_millis() as u64,
        recipe_count = result.len() as u64
    );

    Ok(result)
}

/// Fetch one recipe by id
///
/// ## Errors
///
/// - `NotFound`: No recipe with that id
/// - `StorageUnavailable`: Database error
pub fn recipe_get(recipe_id: RecipeId, store: &RecipeStore) -> Result<Recipe> {
    log_op_start!("recipe_get", recipe_id = recipe_id.0);
    let start = std::time::Instant::now();

    let result = store
        .get_recipe(recipe_id)
        .and_then(|found| {
            found.ok_or_else(|| {
                JournalError::RecipeNotFound {
                    recipe_id: recipe_id.0,
                }
                .into()
            })
        })
        .map_err(|e| {
            log_op_error!(
                "recipe_get",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

    log_op_end!(
        "recipe_get",
        duration_ms = start.elapsed().as_millis() as u64
    );

    Ok(result)
}

/// Delete a recipe by id; unknown ids succeed without effect
///
/// ## Errors
///
/// - `StorageUnavailable`: Database error
pub fn recipe_delete(recipe_id: RecipeId, store: &RecipeStore) -> Result<()> {
    log_op_start!("recipe_delete", recipe_id = recipe_id.0);
    let start = std::time::Instant::now();

    store.delete_recipe(recipe_id).map_err(|e| {
        log_op_error!(
            "recipe_delete",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "recipe_delete",
        duration_ms = start.elapsed().as_millis() as u64
    );

    Ok(())
}

fn require_identity(store: &RecipeStore) -> Result<Identity> {
    store
        .current_identity()?
        .ok_or_else(|| JournalError::IdentityMissing.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use recipebook_core::ExErrorKind;

    fn registered_store() -> RecipeStore {
        let store = RecipeStore::open_in_memory().unwrap();
        store.create_identity("Fati").unwrap();
        store
    }

    #[test]
    fn test_add_uses_current_identity_as_owner() {
        let store = registered_store();

        let recipe = recipe_add("Tea", "Steep 3 min", None, &store).unwrap();

        assert_eq!(recipe.owner_name, "Fati");
        assert_eq!(recipe_list(&store).unwrap(), vec![recipe]);
    }

    #[test]
    fn test_add_before_registration_rejected() {
        let store = RecipeStore::open_in_memory().unwrap();

        let err = recipe_add("Tea", "Steep", None, &store).unwrap_err();

        assert_eq!(err.kind(), ExErrorKind::IdentityMissing);
    }

    #[test]
    fn test_get_unknown_recipe_is_not_found() {
        let store = registered_store();

        let err = recipe_get(RecipeId(77), &store).unwrap_err();

        assert_eq!(err.kind(), ExErrorKind::NotFound);
        assert_eq!(err.entity_id(), Some("77"));
    }

    #[test]
    fn test_delete_then_get_is_not_found() {
        let store = registered_store();
        let recipe = recipe_add("Tea", "Steep", Some(vec![1]), &store).unwrap();
        assert_eq!(recipe_get(recipe.id, &store).unwrap().image, Some(vec![1]));

        recipe_delete(recipe.id, &store).unwrap();
        recipe_delete(recipe.id, &store).unwrap();

        assert!(recipe_get(recipe.id, &store).is_err());
    }
}
