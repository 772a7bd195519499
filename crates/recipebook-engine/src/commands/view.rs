//! The journal as the UI renders it

#![allow(clippy::result_large_err)]

use recipebook_core::{Identity, Recipe};
use recipebook_store::errors::Result;
use recipebook_store::RecipeStore;
use serde::Serialize;

/// Current identity plus that identity's recipes, newest first
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JournalView {
    pub identity: Option<Identity>,
    pub recipes: Vec<Recipe>,
}

impl JournalView {
    /// No identity registered yet: the UI should ask for a name
    pub fn is_first_run(&self) -> bool {
        self.identity.is_none()
    }

    pub fn recipe_count(&self) -> usize {
        self.recipes.len()
    }
}

/// Re-fetch the view from the store
pub fn load_view(store: &RecipeStore) -> Result<JournalView> {
    let identity = store.current_identity()?;
    let recipes = match &identity {
        Some(identity) => store.list_recipes(&identity.name)?,
        None => Vec::new(),
    };
    Ok(JournalView { identity, recipes })
}

#[cfg(test)]
mod tests {
    use super::*;
    use recipebook_core::NewRecipe;

    #[test]
    fn test_view_of_fresh_store_is_first_run() {
        let store = RecipeStore::open_in_memory().unwrap();
        let view = load_view(&store).unwrap();

        assert!(view.is_first_run());
        assert_eq!(view.recipe_count(), 0);
    }

    #[test]
    fn test_view_only_contains_current_identity_recipes() {
        let store = RecipeStore::open_in_memory().unwrap();
        store.create_identity("Fati").unwrap();
        store
            .add_recipe(NewRecipe::new("Fati", "Tea", "Steep"))
            .unwrap();
        store
            .add_recipe(NewRecipe::new("Someone", "Coffee", "Brew"))
            .unwrap();

        let view = load_view(&store).unwrap();

        assert!(!view.is_first_run());
        assert_eq!(view.recipe_count(), 1);
        assert_eq!(view.recipes[0].title, "Tea");
    }
}
