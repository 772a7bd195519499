//! Engine-level read queries.

#![allow(clippy::result_large_err)]

use recipebook_core::{Identity, Recipe, RecipeId};
use recipebook_core_types::RequestId;
use recipebook_store::errors::Result;
use recipebook_store::RecipeStore;

use crate::commands::view::{load_view, JournalView};
use crate::commands::{identity, recipe};

/// Read-only questions the UI asks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineQuery {
    CurrentIdentity,
    ListRecipes,
    GetRecipe { recipe_id: RecipeId },
    /// Identity and recipes together, as rendered on start-up
    View,
}

impl EngineQuery {
    pub fn name(&self) -> &'static str {
        match self {
            EngineQuery::CurrentIdentity => "current_identity",
            EngineQuery::ListRecipes => "list_recipes",
            EngineQuery::GetRecipe { .. } => "get_recipe",
            EngineQuery::View => "view",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineQueryResult {
    CurrentIdentity(Option<Identity>),
    Recipes(Vec<Recipe>),
    Recipe(Recipe),
    View(JournalView),
}

/// Answer a query from the store; no query writes anything
pub fn apply_engine_query(query: EngineQuery, store: &RecipeStore) -> Result<EngineQueryResult> {
    let request_id = RequestId::new();
    let span = tracing::info_span!(
        "query",
        query = query.name(),
        request_id = %request_id
    );
    let _entered = span.enter();

    let result = match query {
        EngineQuery::CurrentIdentity => {
            identity::identity_current(store).map(EngineQueryResult::CurrentIdentity)
        }
        EngineQuery::ListRecipes => recipe::recipe_list(store).map(EngineQueryResult::Recipes),
        EngineQuery::GetRecipe { recipe_id } => {
            recipe::recipe_get(recipe_id, store).map(EngineQueryResult::Recipe)
        }
        EngineQuery::View => load_view(store).map(EngineQueryResult::View),
    };

    result.map_err(|e| e.with_request_id(request_id))
}
