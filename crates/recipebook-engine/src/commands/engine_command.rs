//! Engine-level mutation commands.
//!
//! Every command runs inside a `command` span tagged with a fresh
//! `RequestId`, and every successful mutation returns the journal view
//! re-fetched after the write.

#![allow(clippy::result_large_err)]

use recipebook_core::{Identity, Recipe, RecipeId};
use recipebook_core_types::RequestId;
use recipebook_store::errors::Result;
use recipebook_store::RecipeStore;

use crate::commands::view::{load_view, JournalView};
use crate::commands::{identity, recipe};

/// Commands that change the journal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCommand {
    /// One-time identity registration
    RegisterIdentity { name: String },
    /// Save a recipe for the current identity
    AddRecipe {
        title: String,
        note: String,
        image: Option<Vec<u8>>,
    },
    /// Delete a recipe by id (idempotent)
    DeleteRecipe { recipe_id: RecipeId },
}

impl EngineCommand {
    /// Operation name used for the command span
    pub fn name(&self) -> &'static str {
        match self {
            EngineCommand::RegisterIdentity { .. } => "register_identity",
            EngineCommand::AddRecipe { .. } => "add_recipe",
            EngineCommand::DeleteRecipe { .. } => "delete_recipe",
        }
    }
}

/// Result of applying an engine command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCommandResult {
    IdentityRegistered {
        identity: Identity,
        view: JournalView,
    },
    RecipeAdded {
        recipe: Recipe,
        view: JournalView,
    },
    RecipeDeleted {
        recipe_id: RecipeId,
        view: JournalView,
    },
}

impl EngineCommandResult {
    /// The view re-fetched after the mutation
    pub fn view(&self) -> &JournalView {
        match self {
            EngineCommandResult::IdentityRegistered { view, .. }
            | EngineCommandResult::RecipeAdded { view, .. }
            | EngineCommandResult::RecipeDeleted { view, .. } => view,
        }
    }
}

/// Apply an engine command against the store.
///
/// Errors carry the command's `RequestId`.
pub fn apply_engine_command(cmd: EngineCommand, store: &RecipeStore) -> Result<EngineCommandResult> {
    let request_id = RequestId::new();
    let span = tracing::info_span!(
        "command",
        command = cmd.name(),
        request_id = %request_id
    );
    let _entered = span.enter();

    apply_inner(cmd, store).map_err(|e| e.with_request_id(request_id))
}

fn apply_inner(cmd: EngineCommand, store: &RecipeStore) -> Result<EngineCommandResult> {
    match cmd {
        EngineCommand::RegisterIdentity { name } => {
            let identity = identity::identity_register(&name, store)?;
            Ok(EngineCommandResult::IdentityRegistered {
                identity,
                view: load_view(store)?,
            })
        }
        EngineCommand::AddRecipe { title, note, image } => {
            let recipe = recipe::recipe_add(&title, &note, image, store)?;
            Ok(EngineCommandResult::RecipeAdded {
                recipe,
                view: load_view(store)?,
            })
        }
        EngineCommand::DeleteRecipe { recipe_id } => {
            recipe::recipe_delete(recipe_id, store)?;
            Ok(EngineCommandResult::RecipeDeleted {
                recipe_id,
                view: load_view(store)?,
            })
        }
    }
}
