//! Recipe commands
//!
//! Usage:
//!   recipebook add --title <TITLE> --note <NOTE> [--image <FILE>]
//!   recipebook list [--json]
//!   recipebook show <ID> [--image-out <FILE>]
//!   recipebook delete <ID>

use std::path::PathBuf;

use clap::Args;
use recipebook_core::errors::{ExError, ExErrorKind};
use recipebook_core::rules::validate_image_extension;
use recipebook_core::RecipeId;
use recipebook_engine::{
    apply_engine_command, apply_engine_query, EngineCommand, EngineCommandResult, EngineQuery,
    EngineQueryResult,
};
use recipebook_store::RecipeStore;

use crate::render;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Recipe title
    #[arg(short, long)]
    pub title: String,

    /// Recipe note (ingredients, steps, anything)
    #[arg(short, long)]
    pub note: String,

    /// Picture of the dish (jpg, jpeg or png)
    #[arg(short, long)]
    pub image: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Print the journal as JSON (images base64-encoded)
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Recipe ID to show
    pub id: i64,

    /// Write the stored image to this file
    #[arg(long)]
    pub image_out: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Recipe ID to delete
    pub id: i64,
}

/// Execute add command
pub fn execute_add(args: AddArgs, store: &RecipeStore) -> Result<(), Box<dyn std::error::Error>> {
    let image = match &args.image {
        Some(path) => {
            validate_image_extension(path).map_err(ExError::from)?;
            let bytes = std::fs::read(path).map_err(|e| {
                ExError::new(ExErrorKind::Io)
                    .with_op("read_image")
                    .with_entity_id(path.display().to_string())
                    .with_message(e.to_string())
            })?;
            Some(bytes)
        }
        None => None,
    };

    let cmd = EngineCommand::AddRecipe {
        title: args.title,
        note: args.note,
        image,
    };

    if let EngineCommandResult::RecipeAdded { recipe, view } = apply_engine_command(cmd, store)? {
        println!("Recipe saved successfully! (id {})", recipe.id);
        println!("You now have {} saved recipe(s).", view.recipe_count());
    }
    Ok(())
}

/// Execute list command
pub fn execute_list(args: ListArgs, store: &RecipeStore) -> Result<(), Box<dyn std::error::Error>> {
    let view = match apply_engine_query(EngineQuery::View, store)? {
        EngineQueryResult::View(view) => view,
        other => return Err(unexpected_result("list", &other).into()),
    };

    if args.json {
        let json = serde_json::to_string_pretty(&view).map_err(|e| {
            ExError::new(ExErrorKind::Serialization)
                .with_op("render_json")
                .with_message(e.to_string())
        })?;
        println!("{}", json);
        return Ok(());
    }

    print!("{}", render::render_view(&view));
    Ok(())
}

/// Execute show command
pub fn execute_show(args: ShowArgs, store: &RecipeStore) -> Result<(), Box<dyn std::error::Error>> {
    let query = EngineQuery::GetRecipe {
        recipe_id: RecipeId(args.id),
    };
    let recipe = match apply_engine_query(query, store)? {
        EngineQueryResult::Recipe(recipe) => recipe,
        other => return Err(unexpected_result("show", &other).into()),
    };

    print!("{}", render::render_recipe(&recipe));

    if let Some(output_path) = args.image_out {
        match &recipe.image {
            Some(bytes) => {
                std::fs::write(&output_path, bytes).map_err(|e| {
                    ExError::new(ExErrorKind::Io)
                        .with_op("write_image")
                        .with_entity_id(output_path.display().to_string())
                        .with_message(e.to_string())
                })?;
                println!("Image written to {}", output_path.display());
            }
            None => println!("No image stored for this recipe."),
        }
    }
    Ok(())
}

/// Execute delete command
pub fn execute_delete(
    args: DeleteArgs,
    store: &RecipeStore,
) -> Result<(), Box<dyn std::error::Error>> {
    let cmd = EngineCommand::DeleteRecipe {
        recipe_id: RecipeId(args.id),
    };

    if let EngineCommandResult::RecipeDeleted { view, .. } = apply_engine_command(cmd, store)? {
        println!("Recipe deleted!");
        println!("You now have {} saved recipe(s).", view.recipe_count());
    }
    Ok(())
}

fn unexpected_result(op: &str, result: &EngineQueryResult) -> ExError {
    ExError::new(ExErrorKind::Internal)
        .with_op(op)
        .with_message(format!("unexpected query result: {:?}", result))
}
