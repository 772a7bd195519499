//! SQLite repository implementation
//!
//! Each function is one statement in auto-commit mode. Rows are decoded into
//! `Identity` / `Recipe` here; no positional tuples leave this module.
//! Input is assumed valid: rules are enforced by `RecipeStore`.

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, Result};
use chrono::NaiveDateTime;
use recipebook_core::model::{Identity, IdentityId, NewRecipe, Recipe, RecipeId, CREATED_AT_FORMAT};
use rusqlite::types::Type;
use rusqlite::{Connection, OptionalExtension, Row};

const RECIPE_COLUMNS: &str = "id, username, title, note, image, created_at";

/// SQLite repository for identities and recipes
pub struct SqliteRepo;

impl SqliteRepo {
    /// Insert an identity row and return it with its assigned id
    pub fn insert_identity(conn: &Connection, name: &str) -> Result<Identity> {
        conn.execute("INSERT INTO users (username) VALUES (?1)", [name])
            .map_err(|e| from_rusqlite("create_identity", e))?;

        let id = IdentityId(conn.last_insert_rowid());
        tracing::debug!(identity_id = id.0, "identity row inserted");
        Ok(Identity::new(id, name))
    }

    /// The identity with the highest id, if any
    pub fn latest_identity(conn: &Connection) -> Result<Option<Identity>> {
        conn.query_row(
            "SELECT id, username FROM users ORDER BY id DESC LIMIT 1",
            [],
            |row| {
                Ok(Identity {
                    id: IdentityId(row.get(0)?),
                    name: row.get(1)?,
                })
            },
        )
        .optional()
        .map_err(|e| from_rusqlite("current_identity", e))
    }

    /// Insert a recipe stamped with `created_at` and return the stored row
    pub fn insert_recipe(
        conn: &Connection,
        input: NewRecipe,
        created_at: NaiveDateTime,
    ) -> Result<Recipe> {
        conn.execute(
            "INSERT INTO recipes (username, title, note, image, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            rusqlite::params![
                input.owner_name,
                input.title,
                input.note,
                input.image,
                created_at.format(CREATED_AT_FORMAT).to_string(),
            ],
        )
        .map_err(|e| from_rusqlite("add_recipe", e))?;

        let id = RecipeId(conn.last_insert_rowid());
        tracing::debug!(
            recipe_id = id.0,
            image_len = input.image.as_ref().map_or(0, Vec::len),
            "recipe row inserted"
        );

        Ok(Recipe {
            id,
            owner_name: input.owner_name,
            title: input.title,
            note: input.note,
            image: input.image,
            created_at,
        })
    }

    /// All recipes for an owner, most recently added first
    pub fn list_recipes_by_owner(conn: &Connection, owner_name: &str) -> Result<Vec<Recipe>> {
        let mut stmt = conn
            .prepare(&format!(
                "SELECT {RECIPE_COLUMNS} FROM recipes WHERE username = ?1 ORDER BY id DESC"
            ))
            .map_err(|e| from_rusqlite("list_recipes", e))?;

        let recipes = stmt
            .query_map([owner_name], recipe_from_row)
            .map_err(|e| from_rusqlite("list_recipes", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| from_rusqlite("list_recipes", e))?;

        tracing::debug!(recipe_count = recipes.len(), "recipes listed");
        Ok(recipes)
    }

    /// A single recipe by id
    pub fn get_recipe(conn: &Connection, id: RecipeId) -> Result<Option<Recipe>> {
        conn.query_row(
            &format!("SELECT {RECIPE_COLUMNS} FROM recipes WHERE id = ?1"),
            [id.0],
            recipe_from_row,
        )
        .optional()
        .map_err(|e| from_rusqlite("get_recipe", e))
    }

    /// Delete a recipe by id, returning the number of rows removed (0 or 1)
    pub fn delete_recipe(conn: &Connection, id: RecipeId) -> Result<usize> {
        let removed = conn
            .execute("DELETE FROM recipes WHERE id = ?1", [id.0])
            .map_err(|e| from_rusqlite("delete_recipe", e))?;

        tracing::debug!(recipe_id = id.0, removed, "recipe delete executed");
        Ok(removed)
    }
}

fn recipe_from_row(row: &Row<'_>) -> rusqlite::Result<Recipe> {
    let created_at_text: String = row.get(5)?;
    let created_at = NaiveDateTime::parse_from_str(&created_at_text, CREATED_AT_FORMAT)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(5, Type::Text, Box::new(e)))?;

    Ok(Recipe {
        id: RecipeId(row.get(0)?),
        owner_name: row.get(1)?,
        title: row.get(2)?,
        note: row.get(3)?,
        image: row.get(4)?,
        created_at,
    })
}
