//! The owned store handle
//!
//! `RecipeStore` is the only way the rest of the system touches the
//! database. It owns its connection: opening it ensures the schema, dropping
//! or closing it releases the file. The connection is `Send` but not `Sync`,
//! so one store serves one thread of control at a time.

#![allow(clippy::result_large_err)]

use std::path::{Path, PathBuf};

use chrono::{Local, SubsecRound};
use recipebook_core::model::{Identity, NewRecipe, Recipe, RecipeId};
use recipebook_core::rules;
use rusqlite::Connection;

use crate::db;
use crate::errors::{from_rusqlite, rejected, Result};
use crate::repo::SqliteRepo;
use crate::schema;

/// File name used when no database path is configured
pub const DEFAULT_DB_FILE: &str = "fatis_recipes.db";

/// Durable storage of identities and recipes
pub struct RecipeStore {
    conn: Connection,
    path: Option<PathBuf>,
}

impl std::fmt::Debug for RecipeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecipeStore")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

impl RecipeStore {
    /// Open (creating if absent) the database file at `path` and ensure the
    /// schema exists
    ///
    /// # Errors
    /// `StorageUnavailable` if the file cannot be opened or written.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let store = Self {
            conn: db::open(path)?,
            path: Some(path.to_path_buf()),
        };
        store.initialize()?;
        tracing::debug!(path = %path.display(), "recipe store opened");
        Ok(store)
    }

    /// Open a private in-memory store (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let store = Self {
            conn: db::open_in_memory()?,
            path: None,
        };
        store.initialize()?;
        Ok(store)
    }

    /// Idempotently ensure both tables exist
    pub fn initialize(&self) -> Result<()> {
        let existing = schema::ensure_schema(&self.conn)?;
        tracing::debug!(existing, "recipe store initialized");
        Ok(())
    }

    /// Database file backing this store (`None` when in memory)
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Borrow the underlying connection, e.g. for inspection in tests
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// The most recently created identity, or `None` before first run
    pub fn current_identity(&self) -> Result<Option<Identity>> {
        SqliteRepo::latest_identity(&self.conn)
    }

    /// Persist a new identity
    ///
    /// The name is stored exactly as given. Nothing here prevents a second
    /// identity; callers wanting one-time registration must check
    /// `current_identity` first.
    ///
    /// # Errors
    /// `Validation` if the trimmed name is empty (nothing is written).
    pub fn create_identity(&self, name: &str) -> Result<Identity> {
        rules::validate_identity_name(name).map_err(|e| rejected("create_identity", e))?;
        SqliteRepo::insert_identity(&self.conn, name)
    }

    /// Persist a new recipe stamped with the current local time
    ///
    /// # Errors
    /// `Validation` if the trimmed title or note is empty (nothing is
    /// written), `StorageUnavailable` if the insert fails.
    pub fn add_recipe(&self, input: NewRecipe) -> Result<Recipe> {
        rules::validate_recipe_fields(&input.title, &input.note)
            .map_err(|e| rejected("add_recipe", e))?;

        let created_at = Local::now().naive_local().trunc_subsecs(0);
        SqliteRepo::insert_recipe(&self.conn, input, created_at)
    }

    /// All recipes of `owner_name`, most recently added first
    pub fn list_recipes(&self, owner_name: &str) -> Result<Vec<Recipe>> {
        SqliteRepo::list_recipes_by_owner(&self.conn, owner_name)
    }

    /// A single recipe by id
    pub fn get_recipe(&self, id: RecipeId) -> Result<Option<Recipe>> {
        SqliteRepo::get_recipe(&self.conn, id)
    }

    /// Remove a recipe if present; deleting an unknown id is not an error
    pub fn delete_recipe(&self, id: RecipeId) -> Result<()> {
        SqliteRepo::delete_recipe(&self.conn, id)?;
        Ok(())
    }

    /// Release the connection, reporting any error SQLite raises on close
    pub fn close(self) -> Result<()> {
        self.conn
            .close()
            .map_err(|(_conn, e)| from_rusqlite("close_store", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recipebook_core::ExErrorKind;

    #[test]
    fn test_in_memory_store_has_no_path() {
        let store = RecipeStore::open_in_memory().unwrap();
        assert!(store.path().is_none());
        assert!(store.current_identity().unwrap().is_none());
    }

    #[test]
    fn test_open_creates_both_tables() {
        let store = RecipeStore::open_in_memory().unwrap();

        for table in [schema::USERS_TABLE, schema::RECIPES_TABLE] {
            assert!(schema::table_exists(store.connection(), table).unwrap());
        }
    }

    #[test]
    fn test_initialize_twice_is_noop() {
        let store = RecipeStore::open_in_memory().unwrap();
        store.create_identity("Fati").unwrap();

        store.initialize().unwrap();

        assert_eq!(store.current_identity().unwrap().unwrap().name, "Fati");
    }

    #[test]
    fn test_validation_error_names_the_operation() {
        let store = RecipeStore::open_in_memory().unwrap();
        let err = store
            .add_recipe(NewRecipe::new("Fati", "Tea", " "))
            .unwrap_err();

        assert_eq!(err.kind(), ExErrorKind::Validation);
        assert_eq!(err.op(), Some("add_recipe"));
    }

    #[test]
    fn test_close_releases_connection() {
        let store = RecipeStore::open_in_memory().unwrap();
        assert!(store.close().is_ok());
    }
}
