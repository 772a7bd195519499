// Integration tests for RecipeStore operations
// Covers identity lifecycle, recipe insert/list/delete and validation

use chrono::{Local, NaiveDateTime, SubsecRound};
use recipebook_core::model::CREATED_AT_FORMAT;
use recipebook_core::{ExErrorKind, NewRecipe, RecipeId};
use recipebook_store::RecipeStore;

fn setup_store() -> RecipeStore {
    RecipeStore::open_in_memory().unwrap()
}

fn count_rows(store: &RecipeStore, table: &str) -> i64 {
    store
        .connection()
        .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
            row.get(0)
        })
        .unwrap()
}

#[test]
fn test_create_identity_then_current_identity() {
    // Given: a fresh store
    let store = setup_store();

    // When: an identity is created
    let created = store.create_identity("Fati").unwrap();

    // Then: it is the current identity
    let current = store.current_identity().unwrap().unwrap();
    assert_eq!(current, created);
    assert_eq!(current.name, "Fati");
}

#[test]
fn test_blank_identity_names_rejected_without_insert() {
    let store = setup_store();

    for name in ["", "   "] {
        let err = store.create_identity(name).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::Validation);
    }

    assert_eq!(count_rows(&store, "users"), 0);
    assert!(store.current_identity().unwrap().is_none());
}

#[test]
fn test_identity_name_stored_as_entered() {
    let store = setup_store();
    store.create_identity("  Fati ").unwrap();

    assert_eq!(store.current_identity().unwrap().unwrap().name, "  Fati ");
}

#[test]
fn test_second_identity_becomes_current() {
    // The store itself does not guard against a second identity
    let store = setup_store();
    let first = store.create_identity("Fati").unwrap();
    let second = store.create_identity("Amina").unwrap();

    assert!(second.id > first.id);
    assert_eq!(store.current_identity().unwrap().unwrap(), second);
}

#[test]
fn test_list_recipes_newest_first() {
    let store = setup_store();
    let titles = ["Tea", "Soup", "Bread", "Salad"];
    for title in titles {
        store
            .add_recipe(NewRecipe::new("Fati", title, "Some steps"))
            .unwrap();
    }

    let recipes = store.list_recipes("Fati").unwrap();

    assert_eq!(recipes.len(), titles.len());
    let listed: Vec<&str> = recipes.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(listed, vec!["Salad", "Bread", "Soup", "Tea"]);
    assert!(recipes.windows(2).all(|w| w[0].id > w[1].id));
}

#[test]
fn test_list_recipes_filters_by_owner() {
    let store = setup_store();
    store
        .add_recipe(NewRecipe::new("Fati", "Tea", "Steep"))
        .unwrap();
    store
        .add_recipe(NewRecipe::new("Amina", "Coffee", "Brew"))
        .unwrap();

    let fati = store.list_recipes("Fati").unwrap();
    assert_eq!(fati.len(), 1);
    assert_eq!(fati[0].owner_name, "Fati");

    assert!(store.list_recipes("Nobody").unwrap().is_empty());
}

#[test]
fn test_blank_recipe_fields_rejected_without_insert() {
    let store = setup_store();
    store
        .add_recipe(NewRecipe::new("Fati", "Tea", "Steep"))
        .unwrap();

    let missing_title = store
        .add_recipe(NewRecipe::new("Fati", "", "note"))
        .unwrap_err();
    let missing_note = store
        .add_recipe(NewRecipe::new("Fati", "title", ""))
        .unwrap_err();

    assert_eq!(missing_title.kind(), ExErrorKind::Validation);
    assert_eq!(missing_note.kind(), ExErrorKind::Validation);
    assert_eq!(count_rows(&store, "recipes"), 1);
}

#[test]
fn test_delete_unknown_id_is_noop() {
    let store = setup_store();
    store
        .add_recipe(NewRecipe::new("Fati", "Tea", "Steep"))
        .unwrap();

    store.delete_recipe(RecipeId(4242)).unwrap();

    assert_eq!(count_rows(&store, "recipes"), 1);
}

#[test]
fn test_image_and_timestamp_round_trip() {
    // Given: image bytes that are not valid UTF-8 and contain NULs
    let store = setup_store();
    let image_bytes: Vec<u8> = vec![0x89, 0x50, 0x4E, 0x47, 0x00, 0xFF, 0x00, 0x10];
    let before = Local::now().naive_local().trunc_subsecs(0);

    // When: a recipe with that image is added and listed
    store
        .add_recipe(
            NewRecipe::new("Fati", "Pasta", "Boil water, add pasta")
                .with_image(image_bytes.clone()),
        )
        .unwrap();
    let recipes = store.list_recipes("Fati").unwrap();

    // Then: bytes match exactly and created_at is well-formed and not early
    assert_eq!(recipes.len(), 1);
    let recipe = &recipes[0];
    assert_eq!(recipe.image.as_deref(), Some(image_bytes.as_slice()));
    assert!(recipe.created_at >= before);

    let raw: String = store
        .connection()
        .query_row(
            "SELECT created_at FROM recipes WHERE id = ?1",
            [recipe.id.0],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(raw.len(), "YYYY-MM-DD HH:MM:SS".len());
    assert_eq!(
        NaiveDateTime::parse_from_str(&raw, CREATED_AT_FORMAT).unwrap(),
        recipe.created_at
    );
}

#[test]
fn test_recipe_without_image_has_null_blob() {
    let store = setup_store();
    let recipe = store
        .add_recipe(NewRecipe::new("Fati", "Tea", "Steep"))
        .unwrap();

    let is_null: bool = store
        .connection()
        .query_row(
            "SELECT image IS NULL FROM recipes WHERE id = ?1",
            [recipe.id.0],
            |row| row.get(0),
        )
        .unwrap();
    assert!(is_null);
    assert!(!store.list_recipes("Fati").unwrap()[0].has_image());
}

#[test]
fn test_end_to_end_first_run() {
    // Given: a fresh store with no identity
    let store = setup_store();
    assert!(store.current_identity().unwrap().is_none());

    // When: the user registers and saves one recipe
    store.create_identity("Fati").unwrap();
    store
        .add_recipe(NewRecipe::new("Fati", "Tea", "Steep 3 min"))
        .unwrap();

    // Then: exactly that recipe is listed
    let recipes = store.list_recipes("Fati").unwrap();
    assert_eq!(recipes.len(), 1);
    assert_eq!(recipes[0].title, "Tea");

    // And: deleting it empties the list
    store.delete_recipe(recipes[0].id).unwrap();
    assert!(store.list_recipes("Fati").unwrap().is_empty());
}
