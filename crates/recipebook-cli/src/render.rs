//! Plain-text rendering of the journal

use recipebook_core::Recipe;
use recipebook_engine::JournalView;

const SEPARATOR: &str = "---";

/// Render one recipe as a block of text
pub fn render_recipe(recipe: &Recipe) -> String {
    let mut out = String::new();
    out.push_str(&format!("[{}] {}\n", recipe.id, recipe.title));
    out.push_str(&format!("Added on: {}\n", recipe.created_at_display()));
    out.push_str(&format!("Note: {}\n", recipe.note));
    if recipe.has_image() {
        out.push_str(&format!("Image: {} bytes\n", recipe.image_len()));
    }
    out
}

/// Render the journal the way the start page shows it
pub fn render_view(view: &JournalView) -> String {
    let Some(identity) = &view.identity else {
        return "No name saved yet. Run `recipebook register <NAME>` first.\n".to_string();
    };

    let mut out = format!("Hello, {}\n\nYour Saved Recipes\n\n", identity.name);
    if view.recipes.is_empty() {
        out.push_str("You haven't added any recipes yet.\n");
        return out;
    }

    for recipe in &view.recipes {
        out.push_str(&render_recipe(recipe));
        out.push_str(SEPARATOR);
        out.push('\n');
    }
    out
}
