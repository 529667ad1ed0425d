//! Views of the recipe application.

use crate::routing::RouteParams;
use crate::views::View;

/// Handle of the recipe list.
pub const HOME: &str = "home";

/// Handle of a single recipe.
pub const RECIPE_DETAIL: &str = "recipe-detail";

/// Landing page listing recipes.
#[derive(Debug, Default, Clone, Copy)]
pub struct HomeView;

impl View for HomeView {
    fn render(&self, _params: &RouteParams) -> String {
        "Recipes".to_string()
    }
}

/// Detail page for the recipe bound to `id`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RecipeDetailView;

impl View for RecipeDetailView {
    fn render(&self, params: &RouteParams) -> String {
        match params.get("id") {
            Some(id) => format!("Recipe {id}"),
            None => "Recipe".to_string(),
        }
    }
}
