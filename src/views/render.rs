// ABOUTME: Plain-text rendering of the dashboard, pantry, suggestions and shopping views
// ABOUTME: Derives makeable recipes and low-stock items from the view's snapshots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Recipes Contributors

use super::View;
use crate::intelligence::{compute_low_stock, compute_makeable};
use pantry_core::models::{PantryItem, Recipe};

/// Snapshots a view renders from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    /// Latest pantry snapshot
    pub pantry: Vec<PantryItem>,
    /// Latest recipe snapshot
    pub recipes: Vec<Recipe>,
}

impl ViewState {
    /// Recipes makeable from this state
    #[must_use]
    pub fn makeable(&self) -> Vec<Recipe> {
        compute_makeable(&self.recipes, &self.pantry)
    }

    /// Pantry items below `threshold`
    #[must_use]
    pub fn low_stock(&self, threshold: u32) -> Vec<PantryItem> {
        compute_low_stock(&self.pantry, threshold)
    }
}

/// Welcome text
#[must_use]
pub fn render_dashboard() -> String {
    [
        "Recipe Suggestion App",
        "",
        "Welcome to the Recipe Ingredient Inventory & Suggestion App!",
        "Use the navigation to manage your pantry, view recipe suggestions, and check your shopping list.",
    ]
    .join("\n")
}

/// Pantry items as `name - quantity` with their ids
#[must_use]
pub fn render_pantry(items: &[PantryItem]) -> String {
    let mut lines = vec!["Pantry Manager".to_owned(), String::new(), "Pantry Items".to_owned()];
    lines.extend(
        items
            .iter()
            .map(|item| format!("  {} - {}  [{}]", item.name, item.quantity, item.id)),
    );
    lines.join("\n")
}

/// Makeable recipes with their required ingredients
#[must_use]
pub fn render_suggestions(makeable: &[Recipe]) -> String {
    let mut lines = vec!["Recipe Suggestions".to_owned(), String::new()];
    if makeable.is_empty() {
        lines.push("No recipes available with current pantry items.".to_owned());
        return lines.join("\n");
    }
    for recipe in makeable {
        lines.push(format!("* {}  [{}]", recipe.name, recipe.id));
        let mut details = Vec::new();
        if let Some(cuisine) = &recipe.cuisine {
            details.push(cuisine.clone());
        }
        if let Some(minutes) = recipe.cooking_time {
            details.push(format!("{minutes} min"));
        }
        if !details.is_empty() {
            lines.push(format!("  ({})", details.join(", ")));
        }
        lines.push("  Required Ingredients:".to_owned());
        lines.extend(
            recipe
                .ingredient_lines()
                .iter()
                .map(|line| format!("    {} - {}", line.name, line.quantity)),
        );
    }
    lines.join("\n")
}

/// Low-stock items
#[must_use]
pub fn render_shopping_list(low: &[PantryItem]) -> String {
    let mut lines = vec!["Shopping List".to_owned(), String::new()];
    if low.is_empty() {
        lines.push("Your pantry is well stocked!".to_owned());
    } else {
        lines.extend(
            low.iter()
                .map(|item| format!("  {} is low. Please replenish.", item.name)),
        );
    }
    lines.join("\n")
}

/// Usage text for the add-recipe form
#[must_use]
pub fn render_add_recipe_help() -> String {
    [
        "Add New Recipe",
        "",
        "  Recipe Name",
        "  Ingredients (format: Bread:2, Eggs:2)",
        "  Cuisine (optional)",
        "  Cooking Time (minutes, optional)",
    ]
    .join("\n")
}

/// Render any view from its state
#[must_use]
pub fn render_view(view: View, state: &ViewState, threshold: u32) -> String {
    match view {
        View::Dashboard => render_dashboard(),
        View::Pantry => render_pantry(&state.pantry),
        View::Recipes => render_suggestions(&state.makeable()),
        View::Shopping => render_shopping_list(&state.low_stock(threshold)),
        View::AddRecipe => render_add_recipe_help(),
    }
}
