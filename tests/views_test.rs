// ABOUTME: Integration tests for view routing and text rendering
// ABOUTME: Checks each view's output against pantry and recipe state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Recipes Contributors

#![allow(missing_docs, clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod common;

use common::{pantry_item, recipe};
use pantry_recipes::database_plugins::Collection;
use pantry_recipes::views::render::{render_pantry, render_suggestions};
use pantry_recipes::views::{render_view, View, ViewState};

fn kitchen() -> ViewState {
    let mut pancakes = recipe("Pancakes", &[("flour", 2), ("eggs", 1)]);
    pancakes.cuisine = Some("American".to_owned());
    pancakes.cooking_time = Some(20);
    ViewState {
        pantry: vec![
            pantry_item("p1", "flour", 6),
            pantry_item("p2", "eggs", 2),
            pantry_item("p3", "milk", 0),
        ],
        recipes: vec![pancakes, recipe("Latte", &[("milk", 1)])],
    }
}

#[test]
fn test_dashboard_is_static() {
    let text = render_view(View::Dashboard, &ViewState::default(), 5);
    assert!(text.contains("Welcome to the Recipe Ingredient Inventory & Suggestion App!"));
    assert_eq!(text, render_view(View::Dashboard, &kitchen(), 5));
}

#[test]
fn test_pantry_view_lists_name_quantity_and_id() {
    let text = render_view(View::Pantry, &kitchen(), 5);
    assert!(text.contains("Pantry Items"));
    assert!(text.contains("  flour - 6  [p1]"));
    assert!(text.contains("  milk - 0  [p3]"));
    assert_eq!(render_pantry(&[]).lines().count(), 3);
}

#[test]
fn test_recipes_view_shows_only_makeable_with_details() {
    let text = render_view(View::Recipes, &kitchen(), 5);
    assert!(text.contains("* Pancakes"));
    assert!(text.contains("(American, 20 min)"));
    assert!(text.contains("  Required Ingredients:"));
    assert!(text.contains("    flour - 2"));
    assert!(!text.contains("Latte"));
}

#[test]
fn test_suggestions_without_details_line() {
    let text = render_suggestions(&[recipe("Toast", &[("bread", 1)])]);
    assert!(!text.contains('('));
    assert!(text.contains("    bread - 1"));
}

#[test]
fn test_shopping_view_respects_threshold() {
    let state = kitchen();
    let default_list = render_view(View::Shopping, &state, 5);
    assert!(default_list.contains("eggs is low. Please replenish."));
    assert!(default_list.contains("milk is low. Please replenish."));
    assert!(!default_list.contains("flour is low"));

    let strict = render_view(View::Shopping, &state, 1);
    assert!(strict.contains("milk is low"));
    assert!(!strict.contains("eggs is low"));
}

#[test]
fn test_add_recipe_view_describes_format() {
    let text = render_view(View::AddRecipe, &ViewState::default(), 5);
    assert!(text.contains("Bread:2, Eggs:2"));
}

#[test]
fn test_view_parsing_and_collections() {
    assert_eq!("Shopping-List".parse::<View>().unwrap(), View::Shopping);
    assert_eq!("suggestions".parse::<View>().unwrap(), View::Recipes);
    assert_eq!(View::AddRecipe.to_string(), "add-recipe");
    assert_eq!(View::Shopping.label(), "Shopping List");
    assert_eq!(View::Pantry.collections(), &[Collection::Pantry]);
    assert_eq!(
        View::Recipes.collections(),
        &[Collection::Pantry, Collection::Recipes]
    );
}
