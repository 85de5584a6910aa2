// ABOUTME: Integration tests for the recipe registry and add-recipe text parsing
// ABOUTME: Verifies ingredient order, stored record shape and rejection of malformed input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Recipes Contributors

#![allow(missing_docs, clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod common;

use anyhow::Result;
use common::{memory_store, recipe_snapshot};
use pantry_recipes::database_plugins::{Collection, DocumentStore};
use pantry_recipes::errors::ErrorCode;
use pantry_recipes::models::RecipeIngredient;
use pantry_recipes::services::{parse_ingredients, RecipeRegistry, RecipeSubmission};
use serde_json::json;

fn submission(name: &str, ingredients: &str) -> RecipeSubmission {
    RecipeSubmission {
        name: name.to_owned(),
        ingredients_text: ingredients.to_owned(),
        ..RecipeSubmission::default()
    }
}

#[test]
fn test_ingredient_text_parses_in_order() {
    let lines = parse_ingredients("Bread:2, Eggs:2").unwrap();
    assert_eq!(
        lines,
        vec![
            RecipeIngredient::new("Bread", 2),
            RecipeIngredient::new("Eggs", 2)
        ]
    );
}

#[test]
fn test_whitespace_around_parts_is_trimmed() {
    let lines = parse_ingredients("  Soy Sauce :  1 ,Rice:3").unwrap();
    assert_eq!(lines[0], RecipeIngredient::new("Soy Sauce", 1));
    assert_eq!(lines[1], RecipeIngredient::new("Rice", 3));
}

#[tokio::test]
async fn test_stored_record_has_expected_shape() -> Result<()> {
    let store = memory_store();
    let registry = RecipeRegistry::new(store.clone());

    let recipe = registry
        .add_recipe(&submission("French Toast", "Bread:2, Eggs:2"))
        .await?;

    let docs = store.list(Collection::Recipes).await?;
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0].id, recipe.id);
    assert_eq!(
        docs[0].data,
        json!({
            "name": "French Toast",
            "ingredients": [
                {"name": "Bread", "quantity": 2},
                {"name": "Eggs", "quantity": 2}
            ],
            "cuisine": null,
            "cookingTime": null
        })
    );
    Ok(())
}

#[tokio::test]
async fn test_cuisine_and_cooking_time_are_kept() -> Result<()> {
    let store = memory_store();
    let registry = RecipeRegistry::new(store.clone());

    registry
        .add_recipe(&RecipeSubmission {
            name: "Fried Rice".to_owned(),
            ingredients_text: "Rice:2, Eggs:1".to_owned(),
            cuisine: " Chinese ".to_owned(),
            cooking_time_text: "20".to_owned(),
        })
        .await?;

    let recipes = recipe_snapshot(&store).await;
    assert_eq!(recipes[0].cuisine.as_deref(), Some("Chinese"));
    assert_eq!(recipes[0].cooking_time, Some(20));
    Ok(())
}

#[tokio::test]
async fn test_duplicate_lines_are_stored_as_written() -> Result<()> {
    let store = memory_store();
    let registry = RecipeRegistry::new(store.clone());

    registry
        .add_recipe(&submission("Scramble", "eggs:2, Eggs:1"))
        .await?;

    let recipes = recipe_snapshot(&store).await;
    assert_eq!(recipes[0].ingredient_lines().len(), 2);
    Ok(())
}

#[tokio::test]
async fn test_malformed_submissions_write_nothing() {
    let store = memory_store();
    let registry = RecipeRegistry::new(store.clone());

    let cases = [
        (submission("", "Bread:2"), ErrorCode::MissingRequiredField),
        (submission("Toast", ""), ErrorCode::MissingRequiredField),
        (submission("Toast", "Bread"), ErrorCode::InvalidFormat),
        (submission("Toast", "Bread:lots"), ErrorCode::InvalidFormat),
        (submission("Toast", "Bread:0"), ErrorCode::ValueOutOfRange),
        (submission("Toast", "Bread:2.5"), ErrorCode::ValueOutOfRange),
        (
            RecipeSubmission {
                cooking_time_text: "a while".to_owned(),
                ..submission("Toast", "Bread:2")
            },
            ErrorCode::InvalidFormat,
        ),
    ];

    for (input, expected) in cases {
        let err = registry.add_recipe(&input).await.unwrap_err();
        assert_eq!(err.code, expected, "input: {input:?}");
    }
    assert!(recipe_snapshot(&store).await.is_empty());
}

#[tokio::test]
async fn test_find_by_id_or_name() -> Result<()> {
    let store = memory_store();
    let registry = RecipeRegistry::new(store);
    let added = registry.add_recipe(&submission("Omelette", "eggs:3")).await?;

    assert_eq!(registry.find(added.id.as_str()).await?.id, added.id);
    assert_eq!(registry.find(" omelette ").await?.id, added.id);
    assert_eq!(
        registry.find("pancakes").await.unwrap_err().code,
        ErrorCode::ResourceNotFound
    );
    Ok(())
}
