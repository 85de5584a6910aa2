// ABOUTME: Recipe commands for pantry-cli
// ABOUTME: Adds recipes, lists them with shortfalls, and makes a recipe from the pantry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Recipes Contributors

use pantry_recipes::{
    database_plugins::factory::Database,
    errors::AppResult,
    intelligence::{is_makeable, shortfalls},
    services::{ConsumptionExecutor, PantryService, RecipeRegistry, RecipeSubmission},
    views::{FormOutcome, RecipeForm},
};
use crate::helpers::display::{display_report, display_shortfalls, outcome_into_result};

/// Register a recipe through the add-recipe form
pub async fn add(database: &Database, submission: RecipeSubmission) -> AppResult<()> {
    let registry = RecipeRegistry::new(database.clone());
    let mut form = RecipeForm::new(submission);
    let outcome = form.submit(&registry).await;
    if let FormOutcome::Saved(recipe) = &outcome {
        println!("Recipe added successfully: {}  [{}]", recipe.name, recipe.id);
    }
    outcome_into_result(outcome).map(|_| ())
}

/// List every recipe with its makeable status
pub async fn list_all(database: &Database) -> AppResult<()> {
    let pantry = PantryService::new(database.clone()).list().await?;
    let recipes = RecipeRegistry::new(database.clone()).list().await?;

    if recipes.is_empty() {
        println!("No recipes registered yet.");
        return Ok(());
    }
    for recipe in &recipes {
        if !recipe.has_valid_ingredients() {
            println!("{}  [{}]  (no valid ingredient list)", recipe.name, recipe.id);
        } else if is_makeable(recipe, &pantry) {
            println!("{}  [{}]  ready", recipe.name, recipe.id);
        } else {
            println!("{}  [{}]", recipe.name, recipe.id);
            display_shortfalls(&shortfalls(recipe, &pantry));
        }
    }
    Ok(())
}

/// Make a recipe if the pantry currently covers it
pub async fn make(database: &Database, key: &str) -> AppResult<()> {
    let recipe = RecipeRegistry::new(database.clone()).find(key).await?;
    let pantry = PantryService::new(database.clone()).list().await?;

    let report = ConsumptionExecutor::new(database.clone())
        .make_if_makeable(&recipe, &pantry)
        .await
        .inspect_err(|e| {
            if e.is_validation() {
                display_shortfalls(&shortfalls(&recipe, &pantry));
            }
        })?;
    display_report(&report);
    report.ensure_complete()
}
