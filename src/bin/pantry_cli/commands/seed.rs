// ABOUTME: Demo data seeding for pantry-cli
// ABOUTME: Adds a small pantry and a few recipes through the regular services
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Recipes Contributors

use pantry_recipes::{
    database_plugins::factory::Database,
    errors::AppResult,
    services::{PantryService, RecipeRegistry, RecipeSubmission},
};
use tracing::info;

const DEMO_PANTRY: &[(&str, u32)] = &[
    ("Bread", 6),
    ("Eggs", 4),
    ("Milk", 2),
    ("Butter", 1),
    ("Rice", 10),
];

const DEMO_RECIPES: &[(&str, &str, &str, &str)] = &[
    ("French Toast", "Bread:2, Eggs:2, Milk:1", "French", "15"),
    ("Omelette", "Eggs:3, Butter:1", "", "10"),
    ("Fried Rice", "Rice:2, Eggs:1, Soy Sauce:1", "Chinese", "20"),
];

/// Seed the store with demo data
pub async fn run(database: &Database) -> AppResult<()> {
    let pantry = PantryService::new(database.clone());
    for (name, quantity) in DEMO_PANTRY {
        pantry.add_or_merge_ingredient(name, *quantity).await?;
    }

    let registry = RecipeRegistry::new(database.clone());
    for (name, ingredients, cuisine, minutes) in DEMO_RECIPES {
        registry
            .add_recipe(&RecipeSubmission {
                name: (*name).to_owned(),
                ingredients_text: (*ingredients).to_owned(),
                cuisine: (*cuisine).to_owned(),
                cooking_time_text: (*minutes).to_owned(),
            })
            .await?;
    }

    info!(
        pantry.items = DEMO_PANTRY.len(),
        recipes = DEMO_RECIPES.len(),
        "Demo data seeded"
    );
    println!(
        "Seeded {} pantry items and {} recipes",
        DEMO_PANTRY.len(),
        DEMO_RECIPES.len()
    );
    Ok(())
}
