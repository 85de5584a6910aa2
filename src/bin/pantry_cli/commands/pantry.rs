// ABOUTME: Pantry commands for pantry-cli
// ABOUTME: Submits the add-ingredient form and deletes items by id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Recipes Contributors

use pantry_recipes::{
    database_plugins::factory::Database,
    errors::AppResult,
    models::DocumentId,
    services::{PantryChange, PantryService},
    views::{FormOutcome, PantryForm},
};

use crate::helpers::display::outcome_into_result;

/// Add an ingredient through the pantry form
pub async fn add(database: &Database, name: String, quantity: u32) -> AppResult<()> {
    let service = PantryService::new(database.clone());
    let mut form = PantryForm::new(name, quantity);
    let outcome = form.submit(&service).await;
    if let FormOutcome::Saved(change) = &outcome {
        match change {
            PantryChange::Created { name, quantity, id } => {
                println!("Added {name} - {quantity}  [{id}]");
            }
            PantryChange::Merged { name, quantity, .. } => {
                println!("Updated {name} - {quantity}");
            }
        }
    }
    outcome_into_result(outcome).map(|_| ())
}

/// Delete a pantry item
pub async fn delete(database: &Database, id: &str) -> AppResult<()> {
    let service = PantryService::new(database.clone());
    service.delete_ingredient(&DocumentId::new(id)).await?;
    println!("Deleted {id}");
    Ok(())
}
