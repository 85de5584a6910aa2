// ABOUTME: Consumption executor decrementing pantry quantities when a recipe is made
// ABOUTME: Issues one independent clamped update per ingredient and reports each outcome
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Recipes Contributors

//! Consumption executor
//!
//! Making a recipe walks its ingredient lines in order. Each line resolves a
//! pantry item by normalized name against the snapshot the caller passes in,
//! then writes `max(0, current - required)` as its own point update. There is
//! no transaction: if one update fails the earlier ones stay applied and the
//! later ones still run.
//!
//! A local ledger tracks quantities written during this call, so a recipe
//! naming the same ingredient twice decrements from the already reduced value.

use super::pantry::quantity_patch;
use crate::database_plugins::{Collection, DocumentStore};
use crate::intelligence::{is_makeable, PantryIndex};
use crate::logging::AppLogger;
use pantry_core::errors::{AppError, AppResult};
use pantry_core::models::{DocumentId, PantryItem, Recipe};
use std::collections::HashMap;
use tracing::{error, info, warn};

/// Pantry item successfully decremented
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientUpdate {
    /// Ingredient name as written in the recipe
    pub ingredient: String,
    /// Pantry item written
    pub item_id: DocumentId,
    /// Quantity before this line
    pub previous: u32,
    /// Quantity written
    pub remaining: u32,
}

/// Pantry update that the store rejected
#[derive(Debug)]
pub struct FailedUpdate {
    /// Ingredient name as written in the recipe
    pub ingredient: String,
    /// Pantry item the update targeted
    pub item_id: DocumentId,
    /// Store error
    pub error: AppError,
}

/// Outcome of making one recipe
#[derive(Debug, Default)]
pub struct ConsumptionReport {
    /// Recipe name
    pub recipe: String,
    /// Lines whose pantry update succeeded, in recipe order
    pub updated: Vec<IngredientUpdate>,
    /// Lines with no matching pantry item
    pub skipped: Vec<String>,
    /// Lines whose pantry update failed
    pub failed: Vec<FailedUpdate>,
}

impl ConsumptionReport {
    /// Whether every attempted update succeeded
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    /// Turn a partially applied consumption into an error
    ///
    /// # Errors
    ///
    /// Returns a storage error naming how many updates failed
    pub fn ensure_complete(&self) -> AppResult<()> {
        if self.is_complete() {
            return Ok(());
        }
        Err(AppError::storage(format!(
            "{} pantry update(s) failed while making \"{}\"",
            self.failed.len(),
            self.recipe
        )))
    }
}

/// Applies recipe consumption to the pantry
#[derive(Clone)]
pub struct ConsumptionExecutor<S> {
    store: S,
}

impl<S: DocumentStore> ConsumptionExecutor<S> {
    /// Create an executor over `store`
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Make `recipe` only if `pantry` covers every ingredient line
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` without touching the store when the recipe is
    /// not makeable from `pantry`
    pub async fn make_if_makeable(
        &self,
        recipe: &Recipe,
        pantry: &[PantryItem],
    ) -> AppResult<ConsumptionReport> {
        if !is_makeable(recipe, pantry) {
            warn!(recipe.name = %recipe.name, "Recipe cannot be made with current pantry");
            return Err(AppError::invalid_input(format!(
                "\"{}\" cannot be made with current pantry items",
                recipe.name
            ))
            .with_resource_id(recipe.id.as_str()));
        }
        Ok(self.make_recipe(recipe, pantry).await)
    }

    /// Decrement the pantry for every ingredient of `recipe`
    ///
    /// `pantry` is the snapshot the decision was made on. Store failures are
    /// logged and collected in the report; they never stop the loop.
    pub async fn make_recipe(&self, recipe: &Recipe, pantry: &[PantryItem]) -> ConsumptionReport {
        let index = PantryIndex::new(pantry);
        let mut ledger: HashMap<DocumentId, u32> = HashMap::new();
        let mut report = ConsumptionReport {
            recipe: recipe.name.clone(),
            ..ConsumptionReport::default()
        };

        for line in recipe.ingredient_lines() {
            let Some(item) = index.find(&line.name) else {
                report.skipped.push(line.name.clone());
                continue;
            };
            let previous = ledger.get(&item.id).copied().unwrap_or(item.quantity);
            let remaining = previous.saturating_sub(line.quantity);

            match self
                .store
                .update(Collection::Pantry, &item.id, quantity_patch(remaining))
                .await
            {
                Ok(()) => {
                    info!(pantry.item = %item.name, pantry.quantity = remaining, "Updated {} to {remaining}", item.name);
                    ledger.insert(item.id.clone(), remaining);
                    report.updated.push(IngredientUpdate {
                        ingredient: line.name.clone(),
                        item_id: item.id.clone(),
                        previous,
                        remaining,
                    });
                }
                Err(e) => {
                    error!(pantry.item = %item.name, error = %e, "Error updating {}", item.name);
                    report.failed.push(FailedUpdate {
                        ingredient: line.name.clone(),
                        item_id: item.id.clone(),
                        error: e,
                    });
                }
            }
        }

        AppLogger::log_consumption(
            &report.recipe,
            report.updated.len(),
            report.skipped.len(),
            report.failed.len(),
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database_plugins::memory::MemoryStore;
    use crate::services::pantry_from_snapshot;
    use pantry_core::models::RecipeIngredient;
    use serde_json::json;

    async fn seeded(store: &MemoryStore, name: &str, quantity: u32) -> DocumentId {
        store
            .create(Collection::Pantry, json!({"name": name, "quantity": quantity}))
            .await
            .unwrap()
    }

    fn recipe(lines: &[(&str, u32)]) -> Recipe {
        Recipe {
            id: DocumentId::new("r1"),
            name: "test dish".to_owned(),
            ingredients: Some(lines.iter().map(|(n, q)| RecipeIngredient::new(*n, *q)).collect()),
            cuisine: None,
            cooking_time: None,
        }
    }

    #[tokio::test]
    async fn test_decrement_clamps_at_zero() {
        let store = MemoryStore::new();
        seeded(&store, "flour", 1).await;
        let pantry = pantry_from_snapshot(&store.list(Collection::Pantry).await.unwrap());

        let report = ConsumptionExecutor::new(store.clone())
            .make_recipe(&recipe(&[("Flour", 3), ("yeast", 1)]), &pantry)
            .await;

        assert_eq!(report.updated[0].remaining, 0);
        assert_eq!(report.skipped, vec!["yeast".to_owned()]);
        assert!(report.is_complete());
    }

    #[tokio::test]
    async fn test_duplicate_lines_use_running_ledger() {
        let store = MemoryStore::new();
        let id = seeded(&store, "eggs", 5).await;
        let pantry = pantry_from_snapshot(&store.list(Collection::Pantry).await.unwrap());

        let report = ConsumptionExecutor::new(store.clone())
            .make_recipe(&recipe(&[("eggs", 2), ("Eggs", 2)]), &pantry)
            .await;

        assert_eq!(report.updated.len(), 2);
        assert_eq!(report.updated[1].previous, 3);
        let docs = store.list(Collection::Pantry).await.unwrap();
        assert_eq!(docs[0].id, id);
        assert_eq!(docs[0].data["quantity"], json!(1));
    }
}
