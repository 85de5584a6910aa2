// ABOUTME: Form state for adding pantry items and recipes with reset-on-success rules
// ABOUTME: Validation failures and store failures both leave the form untouched
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Recipes Contributors

use crate::database_plugins::DocumentStore;
use crate::services::{PantryChange, PantryService, RecipeRegistry, RecipeSubmission};
use pantry_core::constants::forms::DEFAULT_PANTRY_QUANTITY;
use pantry_core::errors::AppError;
use pantry_core::models::Recipe;

/// Result of submitting a form
#[derive(Debug)]
pub enum FormOutcome<T> {
    /// Written; the form was reset
    Saved(T),
    /// Input was invalid; nothing reached the store
    Rejected(AppError),
    /// The store call failed; the error was logged
    Failed(AppError),
}

impl<T> FormOutcome<T> {
    fn from_result(result: Result<T, AppError>) -> Self {
        match result {
            Ok(value) => Self::Saved(value),
            Err(e) if e.is_validation() => Self::Rejected(e),
            Err(e) => Self::Failed(e),
        }
    }

    /// Whether the submit was written
    #[must_use]
    pub const fn is_saved(&self) -> bool {
        matches!(self, Self::Saved(_))
    }
}

/// Add-ingredient form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PantryForm {
    /// Ingredient name as typed
    pub name: String,
    /// Units to add
    pub quantity: u32,
}

impl Default for PantryForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            quantity: DEFAULT_PANTRY_QUANTITY,
        }
    }
}

impl PantryForm {
    /// Create a filled-in form
    pub fn new(name: impl Into<String>, quantity: u32) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }

    /// Submit the form; resets to `""` and `1` on success
    pub async fn submit<S: DocumentStore>(
        &mut self,
        service: &PantryService<S>,
    ) -> FormOutcome<PantryChange> {
        let outcome = FormOutcome::from_result(
            service
                .add_or_merge_ingredient(&self.name, self.quantity)
                .await,
        );
        if outcome.is_saved() {
            *self = Self::default();
        }
        outcome
    }
}

/// Add-recipe form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeForm {
    /// Current field values
    pub fields: RecipeSubmission,
}

impl RecipeForm {
    /// Create a filled-in form
    #[must_use]
    pub const fn new(fields: RecipeSubmission) -> Self {
        Self { fields }
    }

    /// Submit the form; clears every field on success
    pub async fn submit<S: DocumentStore>(
        &mut self,
        registry: &RecipeRegistry<S>,
    ) -> FormOutcome<Recipe> {
        let outcome = FormOutcome::from_result(registry.add_recipe(&self.fields).await);
        if outcome.is_saved() {
            self.fields = RecipeSubmission::default();
        }
        outcome
    }
}
