// ABOUTME: Recipe registry adapter parsing the add-recipe form into a stored record
// ABOUTME: Handles "Bread:2, Eggs:2" ingredient text, optional cuisine and cooking time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Recipes Contributors

//! Recipe registry
//!
//! Ingredient text is a comma-separated list of `name:quantity` entries.
//! Blank entries (for example a trailing comma) are ignored. Every other
//! entry must have a non-empty name and a positive whole-number quantity or
//! the whole submission is rejected and nothing is written.

use super::snapshots::recipes_from_snapshot;
use crate::database_plugins::{Collection, DocumentStore};
use pantry_core::constants::{fields, forms};
use pantry_core::errors::{AppError, AppResult};
use pantry_core::models::{DocumentId, Recipe, RecipeDraft, RecipeIngredient};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

/// Raw add-recipe form input
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeSubmission {
    /// Dish name
    pub name: String,
    /// Ingredient text, e.g. `"Bread:2, Eggs:2"`
    pub ingredients_text: String,
    /// Cuisine label, blank for none
    pub cuisine: String,
    /// Cooking time in minutes, blank for none
    pub cooking_time_text: String,
}

impl RecipeSubmission {
    /// Validate and convert the form into a storable draft
    ///
    /// # Errors
    ///
    /// Returns a validation error for a blank name, empty ingredient list,
    /// malformed ingredient entry or non-numeric cooking time
    pub fn build_draft(&self) -> AppResult<RecipeDraft> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(AppError::missing_field(fields::NAME));
        }
        let ingredients = parse_ingredients(&self.ingredients_text)?;
        let cooking_time = parse_cooking_time(&self.cooking_time_text)?;
        let cuisine = Some(self.cuisine.trim())
            .filter(|c| !c.is_empty())
            .map(str::to_owned);

        Ok(RecipeDraft {
            name: name.to_owned(),
            ingredients,
            cuisine,
            cooking_time,
        })
    }
}

/// Parse ingredient text into ordered lines
///
/// # Errors
///
/// Returns `MissingRequiredField` when no entries remain, `InvalidFormat` for
/// an entry without a colon, a blank name or a non-numeric quantity, and
/// `ValueOutOfRange` for zero, negative or fractional quantities
pub fn parse_ingredients(text: &str) -> AppResult<Vec<RecipeIngredient>> {
    let ingredients = text
        .split(forms::INGREDIENT_SEPARATOR)
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(parse_entry)
        .collect::<AppResult<Vec<_>>>()?;

    if ingredients.is_empty() {
        return Err(AppError::missing_field(fields::INGREDIENTS));
    }
    Ok(ingredients)
}

fn parse_entry(entry: &str) -> AppResult<RecipeIngredient> {
    let (name, quantity) = entry.split_once(forms::QUANTITY_SEPARATOR).ok_or_else(|| {
        AppError::invalid_format(format!(
            "Ingredient \"{entry}\" must be written as name:quantity"
        ))
    })?;
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::invalid_format(format!(
            "Ingredient \"{entry}\" has no name"
        )));
    }
    Ok(RecipeIngredient::new(name, parse_quantity(name, quantity)?))
}

fn parse_quantity(name: &str, raw: &str) -> AppResult<u32> {
    let raw = raw.trim();
    match raw.parse::<u32>() {
        Ok(0) => Err(AppError::out_of_range(format!(
            "Quantity for \"{name}\" must be at least 1"
        ))),
        Ok(quantity) => Ok(quantity),
        // Negative or fractional numbers are numbers, just not allowed ones
        Err(_) if raw.parse::<f64>().is_ok_and(f64::is_finite) => Err(AppError::out_of_range(
            format!("Quantity for \"{name}\" must be a positive whole number, got {raw}"),
        )),
        Err(_) => Err(AppError::invalid_format(format!(
            "Quantity for \"{name}\" is not a number: \"{raw}\""
        ))),
    }
}

/// Parse the optional cooking time in minutes
///
/// # Errors
///
/// Returns `InvalidFormat` if the text is neither blank nor a whole number
pub fn parse_cooking_time(text: &str) -> AppResult<Option<u32>> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    text.parse::<u32>().map(Some).map_err(|_| {
        AppError::invalid_format(format!(
            "Cooking time must be a whole number of minutes, got \"{text}\""
        ))
    })
}

/// Recipe operations over a document store
#[derive(Clone)]
pub struct RecipeRegistry<S> {
    store: S,
}

impl<S: DocumentStore> RecipeRegistry<S> {
    /// Create a registry over `store`
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Validate a submission and store it as a new recipe
    ///
    /// # Errors
    ///
    /// Returns a validation error before any store call, or the store error
    /// if the write fails
    pub async fn add_recipe(&self, submission: &RecipeSubmission) -> AppResult<Recipe> {
        let draft = submission.build_draft()?;
        self.store_draft(draft).await
    }

    /// Store an already validated draft
    ///
    /// # Errors
    ///
    /// Returns the store error if the write fails
    pub async fn store_draft(&self, draft: RecipeDraft) -> AppResult<Recipe> {
        let body = serde_json::to_value(&draft)?;
        match self.store.create(Collection::Recipes, body).await {
            Ok(id) => {
                info!(recipe.id = %id, recipe.name = %draft.name, "Recipe added successfully");
                Ok(Recipe::from_draft(id, draft))
            }
            Err(e) => {
                error!(recipe.name = %draft.name, error = %e, "Error adding recipe");
                Err(e)
            }
        }
    }

    /// Current recipes in snapshot order
    ///
    /// # Errors
    ///
    /// Returns the store error if the read fails
    pub async fn list(&self) -> AppResult<Vec<Recipe>> {
        let documents = self.store.list(Collection::Recipes).await?;
        Ok(recipes_from_snapshot(&documents))
    }

    /// Find a recipe by id, or failing that by case-insensitive name
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if nothing matches, or the store error
    pub async fn find(&self, key: &str) -> AppResult<Recipe> {
        let recipes = self.list().await?;
        let id = DocumentId::new(key);
        recipes
            .iter()
            .find(|r| r.id == id)
            .or_else(|| recipes.iter().find(|r| pantry_core::names_match(&r.name, key)))
            .cloned()
            .ok_or_else(|| AppError::not_found("Recipe").with_resource_id(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pantry_core::ErrorCode;

    #[test]
    fn test_parse_keeps_input_order() {
        let lines = parse_ingredients("Bread:2, Eggs:2").unwrap();
        assert_eq!(
            lines,
            vec![RecipeIngredient::new("Bread", 2), RecipeIngredient::new("Eggs", 2)]
        );
    }

    #[test]
    fn test_blank_entries_are_ignored() {
        let lines = parse_ingredients(" rice : 1 ,, ").unwrap();
        assert_eq!(lines, vec![RecipeIngredient::new("rice", 1)]);
        assert_eq!(
            parse_ingredients(" , ").unwrap_err().code,
            ErrorCode::MissingRequiredField
        );
    }

    #[test]
    fn test_malformed_quantities_are_rejected() {
        let code = |text: &str| parse_ingredients(text).unwrap_err().code;
        assert_eq!(code("Bread"), ErrorCode::InvalidFormat);
        assert_eq!(code(":2"), ErrorCode::InvalidFormat);
        assert_eq!(code("Bread:two"), ErrorCode::InvalidFormat);
        assert_eq!(code("Bread:"), ErrorCode::InvalidFormat);
        assert_eq!(code("Bread:0"), ErrorCode::ValueOutOfRange);
        assert_eq!(code("Bread:-1"), ErrorCode::ValueOutOfRange);
        assert_eq!(code("Bread:1.5"), ErrorCode::ValueOutOfRange);
    }

    #[test]
    fn test_cooking_time() {
        assert_eq!(parse_cooking_time("").unwrap(), None);
        assert_eq!(parse_cooking_time(" 20 ").unwrap(), Some(20));
        assert!(parse_cooking_time("soon").is_err());
    }

    #[test]
    fn test_blank_cuisine_becomes_none() {
        let submission = RecipeSubmission {
            name: " Toast ".to_owned(),
            ingredients_text: "Bread:2".to_owned(),
            cuisine: "  ".to_owned(),
            cooking_time_text: String::new(),
        };
        let draft = submission.build_draft().unwrap();
        assert_eq!(draft.name, "Toast");
        assert_eq!(draft.cuisine, None);
        assert_eq!(draft.cooking_time, None);
    }
}
