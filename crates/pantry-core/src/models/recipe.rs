// ABOUTME: Recipe models with ordered ingredient lines referencing pantry items by name
// ABOUTME: Defines RecipeIngredient, the stored RecipeDraft and the id-carrying Recipe
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Recipes Contributors

use super::document::{Document, DocumentId};
use crate::errors::AppResult;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Single required ingredient line of a recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    /// Ingredient name, matched against pantry names after normalization
    pub name: String,
    /// Units required, always positive
    pub quantity: u32,
}

impl RecipeIngredient {
    /// Create an ingredient line
    pub fn new(name: impl Into<String>, quantity: u32) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }
}

/// Stored body of a recipe document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDraft {
    /// Dish name
    pub name: String,
    /// Ingredient lines in display order
    pub ingredients: Vec<RecipeIngredient>,
    /// Cuisine label, `None` when left blank
    pub cuisine: Option<String>,
    /// Cooking time in minutes, `None` when left blank
    pub cooking_time: Option<u32>,
}

/// Recipe as seen in a snapshot
///
/// `ingredients` is `None` when the stored document has no well-formed
/// ingredient array. Such recipes are never makeable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Store-assigned id
    #[serde(default = "placeholder_id")]
    pub id: DocumentId,
    /// Dish name
    #[serde(default)]
    pub name: String,
    /// Ingredient lines in display order
    #[serde(default, deserialize_with = "lenient_ingredients")]
    pub ingredients: Option<Vec<RecipeIngredient>>,
    /// Cuisine label
    #[serde(default)]
    pub cuisine: Option<String>,
    /// Cooking time in minutes
    #[serde(default, deserialize_with = "lenient_minutes")]
    pub cooking_time: Option<u32>,
}

fn placeholder_id() -> DocumentId {
    DocumentId::new(String::new())
}

/// Accept any JSON for `ingredients`; keep it only if every line decodes
fn lenient_ingredients<'de, D>(deserializer: D) -> Result<Option<Vec<RecipeIngredient>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value::<Vec<RecipeIngredient>>(value).ok())
}

/// Accept any JSON for `cookingTime`; non-integers read as absent
fn lenient_minutes<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_u64().and_then(|m| u32::try_from(m).ok()))
}

impl Recipe {
    /// Build a snapshot recipe from a draft and its id
    #[must_use]
    pub fn from_draft(id: DocumentId, draft: RecipeDraft) -> Self {
        Self {
            id,
            name: draft.name,
            ingredients: Some(draft.ingredients),
            cuisine: draft.cuisine,
            cooking_time: draft.cooking_time,
        }
    }

    /// Decode a recipe document
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the body is not a JSON object
    pub fn from_document(document: &Document) -> AppResult<Self> {
        let mut recipe: Self = document.decode()?;
        recipe.id = document.id.clone();
        Ok(recipe)
    }

    /// Ingredient lines, empty when the stored list was malformed
    #[must_use]
    pub fn ingredient_lines(&self) -> &[RecipeIngredient] {
        self.ingredients.as_deref().unwrap_or_default()
    }

    /// Whether the stored record carried a well-formed ingredient list
    #[must_use]
    pub const fn has_valid_ingredients(&self) -> bool {
        self.ingredients.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(data: Value) -> Document {
        Document::new(DocumentId::new("r1"), data)
    }

    #[test]
    fn test_draft_serializes_camel_case_with_null_markers() {
        let draft = RecipeDraft {
            name: "Toast".to_owned(),
            ingredients: vec![RecipeIngredient::new("Bread", 2)],
            cuisine: None,
            cooking_time: None,
        };
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "Toast",
                "ingredients": [{"name": "Bread", "quantity": 2}],
                "cuisine": null,
                "cookingTime": null
            })
        );
    }

    #[test]
    fn test_decode_keeps_order_and_id() {
        let recipe = Recipe::from_document(&doc(json!({
            "name": "French toast",
            "ingredients": [{"name": "Bread", "quantity": 2}, {"name": "Eggs", "quantity": 2}],
            "cookingTime": 15
        })))
        .unwrap();
        assert_eq!(recipe.id.as_str(), "r1");
        assert_eq!(recipe.ingredient_lines()[0].name, "Bread");
        assert_eq!(recipe.ingredient_lines()[1].name, "Eggs");
        assert_eq!(recipe.cooking_time, Some(15));
        assert_eq!(recipe.cuisine, None);
    }

    #[test]
    fn test_malformed_ingredients_read_as_none() {
        let not_array = Recipe::from_document(&doc(json!({"name": "x", "ingredients": "eggs"}))).unwrap();
        assert!(!not_array.has_valid_ingredients());

        let missing = Recipe::from_document(&doc(json!({"name": "x"}))).unwrap();
        assert!(!missing.has_valid_ingredients());

        let bad_line = Recipe::from_document(&doc(json!({
            "name": "x",
            "ingredients": [{"name": "eggs", "quantity": "NaN"}]
        })))
        .unwrap();
        assert!(!bad_line.has_valid_ingredients());
        assert!(bad_line.ingredient_lines().is_empty());
    }
}
