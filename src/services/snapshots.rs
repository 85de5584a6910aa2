// ABOUTME: Decoders from raw collection snapshots to typed pantry items and recipes
// ABOUTME: Undecodable documents are skipped with a warning instead of failing the view
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Recipes Contributors

use pantry_core::models::{Document, PantryItem, Recipe};
use tracing::warn;

/// Decode a pantry snapshot, keeping snapshot order
#[must_use]
pub fn pantry_from_snapshot(documents: &[Document]) -> Vec<PantryItem> {
    documents
        .iter()
        .filter_map(|doc| match PantryItem::from_document(doc) {
            Ok(item) => Some(item),
            Err(e) => {
                warn!(document.id = %doc.id, error = %e, "Skipping malformed pantry document");
                None
            }
        })
        .collect()
}

/// Decode a recipe snapshot, keeping snapshot order
///
/// Recipes whose ingredient list is malformed still decode, with
/// `ingredients: None`, so they stay visible but are never makeable.
#[must_use]
pub fn recipes_from_snapshot(documents: &[Document]) -> Vec<Recipe> {
    documents
        .iter()
        .filter_map(|doc| match Recipe::from_document(doc) {
            Ok(recipe) => Some(recipe),
            Err(e) => {
                warn!(document.id = %doc.id, error = %e, "Skipping malformed recipe document");
                None
            }
        })
        .collect()
}
