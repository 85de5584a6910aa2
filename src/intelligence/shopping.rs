// ABOUTME: Shopping list filter selecting pantry items below a stock threshold
// ABOUTME: Pure function over a pantry snapshot; input order is preserved
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Recipes Contributors

use pantry_core::models::PantryItem;

/// Pantry items whose quantity is strictly below `threshold`
#[must_use]
pub fn compute_low_stock(pantry: &[PantryItem], threshold: u32) -> Vec<PantryItem> {
    pantry
        .iter()
        .filter(|item| item.quantity < threshold)
        .cloned()
        .collect()
}
