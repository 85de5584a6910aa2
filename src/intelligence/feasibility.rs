// ABOUTME: Feasibility engine deciding which recipes the pantry can satisfy
// ABOUTME: Matches ingredients to pantry items by normalized name with summed requirements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Recipes Contributors

//! Recipe feasibility
//!
//! A recipe is makeable when it has a well-formed ingredient list and, for
//! every distinct normalized ingredient name, the pantry holds at least the
//! total quantity its lines require. Repeated lines for the same ingredient
//! are summed before the comparison. When two pantry items share a normalized
//! name the first one in snapshot order is used.

use pantry_core::models::{PantryItem, Recipe};
use pantry_core::normalize_name;
use std::collections::HashMap;

/// Total quantity a recipe needs of one ingredient
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    /// Normalized ingredient name
    pub name: String,
    /// Sum of every line naming this ingredient
    pub quantity: u64,
}

/// Ingredient the pantry cannot cover
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortfall {
    /// Normalized ingredient name
    pub name: String,
    /// Quantity the recipe needs
    pub required: u64,
    /// Quantity on hand, `None` when no pantry item matches
    pub available: Option<u32>,
}

impl Shortfall {
    /// Units still missing
    #[must_use]
    pub fn missing(&self) -> u64 {
        self.required
            .saturating_sub(u64::from(self.available.unwrap_or(0)))
    }
}

/// Lookup of pantry quantities by normalized name
#[derive(Debug, Default)]
pub struct PantryIndex<'a> {
    items: HashMap<String, &'a PantryItem>,
}

impl<'a> PantryIndex<'a> {
    /// Index a pantry snapshot; earlier items win on name collisions
    #[must_use]
    pub fn new(pantry: &'a [PantryItem]) -> Self {
        let mut items = HashMap::with_capacity(pantry.len());
        for item in pantry {
            items.entry(normalize_name(&item.name)).or_insert(item);
        }
        Self { items }
    }

    /// Pantry item matching an ingredient name
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&'a PantryItem> {
        self.items.get(&normalize_name(name)).copied()
    }

    /// Quantity on hand for an ingredient name
    #[must_use]
    pub fn quantity_of(&self, name: &str) -> Option<u32> {
        self.find(name).map(|item| item.quantity)
    }
}

/// Per-ingredient totals in first-appearance order
#[must_use]
pub fn requirements(recipe: &Recipe) -> Vec<Requirement> {
    let mut totals: Vec<Requirement> = Vec::new();
    for line in recipe.ingredient_lines() {
        let name = normalize_name(&line.name);
        match totals.iter_mut().find(|r| r.name == name) {
            Some(existing) => existing.quantity += u64::from(line.quantity),
            None => totals.push(Requirement {
                name,
                quantity: u64::from(line.quantity),
            }),
        }
    }
    totals
}

fn shortfalls_in(recipe: &Recipe, index: &PantryIndex<'_>) -> Vec<Shortfall> {
    requirements(recipe)
        .into_iter()
        .filter_map(|req| {
            let available = index.quantity_of(&req.name);
            let enough = available.is_some_and(|qty| u64::from(qty) >= req.quantity);
            (!enough).then_some(Shortfall {
                name: req.name,
                required: req.quantity,
                available,
            })
        })
        .collect()
}

/// Ingredients the pantry cannot cover for a recipe
///
/// Empty for a makeable recipe. A recipe with a malformed ingredient list has
/// no requirements and therefore no shortfalls; check
/// [`Recipe::has_valid_ingredients`] or use [`is_makeable`].
#[must_use]
pub fn shortfalls(recipe: &Recipe, pantry: &[PantryItem]) -> Vec<Shortfall> {
    shortfalls_in(recipe, &PantryIndex::new(pantry))
}

fn makeable_with(recipe: &Recipe, index: &PantryIndex<'_>) -> bool {
    recipe.has_valid_ingredients()
        && requirements(recipe).iter().all(|req| {
            index
                .quantity_of(&req.name)
                .is_some_and(|qty| u64::from(qty) >= req.quantity)
        })
}

/// Whether a single recipe can be made right now
#[must_use]
pub fn is_makeable(recipe: &Recipe, pantry: &[PantryItem]) -> bool {
    makeable_with(recipe, &PantryIndex::new(pantry))
}

/// Recipes the pantry can satisfy, in input order
#[must_use]
pub fn compute_makeable(recipes: &[Recipe], pantry: &[PantryItem]) -> Vec<Recipe> {
    let index = PantryIndex::new(pantry);
    recipes
        .iter()
        .filter(|recipe| makeable_with(recipe, &index))
        .cloned()
        .collect()
}
