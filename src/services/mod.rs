// ABOUTME: Domain service layer turning user intent into document store calls
// ABOUTME: Pantry adapter, recipe registry, consumption executor and snapshot decoders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Recipes Contributors

//! Domain service layer
//!
//! Services are generic over [`DocumentStore`](crate::database_plugins::DocumentStore)
//! so the same rules run against the in-memory store in tests and the
//! `SQLite` store in the CLI. Validation always happens before the first
//! store call. Store failures are logged here and returned to the caller,
//! which decides what happens to its form state.

/// Pantry add-or-merge and delete
pub mod pantry;

/// Add-recipe parsing and persistence
pub mod recipes;

/// Pantry decrements when a recipe is made
pub mod cooking;

/// Typed decoding of raw collection snapshots
pub mod snapshots;

pub use cooking::{ConsumptionExecutor, ConsumptionReport, FailedUpdate, IngredientUpdate};
pub use pantry::{PantryChange, PantryService};
pub use recipes::{parse_cooking_time, parse_ingredients, RecipeRegistry, RecipeSubmission};
pub use snapshots::{pantry_from_snapshot, recipes_from_snapshot};
