// ABOUTME: Pure decision functions over pantry and recipe snapshots
// ABOUTME: Feasibility engine for makeable recipes and the low-stock shopping filter
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Recipes Contributors

//! # Intelligence Module
//!
//! Stateless filters evaluated against the latest snapshots. Nothing here
//! touches the document store; callers pass plain slices and get new vectors
//! back, so every function is deterministic and idempotent.

/// Which recipes can be cooked with the current pantry
pub mod feasibility;

/// Which pantry items are running low
pub mod shopping;

pub use feasibility::{
    compute_makeable, is_makeable, requirements, shortfalls, PantryIndex, Requirement, Shortfall,
};
pub use shopping::compute_low_stock;
