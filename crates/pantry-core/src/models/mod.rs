// ABOUTME: Core data models for the pantry and recipe suggestion engine
// ABOUTME: Re-exports documents, pantry items and recipes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Recipes Contributors

//! # Data Models
//!
//! Every persisted record is a JSON document addressed by a store-assigned
//! [`DocumentId`]. Read-side types (`PantryItem`, `Recipe`) carry the id;
//! write-side types (`PantryRecord`, `RecipeDraft`) are exactly the shape that
//! lands in the store.
//!
//! Recipes reference pantry items by ingredient name, never by id. The
//! reference is resolved at evaluation time with
//! [`normalize_name`](crate::normalize::normalize_name), so renaming a pantry
//! item breaks every recipe that used the old name.

mod document;
mod pantry;
mod recipe;

pub use document::{Document, DocumentId};
pub use pantry::{PantryItem, PantryRecord};
pub use recipe::{Recipe, RecipeDraft, RecipeIngredient};
