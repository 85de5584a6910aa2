// ABOUTME: Main library entry point for the pantry inventory and recipe suggestion engine
// ABOUTME: Wires configuration, logging, document stores, services, filters and views
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Recipes Contributors

#![deny(unsafe_code)]

//! # Pantry Recipes
//!
//! Users record pantry ingredient quantities and register recipes with their
//! required ingredients. The library computes which recipes can be made right
//! now and which pantry items are running low.
//!
//! ## Architecture
//!
//! - **Database plugins**: document store trait with in-memory and `SQLite`
//!   backends, plus live whole-collection snapshots
//! - **Services**: pantry add-or-merge, recipe registration, recipe consumption
//! - **Intelligence**: pure feasibility and shopping-list filters
//! - **Views**: text rendering, forms and live view sessions
//!
//! Reads flow store → snapshot → filters → view. Writes flow
//! view → service → store → new snapshot.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use pantry_recipes::database_plugins::factory::Database;
//! use pantry_recipes::intelligence::compute_makeable;
//! use pantry_recipes::services::{PantryService, RecipeRegistry, RecipeSubmission};
//! use pantry_recipes::errors::AppResult;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let store = Database::memory();
//!     let pantry = PantryService::new(store.clone());
//!     let recipes = RecipeRegistry::new(store);
//!
//!     pantry.add_or_merge_ingredient("Eggs", 2).await?;
//!     recipes
//!         .add_recipe(&RecipeSubmission {
//!             name: "Omelette".to_owned(),
//!             ingredients_text: "eggs:2".to_owned(),
//!             ..RecipeSubmission::default()
//!         })
//!         .await?;
//!
//!     let makeable = compute_makeable(&recipes.list().await?, &pantry.list().await?);
//!     println!("{} recipe(s) ready", makeable.len());
//!     Ok(())
//! }
//! ```

/// Configuration management from environment variables
pub mod config;

/// Document store trait, backends and live subscriptions
pub mod database_plugins;

/// Pure feasibility and shopping-list filters
pub mod intelligence;

/// Structured logging setup and operator log helpers
pub mod logging;

/// Domain services issuing store calls
pub mod services;

/// View routing, rendering and forms
pub mod views;

/// Unified error types (re-exported from `pantry-core`)
pub use pantry_core::errors;

/// Constants (re-exported from `pantry-core`)
pub use pantry_core::constants;

/// Data models (re-exported from `pantry-core`)
pub use pantry_core::models;

pub use pantry_core::{names_match, normalize_name};
