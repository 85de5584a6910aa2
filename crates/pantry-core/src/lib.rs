// ABOUTME: Core types and constants for the pantry and recipe suggestion engine
// ABOUTME: Foundation crate with error handling, data models, and name normalization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Recipes Contributors

#![deny(unsafe_code)]

//! # Pantry Core
//!
//! Foundation crate providing shared types and constants for the pantry and
//! recipe suggestion engine. This crate has no I/O and changes infrequently.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode` and `AppResult`
//! - **constants**: Collection names, thresholds and form defaults
//! - **models**: `PantryItem`, `Recipe`, `RecipeIngredient` and `DocumentId`
//! - **normalize**: Canonical ingredient-name normalization

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (pantry items, recipes, document ids)
pub mod models;

/// Canonical ingredient-name normalization
pub mod normalize;

pub use errors::{AppError, AppResult, ErrorCode};
pub use normalize::{names_match, normalize_name};
