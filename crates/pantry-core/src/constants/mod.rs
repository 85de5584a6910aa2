// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Collection names, shopping thresholds and form defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Recipes Contributors

//! Constants module
//!
//! Constants are grouped into small domain modules rather than one flat list.

/// Document store collection names
pub mod collections {
    /// Pantry items, one document per distinct normalized ingredient name
    pub const PANTRY: &str = "pantry";
    /// Recipes with their ordered ingredient lists
    pub const RECIPES: &str = "recipes";
}

/// Shopping list defaults
pub mod shopping {
    /// Items strictly below this quantity are reported as low
    pub const DEFAULT_LOW_STOCK_THRESHOLD: u32 = 5;
}

/// Form defaults and parsing delimiters
pub mod forms {
    /// Quantity the pantry form resets to after a successful submit
    pub const DEFAULT_PANTRY_QUANTITY: u32 = 1;
    /// Separator between ingredient entries in the add-recipe text
    pub const INGREDIENT_SEPARATOR: char = ',';
    /// Separator between an ingredient name and its quantity
    pub const QUANTITY_SEPARATOR: char = ':';
}

/// Document store tuning
pub mod store {
    /// How often a file-backed store checks for commits made by other processes
    pub const CHANGE_POLL_INTERVAL_MS: u64 = 250;
}

/// Document field names shared by backends and adapters
pub mod fields {
    /// Ingredient or recipe name
    pub const NAME: &str = "name";
    /// Pantry quantity
    pub const QUANTITY: &str = "quantity";
    /// Recipe ingredient list
    pub const INGREDIENTS: &str = "ingredients";
}

/// Environment-variable names read by the configuration layer
pub mod env_vars {
    /// Document store location
    pub const DATABASE_URL: &str = "DATABASE_URL";
    /// Shopping-list threshold override
    pub const LOW_STOCK_THRESHOLD: &str = "LOW_STOCK_THRESHOLD";
    /// Deployment environment name
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
}

/// Service identity used in structured logs
pub mod service_names {
    /// Name reported by the logging layer
    pub const PANTRY_SERVICE: &str = "pantry-recipes";
}
