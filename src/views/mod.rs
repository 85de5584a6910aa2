// ABOUTME: View layer routing user intent and rendering derived outputs as text
// ABOUTME: Five views, form state with reset rules, and live sessions bound to subscriptions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Recipes Contributors

//! # Views
//!
//! Presentation only. A view owns the latest snapshots of the collections it
//! needs, replaces them wholesale on every notification and renders the
//! filters' outputs. No decision logic lives here.

/// Add-pantry and add-recipe form state
pub mod forms;

/// Text rendering of each view
pub mod render;

/// Live view sessions holding subscriptions
pub mod session;

use crate::database_plugins::Collection;
use pantry_core::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use forms::{FormOutcome, PantryForm, RecipeForm};
pub use render::{render_view, ViewState};
pub use session::LiveView;

/// Navigable views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    /// Welcome text
    #[default]
    Dashboard,
    /// Pantry items with add and delete
    Pantry,
    /// Makeable recipe suggestions
    Recipes,
    /// Low-stock pantry items
    Shopping,
    /// New recipe form
    AddRecipe,
}

impl View {
    /// Every view in navigation order
    pub const ALL: [Self; 5] = [
        Self::Dashboard,
        Self::Pantry,
        Self::Recipes,
        Self::Shopping,
        Self::AddRecipe,
    ];

    /// Name used on the command line
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Pantry => "pantry",
            Self::Recipes => "recipes",
            Self::Shopping => "shopping",
            Self::AddRecipe => "add-recipe",
        }
    }

    /// Navigation label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Pantry => "Pantry",
            Self::Recipes => "Recipes",
            Self::Shopping => "Shopping List",
            Self::AddRecipe => "Add Recipe",
        }
    }

    /// Collections this view subscribes to while active
    #[must_use]
    pub const fn collections(&self) -> &'static [Collection] {
        match self {
            Self::Dashboard | Self::AddRecipe => &[],
            Self::Pantry | Self::Shopping => &[Collection::Pantry],
            Self::Recipes => &[Collection::Pantry, Collection::Recipes],
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for View {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dashboard" => Ok(Self::Dashboard),
            "pantry" => Ok(Self::Pantry),
            "recipes" | "suggestions" => Ok(Self::Recipes),
            "shopping" | "shopping-list" => Ok(Self::Shopping),
            "add-recipe" | "addrecipe" => Ok(Self::AddRecipe),
            other => Err(AppError::invalid_input(format!("Unknown view: {other}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_names_round_trip() {
        for view in View::ALL {
            assert_eq!(view.as_str().parse::<View>().unwrap(), view);
        }
        assert_eq!("addRecipe".parse::<View>().unwrap(), View::AddRecipe);
        assert!("settings".parse::<View>().is_err());
    }

    #[test]
    fn test_static_views_need_no_subscriptions() {
        assert!(View::Dashboard.collections().is_empty());
        assert!(View::AddRecipe.collections().is_empty());
        assert_eq!(View::Recipes.collections().len(), 2);
    }
}
