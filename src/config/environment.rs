// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Reads the store location, shopping threshold and environment name from variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Recipes Contributors

//! Environment-based configuration management

use super::database::DatabaseUrl;
use pantry_core::constants::{env_vars, shopping};
use pantry_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use tracing::info;

/// Environment type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Document store location
    pub database_url: DatabaseUrl,
    /// Pantry items strictly below this quantity go on the shopping list
    pub low_stock_threshold: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            database_url: DatabaseUrl::default(),
            low_stock_threshold: shopping::DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if `DATABASE_URL` or `LOW_STOCK_THRESHOLD` is malformed
    pub fn from_env() -> AppResult<Self> {
        let environment = env::var(env_vars::ENVIRONMENT)
            .map(|v| Environment::from_str_or_default(&v))
            .unwrap_or_default();

        let database_url = match env::var(env_vars::DATABASE_URL) {
            Ok(url) => DatabaseUrl::parse_url(&url)?,
            Err(_) => DatabaseUrl::default(),
        };

        let low_stock_threshold = match env::var(env_vars::LOW_STOCK_THRESHOLD) {
            Ok(raw) => parse_threshold(&raw)?,
            Err(_) => shopping::DEFAULT_LOW_STOCK_THRESHOLD,
        };

        let config = Self {
            environment,
            database_url,
            low_stock_threshold,
        };
        info!(
            environment = %config.environment,
            database.url = %config.database_url,
            shopping.threshold = config.low_stock_threshold,
            "Configuration loaded"
        );
        Ok(config)
    }
}

/// Parse a low-stock threshold; zero would make the shopping list always empty
///
/// # Errors
///
/// Returns `ConfigInvalid` for non-numeric or zero values
pub fn parse_threshold(raw: &str) -> AppResult<u32> {
    let value: u32 = raw.trim().parse().map_err(|_| {
        AppError::config_invalid(format!("LOW_STOCK_THRESHOLD must be a whole number, got {raw:?}"))
    })?;
    if value == 0 {
        return Err(AppError::config_invalid(
            "LOW_STOCK_THRESHOLD must be at least 1",
        ));
    }
    Ok(value)
}
