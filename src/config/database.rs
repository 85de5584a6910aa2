// ABOUTME: Document store location parsing for in-memory and SQLite backends
// ABOUTME: Converts DATABASE_URL strings into a typed DatabaseUrl
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Recipes Contributors

use pantry_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::path::PathBuf;

/// Type-safe document store location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatabaseUrl {
    /// Process-local store; contents vanish on exit
    InMemory,
    /// `SQLite` database with file path
    SQLite {
        /// Path to `SQLite` database file
        path: PathBuf,
    },
    /// In-memory `SQLite` (for testing the SQL backend)
    SQLiteMemory,
}

impl DatabaseUrl {
    /// Parse from string with validation
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` for empty strings and unsupported schemes
    pub fn parse_url(s: &str) -> AppResult<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(AppError::config_invalid("Database URL is empty"));
        }
        if s == "memory" || s == "memory:" {
            return Ok(Self::InMemory);
        }
        if let Some(path_str) = s.strip_prefix("sqlite:") {
            return if path_str == ":memory:" {
                Ok(Self::SQLiteMemory)
            } else if path_str.is_empty() {
                Err(AppError::config_invalid("SQLite URL has no path"))
            } else {
                Ok(Self::SQLite {
                    path: PathBuf::from(path_str.trim_start_matches("//")),
                })
            };
        }
        if s.contains("://") {
            return Err(AppError::config_invalid(format!(
                "Unsupported database URL scheme: {s}"
            )));
        }
        // Fallback: treat as SQLite file path
        Ok(Self::SQLite {
            path: PathBuf::from(s),
        })
    }

    /// Convert to connection string
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::InMemory => "memory".into(),
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::SQLiteMemory => "sqlite::memory:".into(),
        }
    }

    /// Whether the store's contents are lost on exit
    #[must_use]
    pub const fn is_ephemeral(&self) -> bool {
        matches!(self, Self::InMemory | Self::SQLiteMemory)
    }
}

impl Default for DatabaseUrl {
    fn default() -> Self {
        Self::SQLite {
            path: PathBuf::from("./data/pantry.db"),
        }
    }
}

impl Display for DatabaseUrl {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.to_connection_string())
    }
}
