// ABOUTME: Document store factory with runtime backend selection
// ABOUTME: Wraps the in-memory and SQLite stores behind one delegating enum
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Recipes Contributors

//! Document store factory
//!
//! [`Database`] is created from a [`DatabaseUrl`] and forwards every
//! [`DocumentStore`] call to the selected backend, timing each call.

use super::memory::MemoryStore;
#[cfg(feature = "sqlite")]
use super::sqlite::SqliteStore;
use super::{Collection, DocumentStore, EqualityFilter, Subscription};
use crate::config::DatabaseUrl;
use crate::logging::AppLogger;
use async_trait::async_trait;
use pantry_core::errors::AppResult;
use pantry_core::models::{Document, DocumentId};
use serde_json::Value;
use std::time::Instant;
use tracing::{debug, info};

/// Document store instance that delegates to the configured backend
#[derive(Clone)]
pub enum Database {
    /// Process-local store
    Memory(MemoryStore),
    /// `SQLite`-backed store
    #[cfg(feature = "sqlite")]
    SQLite(SqliteStore),
}

impl Database {
    /// Create a store for the given location
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The parent directory of a `SQLite` file cannot be created
    /// - The `sqlite` feature is disabled and a `SQLite` URL is given
    /// - Connecting or migrating the `SQLite` database fails
    pub async fn new(database_url: &DatabaseUrl) -> AppResult<Self> {
        debug!(database.url = %database_url, "Opening document store");
        match database_url {
            DatabaseUrl::InMemory => {
                info!("Using in-memory document store");
                Ok(Self::Memory(MemoryStore::new()))
            }
            #[cfg(feature = "sqlite")]
            DatabaseUrl::SQLite { path } => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    std::fs::create_dir_all(parent).map_err(|e| {
                        pantry_core::AppError::storage(format!(
                            "Cannot create database directory {}",
                            parent.display()
                        ))
                        .with_source(e)
                    })?;
                }
                let store = SqliteStore::new(&database_url.to_connection_string()).await?;
                Ok(Self::SQLite(store))
            }
            #[cfg(feature = "sqlite")]
            DatabaseUrl::SQLiteMemory => {
                let store = SqliteStore::new(&database_url.to_connection_string()).await?;
                Ok(Self::SQLite(store))
            }
            #[cfg(not(feature = "sqlite"))]
            DatabaseUrl::SQLite { .. } | DatabaseUrl::SQLiteMemory => {
                let message = "SQLite support not enabled. Enable the 'sqlite' feature flag.";
                tracing::error!("{message}");
                Err(pantry_core::AppError::config_invalid(message))
            }
        }
    }

    /// Create an in-memory store
    #[must_use]
    pub fn memory() -> Self {
        Self::Memory(MemoryStore::new())
    }

    /// Get a descriptive string for the current backend
    #[must_use]
    pub const fn backend_info(&self) -> &'static str {
        match self {
            Self::Memory(_) => "In-memory (ephemeral)",
            #[cfg(feature = "sqlite")]
            Self::SQLite(_) => "SQLite (file-backed)",
        }
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}

fn record<T>(operation: &str, collection: Collection, started: Instant, result: &AppResult<T>) {
    AppLogger::log_store_operation(
        operation,
        collection.as_str(),
        result.is_ok(),
        elapsed_ms(started),
    );
}

#[async_trait]
impl DocumentStore for Database {
    fn backend_name(&self) -> &'static str {
        match self {
            Self::Memory(db) => db.backend_name(),
            #[cfg(feature = "sqlite")]
            Self::SQLite(db) => db.backend_name(),
        }
    }

    async fn create(&self, collection: Collection, data: Value) -> AppResult<DocumentId> {
        let started = Instant::now();
        let result = match self {
            Self::Memory(db) => db.create(collection, data).await,
            #[cfg(feature = "sqlite")]
            Self::SQLite(db) => db.create(collection, data).await,
        };
        record("create", collection, started, &result);
        result
    }

    async fn list(&self, collection: Collection) -> AppResult<Vec<Document>> {
        let started = Instant::now();
        let result = match self {
            Self::Memory(db) => db.list(collection).await,
            #[cfg(feature = "sqlite")]
            Self::SQLite(db) => db.list(collection).await,
        };
        record("list", collection, started, &result);
        result
    }

    async fn query_once(
        &self,
        collection: Collection,
        filter: &EqualityFilter,
    ) -> AppResult<Vec<Document>> {
        let started = Instant::now();
        let result = match self {
            Self::Memory(db) => db.query_once(collection, filter).await,
            #[cfg(feature = "sqlite")]
            Self::SQLite(db) => db.query_once(collection, filter).await,
        };
        record("query_once", collection, started, &result);
        result
    }

    async fn update(
        &self,
        collection: Collection,
        id: &DocumentId,
        partial: Value,
    ) -> AppResult<()> {
        let started = Instant::now();
        let result = match self {
            Self::Memory(db) => db.update(collection, id, partial).await,
            #[cfg(feature = "sqlite")]
            Self::SQLite(db) => db.update(collection, id, partial).await,
        };
        record("update", collection, started, &result);
        result
    }

    async fn delete(&self, collection: Collection, id: &DocumentId) -> AppResult<()> {
        let started = Instant::now();
        let result = match self {
            Self::Memory(db) => db.delete(collection, id).await,
            #[cfg(feature = "sqlite")]
            Self::SQLite(db) => db.delete(collection, id).await,
        };
        record("delete", collection, started, &result);
        result
    }

    async fn subscribe(
        &self,
        collection: Collection,
        filter: Option<EqualityFilter>,
    ) -> AppResult<Subscription> {
        match self {
            Self::Memory(db) => db.subscribe(collection, filter).await,
            #[cfg(feature = "sqlite")]
            Self::SQLite(db) => db.subscribe(collection, filter).await,
        }
    }
}
