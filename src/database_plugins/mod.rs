// ABOUTME: Document store abstraction layer for the pantry and recipe collections
// ABOUTME: Plugin architecture with in-memory and SQLite backends plus live snapshot subscriptions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Recipes Contributors

//! # Document Store
//!
//! The application delegates persistence and real-time synchronization to a
//! document store. Every backend implements [`DocumentStore`]:
//!
//! - `create` assigns a fresh [`DocumentId`]
//! - `list` and `query_once` read point-in-time results
//! - `update` shallow-merges a partial JSON object into one document
//! - `delete` removes a document by id
//! - `subscribe` returns a [`Subscription`] that yields the full current
//!   snapshot of a collection after every successful write
//!
//! Backends publish whole snapshots, never diffs, so a subscriber always
//! observes a consistent collection even if it is stale relative to writes
//! still in flight.

pub mod factory;
pub mod memory;
pub mod shared;
#[cfg(feature = "sqlite")]
pub mod sqlite;
pub mod subscription;

use async_trait::async_trait;
use pantry_core::constants::collections;
use pantry_core::errors::{AppError, AppResult};
use pantry_core::models::{Document, DocumentId};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

pub use subscription::{SnapshotHub, Subscription};

/// Collections held by the document store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    /// Pantry items
    Pantry,
    /// Recipes
    Recipes,
}

impl Collection {
    /// Every collection, in a stable order
    pub const ALL: [Self; 2] = [Self::Pantry, Self::Recipes];

    /// Name used as the storage key
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pantry => collections::PANTRY,
            Self::Recipes => collections::RECIPES,
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Collection {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            collections::PANTRY => Ok(Self::Pantry),
            collections::RECIPES => Ok(Self::Recipes),
            other => Err(AppError::invalid_input(format!("Unknown collection: {other}"))),
        }
    }
}

/// Top-level field equality filter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EqualityFilter {
    /// Field name
    pub field: String,
    /// Value the field must equal
    pub value: Value,
}

impl EqualityFilter {
    /// Create a filter matching `field == value`
    pub fn new(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Whether a document satisfies the filter
    #[must_use]
    pub fn matches(&self, document: &Document) -> bool {
        document.field(&self.field) == Some(&self.value)
    }
}

/// Core document store abstraction
///
/// All backends must implement this trait so the adapters and views can run
/// against any of them.
#[async_trait]
pub trait DocumentStore: Send + Sync + Clone {
    /// Short backend label for logs
    fn backend_name(&self) -> &'static str;

    /// Insert a new document and return its generated id
    async fn create(&self, collection: Collection, data: Value) -> AppResult<DocumentId>;

    /// Read every document of a collection in insertion order
    async fn list(&self, collection: Collection) -> AppResult<Vec<Document>>;

    /// Read the documents matching an equality filter, once
    async fn query_once(
        &self,
        collection: Collection,
        filter: &EqualityFilter,
    ) -> AppResult<Vec<Document>>;

    /// Shallow-merge `partial` into the document with `id`
    ///
    /// Fails with `ResourceNotFound` if the document does not exist.
    async fn update(&self, collection: Collection, id: &DocumentId, partial: Value)
        -> AppResult<()>;

    /// Delete the document with `id`; deleting a missing id is not an error
    async fn delete(&self, collection: Collection, id: &DocumentId) -> AppResult<()>;

    /// Subscribe to full snapshots of a collection
    ///
    /// Dropping the returned [`Subscription`] unsubscribes.
    async fn subscribe(
        &self,
        collection: Collection,
        filter: Option<EqualityFilter>,
    ) -> AppResult<Subscription>;
}
