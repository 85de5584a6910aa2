// ABOUTME: In-memory document store backend for tests, demos and ephemeral sessions
// ABOUTME: Keeps insertion order per collection and publishes whole snapshots after each write
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Recipes Contributors

use super::shared::{merge_partial, require_object};
use super::{Collection, DocumentStore, EqualityFilter, SnapshotHub, Subscription};
use async_trait::async_trait;
use pantry_core::errors::{AppError, AppResult};
use pantry_core::models::{Document, DocumentId};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Document store held entirely in process memory
#[derive(Clone, Default)]
pub struct MemoryStore {
    collections: Arc<RwLock<HashMap<Collection, Vec<Document>>>>,
    hub: SnapshotHub,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot hub backing this store's subscriptions
    #[must_use]
    pub const fn hub(&self) -> &SnapshotHub {
        &self.hub
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn create(&self, collection: Collection, data: Value) -> AppResult<DocumentId> {
        require_object(&data)?;
        let id = DocumentId::generate();
        let mut guard = self.collections.write().await;
        let documents = guard.entry(collection).or_default();
        documents.push(Document::new(id.clone(), data));
        self.hub.publish(collection, documents.clone());
        Ok(id)
    }

    async fn list(&self, collection: Collection) -> AppResult<Vec<Document>> {
        let guard = self.collections.read().await;
        Ok(guard.get(&collection).cloned().unwrap_or_default())
    }

    async fn query_once(
        &self,
        collection: Collection,
        filter: &EqualityFilter,
    ) -> AppResult<Vec<Document>> {
        let guard = self.collections.read().await;
        Ok(guard
            .get(&collection)
            .map(|docs| docs.iter().filter(|d| filter.matches(d)).cloned().collect())
            .unwrap_or_default())
    }

    async fn update(
        &self,
        collection: Collection,
        id: &DocumentId,
        partial: Value,
    ) -> AppResult<()> {
        let mut guard = self.collections.write().await;
        let documents = guard.entry(collection).or_default();
        let document = documents
            .iter_mut()
            .find(|d| &d.id == id)
            .ok_or_else(|| {
                AppError::not_found("Document")
                    .with_collection(collection.as_str())
                    .with_resource_id(id.as_str())
            })?;
        merge_partial(&mut document.data, partial)?;
        self.hub.publish(collection, documents.clone());
        Ok(())
    }

    async fn delete(&self, collection: Collection, id: &DocumentId) -> AppResult<()> {
        let mut guard = self.collections.write().await;
        let documents = guard.entry(collection).or_default();
        let before = documents.len();
        documents.retain(|d| &d.id != id);
        if documents.len() != before {
            self.hub.publish(collection, documents.clone());
        }
        Ok(())
    }

    async fn subscribe(
        &self,
        collection: Collection,
        filter: Option<EqualityFilter>,
    ) -> AppResult<Subscription> {
        self.hub.subscribe(collection, filter)
    }
}
