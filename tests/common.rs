// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides store builders, model fixtures and a store wrapper that injects failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Recipes Contributors
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `pantry_recipes`

use async_trait::async_trait;
use pantry_recipes::database_plugins::memory::MemoryStore;
use pantry_recipes::database_plugins::{
    Collection, DocumentStore, EqualityFilter, Subscription,
};
use pantry_recipes::errors::{AppError, AppResult};
use pantry_recipes::models::{Document, DocumentId, PantryItem, Recipe, RecipeIngredient};
use pantry_recipes::services::{pantry_from_snapshot, recipes_from_snapshot};
use serde_json::{json, Value};
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };
        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Pantry item fixture with a readable id
pub fn pantry_item(id: &str, name: &str, quantity: u32) -> PantryItem {
    PantryItem::new(DocumentId::new(id), name, quantity)
}

/// Recipe fixture with well-formed ingredient lines
pub fn recipe(name: &str, lines: &[(&str, u32)]) -> Recipe {
    Recipe {
        id: DocumentId::new(format!("recipe-{}", name.to_lowercase().replace(' ', "-"))),
        name: name.to_owned(),
        ingredients: Some(
            lines
                .iter()
                .map(|(n, q)| RecipeIngredient::new(*n, *q))
                .collect(),
        ),
        cuisine: None,
        cooking_time: None,
    }
}

/// Fresh in-memory store with test logging enabled
pub fn memory_store() -> MemoryStore {
    init_test_logging();
    MemoryStore::new()
}

/// Write a raw pantry document, bypassing the adapter
pub async fn insert_pantry<S: DocumentStore>(store: &S, name: &str, quantity: u32) -> DocumentId {
    store
        .create(Collection::Pantry, json!({"name": name, "quantity": quantity}))
        .await
        .unwrap()
}

/// Current pantry snapshot
pub async fn pantry_snapshot<S: DocumentStore>(store: &S) -> Vec<PantryItem> {
    pantry_from_snapshot(&store.list(Collection::Pantry).await.unwrap())
}

/// Current recipe snapshot
pub async fn recipe_snapshot<S: DocumentStore>(store: &S) -> Vec<Recipe> {
    recipes_from_snapshot(&store.list(Collection::Recipes).await.unwrap())
}

/// Memory store wrapper that fails chosen operations
#[derive(Clone, Default)]
pub struct FlakyStore {
    inner: MemoryStore,
    failing_updates: Arc<Mutex<HashSet<DocumentId>>>,
    fail_writes: Arc<AtomicBool>,
    fail_queries: Arc<AtomicBool>,
}

impl FlakyStore {
    pub fn new() -> Self {
        init_test_logging();
        Self::default()
    }

    /// Underlying store, for seeding and inspection
    pub const fn inner(&self) -> &MemoryStore {
        &self.inner
    }

    /// Make every update of `id` fail
    pub fn fail_updates_of(&self, id: &DocumentId) {
        self.failing_updates.lock().unwrap().insert(id.clone());
    }

    /// Make every create, update and delete fail
    pub fn fail_all_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Make every `query_once` fail
    pub fn fail_all_queries(&self, fail: bool) {
        self.fail_queries.store(fail, Ordering::SeqCst);
    }

    fn write_blocked(&self) -> AppResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(AppError::storage("injected write failure"));
        }
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for FlakyStore {
    fn backend_name(&self) -> &'static str {
        "flaky"
    }

    async fn create(&self, collection: Collection, data: Value) -> AppResult<DocumentId> {
        self.write_blocked()?;
        self.inner.create(collection, data).await
    }

    async fn list(&self, collection: Collection) -> AppResult<Vec<Document>> {
        self.inner.list(collection).await
    }

    async fn query_once(
        &self,
        collection: Collection,
        filter: &EqualityFilter,
    ) -> AppResult<Vec<Document>> {
        if self.fail_queries.load(Ordering::SeqCst) {
            return Err(AppError::storage("injected query failure"));
        }
        self.inner.query_once(collection, filter).await
    }

    async fn update(
        &self,
        collection: Collection,
        id: &DocumentId,
        partial: Value,
    ) -> AppResult<()> {
        self.write_blocked()?;
        let blocked = self.failing_updates.lock().unwrap().contains(id);
        if blocked {
            return Err(AppError::storage("injected update failure").with_resource_id(id.as_str()));
        }
        self.inner.update(collection, id, partial).await
    }

    async fn delete(&self, collection: Collection, id: &DocumentId) -> AppResult<()> {
        self.write_blocked()?;
        self.inner.delete(collection, id).await
    }

    async fn subscribe(
        &self,
        collection: Collection,
        filter: Option<EqualityFilter>,
    ) -> AppResult<Subscription> {
        self.inner.subscribe(collection, filter).await
    }
}
