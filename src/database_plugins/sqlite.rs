// ABOUTME: SQLite document store backend built on sqlx
// ABOUTME: Stores JSON bodies per collection and republishes snapshots after local and external commits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Recipes Contributors

//! `SQLite` document store
//!
//! Documents live in a single `documents` table keyed by `(collection, id)`.
//! A monotonically increasing `seq` column preserves insertion order. Writes
//! are serialized through a process-local mutex so that the snapshot published
//! after a write is never older than one published before it.
//!
//! Every write also bumps a per-collection counter in `store_version` inside
//! the same transaction. File-backed stores poll that counter so commits made
//! by other processes sharing the file reach local subscribers too.

use super::shared::{merge_partial, require_object};
use super::{Collection, DocumentStore, EqualityFilter, SnapshotHub, Subscription};
use async_trait::async_trait;
use pantry_core::constants::store::CHANGE_POLL_INTERVAL_MS;
use pantry_core::errors::{AppError, AppResult};
use pantry_core::models::{Document, DocumentId};
use serde_json::Value;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::{Row, Sqlite, Transaction};
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info, warn};

/// Last `store_version` value whose snapshot was published, per collection
type SeenVersions = HashMap<Collection, i64>;

/// Aborts the change poller once the last store clone is dropped
struct PollerHandle(JoinHandle<()>);

impl Drop for PollerHandle {
    fn drop(&mut self) {
        self.0.abort();
    }
}

/// `SQLite`-backed document store
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
    hub: SnapshotHub,
    // Serializes local writes and the poller; holds the versions already published
    versions: Arc<Mutex<SeenVersions>>,
    poller: Option<Arc<PollerHandle>>,
}

impl SqliteStore {
    /// Connect, run migrations and seed the snapshot hub
    ///
    /// File-backed stores also start a background task that republishes a
    /// collection when another connection commits to it.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid, the connection fails or the
    /// schema cannot be created
    pub async fn new(database_url: &str) -> AppResult<Self> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| AppError::config_invalid(format!("Invalid SQLite URL: {e}")))?
            .create_if_missing(true);

        // Every in-memory connection is its own database, so pin the pool to a
        // single connection that is never recycled
        let in_memory = database_url.contains(":memory:");
        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(5)
        };

        let pool = pool_options.connect_with(options).await?;
        migrate_schema(&pool).await?;

        let hub = SnapshotHub::new();
        let mut seen = SeenVersions::new();
        for collection in Collection::ALL {
            seen.insert(collection, read_version(&pool, collection).await?);
            hub.publish(collection, list_documents(&pool, collection).await?);
        }
        let versions = Arc::new(Mutex::new(seen));

        // Nothing outside this pool can reach an in-memory database
        let poller = (!in_memory).then(|| {
            let task = tokio::spawn(poll_external_commits(
                pool.clone(),
                hub.clone(),
                Arc::clone(&versions),
            ));
            Arc::new(PollerHandle(task))
        });

        info!(database.url = %database_url, watch = !in_memory, "SQLite document store ready");
        Ok(Self {
            pool,
            hub,
            versions,
            poller,
        })
    }

    /// Snapshot hub backing this store's subscriptions
    #[must_use]
    pub const fn hub(&self) -> &SnapshotHub {
        &self.hub
    }

    /// Whether commits from other connections are being watched
    #[must_use]
    pub const fn watches_external_commits(&self) -> bool {
        self.poller.is_some()
    }

    async fn fetch_one(&self, collection: Collection, id: &DocumentId) -> AppResult<Option<Value>> {
        let row = sqlx::query("SELECT data FROM documents WHERE collection = ?1 AND id = ?2")
            .bind(collection.as_str())
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await?;

        row.map(|row| -> AppResult<Value> {
            let raw: String = row.try_get("data")?;
            Ok(serde_json::from_str(&raw)?)
        })
        .transpose()
    }

    /// Publish the committed state of `collection`
    ///
    /// Runs after the write is durable, so a failed re-read is logged rather
    /// than reported to the writer.
    async fn republish(&self, seen: &mut SeenVersions, collection: Collection, version: i64) {
        seen.insert(collection, version);
        if let Err(e) = refresh(&self.pool, &self.hub, collection).await {
            warn!(
                collection = collection.as_str(),
                error = %e,
                "Write committed but snapshot could not be republished"
            );
        }
    }
}

/// Create the documents and change counter tables
async fn migrate_schema(pool: &SqlitePool) -> AppResult<()> {
    sqlx::query(
        r"
        CREATE TABLE IF NOT EXISTS documents (
            seq INTEGER PRIMARY KEY AUTOINCREMENT,
            collection TEXT NOT NULL,
            id TEXT NOT NULL,
            data TEXT NOT NULL,
            UNIQUE (collection, id)
        )
        ",
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_documents_collection ON documents(collection, seq)")
        .execute(pool)
        .await?;

    sqlx::query(
        r"
        CREATE TABLE IF NOT EXISTS store_version (
            collection TEXT PRIMARY KEY,
            version INTEGER NOT NULL
        )
        ",
    )
    .execute(pool)
    .await?;

    for collection in Collection::ALL {
        sqlx::query("INSERT OR IGNORE INTO store_version (collection, version) VALUES (?1, 0)")
            .bind(collection.as_str())
            .execute(pool)
            .await?;
    }

    Ok(())
}

async fn list_documents(pool: &SqlitePool, collection: Collection) -> AppResult<Vec<Document>> {
    let rows = sqlx::query("SELECT id, data FROM documents WHERE collection = ?1 ORDER BY seq")
        .bind(collection.as_str())
        .fetch_all(pool)
        .await?;

    let mut documents = Vec::with_capacity(rows.len());
    for row in rows {
        let id: String = row.try_get("id")?;
        let raw: String = row.try_get("data")?;
        let data: Value = serde_json::from_str(&raw)
            .map_err(|e| AppError::from(e).with_resource_id(id.clone()))?;
        documents.push(Document::new(DocumentId::new(id), data));
    }
    Ok(documents)
}

async fn read_version(pool: &SqlitePool, collection: Collection) -> AppResult<i64> {
    let version: Option<i64> =
        sqlx::query_scalar("SELECT version FROM store_version WHERE collection = ?1")
            .bind(collection.as_str())
            .fetch_optional(pool)
            .await?;
    Ok(version.unwrap_or(0))
}

async fn bump_version(tx: &mut Transaction<'_, Sqlite>, collection: Collection) -> AppResult<i64> {
    let version: i64 = sqlx::query_scalar(
        "UPDATE store_version SET version = version + 1 WHERE collection = ?1 RETURNING version",
    )
    .bind(collection.as_str())
    .fetch_one(&mut **tx)
    .await?;
    Ok(version)
}

async fn refresh(pool: &SqlitePool, hub: &SnapshotHub, collection: Collection) -> AppResult<()> {
    let documents = list_documents(pool, collection).await?;
    hub.publish(collection, documents);
    Ok(())
}

async fn poll_external_commits(
    pool: SqlitePool,
    hub: SnapshotHub,
    versions: Arc<Mutex<SeenVersions>>,
) {
    let mut ticker = interval(Duration::from_millis(CHANGE_POLL_INTERVAL_MS));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;
        let mut seen = versions.lock().await;
        for collection in Collection::ALL {
            let version = match read_version(&pool, collection).await {
                Ok(version) => version,
                Err(e) => {
                    warn!(collection = collection.as_str(), error = %e, "Change check failed");
                    continue;
                }
            };
            if seen.get(&collection) == Some(&version) {
                continue;
            }
            match refresh(&pool, &hub, collection).await {
                Ok(()) => {
                    debug!(collection = collection.as_str(), version, "External commit published");
                    seen.insert(collection, version);
                }
                Err(e) => {
                    warn!(collection = collection.as_str(), error = %e, "External commit could not be read");
                }
            }
        }
    }
}

#[async_trait]
impl DocumentStore for SqliteStore {
    fn backend_name(&self) -> &'static str {
        "sqlite"
    }

    async fn create(&self, collection: Collection, data: Value) -> AppResult<DocumentId> {
        require_object(&data)?;
        let id = DocumentId::generate();
        let body = serde_json::to_string(&data)?;

        let mut seen = self.versions.lock().await;
        let mut tx = self.pool.begin().await?;
        sqlx::query("INSERT INTO documents (collection, id, data) VALUES (?1, ?2, ?3)")
            .bind(collection.as_str())
            .bind(id.as_str())
            .bind(body)
            .execute(&mut *tx)
            .await?;
        let version = bump_version(&mut tx, collection).await?;
        tx.commit().await?;

        self.republish(&mut seen, collection, version).await;
        Ok(id)
    }

    async fn list(&self, collection: Collection) -> AppResult<Vec<Document>> {
        list_documents(&self.pool, collection).await
    }

    async fn query_once(
        &self,
        collection: Collection,
        filter: &EqualityFilter,
    ) -> AppResult<Vec<Document>> {
        let documents = self.list(collection).await?;
        Ok(documents.into_iter().filter(|d| filter.matches(d)).collect())
    }

    async fn update(
        &self,
        collection: Collection,
        id: &DocumentId,
        partial: Value,
    ) -> AppResult<()> {
        let mut seen = self.versions.lock().await;
        let mut data = self.fetch_one(collection, id).await?.ok_or_else(|| {
            AppError::not_found("Document")
                .with_collection(collection.as_str())
                .with_resource_id(id.as_str())
        })?;
        merge_partial(&mut data, partial)?;

        let mut tx = self.pool.begin().await?;
        sqlx::query("UPDATE documents SET data = ?1 WHERE collection = ?2 AND id = ?3")
            .bind(serde_json::to_string(&data)?)
            .bind(collection.as_str())
            .bind(id.as_str())
            .execute(&mut *tx)
            .await?;
        let version = bump_version(&mut tx, collection).await?;
        tx.commit().await?;

        self.republish(&mut seen, collection, version).await;
        Ok(())
    }

    async fn delete(&self, collection: Collection, id: &DocumentId) -> AppResult<()> {
        let mut seen = self.versions.lock().await;
        let mut tx = self.pool.begin().await?;
        let result = sqlx::query("DELETE FROM documents WHERE collection = ?1 AND id = ?2")
            .bind(collection.as_str())
            .bind(id.as_str())
            .execute(&mut *tx)
            .await?;
        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(());
        }
        let version = bump_version(&mut tx, collection).await?;
        tx.commit().await?;

        self.republish(&mut seen, collection, version).await;
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
