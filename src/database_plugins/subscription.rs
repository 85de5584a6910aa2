// ABOUTME: Live collection snapshots delivered to subscribers over tokio watch channels
// ABOUTME: SnapshotHub publishes whole collections; Subscription releases on drop
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Recipes Contributors

//! Live snapshot subscriptions
//!
//! Each collection owns one `watch` channel whose value is the complete
//! collection. Backends call [`SnapshotHub::publish`] after every successful
//! write. A [`Subscription`] only ever sees the newest snapshot; intermediate
//! snapshots published while a subscriber was busy are skipped, which is fine
//! because each snapshot replaces the previous one wholesale.
//!
//! A subscription is a scoped resource. Dropping it (or calling
//! [`Subscription::unsubscribe`]) releases the receiver, so a view that goes
//! away on any path stops receiving updates.

use super::{Collection, EqualityFilter};
use pantry_core::errors::{AppError, AppResult};
use pantry_core::models::Document;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;
use tokio_stream::{Stream, StreamExt};
use tracing::debug;

type Snapshot = Arc<Vec<Document>>;

/// Fan-out point for whole-collection snapshots
#[derive(Clone)]
pub struct SnapshotHub {
    senders: Arc<HashMap<Collection, watch::Sender<Snapshot>>>,
}

impl SnapshotHub {
    /// Create a hub with an empty snapshot for every collection
    #[must_use]
    pub fn new() -> Self {
        let senders = Collection::ALL
            .into_iter()
            .map(|collection| {
                let (sender, _) = watch::channel(Arc::new(Vec::new()));
                (collection, sender)
            })
            .collect();
        Self {
            senders: Arc::new(senders),
        }
    }

    /// Replace the current snapshot of a collection and wake subscribers
    pub fn publish(&self, collection: Collection, documents: Vec<Document>) {
        if let Some(sender) = self.senders.get(&collection) {
            let count = documents.len();
            sender.send_replace(Arc::new(documents));
            debug!(
                store.collection = %collection,
                snapshot.size = count,
                subscribers = sender.receiver_count(),
                "Published snapshot"
            );
        }
    }

    /// Open a subscription on a collection
    ///
    /// # Errors
    ///
    /// Returns a storage error if the hub has no channel for the collection
    pub fn subscribe(
        &self,
        collection: Collection,
        filter: Option<EqualityFilter>,
    ) -> AppResult<Subscription> {
        let sender = self.senders.get(&collection).ok_or_else(|| {
            AppError::storage("No snapshot channel for collection").with_collection(collection.as_str())
        })?;
        let receiver = sender.subscribe();
        debug!(
            store.collection = %collection,
            subscribers = sender.receiver_count(),
            "Subscription acquired"
        );
        Ok(Subscription {
            collection,
            filter,
            receiver,
        })
    }

    /// Number of live subscriptions on a collection
    #[must_use]
    pub fn subscriber_count(&self, collection: Collection) -> usize {
        self.senders
            .get(&collection)
            .map_or(0, watch::Sender::receiver_count)
    }
}

impl Default for SnapshotHub {
    fn default() -> Self {
        Self::new()
    }
}

/// Live view of one collection
pub struct Subscription {
    collection: Collection,
    filter: Option<EqualityFilter>,
    receiver: watch::Receiver<Snapshot>,
}

impl Subscription {
    /// Collection this subscription follows
    #[must_use]
    pub const fn collection(&self) -> Collection {
        self.collection
    }

    /// Latest snapshot, marking it as seen
    pub fn current(&mut self) -> Vec<Document> {
        let snapshot = Arc::clone(&self.receiver.borrow_and_update());
        apply_filter(self.filter.as_ref(), &snapshot)
    }

    /// Wait for the next published snapshot
    ///
    /// # Errors
    ///
    /// Returns a storage error once the store has been dropped
    pub async fn changed(&mut self) -> AppResult<Vec<Document>> {
        self.receiver.changed().await.map_err(|_| {
            AppError::storage("Document store closed").with_collection(self.collection.as_str())
        })?;
        Ok(self.current())
    }

    /// Convert into a stream that yields the current snapshot, then every new one
    pub fn into_stream(self) -> impl Stream<Item = Vec<Document>> + Send {
        let filter = self.filter;
        WatchStream::new(self.receiver).map(move |snapshot| apply_filter(filter.as_ref(), &snapshot))
    }

    /// Release the subscription explicitly
    pub fn unsubscribe(self) {
        debug!(store.collection = %self.collection, "Subscription released");
    }
}

fn apply_filter(filter: Option<&EqualityFilter>, snapshot: &[Document]) -> Vec<Document> {
    match filter {
        Some(filter) => snapshot
            .iter()
            .filter(|doc| filter.matches(doc))
            .cloned()
            .collect(),
        None => snapshot.to_vec(),
    }
}
