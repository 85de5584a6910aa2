// ABOUTME: Pantry store adapter owning name normalization and merge-on-add
// ABOUTME: One document per canonical ingredient name; repeat adds increase its quantity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Recipes Contributors

//! Pantry adapter
//!
//! The existence check and the following write are two separate store calls.
//! An exact lookup on the canonical name runs first; when it misses, stored
//! names are compared after normalization so records written with other
//! casing are merged into and renamed rather than duplicated.
//! Two concurrent adds of a new name can both miss and both create; readers
//! tolerate the duplicate by using the first match.

use super::snapshots::pantry_from_snapshot;
use crate::database_plugins::{Collection, DocumentStore, EqualityFilter};
use crate::logging::AppLogger;
use pantry_core::constants::fields;
use pantry_core::errors::{AppError, AppResult};
use pantry_core::models::{Document, DocumentId, PantryItem, PantryRecord};
use pantry_core::{names_match, normalize_name};
use serde_json::{Map, Value};
use tracing::{error, info};

/// What an add did to the pantry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PantryChange {
    /// A new item was created
    Created {
        /// New document id
        id: DocumentId,
        /// Canonical name stored
        name: String,
        /// Quantity stored
        quantity: u32,
    },
    /// An existing item's quantity was increased
    Merged {
        /// Existing document id
        id: DocumentId,
        /// Canonical name looked up
        name: String,
        /// Quantity after the merge
        quantity: u32,
    },
}

impl PantryChange {
    /// Quantity now stored for the item
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        match self {
            Self::Created { quantity, .. } | Self::Merged { quantity, .. } => *quantity,
        }
    }

    /// Id of the item written
    #[must_use]
    pub const fn id(&self) -> &DocumentId {
        match self {
            Self::Created { id, .. } | Self::Merged { id, .. } => id,
        }
    }
}

/// Validate a pantry entry and return its canonical name
///
/// # Errors
///
/// Returns `MissingRequiredField` for a blank name and `ValueOutOfRange` for
/// a zero quantity
pub fn validate_entry(raw_name: &str, quantity: u32) -> AppResult<String> {
    let name = normalize_name(raw_name);
    if name.is_empty() {
        return Err(AppError::missing_field(fields::NAME));
    }
    if quantity == 0 {
        return Err(AppError::out_of_range("Quantity must be at least 1"));
    }
    Ok(name)
}

/// Partial update setting only the quantity field
pub(crate) fn quantity_patch(quantity: u32) -> Value {
    let mut patch = Map::new();
    patch.insert(fields::QUANTITY.to_owned(), Value::from(quantity));
    Value::Object(patch)
}

fn merge_patch(name: &str, quantity: u32) -> Value {
    let mut patch = Map::new();
    patch.insert(fields::NAME.to_owned(), Value::from(name));
    patch.insert(fields::QUANTITY.to_owned(), Value::from(quantity));
    Value::Object(patch)
}

/// Pantry operations over a document store
#[derive(Clone)]
pub struct PantryService<S> {
    store: S,
}

impl<S: DocumentStore> PantryService<S> {
    /// Create a service over `store`
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Add `quantity` units of an ingredient, merging with an existing item
    ///
    /// # Errors
    ///
    /// Returns a validation error before any store call for a blank name or
    /// zero quantity, `ValueOutOfRange` if the merged quantity overflows, or
    /// the store error if a store call fails
    pub async fn add_or_merge_ingredient(
        &self,
        raw_name: &str,
        quantity: u32,
    ) -> AppResult<PantryChange> {
        let name = validate_entry(raw_name, quantity)?;
        self.write_entry(name, quantity).await.inspect_err(|e| {
            error!(pantry.item = %raw_name.trim(), error = %e, "Error adding/updating ingredient");
        })
    }

    async fn write_entry(&self, name: String, quantity: u32) -> AppResult<PantryChange> {
        if let Some(doc) = self.find_entry(&name).await? {
            let current = doc
                .field(fields::QUANTITY)
                .and_then(Value::as_u64)
                .unwrap_or(0);
            let merged = current
                .checked_add(u64::from(quantity))
                .and_then(|total| u32::try_from(total).ok())
                .ok_or_else(|| {
                    AppError::out_of_range(format!("Quantity of \"{name}\" would overflow"))
                        .with_resource_id(doc.id.as_str())
                })?;
            // Records written before names were normalized get the canonical name back
            let patch = if doc.field(fields::NAME).and_then(Value::as_str) == Some(name.as_str()) {
                quantity_patch(merged)
            } else {
                merge_patch(&name, merged)
            };
            self.store.update(Collection::Pantry, &doc.id, patch).await?;
            AppLogger::log_pantry_change(&name, merged, true);
            return Ok(PantryChange::Merged {
                id: doc.id,
                name,
                quantity: merged,
            });
        }

        let record = serde_json::to_value(PantryRecord::new(name.clone(), quantity))?;
        let id = self.store.create(Collection::Pantry, record).await?;
        AppLogger::log_pantry_change(&name, quantity, false);
        Ok(PantryChange::Created { id, name, quantity })
    }

    /// First item stored under `name`, falling back to a loose name match
    async fn find_entry(&self, name: &str) -> AppResult<Option<Document>> {
        let filter = EqualityFilter::new(fields::NAME, name);
        let exact = self.store.query_once(Collection::Pantry, &filter).await?;
        if let Some(doc) = exact.into_iter().next() {
            return Ok(Some(doc));
        }

        let all = self.store.list(Collection::Pantry).await?;
        Ok(all.into_iter().find(|doc| {
            doc.field(fields::NAME)
                .and_then(Value::as_str)
                .is_some_and(|stored| names_match(stored, name))
        }))
    }

    /// Delete a pantry item by id
    ///
    /// # Errors
    ///
    /// Returns the store error if the delete fails
    pub async fn delete_ingredient(&self, id: &DocumentId) -> AppResult<()> {
        match self.store.delete(Collection::Pantry, id).await {
            Ok(()) => {
                info!(pantry.id = %id, "Deleted ingredient with id: {id}");
                Ok(())
            }
            Err(e) => {
                error!(pantry.id = %id, error = %e, "Error deleting ingredient");
                Err(e)
            }
        }
    }

    /// Current pantry items in snapshot order
    ///
    /// # Errors
    ///
    /// Returns the store error if the read fails
    pub async fn list(&self) -> AppResult<Vec<PantryItem>> {
        let documents = self.store.list(Collection::Pantry).await?;
        Ok(pantry_from_snapshot(&documents))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database_plugins::memory::MemoryStore;
    use pantry_core::ErrorCode;

    #[test]
    fn test_validate_entry() {
        assert_eq!(validate_entry("  Eggs ", 1).unwrap(), "eggs");
        assert_eq!(
            validate_entry("   ", 1).unwrap_err().code,
            ErrorCode::MissingRequiredField
        );
        assert_eq!(
            validate_entry("eggs", 0).unwrap_err().code,
            ErrorCode::ValueOutOfRange
        );
    }

    #[tokio::test]
    async fn test_add_then_merge() {
        let service = PantryService::new(MemoryStore::new());
        let first = service.add_or_merge_ingredient("Eggs", 2).await.unwrap();
        let second = service.add_or_merge_ingredient(" eggs ", 3).await.unwrap();

        assert!(matches!(first, PantryChange::Created { .. }));
        assert!(matches!(second, PantryChange::Merged { quantity: 5, .. }));
        assert_eq!(first.id(), second.id());

        let items = service.list().await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "eggs");
        assert_eq!(items[0].quantity, 5);
    }

    #[tokio::test]
    async fn test_validation_failure_writes_nothing() {
        let store = MemoryStore::new();
        let service = PantryService::new(store.clone());
        assert!(service.add_or_merge_ingredient("", 3).await.is_err());
        assert!(store.list(Collection::Pantry).await.unwrap().is_empty());
    }
}
