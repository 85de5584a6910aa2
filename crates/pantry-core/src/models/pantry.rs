// ABOUTME: Pantry item model: one quantity per distinct normalized ingredient name
// ABOUTME: Defines the stored PantryRecord and the id-carrying PantryItem
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Recipes Contributors

use super::document::{Document, DocumentId};
use crate::errors::AppResult;
use serde::{Deserialize, Serialize};

/// Stored body of a pantry document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PantryRecord {
    /// Ingredient name (canonical form for records written by this crate)
    pub name: String,
    /// Units on hand; absent in legacy records means zero
    #[serde(default)]
    pub quantity: u32,
}

impl PantryRecord {
    /// Create a record
    pub fn new(name: impl Into<String>, quantity: u32) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }
}

/// Pantry item as seen in a snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PantryItem {
    /// Store-assigned id
    pub id: DocumentId,
    /// Ingredient name as stored
    pub name: String,
    /// Units on hand
    pub quantity: u32,
}

impl PantryItem {
    /// Create an item
    pub fn new(id: DocumentId, name: impl Into<String>, quantity: u32) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
        }
    }

    /// Decode a pantry document
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the body is not a pantry record
    pub fn from_document(document: &Document) -> AppResult<Self> {
        let record: PantryRecord = document.decode()?;
        Ok(Self {
            id: document.id.clone(),
            name: record.name,
            quantity: record.quantity,
        })
    }
}
