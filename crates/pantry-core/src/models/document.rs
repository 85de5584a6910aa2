// ABOUTME: Generic JSON document and opaque store-assigned identifier
// ABOUTME: Bridges untyped store snapshots and the typed pantry/recipe models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Recipes Contributors

use crate::errors::{AppError, AppResult};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use uuid::Uuid;

/// Opaque document identifier assigned by the store on create
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    /// Generate a fresh identifier
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    /// Wrap an identifier received from the store or the operator
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DocumentId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

/// One stored record: its id plus the JSON object body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Store-assigned id
    pub id: DocumentId,
    /// Record body, always a JSON object
    pub data: Value,
}

impl Document {
    /// Create a document from an id and body
    #[must_use]
    pub const fn new(id: DocumentId, data: Value) -> Self {
        Self { id, data }
    }

    /// Read a top-level field
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.data.get(name)
    }

    /// Decode the body into a typed record
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the body does not match `T`
    pub fn decode<T: DeserializeOwned>(&self) -> AppResult<T> {
        T::deserialize(&self.data).map_err(|e| {
            AppError::from(e).with_resource_id(self.id.as_str())
        })
    }
}
