// ABOUTME: Document logic shared by the in-memory and SQLite backends
// ABOUTME: Partial-update merging and body validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Recipes Contributors

use pantry_core::errors::{AppError, AppResult};
use serde_json::Value;

/// Ensure a document body is a JSON object
///
/// # Errors
///
/// Returns `InvalidInput` for arrays, scalars and null
pub fn require_object(data: &Value) -> AppResult<()> {
    if data.is_object() {
        Ok(())
    } else {
        Err(AppError::invalid_input(
            "Document body must be a JSON object",
        ))
    }
}

/// Shallow-merge `partial` into `target`: top-level keys overwrite, others stay
///
/// # Errors
///
/// Returns `InvalidInput` if either side is not a JSON object
pub fn merge_partial(target: &mut Value, partial: Value) -> AppResult<()> {
    let Value::Object(fields) = partial else {
        return Err(AppError::invalid_input(
            "Partial update must be a JSON object",
        ));
    };
    let Some(existing) = target.as_object_mut() else {
        return Err(AppError::invalid_input("Stored document is not a JSON object"));
    };
    for (key, value) in fields {
        existing.insert(key, value);
    }
    Ok(())
}
