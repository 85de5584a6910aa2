// ABOUTME: Canonical ingredient-name normalization shared by writers and comparison sites
// ABOUTME: Trims surrounding whitespace and lower-cases so equivalent spellings match
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Recipes Contributors

/// Canonical form of an ingredient name: trimmed and lower-cased.
///
/// Pantry writes store only this form. Comparisons apply it to both sides
/// anyway, so records written by older clients with raw names still match.
#[must_use]
pub fn normalize_name(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Compare two ingredient names under [`normalize_name`]
#[must_use]
pub fn names_match(left: &str, right: &str) -> bool {
    left.trim().to_lowercase() == right.trim().to_lowercase()
}
