// ABOUTME: Integration tests for the low-stock shopping list filter
// ABOUTME: Verifies the strict threshold boundary, custom thresholds and ordering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Recipes Contributors

#![allow(missing_docs, clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod common;

use common::pantry_item;
use pantry_recipes::constants::shopping::DEFAULT_LOW_STOCK_THRESHOLD;
use pantry_recipes::intelligence::compute_low_stock;

#[test]
fn test_default_threshold_boundary() {
    let pantry = vec![pantry_item("a", "flour", 5), pantry_item("b", "sugar", 4)];

    let low = compute_low_stock(&pantry, DEFAULT_LOW_STOCK_THRESHOLD);

    assert_eq!(low.len(), 1);
    assert_eq!(low[0].name, "sugar");
}

#[test]
fn test_custom_threshold() {
    let pantry = vec![
        pantry_item("a", "flour", 5),
        pantry_item("b", "sugar", 4),
        pantry_item("c", "salt", 1),
    ];

    let names: Vec<_> = compute_low_stock(&pantry, 2)
        .into_iter()
        .map(|item| item.name)
        .collect();
    assert_eq!(names, vec!["salt"]);
}

#[test]
fn test_empty_items_keep_input_order() {
    let pantry = vec![
        pantry_item("a", "milk", 0),
        pantry_item("b", "rice", 50),
        pantry_item("c", "eggs", 3),
    ];

    let names: Vec<_> = compute_low_stock(&pantry, DEFAULT_LOW_STOCK_THRESHOLD)
        .into_iter()
        .map(|item| item.name)
        .collect();
    assert_eq!(names, vec!["milk", "eggs"]);
}

#[test]
fn test_well_stocked_pantry_has_empty_list() {
    let pantry = vec![pantry_item("a", "rice", 9)];
    assert!(compute_low_stock(&pantry, DEFAULT_LOW_STOCK_THRESHOLD).is_empty());
    assert!(compute_low_stock(&[], DEFAULT_LOW_STOCK_THRESHOLD).is_empty());
}
