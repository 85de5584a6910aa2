// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Recipes Contributors
// ABOUTME: Re-exports command modules for pantry-cli
// ABOUTME: Provides pantry, recipe, view and seed commands

pub mod pantry;
pub mod recipes;
pub mod seed;
pub mod views;
