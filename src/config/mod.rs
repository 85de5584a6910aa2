// ABOUTME: Configuration management module for store location, thresholds and environment
// ABOUTME: Handles environment configs and database URL parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Recipes Contributors
//! Configuration module
//!
//! - **Environment**: application configuration from environment variables
//! - **Database**: document store location parsing

/// Environment and application configuration
pub mod environment;

/// Document store location parsing
pub mod database;

pub use database::DatabaseUrl;
pub use environment::{AppConfig, Environment};
