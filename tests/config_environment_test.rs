// ABOUTME: Unit tests for environment-driven configuration
// ABOUTME: Validates defaults, overrides and rejection of malformed values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Recipes Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use pantry_recipes::config::environment::parse_threshold;
use pantry_recipes::config::{AppConfig, DatabaseUrl, Environment};
use pantry_recipes::constants::env_vars;
use pantry_recipes::errors::ErrorCode;
use pantry_recipes::logging::{LogFormat, LoggingConfig};
use serial_test::serial;
use std::env;
use std::path::PathBuf;

fn clear_env() {
    env::remove_var(env_vars::DATABASE_URL);
    env::remove_var(env_vars::LOW_STOCK_THRESHOLD);
    env::remove_var(env_vars::ENVIRONMENT);
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();

    let config = AppConfig::from_env().unwrap();

    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.database_url, DatabaseUrl::default());
    assert_eq!(config.low_stock_threshold, 5);
}

#[test]
#[serial]
fn test_environment_overrides() {
    clear_env();
    env::set_var(env_vars::DATABASE_URL, "memory");
    env::set_var(env_vars::LOW_STOCK_THRESHOLD, "3");
    env::set_var(env_vars::ENVIRONMENT, "production");

    let config = AppConfig::from_env().unwrap();
    clear_env();

    assert!(config.environment.is_production());
    assert_eq!(config.database_url, DatabaseUrl::InMemory);
    assert_eq!(config.low_stock_threshold, 3);
}

#[test]
#[serial]
fn test_invalid_threshold_is_rejected() {
    clear_env();
    env::set_var(env_vars::LOW_STOCK_THRESHOLD, "lots");

    let err = AppConfig::from_env().unwrap_err();
    clear_env();

    assert_eq!(err.code, ErrorCode::ConfigInvalid);
}

#[test]
#[serial]
fn test_unsupported_database_url_is_rejected() {
    clear_env();
    env::set_var(env_vars::DATABASE_URL, "postgresql://localhost/pantry");

    let err = AppConfig::from_env().unwrap_err();
    clear_env();

    assert_eq!(err.code, ErrorCode::ConfigInvalid);
}

#[test]
fn test_threshold_parsing() {
    assert_eq!(parse_threshold("10").unwrap(), 10);
    assert_eq!(parse_threshold(" 1 ").unwrap(), 1);
    assert_eq!(parse_threshold("0").unwrap_err().code, ErrorCode::ConfigInvalid);
    assert!(parse_threshold("2.5").is_err());
}

#[test]
fn test_database_url_parsing() {
    assert_eq!(DatabaseUrl::parse_url("memory:").unwrap(), DatabaseUrl::InMemory);
    assert_eq!(
        DatabaseUrl::parse_url("sqlite://data/pantry.db").unwrap(),
        DatabaseUrl::SQLite {
            path: PathBuf::from("data/pantry.db")
        }
    );
    let in_memory = DatabaseUrl::parse_url("sqlite::memory:").unwrap();
    assert!(in_memory.is_ephemeral());
    assert_eq!(in_memory.to_string(), "sqlite::memory:");
}

#[test]
fn test_environment_parsing() {
    assert_eq!(
        Environment::from_str_or_default("Testing"),
        Environment::Testing
    );
    assert_eq!(
        Environment::from_str_or_default("staging"),
        Environment::Development
    ); // Default fallback
    assert_eq!(Environment::Production.to_string(), "production");
}

#[test]
fn test_log_format_parsing() {
    assert_eq!(LogFormat::from_str_or_default("JSON"), LogFormat::Json);
    assert_eq!(LogFormat::from_str_or_default("pretty"), LogFormat::Pretty);
    assert_eq!(LogFormat::from_str_or_default("other"), LogFormat::Compact);
    assert_eq!(LoggingConfig::default().with_level("debug").level, "debug");
}
