// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Recipes Contributors
// ABOUTME: Re-exports helper modules for pantry-cli
// ABOUTME: Provides display formatting utilities

pub mod display;
