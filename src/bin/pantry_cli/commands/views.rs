// ABOUTME: View commands for pantry-cli
// ABOUTME: Renders a view once, or keeps it live until Ctrl-C
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Recipes Contributors

use pantry_recipes::{
    database_plugins::factory::Database,
    errors::{AppError, AppResult},
    views::{LiveView, View},
};
use tracing::info;

/// Render a view from the current snapshots
pub async fn show(database: &Database, view: View, threshold: u32) -> AppResult<()> {
    let session = LiveView::activate(database, view, threshold).await?;
    println!("{}", session.render());
    session.deactivate();
    Ok(())
}

/// Render a view and re-render it on every store notification
pub async fn watch(database: &Database, view: View, threshold: u32) -> AppResult<()> {
    let mut session = LiveView::activate(database, view, threshold).await?;
    println!("{}", session.render());
    info!(view = %view, "Watching for changes, press Ctrl-C to stop");

    let result = loop {
        tokio::select! {
            signal = tokio::signal::ctrl_c() => {
                break signal.map_err(|e| AppError::internal("Cannot listen for Ctrl-C").with_source(e));
            }
            update = session.next_update() => {
                if let Err(e) = update {
                    break Err(e);
                }
                println!("\n{}", session.render());
            }
        }
    };

    session.deactivate();
    result
}
