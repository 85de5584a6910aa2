// ABOUTME: Pantry CLI - command-line view layer for the pantry and recipe engine
// ABOUTME: Navigates the five views, submits forms, makes recipes and watches live updates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Recipes Contributors
//!
//! Usage:
//! ```bash
//! # Show the welcome text
//! pantry-cli dashboard
//!
//! # Add two eggs (merges into an existing "eggs" item)
//! pantry-cli pantry add Eggs --quantity 2
//!
//! # Register a recipe
//! pantry-cli add-recipe --name "French Toast" --ingredients "Bread:2, Eggs:2" --cooking-time 15
//!
//! # Show makeable recipes, then make one
//! pantry-cli recipes
//! pantry-cli make "French Toast"
//!
//! # Show low-stock items using a custom threshold
//! pantry-cli shopping --threshold 3
//!
//! # Re-render the suggestions whenever the store changes (Ctrl-C to stop)
//! pantry-cli watch recipes
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Parser, Subcommand};
use pantry_recipes::{
    config::{environment::parse_threshold, AppConfig, DatabaseUrl},
    database_plugins::factory::Database,
    logging::LoggingConfig,
    services::RecipeSubmission,
    views::View,
};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "pantry-cli",
    about = "Pantry inventory and recipe suggestions",
    long_about = "Record pantry ingredients, register recipes, see what you can cook and what to buy."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Database URL override (memory, sqlite::memory:, sqlite:<path> or a file path)
    #[arg(long, global = true)]
    database_url: Option<String>,

    /// Low-stock threshold override for the shopping list
    #[arg(long, global = true)]
    threshold: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Show the welcome text
    Dashboard,

    /// Pantry management commands
    Pantry {
        #[command(subcommand)]
        action: PantryCommand,
    },

    /// Show recipes that can be made with the current pantry
    Recipes {
        /// List every recipe with what it is missing
        #[arg(long)]
        all: bool,
    },

    /// Make a recipe, consuming its ingredients from the pantry
    Make {
        /// Recipe id or name
        recipe: String,
    },

    /// Show pantry items that are running low
    Shopping,

    /// Register a new recipe
    AddRecipe {
        /// Recipe name
        #[arg(long)]
        name: String,

        /// Ingredients, e.g. "Bread:2, Eggs:2"
        #[arg(long)]
        ingredients: String,

        /// Cuisine label
        #[arg(long, default_value = "")]
        cuisine: String,

        /// Cooking time in minutes
        #[arg(long, default_value = "")]
        cooking_time: String,
    },

    /// Render a view and re-render it on every store change until Ctrl-C
    Watch {
        /// View name: dashboard, pantry, recipes, shopping or add-recipe
        view: View,
    },

    /// Load a small demo pantry and recipe set
    Seed,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum PantryCommand {
    /// List pantry items
    List,

    /// Add an ingredient, merging with an existing item of the same name
    Add {
        /// Ingredient name
        name: String,

        /// Units to add
        #[arg(long, short = 'q', default_value_t = 1)]
        quantity: u32,
    },

    /// Delete a pantry item by id
    Delete {
        /// Pantry item id
        id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose {
        logging.with_level("debug")
    } else {
        logging
    };
    logging.init()?;

    let mut config = AppConfig::from_env()?;
    if let Some(url) = cli.database_url.as_deref() {
        config.database_url = DatabaseUrl::parse_url(url)?;
    }
    if let Some(threshold) = cli.threshold.as_deref() {
        config.low_stock_threshold = parse_threshold(threshold)?;
    }

    let database = Database::new(&config.database_url).await?;
    info!(
        backend = database.backend_info(),
        database.url = %config.database_url,
        "Document store connected"
    );
    let threshold = config.low_stock_threshold;

    match cli.command {
        Command::Dashboard => commands::views::show(&database, View::Dashboard, threshold).await?,
        Command::Pantry { action } => match action {
            PantryCommand::List => {
                commands::views::show(&database, View::Pantry, threshold).await?;
            }
            PantryCommand::Add { name, quantity } => {
                commands::pantry::add(&database, name, quantity).await?;
            }
            PantryCommand::Delete { id } => commands::pantry::delete(&database, &id).await?,
        },
        Command::Recipes { all } => {
            if all {
                commands::recipes::list_all(&database).await?;
            } else {
                commands::views::show(&database, View::Recipes, threshold).await?;
            }
        }
        Command::Make { recipe } => commands::recipes::make(&database, &recipe).await?,
        Command::Shopping => commands::views::show(&database, View::Shopping, threshold).await?,
        Command::AddRecipe {
            name,
            ingredients,
            cuisine,
            cooking_time,
        } => {
            let submission = RecipeSubmission {
                name,
                ingredients_text: ingredients,
                cuisine,
                cooking_time_text: cooking_time,
            };
            commands::recipes::add(&database, submission).await?;
        }
        Command::Watch { view } => commands::views::watch(&database, view, threshold).await?,
        Command::Seed => commands::seed::run(&database).await?,
    }

    Ok(())
}
