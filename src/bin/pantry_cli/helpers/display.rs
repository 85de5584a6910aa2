// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Recipes Contributors
// ABOUTME: Output formatting helpers for pantry-cli
// ABOUTME: Prints consumption reports, shortfalls and form outcomes

use pantry_recipes::{
    errors::AppResult,
    intelligence::Shortfall,
    services::ConsumptionReport,
    views::FormOutcome,
};

/// Print what making a recipe did to the pantry
pub fn display_report(report: &ConsumptionReport) {
    println!("Made {}", report.recipe);
    for update in &report.updated {
        println!(
            "   {}: {} -> {}",
            update.ingredient, update.previous, update.remaining
        );
    }
    for name in &report.skipped {
        println!("   {name}: not in pantry, skipped");
    }
    for failure in &report.failed {
        println!("   {}: update failed ({})", failure.ingredient, failure.error);
    }
}

/// Print what a recipe is missing
pub fn display_shortfalls(shortfalls: &[Shortfall]) {
    for gap in shortfalls {
        match gap.available {
            Some(available) => println!(
                "   needs {} {} (have {available}, missing {})",
                gap.required,
                gap.name,
                gap.missing()
            ),
            None => println!("   needs {} {} (not in pantry)", gap.required, gap.name),
        }
    }
}

/// Turn a form outcome into a command result
pub fn outcome_into_result<T>(outcome: FormOutcome<T>) -> AppResult<T> {
    match outcome {
        FormOutcome::Saved(value) => Ok(value),
        FormOutcome::Rejected(e) | FormOutcome::Failed(e) => Err(e),
    }
}
