// ABOUTME: Live view session acquiring subscriptions on activation and releasing them on exit
// ABOUTME: Replaces the view's snapshots wholesale each time the store publishes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Recipes Contributors

//! Live view sessions
//!
//! A [`LiveView`] holds one [`Subscription`] per collection its view needs.
//! The subscriptions are released when the session is dropped, whether it
//! ends through [`LiveView::deactivate`], an error or task cancellation.

use super::render::{render_view, ViewState};
use super::View;
use crate::database_plugins::{Collection, DocumentStore, Subscription};
use crate::services::{pantry_from_snapshot, recipes_from_snapshot};
use pantry_core::errors::AppResult;
use tracing::debug;

/// Active view bound to live store subscriptions
pub struct LiveView {
    view: View,
    threshold: u32,
    pantry: Option<Subscription>,
    recipes: Option<Subscription>,
    state: ViewState,
}

impl LiveView {
    /// Activate `view`, subscribing to the collections it needs
    ///
    /// # Errors
    ///
    /// Returns the store error if a subscription cannot be opened
    pub async fn activate<S: DocumentStore>(
        store: &S,
        view: View,
        threshold: u32,
    ) -> AppResult<Self> {
        let mut session = Self {
            view,
            threshold,
            pantry: None,
            recipes: None,
            state: ViewState::default(),
        };
        for collection in view.collections() {
            let mut subscription = store.subscribe(*collection, None).await?;
            let snapshot = subscription.current();
            match collection {
                Collection::Pantry => {
                    session.state.pantry = pantry_from_snapshot(&snapshot);
                    session.pantry = Some(subscription);
                }
                Collection::Recipes => {
                    session.state.recipes = recipes_from_snapshot(&snapshot);
                    session.recipes = Some(subscription);
                }
            }
        }
        debug!(view = %view, "View activated");
        Ok(session)
    }

    /// Active view
    #[must_use]
    pub const fn view(&self) -> View {
        self.view
    }

    /// Latest snapshots
    #[must_use]
    pub const fn state(&self) -> &ViewState {
        &self.state
    }

    /// Render the view from its latest snapshots
    #[must_use]
    pub fn render(&self) -> String {
        render_view(self.view, &self.state, self.threshold)
    }

    /// Wait for the next snapshot of any followed collection and apply it
    ///
    /// Views without subscriptions never update, so this waits forever for
    /// them; callers race it against their own exit signal.
    ///
    /// # Errors
    ///
    /// Returns a storage error once the store has shut down
    pub async fn next_update(&mut self) -> AppResult<()> {
        let Self {
            pantry,
            recipes,
            state,
            ..
        } = self;
        match (pantry.as_mut(), recipes.as_mut()) {
            (Some(pantry), Some(recipes)) => {
                tokio::select! {
                    snapshot = pantry.changed() => state.pantry = pantry_from_snapshot(&snapshot?),
                    snapshot = recipes.changed() => state.recipes = recipes_from_snapshot(&snapshot?),
                }
            }
            (Some(pantry), None) => state.pantry = pantry_from_snapshot(&pantry.changed().await?),
            (None, Some(recipes)) => {
                state.recipes = recipes_from_snapshot(&recipes.changed().await?);
            }
            (None, None) => std::future::pending::<()>().await,
        }
        Ok(())
    }

    /// Leave the view, releasing its subscriptions
    pub fn deactivate(self) {
        debug!(view = %self.view, "View deactivated");
    }
}
