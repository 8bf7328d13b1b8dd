//! Headless directory session.
//!
//! Builds the HTTP adapter from [`DirectorySettings`], completes one session,
//! replays the configured criteria, and renders the snapshot. The binary only
//! adds logging, the runtime, and stdout.

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::domain::{DirectoryState, UserLoader};
use crate::inbound::snapshot::render_json;
use crate::outbound::http::HttpUserSource;
use crate::settings::{DirectorySettings, SettingsError};

/// Errors that stop a headless session before a snapshot exists.
///
/// A failed load is not one of them: it is rendered like any other state.
#[derive(Debug, Error)]
pub enum DriverError {
    /// Settings could not be turned into an adapter.
    #[error(transparent)]
    Settings(#[from] SettingsError),
    /// The HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
    /// The snapshot could not be serialised.
    #[error("failed to render directory snapshot: {0}")]
    Render(#[from] serde_json::Error),
}

/// Final state of a headless session and its rendered snapshot.
#[derive(Debug, Clone)]
pub struct SessionReport {
    /// State after the load and the replayed criteria.
    pub state: DirectoryState,
    /// Pretty-printed snapshot of `state`.
    pub json: String,
}

impl SessionReport {
    /// Whether the session loaded its users.
    #[must_use]
    pub const fn succeeded(&self) -> bool {
        !self.state.offers_reload()
    }
}

/// Run one session against the configured endpoint.
///
/// # Errors
///
/// Returns [`DriverError`] when the endpoint is invalid, the client cannot be
/// built, or the snapshot cannot be serialised. Load failures are reported
/// through [`SessionReport::succeeded`] instead.
pub async fn run_session(settings: &DirectorySettings) -> Result<SessionReport, DriverError> {
    let source = HttpUserSource::with_options(settings.endpoint()?, settings.http_options())?;
    let loader = UserLoader::new(Arc::new(source));

    let loaded = loader.start_session().await;
    let state = settings
        .initial_actions()
        .into_iter()
        .fold(loaded, DirectoryState::reduce);
    let json = render_json(&state)?;
    info!(
        loaded = !state.offers_reload(),
        shown = state.view().filtered.len(),
        "directory snapshot rendered"
    );
    Ok(SessionReport { state, json })
}
