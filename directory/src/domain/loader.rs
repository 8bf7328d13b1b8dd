//! Session loader: the one fetch a directory session performs.
//!
//! The loader drives the [`UserSource`] port and feeds its outcome into the
//! session reducer. It never retries; a failed session stays failed until the
//! presentation requests a reload, which starts a new session.

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::ports::UserSource;
use super::{DirectoryAction, DirectoryState, LoadFailure, User};

/// Domain service completing the pending load of a directory session.
pub struct UserLoader {
    source: Arc<dyn UserSource>,
}

impl UserLoader {
    /// Build a loader over a user source.
    /// ```rust,ignore
    /// let loader = UserLoader::new(Arc::new(FixtureUserSource));
    /// ```
    #[must_use]
    pub const fn new(source: Arc<dyn UserSource>) -> Self {
        Self { source }
    }

    /// Issue one request and map any source error into a [`LoadFailure`].
    ///
    /// # Errors
    ///
    /// Returns [`LoadFailure`] when the source is unreachable, answers with a
    /// non-success status, or returns an undecodable body.
    pub async fn load(&self) -> Result<Vec<User>, LoadFailure> {
        debug!("requesting user list");
        match self.source.fetch_users().await {
            Ok(users) => {
                info!(user_count = users.len(), "user list loaded");
                Ok(users)
            }
            Err(error) => {
                warn!(%error, "user list load failed");
                Err(LoadFailure::from(error))
            }
        }
    }

    /// Start a new session and complete its single fetch.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use user_directory::domain::ports::FixtureUserSource;
    /// use user_directory::domain::{LoadState, UserLoader};
    ///
    /// # tokio::runtime::Builder::new_current_thread()
    /// #     .build()
    /// #     .expect("runtime")
    /// #     .block_on(async {
    /// let loader = UserLoader::new(Arc::new(FixtureUserSource));
    /// let state = loader.start_session().await;
    /// assert_eq!(state.load_state(), &LoadState::Loaded);
    /// assert_eq!(state.users().len(), 2);
    /// # });
    /// ```
    pub async fn start_session(&self) -> DirectoryState {
        self.resume(DirectoryState::new()).await
    }

    /// Complete the pending fetch of `state`.
    ///
    /// States that are not loading are returned unchanged without touching the
    /// source, so a session never issues more than one request.
    pub async fn resume(&self, state: DirectoryState) -> DirectoryState {
        if !state.load_state().is_loading() {
            return state;
        }
        state.reduce(DirectoryAction::from(self.load().await))
    }
}
