//! Directory configuration loaded via `OrthoConfig`.
//!
//! Values come from `USER_DIRECTORY_*` environment variables, an optional
//! configuration file, and command-line flags, in ascending precedence.

use std::ffi::OsString;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

use crate::domain::DirectoryAction;
use crate::outbound::http::{DEFAULT_USER_AGENT, HttpUserSourceOptions};

/// Endpoint queried when none is configured.
pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";

/// Errors raised while resolving settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Configuration sources could not be merged.
    #[error("failed to load settings: {message}")]
    Load {
        /// Loader diagnostics.
        message: String,
    },
    /// The configured endpoint is not an absolute URL.
    #[error("invalid endpoint `{endpoint}`: {source}")]
    InvalidEndpoint {
        /// Raw configured value.
        endpoint: String,
        /// Parser failure.
        #[source]
        source: url::ParseError,
    },
}

/// Configuration for one headless directory session.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USER_DIRECTORY")]
pub struct DirectorySettings {
    /// User list endpoint override.
    pub endpoint: Option<String>,
    /// Whole-request timeout in seconds. Zero or absent disables it.
    pub timeout_seconds: Option<u64>,
    /// User-agent override.
    pub user_agent: Option<String>,
    /// Initial search text.
    pub search: Option<String>,
    /// Initial city facet.
    pub city: Option<String>,
    /// Initial company facet.
    pub company: Option<String>,
    /// Start in the dark colour scheme.
    #[ortho_config(default = false)]
    pub dark: bool,
}

impl DirectorySettings {
    /// Parse the configured endpoint, falling back to [`DEFAULT_ENDPOINT`].
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidEndpoint`] when the value is not a URL.
    pub fn endpoint(&self) -> Result<Url, SettingsError> {
        let raw = self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT);
        Url::parse(raw).map_err(|source| SettingsError::InvalidEndpoint {
            endpoint: raw.to_owned(),
            source,
        })
    }

    /// Configured request timeout; zero counts as unset.
    #[must_use]
    pub fn request_timeout(&self) -> Option<Duration> {
        self.timeout_seconds
            .filter(|seconds| *seconds > 0)
            .map(Duration::from_secs)
    }

    /// Configured user agent, falling back to [`DEFAULT_USER_AGENT`].
    #[must_use]
    pub fn user_agent(&self) -> &str {
        self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT)
    }

    /// Outbound adapter options derived from these settings.
    #[must_use]
    pub fn http_options(&self) -> HttpUserSourceOptions {
        HttpUserSourceOptions {
            user_agent: self.user_agent().to_owned(),
            timeout: self.request_timeout(),
        }
    }

    /// Actions replayed onto the loaded session before rendering.
    #[must_use]
    pub fn initial_actions(&self) -> Vec<DirectoryAction> {
        let mut actions = Vec::new();
        if let Some(search) = &self.search {
            actions.push(DirectoryAction::SearchTextChanged(search.clone()));
        }
        if let Some(city) = &self.city {
            actions.push(DirectoryAction::CitySelected(city.clone()));
        }
        if let Some(company) = &self.company {
            actions.push(DirectoryAction::CompanySelected(company.clone()));
        }
        if self.dark {
            actions.push(DirectoryAction::ThemeToggled);
        }
        actions
    }
}

/// Load settings from an explicit argument list plus the environment.
///
/// # Errors
///
/// Returns [`SettingsError::Load`] when a source is malformed.
pub fn load_settings_from<I>(args: I) -> Result<DirectorySettings, SettingsError>
where
    I: IntoIterator<Item = OsString>,
{
    DirectorySettings::load_from_iter(args).map_err(|error| SettingsError::Load {
        message: error.to_string(),
    })
}

/// Load settings from the process arguments plus the environment.
///
/// # Errors
///
/// Returns [`SettingsError::Load`] when a source is malformed.
pub fn load_settings() -> Result<DirectorySettings, SettingsError> {
    load_settings_from(std::env::args_os())
}
