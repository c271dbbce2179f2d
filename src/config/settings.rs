use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{CredHubError, Result};

/// Environment variable that overrides `server_url`.
pub const SERVER_ENV_VAR: &str = "CREDHUB_SERVER";

/// Client configuration, loaded from `credhub.toml`.
///
/// Everything except the server URL has a sensible default; the URL can
/// also come from `CREDHUB_SERVER`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Base URL of the CredHub server (e.g. "https://credhub.example.com:8844").
    #[serde(default)]
    pub server_url: String,

    /// Overall deadline for a single request, in seconds (default: 30).
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User-Agent header sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("credhub-client/{}", env!("CARGO_PKG_VERSION"))
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_url: String::new(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl Settings {
    /// Name of the config file we look for.
    pub const FILE_NAME: &'static str = "credhub.toml";

    /// Load settings from `<dir>/credhub.toml`, then apply the
    /// `CREDHUB_SERVER` override and validate.
    ///
    /// If the file does not exist, defaults are used.
    /// If the file exists but cannot be parsed, an error is returned.
    pub fn load(dir: &Path) -> Result<Self> {
        let env_server = std::env::var(SERVER_ENV_VAR).ok();
        let settings = Self::load_file(dir)?.with_server_override(env_server);
        settings.validate()?;
        Ok(settings)
    }

    /// Read `<dir>/credhub.toml` without environment overrides or validation.
    pub fn load_file(dir: &Path) -> Result<Self> {
        let config_path = dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            CredHubError::Config(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        Ok(settings)
    }

    /// Replace `server_url` when an override is present and non-empty.
    pub fn with_server_override(mut self, server: Option<String>) -> Self {
        if let Some(url) = server.filter(|s| !s.trim().is_empty()) {
            self.server_url = url;
        }
        self
    }

    /// Check that the settings can drive a client.
    pub fn validate(&self) -> Result<()> {
        let url = self.server_url.trim();
        if url.is_empty() {
            return Err(CredHubError::Config(format!(
                "server_url is not set; add it to {} or set {SERVER_ENV_VAR}",
                Self::FILE_NAME
            )));
        }
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(CredHubError::Config(format!(
                "server_url '{url}' must start with http:// or https://"
            )));
        }
        if self.timeout_secs == 0 {
            return Err(CredHubError::Config(
                "timeout_secs must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

// ── Tests ────────────────────────────────────────────────────────────
