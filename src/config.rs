//! Run configuration resolved once at startup.
//!
//! The archive client never reads the environment itself; `main` builds a
//! [`Config`] and hands it over explicitly.

use crate::error::{ExoError, Result};

/// Public key accepted by NASA's APIs for low-volume use.
pub const DEMO_API_KEY: &str = "DEMO_KEY";
pub const DEFAULT_BASE_URL: &str = "https://exoplanetarchive.ipac.caltech.edu";

pub const API_KEY_VAR: &str = "NASA_API_KEY";
pub const BASE_URL_VAR: &str = "EXO_ARCHIVE_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
}

impl Config {
    /// Resolve from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Resolve using an arbitrary variable lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let api_key = non_empty(API_KEY_VAR).unwrap_or_else(|| DEMO_API_KEY.to_string());
        if api_key == DEMO_API_KEY {
            tracing::debug!("{} not set, using the public demo key", API_KEY_VAR);
        }

        let base_url = match non_empty(BASE_URL_VAR) {
            Some(url) => {
                if !(url.starts_with("http://") || url.starts_with("https://")) {
                    return Err(ExoError::Config(format!(
                        "{} must be an http(s) URL, got '{}'",
                        BASE_URL_VAR, url
                    )));
                }
                url.trim_end_matches('/').to_string()
            }
            None => DEFAULT_BASE_URL.to_string(),
        };

        Ok(Self { api_key, base_url })
    }

    /// Config pointing at an explicit base URL, used by tests against a local server.
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: DEMO_API_KEY.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}
