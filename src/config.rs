//! Application-level configuration: the base path every image source is resolved against.

use serde::Deserialize;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("base path must not contain a query or fragment: {0:?}")]
    QueryOrFragment(String),
}

/// Prefix applied to every root-relative image path. Empty means the app is served from `/`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct BasePath(String);

impl BasePath {
    pub fn root() -> Self {
        Self(String::new())
    }

    /// Accepts the framework's form (`app`) as well as `/app` or `/app/`,
    /// and stores it with one leading slash and no trailing one.
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        if value.contains(['?', '#']) {
            return Err(ConfigError::QueryOrFragment(value.to_string()));
        }
        let trimmed = value.trim_matches('/');
        if trimmed.is_empty() {
            return Ok(Self::root());
        }
        Ok(Self(format!("/{trimmed}")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for BasePath {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl fmt::Display for BasePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Demo app configuration, shared with views through context.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub base_path: BasePath,
}

impl AppConfig {
    /// Uses the base path the app was built with (`dx ... --base-path`), the same
    /// one the router and asset URLs are served under.
    pub fn from_framework() -> Self {
        Self::from_base_path(dioxus::cli_config::base_path().as_deref())
    }

    fn from_base_path(value: Option<&str>) -> Self {
        let base_path = match value.map(BasePath::parse) {
            None => BasePath::root(),
            Some(Ok(base_path)) => base_path,
            Some(Err(err)) => {
                tracing::warn!(error = %err, "invalid base path, serving from root");
                BasePath::root()
            }
        };
        Self { base_path }
    }
}
