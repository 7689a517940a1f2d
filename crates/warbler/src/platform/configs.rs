use anyhow::{Context, Result};
use std::env;

pub const DEFAULT_API_BASE: &str = "https://api.warbler.ai/v1";

/// Connection settings for the hosted platform
#[derive(Debug, Clone)]
pub struct PlatformConfig {
    pub api_base: String,
    pub api_key: String,
    /// Workspace id requests are scoped to, when set
    pub workspace_id: Option<String>,
}

impl PlatformConfig {
    pub fn new<B, K>(api_base: B, api_key: K) -> Self
    where
        B: Into<String>,
        K: Into<String>,
    {
        Self {
            api_base: api_base.into(),
            api_key: api_key.into(),
            workspace_id: None,
        }
    }

    /// Read connection settings from the environment
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("WARBLER_API_KEY")
            .context("API key must be set via the WARBLER_API_KEY environment variable")?;

        let api_base =
            env::var("WARBLER_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());

        Ok(Self::new(api_base, api_key))
    }
}
