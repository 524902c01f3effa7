use crate::error::{Error, Result};
use std::env;

/// Runtime configuration for the GitHub API client.
/// Values are sourced from environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    pub token: String,
    pub api_url: String,
    pub api_version: String,
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment.
    ///
    /// Env vars:
    /// - GITHUB_API_TOKEN (or GITHUB_TOKEN, GH_TOKEN) [required]
    /// - GITHUB_API_URL (default: https://api.github.com)
    /// - GITHUB_API_VERSION (default: 2022-11-28)
    /// - GITHUB_HTTP_TIMEOUT_SECS (default: 30)
    /// - GITHUB_USER_AGENT (default: teams/<version>)
    pub fn from_env() -> Result<Self> {
        let token = env::var("GITHUB_API_TOKEN")
            .or_else(|_| env::var("GITHUB_TOKEN"))
            .or_else(|_| env::var("GH_TOKEN"))
            .ok()
            .filter(|t| !t.is_empty())
            .ok_or_else(|| Error::config("Missing GITHUB_API_TOKEN (or GITHUB_TOKEN/GH_TOKEN)"))?;

        let api_url =
            env::var("GITHUB_API_URL").unwrap_or_else(|_| "https://api.github.com".to_string());
        let api_version =
            env::var("GITHUB_API_VERSION").unwrap_or_else(|_| "2022-11-28".to_string());
        let timeout_secs = env::var("GITHUB_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(30);
        let default_ua = format!("teams/{}", env!("CARGO_PKG_VERSION"));
        let user_agent = env::var("GITHUB_USER_AGENT").unwrap_or(default_ua);

        Ok(Self {
            token,
            api_url: api_url.trim_end_matches('/').to_string(),
            api_version,
            user_agent,
            timeout_secs,
        })
    }
}

/// The `--team` argument, split into organization and team name (or slug).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamSpec {
    pub org: String,
    pub team: String,
}

impl TeamSpec {
    pub fn parse(raw: &str) -> Result<Self> {
        let Some((org, team)) = raw.split_once('/') else {
            return Err(Error::config(format!(
                "team '{}' must be in org/teamname format",
                raw
            )));
        };
        if org.is_empty() || team.is_empty() {
            return Err(Error::config(format!(
                "team '{}' must be in org/teamname format",
                raw
            )));
        }
        Ok(Self {
            org: org.to_string(),
            team: team.to_string(),
        })
    }
}
