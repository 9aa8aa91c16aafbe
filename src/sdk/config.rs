use crate::sdk::routing::RoutingError;
use std::{env, time::Duration};

pub const DEFAULT_BASE_URL: &str = "https://router.project-osrm.org";
pub const DEFAULT_PROFILE: &str = "driving";

/// Where and how to ask for routes. `timeout: None` waits indefinitely.
#[derive(Debug, Clone, PartialEq)]
pub struct RouterConfig {
    pub base_url: String,
    pub profile: String,
    pub timeout: Option<Duration>,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            profile: DEFAULT_PROFILE.to_string(),
            timeout: None,
        }
    }
}

impl RouterConfig {
    /// Reads `OSRM_BASE_URL`, `OSRM_PROFILE` and `OSRM_TIMEOUT_SECS`, falling back to defaults.
    pub fn from_env() -> Result<Self, RoutingError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Result<Self, RoutingError> {
        let mut config = Self::default();
        if let Some(url) = lookup("OSRM_BASE_URL") {
            config = config.with_base_url(&url);
        }
        if let Some(profile) = lookup("OSRM_PROFILE").filter(|p| !p.trim().is_empty()) {
            config.profile = profile.trim().to_string();
        }
        if let Some(raw) = lookup("OSRM_TIMEOUT_SECS") {
            config.timeout = Some(parse_timeout(&raw)?);
        }
        Ok(config)
    }

    pub fn with_base_url(mut self, url: &str) -> Self {
        let url = url.trim().trim_end_matches('/');
        if !url.is_empty() {
            self.base_url = url.to_string();
        }
        self
    }
}

fn parse_timeout(raw: &str) -> Result<Duration, RoutingError> {
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|_| RoutingError::Config(format!("OSRM_TIMEOUT_SECS must be whole seconds, got \"{}\"", raw)))
}
