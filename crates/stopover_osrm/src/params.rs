use std::time::Duration;

pub const DEFAULT_OSRM_URL: &str = "https://router.project-osrm.org";
pub const DEFAULT_OSRM_PROFILE: &str = "driving";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

const OSRM_URL_ENV_VAR: &str = "STOPOVER_OSRM_URL";
const OSRM_PROFILE_ENV_VAR: &str = "STOPOVER_OSRM_PROFILE";
const OSRM_TIMEOUT_ENV_VAR: &str = "STOPOVER_OSRM_TIMEOUT_SECS";

#[derive(Debug, Clone)]
pub struct OsrmClientParams {
    /// Base URL of the OSRM server, without trailing slash
    pub osrm_url: String,

    /// Routing profile, e.g. "driving"
    pub profile: String,

    /// Applied to every request, a timeout is reported as a request error
    pub timeout: Duration,
}

impl Default for OsrmClientParams {
    fn default() -> Self {
        Self {
            osrm_url: DEFAULT_OSRM_URL.to_string(),
            profile: DEFAULT_OSRM_PROFILE.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl OsrmClientParams {
    /// Reads `STOPOVER_OSRM_URL`, `STOPOVER_OSRM_PROFILE` and
    /// `STOPOVER_OSRM_TIMEOUT_SECS`, keeping the default for anything unset or unparsable.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let osrm_url = lookup(OSRM_URL_ENV_VAR)
            .map(|url| url.trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or(defaults.osrm_url);

        let profile = lookup(OSRM_PROFILE_ENV_VAR)
            .filter(|profile| !profile.is_empty())
            .unwrap_or(defaults.profile);

        let timeout = lookup(OSRM_TIMEOUT_ENV_VAR)
            .and_then(|secs| secs.trim().parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.timeout);

        Self {
            osrm_url,
            profile,
            timeout,
        }
    }

    pub fn with_osrm_url(mut self, osrm_url: impl Into<String>) -> Self {
        self.osrm_url = osrm_url.into().trim_end_matches('/').to_string();
        self
    }
}
