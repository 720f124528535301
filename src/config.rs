use std::{env, fmt, num::NonZeroU32};

use thiserror::Error;

use crate::region::{Region, RegionError};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("Invalid RIOT_REGION: {0}")]
    Region(#[from] RegionError),
}

#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub region: Region,
    /// Proactive client side throttling, disabled when unset.
    pub rate_limit_per_second: Option<NonZeroU32>,
    /// Unset keeps retrying for as long as the API answers 429.
    pub max_rate_limit_retries: Option<u32>,
}

impl Config {
    const DEFAULT_REGION: Region = Region::EUW1;

    /// Read the configuration from the environment, loading `.env` first when present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("RIOT_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::Missing("RIOT_API_KEY"))?;

        let region = match lookup("RIOT_REGION") {
            Some(raw) => raw.parse::<Region>()?,
            None => Self::DEFAULT_REGION,
        };

        let rate_limit_per_second = lookup("RIOT_RATE_LIMIT_PER_SECOND")
            .and_then(|v| v.parse().ok())
            .and_then(NonZeroU32::new);

        let max_rate_limit_retries =
            lookup("RIOT_MAX_RATE_LIMIT_RETRIES").and_then(|v| v.parse().ok());

        Ok(Self {
            api_key,
            region,
            rate_limit_per_second,
            max_rate_limit_retries,
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("region", &self.region)
            .field("rate_limit_per_second", &self.rate_limit_per_second)
            .field("max_rate_limit_retries", &self.max_rate_limit_retries)
            .finish()
    }
}
