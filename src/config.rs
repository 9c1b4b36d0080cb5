//! Runtime settings: CLI flag first, then environment variable, then default.

use std::{net::SocketAddr, str::FromStr, time::Duration};

use crate::{
    error::{Result, XptError},
    nba::{http::STATS_BASE_URL, NbaStatsClient},
};

pub const BIND_ENV_VAR: &str = "NBA_XPT_BIND";
pub const CORS_ORIGIN_ENV_VAR: &str = "NBA_XPT_CORS_ORIGIN";
pub const STATS_BASE_URL_ENV_VAR: &str = "NBA_XPT_STATS_BASE_URL";
pub const TIMEOUT_ENV_VAR: &str = "NBA_XPT_TIMEOUT_SECS";

pub const DEFAULT_BIND: &str = "127.0.0.1:5000";
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Pick the flag value, else parse the environment value, else the default.
///
/// A set-but-unparseable environment value is an error rather than being
/// silently replaced by the default.
pub fn resolve_setting<T>(flag: Option<T>, env_var: &str, env_value: Option<String>, default: T) -> Result<T>
where
    T: FromStr,
{
    if let Some(v) = flag {
        return Ok(v);
    }
    match env_value.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()) {
        Some(raw) => raw.parse().map_err(|_| XptError::Config {
            message: format!("{env_var}={raw:?} is not valid"),
        }),
        None => Ok(default),
    }
}

fn env_value(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Where and how to reach the statistics provider.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderSettings {
    pub base_url: String,
    pub timeout: Duration,
}

impl ProviderSettings {
    pub fn resolve(timeout_secs: Option<u64>) -> Result<Self> {
        let secs = resolve_setting(
            timeout_secs,
            TIMEOUT_ENV_VAR,
            env_value(TIMEOUT_ENV_VAR),
            DEFAULT_TIMEOUT_SECS,
        )?;
        if secs == 0 {
            return Err(XptError::Config {
                message: "provider timeout must be at least one second".to_string(),
            });
        }
        let base_url = resolve_setting(
            None,
            STATS_BASE_URL_ENV_VAR,
            env_value(STATS_BASE_URL_ENV_VAR),
            STATS_BASE_URL.to_string(),
        )?;

        Ok(Self {
            base_url,
            timeout: Duration::from_secs(secs),
        })
    }

    pub fn build_client(&self) -> Result<NbaStatsClient> {
        Ok(NbaStatsClient::new(self.base_url.clone(), self.timeout)?)
    }
}

/// HTTP facade listen address and allowed browser origin.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerSettings {
    pub bind: SocketAddr,
    pub cors_origin: String,
}

impl ServerSettings {
    pub fn resolve(bind: Option<SocketAddr>, cors_origin: Option<String>) -> Result<Self> {
        let default_bind: SocketAddr = DEFAULT_BIND.parse().map_err(|_| XptError::Config {
            message: format!("default bind address {DEFAULT_BIND} is not valid"),
        })?;

        Ok(Self {
            bind: resolve_setting(bind, BIND_ENV_VAR, env_value(BIND_ENV_VAR), default_bind)?,
            cors_origin: resolve_setting(
                cors_origin,
                CORS_ORIGIN_ENV_VAR,
                env_value(CORS_ORIGIN_ENV_VAR),
                DEFAULT_CORS_ORIGIN.to_string(),
            )?,
        })
    }
}
