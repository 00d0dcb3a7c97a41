use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

use infra::rec_net::client::{DEFAULT_ACCOUNTS_URL, DEFAULT_API_URL, DEFAULT_ROOMS_URL};
use infra::RecNetConfig;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub leagues_path: String,
    pub rec_net: RecNetConfig,
    pub introspection: bool,
    pub allowed_origins: Option<Vec<String>>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = var("PORT")
            .unwrap_or_else(|| "4000".into())
            .parse()
            .context("PORT must be a valid port number")?;

        let timeout_secs: u64 = var("UPSTREAM_TIMEOUT_SECS")
            .unwrap_or_else(|| "10".into())
            .parse()
            .context("UPSTREAM_TIMEOUT_SECS must be a number of seconds")?;

        // "*" (the default) means any origin.
        let allowed_origins = var("ALLOWED_ORIGINS")
            .filter(|v| v.trim() != "*")
            .map(|v| v.split(',').map(|o| o.trim().to_string()).collect());

        Ok(Self {
            port,
            leagues_path: var("LEAGUES_PATH").unwrap_or_else(|| "data/leagues.json".to_string()),
            rec_net: RecNetConfig {
                accounts_url: var("REC_NET_ACCOUNTS_URL")
                    .unwrap_or_else(|| DEFAULT_ACCOUNTS_URL.to_string()),
                rooms_url: var("REC_NET_ROOMS_URL")
                    .unwrap_or_else(|| DEFAULT_ROOMS_URL.to_string()),
                api_url: var("REC_NET_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
                timeout: Duration::from_secs(timeout_secs),
            },
            introspection: var("GQL_INTROSPECTION")
                .map(|v| v != "false")
                .unwrap_or(true),
            allowed_origins,
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 4000,
            leagues_path: "data/leagues.json".to_string(),
            rec_net: RecNetConfig::default(),
            introspection: true,
            allowed_origins: None,
        }
    }
}
