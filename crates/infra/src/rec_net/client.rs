use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use super::error::RecNetError;
use crate::models::{AccountBioRow, AccountRow, PlayerEventRow, RoomRow};

pub const DEFAULT_ACCOUNTS_URL: &str = "https://accounts.rec.net";
pub const DEFAULT_ROOMS_URL: &str = "https://rooms.rec.net";
pub const DEFAULT_API_URL: &str = "https://api.rec.net";

#[derive(Clone, Debug)]
pub struct RecNetConfig {
    pub accounts_url: String,
    pub rooms_url: String,
    pub api_url: String,
    pub timeout: Duration,
}

impl Default for RecNetConfig {
    fn default() -> Self {
        Self {
            accounts_url: DEFAULT_ACCOUNTS_URL.to_string(),
            rooms_url: DEFAULT_ROOMS_URL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

impl RecNetConfig {
    /// Point every upstream at the same base URL. Used by tests with a single mock server.
    pub fn with_base_url(base: &str) -> Self {
        Self {
            accounts_url: base.to_string(),
            rooms_url: base.to_string(),
            api_url: base.to_string(),
            ..Self::default()
        }
    }
}

/// Read-only client for the account, room and event REST endpoints.
///
/// Every method issues exactly one GET. Nothing is cached or retried.
#[derive(Clone, Debug)]
pub struct RecNetClient {
    http: reqwest::Client,
    accounts_url: Url,
    rooms_url: Url,
    api_url: Url,
}

impl RecNetClient {
    pub fn new(config: RecNetConfig) -> Result<Self, RecNetError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(RecNetError::Client)?;

        Ok(Self {
            http,
            accounts_url: base_url(&config.accounts_url)?,
            rooms_url: base_url(&config.rooms_url)?,
            api_url: base_url(&config.api_url)?,
        })
    }

    /// `GET /account?username={username}`
    pub async fn account_by_username(&self, username: &str) -> Result<AccountRow, RecNetError> {
        let mut url = self.accounts_url.join("account")?;
        url.query_pairs_mut().append_pair("username", username);
        self.get_json(url).await
    }

    /// `GET /account/{accountId}`
    pub async fn account_by_id(&self, account_id: i32) -> Result<AccountRow, RecNetError> {
        let url = self.accounts_url.join(&format!("account/{account_id}"))?;
        self.get_json(url).await
    }

    /// `GET /account/{accountId}/bio`
    pub async fn account_bio(&self, account_id: i32) -> Result<AccountBioRow, RecNetError> {
        let url = self.accounts_url.join(&format!("account/{account_id}/bio"))?;
        self.get_json(url).await
    }

    /// `GET /rooms/ownedby/{accountId}`
    pub async fn rooms_owned_by(&self, account_id: i32) -> Result<Vec<RoomRow>, RecNetError> {
        let url = self.rooms_url.join(&format!("rooms/ownedby/{account_id}"))?;
        self.get_json(url).await
    }

    /// `GET /api/playerevents/v1/creator/{accountId}`
    pub async fn events_created_by(
        &self,
        account_id: i32,
    ) -> Result<Vec<PlayerEventRow>, RecNetError> {
        let url = self
            .api_url
            .join(&format!("api/playerevents/v1/creator/{account_id}"))?;
        self.get_json(url).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, RecNetError> {
        let url_str = url.to_string();
        tracing::debug!("GET {}", url_str);

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Upstream {} unreachable: {}", url_str, e);
                RecNetError::from_reqwest(&url_str, e)
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Upstream {} responded with {}", url_str, status);
            return Err(RecNetError::Status {
                url: url_str,
                status,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| {
                tracing::warn!("Failed to read body from {}: {}", url_str, e);
                RecNetError::from_reqwest(&url_str, e)
            })?;

        serde_json::from_slice(&body).map_err(|source| {
            tracing::warn!("Undecodable body from {}: {}", url_str, source);
            RecNetError::Decode {
                url: url_str,
                source,
            }
        })
    }
}

// Relative joins replace the last path segment unless the base ends with '/'.
fn base_url(raw: &str) -> Result<Url, RecNetError> {
    let mut url = Url::parse(raw)?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
