use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecNetError {
    #[error("request to {url} timed out")]
    Timeout { url: String },

    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} responded with status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("could not decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("invalid upstream URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl RecNetError {
    pub(crate) fn from_reqwest(url: &str, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            RecNetError::Timeout {
                url: url.to_string(),
            }
        } else {
            RecNetError::Network {
                url: url.to_string(),
                source,
            }
        }
    }

    /// True when the upstream answered but the body was not the expected JSON.
    pub fn is_decode(&self) -> bool {
        matches!(self, RecNetError::Decode { .. })
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            RecNetError::Status { status, .. } => Some(status.as_u16()),
            _ => None,
        }
    }
}
