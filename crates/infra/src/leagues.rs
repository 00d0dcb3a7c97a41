use std::path::Path;
use std::sync::Arc;

use thiserror::Error;

use crate::models::LeagueRow;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read league dataset {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("league dataset {path} is not valid: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Immutable league data, shared by every request for the lifetime of the process.
#[derive(Debug, Clone, Default)]
pub struct LeagueDataset {
    leagues: Arc<Vec<LeagueRow>>,
}

impl LeagueDataset {
    pub fn new(leagues: Vec<LeagueRow>) -> Self {
        Self {
            leagues: Arc::new(leagues),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let leagues: Vec<LeagueRow> = serde_json::from_str(json)?;
        Ok(Self::new(leagues))
    }

    /// Load the dataset from disk. A missing file is not an error: the
    /// service starts with no leagues.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!("League dataset {} not found, serving no leagues", path_str);
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(DatasetError::Io {
                    path: path_str,
                    source,
                })
            }
        };

        let dataset = Self::from_json(&json).map_err(|source| DatasetError::Parse {
            path: path_str.clone(),
            source,
        })?;
        tracing::info!("Loaded {} leagues from {}", dataset.len(), path_str);
        Ok(dataset)
    }

    pub fn leagues(&self) -> &[LeagueRow] {
        &self.leagues
    }

    pub fn len(&self) -> usize {
        self.leagues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leagues.is_empty()
    }
}
