use infra::{LeagueDataset, RecNetClient};

use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    leagues: LeagueDataset,
    rec_net: RecNetClient,
    introspection: bool,
}

impl AppState {
    pub fn new(config: &AppConfig, leagues: LeagueDataset) -> anyhow::Result<Self> {
        let rec_net = RecNetClient::new(config.rec_net.clone())?;

        Ok(Self {
            leagues,
            rec_net,
            introspection: config.introspection,
        })
    }

    pub fn leagues(&self) -> &LeagueDataset {
        &self.leagues
    }

    pub fn rec_net(&self) -> &RecNetClient {
        &self.rec_net
    }

    pub fn introspection_enabled(&self) -> bool {
        self.introspection
    }
}
