use async_graphql::{Context, Object, Result};

use super::types::League;
use crate::state::AppState;

#[derive(Default)]
pub struct LeagueQuery;

#[Object]
impl LeagueQuery {
    /// All leagues from the static dataset. Never calls upstream.
    async fn leagues(&self, ctx: &Context<'_>) -> Result<Vec<League>> {
        let state = ctx.data::<AppState>()?;
        Ok(state
            .leagues()
            .leagues()
            .iter()
            .cloned()
            .map(League::from)
            .collect())
    }
}
