use async_graphql::{EmptyMutation, EmptySubscription, Schema};

use super::QueryRoot;
use crate::state::AppState;

pub type LeagueSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

/// Build the GraphQL schema and inject shared state (AppState) into the context.
pub fn build_schema(state: AppState) -> LeagueSchema {
    let introspection_enabled = state.introspection_enabled();

    let mut builder = Schema::build(QueryRoot::default(), EmptyMutation, EmptySubscription)
        .data(state) // AppState is Clone; available in resolvers via ctx.data::<AppState>()
        .limit_depth(15)
        .limit_complexity(500);

    if !introspection_enabled {
        builder = builder.disable_introspection();
    }

    builder.finish()
}
