use async_graphql::MergedObject;

use crate::gql::domains::accounts::AccountQuery;
use crate::gql::domains::leagues::LeagueQuery;

#[derive(MergedObject, Default)]
pub struct QueryRoot(AccountQuery, LeagueQuery);
