use async_graphql::{Context, Object, Result};

use super::types::AccountInfo;
use crate::gql::error::UpstreamResultExt;
use crate::state::AppState;

/// Substituted when a username lookup omits the argument.
pub const DEFAULT_USERNAME: &str = "coach";
/// Substituted when an id lookup omits the argument.
pub const DEFAULT_ACCOUNT_ID: i32 = 1;

#[derive(Default)]
pub struct AccountQuery;

#[Object]
impl AccountQuery {
    /// Look up an account by username.
    async fn account_info_from_username(
        &self,
        ctx: &Context<'_>,
        #[graphql(desc = "Defaults to \"coach\" when omitted or null.")] username: Option<String>,
    ) -> Result<AccountInfo> {
        account_by_username(ctx, username).await
    }

    #[graphql(deprecation = "Use `accountInfoFromUsername`.")]
    async fn account_info(
        &self,
        ctx: &Context<'_>,
        #[graphql(desc = "Defaults to \"coach\" when omitted or null.")] username: Option<String>,
    ) -> Result<AccountInfo> {
        account_by_username(ctx, username).await
    }

    /// Look up an account by its numeric id.
    async fn account_info_from_id(
        &self,
        ctx: &Context<'_>,
        #[graphql(desc = "Defaults to 1 when omitted or null.")] account_id: Option<i32>,
    ) -> Result<AccountInfo> {
        let state = ctx.data::<AppState>()?;
        let account_id = account_id.unwrap_or_else(|| {
            tracing::debug!("accountId omitted, using {}", DEFAULT_ACCOUNT_ID);
            DEFAULT_ACCOUNT_ID
        });

        let row = state.rec_net().account_by_id(account_id).await.upstream()?;
        Ok(row.into())
    }
}

async fn account_by_username(ctx: &Context<'_>, username: Option<String>) -> Result<AccountInfo> {
    let state = ctx.data::<AppState>()?;
    let username = username.unwrap_or_else(|| {
        tracing::debug!("username omitted, using {:?}", DEFAULT_USERNAME);
        DEFAULT_USERNAME.to_string()
    });

    let row = state
        .rec_net()
        .account_by_username(&username)
        .await
        .upstream()?;
    Ok(row.into())
}
