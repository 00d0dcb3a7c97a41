use async_graphql::{ComplexObject, Context, Result, SimpleObject};

use crate::gql::error::UpstreamResultExt;
use crate::state::AppState;
use infra::models::{AccountBioRow, AccountRow, PlayerEventRow, RoomRow, RoomStatsRow};

/// Account record from the upstream account service.
///
/// `bio`, `rooms` and `events` are not part of the account payload. Each is
/// fetched with its own request keyed by `accountId`, and only when selected.
#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct AccountInfo {
    pub account_id: i32,
    pub username: String,
    pub display_name: String,
    pub profile_image: Option<String>,
    pub banner_image: Option<String>,
    pub is_junior: Option<bool>,
    /// Bitmask of platforms the account has played on.
    pub platforms: Option<i32>,
    pub personal_pronouns: Option<i32>,
    pub identity_flags: Option<i32>,
    pub created_at: Option<String>,
}

impl From<AccountRow> for AccountInfo {
    fn from(row: AccountRow) -> Self {
        Self {
            account_id: row.account_id,
            username: row.username,
            display_name: row.display_name,
            profile_image: row.profile_image,
            banner_image: row.banner_image,
            is_junior: row.is_junior,
            platforms: row.platforms,
            personal_pronouns: row.personal_pronouns,
            identity_flags: row.identity_flags,
            created_at: row.created_at,
        }
    }
}

// Derived fields are nullable so a failed fetch only nulls the field itself.
#[ComplexObject]
impl AccountInfo {
    async fn bio(&self, ctx: &Context<'_>) -> Result<Option<AccountBio>> {
        let state = ctx.data::<AppState>()?;
        let row = state.rec_net().account_bio(self.account_id).await.upstream()?;
        Ok(Some(row.into()))
    }

    /// Rooms owned by this account.
    async fn rooms(&self, ctx: &Context<'_>) -> Result<Option<Vec<Room>>> {
        let state = ctx.data::<AppState>()?;
        let rows = state
            .rec_net()
            .rooms_owned_by(self.account_id)
            .await
            .upstream()?;
        Ok(Some(rows.into_iter().map(Room::from).collect()))
    }

    /// Player events created by this account.
    async fn events(&self, ctx: &Context<'_>) -> Result<Option<Vec<Event>>> {
        let state = ctx.data::<AppState>()?;
        let rows = state
            .rec_net()
            .events_created_by(self.account_id)
            .await
            .upstream()?;
        Ok(Some(rows.into_iter().map(Event::from).collect()))
    }
}

#[derive(SimpleObject, Clone)]
pub struct AccountBio {
    pub account_id: i32,
    pub bio: Option<String>,
}

impl From<AccountBioRow> for AccountBio {
    fn from(row: AccountBioRow) -> Self {
        Self {
            account_id: row.account_id,
            bio: row.bio,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct Room {
    pub room_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub creator_account_id: Option<i32>,
    pub image_name: Option<String>,
    pub state: Option<i32>,
    pub accessibility: Option<i32>,
    pub supports_level_voting: Option<bool>,
    pub is_rro: Option<bool>,
    pub supports_screens: Option<bool>,
    pub supports_walk_vr: Option<bool>,
    pub supports_teleport_vr: Option<bool>,
    pub supports_vr_low: Option<bool>,
    pub supports_quest2: Option<bool>,
    pub supports_mobile: Option<bool>,
    pub supports_juniors: Option<bool>,
    pub min_level: Option<i32>,
    pub created_at: Option<String>,
    pub stats: Option<RoomStats>,
}

impl From<RoomRow> for Room {
    fn from(row: RoomRow) -> Self {
        Self {
            room_id: row.room_id,
            name: row.name,
            description: row.description,
            creator_account_id: row.creator_account_id,
            image_name: row.image_name,
            state: row.state,
            accessibility: row.accessibility,
            supports_level_voting: row.supports_level_voting,
            is_rro: row.is_rro,
            supports_screens: row.supports_screens,
            supports_walk_vr: row.supports_walk_vr,
            supports_teleport_vr: row.supports_teleport_vr,
            supports_vr_low: row.supports_vr_low,
            supports_quest2: row.supports_quest2,
            supports_mobile: row.supports_mobile,
            supports_juniors: row.supports_juniors,
            min_level: row.min_level,
            created_at: row.created_at,
            stats: row.stats.map(RoomStats::from),
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct RoomStats {
    pub cheer_count: Option<i32>,
    pub favorite_count: Option<i32>,
    pub visitor_count: Option<i32>,
    pub visit_count: Option<i32>,
}

impl From<RoomStatsRow> for RoomStats {
    fn from(row: RoomStatsRow) -> Self {
        Self {
            cheer_count: row.cheer_count,
            favorite_count: row.favorite_count,
            visitor_count: row.visitor_count,
            visit_count: row.visit_count,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct Event {
    pub player_event_id: i64,
    pub creator_player_id: Option<i32>,
    pub image_name: Option<String>,
    pub room_id: Option<i64>,
    pub sub_room_id: Option<i64>,
    pub club_id: Option<i64>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub attendee_count: Option<i32>,
    pub state: Option<i32>,
    pub accessibility: Option<i32>,
    pub is_multi_instance: Option<bool>,
    pub support_multi_instance_room_chat: Option<bool>,
    pub default_broadcast_permissions: Option<i32>,
    pub can_request_broadcast_permission: Option<i32>,
}

impl From<PlayerEventRow> for Event {
    fn from(row: PlayerEventRow) -> Self {
        Self {
            player_event_id: row.player_event_id,
            creator_player_id: row.creator_player_id,
            image_name: row.image_name,
            room_id: row.room_id,
            sub_room_id: row.sub_room_id,
            club_id: row.club_id,
            name: row.name,
            description: row.description,
            start_time: row.start_time,
            end_time: row.end_time,
            attendee_count: row.attendee_count,
            state: row.state,
            accessibility: row.accessibility,
            is_multi_instance: row.is_multi_instance,
            support_multi_instance_room_chat: row.support_multi_instance_room_chat,
            default_broadcast_permissions: row.default_broadcast_permissions,
            can_request_broadcast_permission: row.can_request_broadcast_permission,
        }
    }
}
