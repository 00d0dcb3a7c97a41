use serde::{Deserialize, Deserializer, Serialize};

/// Dataset ids may be written as JSON strings or numbers; both become the `ID` string.
fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(id) => id,
        RawId::Number(id) => id.to_string(),
    })
}

// ── Static league dataset ───────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LeagueRow {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    pub name: Option<String>,
    #[serde(default)]
    pub owners: Vec<i32>,
    pub seasons: Option<Vec<SeasonRow>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SeasonRow {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub total_games: Option<i32>,
    pub max_team_size: Option<i32>,
    pub teams: Option<Vec<TeamRow>>,
    pub matches: Option<Vec<MatchRow>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchRow {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    pub date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TeamRow {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    pub name: Option<String>,
    pub users: Option<Vec<LeagueUserRow>>,
    pub team_stats: Option<Vec<TeamStatsRow>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LeagueUserRow {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    pub rr_account_id: Option<i32>,
    /// Discord snowflakes do not fit in 32 bits.
    pub discord_account_id: Option<i64>,
    pub user_stats: Option<Vec<UserStatsRow>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TeamStatsRow {
    pub match_id: Option<i32>,
    pub points: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserStatsRow {
    pub matches_won: Option<i32>,
    pub time_played: Option<i32>,
    pub seasons_played: Option<i32>,
}

// ── Upstream account service ────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AccountRow {
    pub account_id: i32,
    pub username: String,
    pub display_name: String,
    pub profile_image: Option<String>,
    pub banner_image: Option<String>,
    pub is_junior: Option<bool>,
    pub platforms: Option<i32>,
    pub personal_pronouns: Option<i32>,
    pub identity_flags: Option<i32>,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AccountBioRow {
    pub account_id: i32,
    pub bio: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct RoomRow {
    pub room_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub creator_account_id: Option<i32>,
    pub image_name: Option<String>,
    pub state: Option<i32>,
    pub accessibility: Option<i32>,
    pub supports_level_voting: Option<bool>,
    #[serde(rename = "IsRRO")]
    pub is_rro: Option<bool>,
    pub supports_screens: Option<bool>,
    #[serde(rename = "SupportsWalkVR")]
    pub supports_walk_vr: Option<bool>,
    #[serde(rename = "SupportsTeleportVR")]
    pub supports_teleport_vr: Option<bool>,
    #[serde(rename = "SupportsVRLow")]
    pub supports_vr_low: Option<bool>,
    pub supports_quest2: Option<bool>,
    pub supports_mobile: Option<bool>,
    pub supports_juniors: Option<bool>,
    pub min_level: Option<i32>,
    pub created_at: Option<String>,
    pub stats: Option<RoomStatsRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct RoomStatsRow {
    pub cheer_count: Option<i32>,
    pub favorite_count: Option<i32>,
    pub visitor_count: Option<i32>,
    pub visit_count: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct PlayerEventRow {
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
