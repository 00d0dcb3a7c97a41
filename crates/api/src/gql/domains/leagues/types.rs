use async_graphql::{SimpleObject, ID};

use infra::models::{
    LeagueRow, LeagueUserRow, MatchRow, SeasonRow, TeamRow, TeamStatsRow, UserStatsRow,
};

#[derive(SimpleObject, Clone)]
pub struct League {
    pub id: ID,
    pub name: Option<String>,
    /// Account ids of the league owners. Empty when the league has none.
    pub owners: Vec<i32>,
    pub seasons: Option<Vec<Season>>,
}

#[derive(SimpleObject, Clone)]
pub struct Season {
    pub id: ID,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub total_games: Option<i32>,
    pub max_team_size: Option<i32>,
    pub teams: Option<Vec<Team>>,
    pub matches: Option<Vec<Match>>,
}

#[derive(SimpleObject, Clone)]
pub struct Match {
    pub id: ID,
    pub date: Option<String>,
}

#[derive(SimpleObject, Clone)]
pub struct Team {
    pub id: ID,
    pub name: Option<String>,
    pub users: Option<Vec<User>>,
    pub team_stats: Option<Vec<TeamStats>>,
}

#[derive(SimpleObject, Clone)]
pub struct User {
    pub id: ID,
    pub rr_account_id: Option<i32>,
    pub discord_account_id: Option<i64>,
    pub user_stats: Option<Vec<UserStats>>,
}

#[derive(SimpleObject, Clone)]
pub struct TeamStats {
    pub match_id: Option<i32>,
    pub points: Option<i32>,
}

#[derive(SimpleObject, Clone)]
pub struct UserStats {
    pub matches_won: Option<i32>,
    pub time_played: Option<i32>,
    pub seasons_played: Option<i32>,
}

fn convert_all<R, T: From<R>>(rows: Option<Vec<R>>) -> Option<Vec<T>> {
    rows.map(|rows| rows.into_iter().map(T::from).collect())
}

impl From<LeagueRow> for League {
    fn from(row: LeagueRow) -> Self {
        Self {
            id: row.id.into(),
            name: row.name,
            owners: row.owners,
            seasons: convert_all(row.seasons),
        }
    }
}

impl From<SeasonRow> for Season {
    fn from(row: SeasonRow) -> Self {
        Self {
            id: row.id.into(),
            start_date: row.start_date,
            end_date: row.end_date,
            total_games: row.total_games,
            max_team_size: row.max_team_size,
            teams: convert_all(row.teams),
            matches: convert_all(row.matches),
        }
    }
}

impl From<MatchRow> for Match {
    fn from(row: MatchRow) -> Self {
        Self {
            id: row.id.into(),
            date: row.date,
        }
    }
}

impl From<TeamRow> for Team {
    fn from(row: TeamRow) -> Self {
        Self {
            id: row.id.into(),
            name: row.name,
            users: convert_all(row.users),
            team_stats: convert_all(row.team_stats),
        }
    }
}

impl From<LeagueUserRow> for User {
    fn from(row: LeagueUserRow) -> Self {
        Self {
            id: row.id.into(),
            rr_account_id: row.rr_account_id,
            discord_account_id: row.discord_account_id,
            user_stats: convert_all(row.user_stats),
        }
    }
}

impl From<TeamStatsRow> for TeamStats {
    fn from(row: TeamStatsRow) -> Self {
        Self {
            match_id: row.match_id,
            points: row.points,
        }
    }
}

impl From<UserStatsRow> for UserStats {
    fn from(row: UserStatsRow) -> Self {
        Self {
            matches_won: row.matches_won,
            time_played: row.time_played,
            seasons_played: row.seasons_played,
        }
    }
}
