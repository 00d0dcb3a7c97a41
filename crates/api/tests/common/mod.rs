use api::gql::{build_schema, LeagueSchema};
use api::{AppConfig, AppState};
use async_graphql::{Request, Variables};
use infra::{LeagueDataset, RecNetConfig};
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Config with every upstream pointed at the given mock server.
pub fn test_config(upstream_uri: &str) -> AppConfig {
    AppConfig {
        rec_net: RecNetConfig::with_base_url(upstream_uri),
        ..AppConfig::default()
    }
}

pub fn setup_state(upstream_uri: &str, leagues: LeagueDataset) -> AppState {
    AppState::new(&test_config(upstream_uri), leagues).expect("Failed to create AppState")
}

#[allow(dead_code)]
pub fn setup_schema(server: &MockServer) -> LeagueSchema {
    build_schema(setup_state(&server.uri(), LeagueDataset::default()))
}

/// Helper function to execute GraphQL queries
#[allow(dead_code)]
pub async fn execute_graphql(
    schema: &LeagueSchema,
    query: &str,
    variables: Option<Variables>,
) -> async_graphql::Response {
    let mut request = Request::new(query);

    if let Some(vars) = variables {
        request = request.variables(vars);
    }

    schema.execute(request).await
}

/// Serialize the full response (data + errors with extensions) for assertions.
#[allow(dead_code)]
pub fn response_json(response: &async_graphql::Response) -> Value {
    serde_json::to_value(response).expect("Response should serialize")
}

/// Paths of every request the mock server received, in arrival order.
#[allow(dead_code)]
pub async fn received_paths(server: &MockServer) -> Vec<String> {
    server
        .received_requests()
        .await
        .expect("Request recording should be enabled")
        .iter()
        .map(|r| r.url.path().to_string())
        .collect()
}

#[allow(dead_code)]
pub fn account_json(account_id: i32, username: &str) -> Value {
    json!({
        "accountId": account_id,
        "username": username,
        "displayName": format!("{username} display"),
        "profileImage": "profile.jpg",
        "bannerImage": null,
        "isJunior": false,
        "platforms": 3,
        "personalPronouns": 0,
        "identityFlags": 0,
        "createdAt": "2016-06-21T17:37:05.697Z"
    })
}

#[allow(dead_code)]
pub fn account_by_id(account_id: i32) -> Mock {
    Mock::given(method("GET"))
        .and(path(format!("/account/{account_id}")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(account_json(account_id, "coach")),
        )
}

#[allow(dead_code)]
pub fn account_by_username(username: &str, account_id: i32) -> Mock {
    Mock::given(method("GET"))
        .and(path("/account"))
        .and(query_param("username", username))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(account_json(account_id, username)),
        )
}

#[allow(dead_code)]
pub fn account_bio(account_id: i32, bio: &str) -> Mock {
    Mock::given(method("GET"))
        .and(path(format!("/account/{account_id}/bio")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "accountId": account_id, "bio": bio })),
        )
}

#[allow(dead_code)]
pub fn rooms_owned_by(account_id: i32) -> Mock {
    Mock::given(method("GET"))
        .and(path(format!("/rooms/ownedby/{account_id}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "RoomId": 100,
                "Name": "Paintball",
                "CreatorAccountId": account_id,
                "Stats": { "CheerCount": 10, "FavoriteCount": 2, "VisitorCount": 30, "VisitCount": 40 }
            },
            { "RoomId": 101, "Name": "Laser Tag", "CreatorAccountId": account_id }
        ])))
}

#[allow(dead_code)]
pub fn events_created_by(account_id: i32) -> Mock {
    Mock::given(method("GET"))
        .and(path(format!("/api/playerevents/v1/creator/{account_id}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "PlayerEventId": 9000,
                "CreatorPlayerId": account_id,
                "Name": "Weekly scrim",
                "AttendeeCount": 8
            }
        ])))
}
