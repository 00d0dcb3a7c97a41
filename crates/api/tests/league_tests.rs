mod common;

use api::gql::build_schema;
use common::*;
use infra::LeagueDataset;
use serde_json::json;
use wiremock::MockServer;

const DATASET: &str = r#"[
    {
        "id": "1",
        "name": "Test League",
        "owners": [],
        "seasons": [
            {
                "id": "10",
                "startDate": "2021-03-01",
                "endDate": "2021-05-01",
                "totalGames": 8,
                "maxTeamSize": 5,
                "teams": [
                    {
                        "id": "100",
                        "name": "Blue Team",
                        "users": [
                            {
                                "id": "1000",
                                "rrAccountId": 1,
                                "discordAccountId": 81234567890123456,
                                "userStats": [{ "matchesWon": 3, "timePlayed": 120, "seasonsPlayed": 1 }]
                            }
                        ],
                        "teamStats": [{ "matchId": 1, "points": 15 }]
                    }
                ],
                "matches": [{ "id": "1", "date": "2021-03-08" }]
            }
        ]
    }
]"#;

#[tokio::test]
async fn test_leagues_returns_static_data_without_upstream_calls() {
    let server = MockServer::start().await;
    let leagues = LeagueDataset::from_json(DATASET).unwrap();
    let schema = build_schema(setup_state(&server.uri(), leagues));

    let response = execute_graphql(&schema, "{ leagues { id name } }", None).await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);
    assert_eq!(
        response.data.into_json().unwrap(),
        json!({ "leagues": [{ "id": "1", "name": "Test League" }] })
    );
    assert!(received_paths(&server).await.is_empty());
}

#[tokio::test]
async fn test_leagues_nested_selection() {
    let server = MockServer::start().await;
    let leagues = LeagueDataset::from_json(DATASET).unwrap();
    let schema = build_schema(setup_state(&server.uri(), leagues));

    let query = r#"
        query {
            leagues {
                owners
                seasons {
                    startDate
                    maxTeamSize
                    matches { id date }
                    teams {
                        name
                        teamStats { matchId points }
                        users {
                            rrAccountId
                            discordAccountId
                            userStats { matchesWon timePlayed seasonsPlayed }
                        }
                    }
                }
            }
        }
    "#;

    let response = execute_graphql(&schema, query, None).await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);

    let data = response.data.into_json().unwrap();
    let league = &data["leagues"][0];
    assert_eq!(league["owners"], json!([]));

    let season = &league["seasons"][0];
    assert_eq!(season["startDate"], "2021-03-01");
    assert_eq!(season["maxTeamSize"], 5);
    assert_eq!(season["matches"][0]["date"], "2021-03-08");

    let team = &season["teams"][0];
    assert_eq!(team["name"], "Blue Team");
    assert_eq!(team["teamStats"][0]["points"], 15);

    let user = &team["users"][0];
    assert_eq!(user["rrAccountId"], 1);
    assert_eq!(user["discordAccountId"], 81234567890123456i64);
    assert_eq!(user["userStats"][0]["matchesWon"], 3);

    assert!(received_paths(&server).await.is_empty());
}

#[tokio::test]
async fn test_leagues_empty_dataset_returns_empty_list() {
    let server = MockServer::start().await;
    let schema = setup_schema(&server);

    let response = execute_graphql(&schema, "{ leagues { id } }", None).await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);
    assert_eq!(
        response.data.into_json().unwrap(),
        json!({ "leagues": [] })
    );
}

#[tokio::test]
async fn test_missing_optional_fields_resolve_to_null() {
    let server = MockServer::start().await;
    let leagues = LeagueDataset::from_json(r#"[{ "id": "7" }]"#).unwrap();
    let schema = build_schema(setup_state(&server.uri(), leagues));

    let response =
        execute_graphql(&schema, "{ leagues { id name owners seasons { id } } }", None).await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);
    assert_eq!(
        response.data.into_json().unwrap(),
        json!({ "leagues": [{ "id": "7", "name": null, "owners": [], "seasons": null }] })
    );
}
