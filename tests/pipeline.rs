//! Full stack checks: typed calls -> engine -> reqwest -> local mock server.

use std::sync::Arc;

use async_trait::async_trait;
use httpmock::prelude::*;
use riot_lol_api::{
    Region, RiotApiError, RiotClient,
    api::{
        lol::match_v4::{MatchFilter, MatchReference, Matchlist},
        lol::tournament_v4::{PickType, TournamentCodeParameters},
        transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport, TransportError},
    },
};
use serde_json::json;
use tracing_subscriber::EnvFilter;

const RIOT_HOST: &str = "https://euw1.api.riotgames.com";

/// Sends every request to the mock server instead of the Riot host.
#[derive(Debug)]
struct LocalTransport {
    base_url: String,
    inner: ReqwestTransport,
}

#[async_trait]
impl Transport for LocalTransport {
    async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut local = request.clone();
        local.url = request.url.replacen(RIOT_HOST, &self.base_url, 1);
        self.inner.send(&local).await
    }
}

fn init_logs() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn riot(server: &MockServer) -> RiotClient {
    init_logs();
    let transport = LocalTransport {
        base_url: server.base_url(),
        inner: ReqwestTransport::new(),
    };
    RiotClient::new(Region::EUW1, "RGAPI-TEST", Arc::new(transport))
}

#[tokio::test]
async fn summoner_lookup_sends_token_and_decodes_body() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/lol/summoner/v4/summoners/by-puuid/puuid")
                .header("x-riot-token", "RGAPI-TEST")
                .header("accept", "application/json");
            then.status(200).json_body(json!({
                "id": "id",
                "accountId": "account",
                "puuid": "puuid",
                "name": "Chalop",
                "profileIconId": 29,
                "revisionDate": 1700000000000i64,
                "summonerLevel": 412
            }));
        })
        .await;

    let summoner = riot(&server).summoner.get_by_puuid("puuid").await.unwrap();

    mock.assert_async().await;
    assert_eq!(summoner.name, "Chalop");
    assert_eq!(summoner.summoner_level, 412);
    assert_eq!(summoner.profile_icon_id, 29);
}

#[tokio::test]
async fn not_found_is_mapped() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/lol/spectator/v4/active-games/by-summoner/id");
            then.status(404)
                .json_body(json!({"status": {"message": "Data not found", "status_code": 404}}));
        })
        .await;

    let err = riot(&server)
        .spectator
        .get_current("id")
        .await
        .unwrap_err();

    assert!(matches!(err, RiotApiError::NotFound));
    assert_eq!(err.status_code(), Some(404));
}

#[tokio::test]
async fn tournament_codes_are_posted_as_json() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/lol/tournament-stub/v4/codes")
                .query_param("count", "2")
                .query_param("tournamentId", "77")
                .header("content-type", "application/json")
                .json_body_partial(r#"{"pickType":"DRAFT_MODE","teamSize":5}"#);
            then.status(200).json_body(json!(["EUW-A", "EUW-B"]));
        })
        .await;

    let parameters = TournamentCodeParameters {
        team_size: 5,
        pick_type: PickType::DraftMode,
        ..Default::default()
    };
    let codes = riot(&server)
        .tournament
        .create_codes(77, 2, &parameters, true)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(codes, vec!["EUW-A".to_string(), "EUW-B".to_string()]);
}

#[tokio::test]
async fn match_stream_walks_pages() {
    let server = MockServer::start_async().await;
    let page = |from: i64, len: i64| Matchlist {
        matches: (from..from + len)
            .map(|game_id| MatchReference {
                game_id,
                ..Default::default()
            })
            .collect(),
        ..Default::default()
    };

    let first = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/lol/match/v4/matchlists/by-account/account")
                .query_param("beginIndex", "0")
                .query_param("endIndex", "100")
                .query_param("queue", "420");
            then.status(200).json_body_obj(&page(0, 100));
        })
        .await;
    let second = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/lol/match/v4/matchlists/by-account/account")
                .query_param("beginIndex", "100")
                .query_param("endIndex", "200")
                .query_param("queue", "420");
            then.status(200).json_body_obj(&page(100, 42));
        })
        .await;

    let filter = MatchFilter {
        queues: vec![420],
        ..Default::default()
    };
    let mut rx = riot(&server).matches.list_stream("account", filter);

    let mut ids = Vec::new();
    let mut terminal = None;
    while let Some(value) = rx.recv().await {
        match value {
            Ok(reference) => ids.push(reference.game_id),
            Err(e) => terminal = Some(e),
        }
    }

    first.assert_async().await;
    second.assert_async().await;
    assert_eq!(ids, (0..142).collect::<Vec<_>>());
    assert!(terminal.unwrap().is_end_of_stream());
}
