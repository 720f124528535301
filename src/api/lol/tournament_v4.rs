//! Tournament-V4 API.
//!
//! Every call creating or reading lobby data can be routed to the stub
//! endpoints (`tournament-stub/v4`), which answer with mock data and are
//! available to development keys.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{api::client::ApiClient, types::RiotApiResponse};

const ROUTE: &str = "/lol/tournament/v4";
const STUB_ROUTE: &str = "/lol/tournament-stub/v4";

fn route(use_stub: bool) -> &'static str {
    if use_stub { STUB_ROUTE } else { ROUTE }
}

#[derive(Debug, Clone)]
pub struct TournamentV4Api(Arc<ApiClient>);

impl TournamentV4Api {
    pub fn new(api_client: Arc<ApiClient>) -> Self {
        Self(api_client)
    }

    /// Create `count` tournament codes and return them.
    pub async fn create_codes(
        &self,
        tournament_id: i64,
        count: u32,
        parameters: &TournamentCodeParameters,
        use_stub: bool,
    ) -> RiotApiResponse<Vec<String>> {
        tracing::trace!(
            "[TOURNAMENT-V4 API] create_codes {} for tournament {} (stub: {})",
            count,
            tournament_id,
            use_stub
        );
        let path = format!(
            "{}/codes?count={}&tournamentId={}",
            route(use_stub),
            count,
            tournament_id
        );

        self.0.post_into(&path, parameters).await
    }

    pub async fn list_lobby_events(
        &self,
        code: &str,
        use_stub: bool,
    ) -> RiotApiResponse<LobbyEventList> {
        tracing::trace!(
            "[TOURNAMENT-V4 API] list_lobby_events {} (stub: {})",
            code,
            use_stub
        );
        let path = format!("{}/lobby-events/by-code/{}", route(use_stub), code);

        self.0.get_into(&path).await
    }

    /// Register a tournament provider and return its id.
    pub async fn create_provider(
        &self,
        parameters: &ProviderRegistrationParameters,
        use_stub: bool,
    ) -> RiotApiResponse<i64> {
        tracing::trace!("[TOURNAMENT-V4 API] create_provider (stub: {})", use_stub);
        let path = format!("{}/providers", route(use_stub));

        self.0.post_into(&path, parameters).await
    }

    /// Register a tournament and return its id.
    pub async fn create(
        &self,
        parameters: &TournamentRegistrationParameters,
        use_stub: bool,
    ) -> RiotApiResponse<i64> {
        tracing::trace!(
            "[TOURNAMENT-V4 API] create {} (stub: {})",
            parameters.name,
            use_stub
        );
        let path = format!("{}/tournaments", route(use_stub));

        self.0.post_into(&path, parameters).await
    }

    /// Tournament code details.
    pub async fn get(&self, code: &str) -> RiotApiResponse<Tournament> {
        tracing::trace!("[TOURNAMENT-V4 API] get {}", code);
        let path = format!("{}/codes/{}", ROUTE, code);

        self.0.get_into(&path).await
    }

    pub async fn update(
        &self,
        code: &str,
        parameters: &TournamentUpdateParameters,
    ) -> RiotApiResponse<()> {
        tracing::trace!("[TOURNAMENT-V4 API] update {}", code);
        let path = format!("{}/codes/{}", ROUTE, code);

        self.0.put(&path, parameters).await
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PickType {
    #[default]
    BlindPick,
    DraftMode,
    AllRandom,
    TournamentDraft,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MapType {
    #[default]
    SummonersRift,
    TwistedTreeline,
    HowlingAbyss,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum SpectatorType {
    #[default]
    None,
    #[serde(rename = "LOBBYONLY")]
    LobbyOnly,
    All,
}

/// Settings of the lobbies opened with the created codes.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct TournamentCodeParameters {
    /// Restrict the lobby to these summoners. Empty means anyone with the code.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub allowed_summoner_ids: Vec<String>,
    /// Free text echoed back in the game results callback.
    pub metadata: String,
    /// Players per team, 1 to 5.
    pub team_size: i32,
    pub pick_type: PickType,
    pub map_type: MapType,
    pub spectator_type: SpectatorType,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ProviderRegistrationParameters {
    /// Region label such as `EUW` or `NA`.
    pub region: String,
    /// Callback URL receiving game results.
    pub url: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct TournamentRegistrationParameters {
    pub provider_id: i64,
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct TournamentUpdateParameters {
    pub allowed_summoner_ids: Vec<String>,
    pub pick_type: PickType,
    pub map_type: MapType,
    pub spectator_type: SpectatorType,
}

/// Representation of a tournament code.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Tournament {
    pub id: i64,
    pub code: String,
    pub provider_id: i64,
    pub tournament_id: i64,
    pub region: String,
    pub map: String,
    pub pick_type: String,
    pub spectators: String,
    pub team_size: i32,
    pub lobby_name: String,
    pub password: String,
    pub meta_data: String,
    pub participants: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct LobbyEventList {
    pub event_list: Vec<LobbyEvent>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct LobbyEvent {
    pub event_type: String,
    pub summoner_id: String,
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{
        lol::test_support::{check_operation, client},
        transport::mock::*,
    };

    fn code_parameters() -> TournamentCodeParameters {
        TournamentCodeParameters {
            allowed_summoner_ids: vec!["a".to_string(), "b".to_string()],
            metadata: "finals".to_string(),
            team_size: 5,
            pick_type: PickType::TournamentDraft,
            map_type: MapType::SummonersRift,
            spectator_type: SpectatorType::LobbyOnly,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn create_codes() {
        check_operation(
            "/lol/tournament/v4/codes?count=2&tournamentId=7",
            vec!["EUW-1".to_string(), "EUW-2".to_string()],
            |c| async move {
                c.tournament
                    .create_codes(7, 2, &code_parameters(), false)
                    .await
            },
        )
        .await;
    }

    #[tokio::test(start_paused = true)]
    async fn create_codes_stub() {
        check_operation(
            "/lol/tournament-stub/v4/codes?count=1&tournamentId=7",
            vec!["EUW-STUB".to_string()],
            |c| async move {
                c.tournament
                    .create_codes(7, 1, &code_parameters(), true)
                    .await
            },
        )
        .await;
    }

    #[tokio::test(start_paused = true)]
    async fn list_lobby_events() {
        let events = LobbyEventList {
            event_list: vec![LobbyEvent {
                event_type: "PracticeGameCreatedEvent".to_string(),
                summoner_id: "id".to_string(),
                timestamp: "1234567890000".to_string(),
            }],
        };

        check_operation(
            "/lol/tournament/v4/lobby-events/by-code/code",
            events.clone(),
            |c| async move { c.tournament.list_lobby_events("code", false).await },
        )
        .await;
        check_operation(
            "/lol/tournament-stub/v4/lobby-events/by-code/code",
            events,
            |c| async move { c.tournament.list_lobby_events("code", true).await },
        )
        .await;
    }

    #[tokio::test(start_paused = true)]
    async fn create_provider() {
        let parameters = ProviderRegistrationParameters {
            region: "EUW".to_string(),
            url: "https://example.org/callback".to_string(),
        };

        check_operation("/lol/tournament/v4/providers", 12, |c| {
            let parameters = parameters.clone();
            async move { c.tournament.create_provider(&parameters, false).await }
        })
        .await;
    }

    #[tokio::test(start_paused = true)]
    async fn create() {
        let parameters = TournamentRegistrationParameters {
            provider_id: 12,
            name: "Clash".to_string(),
        };

        check_operation("/lol/tournament-stub/v4/tournaments", 34, |c| {
            let parameters = parameters.clone();
            async move { c.tournament.create(&parameters, true).await }
        })
        .await;
    }

    #[tokio::test(start_paused = true)]
    async fn get() {
        let tournament = Tournament {
            id: 1,
            code: "code".to_string(),
            tournament_id: 34,
            team_size: 5,
            participants: vec!["a".to_string()],
            ..Default::default()
        };

        check_operation("/lol/tournament/v4/codes/code", tournament, |c| async move {
            c.tournament.get("code").await
        })
        .await;
    }

    #[tokio::test(start_paused = true)]
    async fn update() {
        check_operation("/lol/tournament/v4/codes/code", (), |c| async move {
            c.tournament
                .update("code", &TournamentUpdateParameters::default())
                .await
        })
        .await;
    }

    #[tokio::test]
    async fn create_codes_posts_parameters() {
        let transport = MockTransport::always(json_reply(&vec!["EUW-1"], 200));
        let riot = client(transport.clone());

        riot.tournament
            .create_codes(7, 1, &code_parameters(), false)
            .await
            .unwrap();

        let body: serde_json::Value =
            serde_json::from_slice(transport.requests()[0].body.as_ref().unwrap()).unwrap();
        assert_eq!(body["pickType"], "TOURNAMENT_DRAFT");
        assert_eq!(body["mapType"], "SUMMONERS_RIFT");
        assert_eq!(body["spectatorType"], "LOBBYONLY");
        assert_eq!(body["teamSize"], 5);
        assert_eq!(body["allowedSummonerIds"][1], "b");
    }

    #[tokio::test]
    async fn update_sends_put() {
        let transport = MockTransport::always(status_reply(200));
        let riot = client(transport.clone());

        riot.tournament
            .update("code", &TournamentUpdateParameters::default())
            .await
            .unwrap();

        let req = &transport.requests()[0];
        assert_eq!(req.method, reqwest::Method::PUT);
        let body: serde_json::Value = serde_json::from_slice(req.body.as_ref().unwrap()).unwrap();
        assert_eq!(body["spectatorType"], "NONE");
    }
}
