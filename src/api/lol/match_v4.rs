use std::{collections::HashMap, sync::Arc};

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

use crate::{
    api::client::ApiClient,
    types::{RiotApiError, RiotApiResponse},
};

const ROUTE: &str = "/lol/match/v4";

/// Amount of matches requested per page by [`MatchV4Api::list_stream`].
pub const PAGE_SIZE: u32 = 100;
/// Amount of values a stream can hold before its producer waits for the consumer.
pub const STREAM_CAPACITY: usize = 100;

/// One value of a match stream.
///
/// The stream always ends with exactly one `Err`: either
/// [`RiotApiError::EndOfStream`] once every match has been sent, or the error
/// which stopped the listing.
pub type MatchStreamValue = Result<MatchReference, RiotApiError>;

#[derive(Debug, Clone)]
pub struct MatchV4Api(Arc<ApiClient>);

impl MatchV4Api {
    pub fn new(api_client: Arc<ApiClient>) -> Self {
        Self(api_client)
    }

    pub async fn get(&self, match_id: i64) -> RiotApiResponse<Match> {
        tracing::trace!("[MATCH-V4 API] get {}", match_id);
        let path = format!("{}/matches/{}", ROUTE, match_id);

        self.0.get_into(&path).await
    }

    /// One page of the matches played on an account, narrowed by `filter`.
    pub async fn list(&self, account_id: &str, filter: &MatchFilter) -> RiotApiResponse<Matchlist> {
        tracing::trace!("[MATCH-V4 API] list {} {:?}", account_id, filter);
        let mut path = format!("{}/matchlists/by-account/{}", ROUTE, account_id);
        let query = filter.query_params();
        if !query.is_empty() {
            path.push('?');
            path.push_str(&query);
        }

        self.0.get_into(&path).await
    }

    /// Every match played on an account, fetched page by page in the background.
    ///
    /// `begin_index`/`end_index` of the filter are overwritten to walk the
    /// list by windows of [`PAGE_SIZE`]; the other criteria are kept. A page
    /// shorter than [`PAGE_SIZE`] is taken as the last one.
    ///
    /// Must be called from within a tokio runtime. The producer stops when the
    /// receiver is dropped.
    pub fn list_stream(
        &self,
        account_id: &str,
        mut filter: MatchFilter,
    ) -> mpsc::Receiver<MatchStreamValue> {
        let (tx, rx) = mpsc::channel(STREAM_CAPACITY);
        let api = self.clone();
        let account_id = account_id.to_string();

        tokio::spawn(async move {
            let mut start = 0;
            loop {
                filter.begin_index = Some(start);
                filter.end_index = Some(start + PAGE_SIZE);

                let matches = match api.list(&account_id, &filter).await {
                    Ok(list) => list.matches,
                    Err(e) => {
                        tracing::debug!("[MATCH-V4 API] list_stream {} stopped: {}", account_id, e);
                        let _ = tx.send(Err(e)).await;
                        return;
                    }
                };

                let page_len = matches.len();
                for reference in matches {
                    if tx.send(Ok(reference)).await.is_err() {
                        tracing::trace!("[MATCH-V4 API] list_stream {} receiver dropped", account_id);
                        return;
                    }
                }

                if page_len < PAGE_SIZE as usize {
                    let _ = tx.send(Err(RiotApiError::EndOfStream)).await;
                    return;
                }
                start += PAGE_SIZE;
            }
        });

        rx
    }

    /// Timelines are not available for every match.
    pub async fn get_timeline(&self, match_id: i64) -> RiotApiResponse<MatchTimeline> {
        tracing::trace!("[MATCH-V4 API] get_timeline {}", match_id);
        let path = format!("{}/timelines/by-match/{}", ROUTE, match_id);

        self.0.get_into(&path).await
    }

    pub async fn list_ids_by_tournament_code(&self, code: &str) -> RiotApiResponse<Vec<i64>> {
        tracing::trace!("[MATCH-V4 API] list_ids_by_tournament_code {}", code);
        let path = format!("{}/matches/by-tournament-code/{}/ids", ROUTE, code);

        self.0.get_into(&path).await
    }

    pub async fn get_for_tournament(&self, match_id: i64, code: &str) -> RiotApiResponse<Match> {
        tracing::trace!("[MATCH-V4 API] get_for_tournament {} {}", match_id, code);
        let path = format!("{}/matches/{}/by-tournament-code/{}", ROUTE, match_id, code);

        self.0.get_into(&path).await
    }
}

/// Criteria narrowing a match list. Unset fields are left out of the query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchFilter {
    pub champions: Vec<i32>,
    pub queues: Vec<i32>,
    pub seasons: Vec<i32>,
    /// Epoch milliseconds.
    pub begin_time: Option<i64>,
    /// Epoch milliseconds.
    pub end_time: Option<i64>,
    pub begin_index: Option<u32>,
    pub end_index: Option<u32>,
}

impl MatchFilter {
    /// URL-encoded query string, keys sorted, without the leading `?`.
    pub fn query_params(&self) -> String {
        let mut params: Vec<(&str, String)> = Vec::new();

        if let Some(index) = self.begin_index {
            params.push(("beginIndex", index.to_string()));
        }
        if let Some(time) = self.begin_time {
            params.push(("beginTime", time.to_string()));
        }
        params.extend(self.champions.iter().map(|c| ("champion", c.to_string())));
        if let Some(index) = self.end_index {
            params.push(("endIndex", index.to_string()));
        }
        if let Some(time) = self.end_time {
            params.push(("endTime", time.to_string()));
        }
        params.extend(self.queues.iter().map(|q| ("queue", q.to_string())));
        params.extend(self.seasons.iter().map(|s| ("season", s.to_string())));

        params
            .iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Matchlist {
    pub matches: Vec<MatchReference>,
    pub total_games: i32,
    pub start_index: i32,
    pub end_index: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchReference {
    pub game_id: i64,
    pub platform_id: String,
    pub champion: i32,
    pub queue: i32,
    pub season: i32,
    /// Epoch milliseconds.
    pub timestamp: i64,
    pub role: String,
    pub lane: String,
}

/// Representation of the match data response.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Match {
    pub game_id: i64,
    pub platform_id: String,
    /// Epoch milliseconds.
    pub game_creation: i64,
    /// Seconds.
    pub game_duration: i64,
    pub queue_id: i32,
    pub map_id: i32,
    pub season_id: i32,
    pub game_version: String,
    pub game_mode: String,
    pub game_type: String,
    pub teams: Vec<TeamStats>,
    pub participants: Vec<Participant>,
    pub participant_identities: Vec<ParticipantIdentity>,
}

impl Match {
    /// Player behind a participant slot, when identities were not anonymized.
    pub fn player_of(&self, participant_id: i32) -> Option<&Player> {
        self.participant_identities
            .iter()
            .find(|identity| identity.participant_id == participant_id)
            .map(|identity| &identity.player)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct TeamStats {
    pub team_id: i32,
    /// `Win` or `Fail`.
    pub win: String,
    pub first_blood: bool,
    pub first_tower: bool,
    pub first_inhibitor: bool,
    pub first_baron: bool,
    pub first_dragon: bool,
    pub first_rift_herald: bool,
    pub tower_kills: i32,
    pub inhibitor_kills: i32,
    pub baron_kills: i32,
    pub dragon_kills: i32,
    pub rift_herald_kills: i32,
    pub bans: Vec<TeamBan>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct TeamBan {
    pub champion_id: i32,
    pub pick_turn: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Participant {
    pub participant_id: i32,
    pub champion_id: i32,
    pub team_id: i32,
    pub spell1_id: i32,
    pub spell2_id: i32,
    pub highest_achieved_season_tier: String,
    pub stats: ParticipantStats,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ParticipantStats {
    pub win: bool,
    pub kills: i32,
    pub deaths: i32,
    pub assists: i32,
    pub champ_level: i32,
    pub gold_earned: i32,
    pub total_minions_killed: i32,
    pub neutral_minions_killed: i32,
    pub total_damage_dealt_to_champions: i64,
    pub vision_score: i64,
    pub largest_multi_kill: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ParticipantIdentity {
    pub participant_id: i32,
    pub player: Player,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Player {
    pub summoner_id: String,
    pub summoner_name: String,
    pub account_id: String,
    pub current_account_id: String,
    pub platform_id: String,
    pub current_platform_id: String,
    pub profile_icon: i32,
    pub match_history_uri: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchTimeline {
    pub frames: Vec<MatchFrame>,
    /// Milliseconds between two frames.
    pub frame_interval: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchFrame {
    pub timestamp: i64,
    /// Keyed by participant id.
    pub participant_frames: HashMap<String, ParticipantFrame>,
    pub events: Vec<MatchEvent>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ParticipantFrame {
    pub participant_id: i32,
    pub level: i32,
    pub xp: i32,
    pub current_gold: i32,
    pub total_gold: i32,
    pub minions_killed: i32,
    pub jungle_minions_killed: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchEvent {
    #[serde(rename = "type")]
    pub event_type: String,
    pub timestamp: i64,
    pub participant_id: i32,
    pub killer_id: i32,
    pub victim_id: i32,
    pub assisting_participant_ids: Vec<i32>,
    pub item_id: i32,
    pub skill_slot: i32,
    pub building_type: String,
    pub monster_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}
