use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{api::client::ApiClient, types::RiotApiResponse};

const ROUTE: &str = "/lol/spectator/v4";

#[derive(Debug, Clone)]
pub struct SpectatorV4Api(Arc<ApiClient>);

impl SpectatorV4Api {
    pub fn new(api_client: Arc<ApiClient>) -> Self {
        Self(api_client)
    }

    /// Game the summoner is currently playing. Answers [`NotFound`] when not in game.
    ///
    /// [`NotFound`]: crate::types::RiotApiError::NotFound
    pub async fn get_current(&self, summoner_id: &str) -> RiotApiResponse<GameInfo> {
        tracing::trace!("[SPECTATOR-V4 API] get_current {}", summoner_id);
        let path = format!("{}/active-games/by-summoner/{}", ROUTE, summoner_id);

        self.0.get_into(&path).await
    }

    pub async fn list_featured(&self) -> RiotApiResponse<FeaturedGames> {
        tracing::trace!("[SPECTATOR-V4 API] list_featured");
        let path = format!("{}/featured-games", ROUTE);

        self.0.get_into(&path).await
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct GameInfo {
    pub game_id: i64,
    pub game_type: String,
    pub game_mode: String,
    pub map_id: i64,
    pub platform_id: String,
    pub game_queue_config_id: i64,
    /// Epoch milliseconds.
    pub game_start_time: i64,
    /// Seconds elapsed since the game started.
    pub game_length: i64,
    pub observers: Observer,
    pub banned_champions: Vec<BannedChampion>,
    pub participants: Vec<CurrentGameParticipant>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Observer {
    pub encryption_key: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct BannedChampion {
    pub champion_id: i64,
    pub team_id: i64,
    pub pick_turn: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct CurrentGameParticipant {
    pub summoner_id: String,
    pub summoner_name: String,
    pub champion_id: i64,
    pub team_id: i64,
    pub profile_icon_id: i64,
    pub bot: bool,
    pub spell1_id: i64,
    pub spell2_id: i64,
    pub perks: Perks,
    pub game_customization_objects: Vec<GameCustomizationObject>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Perks {
    pub perk_ids: Vec<i64>,
    pub perk_style: i64,
    pub perk_sub_style: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct GameCustomizationObject {
    pub category: String,
    pub content: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct FeaturedGames {
    /// Suggested amount of seconds to wait before asking again.
    pub client_refresh_interval: i64,
    pub game_list: Vec<FeaturedGameInfo>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct FeaturedGameInfo {
    pub game_id: i64,
    pub game_type: String,
    pub game_mode: String,
    pub map_id: i64,
    pub platform_id: String,
    pub game_queue_config_id: i64,
    pub game_start_time: i64,
    pub game_length: i64,
    pub observers: Observer,
    pub banned_champions: Vec<BannedChampion>,
    pub participants: Vec<FeaturedGameParticipant>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct FeaturedGameParticipant {
    pub summoner_name: String,
    pub champion_id: i64,
    pub team_id: i64,
    pub profile_icon_id: i64,
    pub bot: bool,
    pub spell1_id: i64,
    pub spell2_id: i64,
}
