use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{api::client::ApiClient, types::RiotApiResponse};

#[derive(Debug, Clone)]
pub struct ChampionV3Api(Arc<ApiClient>);

impl ChampionV3Api {
    pub fn new(api_client: Arc<ApiClient>) -> Self {
        Self(api_client)
    }

    /// Current free champion rotation.
    pub async fn get_free_rotation(&self) -> RiotApiResponse<ChampionInfo> {
        tracing::trace!("[CHAMPION-V3 API] get_free_rotation");

        self.0.get_into("/lol/platform/v3/champion-rotations").await
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ChampionInfo {
    pub free_champion_ids: Vec<i32>,
    pub free_champion_ids_for_new_players: Vec<i32>,
    pub max_new_player_level: i32,
}
