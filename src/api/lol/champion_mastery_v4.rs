use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{api::client::ApiClient, types::RiotApiResponse};

const ROUTE: &str = "/lol/champion-mastery/v4";

#[derive(Debug, Clone)]
pub struct ChampionMasteryV4Api(Arc<ApiClient>);

impl ChampionMasteryV4Api {
    pub fn new(api_client: Arc<ApiClient>) -> Self {
        Self(api_client)
    }

    /// All champion masteries of a summoner.
    pub async fn list(&self, summoner_id: &str) -> RiotApiResponse<Vec<ChampionMastery>> {
        tracing::trace!("[CHAMPION-MASTERY-V4 API] list {}", summoner_id);
        let path = format!("{}/champion-masteries/by-summoner/{}", ROUTE, summoner_id);

        self.0.get_into(&path).await
    }

    pub async fn get(
        &self,
        summoner_id: &str,
        champion_id: i64,
    ) -> RiotApiResponse<ChampionMastery> {
        tracing::trace!(
            "[CHAMPION-MASTERY-V4 API] get {} for champion {}",
            summoner_id,
            champion_id
        );
        let path = format!(
            "{}/champion-masteries/by-summoner/{}/by-champion/{}",
            ROUTE, summoner_id, champion_id
        );

        self.0.get_into(&path).await
    }

    /// Sum of the mastery levels of every champion played by the summoner.
    pub async fn get_total_score(&self, summoner_id: &str) -> RiotApiResponse<i32> {
        tracing::trace!("[CHAMPION-MASTERY-V4 API] get_total_score {}", summoner_id);
        let path = format!("{}/scores/by-summoner/{}", ROUTE, summoner_id);

        self.0.get_into(&path).await
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ChampionMastery {
    pub summoner_id: String,
    pub champion_id: i64,
    pub champion_level: i32,
    pub champion_points: i32,
    pub champion_points_since_last_level: i64,
    pub champion_points_until_next_level: i64,
    pub chest_granted: bool,
    /// Epoch milliseconds.
    pub last_play_time: i64,
    pub tokens_earned: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::lol::test_support::check_operation;

    fn sample() -> ChampionMastery {
        ChampionMastery {
            summoner_id: "id".to_string(),
            champion_id: 103,
            champion_level: 7,
            champion_points: 254_011,
            champion_points_since_last_level: 232_411,
            champion_points_until_next_level: 0,
            chest_granted: true,
            last_play_time: 1_700_000_000_000,
            tokens_earned: 0,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn list() {
        check_operation(
            "/lol/champion-mastery/v4/champion-masteries/by-summoner/id",
            vec![sample(), ChampionMastery::default()],
            |c| async move { c.champion_mastery.list("id").await },
        )
        .await;
    }

    #[tokio::test(start_paused = true)]
    async fn get() {
        check_operation(
            "/lol/champion-mastery/v4/champion-masteries/by-summoner/id/by-champion/103",
            sample(),
            |c| async move { c.champion_mastery.get("id", 103).await },
        )
        .await;
    }

    #[tokio::test(start_paused = true)]
    async fn get_total_score() {
        check_operation(
            "/lol/champion-mastery/v4/scores/by-summoner/id",
            1042,
            |c| async move { c.champion_mastery.get_total_score("id").await },
        )
        .await;
    }
}
