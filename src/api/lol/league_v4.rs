use std::{fmt, sync::Arc};

use serde::{Deserialize, Serialize};

use crate::{api::client::ApiClient, types::RiotApiResponse};

const ROUTE: &str = "/lol/league/v4";

#[derive(Debug, Clone)]
pub struct LeagueV4Api(Arc<ApiClient>);

impl LeagueV4Api {
    pub fn new(api_client: Arc<ApiClient>) -> Self {
        Self(api_client)
    }

    pub async fn get_challenger(&self, queue: Queue) -> RiotApiResponse<LeagueList> {
        tracing::trace!("[LEAGUE-V4 API] get_challenger {}", queue);
        let path = format!("{}/challengerleagues/by-queue/{}", ROUTE, queue);

        self.0.get_into(&path).await
    }

    pub async fn get_grandmaster(&self, queue: Queue) -> RiotApiResponse<LeagueList> {
        tracing::trace!("[LEAGUE-V4 API] get_grandmaster {}", queue);
        let path = format!("{}/grandmasterleagues/by-queue/{}", ROUTE, queue);

        self.0.get_into(&path).await
    }

    pub async fn get_master(&self, queue: Queue) -> RiotApiResponse<LeagueList> {
        tracing::trace!("[LEAGUE-V4 API] get_master {}", queue);
        let path = format!("{}/masterleagues/by-queue/{}", ROUTE, queue);

        self.0.get_into(&path).await
    }

    /// Every league entry of a summoner, one per ranked queue played.
    pub async fn list_by_summoner(&self, summoner_id: &str) -> RiotApiResponse<Vec<LeagueItem>> {
        tracing::trace!("[LEAGUE-V4 API] list_by_summoner {}", summoner_id);
        let path = format!("{}/entries/by-summoner/{}", ROUTE, summoner_id);

        self.0.get_into(&path).await
    }

    /// Players of one queue, tier and division.
    pub async fn list_plain(
        &self,
        queue: Queue,
        tier: Tier,
        division: Division,
    ) -> RiotApiResponse<Vec<LeagueItem>> {
        tracing::trace!("[LEAGUE-V4 API] list_plain {} {} {}", queue, tier, division);
        let path = format!("{}/entries/{}/{}/{}", ROUTE, queue, tier, division);

        self.0.get_into(&path).await
    }

    pub async fn get(&self, league_id: &str) -> RiotApiResponse<LeagueList> {
        tracing::trace!("[LEAGUE-V4 API] get {}", league_id);
        let path = format!("{}/leagues/{}", ROUTE, league_id);

        self.0.get_into(&path).await
    }
}

/// Ranked queues having a league ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Queue {
    RankedSolo5x5,
    RankedFlexSr,
    RankedFlexTt,
}

impl Queue {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RankedSolo5x5 => "RANKED_SOLO_5x5",
            Self::RankedFlexSr => "RANKED_FLEX_SR",
            Self::RankedFlexTt => "RANKED_FLEX_TT",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tier {
    Iron,
    Bronze,
    Silver,
    Gold,
    Platinum,
    Diamond,
    Master,
    Grandmaster,
    Challenger,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Iron => "IRON",
            Self::Bronze => "BRONZE",
            Self::Silver => "SILVER",
            Self::Gold => "GOLD",
            Self::Platinum => "PLATINUM",
            Self::Diamond => "DIAMOND",
            Self::Master => "MASTER",
            Self::Grandmaster => "GRANDMASTER",
            Self::Challenger => "CHALLENGER",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Division {
    I,
    II,
    III,
    IV,
}

impl Division {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::I => "I",
            Self::II => "II",
            Self::III => "III",
            Self::IV => "IV",
        }
    }
}

impl fmt::Display for Queue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Representation of a whole league ladder.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct LeagueList {
    pub league_id: String,
    pub name: String,
    pub queue: String,
    pub tier: String,
    pub entries: Vec<LeagueItem>,
}

/// Representation of the league entry response.
///
/// Entries listed inside a [`LeagueList`] carry neither `queue_type`, `tier`
/// nor `league_id`; those fields stay empty then.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct LeagueItem {
    pub league_id: String,
    pub queue_type: String,
    pub tier: String,
    pub rank: String,
    pub summoner_id: String,
    pub summoner_name: String,
    pub league_points: i32,
    pub wins: i32,
    pub losses: i32,
    pub hot_streak: bool,
    pub veteran: bool,
    pub fresh_blood: bool,
    pub inactive: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mini_series: Option<MiniSeries>,
}

impl LeagueItem {
    pub fn is_ranked_solo_duo(&self) -> bool {
        self.queue_type == Queue::RankedSolo5x5.as_str()
    }

    pub fn is_ranked_flex(&self) -> bool {
        self.queue_type == Queue::RankedFlexSr.as_str()
    }

    pub fn winrate(&self) -> Option<f64> {
        let games = self.wins + self.losses;
        (games > 0).then(|| self.wins as f64 / games as f64)
    }
}

/// Promotion series state.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct MiniSeries {
    /// One char per game: `W`, `L` or `N` (not played yet).
    pub progress: String,
    pub target: i32,
    pub wins: i32,
    pub losses: i32,
}
