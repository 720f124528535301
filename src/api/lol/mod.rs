use std::sync::Arc;

use crate::{config::Config, region::Region};

use super::{
    client::ApiClient,
    transport::{ReqwestTransport, Transport},
};

pub mod champion_mastery_v4;
pub mod champion_v3;
pub mod league_v4;
pub mod match_v4;
pub mod spectator_v4;
pub mod status_v3;
pub mod summoner_v4;
pub mod third_party_code_v4;
pub mod tournament_v4;

pub use champion_mastery_v4::ChampionMasteryV4Api;
pub use champion_v3::ChampionV3Api;
pub use league_v4::LeagueV4Api;
pub use match_v4::MatchV4Api;
pub use spectator_v4::SpectatorV4Api;
pub use status_v3::StatusV3Api;
pub use summoner_v4::SummonerV4Api;
pub use third_party_code_v4::ThirdPartyCodeV4Api;
pub use tournament_v4::TournamentV4Api;

/// High level client exposing every LoL API group for one region.
///
/// All groups share the same [`ApiClient`], so retries, rate limiting and
/// metrics apply uniformly whichever group a call goes through.
#[derive(Debug, Clone)]
pub struct RiotClient {
    api: Arc<ApiClient>,
    pub summoner: SummonerV4Api,
    pub champion_mastery: ChampionMasteryV4Api,
    pub champion: ChampionV3Api,
    pub league: LeagueV4Api,
    pub status: StatusV3Api,
    pub matches: MatchV4Api,
    pub spectator: SpectatorV4Api,
    pub tournament: TournamentV4Api,
    pub third_party_code: ThirdPartyCodeV4Api,
}

impl RiotClient {
    pub fn new(region: Region, api_key: impl Into<String>, transport: Arc<dyn Transport>) -> Self {
        Self::from_api_client(ApiClient::new(region, api_key.into(), transport))
    }

    /// Build a client talking through reqwest, with the options of `config` applied.
    pub fn from_config(config: &Config) -> Self {
        let mut api = ApiClient::new(
            config.region,
            config.api_key.clone(),
            Arc::new(ReqwestTransport::new()),
        );
        if let Some(per_second) = config.rate_limit_per_second {
            api = api.with_rate_limit(per_second);
        }
        if let Some(max) = config.max_rate_limit_retries {
            api = api.with_max_rate_limit_retries(max);
        }

        Self::from_api_client(api)
    }

    pub fn from_api_client(api: ApiClient) -> Self {
        let api = Arc::new(api);

        Self {
            summoner: SummonerV4Api::new(api.clone()),
            champion_mastery: ChampionMasteryV4Api::new(api.clone()),
            champion: ChampionV3Api::new(api.clone()),
            league: LeagueV4Api::new(api.clone()),
            status: StatusV3Api::new(api.clone()),
            matches: MatchV4Api::new(api.clone()),
            spectator: SpectatorV4Api::new(api.clone()),
            tournament: TournamentV4Api::new(api.clone()),
            third_party_code: ThirdPartyCodeV4Api::new(api.clone()),
            api,
        }
    }

    pub fn region(&self) -> Region {
        self.api.region()
    }

    /// Amount of requests sent so far, retries included.
    pub fn request_count(&self) -> u64 {
        self.api.metrics.count()
    }

    /// Spawn a task logging periodic metrics about requests.
    pub fn start_metrics_logging(&self) {
        let metrics = self.api.metrics.clone();
        tokio::spawn(async move { metrics.log_loop().await });
    }
}


#[cfg(test)]
mod tests {
    use std::num::NonZeroU32;

    use super::{test_support::client, *};
    use crate::api::transport::mock::*;

    #[tokio::test]
    async fn groups_share_one_pipeline() {
        let transport = MockTransport::always(json_reply(&"code", 200));
        let riot = client(transport.clone());

        riot.third_party_code.get("id").await.unwrap();
        riot.third_party_code.get("id").await.unwrap();

        assert_eq!(riot.request_count(), 2);
        assert_eq!(riot.region(), Region::EUW1);
    }

    #[test]
    fn from_config_applies_region() {
        let config = Config {
            api_key: "RGAPI-TEST".to_string(),
            region: Region::KR,
            rate_limit_per_second: NonZeroU32::new(20),
            max_rate_limit_retries: Some(3),
        };

        let riot = RiotClient::from_config(&config);

        assert_eq!(riot.region(), Region::KR);
        assert_eq!(riot.request_count(), 0);
    }
}
