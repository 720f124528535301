use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{api::client::ApiClient, types::RiotApiResponse};

const ROUTE: &str = "/lol/summoner/v4/summoners";

#[derive(Debug, Clone)]
pub struct SummonerV4Api(Arc<ApiClient>);

impl SummonerV4Api {
    pub fn new(api_client: Arc<ApiClient>) -> Self {
        Self(api_client)
    }

    /// Get a summoner by its display name. The name is percent-encoded.
    pub async fn get_by_name(&self, name: &str) -> RiotApiResponse<Summoner> {
        tracing::trace!("[SUMMONER-V4 API] get_by_name {}", name);
        let path = format!("{}/by-name/{}", ROUTE, urlencoding::encode(name));

        self.0.get_into(&path).await
    }

    pub async fn get_by_account_id(&self, account_id: &str) -> RiotApiResponse<Summoner> {
        tracing::trace!("[SUMMONER-V4 API] get_by_account_id {}", account_id);
        let path = format!("{}/by-account/{}", ROUTE, account_id);

        self.0.get_into(&path).await
    }

    pub async fn get_by_puuid(&self, puuid: &str) -> RiotApiResponse<Summoner> {
        tracing::trace!("[SUMMONER-V4 API] get_by_puuid {}", puuid);
        let path = format!("{}/by-puuid/{}", ROUTE, puuid);

        self.0.get_into(&path).await
    }

    /// Get a summoner by its encrypted summoner id.
    pub async fn get_by_id(&self, summoner_id: &str) -> RiotApiResponse<Summoner> {
        tracing::trace!("[SUMMONER-V4 API] get_by_id {}", summoner_id);
        let path = format!("{}/{}", ROUTE, summoner_id);

        self.0.get_into(&path).await
    }
}

/// Representation of the summoner data response.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Summoner {
    pub id: String,
    pub account_id: String,
    pub puuid: String,
    pub name: String,
    pub profile_icon_id: i32,
    /// Epoch milliseconds of the last profile change.
    pub revision_date: i64,
    pub summoner_level: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::lol::test_support::check_operation;

    fn sample() -> Summoner {
        Summoner {
            id: "summoner-id".to_string(),
            account_id: "account-id".to_string(),
            puuid: "puuid".to_string(),
            name: "Le Conservateur".to_string(),
            profile_icon_id: 4568,
            revision_date: 1_700_000_000_000,
            summoner_level: 312,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn get_by_name() {
        check_operation(
            "/lol/summoner/v4/summoners/by-name/Le%20Conservateur",
            sample(),
            |c| async move { c.summoner.get_by_name("Le Conservateur").await },
        )
        .await;
    }

    #[tokio::test(start_paused = true)]
    async fn get_by_account_id() {
        check_operation(
            "/lol/summoner/v4/summoners/by-account/accountID",
            sample(),
            |c| async move { c.summoner.get_by_account_id("accountID").await },
        )
        .await;
    }

    #[tokio::test(start_paused = true)]
    async fn get_by_puuid() {
        check_operation(
            "/lol/summoner/v4/summoners/by-puuid/puuid",
            sample(),
            |c| async move { c.summoner.get_by_puuid("puuid").await },
        )
        .await;
    }

    #[tokio::test(start_paused = true)]
    async fn get_by_id() {
        check_operation("/lol/summoner/v4/summoners/id", Summoner::default(), |c| async move {
            c.summoner.get_by_id("id").await
        })
        .await;
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let summoner: Summoner =
            serde_json::from_str(r#"{"name":"Chalop","summonerLevel":30}"#).unwrap();

        assert_eq!(summoner.name, "Chalop");
        assert_eq!(summoner.summoner_level, 30);
        assert!(summoner.puuid.is_empty());
    }
}
