use std::sync::Arc;

use crate::{api::client::ApiClient, types::RiotApiResponse};

#[derive(Debug, Clone)]
pub struct ThirdPartyCodeV4Api(Arc<ApiClient>);

impl ThirdPartyCodeV4Api {
    pub fn new(api_client: Arc<ApiClient>) -> Self {
        Self(api_client)
    }

    /// Verification code a summoner has set in its client settings.
    pub async fn get(&self, summoner_id: &str) -> RiotApiResponse<String> {
        tracing::trace!("[THIRD-PARTY-CODE-V4 API] get {}", summoner_id);
        let path = format!("/lol/platform/v4/third-party-code/by-summoner/{}", summoner_id);

        self.0.get_into(&path).await
    }
}
