use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{api::client::ApiClient, types::RiotApiResponse};

#[derive(Debug, Clone)]
pub struct StatusV3Api(Arc<ApiClient>);

impl StatusV3Api {
    pub fn new(api_client: Arc<ApiClient>) -> Self {
        Self(api_client)
    }

    /// Status of the services of the client's region.
    pub async fn get(&self) -> RiotApiResponse<Status> {
        tracing::trace!("[STATUS-V3 API] get");

        self.0.get_into("/lol/status/v3/shard-data").await
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Status {
    pub name: String,
    pub slug: String,
    pub hostname: String,
    pub region_tag: String,
    pub locales: Vec<String>,
    pub services: Vec<Service>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Service {
    pub name: String,
    pub slug: String,
    /// `online`, `offline`...
    pub status: String,
    pub incidents: Vec<Incident>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Incident {
    pub id: i64,
    pub active: bool,
    pub created_at: String,
    pub updates: Vec<Message>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Message {
    pub id: String,
    pub author: String,
    pub content: String,
    pub severity: String,
    pub created_at: String,
    pub updated_at: String,
    pub translations: Vec<Translation>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Translation {
    pub locale: String,
    pub heading: String,
    pub content: String,
}

impl Status {
    /// Services currently not reported as online.
    pub fn degraded_services(&self) -> impl Iterator<Item = &Service> {
        self.services.iter().filter(|s| s.status != "online")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::lol::test_support::check_operation;

    fn sample() -> Status {
        Status {
            name: "EU West".to_string(),
            slug: "euw".to_string(),
            hostname: "prod.euw1.lol.riotgames.com".to_string(),
            region_tag: "eu".to_string(),
            locales: vec!["en_GB".to_string(), "fr_FR".to_string()],
            services: vec![
                Service {
                    name: "Game".to_string(),
                    slug: "game".to_string(),
                    status: "online".to_string(),
                    incidents: vec![],
                },
                Service {
                    name: "Store".to_string(),
                    slug: "store".to_string(),
                    status: "offline".to_string(),
                    incidents: vec![Incident {
                        id: 3,
                        active: true,
                        created_at: "2019-04-17T10:02:42.101Z".to_string(),
                        updates: vec![Message {
                            id: "5cb6f".to_string(),
                            author: "Riot".to_string(),
                            content: "Store is down".to_string(),
                            severity: "info".to_string(),
                            translations: vec![Translation {
                                locale: "fr_FR".to_string(),
                                heading: "Boutique".to_string(),
                                content: "La boutique est indisponible".to_string(),
                            }],
                            ..Default::default()
                        }],
                    }],
                },
            ],
        }
    }

    #[tokio::test(start_paused = true)]
    async fn get() {
        check_operation("/lol/status/v3/shard-data", sample(), |c| async move {
            c.status.get().await
        })
        .await;
    }

    #[test]
    fn degraded_services_skips_online_ones() {
        let status = sample();
        let degraded: Vec<_> = status.degraded_services().map(|s| s.slug.as_str()).collect();
        assert_eq!(degraded, vec!["store"]);
    }
}
