use std::{fmt, num::NonZeroU32, sync::Arc, time::Duration};

use bytes::Bytes;
use governor::{
    Quota, RateLimiter,
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
};
use reqwest::{
    Method, StatusCode,
    header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue},
};
use serde::{Serialize, de::DeserializeOwned};

use crate::{
    region::Region,
    types::{RiotApiError, RiotApiResponse},
};

use super::{
    metrics::RequestMetrics,
    transport::{HttpRequest, HttpResponse, Transport},
};

pub const SCHEME: &str = "https";
pub const BASE_HOST: &str = "api.riotgames.com";
pub const API_TOKEN_HEADER: &str = "X-Riot-Token";

const UNAVAILABLE_RETRY_DELAY: Duration = Duration::from_secs(1);

type DirectLimiter = RateLimiter<NotKeyed, InMemoryState, DefaultClock>;

/// Shared request pipeline behind every resource client.
pub struct ApiClient {
    region: Region,
    /// Riot API Key
    key: String,
    transport: Arc<dyn Transport>,
    limiter: Option<DirectLimiter>,
    max_rate_limit_retries: Option<u32>,
    pub metrics: Arc<RequestMetrics>,
}

impl ApiClient {
    pub fn new(region: Region, api_key: String, transport: Arc<dyn Transport>) -> Self {
        Self {
            region,
            key: api_key,
            transport,
            limiter: None,
            max_rate_limit_retries: None,
            metrics: RequestMetrics::new(region.as_str()),
        }
    }

    /// Throttle outgoing requests before the Riot API has to answer with a 429.
    pub fn with_rate_limit(mut self, per_second: NonZeroU32) -> Self {
        self.limiter = Some(RateLimiter::direct(Quota::per_second(per_second)));
        self
    }

    /// Give up with [`RiotApiError::RateLimitExceeded`] after `max` consecutive 429 answers.
    pub fn with_max_rate_limit_retries(mut self, max: u32) -> Self {
        self.max_rate_limit_retries = Some(max);
        self
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn url_for(&self, endpoint: &str) -> String {
        format!("{}://{}.{}{}", SCHEME, self.region, BASE_HOST, endpoint)
    }

    pub async fn get_into<T: DeserializeOwned>(&self, endpoint: &str) -> RiotApiResponse<T> {
        let res = self.execute(Method::GET, endpoint, None).await?;
        decode(endpoint, &res.body)
    }

    pub async fn post_into<B, T>(&self, endpoint: &str, body: &B) -> RiotApiResponse<T>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        let payload = encode(endpoint, body)?;
        let res = self.execute(Method::POST, endpoint, Some(payload)).await?;
        decode(endpoint, &res.body)
    }

    /// The response body of an update carries nothing useful and is dropped.
    pub async fn put<B>(&self, endpoint: &str, body: &B) -> RiotApiResponse<()>
    where
        B: Serialize + Sync + ?Sized,
    {
        let payload = encode(endpoint, body)?;
        self.execute(Method::PUT, endpoint, Some(payload)).await?;
        Ok(())
    }

    /// Send a request and classify the answer.
    ///
    /// A 503 is retried once after one second. A 429 waits for the amount of
    /// seconds announced in `Retry-After` then starts over, as many times as the
    /// server asks unless a cap was configured. Any other non-2xx status is
    /// mapped through [`RiotApiError::from_status`].
    pub async fn execute(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<Bytes>,
    ) -> RiotApiResponse<HttpResponse> {
        let request = self.new_request(method, endpoint, body)?;
        let mut rate_limited: u32 = 0;

        loop {
            let mut response = self.send(&request).await?;

            if response.status == StatusCode::SERVICE_UNAVAILABLE {
                tracing::info!(region = %self.region, endpoint, "service unavailable, retrying");
                tokio::time::sleep(UNAVAILABLE_RETRY_DELAY).await;
                response = self.send(&request).await?;
            }

            if response.status == StatusCode::TOO_MANY_REQUESTS {
                let seconds = retry_after(&response)?;

                if let Some(max) = self.max_rate_limit_retries {
                    if rate_limited >= max {
                        tracing::error!(
                            region = %self.region,
                            endpoint,
                            "rate limited {} times in a row, giving up",
                            rate_limited + 1
                        );
                        return Err(RiotApiError::RateLimitExceeded);
                    }
                }

                tracing::info!(region = %self.region, endpoint, "rate limited, waiting {} seconds", seconds);
                tokio::time::sleep(Duration::from_secs(seconds)).await;
                rate_limited += 1;
                continue;
            }

            if !response.status.is_success() {
                tracing::error!(region = %self.region, endpoint, "error response: {}", response.status);
                return Err(RiotApiError::from_status(response.status));
            }

            return Ok(response);
        }
    }

    fn new_request(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<Bytes>,
    ) -> RiotApiResponse<HttpRequest> {
        let mut headers = HeaderMap::new();
        let mut token = HeaderValue::from_str(&self.key)?;
        token.set_sensitive(true);
        headers.insert(API_TOKEN_HEADER, token);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if body.is_some() {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }

        Ok(HttpRequest {
            method,
            url: self.url_for(endpoint),
            headers,
            body,
        })
    }

    async fn send(&self, request: &HttpRequest) -> RiotApiResponse<HttpResponse> {
        if let Some(limiter) = &self.limiter {
            limiter.until_ready().await;
        }
        self.metrics.inc();

        self.transport.send(request).await.map_err(|e| {
            tracing::error!(region = %self.region, url = %request.url, "transport error: {}", e);
            RiotApiError::Transport(e)
        })
    }
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("region", &self.region)
            .field("key", &"<redacted>")
            .field("transport", &self.transport)
            .field("rate_limited", &self.limiter.is_some())
            .field("max_rate_limit_retries", &self.max_rate_limit_retries)
            .finish()
    }
}

fn retry_after(response: &HttpResponse) -> RiotApiResponse<u64> {
    let raw = response.header("Retry-After").unwrap_or_default();
    raw.trim()
        .parse::<i64>()
        // A negative delay means "retry now".
        .map(|seconds| seconds.max(0) as u64)
        .map_err(|_| {
            tracing::error!("unparsable Retry-After header: {:?}", raw);
            RiotApiError::InvalidRetryAfter(raw.to_string())
        })
}

fn encode<B: Serialize + ?Sized>(endpoint: &str, body: &B) -> RiotApiResponse<Bytes> {
    serde_json::to_vec(body).map(Bytes::from).map_err(|e| {
        tracing::debug!(endpoint, "failed to encode request body: {}", e);
        RiotApiError::Encode(e)
    })
}

fn decode<T: DeserializeOwned>(endpoint: &str, raw: &[u8]) -> RiotApiResponse<T> {
    serde_json::from_slice(raw).map_err(|e| {
        tracing::debug!(endpoint, "failed to decode response body: {}", e);
        RiotApiError::Decode(e)
    })
}
