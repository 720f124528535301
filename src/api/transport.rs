//! HTTP transport seam used by [`ApiClient`](super::client::ApiClient).
//!
//! The engine only needs "send a request, get a response or an error", so the
//! transport is a small object-safe trait. [`ReqwestTransport`] is the default
//! implementation; tests plug in scripted transports.

use std::{error::Error as ErrorT, fmt::Debug};

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{Method, StatusCode, header::HeaderMap};

pub type TransportError = Box<dyn ErrorT + Send + Sync + 'static>;

/// A fully prepared request. Kept cloneable so the engine can replay it.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    pub body: Option<Bytes>,
}

/// A response whose body has already been read.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl HttpResponse {
    pub fn new(status: StatusCode, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// Trait implemented by structures capable of performing raw HTTP requests.
#[async_trait]
pub trait Transport: Send + Sync + Debug {
    async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reuse an already configured client (timeouts, proxies...).
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = self
            .client
            .request(request.method.clone(), &request.url)
            .headers(request.headers.clone());
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let res = builder.send().await?;
        let status = res.status();
        let headers = res.headers().clone();
        let body = res.bytes().await?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
