use reqwest::{StatusCode, header::InvalidHeaderValue};
use thiserror::Error;

use crate::api::transport::TransportError;

#[derive(Debug, Error)]
pub enum RiotApiError {
    #[error("Bad request")]
    BadRequest,

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Forbidden")]
    Forbidden,

    #[error("Not found")]
    NotFound,

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Unsupported media type")]
    UnsupportedMediaType,

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Internal server error")]
    InternalServerError,

    #[error("Bad gateway")]
    BadGateway,

    #[error("Service unavailable")]
    ServiceUnavailable,

    #[error("Gateway timeout")]
    GatewayTimeout,

    #[error("HTTP status {0}: unknown error reason")]
    UnknownStatus(u16),

    #[error("Transport error: {0}")]
    Transport(TransportError),

    #[error("Decoding raw response error: {0}")]
    Decode(serde_json::Error),

    #[error("Encoding request body error: {0}")]
    Encode(serde_json::Error),

    #[error("Invalid API key header value: {0}")]
    InvalidApiKey(#[from] InvalidHeaderValue),

    #[error("Invalid Retry-After header: {0:?}")]
    InvalidRetryAfter(String),

    /// Not a failure: marks the graceful end of a stream.
    #[error("End of stream")]
    EndOfStream,
}

impl RiotApiError {
    /// Message attached to statuses missing from the status table.
    pub const UNKNOWN_REASON: &'static str = "unknown error reason";

    /// Map a non-2xx status to its domain error.
    pub fn from_status(status: StatusCode) -> Self {
        match status.as_u16() {
            400 => Self::BadRequest,
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            405 => Self::MethodNotAllowed,
            415 => Self::UnsupportedMediaType,
            429 => Self::RateLimitExceeded,
            500 => Self::InternalServerError,
            502 => Self::BadGateway,
            503 => Self::ServiceUnavailable,
            504 => Self::GatewayTimeout,
            code => Self::UnknownStatus(code),
        }
    }

    /// HTTP status behind this error, when it came from a response.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::BadRequest => Some(400),
            Self::Unauthorized => Some(401),
            Self::Forbidden => Some(403),
            Self::NotFound => Some(404),
            Self::MethodNotAllowed => Some(405),
            Self::UnsupportedMediaType => Some(415),
            Self::RateLimitExceeded => Some(429),
            Self::InternalServerError => Some(500),
            Self::BadGateway => Some(502),
            Self::ServiceUnavailable => Some(503),
            Self::GatewayTimeout => Some(504),
            Self::UnknownStatus(code) => Some(*code),
            _ => None,
        }
    }

    pub fn is_end_of_stream(&self) -> bool {
        matches!(self, Self::EndOfStream)
    }
}

/// A call to Riot API can either result in a success with the success type or fail with a [`RiotApiError`].
pub type RiotApiResponse<T> = Result<T, RiotApiError>;
