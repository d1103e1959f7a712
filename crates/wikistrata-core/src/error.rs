//! Error taxonomy and classification.
//!
//! Every failure surfaced by the client is a [`WikidataError`] carrying a
//! stable [`code`](WikidataError::code) string the boundary consumer can
//! branch on. Classification of a transport failure happens once per
//! failed attempt, after the retry budget has made its decision.

use std::fmt::{Display, Formatter};

use crate::http_client::HttpError;

/// Classified error category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WikidataErrorKind {
    /// Upstream rejected the query (HTTP 400).
    InvalidRequest,
    /// Upstream rate limiting (HTTP 429).
    RateLimit,
    /// Upstream temporarily down (HTTP 503/504).
    ServiceUnavailable,
    /// Endpoint path not found (HTTP 404), usually a proxy misconfiguration.
    EndpointNotFound,
    /// Any other HTTP status, or a transport failure with no response.
    ApiError,
    /// A 2xx response whose body lacks the expected tabular shape.
    InvalidResponse,
    /// A result row missing a required field.
    InvalidPeriodData,
    /// A row that carried the required fields but could not be mapped.
    TransformError,
    /// A failure outside the transport/validation taxonomy.
    Unknown,
}

/// Terminal error type for all client operations.
#[derive(Debug, Clone)]
pub struct WikidataError {
    kind: WikidataErrorKind,
    message: String,
    source: Option<HttpError>,
}

impl WikidataError {
    fn new(kind: WikidataErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::new(WikidataErrorKind::InvalidResponse, message)
    }

    pub fn invalid_period_data(message: impl Into<String>) -> Self {
        Self::new(WikidataErrorKind::InvalidPeriodData, message)
    }

    pub fn transform(message: impl Into<String>) -> Self {
        Self::new(WikidataErrorKind::TransformError, message)
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self::new(WikidataErrorKind::Unknown, message)
    }

    /// Classify a response status, most specific first.
    #[must_use]
    pub fn from_status(status: u16) -> Self {
        match status {
            400 => Self::new(
                WikidataErrorKind::InvalidRequest,
                "the query was rejected by the Wikidata endpoint",
            ),
            429 => Self::new(
                WikidataErrorKind::RateLimit,
                "too many requests; try again later",
            ),
            503 | 504 => Self::new(
                WikidataErrorKind::ServiceUnavailable,
                "the Wikidata endpoint is temporarily unavailable",
            ),
            404 => Self::new(
                WikidataErrorKind::EndpointNotFound,
                "the Wikidata endpoint was not found; check the endpoint URL",
            ),
            other => Self::new(
                WikidataErrorKind::ApiError,
                format!("the Wikidata endpoint returned status {other}"),
            ),
        }
    }

    /// Classify a transport failure that produced no HTTP response.
    #[must_use]
    pub fn from_transport(error: HttpError) -> Self {
        Self {
            kind: WikidataErrorKind::ApiError,
            message: format!("failed to reach the Wikidata endpoint: {}", error.message()),
            source: Some(error),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> WikidataErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Stable code string consumed by boundary callers.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self.kind {
            WikidataErrorKind::InvalidRequest => "INVALID_REQUEST",
            WikidataErrorKind::RateLimit => "RATE_LIMIT",
            WikidataErrorKind::ServiceUnavailable => "SERVICE_UNAVAILABLE",
            WikidataErrorKind::EndpointNotFound => "ENDPOINT_NOT_FOUND",
            WikidataErrorKind::ApiError => "API_ERROR",
            WikidataErrorKind::InvalidResponse => "INVALID_RESPONSE",
            WikidataErrorKind::InvalidPeriodData => "INVALID_PERIOD_DATA",
            WikidataErrorKind::TransformError => "TRANSFORM_ERROR",
            WikidataErrorKind::Unknown => "UNKNOWN_ERROR",
        }
    }
}

impl Display for WikidataError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code())
    }
}

impl std::error::Error for WikidataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_statuses_most_specific_first() {
        assert_eq!(
            WikidataError::from_status(400).kind(),
            WikidataErrorKind::InvalidRequest
        );
        assert_eq!(
            WikidataError::from_status(429).kind(),
            WikidataErrorKind::RateLimit
        );
        assert_eq!(
            WikidataError::from_status(503).kind(),
            WikidataErrorKind::ServiceUnavailable
        );
        assert_eq!(
            WikidataError::from_status(504).kind(),
            WikidataErrorKind::ServiceUnavailable
        );
        assert_eq!(
            WikidataError::from_status(404).kind(),
            WikidataErrorKind::EndpointNotFound
        );
        assert_eq!(
            WikidataError::from_status(500).kind(),
            WikidataErrorKind::ApiError
        );
    }

    #[test]
    fn transport_failures_classify_as_api_error() {
        let error = WikidataError::from_transport(HttpError::new("connection refused"));
        assert_eq!(error.kind(), WikidataErrorKind::ApiError);
        assert_eq!(error.code(), "API_ERROR");
        assert!(error.message().contains("connection refused"));
    }

    #[test]
    fn codes_are_stable_strings() {
        assert_eq!(WikidataError::from_status(429).code(), "RATE_LIMIT");
        assert_eq!(
            WikidataError::invalid_response("bad shape").code(),
            "INVALID_RESPONSE"
        );
        assert_eq!(
            WikidataError::invalid_period_data("missing label").code(),
            "INVALID_PERIOD_DATA"
        );
        assert_eq!(WikidataError::transform("bad uri").code(), "TRANSFORM_ERROR");
        assert_eq!(WikidataError::unknown("boom").code(), "UNKNOWN_ERROR");
    }
}
