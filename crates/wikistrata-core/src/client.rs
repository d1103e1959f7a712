//! Query client orchestrating cache, retry, transport, and transform.

use std::sync::Arc;
use std::time::Duration;

use crate::cache::{PeriodCache, DEFAULT_CACHE_TTL};
use crate::domain::{GeologicalPeriod, QueryOptions};
use crate::error::WikidataError;
use crate::http_client::{HttpClient, HttpRequest, HttpResponse, ReqwestHttpClient};
use crate::retry::RetryConfig;
use crate::sparql::build_query;
use crate::transform::{parse_response, transform_bindings};

/// Public SPARQL endpoint of the Wikidata Query Service.
pub const DEFAULT_ENDPOINT: &str = "https://query.wikidata.org/sparql";

/// Per-attempt request timeout.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client configuration. Defaults match the public Wikidata endpoint.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub endpoint: String,
    pub request_timeout: Duration,
    pub cache_ttl: Duration,
    pub retry: RetryConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            cache_ttl: DEFAULT_CACHE_TTL,
            retry: RetryConfig::default(),
        }
    }
}

/// Client for fetching geological periods from Wikidata.
///
/// Cheap to clone: clones share the same transport and result cache, so
/// handing a clone to each task keeps a single cache for the process.
#[derive(Clone)]
pub struct WikidataClient {
    http: Arc<dyn HttpClient>,
    cache: PeriodCache,
    config: Arc<ClientConfig>,
}

impl WikidataClient {
    /// Client against the public endpoint with default policies.
    pub fn new() -> Self {
        Self::with_http_client(Arc::new(ReqwestHttpClient::new()), ClientConfig::default())
    }

    pub fn with_config(config: ClientConfig) -> Self {
        Self::with_http_client(Arc::new(ReqwestHttpClient::new()), config)
    }

    /// Inject a custom transport. This is the seam tests use.
    pub fn with_http_client(http: Arc<dyn HttpClient>, config: ClientConfig) -> Self {
        let cache = PeriodCache::new(config.cache_ttl);
        Self {
            http,
            cache,
            config: Arc::new(config),
        }
    }

    /// Fetch geological periods matching the given options.
    ///
    /// Serves from cache when a fresh entry exists; otherwise queries
    /// the endpoint with the configured retry policy and caches the
    /// transformed result.
    pub async fn fetch_periods(
        &self,
        options: QueryOptions,
    ) -> Result<Vec<GeologicalPeriod>, WikidataError> {
        let resolved = options.resolve();
        let cache_key = resolved.cache_key();

        if let Some(periods) = self.cache.get(&cache_key).await {
            tracing::debug!(%cache_key, count = periods.len(), "cache hit");
            return Ok(periods);
        }

        let query = build_query(&resolved);
        let response = self.execute_with_retry(&query).await?;

        let bindings = parse_response(&response.body)?;
        let periods = transform_bindings(bindings)?;

        tracing::debug!(%cache_key, count = periods.len(), "caching query result");
        self.cache.insert(cache_key, periods.clone()).await;

        Ok(periods)
    }

    /// Fetch the direct subdivisions of a period.
    pub async fn fetch_children(
        &self,
        parent_id: &str,
        options: QueryOptions,
    ) -> Result<Vec<GeologicalPeriod>, WikidataError> {
        self.fetch_periods(options.parent_id(parent_id)).await
    }

    async fn execute_with_retry(&self, query: &str) -> Result<HttpResponse, WikidataError> {
        let retry = &self.config.retry;
        let url = format!(
            "{}?query={}&format=json",
            self.config.endpoint,
            urlencoding::encode(query)
        );

        let attempts = retry.max_attempts.max(1);

        for attempt in 1..=attempts {
            let request = HttpRequest::get(&url)
                .with_header("accept", "application/sparql-results+json")
                .with_timeout_ms(self.config.request_timeout.as_millis() as u64);

            match self.http.execute(request).await {
                Ok(response) if response.is_success() => return Ok(response),
                Ok(response) => {
                    let status = response.status;
                    if retry.should_retry_status(status) && attempt < attempts {
                        tracing::warn!(status, attempt, "transient status, retrying");
                        tokio::time::sleep(retry.retry_delay).await;
                        continue;
                    }
                    return Err(WikidataError::from_status(status));
                }
                Err(transport) => {
                    if attempt < attempts {
                        tracing::warn!(
                            error = %transport,
                            attempt,
                            "transport failure, retrying"
                        );
                        tokio::time::sleep(retry.retry_delay).await;
                        continue;
                    }
                    return Err(WikidataError::from_transport(transport));
                }
            }
        }

        // The last iteration always returns; this is unreachable.
        Err(WikidataError::unknown("retry loop exited without a result"))
    }
}

impl Default for WikidataClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for WikidataClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WikidataClient")
            .field("endpoint", &self.config.endpoint)
            .finish_non_exhaustive()
    }
}
