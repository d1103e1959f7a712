//! # Wikistrata Core
//!
//! Resilient client for the Wikidata SPARQL endpoint, specialized to
//! geological-period data.
//!
//! ## Overview
//!
//! This crate provides the building blocks of the client:
//!
//! - **Typed domain records** for geological periods and query options
//! - **SPARQL query builder** producing deterministic query strings
//! - **Response transformer** validating untrusted tabular results
//! - **Error classifier** mapping transport failures to stable codes
//! - **Retry policy** with fixed backoff for transient upstream failures
//! - **Result cache** keyed by normalized query options with lazy TTL
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`cache`] | In-memory result cache with time-based expiry |
//! | [`client`] | Query client orchestrating the fetch pipeline |
//! | [`domain`] | Domain records and query options |
//! | [`error`] | Error taxonomy and classification |
//! | [`http_client`] | HTTP client abstraction |
//! | [`retry`] | Retry configuration |
//! | [`sparql`] | SPARQL query construction |
//! | [`transform`] | Raw binding transformation |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use wikistrata_core::{QueryOptions, WikidataClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = WikidataClient::default();
//!
//!     let periods = client
//!         .fetch_periods(QueryOptions::new().language("en").limit(10))
//!         .await?;
//!
//!     for period in &periods {
//!         println!("{} ({})", period.label, period.id);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every failure path yields a [`WikidataError`] carrying a stable code
//! the caller can branch on:
//!
//! ```rust
//! use wikistrata_core::{WikidataError, WikidataErrorKind};
//!
//! fn handle_error(error: &WikidataError) {
//!     match error.kind() {
//!         WikidataErrorKind::RateLimit => {
//!             // Wait and retry
//!         }
//!         WikidataErrorKind::ServiceUnavailable => {
//!             // Upstream outage
//!         }
//!         WikidataErrorKind::InvalidPeriodData => {
//!             // Upstream sent a row without required fields
//!         }
//!         _ => {}
//!     }
//! }
//! ```

pub mod cache;
pub mod client;
pub mod domain;
pub mod error;
pub mod http_client;
pub mod retry;
pub mod sparql;
pub mod transform;

// Re-export commonly used types at crate root for convenience

pub use cache::PeriodCache;
pub use client::{ClientConfig, WikidataClient};
pub use domain::{GeologicalPeriod, QueryOptions, ResolvedOptions};
pub use error::{WikidataError, WikidataErrorKind};
pub use http_client::{
    HttpClient, HttpError, HttpRequest, HttpResponse, NoopHttpClient, ReqwestHttpClient,
};
pub use retry::RetryConfig;
pub use sparql::build_query;
pub use transform::{parse_response, transform_bindings, BindingValue, RawBinding};
