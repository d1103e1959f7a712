//! Domain records and query options.

use serde::Serialize;

/// Default page size applied when `limit` is unset.
pub const DEFAULT_LIMIT: u32 = 20;
/// Default result offset applied when `offset` is unset.
pub const DEFAULT_OFFSET: u32 = 0;
/// Default label language applied when `language` is unset.
pub const DEFAULT_LANGUAGE: &str = "fr";

/// Caller-facing query options. All fields are optional; defaults are
/// resolved by [`QueryOptions::resolve`] before a query is built or a
/// cache key is derived.
///
/// Option values are taken as-is: a nonsensical `limit` or `offset` is
/// the caller's responsibility and is interpolated verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryOptions {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub language: Option<String>,
    pub parent_id: Option<String>,
}

impl QueryOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    #[must_use]
    pub fn parent_id(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    /// Apply defaults, producing the normalized form used for query
    /// construction and cache keying.
    #[must_use]
    pub fn resolve(&self) -> ResolvedOptions {
        ResolvedOptions {
            limit: self.limit.unwrap_or(DEFAULT_LIMIT),
            offset: self.offset.unwrap_or(DEFAULT_OFFSET),
            language: self
                .language
                .clone()
                .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
            parent_id: self.parent_id.clone(),
        }
    }
}

/// Fully defaulted query options. Two [`QueryOptions`] values that
/// resolve identically produce the same cache key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOptions {
    pub limit: u32,
    pub offset: u32,
    pub language: String,
    pub parent_id: Option<String>,
}

impl ResolvedOptions {
    /// Deterministic cache key: `limit-offset-language-parent` with
    /// `"root"` standing in for an absent parent.
    #[must_use]
    pub fn cache_key(&self) -> String {
        format!(
            "{}-{}-{}-{}",
            self.limit,
            self.offset,
            self.language,
            self.parent_id.as_deref().unwrap_or("root")
        )
    }
}

/// One geological period as returned to callers.
///
/// `id` and `label` are guaranteed non-empty by the transformer; every
/// other field is copied through only when the upstream row carried it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeologicalPeriod {
    /// Wikidata entity id, e.g. `Q104460`.
    pub id: String,
    /// Label in the requested language (English fallback).
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_period: Option<String>,
    pub child_periods: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_applies_defaults() {
        let resolved = QueryOptions::new().resolve();
        assert_eq!(resolved.limit, 20);
        assert_eq!(resolved.offset, 0);
        assert_eq!(resolved.language, "fr");
        assert_eq!(resolved.parent_id, None);
    }

    #[test]
    fn resolve_keeps_explicit_values() {
        let resolved = QueryOptions::new()
            .limit(10)
            .offset(40)
            .language("en")
            .parent_id("Q104460")
            .resolve();
        assert_eq!(resolved.limit, 10);
        assert_eq!(resolved.offset, 40);
        assert_eq!(resolved.language, "en");
        assert_eq!(resolved.parent_id.as_deref(), Some("Q104460"));
    }

    #[test]
    fn cache_key_is_deterministic_for_equal_defaults() {
        let implicit = QueryOptions::new().resolve().cache_key();
        let explicit = QueryOptions::new()
            .limit(20)
            .offset(0)
            .language("fr")
            .resolve()
            .cache_key();
        assert_eq!(implicit, explicit);
        assert_eq!(implicit, "20-0-fr-root");
    }

    #[test]
    fn cache_key_discriminates_every_dimension() {
        let base = QueryOptions::new().resolve().cache_key();
        assert_ne!(base, QueryOptions::new().limit(10).resolve().cache_key());
        assert_ne!(base, QueryOptions::new().offset(20).resolve().cache_key());
        assert_ne!(
            base,
            QueryOptions::new().language("en").resolve().cache_key()
        );
        assert_ne!(
            base,
            QueryOptions::new().parent_id("Q104460").resolve().cache_key()
        );
    }
}
