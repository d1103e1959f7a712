//! Parsing and transformation of SPARQL result payloads.
//!
//! The endpoint's JSON is treated as untrusted: every field is optional
//! at the serde level, and the transformer decides which absences are
//! tolerable and which fail the whole batch.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::domain::GeologicalPeriod;
use crate::error::WikidataError;

/// One variable binding in a SPARQL result row.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct BindingValue {
    pub value: String,
    #[serde(rename = "type")]
    pub value_type: Option<String>,
    #[serde(rename = "xml:lang")]
    pub language: Option<String>,
}

/// One result row: variable name to bound value.
pub type RawBinding = BTreeMap<String, BindingValue>;

#[derive(Debug, Deserialize)]
struct SparqlResponse {
    results: Option<SparqlResults>,
}

#[derive(Debug, Deserialize)]
struct SparqlResults {
    bindings: Option<Vec<RawBinding>>,
}

/// Parse a raw response body into result rows.
///
/// Any body that is not JSON of the expected envelope shape is an
/// `INVALID_RESPONSE`; a well-formed envelope with no rows is an empty
/// result, not an error.
pub fn parse_response(body: &str) -> Result<Vec<RawBinding>, WikidataError> {
    let response: SparqlResponse = serde_json::from_str(body).map_err(|e| {
        WikidataError::invalid_response(format!("malformed SPARQL response: {e}"))
    })?;

    response
        .results
        .and_then(|r| r.bindings)
        .ok_or_else(|| {
            WikidataError::invalid_response("SPARQL response missing results.bindings")
        })
}

/// Transform result rows into geological periods.
///
/// `item` and `itemLabel` are mandatory in every row; a row missing
/// either fails the whole batch rather than silently shrinking it.
pub fn transform_bindings(bindings: Vec<RawBinding>) -> Result<Vec<GeologicalPeriod>, WikidataError> {
    bindings.into_iter().map(transform_binding).collect()
}

fn transform_binding(binding: RawBinding) -> Result<GeologicalPeriod, WikidataError> {
    let item = required_value(&binding, "item")?;
    let label = required_value(&binding, "itemLabel")?;

    let id = entity_id(item).ok_or_else(|| {
        WikidataError::transform(format!("cannot extract entity id from URI '{item}'"))
    })?;

    Ok(GeologicalPeriod {
        id: id.to_string(),
        label: label.to_string(),
        description: optional_value(&binding, "description"),
        start_date: optional_value(&binding, "startDate"),
        end_date: optional_value(&binding, "endDate"),
        parent_period: optional_value(&binding, "parentPeriod")
            .map(|uri| entity_id(&uri).map(str::to_string).unwrap_or(uri)),
        child_periods: Vec::new(),
    })
}

fn required_value<'a>(binding: &'a RawBinding, name: &str) -> Result<&'a str, WikidataError> {
    binding
        .get(name)
        .map(|v| v.value.as_str())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| {
            WikidataError::invalid_period_data(format!("binding missing required field '{name}'"))
        })
}

fn optional_value(binding: &RawBinding, name: &str) -> Option<String> {
    binding
        .get(name)
        .map(|v| v.value.clone())
        .filter(|v| !v.is_empty())
}

/// Last path segment of an entity URI, or the input itself when it has
/// no slashes (a bare id like `Q104460`).
fn entity_id(uri: &str) -> Option<&str> {
    uri.rsplit('/').next().filter(|segment| !segment.is_empty())
}
