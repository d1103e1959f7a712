//! SPARQL query construction for geological-period lookups.

use crate::domain::ResolvedOptions;

/// Top-level eons seeding a root query (Hadean through Phanerozoic).
const ROOT_EON_IDS: [&str; 4] = ["Q104460", "Q104168", "Q104162", "Q101313"];

/// Build the SPARQL query for the given resolved options.
///
/// Pure string assembly: equal options always produce an identical
/// query, which keeps cache keys honest. Without a parent the query
/// seeds from the top-level eons; with one it selects direct parts of
/// that entity (P361).
pub fn build_query(options: &ResolvedOptions) -> String {
    let scope = match &options.parent_id {
        Some(parent_id) => format!("?item wdt:P361 wd:{parent_id}."),
        None => {
            let seeds = ROOT_EON_IDS
                .iter()
                .map(|id| format!("wd:{id}"))
                .collect::<Vec<_>>()
                .join(" ");
            format!("VALUES ?item {{ {seeds} }}")
        }
    };

    format!(
        "SELECT ?item ?itemLabel ?description ?startDate ?endDate ?parentPeriod WHERE {{\n  \
         {scope}\n  \
         OPTIONAL {{ ?item wdt:P580 ?startDate. }}\n  \
         OPTIONAL {{ ?item wdt:P582 ?endDate. }}\n  \
         OPTIONAL {{ ?item schema:description ?description. FILTER(LANG(?description) = \"{language}\") }}\n  \
         OPTIONAL {{ ?item wdt:P361 ?parentPeriod. }}\n  \
         SERVICE wikibase:label {{ bd:serviceParam wikibase:language \"{language},en\". }}\n\
         }}\n\
         ORDER BY DESC(?startDate)\n\
         LIMIT {limit} OFFSET {offset}",
        scope = scope,
        language = options.language,
        limit = options.limit,
        offset = options.offset,
    )
}
