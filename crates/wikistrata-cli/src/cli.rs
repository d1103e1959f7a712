//! CLI argument definitions for Wikistrata.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `periods` | List top-level geological periods (eons) |
//! | `children` | List the direct subdivisions of a period |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--limit` | `20` | Maximum number of results |
//! | `--offset` | `0` | Result offset for pagination |
//! | `--language` | `fr` | Label language (English fallback) |
//! | `--endpoint` | Wikidata Query Service | SPARQL endpoint URL |
//! | `--pretty` | `false` | Pretty-print JSON output |
//!
//! # Examples
//!
//! ```bash
//! # List eons with French labels
//! wikistrata periods
//!
//! # Page through eras of the Phanerozoic in English
//! wikistrata children Q101313 --language en --limit 10 --offset 10
//! ```

use clap::{Parser, Subcommand};

/// Wikistrata - geological periods from Wikidata
#[derive(Debug, Parser)]
#[command(name = "wikistrata", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Maximum number of results.
    #[arg(long, global = true)]
    pub limit: Option<u32>,

    /// Result offset for pagination.
    #[arg(long, global = true)]
    pub offset: Option<u32>,

    /// Label language code, e.g. `fr` or `en`.
    #[arg(long, global = true)]
    pub language: Option<String>,

    /// SPARQL endpoint URL.
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Pretty-print JSON output.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List top-level geological periods (the four eons).
    Periods,

    /// List the direct subdivisions of a period.
    Children {
        /// Wikidata entity id of the parent period, e.g. `Q101313`.
        parent_id: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_children_with_pagination() {
        let cli = Cli::parse_from([
            "wikistrata",
            "children",
            "Q101313",
            "--limit",
            "10",
            "--offset",
            "20",
            "--language",
            "en",
        ]);

        assert_eq!(cli.limit, Some(10));
        assert_eq!(cli.offset, Some(20));
        assert_eq!(cli.language.as_deref(), Some("en"));
        match cli.command {
            Command::Children { parent_id } => assert_eq!(parent_id, "Q101313"),
            Command::Periods => panic!("expected children command"),
        }
    }
}
