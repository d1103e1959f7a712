mod cli;
mod error;
mod output;

use clap::Parser;
use std::process::ExitCode;

use wikistrata_core::{ClientConfig, QueryOptions, WikidataClient};

use crate::cli::{Cli, Command};
use crate::error::CliError;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run().await {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::from(error.exit_code())
        }
    }
}

async fn run() -> Result<ExitCode, CliError> {
    let cli = Cli::parse();

    let mut config = ClientConfig::default();
    if let Some(endpoint) = &cli.endpoint {
        config.endpoint = endpoint.clone();
    }
    let client = WikidataClient::with_config(config);

    let mut options = QueryOptions::new();
    if let Some(limit) = cli.limit {
        options = options.limit(limit);
    }
    if let Some(offset) = cli.offset {
        options = options.offset(offset);
    }
    if let Some(language) = &cli.language {
        options = options.language(language.clone());
    }

    let periods = match &cli.command {
        Command::Periods => client.fetch_periods(options).await?,
        Command::Children { parent_id } => client.fetch_children(parent_id, options).await?,
    };

    output::render(&periods, cli.pretty)?;
    Ok(ExitCode::SUCCESS)
}
