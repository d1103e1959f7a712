//! JSON rendering for query results.

use std::io::Write;

use wikistrata_core::GeologicalPeriod;

use crate::error::CliError;

pub fn render(periods: &[GeologicalPeriod], pretty: bool) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    if pretty {
        serde_json::to_writer_pretty(&mut handle, periods)?;
    } else {
        serde_json::to_writer(&mut handle, periods)?;
    }
    writeln!(handle)?;

    Ok(())
}
