use newslog_core::report::console::print_report_summary;
use newslog_core::report::create_report;

use super::exit_codes;
use crate::cli::args::{Cli, OutputFormat};

pub async fn run(cli: &Cli) -> anyhow::Result<i32> {
    let mut db = cli.target().open().await?;
    let summary = create_report(db.as_mut(), &cli.logfile).await;
    let closed = db.close().await;
    let summary = summary?;
    closed?;

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
        OutputFormat::Text => print_report_summary(&summary),
    }

    Ok(exit_codes::OK)
}
