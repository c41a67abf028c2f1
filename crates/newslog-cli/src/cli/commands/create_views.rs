use newslog_core::report::console::print_view_outcomes;
use newslog_core::views::create_views;

use super::exit_codes;
use crate::cli::args::{Cli, OutputFormat};

pub async fn run(cli: &Cli) -> anyhow::Result<i32> {
    let mut db = cli.target().open().await?;
    let outcomes = create_views(db.as_mut()).await;
    db.close().await?;

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outcomes)?),
        OutputFormat::Text => print_view_outcomes(&outcomes),
    }

    if outcomes.iter().any(|o| o.status.is_failed()) {
        Ok(exit_codes::VIEW_FAILED)
    } else {
        Ok(exit_codes::OK)
    }
}
