use clap::Parser;

mod cli;
mod logging;

use cli::args::Cli;
use cli::commands::{dispatch, exit_codes};
use logging::LogConfig;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    logging::init(&LogConfig::from_env());

    tracing::debug!(
        event = "cli_start",
        action = ?cli.action,
        backend = ?cli.backend,
        dbname = %cli.dbname,
        logfile = %cli.logfile.display()
    );

    let code = match dispatch(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("fatal: {e:?}");
            exit_codes::FATAL
        }
    };
    std::process::exit(code);
}
