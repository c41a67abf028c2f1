use clap::{Parser, ValueEnum};
use newslog_core::config::{Backend, DbTarget, DEFAULT_DBNAME, DEFAULT_LOGFILE};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "newslog",
    version,
    about = "Answers the news log questions and appends them to a report log"
)]
pub struct Cli {
    /// create views or report
    #[arg(value_enum, default_value_t = Action::CreateReport)]
    pub action: Action,

    /// logfile to write report to
    #[arg(long, default_value = DEFAULT_LOGFILE, env = "NEWSLOG_LOGFILE")]
    pub logfile: PathBuf,

    /// name of database to query from (a file path for --backend sqlite)
    #[arg(long, default_value = DEFAULT_DBNAME, env = "NEWSLOG_DBNAME")]
    pub dbname: String,

    #[arg(long, value_enum, default_value_t = BackendArg::Postgres, env = "NEWSLOG_BACKEND")]
    pub backend: BackendArg,

    /// stdout format: text | json
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl Cli {
    pub fn target(&self) -> DbTarget {
        DbTarget::new(self.backend.into(), self.dbname.clone())
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    #[value(name = "create_report")]
    CreateReport,
    #[value(name = "create_views")]
    CreateViews,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendArg {
    Postgres,
    Sqlite,
}

impl From<BackendArg> for Backend {
    fn from(b: BackendArg) -> Self {
        match b {
            BackendArg::Postgres => Backend::Postgres,
            BackendArg::Sqlite => Backend::Sqlite,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}
