use super::args::{Action, Cli};

pub mod create_report;
pub mod create_views;

pub mod exit_codes {
    pub const OK: i32 = 0;
    pub const VIEW_FAILED: i32 = 1;
    pub const FATAL: i32 = 2;
}

pub async fn dispatch(cli: Cli) -> anyhow::Result<i32> {
    match cli.action {
        Action::CreateReport => create_report::run(&cli).await,
        Action::CreateViews => create_views::run(&cli).await,
    }
}
