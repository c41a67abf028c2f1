use crate::model::{Fetch, ReportEntry, ReportSummary};
use crate::query::run_query;
use crate::questions::QUESTIONS;
use crate::storage::Database;
use std::path::Path;

pub mod console;
pub mod logfile;

pub use logfile::append_to_log;

pub const LOG_HEADER: &str = "========================= Log Report =========================";

/// Writes one report run to `logfile`: the header, then a block for every
/// question that has at least one answer, in question order.
///
/// A failed query counts as "no answer" for its question. Blocks already
/// written stay in the file if a later write fails.
pub async fn create_report(
    db: &mut dyn Database,
    logfile: &Path,
) -> anyhow::Result<ReportSummary> {
    append_to_log(logfile, &[LOG_HEADER])?;

    let mut summary = ReportSummary {
        logfile: logfile.to_path_buf(),
        answered: Vec::new(),
        unanswered: Vec::new(),
    };

    for question in QUESTIONS.iter() {
        let rows = match run_query(db, question.select, Fetch::Rows).await {
            Ok(rows) => rows,
            Err(e) => {
                tracing::warn!(
                    event = "report.query_failed",
                    view = question.view,
                    error = %e,
                    "no answer for {}",
                    question.view
                );
                Vec::new()
            }
        };

        let answers = question.format_answers(&rows);
        if answers.is_empty() {
            summary.unanswered.push(question.view);
            continue;
        }

        let entry = ReportEntry {
            view: question.view,
            label: question.label,
            answers,
        };
        append_to_log(logfile, &entry.lines())?;
        summary.answered.push(entry);
    }

    tracing::info!(
        event = "report.written",
        logfile = %logfile.display(),
        answered = summary.answered.len(),
        unanswered = summary.unanswered.len()
    );
    Ok(summary)
}
