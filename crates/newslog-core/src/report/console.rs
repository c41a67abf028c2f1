use crate::model::{ReportSummary, ViewOutcome, ViewStatus};

pub fn view_status_line(outcome: &ViewOutcome) -> String {
    match &outcome.status {
        ViewStatus::Created => format!("View ({}) created", outcome.view),
        ViewStatus::AlreadyExists => format!("View ({}) already exists", outcome.view),
        ViewStatus::Failed { error } => {
            format!("View ({}) could not be created: {}", outcome.view, error)
        }
    }
}

pub fn print_view_outcomes(outcomes: &[ViewOutcome]) {
    for o in outcomes {
        println!("{}", view_status_line(o));
    }
}

pub fn print_report_summary(summary: &ReportSummary) {
    println!("Report generated: {}", summary.logfile.display());
}
