use crate::errors::QueryError;
use crate::model::{Fetch, ViewOutcome, ViewStatus};
use crate::query::run_query;
use crate::questions::{Question, QUESTIONS};
use crate::storage::Database;

/// A view exists when selecting from it succeeds, even with zero rows.
/// Rows that cannot be decoded still prove the relation is there.
pub async fn view_exists(db: &mut dyn Database, question: &Question) -> bool {
    match run_query(db, question.select, Fetch::Rows).await {
        Ok(_) => true,
        Err(e @ QueryError::Decode { .. }) => {
            tracing::debug!(event = "views.undecodable", view = question.view, error = %e);
            true
        }
        Err(e) => {
            tracing::info!(event = "views.probe_failed", view = question.view, error = %e);
            false
        }
    }
}

pub async fn ensure_view(db: &mut dyn Database, question: &Question) -> ViewOutcome {
    let status = if view_exists(db, question).await {
        ViewStatus::AlreadyExists
    } else {
        let ddl = question.create_statement(db.dialect());
        match run_query(db, ddl, Fetch::Discard).await {
            Ok(_) => ViewStatus::Created,
            Err(e) => {
                tracing::warn!(event = "views.create_failed", view = question.view, error = %e);
                ViewStatus::Failed {
                    error: e.to_string(),
                }
            }
        }
    };

    ViewOutcome {
        view: question.view,
        status,
    }
}

/// Creates whichever of the three views are missing. Each view is handled
/// on its own; one failing does not stop the others.
pub async fn create_views(db: &mut dyn Database) -> Vec<ViewOutcome> {
    let mut outcomes = Vec::with_capacity(QUESTIONS.len());
    for question in QUESTIONS.iter() {
        outcomes.push(ensure_view(db, question).await);
    }
    outcomes
}
