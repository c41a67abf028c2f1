use crate::errors::QueryError;
use crate::model::{Fetch, Row};
use crate::storage::Database;

/// Runs one statement in its own transaction.
///
/// An empty `Ok` means the statement succeeded with no rows; failures come
/// back as `Err` after the backend rolled back.
pub async fn run_query(
    db: &mut dyn Database,
    sql: &str,
    fetch: Fetch,
) -> Result<Vec<Row>, QueryError> {
    let result = db.query(sql, fetch).await;
    match &result {
        Ok(rows) => tracing::debug!(event = "query.ok", rows = rows.len(), sql = %sql),
        Err(e) => tracing::debug!(event = "query.failed", error = %e, sql = %sql),
    }
    result
}
