pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failure of a single statement run through the query runner.
///
/// The transaction has already been rolled back by the time a caller sees
/// one of these.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("failed to begin transaction: {0}")]
    Begin(#[source] BoxError),

    #[error("statement failed: {0}")]
    Execute(#[source] BoxError),

    #[error("failed to commit transaction: {0}")]
    Commit(#[source] BoxError),

    #[error("cannot decode column {column} ({type_name}): {reason}")]
    Decode {
        column: String,
        type_name: String,
        reason: String,
    },
}

impl QueryError {
    pub fn begin(e: impl Into<BoxError>) -> Self {
        QueryError::Begin(e.into())
    }

    pub fn execute(e: impl Into<BoxError>) -> Self {
        QueryError::Execute(e.into())
    }

    pub fn commit(e: impl Into<BoxError>) -> Self {
        QueryError::Commit(e.into())
    }

    pub fn decode(
        column: impl Into<String>,
        type_name: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        QueryError::Decode {
            column: column.into(),
            type_name: type_name.into(),
            reason: reason.into(),
        }
    }
}
