use crate::errors::QueryError;
use crate::model::{Fetch, Row};
use async_trait::async_trait;

pub mod postgres;
pub mod store;

pub use postgres::PgDatabase;
pub use store::Store;

/// SQL flavour a backend speaks; selects which view definitions apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    Postgres,
    Sqlite,
}

/// A connection scoped to one top-level operation.
///
/// Every `query` runs in its own transaction: committed on success, rolled
/// back before the error is returned.
#[async_trait]
pub trait Database: Send {
    async fn query(&mut self, sql: &str, fetch: Fetch) -> Result<Vec<Row>, QueryError>;

    fn dialect(&self) -> Dialect;

    async fn close(self: Box<Self>) -> anyhow::Result<()>;
}
