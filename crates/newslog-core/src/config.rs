use crate::storage::{Database, PgDatabase, Store};
use std::path::Path;

pub const DEFAULT_DBNAME: &str = "news";
pub const DEFAULT_LOGFILE: &str = "report.log";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backend {
    #[default]
    Postgres,
    /// `dbname` is a path to an existing SQLite file.
    Sqlite,
}

/// Where the news database lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbTarget {
    pub backend: Backend,
    pub dbname: String,
}

impl Default for DbTarget {
    fn default() -> Self {
        Self {
            backend: Backend::default(),
            dbname: DEFAULT_DBNAME.to_string(),
        }
    }
}

impl DbTarget {
    pub fn new(backend: Backend, dbname: impl Into<String>) -> Self {
        Self {
            backend,
            dbname: dbname.into(),
        }
    }

    pub async fn open(&self) -> anyhow::Result<Box<dyn Database>> {
        tracing::debug!(event = "db.open", backend = ?self.backend, dbname = %self.dbname);
        match self.backend {
            Backend::Postgres => Ok(Box::new(PgDatabase::connect(&self.dbname).await?)),
            Backend::Sqlite => Ok(Box::new(Store::open(Path::new(&self.dbname))?)),
        }
    }
}
