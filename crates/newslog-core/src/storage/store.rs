use crate::errors::{BoxError, QueryError};
use crate::model::{Fetch, Row, Value};
use crate::storage::{Database, Dialect};
use anyhow::Context;
use async_trait::async_trait;
use regex::Regex;
use rusqlite::functions::FunctionFlags;
use rusqlite::types::ValueRef;
use rusqlite::{Connection, OpenFlags, Transaction};
use std::path::Path;
use std::sync::Arc;

/// SQLite-backed news database.
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Opens an existing database file; a missing file is an error, not a
    /// fresh empty database.
    pub fn open(path: &Path) -> anyhow::Result<Self> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_URI
                | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .with_context(|| format!("failed to open sqlite db {}", path.display()))?;
        Self::from_connection(conn)
    }

    pub fn memory() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory().context("failed to open in-memory sqlite db")?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> anyhow::Result<Self> {
        register_functions(&conn).context("failed to register sqlite functions")?;
        Ok(Self { conn })
    }

    pub fn is_autocommit(&self) -> bool {
        self.conn.is_autocommit()
    }

    fn run(&mut self, sql: &str, fetch: Fetch) -> Result<Vec<Row>, QueryError> {
        let tx = self.conn.transaction().map_err(QueryError::begin)?;
        match run_in(&tx, sql, fetch) {
            Ok(rows) => {
                tx.commit().map_err(QueryError::commit)?;
                Ok(rows)
            }
            Err(e) => {
                if let Err(rb) = tx.rollback() {
                    tracing::warn!(event = "store.rollback_failed", error = %rb);
                }
                Err(e)
            }
        }
    }
}

fn run_in(tx: &Transaction<'_>, sql: &str, fetch: Fetch) -> Result<Vec<Row>, QueryError> {
    if fetch == Fetch::Discard {
        tx.execute_batch(sql).map_err(QueryError::execute)?;
        return Ok(Vec::new());
    }

    let mut stmt = tx.prepare(sql).map_err(QueryError::execute)?;
    let names: Vec<String> = stmt.column_names().iter().map(|s| s.to_string()).collect();
    let mut rows = stmt.query([]).map_err(QueryError::execute)?;

    let mut out = Vec::new();
    while let Some(row) = rows.next().map_err(QueryError::execute)? {
        let mut values = Vec::with_capacity(names.len());
        for (idx, name) in names.iter().enumerate() {
            let raw = row.get_ref(idx).map_err(QueryError::execute)?;
            values.push(decode(name, raw)?);
        }
        out.push(Row::new(values));
    }
    Ok(out)
}

fn decode(column: &str, raw: ValueRef<'_>) -> Result<Value, QueryError> {
    Ok(match raw {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(n) => Value::Int(n),
        ValueRef::Real(v) => Value::Float(v),
        ValueRef::Text(bytes) => Value::Text(String::from_utf8_lossy(bytes).into_owned()),
        ValueRef::Blob(_) => {
            return Err(QueryError::decode(column, "BLOB", "binary columns are not reported"))
        }
    })
}

/// `substring_regex(text, pattern)` returns the first match of `pattern` in
/// `text`, or NULL. Mirrors PostgreSQL's `substring(text FROM pattern)`.
fn register_functions(conn: &Connection) -> rusqlite::Result<()> {
    conn.create_scalar_function(
        "substring_regex",
        2,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| {
            let re: Arc<Regex> = ctx.get_or_create_aux(1, |vr| -> Result<_, BoxError> {
                Ok(Regex::new(vr.as_str()?)?)
            })?;
            let text: Option<String> = ctx.get(0)?;
            Ok(text.and_then(|t| re.find(&t).map(|m| m.as_str().to_string())))
        },
    )
}

#[async_trait]
impl Database for Store {
    async fn query(&mut self, sql: &str, fetch: Fetch) -> Result<Vec<Row>, QueryError> {
        self.run(sql, fetch)
    }

    fn dialect(&self) -> Dialect {
        Dialect::Sqlite
    }

    async fn close(self: Box<Self>) -> anyhow::Result<()> {
        let Store { conn } = *self;
        conn.close()
            .map_err(|(_, e)| e)
            .context("failed to close sqlite db")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substring_regex_extracts_slug_and_status() {
        let mut store = Store::memory().unwrap();
        let rows = store
            .run(
                r"SELECT substring_regex('/article/bears-love-berries', '[a-zA-Z0-9-]+$'),
                         substring_regex('404 NOT FOUND', '\d{3}'),
                         substring_regex('/', '[a-zA-Z0-9-]+$')",
                Fetch::Rows,
            )
            .unwrap();
        assert_eq!(
            rows[0].values,
            vec![
                Value::Text("bears-love-berries".into()),
                Value::Text("404".into()),
                Value::Null,
            ]
        );
    }

    #[test]
    fn failed_statement_rolls_back() {
        let mut store = Store::memory().unwrap();
        store
            .run("CREATE TABLE t (x INTEGER)", Fetch::Discard)
            .unwrap();

        let err = store
            .run("INSERT INTO t VALUES (1); SELECT * FROM missing", Fetch::Discard)
            .unwrap_err();
        assert!(matches!(err, QueryError::Execute(_)));
        assert!(store.is_autocommit());

        let rows = store.run("SELECT count(*) FROM t", Fetch::Rows).unwrap();
        assert_eq!(rows[0].values, vec![Value::Int(0)]);
    }

    #[test]
    fn discard_returns_no_rows() {
        let mut store = Store::memory().unwrap();
        let rows = store
            .run("CREATE VIEW one AS SELECT 1 AS n", Fetch::Discard)
            .unwrap();
        assert!(rows.is_empty());

        let rows = store.run("SELECT * FROM one", Fetch::Rows).unwrap();
        assert_eq!(rows[0].values, vec![Value::Int(1)]);
    }

    #[test]
    fn open_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Store::open(&dir.path().join("absent.db")).is_err());
    }
}
