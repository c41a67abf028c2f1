use crate::errors::QueryError;
use crate::model::{Fetch, Row, Value};
use crate::storage::{Database, Dialect};
use anyhow::Context;
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::postgres::{PgColumn, PgConnectOptions, PgConnection, PgRow};
use sqlx::{Column as _, Connection as _, Row as _, TypeInfo as _};

/// PostgreSQL connection for one command invocation.
pub struct PgDatabase {
    conn: PgConnection,
}

impl PgDatabase {
    /// Connects to `dbname`. Host, port, user and password come from the
    /// usual `PG*` environment variables, like a libpq `dbname=<name>` string.
    pub async fn connect(dbname: &str) -> anyhow::Result<Self> {
        let opts = PgConnectOptions::new().database(dbname);
        let conn = PgConnection::connect_with(&opts)
            .await
            .with_context(|| format!("failed to connect to database {}", dbname))?;
        Ok(Self { conn })
    }
}

#[async_trait]
impl Database for PgDatabase {
    async fn query(&mut self, sql: &str, fetch: Fetch) -> Result<Vec<Row>, QueryError> {
        let mut tx = self.conn.begin().await.map_err(QueryError::begin)?;

        let outcome = match fetch {
            Fetch::Rows => match sqlx::query(sql).fetch_all(&mut *tx).await {
                Ok(rows) => rows.iter().map(decode_row).collect(),
                Err(e) => Err(QueryError::execute(e)),
            },
            Fetch::Discard => sqlx::query(sql)
                .execute(&mut *tx)
                .await
                .map(|_| Vec::new())
                .map_err(QueryError::execute),
        };

        match outcome {
            Ok(rows) => {
                tx.commit().await.map_err(QueryError::commit)?;
                Ok(rows)
            }
            Err(e) => {
                if let Err(rb) = tx.rollback().await {
                    tracing::warn!(event = "pg.rollback_failed", error = %rb);
                }
                Err(e)
            }
        }
    }

    fn dialect(&self) -> Dialect {
        Dialect::Postgres
    }

    async fn close(self: Box<Self>) -> anyhow::Result<()> {
        let PgDatabase { conn } = *self;
        conn.close()
            .await
            .context("failed to close database connection")
    }
}

fn decode_row(row: &PgRow) -> Result<Row, QueryError> {
    row.columns()
        .iter()
        .map(|col| decode_value(row, col))
        .collect::<Result<Vec<_>, _>>()
        .map(Row::new)
}

fn decode_value(row: &PgRow, col: &PgColumn) -> Result<Value, QueryError> {
    let idx = col.ordinal();
    let type_name = col.type_info().name();

    let decoded = match type_name {
        "TEXT" | "VARCHAR" | "NAME" | "BPCHAR" => row
            .try_get::<Option<String>, _>(idx)
            .map(|v| v.map(Value::Text)),
        "INT2" => row
            .try_get::<Option<i16>, _>(idx)
            .map(|v| v.map(|n| Value::Int(n.into()))),
        "INT4" => row
            .try_get::<Option<i32>, _>(idx)
            .map(|v| v.map(|n| Value::Int(n.into()))),
        "INT8" => row.try_get::<Option<i64>, _>(idx).map(|v| v.map(Value::Int)),
        "FLOAT4" => row
            .try_get::<Option<f32>, _>(idx)
            .map(|v| v.map(|n| Value::Float(n.into()))),
        "FLOAT8" => row
            .try_get::<Option<f64>, _>(idx)
            .map(|v| v.map(Value::Float)),
        "DATE" => row
            .try_get::<Option<NaiveDate>, _>(idx)
            .map(|v| v.map(Value::Date)),
        "BOOL" => row
            .try_get::<Option<bool>, _>(idx)
            .map(|v| v.map(|b| Value::Int(b.into()))),
        other => {
            return Err(QueryError::decode(
                col.name(),
                other,
                "unsupported column type",
            ))
        }
    };

    decoded
        .map(|v| v.unwrap_or(Value::Null))
        .map_err(|e| QueryError::decode(col.name(), type_name, e.to_string()))
}
