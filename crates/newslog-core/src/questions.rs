//! The three fixed questions: the view each one reads from, how to create
//! that view in each dialect, and how a result row reads in the report.

use crate::model::Row;
use crate::storage::Dialect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerUnit {
    Views,
    ErrorPercent,
}

#[derive(Debug)]
pub struct Question {
    pub view: &'static str,
    pub label: &'static str,
    pub select: &'static str,
    pub unit: AnswerUnit,
    postgres_ddl: &'static str,
    sqlite_ddl: &'static str,
}

impl Question {
    pub fn create_statement(&self, dialect: Dialect) -> &'static str {
        match dialect {
            Dialect::Postgres => self.postgres_ddl,
            Dialect::Sqlite => self.sqlite_ddl,
        }
    }

    /// Renders one row as an answer line. Rows with fewer than two columns
    /// have no answer.
    pub fn format_answer(&self, row: &Row) -> Option<String> {
        let (subject, amount) = (row.get(0)?, row.get(1)?);
        Some(match self.unit {
            AnswerUnit::Views => format!("\"{}\" - {} views", subject, amount),
            AnswerUnit::ErrorPercent => format!("\"{}\" - {}% errors", subject, amount),
        })
    }

    pub fn format_answers(&self, rows: &[Row]) -> Vec<String> {
        rows.iter().filter_map(|r| self.format_answer(r)).collect()
    }
}

pub static QUESTIONS: [Question; 3] = [
    Question {
        view: "question_one",
        label: "1. What are the most popular three articles of all time?",
        select: "SELECT * FROM question_one",
        unit: AnswerUnit::Views,
        postgres_ddl: r"CREATE VIEW question_one AS SELECT title,
            count(*)::integer AS views FROM articles LEFT JOIN log
            ON substring(log.path FROM '[a-zA-Z0-9-]+$') = articles.slug
            GROUP BY articles.title ORDER BY views DESC LIMIT 3",
        sqlite_ddl: r"CREATE VIEW question_one AS SELECT title,
            CAST(count(*) AS INTEGER) AS views FROM articles LEFT JOIN log
            ON substring_regex(log.path, '[a-zA-Z0-9-]+$') = articles.slug
            GROUP BY articles.title ORDER BY views DESC LIMIT 3",
    },
    Question {
        view: "question_two",
        label: "2. Who are the most popular article authors of all time?",
        select: "SELECT * FROM question_two",
        unit: AnswerUnit::Views,
        postgres_ddl: r"CREATE VIEW question_two AS SELECT DISTINCT authors.name,
            count(*)::integer AS views FROM articles LEFT JOIN log ON
            substring(log.path FROM '[a-zA-Z0-9-]+$') = articles.slug INNER JOIN
            authors ON articles.author = authors.id GROUP BY authors.name
            ORDER BY views DESC",
        sqlite_ddl: r"CREATE VIEW question_two AS SELECT DISTINCT authors.name,
            CAST(count(*) AS INTEGER) AS views FROM articles LEFT JOIN log ON
            substring_regex(log.path, '[a-zA-Z0-9-]+$') = articles.slug INNER JOIN
            authors ON articles.author = authors.id GROUP BY authors.name
            ORDER BY views DESC",
    },
    Question {
        view: "question_three",
        label: "3. On which days did more than 1% of requests lead to errors?",
        select: "SELECT * FROM question_three",
        unit: AnswerUnit::ErrorPercent,
        postgres_ddl: r"CREATE VIEW question_three AS SELECT * FROM
            (SELECT DISTINCT date(time) AS datetime, round(100.0 * ((count(*)
            FILTER (WHERE substring(status, '\d{3}')::numeric >= 400))::float /
            count(*)::float)::numeric, 2)::float AS percent FROM log
            GROUP BY datetime ORDER BY datetime ASC) ss
            WHERE percent > 1.0",
        sqlite_ddl: r"CREATE VIEW question_three AS SELECT * FROM
            (SELECT substr(time, 1, 10) AS day, round(100.0 * (count(*)
            FILTER (WHERE CAST(substring_regex(status, '\d{3}') AS INTEGER) >= 400)) /
            count(*), 2) AS percent FROM log
            GROUP BY day ORDER BY day ASC) ss
            WHERE percent > 1.0",
    },
];
