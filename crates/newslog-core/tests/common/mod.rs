#![allow(dead_code)]

use rusqlite::{params, Connection};
use std::path::{Path, PathBuf};

pub const SCHEMA: &str = r#"
CREATE TABLE authors (
  id INTEGER PRIMARY KEY,
  name TEXT NOT NULL,
  bio TEXT
);

CREATE TABLE articles (
  author INTEGER NOT NULL,
  title TEXT NOT NULL,
  slug TEXT NOT NULL UNIQUE,
  lead TEXT,
  body TEXT,
  time TEXT,
  id INTEGER PRIMARY KEY
);

CREATE TABLE log (
  path TEXT,
  ip TEXT,
  method TEXT,
  status TEXT,
  time TEXT,
  id INTEGER PRIMARY KEY
);
"#;

const AUTHORS: &[(i64, &str)] = &[
    (1, "Ursula La Multa"),
    (2, "Rudolf von Treppenwitz"),
    (3, "Anonymous Contributor"),
];

const ARTICLES: &[(i64, &str, &str)] = &[
    (1, "Candidate is jerk, alleges rival", "candidate-is-jerk"),
    (2, "Bears love berries, alleges bear", "bears-love-berries"),
    (1, "Bad things gone, say good people", "bad-things-gone"),
    (3, "Trouble for troubled troublemakers", "trouble-for-troubled"),
];

/// (path, status, time, repeat). Day two uses the `timestamptz` text form.
const LOG: &[(&str, &str, &str, usize)] = &[
    ("/article/candidate-is-jerk", "200 OK", "2016-07-01 08:00:00", 3),
    ("/article/bears-love-berries", "200 OK", "2016-07-01 09:00:00", 2),
    ("/article/bad-things-gone", "200 OK", "2016-07-01 10:00:00", 1),
    ("/", "200 OK", "2016-07-01 11:00:00", 1),
    ("/article/candidate-is-jerk", "200 OK", "2016-07-02 08:00:00+00", 1),
    ("/article/bears-love-berries", "200 OK", "2016-07-02 09:00:00+00", 1),
    ("/article/bad-things-gone", "200 OK", "2016-07-02 10:00:00+00", 2),
    ("/", "200 OK", "2016-07-02 11:00:00+00", 1),
    ("/article/missing", "404 NOT FOUND", "2016-07-02 12:00:00+00", 1),
    ("/article/candidate-is-jerk", "200 OK", "2016-07-03 08:00:00", 2),
    ("/article/bears-love-berries", "200 OK", "2016-07-03 09:00:00", 1),
];

pub const EXPECTED_REPORT: &str = "\
========================= Log Report =========================

1. What are the most popular three articles of all time?

\"Candidate is jerk, alleges rival\" - 6 views
\"Bears love berries, alleges bear\" - 4 views
\"Bad things gone, say good people\" - 3 views

2. Who are the most popular article authors of all time?

\"Ursula La Multa\" - 9 views
\"Rudolf von Treppenwitz\" - 4 views
\"Anonymous Contributor\" - 1 views

3. On which days did more than 1% of requests lead to errors?

\"2016-07-02\" - 16.67% errors
";

pub fn seed(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(SCHEMA)?;
    for (id, name) in AUTHORS {
        conn.execute(
            "INSERT INTO authors (id, name) VALUES (?1, ?2)",
            params![id, name],
        )?;
    }
    for (author, title, slug) in ARTICLES {
        conn.execute(
            "INSERT INTO articles (author, title, slug) VALUES (?1, ?2, ?3)",
            params![author, title, slug],
        )?;
    }
    for (path, status, time, repeat) in LOG {
        for _ in 0..*repeat {
            conn.execute(
                "INSERT INTO log (path, ip, method, status, time) VALUES (?1, '127.0.0.1', 'GET', ?2, ?3)",
                params![path, status, time],
            )?;
        }
    }
    Ok(())
}

/// Creates `news.db` in `dir`, seeded with the fixture data.
pub fn news_db(dir: &Path) -> anyhow::Result<PathBuf> {
    let path = dir.join("news.db");
    let conn = Connection::open(&path)?;
    seed(&conn)?;
    Ok(path)
}
