use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Whether the query runner should hand back the result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fetch {
    Rows,
    Discard,
}

/// A single column value, decoded from whichever backend produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Int(i64),
    Float(f64),
    Text(String),
    Date(NaiveDate),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "None"),
            Value::Int(n) => write!(f, "{}", n),
            // Whole floats keep one fractional digit ("2.0", not "2").
            Value::Float(v) if v.is_finite() && v.fract() == 0.0 => write!(f, "{:.1}", v),
            Value::Float(v) => write!(f, "{}", v),
            Value::Text(s) => write!(f, "{}", s),
            Value::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Row {
    pub values: Vec<Value>,
}

impl Row {
    pub fn new(values: Vec<Value>) -> Self {
        Self { values }
    }

    pub fn get(&self, idx: usize) -> Option<&Value> {
        self.values.get(idx)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<Vec<Value>> for Row {
    fn from(values: Vec<Value>) -> Self {
        Self::new(values)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ViewStatus {
    Created,
    AlreadyExists,
    Failed { error: String },
}

impl ViewStatus {
    pub fn is_failed(&self) -> bool {
        matches!(self, ViewStatus::Failed { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewOutcome {
    pub view: &'static str,
    #[serde(flatten)]
    pub status: ViewStatus,
}

/// One answered question as it lands in the log file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    pub view: &'static str,
    pub label: &'static str,
    pub answers: Vec<String>,
}

impl ReportEntry {
    /// Label, blank separator, then one line per answer.
    pub fn lines(&self) -> Vec<&str> {
        let mut lines = Vec::with_capacity(self.answers.len() + 2);
        lines.push(self.label);
        lines.push("");
        lines.extend(self.answers.iter().map(String::as_str));
        lines
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    pub logfile: PathBuf,
    pub answered: Vec<ReportEntry>,
    pub unanswered: Vec<&'static str>,
}
