//! FILENAME: model/src/record.rs
//! Record values - the rows of a source database.
//!
//! A `Record` maps field names to tagged values. The tag mirrors the
//! field's declared `FieldKind`, but nothing enforces that: consumers
//! dispatch on the value's own tag and skip shapes they cannot use, so a
//! mistagged or missing value degrades a computation instead of failing it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single field value carried by a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RecordValue {
    Status { name: String },
    Select { name: String },
    MultiSelect { names: Vec<String> },
    Number { value: f64 },
    Date { date: NaiveDate },

    /// Any value kind the chart pipeline does not understand. Unknown
    /// type tags on the wire land here instead of failing deserialization.
    #[serde(other)]
    Unsupported,
}

impl RecordValue {
    pub fn status(name: impl Into<String>) -> Self {
        RecordValue::Status { name: name.into() }
    }

    pub fn select(name: impl Into<String>) -> Self {
        RecordValue::Select { name: name.into() }
    }

    pub fn multi_select<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        RecordValue::MultiSelect {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn number(value: f64) -> Self {
        RecordValue::Number { value }
    }

    pub fn date(date: NaiveDate) -> Self {
        RecordValue::Date { date }
    }
}

/// One row of the source database: field name to value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    values: HashMap<String, RecordValue>,
}

impl Record {
    pub fn new() -> Self {
        Record {
            values: HashMap::new(),
        }
    }

    /// Builder-style insert, convenient for constructing fixtures.
    pub fn with(mut self, field: impl Into<String>, value: RecordValue) -> Self {
        self.values.insert(field.into(), value);
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, value: RecordValue) {
        self.values.insert(field.into(), value);
    }

    pub fn value(&self, field: &str) -> Option<&RecordValue> {
        self.values.get(field)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Ordered sequence of rows. Empty is valid.
pub type RecordSet = Vec<Record>;
