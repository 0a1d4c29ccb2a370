//! FILENAME: model/src/field.rs
//! Field schemas describing the columns of a source database.
//!
//! A `DatabaseSchema` is the series engine's only knowledge of the data
//! source: which fields exist, what kind of value each holds, and (for the
//! categorical kinds) the declared option set. Option lists are ordered;
//! declaration order fixes the order of chart series.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The kind of value a field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Status,
    Select,
    MultiSelect,
    Number,
    Date,
}

/// One declared option of a categorical field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub name: String,

    /// Swatch color hint for the chart layer. The aggregator only reads
    /// names.
    #[serde(default)]
    pub color: Option<String>,
}

impl SelectOption {
    pub fn new(name: impl Into<String>) -> Self {
        SelectOption {
            name: name.into(),
            color: None,
        }
    }

    pub fn with_color(name: impl Into<String>, color: impl Into<String>) -> Self {
        SelectOption {
            name: name.into(),
            color: Some(color.into()),
        }
    }
}

/// Schema for a single field.
///
/// Categorical kinds carry their declared options; numeric and date fields
/// carry none (they are never cross-tabulated as the series axis).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldSchema {
    Status { options: Vec<SelectOption> },
    Select { options: Vec<SelectOption> },
    MultiSelect { options: Vec<SelectOption> },
    Number,
    Date,
}

impl FieldSchema {
    pub fn status(options: Vec<SelectOption>) -> Self {
        FieldSchema::Status { options }
    }

    pub fn select(options: Vec<SelectOption>) -> Self {
        FieldSchema::Select { options }
    }

    pub fn multi_select(options: Vec<SelectOption>) -> Self {
        FieldSchema::MultiSelect { options }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            FieldSchema::Status { .. } => FieldKind::Status,
            FieldSchema::Select { .. } => FieldKind::Select,
            FieldSchema::MultiSelect { .. } => FieldKind::MultiSelect,
            FieldSchema::Number => FieldKind::Number,
            FieldSchema::Date => FieldKind::Date,
        }
    }

    /// Declared options, in declaration order. `None` for kinds that have
    /// no option set.
    pub fn options(&self) -> Option<&[SelectOption]> {
        match self {
            FieldSchema::Status { options }
            | FieldSchema::Select { options }
            | FieldSchema::MultiSelect { options } => Some(options),
            FieldSchema::Number | FieldSchema::Date => None,
        }
    }
}

/// The full schema of a source database: field name to field schema.
/// Field names are unique; the map enforces that.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DatabaseSchema {
    fields: HashMap<String, FieldSchema>,
}

impl DatabaseSchema {
    pub fn new() -> Self {
        DatabaseSchema {
            fields: HashMap::new(),
        }
    }

    /// Inserts a field schema, replacing any previous schema for the name.
    pub fn insert(&mut self, name: impl Into<String>, schema: FieldSchema) {
        self.fields.insert(name.into(), schema);
    }

    pub fn field(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.get(name)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(|k| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<(String, FieldSchema)> for DatabaseSchema {
    fn from_iter<I: IntoIterator<Item = (String, FieldSchema)>>(iter: I) -> Self {
        DatabaseSchema {
            fields: iter.into_iter().collect(),
        }
    }
}
