//! FILENAME: series-engine/src/definition.rs
//! Series Query Definition - The serializable configuration.
//!
//! This module contains the types needed to DESCRIBE one chart's series
//! request. These structures are designed to be:
//! - Serializable (for saving chart configurations)
//! - Sent over the API bridge from the chart configuration UI
//! - Immutable snapshots of user intent

use serde::{Deserialize, Serialize};

/// Reserved series key for row-counting mode.
pub const COUNT_SERIES_KEY: &str = "count";

/// What the Y axis aggregates.
///
/// Serializes as a bare string: the reserved name `"count"` selects
/// row-counting mode, anything else references a schema field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum YAxis {
    /// Count matching records per category.
    Count,
    /// Cross-tabulate against a categorical field.
    Field(String),
}

impl YAxis {
    /// The referenced schema field, if any.
    pub fn series_field(&self) -> Option<&str> {
        match self {
            YAxis::Count => None,
            YAxis::Field(name) => Some(name),
        }
    }
}

impl From<String> for YAxis {
    fn from(raw: String) -> Self {
        if raw == COUNT_SERIES_KEY {
            YAxis::Count
        } else {
            YAxis::Field(raw)
        }
    }
}

impl From<&str> for YAxis {
    fn from(raw: &str) -> Self {
        YAxis::from(raw.to_string())
    }
}

impl From<YAxis> for String {
    fn from(axis: YAxis) -> Self {
        match axis {
            YAxis::Count => COUNT_SERIES_KEY.to_string(),
            YAxis::Field(name) => name,
        }
    }
}

/// The complete, serializable definition of one chart series request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesQuery {
    /// Field whose values become the category axis.
    pub x_field: String,

    /// What each category's series values count.
    pub y_axis: YAxis,
}

impl SeriesQuery {
    pub fn new(x_field: impl Into<String>, y_axis: impl Into<YAxis>) -> Self {
        SeriesQuery {
            x_field: x_field.into(),
            y_axis: y_axis.into(),
        }
    }

    /// Row-counting query: how many records fall in each X category.
    pub fn count_of(x_field: impl Into<String>) -> Self {
        SeriesQuery {
            x_field: x_field.into(),
            y_axis: YAxis::Count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_is_reserved() {
        assert_eq!(YAxis::from("count"), YAxis::Count);
        assert_eq!(
            YAxis::from("priority"),
            YAxis::Field("priority".to_string())
        );
        // The reservation is exact; a differently-cased spelling is a
        // field reference like any other.
        assert_eq!(YAxis::from("Count"), YAxis::Field("Count".to_string()));
    }

    #[test]
    fn test_y_axis_serializes_as_bare_string() {
        let query = SeriesQuery::count_of("Status");
        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(json["y_axis"], "count");

        let query = SeriesQuery::new("Status", "Priority");
        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(json["y_axis"], "Priority");

        let parsed: SeriesQuery = serde_json::from_value(json).unwrap();
        assert_eq!(parsed.y_axis.series_field(), Some("Priority"));
    }
}
