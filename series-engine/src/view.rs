//! FILENAME: series-engine/src/view.rs
//! Chart Data View - Renderable output for the chart layer.
//!
//! This module defines the cross-tabulation the chart views consume:
//! one row per category with a count for every series key, plus the
//! access shapes different chart kinds want (row-oriented for stacked
//! area/bar, transposed per-series for radar, point lookups for heatmap
//! cells, per-category totals for radial rings).

use serde::{Deserialize, Serialize};

/// One output row: a category and its count for every series key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesRow {
    /// Lowercased category name (the X-axis label).
    pub class: String,

    /// Counts parallel to `ChartData::series_keys`. Always the full
    /// width: a series the category never intersected holds zero.
    pub counts: Vec<u64>,
}

/// A single series across all categories (transposed view).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesSlice {
    pub key: String,

    /// One point per category, in row order.
    pub points: Vec<u64>,
}

/// The complete cross-tabulation for one chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    /// Ordered series keys: schema declaration order, or the single
    /// reserved `"count"` key in count mode.
    pub series_keys: Vec<String>,

    /// One row per discovered category, sorted ascending by `class`.
    pub rows: Vec<SeriesRow>,
}

impl ChartData {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a series key, if known.
    pub fn series_index(&self, key: &str) -> Option<usize> {
        self.series_keys.iter().position(|k| k == key)
    }

    /// Count at a (category, series key) intersection. Heatmap cell lookup.
    pub fn count(&self, class: &str, key: &str) -> Option<u64> {
        let si = self.series_index(key)?;
        let row = self.rows.iter().find(|r| r.class == class)?;
        row.counts.get(si).copied()
    }

    /// Ordered category labels (the category axis).
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|r| r.class.as_str())
    }

    /// Transposed per-series slices, the shape series-oriented chart
    /// libraries consume.
    pub fn series(&self) -> Vec<SeriesSlice> {
        self.series_keys
            .iter()
            .enumerate()
            .map(|(si, key)| SeriesSlice {
                key: key.clone(),
                points: self
                    .rows
                    .iter()
                    .map(|r| r.counts.get(si).copied().unwrap_or(0))
                    .collect(),
            })
            .collect()
    }

    /// Per-category totals across all series keys, for single-ring
    /// radial/radar rendering of a multi-series pivot.
    pub fn category_totals(&self) -> Vec<(String, u64)> {
        self.rows
            .iter()
            .map(|r| (r.class.clone(), r.counts.iter().copied().sum()))
            .collect()
    }
}
