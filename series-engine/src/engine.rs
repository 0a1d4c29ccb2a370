//! FILENAME: series-engine/src/engine.rs
//! Series Engine - The calculation core that pivots records into chart data.
//!
//! This module takes a SeriesQuery (configuration), a DatabaseSchema and a
//! record set, and produces ChartData (category rows ready for rendering).
//!
//! Algorithm:
//! 1. Resolve series keys from the Y axis (schema option order)
//! 2. Scan records to discover the X category universe (sorted ascending)
//! 3. Initialize a dense category x series count matrix
//! 4. Accumulate: every resolved (category, series) pair increments by one
//! 5. Materialize one row per category with a count for every series key

use log::debug;
use model::{DatabaseSchema, Record, RecordValue};
use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;

use crate::definition::{SeriesQuery, YAxis, COUNT_SERIES_KEY};
use crate::error::SeriesError;
use crate::view::{ChartData, SeriesRow};

/// Lowercased names a record value contributes to an axis. Status and
/// select values contribute one, multi-select fans out to every member,
/// anything else contributes nothing.
type AxisNames = SmallVec<[String; 4]>;

// ============================================================================
// ENTRY POINT
// ============================================================================

/// Pivots `records` into chart-ready series data.
///
/// Fails only on axis configuration problems: `x_field` (and `y_axis` in
/// field mode) must name a schema field, and a Y field must be a
/// categorical kind. Malformed or missing record values are skipped, so
/// data-quality issues surface as lower counts rather than errors.
pub fn calculate_series(
    query: &SeriesQuery,
    schema: &DatabaseSchema,
    records: &[Record],
) -> Result<ChartData, SeriesError> {
    let calculator = SeriesCalculator::new(query, schema, records)?;
    Ok(calculator.calculate())
}

// ============================================================================
// SERIES KEY RESOLUTION
// ============================================================================

/// Step 1: the ordered series keys the Y axis produces.
///
/// Count mode yields the single reserved key. Field mode yields the
/// lowercased option names in schema declaration order; on case-folded
/// duplicates the first occurrence wins.
fn resolve_series_keys(
    y_axis: &YAxis,
    schema: &DatabaseSchema,
) -> Result<Vec<String>, SeriesError> {
    let y_field = match y_axis {
        YAxis::Count => return Ok(vec![COUNT_SERIES_KEY.to_string()]),
        YAxis::Field(name) => name,
    };

    let field = schema
        .field(y_field)
        .ok_or_else(|| SeriesError::UnknownField(y_field.clone()))?;

    let options = field
        .options()
        .ok_or_else(|| SeriesError::UnsupportedAxis {
            field: y_field.clone(),
            kind: field.kind(),
        })?;

    let mut keys = Vec::with_capacity(options.len());
    let mut seen = FxHashSet::default();
    for option in options {
        let key = option.name.to_lowercase();
        if seen.insert(key.clone()) {
            keys.push(key);
        }
    }
    Ok(keys)
}

/// The lowercased axis names a record value resolves to. Dispatches on the
/// value's own tag, not the schema's declared kind, so mistagged values
/// fall through to "contributes nothing".
fn axis_names(value: Option<&RecordValue>) -> AxisNames {
    let mut names = AxisNames::new();
    match value {
        Some(RecordValue::Status { name }) | Some(RecordValue::Select { name }) => {
            names.push(name.to_lowercase());
        }
        Some(RecordValue::MultiSelect { names: members }) => {
            for member in members {
                names.push(member.to_lowercase());
            }
        }
        _ => {}
    }
    names
}

// ============================================================================
// SERIES CALCULATOR
// ============================================================================

/// The main calculation engine for chart series.
struct SeriesCalculator<'a> {
    query: &'a SeriesQuery,
    records: &'a [Record],

    /// Y field name, or None in count mode.
    y_field: Option<&'a str>,

    /// Ordered series keys (schema declaration order).
    series_keys: Vec<String>,

    /// Series key to matrix column.
    series_index: FxHashMap<String, usize>,

    /// Discovered X categories, sorted ascending.
    categories: Vec<String>,

    /// Category name to matrix row.
    category_index: FxHashMap<String, usize>,

    /// Dense category x series count matrix, row-major.
    counts: Vec<u64>,
}

impl<'a> SeriesCalculator<'a> {
    /// Validates the axis configuration and resolves the series keys.
    fn new(
        query: &'a SeriesQuery,
        schema: &'a DatabaseSchema,
        records: &'a [Record],
    ) -> Result<Self, SeriesError> {
        // The X field must exist even though its declared kind is never
        // consulted afterwards: categories come from observed values.
        if schema.field(&query.x_field).is_none() {
            return Err(SeriesError::UnknownField(query.x_field.clone()));
        }

        let series_keys = resolve_series_keys(&query.y_axis, schema)?;
        let series_index = series_keys
            .iter()
            .enumerate()
            .map(|(i, key)| (key.clone(), i))
            .collect();

        Ok(SeriesCalculator {
            query,
            records,
            y_field: query.y_axis.series_field(),
            series_keys,
            series_index,
            categories: Vec::new(),
            category_index: FxHashMap::default(),
            counts: Vec::new(),
        })
    }

    /// Executes the remaining steps and returns the materialized rows.
    fn calculate(mut self) -> ChartData {
        self.discover_categories();
        self.init_counts();
        self.accumulate();
        self.materialize()
    }

    /// Step 2: scan every record's X value and collect the distinct
    /// lowercased category names, sorted ascending.
    fn discover_categories(&mut self) {
        let mut seen = FxHashSet::default();
        for record in self.records {
            for name in axis_names(record.value(&self.query.x_field)) {
                if seen.insert(name.clone()) {
                    self.categories.push(name);
                }
            }
        }
        self.categories.sort();
        self.category_index = self
            .categories
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i))
            .collect();
    }

    /// Step 3: dense category x series matrix, all zero.
    fn init_counts(&mut self) {
        self.counts = vec![0; self.categories.len() * self.series_keys.len()];
    }

    fn bucket(&self, category: usize, series: usize) -> usize {
        category * self.series_keys.len() + series
    }

    /// Step 4: one increment per resolved (category, series) pair.
    ///
    /// Multi-select values fan out on both axes independently, so a record
    /// that is multi-select on X and Y increments the full cross-product
    /// of its X options and Y options.
    fn accumulate(&mut self) {
        for record in self.records {
            let x_names = axis_names(record.value(&self.query.x_field));
            if x_names.is_empty() {
                continue;
            }

            match self.y_field {
                None => {
                    // Count mode: one bucket per category.
                    for x_name in &x_names {
                        if let Some(&ci) = self.category_index.get(x_name.as_str()) {
                            let idx = self.bucket(ci, 0);
                            self.counts[idx] += 1;
                        }
                    }
                }
                Some(y_field) => {
                    let y_names = axis_names(record.value(y_field));
                    for x_name in &x_names {
                        if let Some(&ci) = self.category_index.get(x_name.as_str()) {
                            for y_name in &y_names {
                                if let Some(&si) = self.series_index.get(y_name.as_str()) {
                                    let idx = self.bucket(ci, si);
                                    self.counts[idx] += 1;
                                }
                            }
                        }
                    }
                }
            }
        }
    }

    /// Step 5: one row per category, every series key present (zeros kept).
    fn materialize(self) -> ChartData {
        let stride = self.series_keys.len();
        debug!(
            "series pivot: {} records -> {} categories x {} series keys",
            self.records.len(),
            self.categories.len(),
            stride
        );

        let counts = self.counts;
        let rows = self
            .categories
            .into_iter()
            .enumerate()
            .map(|(ci, class)| SeriesRow {
                class,
                counts: counts[ci * stride..(ci + 1) * stride].to_vec(),
            })
            .collect();

        ChartData {
            series_keys: self.series_keys,
            rows,
        }
    }
}
