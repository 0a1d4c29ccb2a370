//! FILENAME: series-engine/src/error.rs

use model::FieldKind;
use thiserror::Error;

/// Errors raised for invalid axis configuration.
///
/// These are the only failures the engine reports. Row-level data
/// problems are never errors: values the engine cannot use simply
/// contribute no counts.
#[derive(Error, Debug)]
pub enum SeriesError {
    #[error("field not present in schema: {0}")]
    UnknownField(String),

    #[error("field `{field}` ({kind:?}) cannot supply series keys")]
    UnsupportedAxis { field: String, kind: FieldKind },
}
