//! CSV ingestion into Arrow record batches.

use std::fs::File;
use std::io::Seek;
use std::path::Path;
use std::sync::Arc;

use arrow::array::{Array, BooleanArray, Float64Array, Int64Array, LargeStringArray, StringArray};
use arrow::csv::ReaderBuilder;
use arrow::csv::reader::Format;
use arrow::record_batch::RecordBatch;

use crate::DataSourceError;

/// Read a headered CSV file into record batches, inferring the schema.
///
/// Fails with [`DataSourceError::SourceNotFound`] when the file is absent
/// and [`DataSourceError::Parse`] when it cannot be read as delimited data.
pub fn read_csv(path: &Path) -> Result<Vec<RecordBatch>, DataSourceError> {
    if !path.is_file() {
        return Err(DataSourceError::SourceNotFound(path.to_path_buf()));
    }

    let parse = |source| DataSourceError::Parse {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::open(path)?;
    let format = Format::default().with_header(true);
    let (schema, _) = format.infer_schema(&mut file, None).map_err(parse)?;
    file.rewind()?;

    let reader = ReaderBuilder::new(Arc::new(schema))
        .with_format(format)
        .build(file)
        .map_err(parse)?;

    reader.collect::<Result<Vec<_>, _>>().map_err(parse)
}

// ── Column extraction helpers ──

/// Extract a string value from an Arrow array (handles Utf8 and LargeUtf8).
pub(crate) fn get_string(col: &dyn Array, row: usize) -> Option<String> {
    if col.is_null(row) {
        return None;
    }
    col.as_any()
        .downcast_ref::<StringArray>()
        .map(|arr| arr.value(row).to_string())
        .or_else(|| {
            col.as_any()
                .downcast_ref::<LargeStringArray>()
                .map(|arr| arr.value(row).to_string())
        })
}

/// Extract a numeric value from an Arrow array (handles Float64, Int64, and
/// Boolean; schema inference picks whichever fits the raw column).
pub(crate) fn get_f64(col: &dyn Array, row: usize) -> Option<f64> {
    if col.is_null(row) {
        return None;
    }
    let any = col.as_any();
    if let Some(arr) = any.downcast_ref::<Float64Array>() {
        return Some(arr.value(row));
    }
    if let Some(arr) = any.downcast_ref::<Int64Array>() {
        return Some(arr.value(row) as f64);
    }
    if let Some(arr) = any.downcast_ref::<BooleanArray>() {
        return Some(arr.value(row) as i64 as f64);
    }
    None
}
