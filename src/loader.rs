//! Dispatch export loading
//!
//! The export is read once, validated against the column layout, and
//! materialized into a `Vec<Intervention>` that every statistic borrows.

use std::borrow::Cow;
use std::io::Read;
use std::path::Path;
use std::time::Instant;

use crate::error::util::safe_open_file;
use crate::error::{Result, SchemaError};
use crate::models::Intervention;
use crate::schema::{ColumnLayout, LayoutMode};
use crate::utils::logging::{log_load_complete, log_load_start};

/// Field delimiter of the export
pub const DELIMITER: u8 = b';';

/// Read the monthly export at `path`
pub fn load_interventions(path: &Path, mode: LayoutMode) -> Result<Vec<Intervention>> {
    log_load_start(path);
    let start = Instant::now();

    let file = safe_open_file(path, "reading dispatch export")?;
    let records = read_interventions(file, mode)?;

    log_load_complete(path, records.len(), start.elapsed());
    Ok(records)
}

/// Read an export from any reader
///
/// The first row is the header and is used to resolve the layout. Rows that
/// are entirely blank are dropped. Short rows are kept with the missing fields
/// left blank. Bytes that are not valid UTF-8 are replaced rather than
/// failing the whole export.
pub fn read_interventions<R: Read>(reader: R, mode: LayoutMode) -> Result<Vec<Intervention>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows = csv_reader.byte_records();
    let header = match rows.next() {
        Some(header) => decode_row(&header?).0,
        None => return Err(SchemaError::EmptyExport.into()),
    };
    let layout = ColumnLayout::resolve(mode, &header)?;
    log::debug!("Resolved column layout over {} columns", layout.width());

    let mut records = Vec::new();
    let mut short_rows = 0usize;
    let mut lossy_rows = 0usize;
    for row in rows {
        let (fields, lossy) = decode_row(&row?);
        if lossy {
            lossy_rows += 1;
        }
        if fields.len() < layout.width() {
            short_rows += 1;
        }
        let record = Intervention::from_row(&fields, &layout);
        if !record.is_blank() {
            records.push(record);
        }
    }

    if short_rows > 0 {
        log::warn!(
            "{short_rows} rows have fewer than {} columns, missing fields left blank",
            layout.width()
        );
    }
    if lossy_rows > 0 {
        log::warn!("{lossy_rows} rows contain invalid UTF-8, bad bytes replaced");
    }

    Ok(records)
}

/// Decode every field, reporting whether any byte had to be replaced
fn decode_row(row: &csv::ByteRecord) -> (Vec<String>, bool) {
    let mut lossy = false;
    let fields = row
        .iter()
        .map(|field| match String::from_utf8_lossy(field) {
            Cow::Borrowed(text) => text.to_owned(),
            Cow::Owned(text) => {
                lossy = true;
                text
            }
        })
        .collect();
    (fields, lossy)
}
