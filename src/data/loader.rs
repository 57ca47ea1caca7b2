use std::io::Read;

use crate::error::DatasetError;

use super::cancel::CancelFlag;
use super::model::DataPoint;
use super::store::DatasetStore;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Open `name` in the store and parse it into an ordered point series.
///
/// Store failures (`NotFound`, `Io`) are passed through untouched.
pub fn load_points(
    store: &dyn DatasetStore,
    name: &str,
    cancel: &CancelFlag,
) -> Result<Vec<DataPoint>, DatasetError> {
    let reader = store.open(name)?;
    parse_points(reader, cancel)
}

// ---------------------------------------------------------------------------
// CSV parser
// ---------------------------------------------------------------------------

/// CSV layout: a header row (discarded, whatever it holds) followed by rows
/// whose first two fields are decimal numbers:
///
/// ```text
/// x,y
/// 1.0,2.0
/// 3.0,4.5,ignored
/// ```
///
/// Any bad row fails the whole parse; there are no partial results.
/// An empty input has no header and is an error; a header-only input
/// yields an empty series. A quote left open swallows the rest of the input
/// as one field, so every record's raw bytes must hold balanced quotes.
pub fn parse_points<R: Read>(
    mut input: R,
    cancel: &CancelFlag,
) -> Result<Vec<DataPoint>, DatasetError> {
    let mut raw = Vec::new();
    input.read_to_end(&mut raw)?;
    cancel.check()?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(raw.as_slice());

    let header_is_empty = reader.headers().map_err(|e| csv_error(e, 1))?.is_empty();
    if header_is_empty {
        return Err(DatasetError::parse(1, "file is empty, expected a header row"));
    }
    let mut start = reader.position().byte();
    check_quotes(&raw[..start as usize], 1)?;

    let mut points = Vec::new();
    let mut record = csv::StringRecord::new();
    // Row 1 is the header.
    let mut row: u64 = 1;

    loop {
        cancel.check()?;
        row += 1;
        match reader.read_record(&mut record) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => return Err(csv_error(e, row)),
        }
        let end = reader.position().byte();
        check_quotes(&raw[start as usize..end as usize], row)?;
        start = end;

        if record.len() < 2 {
            return Err(DatasetError::parse(
                row,
                format!("expected at least 2 fields, found {}", record.len()),
            ));
        }
        let x = parse_number(&record[0], row, 1)?;
        let y = parse_number(&record[1], row, 2)?;
        points.push(DataPoint::new(x, y));
    }

    Ok(points)
}

/// Enclosing quotes and `""` escapes both come in pairs; an odd count means
/// an unterminated quoted field or a bare quote.
fn check_quotes(span: &[u8], row: u64) -> Result<(), DatasetError> {
    if span.iter().filter(|&&b| b == b'"').count() % 2 != 0 {
        return Err(DatasetError::parse(
            row,
            "malformed CSV: extraneous or missing '\"' in quoted field",
        ));
    }
    Ok(())
}

/// Parse one field as a finite base-10 float. `column` is 1-based.
fn parse_number(field: &str, row: u64, column: usize) -> Result<f64, DatasetError> {
    match field.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        Ok(_) => Err(DatasetError::parse(
            row,
            format!("column {column}: '{field}' is not a finite number"),
        )),
        Err(_) => Err(DatasetError::parse(
            row,
            format!("column {column}: '{field}' is not a number"),
        )),
    }
}

fn csv_error(err: csv::Error, row: u64) -> DatasetError {
    if !err.is_io_error() {
        return DatasetError::parse(row, format!("malformed CSV: {err}"));
    }
    match err.into_kind() {
        csv::ErrorKind::Io(io) => DatasetError::Io(io),
        other => DatasetError::parse(row, format!("malformed CSV: {other:?}")),
    }
}
