use crate::error::DatasetError;

use super::store::{check_name, DatasetStore};

/// Media type a part must declare to be accepted.
pub const CSV_MEDIA_TYPE: &str = "text/csv";

/// Default payload ceiling: 5 MiB.
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// One uploaded file as seen after the transport layer unpacked it.
#[derive(Debug, Clone)]
pub struct Upload {
    /// Declared `Content-Type` of the part, if any.
    pub media_type: Option<String>,
    pub filename: String,
    pub payload: Vec<u8>,
}

/// True when the declared type is `text/csv`, ignoring parameters such as
/// `charset`. The content itself is never inspected.
pub fn is_csv_media_type(declared: &str) -> bool {
    let essence = declared.split(';').next().unwrap_or("").trim();
    essence.eq_ignore_ascii_case(CSV_MEDIA_TYPE)
}

pub fn check_media_type(declared: Option<&str>) -> Result<(), DatasetError> {
    match declared {
        Some(declared) if is_csv_media_type(declared) => Ok(()),
        Some(declared) => Err(DatasetError::validation(format!(
            "uploaded file is not a CSV file (declared '{declared}')"
        ))),
        None => Err(DatasetError::validation(
            "uploaded file is not a CSV file (no content type declared)",
        )),
    }
}

/// Append a streamed chunk, failing as soon as the running total passes
/// `max_bytes`.
pub fn append_chunk(buf: &mut Vec<u8>, chunk: &[u8], max_bytes: usize) -> Result<(), DatasetError> {
    if buf.len() + chunk.len() > max_bytes {
        return Err(too_large(max_bytes));
    }
    buf.extend_from_slice(chunk);
    Ok(())
}

fn too_large(max_bytes: usize) -> DatasetError {
    DatasetError::validation(format!("uploaded file exceeds the {max_bytes} byte limit"))
}

/// Validate an upload and persist it under its own filename.
///
/// Checks run before the store is touched, so a rejected upload leaves the
/// store exactly as it was. Returns the stored dataset name.
pub fn ingest(
    store: &dyn DatasetStore,
    upload: Upload,
    max_bytes: usize,
) -> Result<String, DatasetError> {
    check_media_type(upload.media_type.as_deref())?;
    if upload.payload.len() > max_bytes {
        return Err(too_large(max_bytes));
    }
    check_name(&upload.filename)?;

    store.put(&upload.filename, &upload.payload)?;
    log::info!(
        "stored dataset {} ({} bytes)",
        upload.filename,
        upload.payload.len()
    );
    Ok(upload.filename)
}
