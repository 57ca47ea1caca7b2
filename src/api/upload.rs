use std::sync::Arc;

use actix_multipart::{Multipart, MultipartError};
use actix_web::http::header::ContentType;
use actix_web::{web, HttpResponse};
use futures::TryStreamExt;

use crate::data::ingest::{append_chunk, check_media_type, ingest, Upload};
use crate::error::DatasetError;
use crate::state::AppState;

/// Multipart field carrying the CSV file.
pub const FILE_FIELD: &str = "file";

// ---------------------------------------------------------------------------
// POST /upload
// ---------------------------------------------------------------------------

pub async fn upload(
    state: web::Data<AppState>,
    mut form: Multipart,
) -> Result<HttpResponse, DatasetError> {
    let upload = read_file_field(&mut form, state.max_upload_bytes)
        .await
        .map_err(|e| {
            log::warn!("rejected upload: {e}");
            e
        })?;

    let store = Arc::clone(&state.store);
    let max_bytes = state.max_upload_bytes;
    web::block(move || ingest(store.as_ref(), upload, max_bytes))
        .await?
        .map_err(|e| {
            match &e {
                DatasetError::Io(_) | DatasetError::Worker(_) => log::error!("upload failed: {e}"),
                _ => log::warn!("rejected upload: {e}"),
            }
            e
        })?;

    Ok(HttpResponse::Ok()
        .insert_header(ContentType::plaintext())
        .body("File uploaded successfully"))
}

/// Pull the `file` part out of the form, streaming its body under the size
/// ceiling. Other parts are drained and ignored.
async fn read_file_field(form: &mut Multipart, max_bytes: usize) -> Result<Upload, DatasetError> {
    while let Some(mut field) = form.try_next().await.map_err(malformed)? {
        if field.name() != Some(FILE_FIELD) {
            while field.try_next().await.map_err(malformed)?.is_some() {}
            continue;
        }

        let media_type = field.content_type().map(|m| m.to_string());
        // Refuse before reading a byte of the body.
        check_media_type(media_type.as_deref())?;
        let filename = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .map(str::to_string)
            .ok_or_else(|| DatasetError::validation("form field 'file' has no filename"))?;

        let mut payload = Vec::new();
        while let Some(chunk) = field.try_next().await.map_err(malformed)? {
            append_chunk(&mut payload, &chunk, max_bytes)?;
        }
        return Ok(Upload {
            media_type,
            filename,
            payload,
        });
    }
    Err(DatasetError::validation(format!(
        "failed to read file from request: missing form field '{FILE_FIELD}'"
    )))
}

fn malformed(err: MultipartError) -> DatasetError {
    DatasetError::validation(format!("failed to read file from request: {err}"))
}
