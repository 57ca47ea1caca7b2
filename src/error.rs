use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

// ---------------------------------------------------------------------------
// DatasetError – every failure the data layer can report
// ---------------------------------------------------------------------------

/// Failure kinds shared by the store, ingestion, catalog and loader.
///
/// Components never recover from these; they bubble up to the HTTP layer,
/// which maps each kind to a status code.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// Disallowed request input: wrong media type, missing field, oversize
    /// payload, unusable dataset name.
    #[error("{0}")]
    Validation(String),

    #[error("dataset '{0}' not found")]
    NotFound(String),

    /// `row` is the 1-based record number in the file (the header is row 1).
    #[error("row {row}: {message}")]
    Parse { row: u64, message: String },

    #[error("storage failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("request cancelled")]
    Cancelled,

    #[error("worker pool failure: {0}")]
    Worker(String),
}

impl DatasetError {
    pub fn validation(msg: impl Into<String>) -> Self {
        DatasetError::Validation(msg.into())
    }

    pub fn parse(row: u64, msg: impl Into<String>) -> Self {
        DatasetError::Parse {
            row,
            message: msg.into(),
        }
    }
}

impl From<actix_web::error::BlockingError> for DatasetError {
    fn from(err: actix_web::error::BlockingError) -> Self {
        DatasetError::Worker(err.to_string())
    }
}

impl ResponseError for DatasetError {
    fn status_code(&self) -> StatusCode {
        match self {
            DatasetError::Validation(_)
            | DatasetError::NotFound(_)
            | DatasetError::Parse { .. } => StatusCode::BAD_REQUEST,
            DatasetError::Cancelled => StatusCode::REQUEST_TIMEOUT,
            DatasetError::Io(_) | DatasetError::Worker(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::plaintext())
            .body(self.to_string())
    }
}
