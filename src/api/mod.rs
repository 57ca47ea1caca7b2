//! HTTP boundary: routes requests onto the data layer and maps
//! [`DatasetError`](crate::error::DatasetError) kinds onto status codes.

pub mod plot;
pub mod upload;

use actix_files::NamedFile;
use actix_web::web;

use crate::state::AppState;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/upload", web::post().to(upload::upload))
        .route("/list", web::get().to(plot::list))
        .route("/plot/{fileName}", web::get().to(plot::plot));
}

/// `GET /` – the static index page.
async fn index(state: web::Data<AppState>) -> actix_web::Result<NamedFile> {
    Ok(NamedFile::open_async(&state.index_file).await?)
}
