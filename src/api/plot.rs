use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::data::cancel::CancelFlag;
use crate::data::catalog::list_datasets;
use crate::data::loader::load_points;
use crate::data::model::ScatterPlot;
use crate::error::DatasetError;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /list
// ---------------------------------------------------------------------------

pub async fn list(state: web::Data<AppState>) -> Result<HttpResponse, DatasetError> {
    let store = Arc::clone(&state.store);
    let names = web::block(move || list_datasets(store.as_ref()))
        .await?
        .map_err(|e| {
            log::error!("listing datasets failed: {e}");
            e
        })?;
    Ok(HttpResponse::Ok().json(names))
}

// ---------------------------------------------------------------------------
// GET /plot/{fileName}
// ---------------------------------------------------------------------------

pub async fn plot(
    state: web::Data<AppState>,
    file_name: web::Path<String>,
) -> Result<HttpResponse, DatasetError> {
    let name = file_name.into_inner();

    // Dropping this future (client gone) raises the flag for the worker.
    let cancel = CancelFlag::default();
    let _guard = cancel.drop_guard();

    let store = Arc::clone(&state.store);
    let points = {
        let name = name.clone();
        web::block(move || load_points(store.as_ref(), &name, &cancel)).await?
    }
    .map_err(|e| {
        match &e {
            DatasetError::Io(_) | DatasetError::Worker(_) => {
                log::error!("reading dataset {name} failed: {e}")
            }
            _ => log::warn!("cannot plot {name}: {e}"),
        }
        e
    })?;

    let plot = ScatterPlot::assemble(points);
    log::debug!("plotting {name} with {} points", plot.data_points.len());
    Ok(HttpResponse::Ok().json(plot))
}
