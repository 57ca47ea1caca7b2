use std::sync::Arc;

use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use anyhow::{Context, Result};

use crate::api;
use crate::config::Config;
use crate::data::store::FsStore;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// HTTP server bootstrap
// ---------------------------------------------------------------------------

/// Establish the dataset directory, then serve until shutdown.
///
/// A data directory that cannot be created is a startup error; requests are
/// never served against a missing store.
pub async fn serve(config: Config) -> Result<()> {
    let store = FsStore::open_dir(&config.data_dir)
        .with_context(|| format!("creating data directory {}", config.data_dir.display()))?;
    log::info!("serving datasets from {}", store.root().display());

    let state = web::Data::new(AppState::new(Arc::new(store), &config));

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(api::configure)
    })
    .bind(&config.bind)
    .with_context(|| format!("binding to {}", config.bind))?;

    log::info!("listening on {}", config.bind);
    server.run().await.context("running HTTP server")
}
