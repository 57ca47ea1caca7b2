use std::path::PathBuf;
use std::sync::Arc;

use crate::config::Config;
use crate::data::store::DatasetStore;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Everything a request handler needs, shared by all workers.
/// Holds no per-request mutable state; the store is the only shared resource.
#[derive(Clone)]
pub struct AppState {
    /// Dataset persistence, injected so tests can swap in a memory store.
    pub store: Arc<dyn DatasetStore>,

    /// Upload ceiling in bytes.
    pub max_upload_bytes: usize,

    /// Static page served at `/`.
    pub index_file: PathBuf,
}

impl AppState {
    pub fn new(store: Arc<dyn DatasetStore>, config: &Config) -> Self {
        Self {
            store,
            max_upload_bytes: config.max_upload_bytes,
            index_file: config.index_file.clone(),
        }
    }
}
