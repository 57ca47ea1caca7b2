use std::path::PathBuf;

use clap::Parser;

use crate::data::ingest::MAX_UPLOAD_BYTES;

/// Runtime settings, from flags or `SCATTER_*` environment variables.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Upload CSV datasets and serve them as scatter plot data")]
pub struct Config {
    /// Address the HTTP server listens on.
    #[arg(long, env = "SCATTER_BIND", default_value = "localhost:8080")]
    pub bind: String,

    /// Directory holding uploaded datasets. Created at startup if absent.
    #[arg(long, env = "SCATTER_DATA_DIR", default_value = "./data")]
    pub data_dir: PathBuf,

    /// Static page served at `/`.
    #[arg(long, env = "SCATTER_INDEX_FILE", default_value = "./ui/index.html")]
    pub index_file: PathBuf,

    /// Largest accepted upload, in bytes.
    #[arg(long, env = "SCATTER_MAX_UPLOAD_BYTES", default_value_t = MAX_UPLOAD_BYTES)]
    pub max_upload_bytes: usize,
}
