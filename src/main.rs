mod api;
mod app;
mod config;
mod data;
mod error;
mod state;

use clap::Parser;

use config::Config;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::parse();
    app::serve(config).await
}
