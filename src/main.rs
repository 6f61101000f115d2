use crate::config::{DashboardConfig, CONFIG_PATH};
use crate::responses::html_error_response;
use crate::router::handle;
use astra::Server;
use std::path::Path;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod config;
mod data;
mod errors;
mod params;
mod pipeline;
mod render;
mod responses;
mod router;
mod session;
mod templates;
mod views;

#[cfg(test)]
mod tests;

fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() {
    // 1. Load config (defaults when dashboard.toml is absent)
    let config = match DashboardConfig::load(Path::new(CONFIG_PATH)) {
        Ok(config) => config,
        Err(e) => {
            init_tracing("info");
            error!("{e}");
            std::process::exit(1);
        }
    };
    init_tracing(&config.log_filter);

    // 2. Start the server
    info!(
        addr = %config.bind_addr,
        data_dir = %config.data_dir.display(),
        "starting dashboard at http://{}",
        config.bind_addr
    );

    let server = Server::bind(&config.bind_addr).max_workers(config.max_workers);

    // 3. Serve requests; every request reads its own session and data
    let result = server.serve(move |req, _info| match handle(req, &config) {
        Ok(resp) => resp,
        Err(err) => html_error_response(err),
    });

    if let Err(e) = result {
        error!("server ended with error: {e}");
        std::process::exit(1);
    }

    info!("server shut down cleanly");
}
