use crate::config::AppConfig;
use crate::controller::OfferListController;
use crate::router::handle;
use crate::state::AppState;
use astra::Server;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod controller;
mod display;
mod domain;
mod errors;
mod loader;
mod responses;
mod router;
mod state;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    // RUST_LOG=offer_board=debug for per-request filter stats
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 1️⃣ Configuration
    let config = match AppConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    let settings = match config.list_settings() {
        Ok(settings) => settings,
        Err(e) => {
            error!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };
    info!(
        badges = settings.badges.len(),
        sort = ?settings.sort,
        locale = ?settings.locale,
        "settings ready"
    );

    let source = match loader::source_from_location(&config.source, config.fetch_timeout) {
        Ok(source) => source,
        Err(e) => {
            error!("Cannot use offers source: {e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Load offers once; a failure is shown on the page until the next reload
    let mut controller = OfferListController::new(settings);
    match controller.load(source.as_ref()) {
        Ok(_) => info!(active = controller.offers().active_count(), "initial load done"),
        Err(e) => warn!("Starting without offers: {e}"),
    }

    let state = Arc::new(AppState::new(controller, source));

    // 3️⃣ Start the server
    let addr = config.bind_addr;
    info!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(config.workers);

    let result = server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => {
            if let errors::ServerError::Internal(detail) = &err {
                error!("Request failed: {detail}");
            }
            responses::html_error_response(err)
        }
    });

    if let Err(e) = result {
        error!("Server ended with error: {e}");
    }

    info!("Server shut down cleanly.");
}
