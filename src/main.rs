use crate::config::AppConfig;
use crate::db::{init_db, Database};
use crate::router::{dispatch, AppState};
use astra::Server;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod config;
mod db;
mod domain;
mod errors;
mod handlers;
mod responses;
mod router;
mod services;
mod templates;


fn main() {
    // A missing .env is fine; real deployments set the environment directly.
    dotenvy::dotenv().ok();

    let cfg = match AppConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Invalid configuration: {e}");
            std::process::exit(2);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&cfg.log_filter))
        .init();

    let db = Database::new(cfg.database_path.clone());
    if let Err(e) = init_db(&db) {
        error!(error = %e, path = %cfg.database_path, "database initialization failed");
        std::process::exit(1);
    }

    let state = AppState {
        db,
        max_body_bytes: cfg.max_body_bytes,
    };

    let addr = cfg.bind_addr();
    info!(%addr, workers = cfg.max_workers, "starting Zeecurity backend");

    let server = Server::bind(addr).max_workers(cfg.max_workers);
    let result = server.serve(move |req, _info| dispatch(req, &state));

    if let Err(e) = result {
        error!(error = %e, "server ended with error");
        std::process::exit(1);
    }

    info!("server shut down cleanly");
}
