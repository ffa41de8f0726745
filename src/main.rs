use armory_cart::cart::{spawn_session_sweeper, AppState};
use armory_cart::catalog::Catalog;
use armory_cart::config::Config;
use armory_cart::logging::init_logging;
use armory_cart::router::create_app_router;
use clap::Parser;
use std::process::ExitCode;
use std::sync::Arc;

#[tokio::main]
async fn main() -> ExitCode {
    let config = Config::parse();

    if let Err(err) = init_logging(&config.log_level, config.log_json) {
        eprintln!("failed to initialize logging: {err}");
        return ExitCode::FAILURE;
    }

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "server stopped");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = match &config.catalog {
        Some(path) => Catalog::from_path(path)?,
        None => Catalog::builtin()?,
    };

    // Initialize application state
    let state = Arc::new(match &config.assets_dir {
        Some(dir) => AppState::new(catalog, config.session_ttl(), dir.clone()),
        None => AppState::discover(catalog, config.session_ttl()),
    });

    spawn_session_sweeper(state.clone(), config.sweep_interval());

    // Build application router with all routes and middleware
    let app = create_app_router(state);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "server running");

    axum::serve(listener, app).await?;
    Ok(())
}
