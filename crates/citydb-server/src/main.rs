//! citydb-server — HTTP/JSON front-end for citydb-core
//!
//! Loads the city dataset once at startup and serves scoring and listing
//! queries from the in-memory catalog.
//!
//! Usage examples
//! --------------
//!
//! - Serve the bundled dataset on port 8000
//!   $ citydb-server
//!
//! - Serve a custom (optionally gzipped) dataset
//!   $ citydb-server --input ./cities_data.json.gz --port 9000
//!
//! - Query it
//!   $ curl http://localhost:8000/health
//!   $ curl -X POST http://localhost:8000/city/score \
//!       -H 'content-type: application/json' -d '{"city_name": "Berlin"}'
//!
//! Logging is controlled through `RUST_LOG`
//! (default: `citydb_server=info,citydb_core=info`).
mod args;

use crate::args::CliArgs;
use anyhow::Context;
use citydb_core::Catalog;
use clap::Parser;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "citydb_server=info,citydb_core=info";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let input = args.input.unwrap_or_else(Catalog::default_dataset_path);

    // The catalog must be complete before the listener exists.
    let catalog = Catalog::load_from_path(&input)
        .and_then(|catalog| catalog.ensure_servable().map(|()| catalog))
        .inspect_err(|e| error!(path = %input.display(), error = %e, "refusing to start"))
        .with_context(|| format!("cannot serve dataset {}", input.display()))?;

    let stats = catalog.stats();
    let app = citydb_server::router(Arc::new(catalog));

    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(
        %addr,
        cities = stats.cities,
        countries = stats.countries,
        "citydb-server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("citydb-server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
