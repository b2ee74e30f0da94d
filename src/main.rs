//! JSON Aggregation Gateway
//!
//! An HTTP gateway built with Tokio and Axum. Each route invokes one or
//! more downstream service calls and merges their results into a single
//! keyed JSON response.
//!
//! # Architecture Overview
//!
//! ```text
//!                     ┌────────────────────────────────────────────────┐
//!                     │                   GATEWAY                       │
//!                     │                                                 │
//!   Client Request    │  ┌─────────┐   ┌────────────┐   ┌───────────┐  │
//!   ──────────────────┼─▶│  http   │──▶│ aggregator │──▶│ services  │──┼──▶ Downstream
//!                     │  │ server  │   │  (merge)   │   │ (GET+JSON)│  │    APIs
//!                     │  └─────────┘   └────────────┘   └───────────┘  │
//!                     │                                                 │
//!                     │  ┌───────────────────────────────────────────┐ │
//!                     │  │          Cross-Cutting Concerns            │ │
//!                     │  │  ┌────────┐ ┌──────────┐ ┌─────────────┐  │ │
//!                     │  │  │ config │ │ security │ │observability│  │ │
//!                     │  │  └────────┘ └──────────┘ └─────────────┘  │ │
//!                     │  │  ┌─────────────────────────────────────┐  │ │
//!                     │  │  │        lifecycle (shutdown)         │  │ │
//!                     │  │  └─────────────────────────────────────┘  │ │
//!                     │  └───────────────────────────────────────────┘ │
//!                     └────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use aggregator_gateway::config::{load_config, GatewayConfig};
use aggregator_gateway::http::HttpServer;
use aggregator_gateway::lifecycle::{listen_for_ctrl_c, Shutdown};
use aggregator_gateway::observability::init_logging;

#[derive(Parser)]
#[command(name = "aggregator-gateway")]
#[command(about = "JSON aggregation gateway", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file. Built-in defaults apply when
    /// omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured listen port.
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => GatewayConfig::default(),
    };
    if let Some(port) = cli.port {
        config.listener.set_port(port);
    }

    init_logging(&config.observability);

    tracing::info!("aggregator-gateway v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        services = config.services.len(),
        routes = config.routes.len(),
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(address = %local_addr, "Server is running");

    let shutdown = Shutdown::new();
    listen_for_ctrl_c(shutdown.clone());

    let server = HttpServer::new(config)?;
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
