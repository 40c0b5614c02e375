//! WebServer entry point
//!
//! Loads the dataset through the ingestion collaborator, then serves the
//! dashboard until Ctrl+C.

use clap::Parser;
use ingest::{DatasetLoader, SourceArgs};
use shared::{ProcessId, logging, process_info};
use std::net::SocketAddr;
use tokio::signal;

use webserver::{DashboardState, RealStaticFileServer, RealWebSocketManager, WebServer, WebServerError, WebServerResult};

#[derive(Parser, Debug)]
#[command(name = "webserver")]
#[command(about = "Interactive logic model dashboard")]
struct Args {
    /// Port for HTTP server (browser connections)
    #[arg(long, env = "LOGIC_MODEL_PORT", default_value = "8080")]
    port: u16,

    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Static files directory
    #[arg(long, env = "LOGIC_MODEL_STATIC_DIR", default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/static"))]
    static_dir: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(flatten)]
    source: SourceArgs,
}

#[tokio::main]
async fn main() -> WebServerResult<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    ProcessId::init_webserver();
    logging::init_tracing_with_level(Some(&args.log_level));
    logging::log_startup(ProcessId::current(), &format!("dashboard on port {}", args.port));

    let http_addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .map_err(|e| WebServerError::config(format!("Invalid listen address: {}", e)))?;

    let config = args.source.into_config()?;
    let loaded = DatasetLoader::from_config(&config)?.load().await?;
    process_info!(
        ProcessId::current(),
        "📦 Dataset loaded from {} ({} strategies)",
        loaded.origin,
        loaded.dataset.strategy_count()
    );

    let websocket_manager = RealWebSocketManager::new();
    let _cleanup = websocket_manager.start_cleanup_task();
    let static_server = RealStaticFileServer::new(&args.static_dir);
    let state = DashboardState::new(loaded.dataset, loaded.origin);

    let server = WebServer::new(state, websocket_manager, static_server);

    let shutdown = async {
        match signal::ctrl_c().await {
            Ok(()) => logging::log_shutdown(ProcessId::current(), "Received Ctrl+C signal"),
            Err(err) => {
                logging::log_error(ProcessId::current(), "Signal handling", &err);
                std::future::pending::<()>().await;
            }
        }
    };
    server.run(http_addr, shutdown).await?;

    logging::log_success(ProcessId::current(), "WebServer stopped gracefully");
    Ok(())
}
