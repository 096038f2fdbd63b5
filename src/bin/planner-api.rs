use std::sync::Arc;

use mcp_planner_server::config::ServerConfig;
use mcp_planner_server::http::serve_api;
use mcp_planner_server::runner::CrewCommandRunner;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let _ = dotenv::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = match ServerConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("planner-api: configuration error: {e}");
            std::process::exit(1);
        }
    };

    let runner = match CrewCommandRunner::new(&config.crew_command) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("planner-api: configuration error: {e}");
            std::process::exit(1);
        }
    };

    let addr = format!("{}:{}", config.api_host, config.api_port);
    let listener = match TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("planner-api: cannot bind {addr}: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = serve_api(listener, Arc::new(runner)).await {
        eprintln!("planner-api: fatal error: {e}");
        std::process::exit(1);
    }
}
