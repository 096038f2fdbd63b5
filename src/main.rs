use mcp_planner_server::config::ServerConfig;
use mcp_planner_server::runner::CrewCommandRunner;
use mcp_planner_server::server::McpServer;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // .env first, so the config sees it
    let _ = dotenv::dotenv();

    // Diagnostics go to stderr; stdout carries the protocol stream.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = match ServerConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("mcp-planner-server: configuration error: {e}");
            std::process::exit(1);
        }
    };

    let runner = match CrewCommandRunner::new(&config.crew_command) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("mcp-planner-server: configuration error: {e}");
            std::process::exit(1);
        }
    };

    let server = McpServer::new(runner);
    if let Err(e) = server.run().await {
        eprintln!("mcp-planner-server: fatal error: {e}");
        std::process::exit(1);
    }
}
