/// Default HTTP bind host.
const DEFAULT_API_HOST: &str = "0.0.0.0";

/// Default HTTP bind port.
const DEFAULT_API_PORT: u16 = 8000;

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Crew program and arguments, e.g. `["python", "-m", "calender"]`.
    pub crew_command: Vec<String>,
    pub api_host: String,
    pub api_port: u16,
}

impl ServerConfig {
    /// Load configuration from environment.
    ///
    /// - `PLANNER_CREW_COMMAND` (required) — whitespace-separated command
    ///   that runs the planning crew
    /// - `API_HOST` (optional, default 0.0.0.0) — HTTP bind host
    /// - `API_PORT` (optional, default 8000) — HTTP bind port
    pub fn from_env() -> Result<Self, String> {
        let raw = std::env::var("PLANNER_CREW_COMMAND")
            .map_err(|_| "PLANNER_CREW_COMMAND environment variable is not set".to_string())?;
        let crew_command = parse_command(&raw)?;

        let api_host =
            std::env::var("API_HOST").unwrap_or_else(|_| DEFAULT_API_HOST.to_string());

        let api_port = match std::env::var("API_PORT") {
            Ok(val) => val
                .parse::<u16>()
                .map_err(|_| "API_PORT must be a port number".to_string())?,
            Err(_) => DEFAULT_API_PORT,
        };

        Ok(Self {
            crew_command,
            api_host,
            api_port,
        })
    }
}

/// Split a command string on whitespace into program + arguments.
fn parse_command(raw: &str) -> Result<Vec<String>, String> {
    let parts: Vec<String> = raw.split_whitespace().map(str::to_string).collect();
    if parts.is_empty() {
        return Err("PLANNER_CREW_COMMAND must not be empty".to_string());
    }
    Ok(parts)
}
