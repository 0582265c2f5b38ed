use tracing::info;

use gatehouse::web::WebServer;
use gatehouse::Config;

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match Config::load("config.toml") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config.toml: {e}");
            eprintln!("Using default configuration.");
            Config::default()
        }
    };

    // Initialize logging
    if let Err(e) = gatehouse::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        // Fall back to console-only logging
        gatehouse::logging::init_console_only(&config.logging.level);
    }

    info!("gatehouse auth service");

    let server = match WebServer::new(&config.web) {
        Ok(server) => server,
        Err(e) => {
            tracing::error!("invalid server configuration: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = server.run().await {
        tracing::error!("server error: {e}");
        std::process::exit(1);
    }
}
