use clap::Parser;
use std::sync::Arc;
use tracing::{error, info};

use schema_explorer::config::{AppConfig, CliArgs};
use schema_explorer::util::logging::init_tracing;
use schema_explorer::web::{self, state::AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args = CliArgs::parse();

    // Initialize logging
    init_tracing(args.log_json);

    // Load configuration
    let config = match AppConfig::new(&args) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Inspecting database {} at {}:{} as {}",
        config.database.name, config.database.host, config.database.port, config.database.user
    );

    let web_config = config.web.clone();
    let app_state = Arc::new(AppState::new(config));

    // Start the web server
    info!("Starting schema explorer on {}:{}", web_config.host, web_config.port);
    match web::run_server(web_config, app_state).await {
        Ok(_) => info!("Server stopped gracefully"),
        Err(e) => {
            error!("Server error: {}", e);
            return Err(e as Box<dyn std::error::Error>);
        }
    }

    Ok(())
}
