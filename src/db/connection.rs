use tokio_postgres::{Client, NoTls};
use tracing::{debug, error};

use crate::config::DatabaseConfig;
use crate::error::InspectorError;

/// Opens a fresh session for a single request.
///
/// The connection driver runs on its own task and finishes once the returned
/// `Client` is dropped, so the session lives exactly as long as the caller
/// holds the client. Nothing is pooled.
pub async fn connect(config: &DatabaseConfig) -> Result<Client, InspectorError> {
    let mut pg_config = tokio_postgres::Config::new();
    pg_config
        .host(&config.host)
        .port(config.port)
        .dbname(&config.name)
        .user(&config.user)
        .password(&config.password)
        .application_name("schema-explorer");

    let (client, connection) = pg_config.connect(NoTls).await.map_err(|e| {
        error!("Failed to connect to {}:{}: {}", config.host, config.port, e);
        InspectorError::connection(&e)
    })?;

    tokio::spawn(async move {
        if let Err(e) = connection.await {
            error!("Database connection error: {}", e);
        }
    });

    debug!("Opened database session to {}:{}/{}", config.host, config.port, config.name);
    Ok(client)
}
