use crate::config::AppConfig;

/// Shared application state for the web server.
///
/// Read-only after start-up: handlers open their own database session per
/// request, so nothing here needs locking.
pub struct AppState {
    pub config: AppConfig,
    pub startup_time: chrono::DateTime<chrono::Utc>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            startup_time: chrono::Utc::now(),
        }
    }

    pub fn uptime_seconds(&self) -> i64 {
        (chrono::Utc::now() - self.startup_time).num_seconds()
    }
}
