pub mod config;
pub mod db;
pub mod error;
pub mod util;
pub mod web;

// Re-export useful types for library users
pub use config::{AppConfig, CliArgs, DatabaseConfig, WebConfig};
pub use db::{ColumnInfo, SchemaInspector, TableDetail, TableSummary};
pub use error::InspectorError;
