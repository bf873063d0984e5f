pub mod connection;
pub mod format;
pub mod models;
pub mod sampler;
pub mod schema_inspector;
pub mod sql;

pub use connection::connect;
pub use format::format_size;
pub use models::{ColumnInfo, TableDetail, TableSummary};
pub use sampler::{ColumnSampler, PerColumnSampler};
pub use schema_inspector::SchemaInspector;
