use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info};

use crate::db::{self, ColumnInfo, SchemaInspector, TableDetail, TableSummary};
use crate::error::InspectorError;
use crate::web::state::AppState;

// Response types

#[derive(Debug, Serialize)]
pub struct TablesResponse {
    pub tables: Vec<TableSummary>,
}

#[derive(Debug, Serialize)]
pub struct ColumnsResponse {
    pub columns: Vec<ColumnInfo>,
}

/// Error body; the explorer frontend reads `detail`.
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub detail: String,
}

// System status

#[derive(Debug, Serialize)]
pub struct SystemStatus {
    pub version: String,
    pub uptime_seconds: i64,
}

pub type ApiError = (StatusCode, Json<ErrorDetail>);

fn internal_error(err: InspectorError) -> ApiError {
    error!("Request failed: {}", err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorDetail {
            detail: err.to_string(),
        }),
    )
}

// API Implementations

pub async fn read_root() -> Json<Value> {
    Json(json!({ "Hello": "World" }))
}

pub async fn list_tables(
    State(state): State<Arc<AppState>>,
    Path(schema): Path<String>,
) -> Result<Json<TablesResponse>, ApiError> {
    let start_time = Instant::now();
    info!("Listing tables in schema {}", schema);

    let client = db::connect(&state.config.database)
        .await
        .map_err(internal_error)?;
    let tables = SchemaInspector::new(&client)
        .list_tables(&schema)
        .await
        .map_err(internal_error)?;

    info!(
        "Listed {} tables in schema {} in {}ms",
        tables.len(),
        schema,
        start_time.elapsed().as_millis()
    );
    Ok(Json(TablesResponse { tables }))
}

pub async fn get_table_description(
    State(state): State<Arc<AppState>>,
    Path((schema, table)): Path<(String, String)>,
) -> Result<Json<TableDetail>, ApiError> {
    info!("Fetching description of {}.{}", schema, table);

    let client = db::connect(&state.config.database)
        .await
        .map_err(internal_error)?;
    let detail = SchemaInspector::new(&client)
        .get_table_description(&schema, &table)
        .await
        .map_err(internal_error)?;

    Ok(Json(detail))
}

pub async fn list_columns(
    State(state): State<Arc<AppState>>,
    Path((schema, table)): Path<(String, String)>,
) -> Result<Json<ColumnsResponse>, ApiError> {
    let start_time = Instant::now();
    info!("Listing columns of {}.{}", schema, table);

    let client = db::connect(&state.config.database)
        .await
        .map_err(internal_error)?;
    let columns = SchemaInspector::new(&client)
        .list_columns(&schema, &table)
        .await
        .map_err(internal_error)?;

    info!(
        "Listed {} columns of {}.{} in {}ms",
        columns.len(),
        schema,
        table,
        start_time.elapsed().as_millis()
    );
    Ok(Json(ColumnsResponse { columns }))
}

pub async fn system_status(State(state): State<Arc<AppState>>) -> Json<SystemStatus> {
    Json(SystemStatus {
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.uptime_seconds(),
    })
}
