use tokio_postgres::{Client, Row};
use tracing::{debug, error};

use super::format::format_size;
use super::models::{ColumnInfo, TableDetail, TableSummary};
use super::sampler::{ColumnSampler, PerColumnSampler};
use super::sql;
use crate::error::InspectorError;

/// Read-only view over one database's catalog.
///
/// Borrows a request-scoped client; every call is a fresh round trip and
/// nothing is cached between calls.
pub struct SchemaInspector<'a, S = PerColumnSampler> {
    client: &'a Client,
    sampler: S,
}

impl<'a> SchemaInspector<'a, PerColumnSampler> {
    pub fn new(client: &'a Client) -> Self {
        Self::with_sampler(client, PerColumnSampler)
    }
}

impl<'a, S: ColumnSampler> SchemaInspector<'a, S> {
    pub fn with_sampler(client: &'a Client, sampler: S) -> Self {
        Self { client, sampler }
    }

    /// Base tables of `schema`, ordered by name.
    pub async fn list_tables(&self, schema: &str) -> Result<Vec<TableSummary>, InspectorError> {
        let context = || format!("Error fetching tables for schema {}", schema);

        let rows = self
            .client
            .query(sql::LIST_TABLES, &[&schema])
            .await
            .map_err(|e| query_error(context(), &e))?;

        let tables = rows
            .iter()
            .map(table_summary_from_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| query_error(context(), &e))?;

        debug!("Found {} base tables in schema {}", tables.len(), schema);
        Ok(tables)
    }

    /// Table-level comment. An absent table and an uncommented one both give
    /// `description: None`.
    pub async fn get_table_description(
        &self,
        schema: &str,
        table: &str,
    ) -> Result<TableDetail, InspectorError> {
        let context = || format!("Error fetching description for table {}.{}", schema, table);

        let row = self
            .client
            .query_opt(sql::TABLE_DESCRIPTION, &[&schema, &table])
            .await
            .map_err(|e| query_error(context(), &e))?;

        let description = match row {
            Some(row) => row
                .try_get::<_, Option<String>>("description")
                .map_err(|e| query_error(context(), &e))?,
            None => {
                debug!("No base table {}.{}", schema, table);
                None
            }
        };

        Ok(TableDetail { description })
    }

    /// Columns of `table` in declaration order, each with at most one sample
    /// value. Any failing query, sampling included, fails the whole call.
    pub async fn list_columns(
        &self,
        schema: &str,
        table: &str,
    ) -> Result<Vec<ColumnInfo>, InspectorError> {
        let context = || format!("Error fetching columns for table {}.{}", schema, table);

        let rows = self
            .client
            .query(sql::LIST_COLUMNS, &[&schema, &table])
            .await
            .map_err(|e| query_error(context(), &e))?;

        let mut catalog = Vec::with_capacity(rows.len());
        for row in &rows {
            let entry = column_entry_from_row(row).map_err(|e| query_error(context(), &e))?;
            catalog.push(entry);
        }

        let names: Vec<String> = catalog.iter().map(|(name, _, _)| name.clone()).collect();
        let samples = self
            .sampler
            .sample(self.client, schema, table, &names)
            .await
            .map_err(|e| query_error(context(), &e))?;

        let columns: Vec<ColumnInfo> = catalog
            .into_iter()
            .zip(samples)
            .map(|((column_name, data_type, description), sample_data)| ColumnInfo {
                column_name,
                data_type,
                description,
                sample_data,
            })
            .collect();

        debug!("Found {} columns in {}.{}", columns.len(), schema, table);
        Ok(columns)
    }
}

fn query_error(context: String, err: &tokio_postgres::Error) -> InspectorError {
    error!("{}: {}", context, err);
    InspectorError::query(context, err)
}

fn table_summary_from_row(row: &Row) -> Result<TableSummary, tokio_postgres::Error> {
    let total_bytes: i64 = row.try_get("total_bytes")?;

    Ok(TableSummary {
        table_name: row.try_get("table_name")?,
        estimated_row_count: row.try_get("estimated_row_count")?,
        total_size: format_size(total_bytes),
        description: row.try_get("description")?,
    })
}

type ColumnEntry = (String, String, Option<String>);

fn column_entry_from_row(row: &Row) -> Result<ColumnEntry, tokio_postgres::Error> {
    Ok((
        row.try_get("column_name")?,
        row.try_get("data_type")?,
        row.try_get("description")?,
    ))
}
