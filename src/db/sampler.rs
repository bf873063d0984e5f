use async_trait::async_trait;
use serde_json::Value;
use tokio_postgres::Client;
use tracing::debug;

use super::sql::sample_column_query;

/// Produces sample values for the columns of a live table.
///
/// Implementations return one entry per requested column, in the same order,
/// each holding zero or one non-null value.
#[async_trait]
pub trait ColumnSampler: Send + Sync {
    async fn sample(
        &self,
        client: &Client,
        schema: &str,
        table: &str,
        columns: &[String],
    ) -> Result<Vec<Vec<Value>>, tokio_postgres::Error>;
}

/// Issues one `LIMIT 1` query per column.
///
/// Fine for the handful of columns an explorer page shows. Wide tables want a
/// batched sampler instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct PerColumnSampler;

#[async_trait]
impl ColumnSampler for PerColumnSampler {
    async fn sample(
        &self,
        client: &Client,
        schema: &str,
        table: &str,
        columns: &[String],
    ) -> Result<Vec<Vec<Value>>, tokio_postgres::Error> {
        let mut samples = Vec::with_capacity(columns.len());

        for column in columns {
            let query = sample_column_query(schema, table, column);
            let row = client.query_opt(query.as_str(), &[]).await?;
            let value = match row {
                Some(row) => vec![row.try_get::<_, Value>(0)?],
                None => Vec::new(),
            };
            samples.push(value);
        }

        debug!("Sampled {} columns of {}.{}", columns.len(), schema, table);
        Ok(samples)
    }
}
