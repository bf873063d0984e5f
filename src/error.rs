use thiserror::Error;

/// Failures surfaced by the schema inspector.
///
/// "Not found" is deliberately absent: a missing schema or table yields empty
/// results or a null description, never an error.
#[derive(Debug, Error)]
pub enum InspectorError {
    #[error("Database connection error: {message}")]
    Connection { message: String },

    #[error("{context}: {message}")]
    Query { context: String, message: String },
}

impl InspectorError {
    pub fn connection(err: &tokio_postgres::Error) -> Self {
        Self::Connection {
            message: driver_message(err),
        }
    }

    pub fn query(context: impl Into<String>, err: &tokio_postgres::Error) -> Self {
        Self::Query {
            context: context.into(),
            message: driver_message(err),
        }
    }
}

// tokio-postgres renders server errors as a bare "db error"; the useful text
// lives in the DbError.
fn driver_message(err: &tokio_postgres::Error) -> String {
    match err.as_db_error() {
        Some(db_err) => db_err.message().to_string(),
        None => err.to_string(),
    }
}
