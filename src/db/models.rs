use serde::Serialize;

/// One base table in a schema, as listed by the explorer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableSummary {
    pub table_name: String,
    /// Planner estimate from `pg_class.reltuples`. `None` when the table has
    /// never been analyzed.
    pub estimated_row_count: Option<i64>,
    /// Total relation size (heap, indexes, TOAST) rendered by `format_size`.
    pub total_size: String,
    pub description: Option<String>,
}

/// Table-level comment. `description` is `None` both for an uncommented
/// table and for a table that does not exist.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableDetail {
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnInfo {
    pub column_name: String,
    pub data_type: String,
    pub description: Option<String>,
    /// Zero or one non-null value taken from the live table.
    pub sample_data: Vec<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn column_info_serializes_with_frontend_field_names() {
        let column = ColumnInfo {
            column_name: "amount".to_string(),
            data_type: "numeric".to_string(),
            description: None,
            sample_data: vec![json!(12.5)],
        };

        assert_eq!(
            serde_json::to_value(&column).unwrap(),
            json!({
                "column_name": "amount",
                "data_type": "numeric",
                "description": null,
                "sample_data": [12.5]
            })
        );
    }

    #[test]
    fn unanalyzed_table_serializes_null_row_count() {
        let table = TableSummary {
            table_name: "staging".to_string(),
            estimated_row_count: None,
            total_size: "0.01 MB".to_string(),
            description: Some("Raw loads".to_string()),
        };

        let value = serde_json::to_value(&table).unwrap();
        assert_eq!(value["estimated_row_count"], serde_json::Value::Null);
        assert_eq!(value["total_size"], "0.01 MB");
    }
}
