//! Catalog queries used by the schema inspector.
//!
//! Schema and table names appear here only as bound parameters. The sampling
//! query is the one place identifiers reach SQL text, and it quotes them with
//! the driver's identifier escaping.

use postgres_protocol::escape::escape_identifier;

/// Base tables of a schema with planner row estimate, total size in bytes and
/// table comment. `$1` is the schema name.
pub const LIST_TABLES: &str = r#"
    SELECT
        t.table_name::text AS table_name,
        CASE
            WHEN c.reltuples < 0 THEN NULL
            ELSE c.reltuples::bigint
        END AS estimated_row_count,
        pg_total_relation_size(c.oid) AS total_bytes,
        d.description
    FROM information_schema.tables t
    JOIN pg_namespace n
        ON n.nspname = t.table_schema
    JOIN pg_class c
        ON c.relnamespace = n.oid
        AND c.relname = t.table_name
    LEFT JOIN pg_description d
        ON d.objoid = c.oid
        AND d.classoid = 'pg_class'::regclass
        AND d.objsubid = 0
    WHERE t.table_schema = $1::text
        AND t.table_type = 'BASE TABLE'
    ORDER BY t.table_name
"#;

/// Table-level comment of one base table. `$1` schema, `$2` table.
pub const TABLE_DESCRIPTION: &str = r#"
    SELECT d.description
    FROM information_schema.tables t
    JOIN pg_namespace n
        ON n.nspname = t.table_schema
    JOIN pg_class c
        ON c.relnamespace = n.oid
        AND c.relname = t.table_name
    LEFT JOIN pg_description d
        ON d.objoid = c.oid
        AND d.classoid = 'pg_class'::regclass
        AND d.objsubid = 0
    WHERE t.table_schema = $1::text
        AND t.table_name = $2::text
        AND t.table_type = 'BASE TABLE'
"#;

/// Columns of a table in declaration order with their comments.
/// `$1` schema, `$2` table.
pub const LIST_COLUMNS: &str = r#"
    SELECT
        cols.column_name::text AS column_name,
        cols.data_type::text AS data_type,
        d.description
    FROM information_schema.columns cols
    LEFT JOIN pg_description d
        ON d.objoid = (
            SELECT c.oid
            FROM pg_class c
            JOIN pg_namespace n ON n.oid = c.relnamespace
            WHERE n.nspname = $1::text
                AND c.relname = $2::text
        )
        AND d.classoid = 'pg_class'::regclass
        AND d.objsubid = cols.ordinal_position
    WHERE cols.table_schema = $1::text
        AND cols.table_name = $2::text
    ORDER BY cols.ordinal_position
"#;

/// Quotes a schema, table or column name so it can be spliced into SQL text.
pub fn quote_identifier(ident: &str) -> String {
    escape_identifier(ident)
}

/// Fetches one non-null value of `column`, rendered by `to_jsonb`.
pub fn sample_column_query(schema: &str, table: &str, column: &str) -> String {
    let column = quote_identifier(column);
    format!(
        "SELECT to_jsonb({column}) FROM {}.{} WHERE {column} IS NOT NULL LIMIT 1",
        quote_identifier(schema),
        quote_identifier(table),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_identifiers_are_double_quoted() {
        assert_eq!(quote_identifier("orders"), "\"orders\"");
    }

    #[test]
    fn embedded_quotes_are_doubled() {
        assert_eq!(quote_identifier("we\"ird"), "\"we\"\"ird\"");
        assert_eq!(
            quote_identifier("x\" ; DROP TABLE users; --"),
            "\"x\"\" ; DROP TABLE users; --\""
        );
    }

    #[test]
    fn reserved_words_and_case_are_preserved() {
        assert_eq!(quote_identifier("select"), "\"select\"");
        assert_eq!(quote_identifier("CamelCase"), "\"CamelCase\"");
    }

    #[test]
    fn sample_query_quotes_every_name() {
        assert_eq!(
            sample_column_query("out_gov", "order", "user\"id"),
            "SELECT to_jsonb(\"user\"\"id\") FROM \"out_gov\".\"order\" \
             WHERE \"user\"\"id\" IS NOT NULL LIMIT 1"
        );
    }

    #[test]
    fn catalog_queries_bind_names_as_parameters() {
        for query in [LIST_TABLES, TABLE_DESCRIPTION, LIST_COLUMNS] {
            assert!(query.contains("$1"));
        }
        assert!(TABLE_DESCRIPTION.contains("$2"));
        assert!(LIST_COLUMNS.contains("$2"));
    }

    #[test]
    fn table_queries_only_select_base_tables() {
        assert!(LIST_TABLES.contains("t.table_type = 'BASE TABLE'"));
        assert!(TABLE_DESCRIPTION.contains("t.table_type = 'BASE TABLE'"));
    }

    #[test]
    fn row_estimate_uses_statistics_not_a_scan() {
        assert!(LIST_TABLES.contains("c.reltuples"));
        assert!(!LIST_TABLES.to_lowercase().contains("count("));
    }
}
