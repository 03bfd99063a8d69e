use keystone_core::table::TableCategory;

/// Errors from the persistence layer.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// No usable connection settings were supplied at startup.
    #[error("Database is not configured: {0}")]
    Unconfigured(String),

    /// A record carried a field that is not a column of its table.
    #[error("Unknown column '{column}' for table {table}")]
    UnknownColumn {
        table: TableCategory,
        column: String,
    },

    /// A write carried no writable columns.
    #[error("No writable fields in {0} record")]
    EmptyRecord(TableCategory),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),

    #[error(transparent)]
    Migrate(#[from] sqlx::migrate::MigrateError),
}
