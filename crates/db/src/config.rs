/// Default maximum connections per pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Default seconds to wait for a pooled connection.
pub const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 10;

/// Database connection settings.
///
/// Two credential tiers: the reader URL should authenticate as a role that
/// can only `SELECT` public tables, the writer URL as the role used for admin
/// writes. When no writer URL is given, writes fall back to the reader URL.
///
/// Built once at startup and handed to [`Database::connect_lazy`](crate::Database::connect_lazy).
#[derive(Debug, Clone, Default)]
pub struct DbConfig {
    pub reader_url: Option<String>,
    pub writer_url: Option<String>,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
}

impl DbConfig {
    /// Config with a single URL for both tiers and default pool settings.
    pub fn single(url: impl Into<String>) -> Self {
        Self {
            reader_url: Some(url.into()),
            writer_url: None,
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout_secs: DEFAULT_ACQUIRE_TIMEOUT_SECS,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// | Env Var                   | Default              |
    /// |---------------------------|----------------------|
    /// | `DATABASE_READER_URL`     | `DATABASE_URL`       |
    /// | `DATABASE_WRITER_URL`     | reader URL           |
    /// | `DB_MAX_CONNECTIONS`      | `10`                 |
    /// | `DB_ACQUIRE_TIMEOUT_SECS` | `10`                 |
    ///
    /// Missing URLs are not an error here; [`Database::connect_lazy`](crate::Database::connect_lazy)
    /// reports them.
    pub fn from_env() -> Self {
        let reader_url = std::env::var("DATABASE_READER_URL")
            .or_else(|_| std::env::var("DATABASE_URL"))
            .ok();
        let writer_url = std::env::var("DATABASE_WRITER_URL").ok();

        let max_connections = std::env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_MAX_CONNECTIONS);

        let acquire_timeout_secs = std::env::var("DB_ACQUIRE_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_ACQUIRE_TIMEOUT_SECS);

        Self {
            reader_url,
            writer_url,
            max_connections,
            acquire_timeout_secs,
        }
    }
}
