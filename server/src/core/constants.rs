// =============================================================================
// Application Identity
// =============================================================================

/// Application name in title case (for display and platform directories)
pub const APP_NAME: &str = "Sieve";

/// Application name in lowercase (for paths and identifiers)
pub const APP_NAME_LOWER: &str = "sieve";

/// Unix-style dotfile folder name
pub const APP_DOT_FOLDER: &str = ".sieve";

// =============================================================================
// Configuration Files
// =============================================================================

/// Config file name
pub const CONFIG_FILE_NAME: &str = "sieve.json";

/// Environment variable for config file path
pub const ENV_CONFIG: &str = "SIEVE_CONFIG";

// =============================================================================
// Environment Variables - Server
// =============================================================================

/// Environment variable for server host
pub const ENV_HOST: &str = "SIEVE_HOST";

/// Environment variable for server port
pub const ENV_PORT: &str = "SIEVE_PORT";

/// Environment variable for log level/filter
pub const ENV_LOG: &str = "SIEVE_LOG";

/// Environment variable for extra CORS origins (comma-separated)
pub const ENV_CORS_ORIGINS: &str = "SIEVE_CORS_ORIGINS";

// =============================================================================
// Server Defaults
// =============================================================================

/// Default server host
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default server port
pub const DEFAULT_PORT: u16 = 5380;

// =============================================================================
// Environment Variables - Storage
// =============================================================================

/// Environment variable to override data directory
pub const ENV_DATA_DIR: &str = "SIEVE_DATA_DIR";

/// Environment variable to override the database file path
pub const ENV_DB_PATH: &str = "SIEVE_DB_PATH";

// =============================================================================
// Environment Variables - Query
// =============================================================================

/// Environment variable for the page size used when `limit` is absent
pub const ENV_DEFAULT_LIMIT: &str = "SIEVE_DEFAULT_LIMIT";

/// Environment variable for the largest accepted `limit`
pub const ENV_MAX_LIMIT: &str = "SIEVE_MAX_LIMIT";

/// Hard ceiling for a configured `max_limit`
pub const MAX_CONFIGURABLE_LIMIT: u32 = 10_000;

// =============================================================================
// SQLite Database
// =============================================================================

/// SQLite database filename
pub const SQLITE_DB_FILENAME: &str = "sieve.db";

/// SQLite connection pool max connections
pub const SQLITE_MAX_CONNECTIONS: u32 = 5;

/// SQLite busy timeout in seconds
pub const SQLITE_BUSY_TIMEOUT_SECS: u64 = 30;

/// SQLite cache size (negative = KB, so -64000 = 64MB)
pub const SQLITE_CACHE_SIZE: &str = "-64000";

/// SQLite WAL auto-checkpoint threshold (pages, ~4MB at 1000)
pub const SQLITE_WAL_AUTOCHECKPOINT: &str = "1000";

/// WAL checkpoint interval in seconds (5 minutes)
pub const SQLITE_CHECKPOINT_INTERVAL_SECS: u64 = 300;

// =============================================================================
// HTTP
// =============================================================================

/// Default request body limit. List endpoints take no body.
pub const DEFAULT_BODY_LIMIT: usize = 64 * 1024;

// =============================================================================
// Shutdown
// =============================================================================

/// Maximum time to wait for background tasks on shutdown
pub const SHUTDOWN_TIMEOUT_SECS: u64 = 30;
