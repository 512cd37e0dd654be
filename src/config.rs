//! Environment-driven server configuration.

/// Runtime configuration, read once at startup. Every knob has a default so
/// the service runs with no environment set at all.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// SQLite database URL. The file is created on first run.
    pub database_url: String,
    /// Address the HTTP listener binds to.
    pub bind_addr: String,
    /// Connection pool size.
    pub max_connections: u32,
    /// Request body cap in bytes.
    pub body_limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            database_url: "sqlite://data.db".to_string(),
            bind_addr: "0.0.0.0:9000".to_string(),
            max_connections: 5,
            body_limit: 1024 * 1024,
        }
    }
}

impl AppConfig {
    /// Read `DATABASE_URL`, `BIND_ADDR`, `DB_MAX_CONNECTIONS` and
    /// `REQUEST_BODY_LIMIT`, falling back to the defaults for anything
    /// unset or unparsable.
    pub fn from_env() -> Self {
        let defaults = AppConfig::default();
        AppConfig {
            database_url: std::env::var("DATABASE_URL").unwrap_or(defaults.database_url),
            bind_addr: std::env::var("BIND_ADDR").unwrap_or(defaults.bind_addr),
            max_connections: env_parse("DB_MAX_CONNECTIONS", defaults.max_connections),
            body_limit: env_parse("REQUEST_BODY_LIMIT", defaults.body_limit),
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}
