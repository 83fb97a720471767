use log::warn;

#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub path: String,
    pub pool_size: u32,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            path: "tournament.db".to_string(),
            pool_size: 4,
        }
    }
}

impl DatabaseSettings {
    /// Defaults overridden by `DATABASE_PATH` and `DATABASE_POOL_SIZE`.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            path: std::env::var("DATABASE_PATH").unwrap_or(defaults.path),
            pool_size: read_pool_size().unwrap_or(defaults.pool_size),
        }
    }
}

fn read_pool_size() -> Option<u32> {
    let raw = std::env::var("DATABASE_POOL_SIZE").ok()?;
    match raw.parse::<u32>() {
        Ok(size) if size > 0 => Some(size),
        _ => {
            warn!("Ignoring invalid DATABASE_POOL_SIZE: {}", raw);
            None
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self { port: 3000 }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub database: DatabaseSettings,
    pub server: ServerSettings,
}

impl AppConfig {
    /// Built once in the entry point and passed down explicitly.
    pub fn new() -> Self {
        Self {
            database: DatabaseSettings::from_env(),
            server: ServerSettings::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.database.path, "tournament.db");
        assert_eq!(config.database.pool_size, 4);
        assert_eq!(config.server.port, 3000);
    }
}
