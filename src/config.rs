use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Environment keys picked up by [`Config::from_env`] (matched case-insensitively).
const ENV_KEYS: [&str; 6] = [
    "address",
    "server_port",
    "database_url",
    "db_max_connections",
    "request_timeout_secs",
    "loglevel",
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub address: String,
    pub server_port: u16,
    pub database_url: String,
    pub db_max_connections: u32,
    /// Upper bound for a single repository call.
    pub request_timeout_secs: u64,
    pub loglevel: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            address: "0.0.0.0".to_string(),
            server_port: 8080,
            database_url: "sqlite:todos.sqlite".to_string(),
            db_max_connections: 5,
            request_timeout_secs: 5,
            loglevel: "info".to_string(),
        }
    }
}

impl Config {
    /// Defaults overlaid with process environment (`SERVER_PORT`, `DATABASE_URL`, ...).
    pub fn from_env() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }

    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default())).merge(Env::raw().only(&ENV_KEYS))
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.address, self.server_port)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_environment() {
        figment::Jail::expect_with(|jail| {
            jail.clear_env();
            let cfg = Config::from_env()?;
            assert_eq!(cfg, Config::default());
            assert_eq!(cfg.listen_addr(), "0.0.0.0:8080");
            Ok(())
        });
    }

    #[test]
    fn environment_overrides_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.clear_env();
            jail.set_env("SERVER_PORT", "9090");
            jail.set_env("DATABASE_URL", "sqlite::memory:");
            jail.set_env("REQUEST_TIMEOUT_SECS", "2");
            let cfg = Config::from_env()?;
            assert_eq!(cfg.server_port, 9090);
            assert_eq!(cfg.database_url, "sqlite::memory:");
            assert_eq!(cfg.request_timeout(), Duration::from_secs(2));
            assert_eq!(cfg.loglevel, "info");
            Ok(())
        });
    }
}
