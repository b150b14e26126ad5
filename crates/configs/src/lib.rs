use std::collections::HashSet;

use anyhow::anyhow;
use anyhow::Result;
use serde::Deserialize;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;
const DEFAULT_WORKER_THREADS: usize = 4;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub users: Vec<SeedUser>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: DEFAULT_HOST.into(), port: DEFAULT_PORT, worker_threads: Some(DEFAULT_WORKER_THREADS) }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { format: default_log_format() }
    }
}

fn default_log_format() -> String { "compact".into() }

/// Where the catalog is seeded from. `None` means the built-in seed.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct CatalogConfig {
    #[serde(default)]
    pub seed_path: Option<String>,
}

/// A user present in the user store from process start.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SeedUser {
    pub username: String,
    pub password: String,
}

pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    load_from_str(&content)
}

pub fn load_from_str(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default()?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    /// Config file if present, otherwise `SERVER_HOST`/`SERVER_PORT`/`TOKIO_WORKER_THREADS`.
    pub fn load_or_env() -> Result<Self> {
        match Self::load_and_validate() {
            Ok(cfg) => Ok(cfg),
            Err(e) if is_missing_file(&e) => {
                let mut cfg = Self::from_env();
                cfg.normalize_and_validate()?;
                Ok(cfg)
            }
            Err(e) => Err(e),
        }
    }

    pub fn from_env() -> Self {
        let host = std::env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = std::env::var("SERVER_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        let worker_threads = std::env::var("TOKIO_WORKER_THREADS")
            .ok()
            .and_then(|v| v.parse::<usize>().ok());
        Self {
            server: ServerConfig { host, port, worker_threads },
            ..Self::default()
        }
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.catalog.normalize();
        validate_seed_users(&self.users)?;
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn is_missing_file(err: &anyhow::Error) -> bool {
    err.downcast_ref::<std::io::Error>()
        .map(|e| e.kind() == std::io::ErrorKind::NotFound)
        .unwrap_or(false)
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = DEFAULT_HOST.to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be within 1..=65535"));
        }
        match self.worker_threads {
            Some(0) | None => self.worker_threads = Some(DEFAULT_WORKER_THREADS),
            Some(_) => {}
        }
        Ok(())
    }
}

impl CatalogConfig {
    fn normalize(&mut self) {
        if self.seed_path.as_deref().is_some_and(|p| p.trim().is_empty()) {
            self.seed_path = None;
        }
    }
}

fn validate_seed_users(users: &[SeedUser]) -> Result<()> {
    let mut seen = HashSet::new();
    for u in users {
        if u.username.is_empty() || u.password.is_empty() {
            return Err(anyhow!("seed users need a non-empty username and password"));
        }
        if !seen.insert(u.username.as_str()) {
            return Err(anyhow!("duplicate seed user: {}", u.username));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_file() -> Result<()> {
        let mut cfg = load_from_str(
            r#"
            [server]
            host = "0.0.0.0"
            port = 8080
            worker_threads = 0

            [logging]
            format = "json"

            [catalog]
            seed_path = "data/books.json"

            [[users]]
            username = "alice"
            password = "pw"
            "#,
        )?;
        cfg.normalize_and_validate()?;
        assert_eq!(cfg.bind_addr(), "0.0.0.0:8080");
        assert_eq!(cfg.server.worker_threads, Some(4));
        assert_eq!(cfg.logging.format, "json");
        assert_eq!(cfg.catalog.seed_path.as_deref(), Some("data/books.json"));
        assert_eq!(cfg.users, vec![SeedUser { username: "alice".into(), password: "pw".into() }]);
        Ok(())
    }

    #[test]
    fn empty_file_uses_defaults() -> Result<()> {
        let mut cfg = load_from_str("")?;
        cfg.normalize_and_validate()?;
        assert_eq!(cfg.bind_addr(), "127.0.0.1:5000");
        assert_eq!(cfg.logging.format, "compact");
        assert!(cfg.catalog.seed_path.is_none());
        assert!(cfg.users.is_empty());
        Ok(())
    }

    #[test]
    fn rejects_port_zero() -> Result<()> {
        let mut cfg = load_from_str("[server]\nhost = \"localhost\"\nport = 0\n")?;
        assert!(cfg.normalize_and_validate().is_err());
        Ok(())
    }

    #[test]
    fn blank_seed_path_means_builtin() -> Result<()> {
        let mut cfg = load_from_str("[catalog]\nseed_path = \"  \"\n")?;
        cfg.normalize_and_validate()?;
        assert!(cfg.catalog.seed_path.is_none());
        Ok(())
    }

    #[test]
    fn rejects_duplicate_seed_users() -> Result<()> {
        let mut cfg = load_from_str(
            "[[users]]\nusername = \"bob\"\npassword = \"a\"\n[[users]]\nusername = \"bob\"\npassword = \"b\"\n",
        )?;
        assert!(cfg.normalize_and_validate().is_err());
        Ok(())
    }

    #[test]
    fn missing_file_is_detected() {
        let err = load_from_file("/nonexistent/bookshelf-config.toml").unwrap_err();
        assert!(is_missing_file(&err));
    }
}
