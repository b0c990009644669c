use anyhow::anyhow;
use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub pagination: PaginationConfig,
    #[serde(default)]
    pub steps: StepsConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port() }
    }
}

/// Page size policy applied by the HTTP host before calling the calculator.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
pub struct PaginationConfig {
    /// Used when a request omits `page_size`.
    #[serde(default = "default_page_size")]
    pub default_page_size: u64,
    /// Requests above this are rejected.
    #[serde(default = "default_max_page_size")]
    pub max_page_size: u64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            max_page_size: default_max_page_size(),
        }
    }
}

/// Bounds on step indicator requests.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
pub struct StepsConfig {
    /// Requests asking for more steps are rejected.
    #[serde(default = "default_max_steps")]
    pub max_steps: usize,
}

impl Default for StepsConfig {
    fn default() -> Self {
        Self { max_steps: default_max_steps() }
    }
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 8080 }
fn default_page_size() -> u64 { 10 }
fn default_max_page_size() -> u64 { 100 }
fn default_max_steps() -> usize { 100 }

/// `CONFIG_PATH`, or `config.toml` when unset.
pub fn config_path() -> String {
    std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string())
}

pub fn load_default() -> Result<AppConfig> {
    load_from_file(&config_path())
}

/// True when `err` came from a config file that does not exist.
pub fn is_not_found(err: &anyhow::Error) -> bool {
    err.downcast_ref::<std::io::Error>()
        .is_some_and(|e| e.kind() == std::io::ErrorKind::NotFound)
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
    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.pagination.validate()?;
        self.steps.validate()?;
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = default_host();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be within 1..=65535"));
        }
        Ok(())
    }
}

impl PaginationConfig {
    pub fn validate(&self) -> Result<()> {
        if self.default_page_size == 0 {
            return Err(anyhow!("pagination.default_page_size must be >= 1"));
        }
        if self.max_page_size < self.default_page_size {
            return Err(anyhow!("pagination.max_page_size must be >= default_page_size"));
        }
        Ok(())
    }
}

impl StepsConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_steps == 0 {
            return Err(anyhow!("steps.max_steps must be >= 1"));
        }
        Ok(())
    }
}
