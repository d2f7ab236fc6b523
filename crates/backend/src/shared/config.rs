use once_cell::sync::OnceCell;
use serde::Deserialize;

use contracts::shared::report::BusinessHeader;

static CONFIG: OnceCell<Config> = OnceCell::new();

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    pub data_source: DataSourceConfig,
    #[serde(default)]
    pub business: BusinessConfig,
    #[serde(default)]
    pub alerts: AlertsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Shop REST API the collections are read from
#[derive(Debug, Deserialize, Clone)]
pub struct DataSourceConfig {
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Bearer token, sent as `Authorization: Bearer ...` when set
    #[serde(default)]
    pub token: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BusinessConfig {
    #[serde(default = "default_business_name")]
    pub name: String,
    #[serde(default = "default_address_line")]
    pub address_line: String,
    /// Offset of the shop's local calendar from UTC. "Today" and month buckets use it.
    #[serde(default = "default_utc_offset_minutes")]
    pub utc_offset_minutes: i32,
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            name: default_business_name(),
            address_line: default_address_line(),
            utc_offset_minutes: default_utc_offset_minutes(),
        }
    }
}

impl BusinessConfig {
    pub fn header(&self) -> BusinessHeader {
        BusinessHeader {
            name: self.name.clone(),
            address_line: self.address_line.clone(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct AlertsConfig {
    /// Today's expenses strictly above this raise a warning
    #[serde(default = "default_high_expense_threshold")]
    pub high_expense_threshold: f64,
}

impl Default for AlertsConfig {
    fn default() -> Self {
        Self {
            high_expense_threshold: default_high_expense_threshold(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_business_name() -> String {
    "My Shop / Business Name".to_string()
}

fn default_address_line() -> String {
    "Address • Phone • GSTIN".to_string()
}

fn default_utc_offset_minutes() -> i32 {
    330
}

fn default_high_expense_threshold() -> f64 {
    2000.0
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000

[data_source]
base_url = "http://localhost:5000/api"
timeout_secs = 30

[business]
name = "My Shop / Business Name"
address_line = "Address • Phone • GSTIN"
utc_offset_minutes = 330

[alerts]
high_expense_threshold = 2000
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

/// Install the process-wide configuration (once, at start-up)
pub fn initialize(config: Config) -> anyhow::Result<()> {
    CONFIG
        .set(config)
        .map_err(|_| anyhow::anyhow!("configuration already initialized"))
}

pub fn get_config() -> anyhow::Result<&'static Config> {
    CONFIG
        .get()
        .ok_or_else(|| anyhow::anyhow!("configuration is not initialized"))
}
