use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::Validate;

/// Configuration error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load config: {0}")]
    LoadError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// Client (MME) role configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ClientConfig {
    #[validate(length(min = 1))]
    pub origin_host: String,
    #[validate(length(min = 1))]
    pub origin_realm: String,
    #[validate(length(min = 1))]
    pub destination_realm: String,
    #[validate(length(min = 1))]
    pub destination_host: String,
    /// Subscriber identity, 6-15 digits
    #[validate(length(min = 6, max = 15))]
    pub imsi: String,
    /// Visited network identifier, exactly 3 bytes
    #[validate(length(equal = 3))]
    pub visited_plmn_id: Vec<u8>,
    /// Radio access type, 1004 = EUTRAN
    pub rat_type: i32,
    pub ulr_flags: u32,
    /// Delay before the first send; stands in for waiting on a real peer
    /// handshake, applied outside the protocol core
    pub startup_delay_ms: u64,
    /// Timeout window the stack applies to each sent request
    pub request_timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            origin_host: "mme.exchange.example.org".to_string(),
            origin_realm: "exchange.example.org".to_string(),
            destination_realm: "exchange.example.org".to_string(),
            destination_host: "127.0.0.1".to_string(),
            imsi: "123456789012345".to_string(),
            visited_plmn_id: vec![0x00, 0x01, 0x02],
            rat_type: 1004, // EUTRAN
            ulr_flags: 1,
            startup_delay_ms: 0,
            request_timeout_ms: 10_000,
        }
    }
}

/// Server (HSS) role configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ServerConfig {
    #[validate(length(min = 1))]
    pub origin_host: String,
    #[validate(length(min = 1))]
    pub origin_realm: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            origin_host: "hss.exchange.example.org".to_string(),
            origin_realm: "exchange.example.org".to_string(),
        }
    }
}

/// Full simulator configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SimConfig {
    #[serde(default)]
    pub log_level: LogLevel,
    #[serde(default)]
    #[validate(nested)]
    pub client: ClientConfig,
    #[serde(default)]
    #[validate(nested)]
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LogLevel(pub String);

impl Default for LogLevel {
    fn default() -> Self {
        Self("info".to_string())
    }
}

/// Load configuration from file with `ULSIM_`-prefixed env overrides
pub fn load_config<T>(path: &str) -> Result<T, ConfigError>
where
    T: for<'de> Deserialize<'de> + Validate,
{
    let config: T = config::Config::builder()
        .add_source(config::File::with_name(path))
        .add_source(config::Environment::with_prefix("ULSIM"))
        .build()
        .map_err(|e| ConfigError::LoadError(e.to_string()))?
        .try_deserialize()
        .map_err(|e| ConfigError::LoadError(e.to_string()))?;

    config
        .validate()
        .map_err(|e| ConfigError::ValidationError(e.to_string()))?;
    Ok(config)
}

/// Load configuration from YAML string (for testing)
pub fn load_from_yaml<T>(yaml: &str) -> Result<T, ConfigError>
where
    T: for<'de> Deserialize<'de> + Validate,
{
    let config: T =
        serde_yaml::from_str(yaml).map_err(|e| ConfigError::LoadError(e.to_string()))?;
    config
        .validate()
        .map_err(|e| ConfigError::ValidationError(e.to_string()))?;
    Ok(config)
}
