//! Configuration file
//!
//! JSON, every field optional. A missing file means all defaults.
//!
//! ```json
//! {
//!   "data_file": "./data/animals.json",
//!   "write_mode": "overwrite",
//!   "log_level": "info",
//!   "host": "0.0.0.0",
//!   "port": 3001,
//!   "public_dir": "./public",
//!   "cors_origins": []
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::animals::WriteMode;
use crate::http_server::HttpServerConfig;
use crate::observability::Severity;

use super::errors::{CliError, CliResult};

/// Environment variable that overrides the configured port
pub const PORT_ENV: &str = "PORT";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Backing JSON file (default "./data/animals.json")
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// How the backing file is rewritten (default "overwrite")
    #[serde(default)]
    pub write_mode: WriteMode,

    /// Minimum log severity (default "info")
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(flatten)]
    pub server: HttpServerConfig,
}

fn default_data_file() -> PathBuf {
    PathBuf::from("./data/animals.json")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            write_mode: WriteMode::default(),
            log_level: default_log_level(),
            server: HttpServerConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file, or defaults if the file does not exist
    pub fn load(path: &Path) -> CliResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        if self.data_file.as_os_str().is_empty() {
            return Err(CliError::config_error("data_file must not be empty"));
        }

        if self.server.port == 0 {
            return Err(CliError::config_error("port must be > 0"));
        }

        if let Err(origin) = self.server.allowed_origins() {
            return Err(CliError::config_error(format!(
                "Invalid cors_origins entry: '{}'. Expected scheme://host[:port].",
                origin
            )));
        }

        self.log_severity()?;

        Ok(())
    }

    pub fn log_severity(&self) -> CliResult<Severity> {
        Severity::parse(&self.log_level).ok_or_else(|| {
            CliError::config_error(format!(
                "Invalid log_level: '{}'. Must be one of trace, info, warn, error, fatal.",
                self.log_level
            ))
        })
    }
}

/// Pick the listening port: `--port`, then `PORT`, then the config file.
pub fn resolve_port(flag: Option<u16>, env: Option<&str>, config: &Config) -> CliResult<u16> {
    if let Some(port) = flag {
        return Ok(port);
    }

    match env.map(str::trim).filter(|s| !s.is_empty()) {
        Some(raw) => raw
            .parse::<u16>()
            .ok()
            .filter(|p| *p != 0)
            .ok_or_else(|| CliError::config_error(format!("Invalid {}: '{}'", PORT_ENV, raw))),
        None => Ok(config.server.port),
    }
}
