use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3002;
pub const DEFAULT_ENVIRONMENT: &str = "development";
pub const PRODUCTION: &str = "production";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("invalid PORT value: {0}")]
    InvalidPort(String),
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Deployment environment name, taken from `ENVIRONMENT`
    #[serde(skip)]
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub use_json: bool,
    /// When set, logs are also written to a rolling file in this directory
    pub log_dir: Option<String>,
    pub log_file: String,
    /// "hourly" | "daily" | anything else = never rotate
    pub rotation: String,
    /// Start with the demo order in the store
    pub seed_sample_data: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: DEFAULT_ENVIRONMENT.to_string(),
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            log_level: "debug".to_string(),
            use_json: false,
            log_dir: None,
            log_file: "order-service.log".to_string(),
            rotation: "daily".to_string(),
            seed_sample_data: true,
        }
    }
}

impl AppConfig {
    /// Load `config/{ENVIRONMENT}.yaml` and apply `PORT` / `ENVIRONMENT`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let env = std::env::var("ENVIRONMENT").unwrap_or_else(|_| DEFAULT_ENVIRONMENT.to_string());
        let port = std::env::var("PORT").ok();
        Self::load(Path::new("config"), &env, port.as_deref())
    }

    /// Load `{dir}/{env}.yaml`, falling back to defaults when the file does
    /// not exist, then apply the environment overrides.
    pub fn load(dir: &Path, env: &str, port: Option<&str>) -> Result<Self, ConfigError> {
        let path = dir.join(format!("{}.yaml", env));
        let mut config = match fs::read_to_string(&path) {
            Ok(content) => {
                serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
                    path: path.clone(),
                    source,
                })?
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Self::profile_defaults(env),
            Err(source) => return Err(ConfigError::Read { path, source }),
        };
        config.environment = env.to_string();

        if let Some(port) = port.filter(|p| !p.is_empty()) {
            config.port = port
                .parse()
                .map_err(|_| ConfigError::InvalidPort(port.to_string()))?;
        }

        Ok(config)
    }

    /// Built-in settings for an environment without a config file.
    fn profile_defaults(env: &str) -> Self {
        if env == PRODUCTION {
            Self {
                log_level: "info".to_string(),
                use_json: true,
                ..Self::default()
            }
        } else {
            Self::default()
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == PRODUCTION
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
