use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

use crate::error::ConfigError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardConfig {
    pub api: ApiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    /// Root of the SpaceTraders API, including the version segment
    pub base_url: String,
    /// File holding the agent token, read when AUTH_TOKEN is unset
    pub token_file: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// 0 = warnings only, 1 = info, 2 = debug
    pub verbosity: u8,
    /// Emit JSON lines instead of compact text
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            verbosity: 1,
            json: false,
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: crate::API_BASE_URL.to_string(),
                token_file: crate::AGENT_TOKEN_FILE.to_string(),
            },
            logging: LoggingConfig::default(),
        }
    }
}

impl DashboardConfig {
    /// Load configuration from file, creating default if it doesn't exist
    pub fn load_or_create(config_path: &str) -> Result<Self, ConfigError> {
        Self::open(config_path).map(|(config, _)| config)
    }

    /// Like `load_or_create`, also reporting whether the default file was written.
    ///
    /// Runs before logging is installed, so the caller logs the creation.
    pub fn open(config_path: &str) -> Result<(Self, bool), ConfigError> {
        if Path::new(config_path).exists() {
            let config_str = fs::read_to_string(config_path)?;
            let config: DashboardConfig = toml::from_str(&config_str)?;
            Ok((config, false))
        } else {
            let config = DashboardConfig::default();
            config.save(config_path)?;
            Ok((config, true))
        }
    }

    pub fn save(&self, config_path: &str) -> Result<(), ConfigError> {
        if let Some(parent) = Path::new(config_path).parent() {
            fs::create_dir_all(parent)?;
        }

        let config_str = toml::to_string_pretty(self)?;
        fs::write(config_path, config_str)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = reqwest::Url::parse(&self.api.base_url).map_err(|e| ConfigError::Invalid {
            message: format!("api.base_url {:?} is not a URL: {}", self.api.base_url, e),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::Invalid {
                message: format!("api.base_url must be http(s), got {}", url.scheme()),
            });
        }
        if self.api.token_file.trim().is_empty() {
            return Err(ConfigError::Invalid {
                message: "api.token_file must not be empty".to_string(),
            });
        }
        if self.logging.verbosity > 2 {
            return Err(ConfigError::Invalid {
                message: format!("logging.verbosity must be 0, 1 or 2, got {}", self.logging.verbosity),
            });
        }
        Ok(())
    }

    /// Reads the bearer credential once at startup: `AUTH_TOKEN`, then the token file.
    pub fn load_credential(&self) -> Result<String, ConfigError> {
        resolve_credential(
            env::var(crate::AUTH_TOKEN_ENV).ok(),
            Path::new(&self.api.token_file),
        )
    }
}

fn resolve_credential(from_env: Option<String>, token_file: &Path) -> Result<String, ConfigError> {
    if let Some(token) = from_env.map(|t| t.trim().to_string()).filter(|t| !t.is_empty()) {
        return Ok(token);
    }

    let missing = || ConfigError::MissingCredential {
        env_var: crate::AUTH_TOKEN_ENV.to_string(),
        path: token_file.display().to_string(),
    };

    if !token_file.exists() {
        return Err(missing());
    }
    let token = fs::read_to_string(token_file)?.trim().to_string();
    if token.is_empty() {
        return Err(missing());
    }
    Ok(token)
}
