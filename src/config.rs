use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::backend::database::DatabaseBackendConfig;
use crate::backend::DatabaseType;
use crate::error::{AppError, AppResult};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub backend: BackendConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct BackendConfig {
    #[serde(rename = "type")]
    pub backend_type: String,
    pub database: Option<DatabaseConfig>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DatabaseConfig {
    #[serde(rename = "type")]
    pub db_type: String,
    #[serde(default)]
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_connection_timeout")]
    pub connection_timeout: u64,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_max_connections() -> u32 {
    10
}

fn default_connection_timeout() -> u64 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

impl AppConfig {
    /// Load configuration from YAML file
    pub fn load_from_file<P: AsRef<Path>>(config_path: P) -> Result<Self, String> {
        let path = config_path.as_ref();

        if !path.exists() {
            return Err(format!("Configuration file not found: {}", path.display()));
        }

        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file {}: {}", path.display(), e))?;

        Self::load_from_str(&content)
            .map_err(|e| format!("Failed to parse config file {}: {}", path.display(), e))
    }

    /// Parse configuration from YAML text, expanding environment variables first
    pub fn load_from_str(content: &str) -> Result<Self, String> {
        let expanded_content = Self::expand_env_vars(content)?;

        let app_config: AppConfig =
            serde_yaml::from_str(&expanded_content).map_err(|e| e.to_string())?;

        app_config
            .logging
            .level
            .parse::<tracing::Level>()
            .map_err(|_| format!("Unknown log level: {}", app_config.logging.level))?;

        Ok(app_config)
    }

    /// Default configuration: in-memory SQLite on 127.0.0.1:3000
    pub fn default_config() -> Self {
        AppConfig {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            backend: BackendConfig {
                backend_type: "database".to_string(),
                database: Some(DatabaseConfig {
                    db_type: "sqlite".to_string(),
                    url: ":memory:".to_string(),
                    max_connections: 1,
                    connection_timeout: default_connection_timeout(),
                }),
            },
            logging: LoggingConfig::default(),
        }
    }

    /// Log level for the tracing subscriber, validated at load time
    pub fn log_level(&self) -> tracing::Level {
        self.logging.level.parse().unwrap_or(tracing::Level::INFO)
    }

    /// Translate the `backend` section into a storage backend configuration
    pub fn to_backend_config(&self) -> AppResult<DatabaseBackendConfig> {
        if self.backend.backend_type != "database" {
            return Err(AppError::Configuration(format!(
                "Unsupported backend type: {}",
                self.backend.backend_type
            )));
        }

        let database_config = self.backend.database.as_ref().ok_or_else(|| {
            AppError::Configuration(
                "Database configuration is required when backend type is 'database'".to_string(),
            )
        })?;

        let database_type: DatabaseType = database_config.db_type.parse()?;

        Ok(
            DatabaseBackendConfig::new(database_type, database_config.url.clone())
                .with_max_connections(database_config.max_connections)
                .with_connection_timeout(database_config.connection_timeout),
        )
    }

    /// Expand environment variables in format ${VAR_NAME} or ${VAR_NAME:-default}
    fn expand_env_vars(content: &str) -> Result<String, String> {
        let mut expanded = String::with_capacity(content.len());
        let mut rest = content;

        while let Some(start) = rest.find("${") {
            expanded.push_str(&rest[..start]);
            let after = &rest[start + 2..];

            let Some(end) = after.find('}') else {
                // Unterminated reference, keep the text as is
                expanded.push_str(&rest[start..]);
                return Ok(expanded);
            };

            let expr = &after[..end];
            let (var_name, default_value) = match expr.split_once(":-") {
                Some((name, default)) => (name, Some(default)),
                None => (expr, None),
            };

            match (std::env::var(var_name), default_value) {
                (Ok(value), _) => expanded.push_str(&value),
                (Err(_), Some(default)) => expanded.push_str(default),
                (Err(_), None) => {
                    return Err(format!(
                        "Environment variable {} not found and no default provided",
                        var_name
                    ))
                }
            }

            rest = &after[end + 1..];
        }

        expanded.push_str(rest);
        Ok(expanded)
    }
}
