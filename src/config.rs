use anyhow::Result;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure for the engagement console
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EngagementConsoleConfig {
    /// Remote engagement API settings
    pub api: ApiConfig,
    /// Observability settings
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL of the engagement API
    pub url: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ObservabilityConfig {
    /// Log level
    pub log_level: String,
}

impl Default for EngagementConsoleConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                url: "http://localhost:5000".to_string(),
            },
            observability: ObservabilityConfig {
                log_level: "info".to_string(),
            },
        }
    }
}

impl EngagementConsoleConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Default values
    /// 2. Configuration file (engagement-console.toml)
    /// 3. Environment variables (prefixed with ENGAGEMENT_CONSOLE_)
    pub fn load() -> Result<Self> {
        let defaults = Self::default();
        let mut builder = Config::builder()
            .set_default("api.url", defaults.api.url)?
            .set_default("observability.log_level", defaults.observability.log_level)?;

        if Path::new("engagement-console.toml").exists() {
            builder = builder.add_source(File::with_name("engagement-console"));
        }

        builder = builder.add_source(
            Environment::with_prefix("ENGAGEMENT_CONSOLE")
                .separator("_")
                .try_parsing(true),
        );

        let config = builder.build()?;
        let mut console_config: EngagementConsoleConfig = config.try_deserialize()?;

        // Flat environment overrides; the nested separator cannot express
        // keys that themselves contain underscores.
        if let Ok(url) = std::env::var("ENGAGEMENT_CONSOLE_API_URL") {
            console_config.api.url = url;
        }
        if let Ok(level) = std::env::var("ENGAGEMENT_CONSOLE_LOG_LEVEL") {
            console_config.observability.log_level = level;
        }

        Ok(console_config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let toml_content = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_content)?;
        Ok(())
    }

    /// Load .env file if it exists
    pub fn load_env_file() -> Result<()> {
        if Path::new(".env").exists() {
            dotenvy::dotenv()?;
            tracing::info!("Loaded environment variables from .env file");
        }
        Ok(())
    }
}

/// Global configuration instance
static CONFIG: std::sync::LazyLock<Result<EngagementConsoleConfig, anyhow::Error>> =
    std::sync::LazyLock::new(|| {
        let _ = EngagementConsoleConfig::load_env_file();
        EngagementConsoleConfig::load()
    });

/// Get the global configuration
pub fn config() -> Result<&'static EngagementConsoleConfig> {
    CONFIG
        .as_ref()
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))
}
