//! Layered configuration for the FoodTrax binary.

use config::{Config, ConfigBuilder, Environment, File, FileFormat, builder::DefaultState};
use derive_getters::Getters;
use foodtrax_error::{ConfigError, FoodtraxError, FoodtraxResult};
use foodtrax_social::{SlackSettings, SlackSettingsBuilder};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, instrument};

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../../../foodtrax.toml");

/// Prefix of environment overrides, e.g. `FOODTRAX__SLACK__TOKEN`.
const ENV_PREFIX: &str = "FOODTRAX";

/// Webhook server settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Getters)]
pub struct ServerConfig {
    /// Address the webhook server listens on
    #[serde(default = "default_bind")]
    bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

/// FoodTrax database settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Getters)]
pub struct DatabaseConfig {
    /// MySQL connection URL
    #[serde(default)]
    url: String,
    /// Maximum pooled connections
    #[serde(default = "default_pool_size")]
    pool_size: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            pool_size: default_pool_size(),
        }
    }
}

/// Slack workspace settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Getters)]
pub struct SlackConfig {
    /// Bot token
    #[serde(default)]
    token: String,
    /// Web API root
    #[serde(default = "default_slack_base_url")]
    base_url: String,
    /// Display name that receives status reports
    #[serde(default)]
    notify_user: String,
    /// Per-request timeout
    #[serde(default = "default_timeout_seconds")]
    timeout_seconds: u64,
}

impl Default for SlackConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            base_url: default_slack_base_url(),
            notify_user: String::new(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Getters)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    level: String,
    /// Output format
    #[serde(default)]
    format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_bind() -> String {
    "0.0.0.0:5000".to_string()
}

fn default_pool_size() -> u32 {
    4
}

fn default_slack_base_url() -> String {
    foodtrax_social::DEFAULT_BASE_URL.to_string()
}

fn default_timeout_seconds() -> u64 {
    10
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Complete FoodTrax configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Getters)]
pub struct FoodtraxConfig {
    #[serde(default)]
    server: ServerConfig,
    #[serde(default)]
    database: DatabaseConfig,
    #[serde(default)]
    slack: SlackConfig,
    #[serde(default)]
    logging: LoggingConfig,
}

impl FoodtraxConfig {
    /// Load the bundled defaults only.
    ///
    /// # Errors
    ///
    /// Returns error if the bundled file does not parse.
    pub fn defaults() -> FoodtraxResult<Self> {
        build(defaults_builder())
    }

    /// Load the bundled defaults overridden by one file.
    ///
    /// # Errors
    ///
    /// Returns error if the file is missing or cannot be parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> FoodtraxResult<Self> {
        debug!("Loading configuration from file");
        build(defaults_builder().add_source(File::from(path.as_ref())))
    }

    /// Load configuration with precedence: environment > explicit file >
    /// current dir > home dir > bundled default.
    ///
    /// Configuration sources in order of precedence (later sources override earlier):
    /// 1. Bundled defaults (foodtrax.toml shipped with the binary)
    /// 2. User config in home directory (~/.config/foodtrax/foodtrax.toml)
    /// 3. User config in current directory (./foodtrax.toml)
    /// 4. The file passed with `--config`, which must exist
    /// 5. `FOODTRAX__<SECTION>__<KEY>` environment variables
    ///
    /// # Example
    ///
    /// ```no_run
    /// use foodtrax::FoodtraxConfig;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = FoodtraxConfig::load(None)?;
    /// println!("listening on {}", config.server().bind());
    /// # Ok(())
    /// # }
    /// ```
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> FoodtraxResult<Self> {
        load_from(explicit, None)
    }

    /// Slack client settings from the `[slack]` section.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the token is empty.
    pub fn slack_settings(&self) -> FoodtraxResult<SlackSettings> {
        if self.slack.token.is_empty() {
            return Err(
                ConfigError::new("slack.token is not set (use FOODTRAX__SLACK__TOKEN)").into(),
            );
        }

        SlackSettingsBuilder::default()
            .token(self.slack.token.clone())
            .base_url(self.slack.base_url.clone())
            .timeout_seconds(self.slack.timeout_seconds)
            .build()
            .map_err(|e| FoodtraxError::from(ConfigError::new(e.to_string())))
    }
}

fn defaults_builder() -> ConfigBuilder<DefaultState> {
    Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
}

/// Build the layered configuration, reading environment overrides from
/// `env` instead of the process environment when given.
pub(crate) fn load_from(
    explicit: Option<&Path>,
    env: Option<config::Map<String, String>>,
) -> FoodtraxResult<FoodtraxConfig> {
    let mut builder = defaults_builder();

    // Add user config from home directory (optional)
    if let Some(config_dir) = dirs::config_dir() {
        let home_config = config_dir.join("foodtrax/foodtrax.toml");
        builder = builder.add_source(File::from(home_config).required(false));
    }

    // Add user config from current directory (optional)
    builder = builder.add_source(File::with_name("foodtrax").required(false));

    if let Some(path) = explicit {
        builder = builder.add_source(File::from(path));
    }

    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .separator("__")
            .try_parsing(true)
            .source(env),
    );

    build(builder)
}

fn build(builder: ConfigBuilder<DefaultState>) -> FoodtraxResult<FoodtraxConfig> {
    builder
        .build()
        .map_err(|e| {
            FoodtraxError::from(ConfigError::new(format!(
                "Failed to build configuration: {}",
                e
            )))
        })?
        .try_deserialize()
        .map_err(|e| {
            FoodtraxError::from(ConfigError::new(format!(
                "Failed to parse configuration: {}",
                e
            )))
        })
}
