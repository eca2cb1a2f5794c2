use std::fmt;
use std::str::FromStr;

use anyhow::Result;
use chrono::NaiveTime;
use chrono_tz::Tz;
use config::{Config, ConfigBuilder, builder::DefaultState};
use serde::Deserialize;

use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerConfig,
    pub backend: BackendConfig,
    pub schedule: ScheduleConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// ## Summary
    /// Returns the listen address in the format "host:port".
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Connection settings for the external availability backend.
#[derive(Clone, Deserialize)]
pub struct BackendConfig {
    pub base_url: String,
    /// Bearer token; redacted from `Debug` output.
    pub token: Option<String>,
    pub timeout_secs: u64,
}

impl fmt::Debug for BackendConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackendConfig")
            .field("base_url", &self.base_url)
            .field("token", &self.token.as_ref().map(|_| "***"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleConfig {
    /// IANA zone used to decide what "today" is.
    pub timezone: String,
    pub default_max_dates: u16,
    /// Local `HH:MM` after which today no longer counts as an occurrence.
    pub same_day_cutoff: Option<String>,
}

impl ScheduleConfig {
    /// ## Summary
    /// Resolves the configured IANA timezone.
    ///
    /// ## Errors
    /// Returns `CoreError::ConfigError` if the name is not a known IANA zone.
    pub fn tz(&self) -> CoreResult<Tz> {
        Tz::from_str(self.timezone.trim())
            .map_err(|err| CoreError::ConfigError(format!("schedule.timezone: {err}")))
    }

    /// ## Summary
    /// Parses the optional same-day cutoff.
    ///
    /// ## Errors
    /// Returns `CoreError::ConfigError` if the value is present but not `HH:MM`.
    pub fn cutoff(&self) -> CoreResult<Option<NaiveTime>> {
        self.same_day_cutoff
            .as_deref()
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
            .map(|raw| {
                NaiveTime::parse_from_str(raw, "%H:%M").map_err(|err| {
                    CoreError::ConfigError(format!("schedule.same_day_cutoff {raw:?}: {err}"))
                })
            })
            .transpose()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Returns a builder pre-populated with every default value.
    ///
    /// ## Errors
    /// Returns an error if a default cannot be set.
    pub fn defaults() -> Result<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8699)?
            .set_default("backend.base_url", "http://localhost:8000")?
            .set_default("backend.timeout_secs", 15)?
            .set_default("schedule.timezone", "UTC")?
            .set_default("schedule.default_max_dates", 10)?
            .set_default("logging.level", "debug")?)
    }

    /// ## Summary
    /// Loads configuration from environment variables and `config.toml` into a `Settings`.
    /// Environment variables (`LEXBOOK_SECTION__KEY`) take precedence over file values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration, deserializing it,
    /// or validating the schedule section fails.
    pub fn load() -> Result<Self> {
        let config = Self::defaults()?
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            // Env
            .add_source(Self::environment())
            .build()?;
        Self::from_config(config)
    }

    /// `LEXBOOK_<SECTION>__<KEY>` variables; empty values are skipped.
    fn environment() -> config::Environment {
        config::Environment::with_prefix("LEXBOOK")
            .prefix_separator("_")
            .separator("__")
            .ignore_empty(true)
            .try_parsing(true)
    }

    /// ## Summary
    /// Deserializes and validates an already built configuration.
    ///
    /// ## Errors
    /// Returns an error if deserialization fails, the timezone is unknown,
    /// the cutoff is malformed, or `default_max_dates` is zero.
    pub fn from_config(config: Config) -> Result<Self> {
        let settings = config.try_deserialize::<Settings>()?;
        settings.schedule.tz()?;
        settings.schedule.cutoff()?;
        if settings.schedule.default_max_dates == 0 {
            return Err(CoreError::ConfigError(
                "schedule.default_max_dates must be greater than zero".to_string(),
            )
            .into());
        }
        Ok(settings)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "Loaded .env file"),
        Err(err) => tracing::trace!(error = %err, "No .env file loaded"),
    }

    Settings::load()
}
