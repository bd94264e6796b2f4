use crate::{
    ApiConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR,
    DisplayConfig, LoggingConfig, SessionConfig,
};

use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub session: SessionConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Read `config.toml` from the config directory (created on demand),
    /// falling back to defaults, then apply `ET_*` overrides.
    ///
    /// Validation is separate: call `validate()` once CLI overrides are in.
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// `$ET_CONFIG_DIR`, or `.et/` under the working directory.
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Check every section, failing on the first problem.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.api.validate()?;
        self.session.validate()?;
        self.display.validate()?;

        if let Some(ref file) = self.logging.file
            && (Path::new(file).is_absolute() || file.contains(".."))
        {
            return Err(ConfigError::logging(
                "logging.file must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }

    /// Absolute path of the persisted session file.
    pub fn session_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.session.file))
    }

    /// Absolute path of the log file, creating its directory. None = log to stderr.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        let Some(ref filename) = self.logging.file else {
            return Ok(None);
        };

        let log_dir = Self::config_dir()?.join(&self.logging.dir);
        std::fs::create_dir_all(&log_dir).map_err(|e| ConfigError::Io {
            path: log_dir.clone(),
            source: e,
        })?;

        Ok(Some(log_dir.join(filename)))
    }

    pub fn log_summary(&self) {
        info!("Effective configuration:");
        info!(
            "  api: {} (timeout: {})",
            self.api.base_url,
            match self.api.timeout_secs {
                0 => String::from("none"),
                secs => format!("{secs}s"),
            }
        );
        info!("  session: {}", self.session.file);
        info!("  display: currency={}", self.display.currency_symbol);
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        if let Some(url) = env_value("ET_API_BASE_URL") {
            self.api.base_url = url;
        }
        if let Some(secs) = env_parsed("ET_API_TIMEOUT_SECS") {
            self.api.timeout_secs = secs;
        }
        if let Some(file) = env_value("ET_SESSION_FILE") {
            self.session.file = file;
        }
        if let Some(symbol) = env_value("ET_CURRENCY_SYMBOL") {
            self.display.currency_symbol = symbol;
        }
        if let Some(level) = env_parsed("ET_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(colored) = env_value("ET_LOG_COLORED") {
            self.logging.colored = matches!(colored.as_str(), "true" | "1");
        }
        if let Some(file) = env_value("ET_LOG_FILE") {
            self.logging.file = Some(file);
        }
    }
}

fn env_value(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Unparseable values are ignored and the configured value kept.
fn env_parsed<T: FromStr>(name: &str) -> Option<T> {
    env_value(name)?.parse().ok()
}
