//! Runtime settings and logging setup.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::PathBuf;

/// Environment variable naming the log4rs YAML file.
pub const LOG_CONFIG_ENV: &str = "CIDR_CALC_LOG_CONFIG";
/// log4rs YAML file used when [`LOG_CONFIG_ENV`] is not set.
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

/// Settings read from the environment (after `.env` is loaded).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Path of the log4rs YAML config.
    pub log_config: PathBuf,
}

impl Settings {
    pub fn from_env() -> Settings {
        Settings::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup, e.g. a map in tests.
    pub fn from_lookup<F>(lookup: F) -> Settings
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_config = lookup(LOG_CONFIG_ENV)
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_CONFIG));
        Settings { log_config }
    }
}

/// Start log4rs from the configured YAML file, or from a built-in stderr
/// config at `warn` level when that file does not exist.
pub fn init_logging(settings: &Settings) -> Result<(), Box<dyn Error>> {
    if settings.log_config.exists() {
        log4rs::init_file(&settings.log_config, Default::default()).map_err(|e| {
            format!(
                "Error initializing log4rs from {}: {e}",
                settings.log_config.display()
            )
        })?;
        log::debug!("log4rs config {}", settings.log_config.display());
    } else {
        log4rs::init_config(fallback_config()?)?;
        log::debug!(
            "log4rs config {} not found, using stderr",
            settings.log_config.display()
        );
    }
    Ok(())
}

fn fallback_config() -> Result<Config, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{h({l})} {M} - {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
    Ok(config)
}
