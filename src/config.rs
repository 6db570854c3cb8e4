use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn, Level};

const CONFIG_DIR: &str = "gamepad-state";
const CONFIG_FILE: &str = "config.toml";

// Config errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("Failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub poll: PollConfig,
    pub logging: LoggingConfig,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct PollConfig {
    pub frame_rate_hz: u32,
    /// Source slot to track; first occupied slot when absent
    pub device_slot: Option<usize>,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            frame_rate_hz: 60,
            device_slot: None,
        }
    }
}

impl PollConfig {
    pub fn frame_rate(&self) -> u32 {
        self.frame_rate_hz.clamp(1, 1000)
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    pub fn max_level(&self) -> Level {
        match self.level.to_ascii_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        }
    }
}

impl Config {
    pub fn default_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| {
            warn!("Could not determine config directory, using current directory");
            PathBuf::from(".")
        });
        path.push(CONFIG_DIR);
        path.push(CONFIG_FILE);
        path
    }

    pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!("Config file {} does not exist, using default", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let config = Self::parse(&content, path)?;
        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use tracing::{Event, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    use super::*;

    #[test]
    fn empty_file_is_default() {
        let config = Config::parse("", Path::new("config.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.poll.frame_rate(), 60);
        assert_eq!(config.logging.max_level(), Level::INFO);
    }

    #[test]
    fn partial_sections_keep_defaults() {
        let content = r#"
            [poll]
            device_slot = 2

            [logging]
            level = "DEBUG"
        "#;
        let config = Config::parse(content, Path::new("config.toml")).unwrap();

        assert_eq!(config.poll.device_slot, Some(2));
        assert_eq!(config.poll.frame_rate_hz, 60);
        assert_eq!(config.logging.max_level(), Level::DEBUG);
    }

    #[test]
    fn frame_rate_is_clamped() {
        let mut poll = PollConfig::default();
        poll.frame_rate_hz = 0;
        assert_eq!(poll.frame_rate(), 1);
        poll.frame_rate_hz = 50_000;
        assert_eq!(poll.frame_rate(), 1000);
    }

    #[test]
    fn unknown_level_falls_back_to_info() {
        let logging = LoggingConfig {
            level: "chatty".to_string(),
        };
        assert_eq!(logging.max_level(), Level::INFO);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let result = Config::parse("[poll]\nframe_rate_hz = \"fast\"", Path::new("bad.toml"));
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    struct WarnCounter(Arc<AtomicUsize>);

    impl<S: Subscriber> Layer<S> for WarnCounter {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            if *event.metadata().level() == Level::WARN {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    #[test]
    fn missing_file_is_default_with_warning() {
        let path = std::env::temp_dir().join("gamepad-state-missing-config.toml");
        let warnings = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(WarnCounter(warnings.clone()));

        let config = tracing::subscriber::with_default(subscriber, || Config::load(&path));

        assert_eq!(config.unwrap(), Config::default());
        assert_eq!(warnings.load(Ordering::SeqCst), 1);
    }
}
