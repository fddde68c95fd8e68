use std::{env, fmt::Display, path::PathBuf, str::FromStr, time::Duration};

use thiserror::Error;
use tracing::{info, warn};

const DEFAULT_CHANNEL_BUFFER: &str = "32";
const DEFAULT_IMAGE_URL: &str = "https://drive.google.com/uc?export=view&id={picture}";
const DEFAULT_SHUTDOWN_GRACE_MS: &str = "5000";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid {key} value: {reason}")]
    Invalid { key: &'static str, reason: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Request channel capacity of every collection actor.
    pub channel_buffer: usize,
    /// Image URL pattern; `{picture}` is replaced with the stored picture id.
    pub image_url: String,
    /// JSON seed file. The built-in demo data is used when unset.
    pub seed_path: Option<PathBuf>,
    /// How long shutdown waits for each collection to drain before aborting it.
    pub shutdown_grace: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            channel_buffer: 32,
            image_url: DEFAULT_IMAGE_URL.to_string(),
            seed_path: None,
            shutdown_grace: Duration::from_millis(5000),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        let channel_buffer: usize = try_load("FOOD_CHANNEL_BUFFER", DEFAULT_CHANNEL_BUFFER)?;
        if channel_buffer == 0 {
            return Err(ConfigError::Invalid {
                key: "FOOD_CHANNEL_BUFFER",
                reason: "must be at least 1".into(),
            });
        }

        let image_url: String = try_load("FOOD_IMAGE_URL", DEFAULT_IMAGE_URL)?;
        if !image_url.contains("{picture}") {
            return Err(ConfigError::Invalid {
                key: "FOOD_IMAGE_URL",
                reason: "missing {picture} placeholder".into(),
            });
        }

        let grace_ms: u64 = try_load("FOOD_SHUTDOWN_GRACE_MS", DEFAULT_SHUTDOWN_GRACE_MS)?;
        let seed_path = var("FOOD_SEED_PATH").ok().map(PathBuf::from);

        info!(channel_buffer, grace_ms, ?seed_path, "Configuration loaded");
        Ok(Self {
            channel_buffer,
            image_url,
            seed_path,
            shutdown_grace: Duration::from_millis(grace_ms),
        })
    }

    pub fn images(&self) -> ImageUrls {
        ImageUrls {
            pattern: self.image_url.clone(),
        }
    }
}

/// Builds picture URLs for restaurants and dishes.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageUrls {
    pattern: String,
}

impl ImageUrls {
    pub fn url(&self, picture: &str) -> String {
        self.pattern.replace("{picture}", picture)
    }
}

impl Default for ImageUrls {
    fn default() -> Self {
        Config::default().images()
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| {
        warn!("Environment variable {key} not found, using default");
    })
}

fn try_load<T: FromStr>(key: &'static str, default: &str) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    parse(key, var(key).unwrap_or_else(|_| default.to_string()))
}

fn parse<T: FromStr>(key: &'static str, raw: String) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    raw.trim().parse().map_err(|e: T::Err| {
        warn!("Invalid {key} value: {e}");
        ConfigError::Invalid {
            key,
            reason: e.to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_parse_reports_key() {
        let parsed: usize = parse("FOOD_CHANNEL_BUFFER", " 64 ".into()).unwrap();
        assert_eq!(parsed, 64);

        let err = parse::<usize>("FOOD_CHANNEL_BUFFER", "lots".into()).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                key: "FOOD_CHANNEL_BUFFER",
                ..
            }
        ));
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_unset_variable_is_reported_once() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        let value: usize = tracing::subscriber::with_default(subscriber, || {
            try_load("FOOD_UNSET_FOR_CONFIG_TEST", "7")
        })
        .unwrap();
        assert_eq!(value, 7);

        let logs = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert_eq!(logs.matches("FOOD_UNSET_FOR_CONFIG_TEST").count(), 1);
        assert!(logs.contains("WARN"));
    }

    #[test]
    fn test_default_image_url() {
        let images = Config::default().images();
        assert_eq!(
            images.url("abc123"),
            "https://drive.google.com/uc?export=view&id=abc123"
        );
    }
}
