use std::{path::Path, time::Duration};

use config::{Config, ConfigError, Environment, File};
use eyre::WrapErr;
use serde::{Deserialize, Serialize};

use super::get_config_file;
use crate::posts::POSTS_URL;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Settings {
    pub posts_url: String,
    /// Time between showing the page and starting the request
    pub fetch_delay_ms: u64,
    pub request_timeout_secs: u64,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Self::load(&get_config_file())
    }

    /// Defaults, then the toml file at `path` if it exists, then `POSTS_*` env vars.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("posts_url", POSTS_URL)?
            .set_default("fetch_delay_ms", 1000_i64)?
            .set_default("request_timeout_secs", 30_i64)?
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix("POSTS").try_parsing(true))
            .build()?
            .try_deserialize()
    }

    pub fn save_to(&self, path: &Path) -> eyre::Result<()> {
        let contents = toml::to_string(self)?;
        std::fs::write(path, contents)
            .wrap_err_with(|| format!("Could not write settings to {path:?}"))
    }

    pub fn fetch_delay(&self) -> Duration {
        Duration::from_millis(self.fetch_delay_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str) -> std::path::PathBuf {
        let folder = std::env::temp_dir().join(format!("posts-settings-{}", std::process::id()));
        std::fs::create_dir_all(&folder).unwrap();
        folder.join(name)
    }

    #[test]
    pub fn test_defaults_without_file() {
        let settings = Settings::load(&temp_file("does_not_exist.toml")).unwrap();
        assert_eq!(settings.posts_url, POSTS_URL);
        assert_eq!(settings.fetch_delay(), Duration::from_millis(1000));
        assert_eq!(settings.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    pub fn test_file_overrides_defaults() {
        let path = temp_file("partial.toml");
        std::fs::write(&path, "fetch_delay_ms = 0\n").unwrap();
        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.fetch_delay_ms, 0);
        assert_eq!(settings.posts_url, POSTS_URL);
    }

    #[test]
    pub fn test_save_then_load() {
        let path = temp_file("saved.toml");
        let settings = Settings {
            posts_url: "http://localhost:3000/posts".to_string(),
            fetch_delay_ms: 250,
            request_timeout_secs: 5,
        };
        settings.save_to(&path).unwrap();
        assert_eq!(Settings::load(&path).unwrap(), settings);
    }
}
