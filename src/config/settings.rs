// src/config/settings.rs
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ::config::{Config, Environment, File, FileFormat};
use serde::{Serialize, Deserialize};

use crate::analysis::CloudSettings;
use crate::state::DEFAULT_RATING;

pub const ENV_PREFIX: &str = "SENTIMENT_AI";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowSettings {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 760.0,
            height: 900.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RatingSettings {
    pub default: u8,
}

impl Default for RatingSettings {
    fn default() -> Self {
        Self {
            default: DEFAULT_RATING,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LexiconSettings {
    pub extra_words: HashMap<String, f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppSettings {
    pub window: WindowSettings,
    pub cloud: CloudSettings,
    pub rating: RatingSettings,
    pub lexicon: LexiconSettings,
    pub log_filter: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            window: WindowSettings::default(),
            cloud: CloudSettings::default(),
            rating: RatingSettings::default(),
            lexicon: LexiconSettings::default(),
            log_filter: "info".to_string(),
        }
    }
}

impl AppSettings {
    /// `<config dir>/sentiment-ai/settings.ron`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("sentiment-ai").join("settings.ron"))
    }

    /// The settings file that actually contributes to `load_from(path)`, if any.
    pub fn file_in_use(path: Option<&Path>) -> Option<&Path> {
        path.filter(|path| path.is_file())
    }

    /// Defaults, then the RON file if it exists, then `SENTIMENT_AI__*` env vars.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(
                File::from(path)
                    .format(FileFormat::Ron)
                    .required(false)
            );
        }

        let settings: AppSettings = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true)
            )
            .build()
            .context("Failed to read settings")?
            .try_deserialize()
            .context("Failed to parse settings")?;

        Ok(settings.normalized())
    }

    fn normalized(mut self) -> Self {
        self.rating.default = self.rating.default.clamp(1, 5);
        self.cloud.prefer_horizontal = self.cloud.prefer_horizontal.clamp(0.0, 1.0);
        self.cloud.relative_scaling = self.cloud.relative_scaling.clamp(0.0, 1.0);
        self.cloud.min_font_size = self.cloud.min_font_size.max(1.0);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;
    use std::sync::{Mutex, MutexGuard};

    // load_from reads the process environment, so these tests run one at a time
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn env_lock() -> MutexGuard<'static, ()> {
        ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    #[test]
    fn test_defaults() {
        let settings = AppSettings::default();
        assert_eq!(settings.cloud.width, 600);
        assert_eq!(settings.cloud.height, 300);
        assert_eq!(settings.cloud.max_words, 200);
        assert_eq!(settings.rating.default, 4);
        assert!(settings.lexicon.extra_words.is_empty());
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let _env = env_lock();
        let dir = tempfile::tempdir().unwrap();
        let settings = AppSettings::load_from(Some(dir.path().join("nope.ron").as_path())).unwrap();
        assert_eq!(settings, AppSettings::default());
    }

    #[test]
    fn test_file_overrides_only_given_fields() {
        let _env = env_lock();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.ron");
        fs::write(
            &path,
            r#"(
                cloud: (width: 800, seed: 7),
                rating: (default: 9),
                lexicon: (extra_words: {"dope": 0.6}),
                log_filter: "debug",
            )"#,
        ).unwrap();

        let settings = AppSettings::load_from(Some(path.as_path())).unwrap();

        assert_eq!(settings.cloud.width, 800);
        assert_eq!(settings.cloud.seed, 7);
        assert_eq!(settings.cloud.height, 300);
        assert_eq!(settings.rating.default, 5);
        assert_eq!(settings.lexicon.extra_words.get("dope"), Some(&0.6));
        assert_eq!(settings.log_filter, "debug");
        assert_eq!(settings.window, WindowSettings::default());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let _env = env_lock();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.ron");
        fs::write(&path, "(cloud: (width: ").unwrap();

        assert!(AppSettings::load_from(Some(path.as_path())).is_err());
    }

    #[test]
    fn test_env_overrides_file_which_overrides_defaults() {
        let _env = env_lock();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.ron");
        fs::write(&path, r#"(cloud: (width: 700, height: 350), log_filter: "warn")"#).unwrap();

        env::set_var("SENTIMENT_AI__CLOUD__WIDTH", "800");
        env::set_var("SENTIMENT_AI__LOG_FILTER", "debug");
        let loaded = AppSettings::load_from(Some(path.as_path()));
        env::remove_var("SENTIMENT_AI__CLOUD__WIDTH");
        env::remove_var("SENTIMENT_AI__LOG_FILTER");

        let settings = loaded.unwrap();
        assert_eq!(settings.cloud.width, 800);
        assert_eq!(settings.log_filter, "debug");
        assert_eq!(settings.cloud.height, 350);
        assert_eq!(settings.cloud.max_words, 200);
    }

    #[test]
    fn test_file_in_use_only_when_present() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.ron");

        assert_eq!(AppSettings::file_in_use(None), None);
        assert_eq!(AppSettings::file_in_use(Some(path.as_path())), None);
        assert_eq!(AppSettings::file_in_use(Some(dir.path())), None);

        fs::write(&path, "()").unwrap();
        assert_eq!(AppSettings::file_in_use(Some(path.as_path())), Some(path.as_path()));
    }
}
