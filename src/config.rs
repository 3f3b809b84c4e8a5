use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::game::{GameSettings, DEFAULT_TRAVEL_SECS, MAX_TRAVEL_SECS};
use crate::language::WordSource;
use crate::scheduler::{clamp_interval, DEFAULT_SPAWN_INTERVAL_SECS};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub spawn_interval_secs: f64,
    pub language: String,
    pub word_file: Option<PathBuf>,
    pub travel_secs: f64,
    pub expire_words: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            spawn_interval_secs: DEFAULT_SPAWN_INTERVAL_SECS,
            language: "english5".to_string(),
            word_file: None,
            travel_secs: DEFAULT_TRAVEL_SECS,
            expire_words: false,
        }
    }
}

impl Config {
    /// A word file, when set, wins over the built-in language.
    pub fn word_source(&self) -> WordSource {
        match &self.word_file {
            Some(path) => WordSource::File(path.clone()),
            None => WordSource::Builtin(self.language.clone()),
        }
    }

    pub fn game_settings(&self) -> GameSettings {
        let travel_secs = if self.travel_secs.is_finite() && self.travel_secs > 0.0 {
            self.travel_secs.min(MAX_TRAVEL_SECS)
        } else {
            DEFAULT_TRAVEL_SECS
        };
        GameSettings {
            spawn_interval_secs: clamp_interval(self.spawn_interval_secs),
            travel: Duration::from_secs_f64(travel_secs),
            expire_words: self.expire_words,
        }
    }
}

pub trait ConfigStore {
    fn load(&self) -> Config;
    fn save(&self, cfg: &Config) -> std::io::Result<()>;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        let path = if let Some(pd) = ProjectDirs::from("", "", "keyshooter") {
            pd.config_dir().join("config.json")
        } else {
            PathBuf::from("keyshooter_config.json")
        };
        Self { path }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Config {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(_) => return Config::default(),
        };
        match serde_json::from_slice::<Config>(&bytes) {
            Ok(cfg) => cfg,
            Err(err) => {
                log::warn!(
                    "ignoring unreadable config {}: {err}",
                    self.path.display()
                );
                Config::default()
            }
        }
    }

    fn save(&self, cfg: &Config) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(cfg)?;
        fs::write(&self.path, data)
    }
}
