//! Flat key-value settings persisted as a JSON side document.
//!
//! # Responsibility
//! - Load settings with defaults on a missing or malformed file.
//! - Rewrite the whole document on any single-key change.
//!
//! # Invariants
//! - `load` never fails; fallback to defaults is silent apart from a log.
//! - No in-memory cache: every `get`/`set` is a load-mutate-save round
//!   trip, so concurrent writers race and the last one wins.

use log::warn;
use serde_json::{json, Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Default settings file name, relative to the install location.
pub const CONFIG_FILE: &str = "config.json";

/// Settings document shape: flat key to string/number values.
pub type ConfigMap = Map<String, Value>;

/// Load-or-default, persist-on-write settings store.
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Creates a store backed by the given file path.
    ///
    /// The file is not touched until the first `load`/`save`.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Built-in defaults returned whenever the side document is unusable.
    pub fn defaults() -> ConfigMap {
        let mut map = ConfigMap::new();
        map.insert("theme".to_string(), json!("light"));
        map.insert("accent_color".to_string(), json!("pink"));
        map.insert("window_width".to_string(), json!(900));
        map.insert("window_height".to_string(), json!(700));
        map.insert("auto_save_delay".to_string(), json!(2000));
        map.insert("font_size".to_string(), json!(14));
        map
    }

    /// Reads the settings document; defaults on missing or malformed file.
    pub fn load(&self) -> ConfigMap {
        match fs::read_to_string(&self.path) {
            Ok(raw) => match serde_json::from_str::<ConfigMap>(&raw) {
                Ok(map) => map,
                Err(err) => {
                    warn!(
                        "event=config_load module=config status=fallback reason=malformed error={err}"
                    );
                    Self::defaults()
                }
            },
            Err(_) => Self::defaults(),
        }
    }

    /// Serializes and overwrites the document wholesale.
    ///
    /// Returns `false` on I/O failure; settings loss is non-fatal to the
    /// application.
    pub fn save(&self, config: &ConfigMap) -> bool {
        let serialized = match serde_json::to_string_pretty(config) {
            Ok(text) => text,
            Err(err) => {
                warn!("event=config_save module=config status=error reason=serialize error={err}");
                return false;
            }
        };
        match fs::write(&self.path, serialized) {
            Ok(()) => true,
            Err(err) => {
                warn!("event=config_save module=config status=error reason=io error={err}");
                false
            }
        }
    }

    /// Reads a single setting, falling back to the provided default.
    pub fn get(&self, key: &str, default: Value) -> Value {
        self.load().get(key).cloned().unwrap_or(default)
    }

    /// Writes a single setting via a load-mutate-save round trip.
    pub fn set(&self, key: &str, value: Value) -> bool {
        let mut config = self.load();
        config.insert(key.to_string(), value);
        self.save(&config)
    }
}
