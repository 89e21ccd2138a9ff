//! Flat key/value settings persistence.
//!
//! The link kernel only ever sees a [`Settings`](crate::settings::Settings)
//! value; stores are what the admin side reads from and writes to.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::error::WachatError;
use crate::settings::{flag_value, SettingKey, Settings};

/// Get / set / define-default over string keys and values.
pub trait SettingsStore {
    /// Current value, or `None` when the key was never stored.
    fn get(&self, key: &str) -> Option<String>;

    /// Store a value, replacing any existing one.
    fn set(&mut self, key: &str, value: &str);

    /// Remove a key. Returns `true` if it was present.
    fn remove(&mut self, key: &str) -> bool;

    /// Stored keys, sorted.
    fn keys(&self) -> Vec<String>;

    /// Store `value` only if `key` is absent. Returns `true` if it wrote.
    fn define_default(&mut self, key: &str, value: &str) -> bool {
        if self.get(key).is_some() {
            return false;
        }
        self.set(key, value);
        true
    }
}

/// Seed every setting with its documented default, leaving existing values alone.
///
/// Returns how many keys were written.
pub fn install_defaults(store: &mut dyn SettingsStore) -> usize {
    let defaults = Settings::default();
    SettingKey::ALL
        .into_iter()
        .filter(|key| store.define_default(key.as_str(), &defaults.stored_value(*key)))
        .count()
}

/// In-memory store.
#[derive(Debug, Clone, Default)]
pub struct MemorySettingsStore {
    values: BTreeMap<String, String>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MemorySettingsStore {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl SettingsStore for MemorySettingsStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) -> bool {
        self.values.remove(key).is_some()
    }

    fn keys(&self) -> Vec<String> {
        self.values.keys().cloned().collect()
    }
}

/// Store backed by a flat TOML file (`key = "value"` lines).
#[derive(Debug, Clone)]
pub struct TomlSettingsStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl TomlSettingsStore {
    /// Open the store at `path`. A missing file is an empty store.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, WachatError> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            info!("settings file {} not found, starting empty", path.display());
            return Ok(Self {
                path,
                values: BTreeMap::new(),
            });
        }

        let content = std::fs::read_to_string(&path)
            .map_err(|e| WachatError::Store(format!("failed to read {}: {e}", path.display())))?;
        let values = parse_flat_toml(&content)?;

        Ok(Self { path, values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the file, creating parent directories as needed.
    pub fn save(&self) -> Result<(), WachatError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let content = toml::to_string(&self.values)
            .map_err(|e| WachatError::Store(format!("failed to serialize settings: {e}")))?;
        std::fs::write(&self.path, content)?;
        info!("settings saved to {}", self.path.display());
        Ok(())
    }
}

impl SettingsStore for TomlSettingsStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) -> bool {
        self.values.remove(key).is_some()
    }

    fn keys(&self) -> Vec<String> {
        self.values.keys().cloned().collect()
    }
}

/// Parse a flat TOML table into string values.
///
/// Booleans become `yes`/`no` and numbers their decimal form, so hand-edited
/// files like `enabled = true` or `button_position = 25` read as expected.
/// Nested tables and arrays are skipped.
fn parse_flat_toml(content: &str) -> Result<BTreeMap<String, String>, WachatError> {
    let table: toml::Table = toml::from_str(content)
        .map_err(|e| WachatError::Store(format!("failed to parse settings: {e}")))?;

    let mut values = BTreeMap::new();
    for (key, value) in table {
        let text = match value {
            toml::Value::String(s) => s,
            toml::Value::Boolean(b) => flag_value(b).to_string(),
            toml::Value::Integer(i) => i.to_string(),
            toml::Value::Float(f) => f.to_string(),
            other => {
                warn!("ignoring non-scalar setting {key} = {other}");
                continue;
            }
        };
        values.insert(key, text);
    }
    Ok(values)
}
