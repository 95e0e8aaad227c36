use std::{
    collections::BTreeMap,
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::Context;

pub const DARK_MODE_KEY: &str = "darkMode";

/// Key-value string storage for UI preferences.
pub trait PreferenceStore: Send + std::fmt::Debug {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()>;
}

#[must_use]
pub fn read_dark_mode(store: &dyn PreferenceStore) -> bool {
    store.get(DARK_MODE_KEY).is_some_and(|value| value == "true")
}

pub fn write_dark_mode(store: &mut dyn PreferenceStore, dark: bool) -> anyhow::Result<()> {
    store.set(DARK_MODE_KEY, if dark { "true" } else { "false" })
}

#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    values: BTreeMap<String, String>,
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// JSON object on disk, read once at construction and rewritten on every `set`.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FilePreferenceStore {
    /// A missing or unreadable file starts out empty.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = fs::read_to_string(&path)
            .ok()
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default();
        Self { path, values }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        save_preferences(&self.path, &self.values)
    }
}

fn save_preferences(path: &Path, values: &BTreeMap<String, String>) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("creating preferences directory failed")?;
    }
    let payload =
        serde_json::to_string_pretty(values).context("serializing preferences failed")?;

    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    let mut file = options
        .open(path)
        .context("opening preferences file failed")?;
    file.write_all(payload.as_bytes())
        .context("writing preferences file failed")
}

/// `$WEATHER_PANEL_CONFIG_DIR/preferences.json`, else `~/.config/weather-panel/preferences.json`.
#[must_use]
pub fn preferences_path() -> Option<PathBuf> {
    if let Some(base) = std::env::var_os("WEATHER_PANEL_CONFIG_DIR") {
        return Some(PathBuf::from(base).join("preferences.json"));
    }

    let home = std::env::var_os("HOME")?;
    Some(
        PathBuf::from(home)
            .join(".config")
            .join("weather-panel")
            .join("preferences.json"),
    )
}

/// File-backed when a path resolves, in-memory otherwise.
#[must_use]
pub fn default_store() -> Box<dyn PreferenceStore> {
    match preferences_path() {
        Some(path) => Box::new(FilePreferenceStore::load(path)),
        None => Box::new(MemoryPreferenceStore::default()),
    }
}

#[cfg(test)]
mod tests;
