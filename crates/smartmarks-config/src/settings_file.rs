//! JSON file-backed settings store.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::fs;
use tracing::debug;

use smartmarks_protocols::{Settings, SettingsStore, StoreError};

const SETTINGS_KEY: &str = "settings";

/// Settings persisted as `{"settings": {...}}` in a JSON document.
///
/// Other top-level keys in the document are preserved on save.
pub struct FileSettingsStore {
    path: PathBuf,
}

impl FileSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_document(&self) -> Result<Map<String, Value>, StoreError> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str::<Value>(&content)? {
            Value::Object(map) => Ok(map),
            _ => Err(StoreError::Rejected(format!(
                "{} does not hold a JSON object",
                self.path.display()
            ))),
        }
    }
}

#[async_trait]
impl SettingsStore for FileSettingsStore {
    async fn load(&self) -> Result<Settings, StoreError> {
        let mut document = self.read_document().await?;
        match document.remove(SETTINGS_KEY) {
            Some(value) => Ok(serde_json::from_value(value)?),
            None => {
                debug!(path = %self.path.display(), "No stored settings, using defaults");
                Ok(Settings::with_defaults())
            }
        }
    }

    async fn save(&self, settings: &Settings) -> Result<(), StoreError> {
        let mut document = self.read_document().await?;
        document.insert(SETTINGS_KEY.to_string(), serde_json::to_value(settings)?);

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }
        let content = serde_json::to_string_pretty(&Value::Object(document))?;
        fs::write(&self.path, content).await?;
        debug!(path = %self.path.display(), "Saved settings");
        Ok(())
    }
}
