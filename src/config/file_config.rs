use std::{io::ErrorKind, path::PathBuf};

use anyhow::{Context, Result};
use tokio::fs;

use crate::AppSettings;

pub struct FileConfig {
    base: PathBuf,
}

impl FileConfig {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    fn settings_path(&self) -> PathBuf {
        self.base.join("settings.json")
    }
}

#[async_trait::async_trait(?Send)]
impl super::SettingsSource for FileConfig {
    async fn load_settings(&self) -> Result<Option<AppSettings>> {
        let path = self.settings_path();
        let data = match fs::read_to_string(&path).await {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e).with_context(|| format!("reading {}", path.display())),
        };
        let settings = serde_json::from_str(&data)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(Some(settings))
    }
}
