use anyhow::Result;

use crate::AppSettings;

/// The browser build ships with the compiled-in defaults.
pub struct BuiltinConfig;

impl BuiltinConfig {
    pub fn new() -> Self {
        BuiltinConfig
    }
}

#[async_trait::async_trait(?Send)]
impl super::SettingsSource for BuiltinConfig {
    async fn load_settings(&self) -> Result<Option<AppSettings>> {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SettingsSource, load_or_default};

    #[tokio::test]
    async fn builtin_source_falls_back_to_defaults() {
        let source = BuiltinConfig::new();
        assert!(source.load_settings().await.unwrap().is_none());
        assert_eq!(load_or_default(&source).await, AppSettings::default());
    }
}
