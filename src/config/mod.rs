//! Read-only application configuration.
//!
//! Native builds look for an optional `settings.json` in the platform config
//! directory. The browser build has nowhere to read from and always uses the
//! defaults. Nothing is ever written back.

use async_trait::async_trait;
use dioxus::logger::tracing::{info, warn};

use crate::AppSettings;

#[cfg(any(target_arch = "wasm32", test))]
mod builtin_config;
#[cfg(not(target_arch = "wasm32"))]
mod file_config;

#[cfg(not(target_arch = "wasm32"))]
pub type AppConfig = file_config::FileConfig;
#[cfg(target_arch = "wasm32")]
pub type AppConfig = builtin_config::BuiltinConfig;

#[async_trait(?Send)]
pub trait SettingsSource {
    /// `Ok(None)` when the source holds no settings at all.
    async fn load_settings(&self) -> anyhow::Result<Option<AppSettings>>;
}

#[cfg(not(target_arch = "wasm32"))]
pub fn get_config() -> AppConfig {
    use directories_next::ProjectDirs;
    use std::path::PathBuf;

    let base = if let Some(proj_dirs) = ProjectDirs::from("com", "N K", "parent-powerup") {
        proj_dirs.config_dir().to_path_buf()
    } else {
        PathBuf::from(".")
    };
    AppConfig::new(base)
}

#[cfg(target_arch = "wasm32")]
pub fn get_config() -> AppConfig {
    AppConfig::new()
}

/// Loads settings from `source`, falling back to defaults on any failure.
pub async fn load_or_default(source: &impl SettingsSource) -> AppSettings {
    match source.load_settings().await {
        Ok(Some(s)) => {
            info!("Loaded settings: {s:?}");
            s
        }
        Ok(None) => AppSettings::default(),
        Err(e) => {
            warn!("Could not load settings, using defaults: {e:?}");
            AppSettings::default()
        }
    }
}
