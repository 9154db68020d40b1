use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use spindle::{IconName, ItemId, ItemLabel, MenuItem, SizePreset};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ItemConfig {
    pub id: ItemId,
    pub label: ItemLabel,
    pub icon: Option<IconName>,
}

impl ItemConfig {
    pub fn to_menu_item(&self) -> MenuItem {
        MenuItem::new(self.id, self.label.clone(), self.icon.clone())
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default = "default_center_label")]
    pub center_label: String,
    #[serde(default)]
    pub size: SizePreset,
    #[serde(default)]
    pub items: Vec<ItemConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            center_label: default_center_label(),
            size: SizePreset::default(),
            items: Vec::new(),
        }
    }
}

fn default_center_label() -> String {
    "Menu".to_string()
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Notify error: {0}")]
    Notify(#[from] notify::Error),
}

pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("org", "rotary", "rotary").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let s = config::Config::builder()
        .add_source(config::File::from(path.to_path_buf()).required(false))
        .add_source(config::Environment::with_prefix("ROTARY"))
        .build()?;

    Ok(s.try_deserialize()?)
}

/// Load the config at `path`, falling back to the built-in item set when the
/// file is missing or broken. The app never refuses to start over a config
/// problem.
pub fn load_or_setup(path: &Path) -> Config {
    if !path.exists() {
        log::info!(
            "No config at {}, starting with built-in defaults",
            path.display()
        );
        return builtin_config();
    }

    match load_from(path) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Failed to load config ({}), using built-in defaults", e);
            builtin_config()
        }
    }
}

fn builtin_config() -> Config {
    let parsed = config::Config::builder()
        .add_source(config::File::from_str(
            DEFAULT_CONFIG,
            config::FileFormat::Toml,
        ))
        .build()
        .and_then(|c| c.try_deserialize());

    match parsed {
        Ok(config) => config,
        Err(e) => {
            log::error!("Built-in default config failed to parse: {}", e);
            Config::default()
        }
    }
}

pub fn write_default_config() -> std::io::Result<PathBuf> {
    let path =
        get_config_path().map_err(|e| std::io::Error::new(std::io::ErrorKind::NotFound, e))?;
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(&path, DEFAULT_CONFIG)?;
    }
    Ok(path)
}

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

use crate::events::AppEvent;
use async_channel::Sender;
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};

pub async fn run_async_watcher(tx: Sender<AppEvent>, config_path: PathBuf) {
    let config_dir = match config_path.parent() {
        Some(p) => p.to_path_buf(),
        None => return,
    };

    if let Err(e) = fs_err::create_dir_all(&config_dir) {
        log::error!("Failed to create config directory for watching: {}", e);
        return;
    }

    let (bridge_tx, bridge_rx) = async_channel::unbounded();

    let mut watcher = match RecommendedWatcher::new(
        move |res| {
            let _ = bridge_tx.send_blocking(res);
        },
        notify::Config::default(),
    ) {
        Ok(w) => w,
        Err(e) => {
            log::error!("Failed to create watcher: {}", e);
            return;
        }
    };

    if let Err(e) = watcher.watch(&config_dir, RecursiveMode::NonRecursive) {
        log::error!("Failed to watch config directory: {}", e);
        return;
    }

    while let Ok(res) = bridge_rx.recv().await {
        match res {
            Ok(event) => {
                let meaningful_event = matches!(
                    event.kind,
                    EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
                );

                if meaningful_event
                    && event.paths.iter().any(|p| p == &config_path)
                    && tx.send(AppEvent::ConfigReload).await.is_err()
                {
                    break;
                }
            }
            Err(e) => log::error!("Watch error: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.center_label, "Menu");
        assert_eq!(config.size, SizePreset::Medium);
        assert!(config.items.is_empty());
    }

    #[test]
    fn items_deserialize_with_optional_icons() {
        let json = r#"{
            "size": "lg",
            "items": [
                { "id": 1, "label": "Home", "icon": "user-home" },
                { "id": 2, "label": "Help" }
            ]
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.size, SizePreset::Large);
        assert_eq!(config.items.len(), 2);

        let home = config.items[0].to_menu_item();
        assert_eq!(home.id.get(), 1);
        assert_eq!(home.icon, Some(IconName::new("user-home")));
        assert_eq!(config.items[1].to_menu_item().icon, None);
    }

    #[test]
    fn builtin_config_provides_a_full_dial() {
        let config = builtin_config();
        assert_eq!(config.center_label, "Menu");
        assert_eq!(config.items.len(), 8);

        let ids: Vec<u32> = config.items.iter().map(|i| i.id.get()).collect();
        let mut deduped = ids.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(ids.len(), deduped.len(), "builtin item ids must be unique");
    }
}
