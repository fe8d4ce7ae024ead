use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use tracing::warn;
use vrtodo_scene::LayoutMode;

const DEFAULT_CONFIG_PATH: &str = "config/vrtodo.toml";

/// Application configuration, loaded leniently: any read or parse problem
/// falls back to defaults with a warning.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// Remote endpoint serving the initial todo batch.
    pub endpoint: String,
    /// Card placement strategy.
    pub layout: LayoutMode,
    /// Number of simulated frames the headless demo steps through.
    pub demo_frames: u32,
    /// Seconds of simulated time per demo frame.
    pub demo_frame_seconds: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: vrtodo_remote::DEFAULT_ENDPOINT.to_string(),
            layout: LayoutMode::Ring,
            demo_frames: 240,
            demo_frame_seconds: 1.0 / 60.0,
        }
    }
}

impl AppConfig {
    /// Load configuration from the default path.
    pub fn load() -> Self {
        Self::load_from_path(Path::new(DEFAULT_CONFIG_PATH))
    }

    /// Load configuration from an explicit path, falling back to defaults on
    /// errors.
    pub fn load_from_path(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<AppConfig>(&contents) {
                Ok(cfg) => cfg,
                Err(err) => {
                    warn!("Failed to parse {}: {err}. Using defaults", path.display());
                    AppConfig::default()
                }
            },
            Err(err) => {
                if err.kind() != std::io::ErrorKind::NotFound {
                    warn!("Failed to read {}: {err}. Using defaults", path.display());
                } else {
                    warn!("Config not found at {}. Using defaults", path.display());
                }
                AppConfig::default()
            }
        }
    }

    /// Save configuration to an explicit path.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let toml = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_path(name: &str) -> std::path::PathBuf {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir().join(format!("vrtodo_{name}_{timestamp}.toml"))
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let cfg = AppConfig::load_from_path(Path::new("/definitely/not/here.toml"));
        assert_eq!(cfg.endpoint, vrtodo_remote::DEFAULT_ENDPOINT);
        assert_eq!(cfg.layout, LayoutMode::Ring);
    }

    #[test]
    fn parse_failure_falls_back_to_defaults() {
        let path = temp_path("broken");
        fs::write(&path, "layout = [this is not toml").unwrap();

        let cfg = AppConfig::load_from_path(&path);
        assert_eq!(cfg.demo_frames, 240);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn partial_files_keep_defaults_for_missing_keys() {
        let path = temp_path("partial");
        fs::write(&path, "layout = \"sectioned_grid\"\n").unwrap();

        let cfg = AppConfig::load_from_path(&path);
        assert_eq!(cfg.layout, LayoutMode::SectionedGrid);
        assert_eq!(cfg.endpoint, vrtodo_remote::DEFAULT_ENDPOINT);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn save_then_load_round_trips() {
        let path = temp_path("roundtrip");
        let mut cfg = AppConfig::default();
        cfg.layout = LayoutMode::Arc;
        cfg.demo_frames = 12;
        cfg.save_to_path(&path).unwrap();

        let loaded = AppConfig::load_from_path(&path);
        assert_eq!(loaded.layout, LayoutMode::Arc);
        assert_eq!(loaded.demo_frames, 12);

        let _ = fs::remove_file(&path);
    }
}
