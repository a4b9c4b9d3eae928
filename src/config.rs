use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::camera;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            title: "cubelight".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub move_speed: f32,
    pub mouse_sensitivity: f32,
    pub fov_max: f32,
    pub initial_position: [f32; 3],
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            move_speed: camera::DEFAULT_SPEED,
            mouse_sensitivity: camera::DEFAULT_SENSITIVITY,
            fov_max: camera::ZOOM_MAX,
            initial_position: [0.0, 0.0, 3.0],
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub window: WindowConfig,
    pub camera: CameraConfig,
}

impl DemoConfig {
    /// Loads a TOML config, falling back to defaults when the file does
    /// not exist. A file that exists but fails to parse is an error.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = DemoConfig::load(dir.path().join("nope.toml")).unwrap();
        assert_eq!(config.window.width, 800);
        assert_eq!(config.window.height, 600);
        assert_eq!(config.camera.initial_position, [0.0, 0.0, 3.0]);
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("demo.toml");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "[camera]\nmove_speed = 10.0").unwrap();

        let config = DemoConfig::load(&path).unwrap();
        assert_eq!(config.camera.move_speed, 10.0);
        assert_eq!(config.camera.fov_max, camera::ZOOM_MAX);
        assert_eq!(config.window.title, "cubelight");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("demo.toml");
        fs::write(&path, "not = [valid").unwrap();
        assert!(matches!(
            DemoConfig::load(&path),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn round_trips_through_toml() {
        let config = DemoConfig::default();
        let text = toml::to_string(&config).unwrap();
        let back: DemoConfig = toml::from_str(&text).unwrap();
        assert_eq!(back.window.width, config.window.width);
        assert_eq!(back.camera.move_speed, config.camera.move_speed);
    }
}
