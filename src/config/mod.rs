use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::domain::{DroneParams, Point2D};

/// Settings read from `agriroute.toml`
///
/// ```toml
/// output = "planned.agriplan"
/// verbose = false
/// base_point = [-10.0, -10.0]
///
/// [drone]
/// tank_volume = 20.0
/// spray_width = 6.0
/// ```
#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct FileConfig {
    #[serde(default)]
    pub output: Option<PathBuf>,
    #[serde(default)]
    pub verbose: bool,
    /// Fallback base point for projects that have none
    #[serde(default)]
    pub base_point: Option<Point2D>,
    /// Fallback drone parameters for projects that have none
    #[serde(default)]
    pub drone: DroneParams,
}

impl FileConfig {
    /// Load the first parseable config file from the search paths
    pub fn load() -> Option<Self> {
        let config_paths = get_config_paths();

        for path in config_paths {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(&path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => return Some(config),
                    Err(e) => {
                        warn!(path = %path.display(), error = %e, "failed to parse config file");
                    }
                }
            }
        }
        None
    }

    /// Load an explicitly requested config file
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("agriroute.toml"));
    paths.push(PathBuf::from(".agriroute.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("agriroute").join("config.toml"));
        paths.push(config_dir.join("agriroute.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".agriroute.toml"));
        paths.push(home.join(".config").join("agriroute").join("config.toml"));
    }

    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config, FileConfig::default());
        assert_eq!(config.drone, DroneParams::default());
    }

    #[test]
    fn test_partial_drone_table() {
        let config: FileConfig = toml::from_str(
            r#"
            base_point = [-10.0, -10.0]

            [drone]
            tank_volume = 35.0
            work_speed = 4.0
            "#,
        )
        .unwrap();

        assert_eq!(config.base_point, Some((-10.0, -10.0)));
        assert_eq!(config.drone.tank_volume, 35.0);
        assert_eq!(config.drone.work_speed, 4.0);
        assert_eq!(config.drone.spray_width, 6.0);
    }

    #[test]
    fn test_from_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("agriroute.toml");
        std::fs::write(&path, "verbose = true\noutput = \"out.agriplan\"\n").unwrap();

        let config = FileConfig::from_path(&path).unwrap();
        assert!(config.verbose);
        assert_eq!(config.output, Some(PathBuf::from("out.agriplan")));
    }

    #[test]
    fn test_from_path_bad_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "verbose = [").unwrap();

        assert!(FileConfig::from_path(&path).is_err());
    }

    #[test]
    fn test_search_paths_start_local() {
        let paths = get_config_paths();
        assert_eq!(paths[0], PathBuf::from("agriroute.toml"));
        assert_eq!(paths[1], PathBuf::from(".agriroute.toml"));
    }
}
