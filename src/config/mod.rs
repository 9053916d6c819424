//! Configuration management module.
//!
//! This module handles loading the optional configuration file, which sets
//! where favorites are stored, which catalog to browse, the theme, and how to
//! treat unreadable favorites. Command line flags override file values.

mod error;

pub use error::ConfigError;

use crate::error::AppResult;
use crate::favorites::CorruptPolicy;
use log::*;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/movie-tui";
const DATA_DIRECTORY_NAME: &str = "movie-tui";

/// Oversees application configuration.
///
#[derive(Clone, Debug)]
pub struct Config {
    pub data_dir: Option<PathBuf>,
    pub catalog_path: Option<PathBuf>,
    pub theme_name: String,
    pub on_corrupt_favorites: CorruptPolicy,
    pub ephemeral: bool,
    file_path: Option<PathBuf>,
}

/// Define specification for configuration file.
///
#[derive(Debug, Default, Serialize, Deserialize)]
struct FileSpec {
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
    #[serde(default)]
    pub theme_name: Option<String>,
    #[serde(default)]
    pub on_corrupt_favorites: Option<CorruptPolicy>,
}

fn default_theme_name() -> String {
    "tokyo-night".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Return a new instance holding defaults.
    ///
    pub fn new() -> Config {
        Config {
            data_dir: None,
            catalog_path: None,
            theme_name: default_theme_name(),
            on_corrupt_favorites: CorruptPolicy::default(),
            ephemeral: false,
            file_path: None,
        }
    }

    /// Load the configuration file from the custom directory if provided, or
    /// from the default directory otherwise. A missing file leaves the
    /// defaults in place.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> AppResult<()> {
        // Use default path unless custom path provided
        let dir_path = match custom_path {
            Some(path) => Path::new(&path).to_path_buf(),
            None => Config::default_path()?,
        };
        let file_path = dir_path.join(Path::new(FILE_NAME));

        if file_path.exists() {
            let contents = fs::read_to_string(&file_path).map_err(|e| ConfigError::LoadFailed {
                path: file_path.clone(),
                message: format!("IO error: {}", e),
            })?;
            self.apply(&contents)?;
            debug!("Loaded configuration from {}", file_path.display());
        } else {
            debug!(
                "No configuration file at {}, using defaults",
                file_path.display()
            );
        }
        self.file_path = Some(file_path);

        Ok(())
    }

    /// Merge the values of a YAML configuration document into this instance.
    ///
    pub fn apply(&mut self, contents: &str) -> AppResult<()> {
        // An empty document deserializes to unit, not a mapping
        let data: FileSpec = if contents.trim().is_empty() {
            FileSpec::default()
        } else {
            serde_yaml::from_str(contents)
                .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?
        };
        if let Some(data_dir) = data.data_dir {
            self.data_dir = Some(data_dir);
        }
        if let Some(catalog_path) = data.catalog_path {
            self.catalog_path = Some(catalog_path);
        }
        if let Some(theme_name) = data.theme_name {
            self.theme_name = theme_name;
        }
        if let Some(policy) = data.on_corrupt_favorites {
            self.on_corrupt_favorites = policy;
        }
        Ok(())
    }

    /// Return the path of the configuration file, once `load` has run.
    ///
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Return the directory holding the favorites storage.
    ///
    pub fn resolve_data_dir(&self) -> AppResult<PathBuf> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        match dirs::data_dir() {
            Some(dir) => Ok(dir.join(DATA_DIRECTORY_NAME)),
            None => Err(ConfigError::DataDirectoryNotFound.into()),
        }
    }

    /// Returns the path buffer for the default configuration directory or an
    /// error if the home directory could not be found.
    ///
    fn default_path() -> AppResult<PathBuf> {
        match dirs::home_dir() {
            Some(home) => {
                let home_path = Path::new(&home);
                let default_config_path = Path::new(DEFAULT_DIRECTORY_PATH);
                Ok(home_path.join(default_config_path))
            }
            None => Err(ConfigError::HomeDirectoryNotFound.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    #[test]
    fn test_defaults() {
        let config = Config::new();
        assert_eq!(config.theme_name, "tokyo-night");
        assert_eq!(config.on_corrupt_favorites, CorruptPolicy::Fail);
        assert!(config.data_dir.is_none());
        assert!(config.catalog_path.is_none());
        assert!(!config.ephemeral);
        assert!(config.file_path().is_none());
    }

    #[test]
    fn test_apply_full_document() {
        let mut config = Config::new();
        config
            .apply(
                "data_dir: /tmp/movies\n\
                 catalog_path: /tmp/catalog.json\n\
                 theme_name: dracula\n\
                 on_corrupt_favorites: reset\n",
            )
            .unwrap();
        assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/movies")));
        assert_eq!(config.catalog_path, Some(PathBuf::from("/tmp/catalog.json")));
        assert_eq!(config.theme_name, "dracula");
        assert_eq!(config.on_corrupt_favorites, CorruptPolicy::Reset);
    }

    #[test]
    fn test_apply_partial_document_keeps_defaults() {
        let mut config = Config::new();
        config.apply("theme_name: rose-pine-dawn\n").unwrap();
        assert_eq!(config.theme_name, "rose-pine-dawn");
        assert_eq!(config.on_corrupt_favorites, CorruptPolicy::Fail);

        config.apply("").unwrap();
        assert_eq!(config.theme_name, "rose-pine-dawn");
    }

    #[test]
    fn test_apply_invalid_document() {
        let mut config = Config::new();
        let result = config.apply("on_corrupt_favorites: explode\n");
        assert!(matches!(
            result,
            Err(AppError::Config(ConfigError::DeserializationFailed(_)))
        ));
    }

    #[test]
    fn test_load_from_custom_directory() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(temp.path().join(FILE_NAME), "theme_name: dracula\n").unwrap();

        let mut config = Config::new();
        config.load(temp.path().to_str()).unwrap();
        assert_eq!(config.theme_name, "dracula");
        assert_eq!(config.file_path(), Some(temp.path().join(FILE_NAME).as_path()));
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let temp = tempfile::tempdir().unwrap();
        let mut config = Config::new();
        config.load(temp.path().to_str()).unwrap();
        assert_eq!(config.theme_name, "tokyo-night");
    }

    #[test]
    fn test_resolve_data_dir_prefers_explicit() {
        let mut config = Config::new();
        config.data_dir = Some(PathBuf::from("/srv/movie-tui"));
        assert_eq!(
            config.resolve_data_dir().unwrap(),
            PathBuf::from("/srv/movie-tui")
        );
    }
}
