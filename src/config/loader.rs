use std::path::{Path, PathBuf};

use crate::error::{Result, StyleGuardError};

use super::model::{Config, RawConfig};

/// Trait for loading configuration from various sources.
pub trait ConfigLoader {
    /// Load configuration from the default location.
    ///
    /// # Errors
    /// Returns an error if no config file is found or it cannot be read or parsed.
    fn load(&self) -> Result<LoadResult>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    fn load_from_path(&self, path: &Path) -> Result<LoadResult>;
}

/// A loaded configuration together with the file it came from.
#[derive(Debug, Clone)]
pub struct LoadResult {
    pub config: Config,
    pub path: PathBuf,
}

/// File names searched in the current directory, in order.
pub const LOCAL_CONFIG_NAMES: &[&str] = &[".style-guard.json", ".style-guard.toml"];

/// Trait for filesystem operations (for testability).
pub trait FileSystem {
    /// Read file contents as a string.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Get the current working directory.
    ///
    /// # Errors
    /// Returns an error if the current directory cannot be determined.
    fn current_dir(&self) -> std::io::Result<PathBuf>;
}

/// Real filesystem implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        std::env::current_dir()
    }
}

/// On-disk format of a configuration file, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::Toml,
            _ => Self::Json,
        }
    }
}

/// Loads configuration from the filesystem.
///
/// Without an explicit path, `.style-guard.json` and then `.style-guard.toml`
/// are looked up in the current directory. There is no built-in fallback.
#[derive(Debug)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl Default for FileConfigLoader<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    fn discover(&self) -> Result<PathBuf> {
        let cwd = self.fs.current_dir()?;
        LOCAL_CONFIG_NAMES
            .iter()
            .map(|name| cwd.join(name))
            .find(|candidate| self.fs.exists(candidate))
            .ok_or_else(|| {
                StyleGuardError::Config(format!(
                    "no configuration file found in {} (looked for {}); pass --options or run `style-guard init`",
                    cwd.display(),
                    LOCAL_CONFIG_NAMES.join(", ")
                ))
            })
    }

    /// Parse a document in the given format into a validated `Config`.
    ///
    /// # Errors
    /// Returns a parse error for malformed documents or missing fields, and the
    /// validation errors of [`Config::from_raw`].
    pub fn parse(content: &str, format: ConfigFormat) -> Result<Config> {
        let raw: RawConfig = match format {
            ConfigFormat::Json => serde_json::from_str(content)?,
            ConfigFormat::Toml => toml::from_str(content)?,
        };
        Config::from_raw(raw)
    }
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load(&self) -> Result<LoadResult> {
        let path = self.discover()?;
        self.load_from_path(&path)
    }

    fn load_from_path(&self, path: &Path) -> Result<LoadResult> {
        let content = self
            .fs
            .read_to_string(path)
            .map_err(|source| StyleGuardError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
        let config = Self::parse(&content, ConfigFormat::from_path(path))?;
        Ok(LoadResult {
            config,
            path: path.to_path_buf(),
        })
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
