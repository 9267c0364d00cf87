//! Configuration file discovery
//!
//! Looks for `config.{toml,yaml,yml,json}` in the global (`~/.laneboard/`)
//! and project (`./.laneboard/`) directories.

use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};

/// File stem shared by every discoverable configuration file
pub const CONFIG_FILE_STEM: &str = "config";

const FILE_NAMES: [&str; 4] = ["config.toml", "config.yaml", "config.yml", "config.json"];

/// A discovered configuration file
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFile {
    pub path: PathBuf,
    pub format: ConfigFormat,
    pub scope: ConfigScope,
}

/// Configuration file format detected from file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Yaml,
    Json,
}

impl ConfigFormat {
    /// Detect format from file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "toml" => Some(Self::Toml),
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Detect format from a path's extension
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }
}

/// Where a configuration file was found. Later scopes override earlier ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ConfigScope {
    Global,
    Project,
    /// Passed explicitly by the caller
    Explicit,
}

/// Finds configuration files in the global and project directories
#[derive(Debug, Clone, Default)]
pub struct FileDiscovery {
    project_dir: Option<PathBuf>,
    global_dir: Option<PathBuf>,
}

impl FileDiscovery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use this directory instead of `./.laneboard`
    pub fn with_project_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.project_dir = Some(dir.into());
        self
    }

    /// Use this directory instead of `~/.laneboard`
    pub fn with_global_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.global_dir = Some(dir.into());
        self
    }

    /// All configuration files, lowest precedence first
    pub fn discover_all(&self) -> Vec<ConfigFile> {
        let project_dir = self.project_dir.clone().or_else(resolve_project_dir);
        let global_dir = self.global_dir.clone().or_else(resolve_global_dir);

        let mut files = Vec::new();
        if let Some(dir) = global_dir {
            files.extend(search_directory(&dir, ConfigScope::Global));
        }
        if let Some(dir) = project_dir {
            files.extend(search_directory(&dir, ConfigScope::Project));
        }

        debug!("Discovered {} configuration files", files.len());
        files
    }
}

fn search_directory(dir: &Path, scope: ConfigScope) -> Vec<ConfigFile> {
    if !dir.exists() {
        trace!("Directory does not exist: {}", dir.display());
        return Vec::new();
    }
    if !dir.is_dir() {
        warn!("Path exists but is not a directory: {}", dir.display());
        return Vec::new();
    }

    FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .filter(|path| path.is_file())
        .filter_map(|path| {
            let format = ConfigFormat::from_path(&path)?;
            trace!("Found config: {} ({:?})", path.display(), format);
            Some(ConfigFile {
                path,
                format,
                scope,
            })
        })
        .collect()
}

fn resolve_project_dir() -> Option<PathBuf> {
    let dir = std::env::current_dir()
        .ok()?
        .join(crate::types::DEFAULT_STORAGE_DIR);
    dir.is_dir().then_some(dir)
}

fn resolve_global_dir() -> Option<PathBuf> {
    let dir = dirs::home_dir()?.join(crate::types::DEFAULT_STORAGE_DIR);
    dir.is_dir().then_some(dir)
}
