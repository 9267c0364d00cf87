//! Configuration provider using Figment

use crate::discovery::{ConfigFile, ConfigFormat, ConfigScope, FileDiscovery};
use crate::error::{ConfigError, ConfigResult};
use crate::types::BoardConfig;
use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use std::path::PathBuf;
use tracing::{debug, trace};

/// Prefix of environment variables read into the configuration
pub const ENV_PREFIX: &str = "LANEBOARD_";

/// Loads [`BoardConfig`] from all sources.
///
/// Sources are merged in precedence order (later sources override earlier ones):
/// 1. Default values
/// 2. Global configuration file (`~/.laneboard/config.*`)
/// 3. Project configuration file (`./.laneboard/config.*`)
/// 4. Explicit configuration file, when given
/// 5. `LANEBOARD_` environment variables (`__` separates nested keys)
#[derive(Debug, Clone, Default)]
pub struct ConfigProvider {
    discovery: FileDiscovery,
    explicit_file: Option<PathBuf>,
}

impl ConfigProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the file discovery (custom directories)
    pub fn with_discovery(mut self, discovery: FileDiscovery) -> Self {
        self.discovery = discovery;
        self
    }

    /// Also load this file, which must exist
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.explicit_file = Some(path.into());
        self
    }

    /// Load and validate the configuration
    pub fn load(&self) -> ConfigResult<BoardConfig> {
        let config: BoardConfig = self.build_figment()?.extract()?;
        config.validate()?;
        debug!(
            storage_dir = %config.storage_dir.display(),
            columns = config.columns.len(),
            "Loaded board configuration"
        );
        Ok(config)
    }

    fn build_figment(&self) -> ConfigResult<Figment> {
        let mut figment = Figment::new().merge(Serialized::defaults(BoardConfig::default()));

        for file in self.discovery.discover_all() {
            figment = figment.merge(file_provider(&file));
        }

        if let Some(path) = &self.explicit_file {
            if !path.is_file() {
                return Err(ConfigError::FileNotFound { path: path.clone() });
            }
            let format = ConfigFormat::from_path(path).unwrap_or(ConfigFormat::Toml);
            figment = figment.merge(file_provider(&ConfigFile {
                path: path.clone(),
                format,
                scope: ConfigScope::Explicit,
            }));
        }

        trace!("Merging {}* environment variables", ENV_PREFIX);
        Ok(figment.merge(Env::prefixed(ENV_PREFIX).split("__")))
    }
}

fn file_provider(file: &ConfigFile) -> Figment {
    trace!("Loading config file: {} ({:?})", file.path.display(), file.format);
    match file.format {
        ConfigFormat::Toml => Figment::from(Toml::file(&file.path)),
        ConfigFormat::Yaml => Figment::from(Yaml::file(&file.path)),
        ConfigFormat::Json => Figment::from(Json::file(&file.path)),
    }
}

/// Load the configuration from the default locations
pub fn load_configuration() -> ConfigResult<BoardConfig> {
    ConfigProvider::new().load()
}
