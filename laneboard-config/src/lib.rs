//! laneboard configuration management using Figment
//!
//! # Sources
//!
//! In increasing precedence:
//!
//! - Defaults ([`BoardConfig::default`])
//! - Global: `~/.laneboard/config.{toml,yaml,yml,json}`
//! - Project: `./.laneboard/config.{toml,yaml,yml,json}`
//! - An explicit file passed to [`ConfigProvider::with_file`]
//! - Environment: `LANEBOARD_STORAGE_KEY`, `LANEBOARD_LAYOUT__CARD_HEIGHT`, ...
//!
//! ## Example TOML Configuration
//!
//! ```toml
//! storage_dir = ".laneboard"
//! storage_key = "trello-board-cards"
//! columns = ["todo", "in-progress", "done"]
//!
//! [layout]
//! column_width = 272.0
//! card_height = 40.0
//! ```
//!
//! ```no_run
//! let config = laneboard_config::load_configuration()?;
//! println!("columns: {:?}", config.columns);
//! # Ok::<(), laneboard_config::ConfigError>(())
//! ```

pub mod discovery;
pub mod error;
pub mod provider;
pub mod types;

pub use discovery::{ConfigFile, ConfigFormat, ConfigScope, FileDiscovery, CONFIG_FILE_STEM};
pub use error::{ConfigError, ConfigResult};
pub use provider::{load_configuration, ConfigProvider, ENV_PREFIX};
pub use types::{BoardConfig, DEFAULT_STORAGE_DIR};
