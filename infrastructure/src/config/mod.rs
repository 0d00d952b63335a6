//! Configuration file loading for quotecycle
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment: `QUOTECYCLE_<SECTION>__<KEY>` (e.g. `QUOTECYCLE_CORPUS__LOCATION`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./quotecycle.toml` or `./.quotecycle.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/quotecycle/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{FileConfig, FileCorpusConfig, FileOutputConfig, FileShareConfig};
pub use loader::ConfigLoader;
