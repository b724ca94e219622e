//! Configuration file loading for lessonsmith
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment: `LESSONSMITH_<SECTION>__<KEY>`
//! 2. `--config <path>` specified file
//! 3. Project root: `./lessonsmith.toml` or `./.lessonsmith.toml`
//! 4. Global: `$XDG_CONFIG_HOME/lessonsmith/config.toml` (or the platform equivalent)
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileCourseConfig, FileExecutorConfig, FileLabelsConfig, FileLoggingConfig,
    FileOutputConfig, FileUploadConfig, FileWebDriverConfig,
};
pub use loader::ConfigLoader;
