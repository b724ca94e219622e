//! Infrastructure layer for lessonsmith
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: the local lesson source, the WebDriver
//! remote session, and configuration file loading.

pub mod config;
pub mod source;
pub mod webdriver;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig, FileOutputConfig};
pub use source::{AssetCatalog, CatalogSettings, LocalLessonSource};
pub use webdriver::{WebDriverError, WebDriverSession};
