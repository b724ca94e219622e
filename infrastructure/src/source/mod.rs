//! Local file system lesson source
//!
//! A module directory holds the slide images, at most one JSON cluster
//! specification and an optional list of trailing media references.

mod catalog;
mod clusters;
mod local;
mod videos;

pub use catalog::{AssetCatalog, CatalogSettings};
pub use clusters::load_cluster_spec;
pub use local::LocalLessonSource;
pub use videos::{load_video_list, parse_video_list};
