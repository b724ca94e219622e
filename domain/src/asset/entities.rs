//! Slide assets and the ordered deck they form

use crate::core::error::{InputError, PlanningError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A slide file with the ordinal extracted from its file name (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    path: PathBuf,
    index: u32,
}

impl Asset {
    pub fn new(path: impl Into<PathBuf>, index: u32) -> Self {
        Self {
            path: path.into(),
            index,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Ordinal parsed from the file name
    pub fn index(&self) -> u32 {
        self.index
    }

    /// File name without extension, used as the page title
    pub fn stem(&self) -> String {
        self.path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.index.to_string())
    }
}

/// Assets sorted by ordinal with no ties
///
/// Construction sorts its input and rejects duplicate ordinals, so every
/// `AssetDeck` is strictly increasing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AssetDeck {
    assets: Vec<Asset>,
}

impl AssetDeck {
    pub fn new(mut assets: Vec<Asset>) -> Result<Self, PlanningError> {
        assets.sort_by_key(Asset::index);
        if let Some(pair) = assets.windows(2).find(|w| w[0].index >= w[1].index) {
            return Err(PlanningError::NonMonotonicOrdinals {
                previous: pair[0].index,
                next: pair[1].index,
            });
        }
        Ok(Self { assets })
    }

    /// Keep only assets with `index >= start`
    ///
    /// Fails when no asset carries exactly `start`, so a mistyped resume
    /// point never silently skips slides.
    pub fn starting_at(self, start: u32) -> Result<Self, InputError> {
        let assets: Vec<Asset> = self
            .assets
            .into_iter()
            .filter(|a| a.index >= start)
            .collect();
        if !assets.iter().any(|a| a.index == start) {
            return Err(InputError::NoMatch { start });
        }
        Ok(Self { assets })
    }

    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    pub fn first_index(&self) -> Option<u32> {
        self.assets.first().map(Asset::index)
    }

    pub fn last_index(&self) -> Option<u32> {
        self.assets.last().map(Asset::index)
    }

    pub fn contains(&self, index: u32) -> bool {
        self.assets.binary_search_by_key(&index, Asset::index).is_ok()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Asset> {
        self.assets.iter()
    }
}
