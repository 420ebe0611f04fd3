//! Name-to-colormap lookup.

use std::collections::HashMap;
use std::path::Path;

use tracing::debug;

use super::{builtin, Colormap, ColormapFile};
use crate::error::{RenderError, RenderResult};

/// Registry for managing color maps.
#[derive(Debug, Default)]
pub struct ColormapRegistry {
    color_maps: HashMap<String, Colormap>,
}

impl ColormapRegistry {
    /// Creates a registry holding every built-in colormap.
    pub fn with_defaults() -> Self {
        let mut registry = Self::default();
        for cmap in builtin::all() {
            registry.register(cmap);
        }
        registry
    }

    /// Registers a color map, replacing any existing one with the same name.
    pub fn register(&mut self, color_map: Colormap) {
        self.color_maps.insert(color_map.name().to_string(), color_map);
    }

    /// Registers every colormap defined in a JSON file.
    ///
    /// Returns the number of colormaps added.
    pub fn load_file(&mut self, path: &Path) -> RenderResult<usize> {
        let maps = ColormapFile::from_file(path)?.build()?;
        let count = maps.len();
        for cmap in maps {
            debug!(name = cmap.name(), path = %path.display(), "Registered colormap");
            self.register(cmap);
        }
        Ok(count)
    }

    /// Looks up a colormap by name.
    ///
    /// A `_r` suffix selects the reversed version of a registered map, unless
    /// a map with that exact name was registered.
    pub fn get(&self, name: &str) -> RenderResult<Colormap> {
        if let Some(cmap) = self.color_maps.get(name) {
            return Ok(cmap.clone());
        }
        if let Some(base) = name.strip_suffix("_r") {
            if let Some(cmap) = self.color_maps.get(base) {
                return Ok(cmap.reversed());
            }
        }
        Err(RenderError::UnknownColormap {
            name: name.to_string(),
            available: self.names(),
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_ok()
    }

    /// Registered names, sorted. Reversed variants are implied, not listed.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.color_maps.keys().cloned().collect();
        names.sort();
        names
    }
}
