//! Colormap definitions loaded from JSON.
//!
//! ```json
//! {
//!   "colormaps": {
//!     "sunset": {
//!       "interpolation": "hsv",
//!       "stops": [
//!         { "value": 0.0, "color": "#1A0033" },
//!         { "value": 1.0, "color": "#FFCC00" }
//!       ]
//!     }
//!   }
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{Color, Colormap, Interpolation};
use crate::error::{RenderError, RenderResult};

/// A file holding any number of named colormaps.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ColormapFile {
    pub colormaps: BTreeMap<String, ColormapDefinition>,
}

/// A single colormap definition
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ColormapDefinition {
    pub description: Option<String>,
    #[serde(default)]
    pub interpolation: Interpolation,
    pub stops: Vec<ColorStop>,
}

/// Color stop for gradient
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ColorStop {
    pub value: f32,
    pub color: String,
}

impl ColormapFile {
    /// Parse colormap definitions from a JSON string
    pub fn from_json(json_str: &str) -> RenderResult<Self> {
        Ok(serde_json::from_str(json_str)?)
    }

    /// Load colormap definitions from file
    pub fn from_file(path: &Path) -> RenderResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| RenderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Build every defined colormap, failing on the first invalid one.
    pub fn build(&self) -> RenderResult<Vec<Colormap>> {
        self.colormaps
            .iter()
            .map(|(name, def)| def.build(name))
            .collect()
    }
}

impl ColormapDefinition {
    /// Build the lookup table for this definition.
    ///
    /// Stop values are rescaled so the lowest stop lands at 0 and the highest
    /// at 1; definitions can use any value range.
    pub fn build(&self, name: &str) -> RenderResult<Colormap> {
        let invalid = |message: String| RenderError::InvalidColormap {
            name: name.to_string(),
            message,
        };

        let mut stops = Vec::with_capacity(self.stops.len());
        for stop in &self.stops {
            let color = Color::from_hex(&stop.color)
                .ok_or_else(|| invalid(format!("bad color '{}'", stop.color)))?;
            stops.push((stop.value, color));
        }

        let (min, max) = stops.iter().fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), s| {
            (lo.min(s.0), hi.max(s.0))
        });
        let range = max - min;
        if range > 0.0 {
            for stop in &mut stops {
                stop.0 = (stop.0 - min) / range;
            }
        }

        Colormap::from_stops(name, &stops, self.interpolation).map_err(invalid)
    }
}
