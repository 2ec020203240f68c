//! Configuration types for heightmap generation.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, validate_params};

/// Parameters for a Perlin-backed heightmap.
///
/// Missing fields in a JSON document fall back to [`Default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeightmapConfig {
    /// Number of columns.
    pub width: usize,

    /// Number of rows.
    pub depth: usize,

    /// Base spatial frequency applied to normalized grid coordinates.
    pub frequency: f64,

    /// Number of noise layers summed per cell.
    pub octaves: u32,

    /// Exponent applied to the normalized height. Above 1 sharpens peaks.
    pub redistribution: f64,

    /// Perlin permutation seed.
    pub seed: u32,
}

impl Default for HeightmapConfig {
    fn default() -> Self {
        Self {
            width: 64,
            depth: 64,
            frequency: 4.0,
            octaves: 3,
            redistribution: 1.0,
            seed: 0,
        }
    }
}

impl HeightmapConfig {
    /// Names accepted by [`HeightmapConfig::preset`].
    pub const PRESETS: [&'static str; 3] = ["rolling_hills", "mountains", "plains"];

    /// Gentle, evenly distributed terrain.
    pub fn rolling_hills() -> Self {
        Self {
            frequency: 3.0,
            octaves: 3,
            redistribution: 1.0,
            ..Self::default()
        }
    }

    /// High-detail terrain with sharpened peaks and flattened valleys.
    pub fn mountains() -> Self {
        Self {
            frequency: 6.0,
            octaves: 6,
            redistribution: 2.5,
            ..Self::default()
        }
    }

    /// Low-frequency terrain with little detail.
    pub fn plains() -> Self {
        Self {
            frequency: 1.5,
            octaves: 2,
            redistribution: 0.8,
            ..Self::default()
        }
    }

    /// Looks up a preset by name.
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "rolling_hills" => Some(Self::rolling_hills()),
            "mountains" => Some(Self::mountains()),
            "plains" => Some(Self::plains()),
            _ => None,
        }
    }

    pub fn with_size(mut self, width: usize, depth: usize) -> Self {
        self.width = width;
        self.depth = depth;
        self
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Parses and validates a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Applies the same checks as the generator constructors.
    pub fn validate(&self) -> Result<()> {
        validate_params(
            self.width,
            self.depth,
            self.frequency,
            self.octaves,
            self.redistribution,
        )
    }
}
