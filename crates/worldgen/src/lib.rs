//! Procedural terrain heightmaps for Rise.
//!
//! A [`HeightmapGenerator`](terrain::HeightmapGenerator) sums several octaves
//! of 2D noise per grid cell, normalizes by the total amplitude and reshapes
//! the result with a redistribution exponent. Grids are generated lazily and
//! cached, and the same parameters always produce the same grid.
//!
//! # Quick Start
//!
//! ```rust
//! use worldgen::prelude::*;
//!
//! let map = HeightmapGenerator::new(32, 32, 4.0)?;
//! assert_eq!(map.values().len(), 32 * 32);
//! let corner = map.value(31, 31);
//! assert_eq!(corner, map.values()[32 * 32 - 1]);
//! # Ok::<(), worldgen::errors::WorldGenError>(())
//! ```

pub mod config;
pub mod errors;
pub mod export;
pub mod terrain;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::HeightmapConfig;
    pub use crate::errors::{Result, WorldGenError};
    pub use crate::export::{ExportFormat, HeightmapExport};
    pub use crate::terrain::{
        ConstantNoise, HeightmapGenerator, HeightmapStats, NoiseSource, PerlinNoise,
    };
}
