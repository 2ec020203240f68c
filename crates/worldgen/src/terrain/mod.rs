//! Terrain generation.
//!
//! [`HeightmapGenerator`] layers octaves of noise from a [`NoiseSource`]
//! into a row-major height grid. [`PerlinNoise`] is the production source;
//! tests substitute [`ConstantNoise`] or a closure.

mod heightmap;
mod source;
mod stats;

pub use heightmap::{DEFAULT_OCTAVES, DEFAULT_REDISTRIBUTION, HeightmapGenerator, redistribute};
pub use source::{ConstantNoise, NoiseSource, PerlinNoise};
pub use stats::HeightmapStats;
