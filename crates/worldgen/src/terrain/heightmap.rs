//! Layered-noise heightmap generation.

use std::sync::OnceLock;
use std::time::Instant;

use super::source::{NoiseSource, PerlinNoise};
use super::stats::HeightmapStats;
use crate::config::HeightmapConfig;
use crate::errors::{Result, validate_params};

/// Octave count used by [`HeightmapGenerator::new`].
pub const DEFAULT_OCTAVES: u32 = 3;

/// Redistribution exponent used by [`HeightmapGenerator::new`] (no reshaping).
pub const DEFAULT_REDISTRIBUTION: f64 = 1.0;

/// Deterministic heightmap built from several octaves of 2D noise.
///
/// The grid is computed lazily on first access and cached; once generated
/// it never changes. Values are stored row-major, so cell `(x, y)` lives at
/// index `y * width + x`.
///
/// Each cell sums, for octave `O` in `1..=octaves`, the term
/// `1/O + noise(vx * 2^(O-1) + 0.81^O + 0.69/O, vy * 2^(O-1) + 0.5^O + 0.70/O)`,
/// divides by `sum(1/O)` and raises the result to `redistribution`.
/// The amplitude is added to each sample, not multiplied with it.
#[derive(Debug, Clone)]
pub struct HeightmapGenerator<N = PerlinNoise> {
    width: usize,
    depth: usize,
    frequency: f64,
    octaves: u32,
    redistribution: f64,
    noise: N,
    data: OnceLock<Vec<f64>>,
}

impl HeightmapGenerator<PerlinNoise> {
    /// Creates a generator with three octaves and no redistribution.
    pub fn new(width: usize, depth: usize, frequency: f64) -> Result<Self> {
        Self::with_params(
            width,
            depth,
            frequency,
            DEFAULT_OCTAVES,
            DEFAULT_REDISTRIBUTION,
        )
    }

    pub fn with_params(
        width: usize,
        depth: usize,
        frequency: f64,
        octaves: u32,
        redistribution: f64,
    ) -> Result<Self> {
        Self::with_noise(
            width,
            depth,
            frequency,
            octaves,
            redistribution,
            PerlinNoise::default(),
        )
    }

    /// Builds a Perlin-backed generator seeded from `config.seed`.
    pub fn from_config(config: &HeightmapConfig) -> Result<Self> {
        Self::with_noise(
            config.width,
            config.depth,
            config.frequency,
            config.octaves,
            config.redistribution,
            PerlinNoise::new(config.seed),
        )
    }
}

impl<N: NoiseSource> HeightmapGenerator<N> {
    /// Creates a generator sampling from an arbitrary noise source.
    pub fn with_noise(
        width: usize,
        depth: usize,
        frequency: f64,
        octaves: u32,
        redistribution: f64,
        noise: N,
    ) -> Result<Self> {
        validate_params(width, depth, frequency, octaves, redistribution)?;

        Ok(Self {
            width,
            depth,
            frequency,
            octaves,
            redistribution,
            noise,
            data: OnceLock::new(),
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    pub fn octaves(&self) -> u32 {
        self.octaves
    }

    pub fn redistribution(&self) -> f64 {
        self.redistribution
    }

    pub fn noise(&self) -> &N {
        &self.noise
    }

    /// Whether the grid has been computed yet.
    pub fn is_generated(&self) -> bool {
        self.data.get().is_some()
    }

    /// Computes the grid if needed and returns it. Calling this again is a no-op.
    pub fn generate(&self) -> &[f64] {
        self.data.get_or_init(|| self.compute())
    }

    /// The full grid, row-major, `width * depth` long.
    pub fn values(&self) -> &[f64] {
        self.generate()
    }

    /// Height at cell `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= depth`. Use [`get`](Self::get) when an
    /// out-of-range coordinate is expected.
    pub fn value(&self, x: usize, y: usize) -> f64 {
        assert!(
            x < self.width && y < self.depth,
            "heightmap cell ({x}, {y}) is out of range for a {}x{} grid",
            self.width,
            self.depth
        );
        self.values()[y * self.width + x]
    }

    /// Height at cell `(x, y)`, or `None` outside the grid.
    pub fn get(&self, x: usize, y: usize) -> Option<f64> {
        if x < self.width && y < self.depth {
            Some(self.values()[y * self.width + x])
        } else {
            None
        }
    }

    /// Iterates over the grid one row (fixed `y`) at a time.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.values().chunks(self.width)
    }

    pub fn stats(&self) -> Option<HeightmapStats> {
        HeightmapStats::from_values(self.values())
    }

    /// Consumes the generator and hands over the grid.
    pub fn into_values(self) -> Vec<f64> {
        self.generate();
        self.data.into_inner().unwrap_or_default()
    }

    fn compute(&self) -> Vec<f64> {
        let started = Instant::now();
        let mut data = Vec::with_capacity(self.width * self.depth);

        for y in 0..self.depth {
            for x in 0..self.width {
                data.push(self.cell(x, y));
            }
        }

        tracing::debug!(
            width = self.width,
            depth = self.depth,
            octaves = self.octaves,
            elapsed_us = started.elapsed().as_micros() as u64,
            "Generated heightmap"
        );

        data
    }

    fn cell(&self, x: usize, y: usize) -> f64 {
        let vx = self.frequency * (x as f64 / self.width as f64 - 0.5);
        let vy = self.frequency * (y as f64 / self.depth as f64 - 0.5);

        let mut noise = 0.0;
        let mut amplitude_sum = 0.0;

        for octave in 1..=self.octaves {
            let o = f64::from(octave);
            let amplitude = 1.0 / o;
            let modifier = 2f64.powf(o - 1.0);

            // Offsets keep the X and Y samples of each octave independent.
            let offset_x = 0.81f64.powf(o) + 0.69 / o;
            let offset_y = 0.5f64.powf(o) + 0.70 / o;

            noise += amplitude
                + self
                    .noise
                    .sample(vx * modifier + offset_x, vy * modifier + offset_y);
            amplitude_sum += amplitude;
        }

        redistribute(noise / amplitude_sum, self.redistribution)
    }
}

/// Raises `value` to `exponent`, keeping the sign of negative values.
///
/// `powf` on a negative base with a fractional exponent yields NaN, so the
/// magnitude is raised and the sign reapplied. An exponent of exactly 1
/// returns `value` unchanged.
pub fn redistribute(value: f64, exponent: f64) -> f64 {
    if exponent == 1.0 {
        value
    } else if value < 0.0 {
        -(-value).powf(exponent)
    } else {
        value.powf(exponent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terrain::source::ConstantNoise;
    use std::cell::RefCell;

    #[test]
    fn test_constant_noise_adds_amplitude() {
        let map = HeightmapGenerator::with_noise(2, 2, 1.0, 1, 1.0, ConstantNoise(0.5)).unwrap();
        assert!(map.values().iter().all(|&v| v == 1.5));
    }

    #[test]
    fn test_lazy_generation() {
        let map = HeightmapGenerator::new(4, 3, 2.0).unwrap();
        assert!(!map.is_generated());
        assert_eq!(map.width(), 4);
        assert_eq!(map.depth(), 3);
        assert!(!map.is_generated(), "accessors must not trigger generation");

        let _ = map.value(0, 0);
        assert!(map.is_generated());
    }

    #[test]
    fn test_generate_runs_once() {
        let calls = RefCell::new(0usize);
        let source = |_x: f64, _y: f64| {
            *calls.borrow_mut() += 1;
            0.0
        };
        let map = HeightmapGenerator::with_noise(3, 2, 1.0, 2, 1.0, source).unwrap();

        map.generate();
        map.generate();
        let _ = map.values();
        let _ = map.value(2, 1);

        assert_eq!(*calls.borrow(), 3 * 2 * 2);
        assert_eq!(map.values().len(), 6);
    }

    #[test]
    fn test_sample_points() {
        let points = RefCell::new(Vec::new());
        let source = |x: f64, y: f64| {
            points.borrow_mut().push((x, y));
            0.0
        };
        let map = HeightmapGenerator::with_noise(2, 1, 4.0, 2, 1.0, source).unwrap();
        map.generate();

        let points = points.borrow();
        assert_eq!(points.len(), 4);

        // Cell (0, 0): vx = vy = 4 * -0.5 = -2.
        let (x1, y1) = points[0];
        assert!((x1 - (-2.0 + 0.81 + 0.69)).abs() < 1e-12);
        assert!((y1 - (-2.0 + 0.5 + 0.70)).abs() < 1e-12);

        // Second octave doubles the coordinates.
        let (x2, y2) = points[1];
        assert!((x2 - (-4.0 + 0.81 * 0.81 + 0.345)).abs() < 1e-12);
        assert!((y2 - (-4.0 + 0.25 + 0.35)).abs() < 1e-12);

        // Cell (1, 0): x / width uses real division, vx = 4 * (0.5 - 0.5) = 0.
        let (x3, _) = points[2];
        assert!((x3 - (0.81 + 0.69)).abs() < 1e-12);
    }

    #[test]
    fn test_get_out_of_range() {
        let map = HeightmapGenerator::with_noise(3, 2, 1.0, 1, 1.0, ConstantNoise(0.0)).unwrap();
        assert_eq!(map.get(2, 1), Some(1.0));
        assert_eq!(map.get(3, 0), None);
        assert_eq!(map.get(0, 2), None);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_value_out_of_range_panics() {
        let map = HeightmapGenerator::new(3, 2, 1.0).unwrap();
        map.value(3, 0);
    }

    #[test]
    fn test_rows() {
        let source = |x: f64, _y: f64| x;
        let map = HeightmapGenerator::with_noise(3, 2, 1.0, 1, 1.0, source).unwrap();
        let rows: Vec<&[f64]> = map.rows().collect();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|row| row.len() == 3));
        assert_eq!(rows[1], &map.values()[3..6]);
    }

    #[test]
    fn test_into_values() {
        let map = HeightmapGenerator::with_noise(2, 2, 1.0, 1, 1.0, ConstantNoise(0.5)).unwrap();
        assert_eq!(map.into_values(), vec![1.5; 4]);
    }

    #[test]
    fn test_redistribute() {
        assert_eq!(redistribute(0.37, 1.0), 0.37);
        assert_eq!(redistribute(-0.37, 1.0), -0.37);
        assert!((redistribute(0.5, 2.0) - 0.25).abs() < 1e-12);
        assert!((redistribute(-0.25, 0.5) - -0.5).abs() < 1e-12);
        assert!(!redistribute(-0.3, 1.7).is_nan());
    }

    #[test]
    fn test_from_config_uses_seed() {
        let config = HeightmapConfig {
            seed: 99,
            ..HeightmapConfig::default()
        };
        let map = HeightmapGenerator::from_config(&config).unwrap();
        assert_eq!(map.noise().seed(), 99);
        assert_eq!(map.values().len(), config.width * config.depth);
    }

    #[test]
    fn test_rejects_invalid_construction() {
        assert!(HeightmapGenerator::new(0, 4, 1.0).is_err());
        assert!(HeightmapGenerator::new(4, 0, 1.0).is_err());
        assert!(HeightmapGenerator::with_params(4, 4, 1.0, 0, 1.0).is_err());
    }
}
