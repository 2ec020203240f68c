//! Summary statistics over a generated heightmap.

use serde::{Deserialize, Serialize};

/// Observed range and mean of a heightmap grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeightmapStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

impl HeightmapStats {
    /// Computes stats over `values`. Returns `None` for an empty slice.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;
        for &v in values {
            min = min.min(v);
            max = max.max(v);
            sum += v;
        }

        Some(Self {
            min,
            max,
            mean: sum / values.len() as f64,
        })
    }

    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// Rescales `value` into `[0, 1]` relative to the observed range.
    ///
    /// A flat map (zero range) maps everything to `0.0`.
    pub fn normalized(&self, value: f64) -> f64 {
        let range = self.range();
        if range <= 0.0 {
            return 0.0;
        }
        ((value - self.min) / range).clamp(0.0, 1.0)
    }
}
