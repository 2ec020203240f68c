//! Serialisable heightmap output for terrain and placement consumers.

use std::fmt::Write as _;
use std::io::Write;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::HeightmapConfig;
use crate::errors::Result;
use crate::terrain::{HeightmapGenerator, HeightmapStats, NoiseSource};

/// Output encoding for [`HeightmapExport::write_to`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Json,
    Csv,
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => Err(format!("unknown export format: {other}")),
        }
    }
}

/// A generated grid together with the parameters that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeightmapExport {
    pub width: usize,
    pub depth: usize,
    pub frequency: f64,
    pub octaves: u32,
    pub redistribution: f64,
    /// Perlin seed, when the grid came from a seeded source.
    pub seed: Option<u32>,
    pub stats: Option<HeightmapStats>,
    /// Row-major heights, `width * depth` long.
    pub values: Vec<f64>,
}

impl HeightmapExport {
    /// Generates a Perlin heightmap from `config` and exports it.
    pub fn generate(config: &HeightmapConfig) -> Result<Self> {
        let generator = HeightmapGenerator::from_config(config)?;
        Ok(Self::from_generator(&generator).with_seed(config.seed))
    }

    /// Exports a generator's grid, generating it first if needed.
    pub fn from_generator<N: NoiseSource>(generator: &HeightmapGenerator<N>) -> Self {
        let values = generator.values().to_vec();
        Self {
            width: generator.width(),
            depth: generator.depth(),
            frequency: generator.frequency(),
            octaves: generator.octaves(),
            redistribution: generator.redistribution(),
            seed: None,
            stats: HeightmapStats::from_values(&values),
            values,
        }
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// One line per grid row, cells separated by commas.
    pub fn to_csv(&self) -> String {
        let mut out = String::new();
        for row in self.values.chunks(self.width.max(1)) {
            for (i, value) in row.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                let _ = write!(out, "{value}");
            }
            out.push('\n');
        }
        out
    }

    pub fn write_to(&self, format: ExportFormat, mut writer: impl Write) -> Result<()> {
        match format {
            ExportFormat::Json => {
                serde_json::to_writer_pretty(&mut writer, self)?;
                writeln!(writer)?;
            }
            ExportFormat::Csv => writer.write_all(self.to_csv().as_bytes())?,
        }
        writer.flush()?;
        Ok(())
    }
}
