//! Generates a heightmap and writes it as JSON or CSV.
//!
//! Run with:
//! ```
//! HEIGHTMAP_PRESET=mountains HEIGHTMAP_FORMAT=csv cargo run -p worldgen --bin heightmap
//! ```
//!
//! Environment:
//! - `HEIGHTMAP_CONFIG`: path to a JSON config (defaults otherwise)
//! - `HEIGHTMAP_PRESET`: `rolling_hills`, `mountains` or `plains`
//! - `HEIGHTMAP_SEED`: integer seed, or `random`
//! - `HEIGHTMAP_FORMAT`: `json` (default) or `csv`
//! - `HEIGHTMAP_OUTPUT`: output file (stdout when unset)

use std::fs::File;
use std::io::{self, BufWriter};

use anyhow::{Context, anyhow};
use tracing_subscriber::EnvFilter;
use worldgen::config::HeightmapConfig;
use worldgen::export::{ExportFormat, HeightmapExport};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut config = match std::env::var("HEIGHTMAP_CONFIG") {
        Ok(path) => HeightmapConfig::load(&path)
            .with_context(|| format!("failed to load config from {path}"))?,
        Err(_) => HeightmapConfig::default(),
    };

    if let Ok(name) = std::env::var("HEIGHTMAP_PRESET") {
        let preset = HeightmapConfig::preset(&name).ok_or_else(|| {
            anyhow!(
                "unknown preset {name} (expected one of {})",
                HeightmapConfig::PRESETS.join(", ")
            )
        })?;
        config = HeightmapConfig {
            width: config.width,
            depth: config.depth,
            seed: config.seed,
            ..preset
        };
    }

    if let Ok(seed) = std::env::var("HEIGHTMAP_SEED") {
        config.seed = if seed == "random" {
            let seed = rand::random::<u32>();
            tracing::info!("Using random seed {}", seed);
            seed
        } else {
            seed.parse::<u32>()
                .with_context(|| format!("invalid HEIGHTMAP_SEED: {seed}"))?
        };
    }

    let format: ExportFormat = match std::env::var("HEIGHTMAP_FORMAT") {
        Ok(f) => f.parse().map_err(|e: String| anyhow!(e))?,
        Err(_) => ExportFormat::default(),
    };

    tracing::info!(
        "Generating {}x{} heightmap (frequency {}, {} octaves, redistribution {}, seed {})",
        config.width,
        config.depth,
        config.frequency,
        config.octaves,
        config.redistribution,
        config.seed
    );

    let export = HeightmapExport::generate(&config)?;

    if let Some(stats) = export.stats {
        tracing::info!(
            "Heights: min {:.4}, max {:.4}, mean {:.4}",
            stats.min,
            stats.max,
            stats.mean
        );
    }

    match std::env::var("HEIGHTMAP_OUTPUT") {
        Ok(path) => {
            let file = File::create(&path).with_context(|| format!("failed to create {path}"))?;
            export.write_to(format, BufWriter::new(file))?;
            tracing::info!("Wrote heightmap to {}", path);
        }
        Err(_) => export.write_to(format, io::stdout().lock())?,
    }

    Ok(())
}
