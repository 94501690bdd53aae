//! Strata command-line front end.
//!
//! Loads `strata.ron` (created with defaults on first run), applies CLI
//! overrides, generates a heightfield and writes grayscale and region images.
//!
//! Run with: `cargo run -p strata-cli -- --seed 42 --octaves 6 --out renders`

mod report;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use strata_config::{CliArgs, Config, ConfigError, default_config_dir};
use strata_noise::{ConfigurationError, generate, paint_grayscale, paint_regions};
use tracing::{error, info, warn};

/// Grayscale output file name.
const HEIGHTMAP_FILE: &str = "heightmap.png";
/// Region color output file name.
const REGIONS_FILE: &str = "regions.png";

/// Errors surfaced by a CLI run.
#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Generation(#[from] ConfigurationError),

    #[error("failed to create output directory {path}: {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let config_dir = args.config.clone().unwrap_or_else(default_config_dir);
    let config = match load_config(&config_dir, &args) {
        Ok(config) => config,
        Err(e) => {
            // Logging is not up yet; fall back to defaults for the level.
            strata_log::init_logging(None, false, None);
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    strata_log::init_logging(None, cfg!(debug_assertions), Some(&config));

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn load_config(config_dir: &Path, args: &CliArgs) -> Result<Config, ConfigError> {
    let mut config = Config::load_or_create(config_dir)?;
    config.apply_cli_overrides(args);
    Ok(config)
}

fn run(config: &Config) -> Result<(), CliError> {
    config.validate()?;
    let params = &config.generation;
    let table = config.terrain.region_table()?;

    info!(
        "Generating {}x{} heightfield: seed={} scale={} octaves={} persistence={} lacunarity={} noise={:?}",
        params.width,
        params.height,
        params.seed,
        params.scale,
        params.octaves,
        params.persistence,
        params.lacunarity,
        params.noise,
    );

    let grid = generate(params)?;
    if grid.is_flat() {
        warn!("Heightfield is flat; every cell normalized to the same height");
    }

    for share in report::region_histogram(&grid, &table)? {
        info!(
            "Region {:>8}: {:>6.2}% ({} cells)",
            share.label,
            share.fraction * 100.0,
            share.cells
        );
    }

    let displacements = config
        .terrain
        .transform
        .displacements(&grid, config.terrain.max_height)?;
    if let Some((lo, hi)) = report::displacement_range(&displacements) {
        info!(
            "Displacement ({:?}): {:.2} .. {:.2}",
            config.terrain.transform, lo, hi
        );
    }

    let out_dir = &config.output.directory;
    if config.output.write_heightmap || config.output.write_regions {
        std::fs::create_dir_all(out_dir).map_err(|source| CliError::OutputDir {
            path: out_dir.clone(),
            source,
        })?;
    }

    if config.output.write_heightmap {
        save_image(&paint_grayscale(&grid), &out_dir.join(HEIGHTMAP_FILE))?;
    }
    if config.output.write_regions {
        save_image(&paint_regions(&grid, &table)?, &out_dir.join(REGIONS_FILE))?;
    }

    Ok(())
}

fn save_image(image: &image::RgbaImage, path: &Path) -> Result<(), CliError> {
    image.save(path).map_err(|source| CliError::Image {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Wrote {}", path.display());
    Ok(())
}
