//! Command-line argument parsing for Strata.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Strata command-line arguments.
///
/// CLI values override settings loaded from `strata.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "strata", about = "Seeded fractal heightfield generator")]
pub struct CliArgs {
    /// Seed for the random stream.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Grid width in cells.
    #[arg(long)]
    pub width: Option<u32>,

    /// Grid height in cells.
    #[arg(long)]
    pub height: Option<u32>,

    /// Zoom factor into the noise.
    #[arg(long)]
    pub scale: Option<f64>,

    /// Number of noise octaves.
    #[arg(long)]
    pub octaves: Option<u32>,

    /// Amplitude multiplier between octaves.
    #[arg(long)]
    pub persistence: Option<f64>,

    /// Frequency multiplier between octaves.
    #[arg(long)]
    pub lacunarity: Option<f64>,

    /// Horizontal scroll through the noise.
    #[arg(long, allow_hyphen_values = true)]
    pub offset_x: Option<f64>,

    /// Vertical scroll through the noise.
    #[arg(long, allow_hyphen_values = true)]
    pub offset_y: Option<f64>,

    /// Output directory for generated images.
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        let generation = &mut self.generation;
        if let Some(seed) = args.seed {
            generation.seed = seed;
        }
        if let Some(w) = args.width {
            generation.width = w;
        }
        if let Some(h) = args.height {
            generation.height = h;
        }
        if let Some(scale) = args.scale {
            generation.scale = scale;
        }
        if let Some(octaves) = args.octaves {
            generation.octaves = octaves;
        }
        if let Some(p) = args.persistence {
            generation.persistence = p;
        }
        if let Some(l) = args.lacunarity {
            generation.lacunarity = l;
        }
        if let Some(x) = args.offset_x {
            generation.offset_x = x;
        }
        if let Some(y) = args.offset_y {
            generation.offset_y = y;
        }
        if let Some(ref dir) = args.out {
            self.output.directory = dir.clone();
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            seed: Some(42),
            width: Some(1024),
            octaves: Some(6),
            out: Some(PathBuf::from("/tmp/strata")),
            ..Default::default()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.generation.seed, 42);
        assert_eq!(config.generation.width, 1024);
        assert_eq!(config.generation.octaves, 6);
        assert_eq!(config.output.directory, PathBuf::from("/tmp/strata"));
        // Non-overridden fields retain defaults
        assert_eq!(config.generation.height, 512);
        assert_eq!(config.generation.scale, 10.0);
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs::default());
        assert_eq!(config, original);
    }

    #[test]
    fn test_parse_flags() {
        let args = CliArgs::try_parse_from([
            "strata",
            "--seed",
            "7",
            "--scale",
            "25.5",
            "--offset-x",
            "-3",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(args.seed, Some(7));
        assert_eq!(args.scale, Some(25.5));
        assert_eq!(args.offset_x, Some(-3.0));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert!(args.width.is_none());
    }

    #[test]
    fn test_parse_rejects_non_numeric_seed() {
        assert!(CliArgs::try_parse_from(["strata", "--seed", "abc"]).is_err());
    }
}
