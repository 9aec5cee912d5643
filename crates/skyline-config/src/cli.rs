//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Compute the terrain panorama seen from an observer.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "skyline", about = "Terrain panorama computation")]
pub struct CliArgs {
    /// Predefined view (niesen, alpes_du_jura, mont_racine, finsteraarhorn,
    /// tour_de_sauvabelin, plage_du_pelican).
    #[arg(long)]
    pub preset: Option<String>,

    /// Image width in pixels.
    #[arg(long)]
    pub width: Option<i32>,

    /// Image height in pixels.
    #[arg(long)]
    pub height: Option<i32>,

    /// Maximum sight distance in kilometers.
    #[arg(long)]
    pub max_distance: Option<i32>,

    /// Terrain generation seed.
    #[arg(long)]
    pub seed: Option<u32>,

    /// File to write the JSON summary to.
    #[arg(long)]
    pub output: Option<PathBuf>,

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
        if let Some(ref preset) = args.preset {
            self.panorama.preset = Some(preset.clone());
        }
        if let Some(w) = args.width {
            self.panorama.width = Some(w);
        }
        if let Some(h) = args.height {
            self.panorama.height = Some(h);
        }
        if let Some(d) = args.max_distance {
            self.panorama.max_distance = Some(d);
        }
        if let Some(seed) = args.seed {
            self.terrain.seed = seed;
        }
        if let Some(ref path) = args.output {
            self.output.path = Some(path.clone());
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
            preset: Some("mont_racine".to_string()),
            width: Some(600),
            seed: Some(9),
            ..CliArgs::default()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.panorama.preset.as_deref(), Some("mont_racine"));
        assert_eq!(config.panorama.width, Some(600));
        assert_eq!(config.terrain.seed, 9);
        // Non-overridden fields retain defaults
        assert_eq!(config.panorama.height, None);
        assert_eq!(config.debug.log_level, "info");
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs::default());
        assert_eq!(config, original);
    }

    #[test]
    fn test_parse_arguments() {
        let args = CliArgs::parse_from([
            "skyline",
            "--preset",
            "niesen",
            "--max-distance",
            "80",
            "--output",
            "summary.json",
            "--log-level",
            "debug",
        ]);
        assert_eq!(args.preset.as_deref(), Some("niesen"));
        assert_eq!(args.max_distance, Some(80));
        assert_eq!(args.output, Some(PathBuf::from("summary.json")));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert_eq!(args.width, None);
    }
}
