//! Computes the panorama seen from an observer over synthetic terrain and
//! prints a JSON summary of it.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI flags.
//! Run with `cargo run -p skyline-app -- --preset finsteraarhorn --width 600`.

mod error;
mod summary;
mod terrain;

use std::process::ExitCode;

use clap::Parser;
use skyline_config::{CliArgs, Config, default_config_dir};
use skyline_dem::ContinuousElevationModel;
use skyline_panorama::PanoramaComputer;
use skyline_summit::visible_summits;
use tracing::info;

use crate::error::AppError;
use crate::summary::Summary;

fn run(config: &Config) -> Result<(), AppError> {
    let user = config.panorama.user_parameters()?;
    let parameters = user.panorama_parameters()?;
    info!(
        observer = %parameters.observer_position(),
        width = parameters.width(),
        height = parameters.height(),
        "computing panorama"
    );

    let model = ContinuousElevationModel::new(terrain::build(&config.terrain, &parameters)?);
    let panorama = PanoramaComputer::new(&model).compute_panorama(&parameters)?;

    let summits = terrain::summits(&config.summits)?;
    let visible = visible_summits(&model, &parameters, &summits)?;
    for v in &visible {
        info!(summit = %v.summit, x = v.x, y = v.y, "visible summit");
    }

    let summary = Summary::new(user.values(), &panorama, &visible)?;
    summary.write(config.output.path.as_deref())
}

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let config_dir = args.config.clone().unwrap_or_else(default_config_dir);
    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    skyline_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "skyline failed");
            ExitCode::FAILURE
        }
    }
}
