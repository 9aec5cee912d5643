//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use skyline_dem::SyntheticTerrainParams;
use skyline_panorama::{PanoramaUserParameters, UserParameter, predefined};

use crate::error::ConfigError;

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// The view to compute.
    pub panorama: PanoramaConfig,
    /// The synthetic terrain the view is computed over.
    pub terrain: TerrainConfig,
    /// Summits to label.
    pub summits: Vec<SummitConfig>,
    /// Where results go.
    pub output: OutputConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// The view to compute: a named preset, or explicit parameters when no
/// preset is set. The optional dimensions replace the chosen view's.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PanoramaConfig {
    /// One of the predefined view names.
    pub preset: Option<String>,
    /// Explicit view, used when `preset` is `None`.
    pub parameters: PanoramaUserParameters,
    /// Image width in pixels.
    pub width: Option<i32>,
    /// Image height in pixels.
    pub height: Option<i32>,
    /// Maximum sight distance in kilometers.
    pub max_distance: Option<i32>,
}

/// Synthetic terrain configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TerrainConfig {
    /// Seed for deterministic generation.
    pub seed: u32,
    /// Number of noise octaves.
    pub octaves: u32,
    /// Frequency multiplier between octaves.
    pub lacunarity: f64,
    /// Amplitude multiplier between octaves.
    pub persistence: f64,
    /// Frequency of the first octave, in cycles per meter.
    pub base_frequency: f64,
    /// Amplitude of the first octave, in meters.
    pub amplitude: f64,
    /// Elevation the noise is added to, in meters.
    pub base_elevation: f64,
    /// Number of side-by-side tiles the terrain is split into.
    pub tiles: usize,
}

/// A summit to label, in degrees and meters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SummitConfig {
    pub name: String,
    pub longitude: f64,
    pub latitude: f64,
    pub elevation: i32,
}

/// Output configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// File the JSON summary is written to; standard output when unset.
    pub path: Option<PathBuf>,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level filter (e.g., "debug", "info", "skyline_panorama=trace").
    pub log_level: String,
}

impl PanoramaConfig {
    /// Resolves the preset, or the explicit parameters, and applies the
    /// dimension overrides.
    pub fn user_parameters(&self) -> Result<PanoramaUserParameters, ConfigError> {
        let mut parameters = match &self.preset {
            Some(name) => {
                predefined::by_name(name).ok_or_else(|| ConfigError::UnknownPreset(name.clone()))?
            }
            None => self.parameters,
        };
        if let Some(width) = self.width {
            parameters = parameters.with(UserParameter::Width, width);
        }
        if let Some(height) = self.height {
            parameters = parameters.with(UserParameter::Height, height);
        }
        if let Some(max_distance) = self.max_distance {
            parameters = parameters.with(UserParameter::MaxDistance, max_distance);
        }
        Ok(parameters)
    }
}

impl TerrainConfig {
    pub fn synthetic_params(&self) -> SyntheticTerrainParams {
        SyntheticTerrainParams {
            seed: self.seed,
            octaves: self.octaves,
            lacunarity: self.lacunarity,
            persistence: self.persistence,
            base_frequency: self.base_frequency,
            amplitude: self.amplitude,
            base_elevation: self.base_elevation,
        }
    }
}

// --- Default implementations ---

impl Default for Config {
    fn default() -> Self {
        Self {
            panorama: PanoramaConfig::default(),
            terrain: TerrainConfig::default(),
            summits: default_summits(),
            output: OutputConfig::default(),
            debug: DebugConfig::default(),
        }
    }
}

/// Summits of the Bernese Oberland, seen from the default view.
fn default_summits() -> Vec<SummitConfig> {
    [
        ("EIGER", 8.0053, 46.5775, 3970),
        ("MOENCH", 7.9975, 46.5586, 4107),
        ("JUNGFRAU", 7.9625, 46.5367, 4158),
        ("SCHRECKHORN", 8.1183, 46.5894, 4078),
        ("FINSTERAARHORN", 8.1261, 46.5372, 4274),
        ("BLUEMLISALP", 7.7706, 46.4972, 3661),
        ("DOLDENHORN", 7.7356, 46.4706, 3638),
        ("WILDSTRUBEL", 7.5303, 46.4008, 3244),
    ]
    .into_iter()
    .map(|(name, longitude, latitude, elevation)| SummitConfig {
        name: name.to_string(),
        longitude,
        latitude,
        elevation,
    })
    .collect()
}

impl Default for PanoramaConfig {
    fn default() -> Self {
        Self {
            preset: Some("niesen".to_string()),
            parameters: predefined::niesen(),
            width: None,
            height: None,
            max_distance: None,
        }
    }
}

impl Default for TerrainConfig {
    fn default() -> Self {
        let params = SyntheticTerrainParams::default();
        Self {
            seed: params.seed,
            octaves: params.octaves,
            lacunarity: params.lacunarity,
            persistence: params.persistence,
            base_frequency: params.base_frequency,
            amplitude: params.amplitude,
            base_elevation: params.base_elevation,
            tiles: 2,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Default location of `config.ron`: the platform config directory joined
/// with `skyline`, or the working directory when the platform has none.
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join("skyline"))
        .unwrap_or_else(|| PathBuf::from("."))
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join("config.ron");

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join("config.ron");
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let config_path = config_dir.join("config.ron");
        let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
        let new_config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }
}
