//! JSON summary of a computed panorama.

use std::io::Write;
use std::path::Path;

use serde::Serialize;
use skyline_geo::azimuth;
use skyline_math::SkylineError;
use skyline_panorama::{Panorama, UserParameterValues};
use skyline_summit::VisibleSummit;

use crate::error::AppError;

#[derive(Debug, Serialize)]
pub struct Summary {
    pub parameters: UserParameterValues,
    pub width: i32,
    pub height: i32,
    /// Pixels whose ray met the terrain.
    pub hits: usize,
    pub hit_ratio: f64,
    /// Slant distance in meters of the nearest terrain hit.
    pub nearest_hit: Option<f64>,
    /// Slant distance in meters of the farthest terrain hit.
    pub farthest_hit: Option<f64>,
    pub summits: Vec<SummitSummary>,
}

#[derive(Debug, Serialize)]
pub struct SummitSummary {
    pub name: String,
    pub elevation: i32,
    pub x: i32,
    pub y: i32,
    /// Compass octant of the summit as seen from the observer.
    pub direction: String,
    /// Distance in meters from the observer.
    pub distance: f64,
}

impl Summary {
    pub fn new(
        parameters: UserParameterValues,
        panorama: &Panorama,
        visible: &[VisibleSummit],
    ) -> Result<Self, SkylineError> {
        let view = panorama.parameters();
        let observer = view.observer_position();

        let mut hits = 0usize;
        let mut nearest: Option<f64> = None;
        let mut farthest: Option<f64> = None;
        for y in 0..view.height() {
            for x in 0..view.width() {
                let d = f64::from(panorama.distance_at(x, y)?);
                if d.is_finite() {
                    hits += 1;
                    nearest = Some(nearest.map_or(d, |n| n.min(d)));
                    farthest = Some(farthest.map_or(d, |f| f.max(d)));
                }
            }
        }
        let pixels = view.width() as usize * view.height() as usize;

        let summits = visible
            .iter()
            .map(|v| {
                let position = v.summit.position();
                Ok(SummitSummary {
                    name: v.summit.name().to_string(),
                    elevation: v.summit.elevation(),
                    x: v.x,
                    y: v.y,
                    direction: azimuth::to_octant_string(observer.azimuth_to(&position), "N", "E", "S", "W")?,
                    distance: observer.distance_to(&position),
                })
            })
            .collect::<Result<Vec<_>, SkylineError>>()?;

        Ok(Self {
            parameters,
            width: view.width(),
            height: view.height(),
            hits,
            hit_ratio: hits as f64 / pixels as f64,
            nearest_hit: nearest,
            farthest_hit: farthest,
            summits,
        })
    }

    /// Writes the summary as pretty JSON to `path`, or to standard output.
    pub fn write(&self, path: Option<&Path>) -> Result<(), AppError> {
        match path {
            Some(path) => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    std::fs::create_dir_all(parent)?;
                }
                let mut writer = std::io::BufWriter::new(std::fs::File::create(path)?);
                serde_json::to_writer_pretty(&mut writer, self)?;
                writer.flush()?;
                tracing::info!(path = %path.display(), "summary written");
            }
            None => {
                let stdout = std::io::stdout();
                let mut lock = stdout.lock();
                serde_json::to_writer_pretty(&mut lock, self)?;
                writeln!(lock)?;
            }
        }
        Ok(())
    }
}
