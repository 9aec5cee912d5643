//! Named views over the western Swiss Alps and the Jura.

use crate::{PanoramaUserParameters, UserParameterValues};

/// Names accepted by [`by_name`], in display order.
pub const NAMES: [&str; 6] = [
    "niesen",
    "alpes_du_jura",
    "mont_racine",
    "finsteraarhorn",
    "tour_de_sauvabelin",
    "plage_du_pelican",
];

fn view(longitude: i32, latitude: i32, elevation: i32, azimuth: i32, field_of_view: i32) -> PanoramaUserParameters {
    PanoramaUserParameters::new(UserParameterValues {
        observer_longitude: longitude,
        observer_latitude: latitude,
        observer_elevation: elevation,
        center_azimuth: azimuth,
        horizontal_field_of_view: field_of_view,
        max_distance: 300,
        width: 2500,
        height: 800,
        super_sampling_exponent: 0,
    })
}

pub fn niesen() -> PanoramaUserParameters {
    view(76_500, 467_300, 600, 180, 110)
}

pub fn alpes_du_jura() -> PanoramaUserParameters {
    view(68_087, 470_085, 1380, 162, 27)
}

pub fn mont_racine() -> PanoramaUserParameters {
    view(68_200, 470_200, 1500, 135, 45)
}

pub fn finsteraarhorn() -> PanoramaUserParameters {
    view(81_260, 465_374, 4300, 205, 20)
}

pub fn tour_de_sauvabelin() -> PanoramaUserParameters {
    view(66_385, 465_353, 700, 135, 100)
}

pub fn plage_du_pelican() -> PanoramaUserParameters {
    view(65_728, 465_132, 380, 135, 60)
}

/// Looks up a view by one of [`NAMES`], ignoring ASCII case.
pub fn by_name(name: &str) -> Option<PanoramaUserParameters> {
    let parameters = match name.to_ascii_lowercase().as_str() {
        "niesen" => niesen(),
        "alpes_du_jura" => alpes_du_jura(),
        "mont_racine" => mont_racine(),
        "finsteraarhorn" => finsteraarhorn(),
        "tour_de_sauvabelin" => tour_de_sauvabelin(),
        "plage_du_pelican" => plage_du_pelican(),
        _ => return None,
    };
    Some(parameters)
}
