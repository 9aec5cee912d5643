use std::fmt;

use skyline_geo::GeoPoint;

/// A named summit.
#[derive(Clone, Debug, PartialEq)]
pub struct Summit {
    name: String,
    position: GeoPoint,
    /// Meters.
    elevation: i32,
}

impl Summit {
    pub fn new(name: impl Into<String>, position: GeoPoint, elevation: i32) -> Self {
        Self {
            name: name.into(),
            position,
            elevation,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> GeoPoint {
        self.position
    }

    pub fn elevation(&self) -> i32 {
        self.elevation
    }
}

impl fmt::Display for Summit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.name, self.position, self.elevation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let position = GeoPoint::from_degrees(8.12611, 46.53722).unwrap();
        let summit = Summit::new("FINSTERAARHORN", position, 4274);
        assert_eq!(summit.to_string(), "FINSTERAARHORN (8.1261,46.5372) 4274");
        assert_eq!(summit.name(), "FINSTERAARHORN");
        assert_eq!(summit.elevation(), 4274);
        assert_eq!(summit.position(), position);
    }
}
