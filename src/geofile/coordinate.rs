use serde::{Deserialize, Serialize};

/// WGS84 position in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Read a GeoJSON position, which is ordered `[longitude, latitude, (elevation)]`.
    pub fn from_position(position: &[f64]) -> Option<Self> {
        match position {
            [longitude, latitude, ..] => Some(Self::new(*latitude, *longitude)),
            _ => None,
        }
    }

    /// Coordinate of a Point geometry, `None` for every other geometry.
    pub fn from_point_geometry(geometry: &geojson::Geometry) -> Option<Self> {
        match &geometry.value {
            geojson::Value::Point(position) => Self::from_position(position),
            _ => None,
        }
    }
}
