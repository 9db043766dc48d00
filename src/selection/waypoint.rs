use crate::geofile::coordinate::Coordinate;

/// View-model of a selected point feature.
#[derive(Debug, Clone, PartialEq)]
pub struct Waypoint {
    pub id: String,
    pub name: String,
    pub coordinate: Coordinate,
    /// Radio frequency as published, e.g. "118.300".
    pub frequency: Option<String>,
    /// Elevation in feet.
    pub elevation: Option<i32>,
}

impl Waypoint {
    pub fn new(id: impl Into<String>, name: impl Into<String>, coordinate: Coordinate) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            coordinate,
            frequency: None,
            elevation: None,
        }
    }
}
