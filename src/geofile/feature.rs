use std::fmt;

use serde::{Deserialize, Serialize};

/// Geometry kind of a feature as seen by the map engine's `$type` filter key.
/// Multi-geometries report their base kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GeometryType {
    Point,
    LineString,
    Polygon,
}

impl GeometryType {
    pub fn name(&self) -> &'static str {
        match self {
            GeometryType::Point => "Point",
            GeometryType::LineString => "LineString",
            GeometryType::Polygon => "Polygon",
        }
    }

    /// Returns `None` for features without geometry and for geometry collections.
    pub fn of(feature: &geojson::Feature) -> Option<Self> {
        use geojson::Value::*;
        match &feature.geometry.as_ref()?.value {
            Point(_) | MultiPoint(_) => Some(GeometryType::Point),
            LineString(_) | MultiLineString(_) => Some(GeometryType::LineString),
            Polygon(_) | MultiPolygon(_) => Some(GeometryType::Polygon),
            GeometryCollection(_) => None,
        }
    }
}

impl fmt::Display for GeometryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// String value of a property, `None` if it is missing or not a string.
pub fn string_property<'a>(feature: &'a geojson::Feature, key: &str) -> Option<&'a str> {
    feature.property(key).and_then(|value| value.as_str())
}

/// Feature identifier rendered as a string. Numeric ids use their JSON representation.
pub fn feature_id(feature: &geojson::Feature) -> Option<String> {
    match feature.id.as_ref()? {
        geojson::feature::Id::String(id) => Some(id.clone()),
        geojson::feature::Id::Number(id) => Some(id.to_string()),
    }
}
