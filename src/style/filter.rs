use serde::{Serialize, Serializer};
use serde_json::json;

use crate::geofile::feature::{string_property, GeometryType};

/// What a filter compares against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterKey {
    /// The implicit `$type` key, i.e. the geometry kind of the feature.
    GeometryType,
    /// A named feature property.
    Property(String),
}

/// Equality test over a single key, the only filter shape the layers here need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pub key: FilterKey,
    pub value: String,
}

impl Filter {
    pub fn geometry_type(geometry_type: GeometryType) -> Self {
        Self {
            key: FilterKey::GeometryType,
            value: geometry_type.name().to_string(),
        }
    }

    pub fn property_eq(property: &str, value: &str) -> Self {
        Self {
            key: FilterKey::Property(property.to_string()),
            value: value.to_string(),
        }
    }

    pub fn matches(&self, feature: &geojson::Feature) -> bool {
        match &self.key {
            FilterKey::GeometryType => GeometryType::of(feature)
                .map(|geometry_type| geometry_type.name() == self.value)
                .unwrap_or(false),
            FilterKey::Property(property) => {
                string_property(feature, property) == Some(self.value.as_str())
            }
        }
    }

    /// Style-spec representation. `$type` uses the legacy filter syntax, which is the only
    /// place the key is recognised.
    pub fn to_json(&self) -> serde_json::Value {
        match &self.key {
            FilterKey::GeometryType => json!(["==", "$type", self.value]),
            FilterKey::Property(property) => json!(["==", ["get", property], self.value]),
        }
    }
}

impl Serialize for Filter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}
