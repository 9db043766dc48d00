use serde::Deserialize;

use crate::style::{
    layer::LayerDescriptor,
    layers::{flight_plan_layers, station_layers},
};

/// Bundled GeoJSON datasets and the layer set each one is drawn with.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Dataset {
    Stations,
    Waypoints,
}

impl Dataset {
    /// Name of the bundled resource, without extension.
    pub fn resource_name(&self) -> &'static str {
        match self {
            Dataset::Stations => "stations",
            Dataset::Waypoints => "waypoints",
        }
    }

    pub fn source_id(&self) -> &'static str {
        match self {
            Dataset::Stations => "test-data",
            Dataset::Waypoints => "flight-data",
        }
    }

    pub fn layers(&self, icon_image: &str) -> Vec<LayerDescriptor> {
        match self {
            Dataset::Stations => station_layers(self.source_id(), icon_image),
            Dataset::Waypoints => flight_plan_layers(self.source_id(), icon_image),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use rstest::rstest;

    use crate::geofile::{bundle::DirectoryBundle, geojson::load_feature_collection};

    use super::Dataset;

    #[rstest]
    #[case("stations", Dataset::Stations)]
    #[case("waypoints", Dataset::Waypoints)]
    fn test_dataset_from_yaml(#[case] name: &str, #[case] expected: Dataset) {
        let dataset: Dataset = serde_yaml::from_str(name).unwrap();
        assert_eq!(dataset, expected);
        assert_eq!(dataset.resource_name(), name);
    }

    #[rstest]
    #[case(Dataset::Stations, 2)]
    #[case(Dataset::Waypoints, 5)]
    fn test_dataset_layers_share_its_source(#[case] dataset: Dataset, #[case] num_layers: usize) {
        let layers = dataset.layers("marker");
        assert_eq!(layers.len(), num_layers);
        assert!(layers.iter().all(|layer| layer.source == dataset.source_id()));
    }

    #[rstest]
    #[case(Dataset::Stations, 4)]
    #[case(Dataset::Waypoints, 5)]
    fn test_bundled_assets_are_fully_drawn(#[case] dataset: Dataset, #[case] num_features: usize) {
        let bundle = DirectoryBundle::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("assets"));
        let collection = load_feature_collection(&bundle, dataset.resource_name());
        assert_eq!(collection.features.len(), num_features);

        let layers = dataset.layers("pill");
        for feature in &collection.features {
            let num_matching = layers.iter().filter(|layer| layer.matches(feature)).count();
            assert_eq!(num_matching, 1, "{:?}", feature.properties);
        }
    }
}
