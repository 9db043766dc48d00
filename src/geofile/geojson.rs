use std::{fs, path::Path};

use anyhow::{anyhow, Context};
use geojson::{FeatureCollection, GeoJson};

use super::bundle::AssetBundle;

pub const GEOJSON_EXTENSION: &str = "geojson";

/// Load the bundled GeoJSON resource `name` as a feature collection.
///
/// A missing resource aborts (see `AssetBundle::require_resource`). A resource that cannot be read or
/// parsed is logged and replaced by an empty collection so the map still renders without the overlay.
pub fn load_feature_collection(bundle: &dyn AssetBundle, name: &str) -> FeatureCollection {
    let filepath = bundle.require_resource(name, GEOJSON_EXTENSION);
    match read_feature_collection(&filepath) {
        Ok(feature_collection) => {
            log::info!(
                "Read {} features from {:?}",
                feature_collection.features.len(),
                filepath
            );
            feature_collection
        }
        Err(err) => {
            log::error!("Error parsing data: {:?}", err);
            empty_feature_collection()
        }
    }
}

pub fn read_feature_collection(filepath: &Path) -> anyhow::Result<FeatureCollection> {
    let contents = fs::read_to_string(filepath)
        .with_context(|| format!("Reading GeoJSON file {:?}", filepath))?;
    let geojson: GeoJson = contents
        .parse()
        .with_context(|| format!("Parsing GeoJSON file {:?}", filepath))?;
    match geojson {
        GeoJson::FeatureCollection(feature_collection) => Ok(feature_collection),
        _ => Err(anyhow!(
            "GeoJSON file {:?} is not a FeatureCollection",
            filepath
        )),
    }
}

pub fn empty_feature_collection() -> FeatureCollection {
    FeatureCollection {
        bbox: None,
        features: vec![],
        foreign_members: None,
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use rstest::{fixture, rstest};
    use testdir::testdir;

    use crate::geofile::{
        bundle::{AssetBundle, DirectoryBundle},
        feature::string_property,
    };

    use super::load_feature_collection;

    const STATIONS: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {"type": "Feature", "geometry": {"type": "Point", "coordinates": [-76.97, 38.84]}, "properties": {"name": "Alpha"}},
            {"type": "Feature", "geometry": {"type": "LineString", "coordinates": [[-76.97, 38.84], [-76.95, 38.86]]}, "properties": {"name": "Link"}},
            {"type": "Feature", "geometry": {"type": "Point", "coordinates": [-76.95, 38.86]}, "properties": {"name": "Bravo"}}
        ]
    }"#;

    /// Bundle that never contains anything.
    struct EmptyBundle;

    impl AssetBundle for EmptyBundle {
        fn resource_path(&self, _name: &str, _ext: &str) -> Option<PathBuf> {
            None
        }
    }

    #[fixture]
    fn asset_dir() -> PathBuf {
        testdir!()
    }

    #[rstest]
    fn test_load_preserves_count_and_order(asset_dir: PathBuf) {
        std::fs::write(asset_dir.join("stations.geojson"), STATIONS).unwrap();
        let bundle = DirectoryBundle::new(&asset_dir);

        let collection = load_feature_collection(&bundle, "stations");

        let names: Vec<Option<&str>> = collection
            .features
            .iter()
            .map(|feature| string_property(feature, "name"))
            .collect();
        assert_eq!(names, vec![Some("Alpha"), Some("Link"), Some("Bravo")]);
    }

    #[rstest]
    #[case("not json at all")]
    #[case(r#"{"type": "FeatureCollection", "features": [{"type": "Feature"}"#)]
    #[case(r#"{"type": "Feature", "geometry": null, "properties": {}}"#)]
    #[case("")]
    fn test_load_malformed_yields_empty_collection(asset_dir: PathBuf, #[case] contents: &str) {
        std::fs::write(asset_dir.join("broken.geojson"), contents).unwrap();
        let bundle = DirectoryBundle::new(&asset_dir);

        let collection = load_feature_collection(&bundle, "broken");

        assert!(collection.features.is_empty());
    }

    #[rstest]
    #[should_panic(expected = "File 'stations' not found.")]
    fn test_load_missing_resource_is_fatal() {
        load_feature_collection(&EmptyBundle, "stations");
    }
}
