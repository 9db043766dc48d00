use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{anyhow, Context};
use serde_json::{json, Map, Value};

use crate::{config::Camera, style::layer::LayerDescriptor};

use super::host::{GeoJsonSource, MapHost};

const STYLE_SPEC_VERSION: u32 = 8;

/// In-memory map host. Records what the view registers and renders it as a style document.
#[derive(Debug)]
pub struct StyleDocument {
    camera: Camera,
    sources: Vec<GeoJsonSource>,
    images: Vec<(String, PathBuf)>,
    layers: Vec<LayerDescriptor>,
}

impl StyleDocument {
    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            sources: Vec::new(),
            images: Vec::new(),
            layers: Vec::new(),
        }
    }

    pub fn source(&self, id: &str) -> Option<&GeoJsonSource> {
        self.sources.iter().find(|source| source.id == id)
    }

    pub fn image(&self, id: &str) -> Option<&Path> {
        self.images
            .iter()
            .find(|(image_id, _)| image_id == id)
            .map(|(_, filepath)| filepath.as_path())
    }

    pub fn layers(&self) -> &[LayerDescriptor] {
        &self.layers
    }

    pub fn layer(&self, id: &str) -> Option<&LayerDescriptor> {
        self.layers.iter().find(|layer| layer.id == id)
    }

    pub fn to_style_json(&self) -> anyhow::Result<Value> {
        let mut sources = Map::new();
        for source in &self.sources {
            let data = serde_json::to_value(&source.data)
                .with_context(|| format!("Serializing source {}", source.id))?;
            sources.insert(
                source.id.clone(),
                json!({"type": "geojson", "data": data}),
            );
        }
        let images: Map<String, Value> = self
            .images
            .iter()
            .map(|(id, filepath)| (id.clone(), json!(filepath)))
            .collect();
        let layers: Vec<Value> = self
            .layers
            .iter()
            .map(|layer| layer.to_style_json())
            .collect();
        Ok(json!({
            "version": STYLE_SPEC_VERSION,
            "center": [self.camera.center.longitude, self.camera.center.latitude],
            "zoom": self.camera.zoom,
            "bearing": self.camera.bearing,
            "pitch": self.camera.pitch,
            "metadata": {"waypoint_viewer:images": images},
            "sources": sources,
            "layers": layers,
        }))
    }

    pub fn write_to_file(&self, output_filepath: &Path) -> anyhow::Result<()> {
        let contents = serde_json::to_string_pretty(&self.to_style_json()?)?;
        if let Some(parent) = output_filepath.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(output_filepath, contents)
            .with_context(|| format!("Writing style to {:?}", output_filepath))
    }
}

impl MapHost for StyleDocument {
    fn add_source(&mut self, source: GeoJsonSource) -> anyhow::Result<()> {
        if self.source(&source.id).is_some() {
            return Err(anyhow!("Source {} already exists", source.id));
        }
        log::debug!(
            "Adding source {} with {} features",
            source.id,
            source.data.features.len()
        );
        self.sources.push(source);
        Ok(())
    }

    fn add_image(&mut self, id: &str, filepath: &Path) -> anyhow::Result<()> {
        if self.image(id).is_some() {
            return Err(anyhow!("Image {} already exists", id));
        }
        self.images.push((id.to_string(), filepath.to_path_buf()));
        Ok(())
    }

    fn add_layer(&mut self, layer: LayerDescriptor) -> anyhow::Result<()> {
        if self.layer(&layer.id).is_some() {
            return Err(anyhow!("Layer {} already exists", layer.id));
        }
        if self.source(&layer.source).is_none() {
            return Err(anyhow!(
                "Layer {} references missing source {}",
                layer.id,
                layer.source
            ));
        }
        log::debug!("Adding {} layer {}", layer.kind.name(), layer.id);
        self.layers.push(layer);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use rstest::{fixture, rstest};
    use serde_json::json;
    use testdir::testdir;

    use crate::{
        config::Camera,
        geofile::geojson::empty_feature_collection,
        map::host::{GeoJsonSource, MapHost},
        style::layers::{station_line_layer, station_marker_layer},
    };

    use super::StyleDocument;

    #[fixture]
    fn document() -> StyleDocument {
        let mut document = StyleDocument::new(Camera::default());
        document
            .add_source(GeoJsonSource {
                id: "test-data".to_string(),
                data: empty_feature_collection(),
            })
            .unwrap();
        document
    }

    #[rstest]
    fn test_duplicate_source_is_rejected(mut document: StyleDocument) {
        let result = document.add_source(GeoJsonSource {
            id: "test-data".to_string(),
            data: empty_feature_collection(),
        });
        assert!(result.is_err());
    }

    #[rstest]
    fn test_duplicate_layer_is_rejected(mut document: StyleDocument) {
        document.add_layer(station_line_layer("test-data")).unwrap();
        assert!(document.add_layer(station_line_layer("test-data")).is_err());
        assert_eq!(document.layers().len(), 1);
    }

    #[rstest]
    fn test_layer_with_unknown_source_is_rejected(mut document: StyleDocument) {
        assert!(document.add_layer(station_line_layer("other")).is_err());
    }

    #[rstest]
    fn test_duplicate_image_is_rejected(mut document: StyleDocument) {
        document.add_image("pill", Path::new("pill.png")).unwrap();
        assert!(document.add_image("pill", Path::new("other.png")).is_err());
        assert_eq!(document.image("pill"), Some(Path::new("pill.png")));
    }

    #[rstest]
    fn test_style_json_keeps_layer_order(mut document: StyleDocument) {
        document.add_layer(station_line_layer("test-data")).unwrap();
        document
            .add_layer(station_marker_layer("test-data", "pill"))
            .unwrap();

        let style = document.to_style_json().unwrap();
        assert_eq!(style["version"], json!(8));
        assert_eq!(style["center"], json!([-76.9750541388, 38.8410857803]));
        assert_eq!(style["sources"]["test-data"]["type"], json!("geojson"));
        assert_eq!(
            style["sources"]["test-data"]["data"]["type"],
            json!("FeatureCollection")
        );
        let layer_ids: Vec<&str> = style["layers"]
            .as_array()
            .unwrap()
            .iter()
            .map(|layer| layer["id"].as_str().unwrap())
            .collect();
        assert_eq!(layer_ids, vec!["line-id", "symbol-id"]);
    }

    #[rstest]
    fn test_write_to_file(document: StyleDocument) {
        let output_filepath = testdir!().join("nested").join("style.json");
        document.write_to_file(&output_filepath).unwrap();
        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&output_filepath).unwrap()).unwrap();
        assert_eq!(written, document.to_style_json().unwrap());
    }
}
