use std::{
    fs::read_to_string,
    path::{Path, PathBuf},
};

use anyhow::{anyhow, Context};
use serde::Deserialize;

use crate::{dataset::Dataset, geofile::coordinate::Coordinate};

/// Initial viewport of the map.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Camera {
    pub center: Coordinate,
    pub zoom: f64,
    #[serde(default)]
    pub bearing: f64,
    #[serde(default)]
    pub pitch: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            center: Coordinate::new(38.8410857803, -76.9750541388),
            zoom: 10.0,
            bearing: 0.0,
            pitch: 0.0,
        }
    }
}

fn default_marker_image() -> String {
    "pill".to_string()
}

#[derive(Deserialize, Debug)]
pub struct Config {
    /// Directory holding the bundled resources.
    pub assets_dir: PathBuf,
    pub dataset: Dataset,
    /// Bundled PNG, without extension, used as the point marker icon.
    #[serde(default = "default_marker_image")]
    pub marker_image: String,
    pub output_style_path: PathBuf,
    #[serde(default)]
    pub camera: Camera,
}

impl Config {
    pub fn from_file(filepath: &Path) -> anyhow::Result<Self> {
        if !filepath.exists() {
            return Err(anyhow!("Config file {:?} not found", filepath));
        }
        let contents = read_to_string(filepath)?;
        serde_yaml::from_str(&contents)
            .with_context(|| format!("Parsing config file {:?}", filepath))
    }
}
