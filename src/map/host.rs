use std::{collections::HashMap, path::Path};

use geojson::FeatureCollection;

use crate::{geofile::coordinate::Coordinate, style::layer::LayerDescriptor};

/// GeoJSON data source registered once with the map and shared by its layers.
#[derive(Debug, Clone)]
pub struct GeoJsonSource {
    pub id: String,
    pub data: FeatureCollection,
}

/// The map engine as seen by the view. Rendering, tiling and hit-testing happen behind it.
pub trait MapHost {
    fn add_source(&mut self, source: GeoJsonSource) -> anyhow::Result<()>;
    fn add_image(&mut self, id: &str, filepath: &Path) -> anyhow::Result<()>;
    /// Layers draw in registration order, later layers on top.
    fn add_layer(&mut self, layer: LayerDescriptor) -> anyhow::Result<()>;
}

/// Where a tap landed.
#[derive(Debug, Clone)]
pub struct TapContext {
    pub layer_id: String,
    pub coordinate: Option<Coordinate>,
}

/// Returns `true` if the tap was handled, `false` to let the host propagate it further.
pub type TapHandler = Box<dyn FnMut(&geojson::Feature, &TapContext) -> bool>;

/// Tap handlers keyed by the id of the layer they are subscribed to.
#[derive(Default)]
pub struct TapHandlers {
    handlers: HashMap<String, TapHandler>,
}

impl TapHandlers {
    /// Subscribe `handler` to taps on `layer_id`, replacing any previous subscription.
    pub fn on_layer_tap(&mut self, layer_id: &str, handler: TapHandler) {
        if self
            .handlers
            .insert(layer_id.to_string(), handler)
            .is_some()
        {
            log::warn!("Replaced tap handler for layer {}", layer_id);
        }
    }

    pub fn is_subscribed(&self, layer_id: &str) -> bool {
        self.handlers.contains_key(layer_id)
    }

    /// Invoke the handler of the tapped layer. Unsubscribed layers are never handled.
    pub fn dispatch(&mut self, feature: &geojson::Feature, context: &TapContext) -> bool {
        match self.handlers.get_mut(&context.layer_id) {
            Some(handler) => handler(feature, context),
            None => {
                log::debug!("No tap handler for layer {}", context.layer_id);
                false
            }
        }
    }
}
