use std::{cell::RefCell, fmt, rc::Rc};

use anyhow::Context;

use crate::{
    dataset::Dataset,
    geofile::{bundle::AssetBundle, geojson::load_feature_collection},
    selection::reducer::{on_tap, SelectionState},
    style::layer::LayerDescriptor,
};

use super::{
    host::{GeoJsonSource, MapHost, TapContext, TapHandlers},
    overlay::InfoCard,
};

pub const MARKER_IMAGE_EXTENSION: &str = "png";

/// What is on screen for a given selection.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub layer_ids: Vec<String>,
    pub overlay: Option<InfoCard>,
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Layers: {}", self.layer_ids.join(", "))?;
        match &self.overlay {
            Some(card) => write!(f, "\n{}", card),
            None => write!(f, "\nNo selection"),
        }
    }
}

pub fn render(selection: &SelectionState, layers: &[LayerDescriptor]) -> Frame {
    Frame {
        layer_ids: layers.iter().map(|layer| layer.id.clone()).collect(),
        overlay: selection.waypoint().map(InfoCard::from),
    }
}

/// Top-level view: binds one dataset to the map and owns the selection slot.
pub struct MapView {
    dataset: Dataset,
    marker_image: String,
    layers: Vec<LayerDescriptor>,
    selection: Rc<RefCell<SelectionState>>,
}

impl MapView {
    pub fn new(dataset: Dataset, marker_image: &str) -> Self {
        Self {
            dataset,
            marker_image: marker_image.to_string(),
            layers: dataset.layers(marker_image),
            selection: Rc::new(RefCell::new(SelectionState::default())),
        }
    }

    pub fn dataset(&self) -> Dataset {
        self.dataset
    }

    pub fn layers(&self) -> &[LayerDescriptor] {
        &self.layers
    }

    /// Register source, marker image and layers with the host, then subscribe the selection
    /// handler to every interactive layer. Called once the host's style has loaded.
    pub fn on_style_loaded(
        &self,
        bundle: &dyn AssetBundle,
        host: &mut dyn MapHost,
        taps: &mut TapHandlers,
    ) -> anyhow::Result<()> {
        let data = load_feature_collection(bundle, self.dataset.resource_name());
        host.add_source(GeoJsonSource {
            id: self.dataset.source_id().to_string(),
            data,
        })?;

        let image_filepath = bundle.require_resource(&self.marker_image, MARKER_IMAGE_EXTENSION);
        host.add_image(&self.marker_image, &image_filepath)?;

        for layer in &self.layers {
            host.add_layer(layer.clone())
                .with_context(|| format!("Adding layer {}", layer.id))?;
        }

        for layer in self.layers.iter().filter(|layer| layer.interactive) {
            let selection = Rc::clone(&self.selection);
            taps.on_layer_tap(
                &layer.id,
                Box::new(move |feature: &geojson::Feature, context: &TapContext| {
                    let outcome = on_tap(feature);
                    let handled = outcome.is_selected();
                    log::info!(
                        "Tap on layer {} at {:?}: {:?}",
                        context.layer_id,
                        context.coordinate,
                        outcome
                    );
                    selection.borrow_mut().apply(outcome);
                    handled
                }),
            );
        }
        log::info!(
            "Registered {} layers for {}",
            self.layers.len(),
            self.dataset.resource_name()
        );
        Ok(())
    }

    /// Topmost interactive layer that draws `feature`, i.e. the layer a tap on it lands on.
    pub fn tap_target(&self, feature: &geojson::Feature) -> Option<&LayerDescriptor> {
        self.layers
            .iter()
            .rev()
            .find(|layer| layer.interactive && layer.matches(feature))
    }

    pub fn close_overlay(&self) {
        self.selection.borrow_mut().close_overlay();
    }

    pub fn selection(&self) -> SelectionState {
        self.selection.borrow().clone()
    }

    pub fn render(&self) -> Frame {
        render(&self.selection.borrow(), &self.layers)
    }
}
