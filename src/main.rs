extern crate log;
pub mod config;
pub mod dataset;
pub mod geofile;
pub mod map;
pub mod selection;
pub mod style;
use crate::config::Config;
use crate::geofile::bundle::DirectoryBundle;
use crate::geofile::coordinate::Coordinate;
use crate::map::host::{TapContext, TapHandlers};
use crate::map::style_document::StyleDocument;
use crate::map::view::MapView;
use anyhow::anyhow;
use clap::Parser;
use std::path::Path;

/// Bind a bundled GeoJSON dataset to map layers and write the resulting style document.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the input config file.
    #[arg(short, long)]
    config_filepath: String,

    /// Simulate a tap on the feature with this index in the dataset.
    #[arg(short, long)]
    tap: Option<usize>,
}

fn simulate_tap(
    view: &MapView,
    style: &StyleDocument,
    taps: &mut TapHandlers,
    index: usize,
) -> anyhow::Result<()> {
    let source_id = view.dataset().source_id();
    let features = &style
        .source(source_id)
        .ok_or_else(|| anyhow!("Source {} was not registered", source_id))?
        .data
        .features;
    let feature = features.get(index).ok_or_else(|| {
        anyhow!(
            "Feature index {} out of range, the dataset has {} features",
            index,
            features.len()
        )
    })?;
    match view.tap_target(feature) {
        Some(layer) => {
            let context = TapContext {
                layer_id: layer.id.clone(),
                coordinate: feature
                    .geometry
                    .as_ref()
                    .and_then(Coordinate::from_point_geometry),
            };
            let handled = taps.dispatch(feature, &context);
            log::info!("Tap on feature {} handled: {}", index, handled);
        }
        None => log::warn!("Feature {} is not drawn by any interactive layer", index),
    }
    Ok(())
}

fn try_main() -> anyhow::Result<()> {
    let args = Args::try_parse()?;
    let config = Config::from_file(Path::new(&args.config_filepath))?;
    log::info!("Loading dataset {:?} from {:?}", config.dataset, config.assets_dir);

    let bundle = DirectoryBundle::new(&config.assets_dir);
    let view = MapView::new(config.dataset, &config.marker_image);
    let mut style = StyleDocument::new(config.camera.clone());
    let mut taps = TapHandlers::default();
    view.on_style_loaded(&bundle, &mut style, &mut taps)?;

    log::info!("Writing style to {:?}", &config.output_style_path);
    style.write_to_file(&config.output_style_path)?;

    if let Some(index) = args.tap {
        simulate_tap(&view, &style, &mut taps, index)?;
    }
    println!("{}", view.render());
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(e) = try_main() {
        eprintln!("Error: {:?}", e);
        std::process::exit(1)
    }
}
