use crate::geofile::feature::GeometryType;

use super::{
    filter::Filter,
    layer::{Color, LayerDescriptor, LayerKind, LineCap, LineJoin, LineStyle, SymbolStyle, TextStyle},
};

pub const STATION_LINE_LAYER_ID: &str = "line-id";
pub const STATION_MARKER_LAYER_ID: &str = "symbol-id";
pub const FLIGHT_PATH_LAYER_ID: &str = "flight-path";
pub const ROUTE_LINE_LAYER_ID: &str = "route-line";
pub const WAYPOINT_LAYER_ID: &str = "waypoint-symbols";
pub const DEPARTURE_LAYER_ID: &str = "departure-symbols";
pub const DESTINATION_LAYER_ID: &str = "destination-symbols";

/// Property holding the feature's role in a flight plan.
pub const FEATURE_TYPE_PROPERTY: &str = "type";
pub const FEATURE_NAME_PROPERTY: &str = "name";

const FLIGHT_PATH_COLOR: Color = Color::rgb(255, 0, 255);
const ROUTE_LINE_COLOR: Color = Color::rgb(128, 128, 128);
const LABEL_COLOR: Color = Color::rgb(33, 33, 33);
const DEPARTURE_LABEL_COLOR: Color = Color::rgb(46, 125, 50);
const DESTINATION_LABEL_COLOR: Color = Color::rgb(198, 40, 40);

fn round_line(color: Color, width: f64, dash_array: Option<Vec<f64>>) -> LineStyle {
    LineStyle {
        color,
        width,
        join: LineJoin::Round,
        cap: LineCap::Round,
        dash_array,
    }
}

fn labelled_symbol(icon_image: &str, icon_size: f64, label_color: Color) -> SymbolStyle {
    SymbolStyle {
        icon_image: icon_image.to_string(),
        icon_size,
        icon_allow_overlap: true,
        text: Some(TextStyle {
            field: FEATURE_NAME_PROPERTY.to_string(),
            size: 12.0,
            color: label_color,
            halo_color: Color::WHITE,
            halo_width: 1.5,
            offset: [0.0, 1.2],
        }),
    }
}

/// Every LineString of the stations source.
pub fn station_line_layer(source: &str) -> LayerDescriptor {
    LayerDescriptor {
        id: STATION_LINE_LAYER_ID.to_string(),
        source: source.to_string(),
        filter: Filter::geometry_type(GeometryType::LineString),
        kind: LayerKind::Line(round_line(Color::BLUE, 3.0, None)),
        interactive: false,
    }
}

/// Every Point of the stations source, drawn with the marker icon.
pub fn station_marker_layer(source: &str, icon_image: &str) -> LayerDescriptor {
    LayerDescriptor {
        id: STATION_MARKER_LAYER_ID.to_string(),
        source: source.to_string(),
        filter: Filter::geometry_type(GeometryType::Point),
        kind: LayerKind::Symbol(SymbolStyle {
            icon_image: icon_image.to_string(),
            icon_size: 1.0,
            icon_allow_overlap: true,
            text: None,
        }),
        interactive: true,
    }
}

pub fn flight_path_layer(source: &str) -> LayerDescriptor {
    LayerDescriptor {
        id: FLIGHT_PATH_LAYER_ID.to_string(),
        source: source.to_string(),
        filter: Filter::property_eq(FEATURE_TYPE_PROPERTY, "flight_path"),
        kind: LayerKind::Line(round_line(FLIGHT_PATH_COLOR, 4.0, None)),
        interactive: false,
    }
}

pub fn route_line_layer(source: &str) -> LayerDescriptor {
    LayerDescriptor {
        id: ROUTE_LINE_LAYER_ID.to_string(),
        source: source.to_string(),
        filter: Filter::property_eq(FEATURE_TYPE_PROPERTY, "route_line"),
        kind: LayerKind::Line(round_line(ROUTE_LINE_COLOR, 2.0, Some(vec![2.0, 2.0]))),
        interactive: false,
    }
}

pub fn waypoint_layer(source: &str, icon_image: &str) -> LayerDescriptor {
    LayerDescriptor {
        id: WAYPOINT_LAYER_ID.to_string(),
        source: source.to_string(),
        filter: Filter::property_eq(FEATURE_TYPE_PROPERTY, "waypoint"),
        kind: LayerKind::Symbol(labelled_symbol(icon_image, 0.8, LABEL_COLOR)),
        interactive: true,
    }
}

pub fn departure_layer(source: &str, icon_image: &str) -> LayerDescriptor {
    LayerDescriptor {
        id: DEPARTURE_LAYER_ID.to_string(),
        source: source.to_string(),
        filter: Filter::property_eq(FEATURE_TYPE_PROPERTY, "departure"),
        kind: LayerKind::Symbol(labelled_symbol(icon_image, 1.2, DEPARTURE_LABEL_COLOR)),
        interactive: true,
    }
}

pub fn destination_layer(source: &str, icon_image: &str) -> LayerDescriptor {
    LayerDescriptor {
        id: DESTINATION_LAYER_ID.to_string(),
        source: source.to_string(),
        filter: Filter::property_eq(FEATURE_TYPE_PROPERTY, "destination"),
        kind: LayerKind::Symbol(labelled_symbol(icon_image, 1.2, DESTINATION_LABEL_COLOR)),
        interactive: true,
    }
}

/// Line layers come first so points are drawn on top of them.
pub fn station_layers(source: &str, icon_image: &str) -> Vec<LayerDescriptor> {
    vec![
        station_line_layer(source),
        station_marker_layer(source, icon_image),
    ]
}

pub fn flight_plan_layers(source: &str, icon_image: &str) -> Vec<LayerDescriptor> {
    vec![
        route_line_layer(source),
        flight_path_layer(source),
        waypoint_layer(source, icon_image),
        departure_layer(source, icon_image),
        destination_layer(source, icon_image),
    ]
}
