use std::fmt;

use serde_json::{json, Map, Value};

use super::filter::Filter;

/// sRGB color with straight alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineJoin {
    Bevel,
    Round,
    Miter,
}

impl LineJoin {
    pub fn name(&self) -> &'static str {
        match self {
            LineJoin::Bevel => "bevel",
            LineJoin::Round => "round",
            LineJoin::Miter => "miter",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCap {
    Butt,
    Round,
    Square,
}

impl LineCap {
    pub fn name(&self) -> &'static str {
        match self {
            LineCap::Butt => "butt",
            LineCap::Round => "round",
            LineCap::Square => "square",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineStyle {
    pub color: Color,
    pub width: f64,
    pub join: LineJoin,
    pub cap: LineCap,
    /// Dash and gap lengths in line widths, solid if `None`.
    pub dash_array: Option<Vec<f64>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    /// Feature property shown as the label.
    pub field: String,
    pub size: f64,
    pub color: Color,
    pub halo_color: Color,
    pub halo_width: f64,
    /// Offset from the anchor in ems.
    pub offset: [f64; 2],
}

#[derive(Debug, Clone, PartialEq)]
pub struct SymbolStyle {
    pub icon_image: String,
    pub icon_size: f64,
    pub icon_allow_overlap: bool,
    pub text: Option<TextStyle>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LayerKind {
    Line(LineStyle),
    Symbol(SymbolStyle),
}

impl LayerKind {
    pub fn name(&self) -> &'static str {
        match self {
            LayerKind::Line(_) => "line",
            LayerKind::Symbol(_) => "symbol",
        }
    }
}

/// A named, filtered and styled view over a data source.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerDescriptor {
    pub id: String,
    pub source: String,
    pub filter: Filter,
    pub kind: LayerKind,
    /// Whether taps on this layer are delivered to the selection handler.
    pub interactive: bool,
}

impl LayerDescriptor {
    pub fn matches(&self, feature: &geojson::Feature) -> bool {
        self.filter.matches(feature)
    }

    pub fn is_line(&self) -> bool {
        matches!(self.kind, LayerKind::Line(_))
    }

    /// Layer object as it appears in the `layers` array of a style document.
    pub fn to_style_json(&self) -> Value {
        let mut layout = Map::new();
        let mut paint = Map::new();
        match &self.kind {
            LayerKind::Line(line) => {
                layout.insert("line-join".into(), json!(line.join.name()));
                layout.insert("line-cap".into(), json!(line.cap.name()));
                paint.insert("line-color".into(), json!(line.color.to_string()));
                paint.insert("line-width".into(), json!(line.width));
                if let Some(dash_array) = &line.dash_array {
                    paint.insert("line-dasharray".into(), json!(dash_array));
                }
            }
            LayerKind::Symbol(symbol) => {
                layout.insert("icon-image".into(), json!(symbol.icon_image));
                layout.insert("icon-size".into(), json!(symbol.icon_size));
                layout.insert(
                    "icon-allow-overlap".into(),
                    json!(symbol.icon_allow_overlap),
                );
                if let Some(text) = &symbol.text {
                    layout.insert("text-field".into(), json!(["get", text.field]));
                    layout.insert("text-size".into(), json!(text.size));
                    layout.insert("text-offset".into(), json!(text.offset));
                    layout.insert("text-anchor".into(), json!("top"));
                    paint.insert("text-color".into(), json!(text.color.to_string()));
                    paint.insert(
                        "text-halo-color".into(),
                        json!(text.halo_color.to_string()),
                    );
                    paint.insert("text-halo-width".into(), json!(text.halo_width));
                }
            }
        }
        json!({
            "id": self.id,
            "type": self.kind.name(),
            "source": self.source,
            "filter": self.filter,
            "layout": layout,
            "paint": paint,
        })
    }
}
