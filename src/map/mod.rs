pub mod host;
pub mod overlay;
pub mod style_document;
pub mod view;
