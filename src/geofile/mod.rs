pub mod bundle;
pub mod coordinate;
pub mod feature;
pub mod geojson;
