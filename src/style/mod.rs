pub mod filter;
pub mod layer;
pub mod layers;
