pub mod reducer;
pub mod waypoint;
