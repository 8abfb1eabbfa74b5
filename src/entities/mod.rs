pub mod city;
mod coordinates;
mod nearby;
mod panorama;

pub use city::CityPreset;
pub use coordinates::Coordinates;
pub use nearby::{fallback_points, Category, NearbyPoint};
pub use panorama::Panorama;
