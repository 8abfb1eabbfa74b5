pub mod places;
pub mod streetview;
pub mod teleport;
