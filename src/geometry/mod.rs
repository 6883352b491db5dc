//! Pixel geometry for the infill layout

/// Regions, fractional bounds and their resolution against image dimensions
pub mod region;

pub use region::{Region, RegionFractions, RegionLayout, ResolvedLayout};
