//! Texture infill over fixed regions
//!
//! This module contains:
//! - Sample extraction and Lanczos stretching into fill patches
//! - The in-place infill pass over an RGB image

/// In-place infill pass and its report
pub mod apply;
/// Sample extraction and fill patch construction
pub mod patch;

pub use apply::{InfillReport, infill_regions};
pub use patch::FillPatch;
