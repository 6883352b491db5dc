//! Paint over fixed rectangular regions of an image with a stretched texture sample
//!
//! The crate crops a strip of background from between two foreground objects,
//! resizes it with Lanczos resampling to cover each object's box, pastes the
//! result in place and writes the edited image as an optimized PNG.

#![forbid(unsafe_code)]

/// Pixel regions and the fractional layout they are resolved from
pub mod geometry;
/// Sample extraction, fill patches and the in-place infill pass
pub mod infill;
/// Input/output operations, command-line surface and error handling
pub mod io;

pub use io::error::{InfillError, Result};
