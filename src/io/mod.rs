/// Command-line surface and pipeline orchestration
pub mod cli;
/// Default paths, region fractions and display settings
pub mod configuration;
/// Error taxonomy for load, infill and save
pub mod error;
/// PNG decoding and size-optimized encoding
pub mod image;
/// Stage progress display
pub mod progress;
