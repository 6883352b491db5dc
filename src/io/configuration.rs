//! Fixed paths, region fractions and encoder defaults

use crate::geometry::RegionFractions;

// Paths
/// Image edited in place; a leading `~/` expands to the home directory
pub const DEFAULT_INPUT: &str = "~/Downloads/11.png";
/// Second location the edited image is written to
pub const DEFAULT_COPY_TO: &str = "assets/images/11.png";

// Region fractions, tuned by eye for one 1536x1024 image
/// Reference image width the fractions were tuned for
pub const REFERENCE_WIDTH: u32 = 1536;
/// Reference image height the fractions were tuned for
pub const REFERENCE_HEIGHT: u32 = 1024;

/// Lower-left table
pub const LEFT_BOX: RegionFractions = RegionFractions::new(0.0, 0.52, 0.38, 1.0);
/// Lower-right table
pub const RIGHT_BOX: RegionFractions = RegionFractions::new(0.62, 0.52, 1.0, 1.0);
/// Unoccluded floor between the tables
pub const CENTER_STRIP: RegionFractions = RegionFractions::new(0.42, 0.72, 0.58, 0.92);

// Progress display
/// Number of pipeline stages reported by the progress bar
pub const PIPELINE_STAGES: u64 = 6;
/// Width of the stage progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 30;
