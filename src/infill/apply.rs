//! In-place infill of the target regions from the sample strip

use crate::geometry::{RegionLayout, ResolvedLayout};
use crate::infill::patch::{FillPatch, sample_region};
use crate::io::error::Result;
use crate::io::progress::StageProgress;
use image::RgbImage;

/// Summary of one infill pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfillReport {
    /// Source image width
    pub width: u32,
    /// Source image height
    pub height: u32,
    /// Regions used for this image
    pub layout: ResolvedLayout,
    /// Number of targets that were actually overwritten
    pub patches_applied: usize,
}

/// Overwrite both target regions with the stretched sample strip
///
/// The sample is extracted before anything is pasted, so a layout whose
/// sample overlaps a target still reads the original pixels.
///
/// # Errors
///
/// Returns an error if the resolved sample is empty or out of bounds
pub fn infill_regions(img: &mut RgbImage, layout: &RegionLayout) -> Result<InfillReport> {
    infill_regions_with_progress(img, layout, &StageProgress::hidden())
}

/// Same as [`infill_regions`], advancing `progress` through each stage
///
/// # Errors
///
/// Returns an error if the resolved sample is empty or out of bounds
pub fn infill_regions_with_progress(
    img: &mut RgbImage,
    layout: &RegionLayout,
    progress: &StageProgress,
) -> Result<InfillReport> {
    let (width, height) = img.dimensions();
    let resolved = layout.resolve(width, height);

    progress.stage("Sampling floor texture");
    let sample = sample_region(img, resolved.sample)?;

    progress.stage("Stretching fill patches");
    let patches = resolved
        .targets()
        .into_iter()
        .filter(|target| !target.is_empty())
        .map(|target| FillPatch::stretch(&sample, target))
        .collect::<Result<Vec<_>>>()?;

    progress.stage("Pasting fill patches");
    for patch in &patches {
        patch.paste_onto(img);
    }

    Ok(InfillReport {
        width,
        height,
        layout: resolved,
        patches_applied: patches.len(),
    })
}
