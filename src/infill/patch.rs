//! Sample extraction and stretched fill patches

use crate::geometry::Region;
use crate::io::error::{Result, invalid_region};
use image::RgbImage;
use image::imageops::{self, FilterType};

/// Copy the pixels bounded by `region` out of `img`
///
/// # Errors
///
/// Returns an error if the region is empty or extends past the image bounds
pub fn sample_region(img: &RgbImage, region: Region) -> Result<RgbImage> {
    let (width, height) = img.dimensions();
    if !region.fits_within(width, height) {
        return Err(invalid_region(
            region,
            &format!("sample lies outside the {width}x{height} image"),
        ));
    }
    if region.is_empty() {
        return Err(invalid_region(region, &"sample covers no pixels"));
    }

    Ok(imageops::crop_imm(img, region.x0, region.y0, region.width(), region.height()).to_image())
}

/// Sample pixels stretched to exactly cover one target region
#[derive(Debug, Clone)]
pub struct FillPatch {
    target: Region,
    pixels: RgbImage,
}

impl FillPatch {
    /// Resize `sample` to the target's dimensions with Lanczos3 resampling
    ///
    /// The sample is stretched, never tiled or cropped, so the aspect
    /// ratio follows the target.
    ///
    /// # Errors
    ///
    /// Returns an error if the sample has no pixels
    pub fn stretch(sample: &RgbImage, target: Region) -> Result<Self> {
        let (sample_width, sample_height) = sample.dimensions();
        if sample_width == 0 || sample_height == 0 {
            return Err(invalid_region(
                target,
                &format!("cannot stretch an empty {sample_width}x{sample_height} sample"),
            ));
        }

        let pixels = imageops::resize(
            sample,
            target.width(),
            target.height(),
            FilterType::Lanczos3,
        );

        Ok(Self { target, pixels })
    }

    /// Region this patch overwrites
    pub const fn target(&self) -> Region {
        self.target
    }

    /// Stretched pixel data
    pub const fn pixels(&self) -> &RgbImage {
        &self.pixels
    }

    /// Overwrite `img` at the target's top-left corner
    ///
    /// Pixels outside the target are untouched.
    pub fn paste_onto(&self, img: &mut RgbImage) {
        let (x, y) = self.target.origin();
        imageops::replace(img, &self.pixels, i64::from(x), i64::from(y));
    }
}
