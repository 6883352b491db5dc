//! Tests for sample extraction, Lanczos stretching and pasting

#[cfg(test)]
mod tests {
    use image::{Rgb, RgbImage};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use regionfill::InfillError;
    use regionfill::geometry::Region;
    use regionfill::infill::FillPatch;
    use regionfill::infill::patch::sample_region;

    fn textured(width: u32, height: u32, seed: u64) -> RgbImage {
        let mut rng = StdRng::seed_from_u64(seed);
        RgbImage::from_fn(width, height, |_, _| {
            Rgb([rng.random(), rng.random(), rng.random()])
        })
    }

    // Tests the sample is an exact pixel copy of the region
    // Verified by offsetting the crop origin by one pixel
    #[test]
    fn test_sample_region_copies_pixels() {
        let img = textured(40, 30, 7);
        let region = Region::new(5, 10, 25, 18);

        let sample = sample_region(&img, region).unwrap();

        assert_eq!(sample.dimensions(), (20, 8));
        for (x, y, pixel) in sample.enumerate_pixels() {
            assert_eq!(pixel, img.get_pixel(x + 5, y + 10));
        }
    }

    // Tests sampling past the image edge is rejected
    // Verified by removing the bounds check
    #[test]
    fn test_sample_region_out_of_bounds() {
        let img = textured(10, 10, 1);

        let result = sample_region(&img, Region::new(5, 5, 11, 10));

        assert!(matches!(result, Err(InfillError::InvalidRegion { .. })));
    }

    // Tests an empty sample is rejected
    // Verified by removing the emptiness check
    #[test]
    fn test_sample_region_empty() {
        let img = textured(10, 10, 1);

        let result = sample_region(&img, Region::new(4, 4, 4, 9));

        assert!(matches!(result, Err(InfillError::InvalidRegion { .. })));
    }

    // Tests stretched patches match target dimensions for any sample size
    // Verified by resizing with preserved aspect ratio
    #[test]
    fn test_stretch_matches_target_dimensions() {
        let targets = [
            Region::new(0, 0, 1, 1),
            Region::new(3, 4, 50, 9),
            Region::new(10, 0, 17, 64),
            Region::new(0, 52, 38, 100),
        ];

        for (sample_width, sample_height) in [(1, 1), (16, 20), (64, 8)] {
            let sample = textured(sample_width, sample_height, 3);
            for target in targets {
                let patch = FillPatch::stretch(&sample, target).unwrap();
                assert_eq!(
                    patch.pixels().dimensions(),
                    (target.width(), target.height()),
                    "sample {sample_width}x{sample_height} into {target}"
                );
                assert_eq!(patch.target(), target);
            }
        }
    }

    // Tests a flat sample stays flat after resampling
    // Verified by tiling the sample instead of stretching
    #[test]
    fn test_stretch_flat_sample_stays_flat() {
        let color = Rgb([120, 96, 64]);
        let sample = RgbImage::from_pixel(12, 9, color);

        let patch = FillPatch::stretch(&sample, Region::new(0, 0, 37, 21)).unwrap();

        for pixel in patch.pixels().pixels() {
            for (channel, expected) in pixel.0.iter().zip(color.0) {
                assert!(channel.abs_diff(expected) <= 1, "{pixel:?} drifted from {color:?}");
            }
        }
    }

    // Tests stretching an empty sample is an error
    // Verified by removing the empty sample guard
    #[test]
    fn test_stretch_empty_sample() {
        let sample = RgbImage::new(0, 5);

        let result = FillPatch::stretch(&sample, Region::new(0, 0, 4, 4));

        assert!(matches!(result, Err(InfillError::InvalidRegion { .. })));
    }

    // Tests pasting overwrites the target and nothing else
    // Verified by pasting at the origin instead of the target corner
    #[test]
    fn test_paste_onto_only_touches_target() {
        let original = textured(30, 20, 11);
        let mut img = original.clone();
        let target = Region::new(8, 5, 20, 15);
        let sample = RgbImage::from_pixel(4, 4, Rgb([1, 2, 3]));

        let patch = FillPatch::stretch(&sample, target).unwrap();
        patch.paste_onto(&mut img);

        for (x, y, pixel) in img.enumerate_pixels() {
            if target.contains(x, y) {
                assert_eq!(pixel, patch.pixels().get_pixel(x - 8, y - 5));
            } else {
                assert_eq!(pixel, original.get_pixel(x, y));
            }
        }
    }
}
