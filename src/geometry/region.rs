//! Pixel regions and the fractional layout they are resolved from

use std::fmt;

/// Axis-aligned half-open pixel box `[x0, x1) × [y0, y1)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
    /// Left edge (inclusive)
    pub x0: u32,
    /// Top edge (inclusive)
    pub y0: u32,
    /// Right edge (exclusive)
    pub x1: u32,
    /// Bottom edge (exclusive)
    pub y1: u32,
}

impl Region {
    /// Create a region from its four bounds
    pub const fn new(x0: u32, y0: u32, x1: u32, y1: u32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Horizontal extent, zero when the bounds are inverted
    pub const fn width(&self) -> u32 {
        self.x1.saturating_sub(self.x0)
    }

    /// Vertical extent, zero when the bounds are inverted
    pub const fn height(&self) -> u32 {
        self.y1.saturating_sub(self.y0)
    }

    /// Number of pixels covered
    pub const fn area(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }

    /// True when the region covers no pixels
    pub const fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Top-left corner as `(x, y)`
    pub const fn origin(&self) -> (u32, u32) {
        (self.x0, self.y0)
    }

    /// True when both regions share at least one pixel
    ///
    /// Empty regions never overlap anything.
    pub const fn overlaps(&self, other: &Self) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.x0 < other.x1
            && other.x0 < self.x1
            && self.y0 < other.y1
            && other.y0 < self.y1
    }

    /// True when the pixel `(x, y)` lies inside the region
    pub const fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x0 && x < self.x1 && y >= self.y0 && y < self.y1
    }

    /// True when the region fits inside an image of the given size
    pub const fn fits_within(&self, width: u32, height: u32) -> bool {
        self.x0 <= self.x1 && self.y0 <= self.y1 && self.x1 <= width && self.y1 <= height
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x0, self.y0, self.x1, self.y1)
    }
}

/// A region expressed as fractions of the image width and height
///
/// Resolution truncates toward zero, so `0.38 * 1536 = 583.68` becomes `583`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionFractions {
    /// Left edge as a fraction of width
    pub x0: f64,
    /// Top edge as a fraction of height
    pub y0: f64,
    /// Right edge as a fraction of width
    pub x1: f64,
    /// Bottom edge as a fraction of height
    pub y1: f64,
}

impl RegionFractions {
    /// Create fractional bounds
    pub const fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Resolve against concrete image dimensions
    pub fn resolve(&self, width: u32, height: u32) -> Region {
        Region::new(
            scale(width, self.x0),
            scale(height, self.y0),
            scale(width, self.x1),
            scale(height, self.y1),
        )
    }
}

// Float-to-int `as` saturates and truncates, negative fractions clamp to zero
fn scale(dimension: u32, fraction: f64) -> u32 {
    let scaled = (f64::from(dimension) * fraction) as u32;
    scaled.min(dimension)
}

/// The two target boxes and the sample strip, all as fractions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionLayout {
    /// Lower-left target to overwrite
    pub left: RegionFractions,
    /// Lower-right target to overwrite
    pub right: RegionFractions,
    /// Source strip sampled for the fill texture
    pub sample: RegionFractions,
}

impl RegionLayout {
    /// Tuned for the 1536x1024 room image with two tables in the lower corners
    pub const TABLE_REMOVAL: Self = Self {
        left: crate::io::configuration::LEFT_BOX,
        right: crate::io::configuration::RIGHT_BOX,
        sample: crate::io::configuration::CENTER_STRIP,
    };

    /// Resolve all three regions against concrete image dimensions
    pub fn resolve(&self, width: u32, height: u32) -> ResolvedLayout {
        ResolvedLayout {
            left: self.left.resolve(width, height),
            right: self.right.resolve(width, height),
            sample: self.sample.resolve(width, height),
        }
    }
}

impl Default for RegionLayout {
    fn default() -> Self {
        Self::TABLE_REMOVAL
    }
}

/// Layout resolved to pixel bounds for one image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedLayout {
    /// Lower-left target
    pub left: Region,
    /// Lower-right target
    pub right: Region,
    /// Sample strip
    pub sample: Region,
}

impl ResolvedLayout {
    /// Targets in paste order
    pub const fn targets(&self) -> [Region; 2] {
        [self.left, self.right]
    }

    /// True when the pixel lies inside either target
    pub const fn covers(&self, x: u32, y: u32) -> bool {
        self.left.contains(x, y) || self.right.contains(x, y)
    }
}
