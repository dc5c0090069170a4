//! Mask regions
//!
//! A mask image constrains where words may be placed. White pixels
//! (luma 255) are excluded; words fill the non-white region. The canvas
//! takes the mask's dimensions.

use std::fs;
use std::path::Path;

use image::GrayImage;

use crate::error::CloudError;

/// A placement constraint loaded from a mask image.
#[derive(Debug, Clone)]
pub struct MaskRegion {
    pub width: u32,
    pub height: u32,
    blocked: Vec<bool>,
}

impl MaskRegion {
    /// Load a mask from an image file.
    pub fn from_path(path: &Path) -> Result<Self, CloudError> {
        let data = fs::read(path).map_err(|source| CloudError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let image = image::load_from_memory(&data)?;
        Ok(Self::from_luma(&image.to_luma8()))
    }

    /// Build a mask from a greyscale image; luma 255 blocks placement.
    pub fn from_luma(image: &GrayImage) -> Self {
        let (width, height) = image.dimensions();
        let blocked = image.pixels().map(|p| p.0[0] == 255).collect();
        Self {
            width,
            height,
            blocked,
        }
    }

    /// Row-major blocked bitmap, `width * height` entries.
    pub fn blocked_pixels(&self) -> &[bool] {
        &self.blocked
    }

    pub fn is_blocked(&self, x: u32, y: u32) -> bool {
        self.blocked[y as usize * self.width as usize + x as usize]
    }

    /// Pixels of the allowed region that touch the excluded region
    /// (4-neighborhood). Used for contour drawing.
    pub fn boundary(&self) -> Vec<(u32, u32)> {
        let mut result = Vec::new();
        for y in 0..self.height {
            for x in 0..self.width {
                if self.is_blocked(x, y) {
                    continue;
                }
                let touches_blocked = (x > 0 && self.is_blocked(x - 1, y))
                    || (x + 1 < self.width && self.is_blocked(x + 1, y))
                    || (y > 0 && self.is_blocked(x, y - 1))
                    || (y + 1 < self.height && self.is_blocked(x, y + 1));
                if touches_blocked {
                    result.push((x, y));
                }
            }
        }
        result
    }
}
