//! Word rasterization
//!
//! Turns a word into a greyscale coverage [`Sprite`] at a given pixel size
//! using `ab_glyph`: glyphs are positioned along a caret with kerning, each
//! outline is drawn into a tight bounding box, and the result can be rotated
//! a quarter turn for vertical placement.

use std::fs;
use std::path::Path;

use ab_glyph::{point, Font, FontVec, GlyphId, PxScale, ScaleFont};

use crate::error::CloudError;

/// Well-known font locations probed when no `font_path` is configured.
const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSans.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Load the configured font, or probe the system font locations.
pub fn load_font(path: Option<&Path>) -> Result<FontVec, CloudError> {
    if let Some(path) = path {
        let data = fs::read(path).map_err(|source| CloudError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        return FontVec::try_from_vec(data).map_err(|source| CloudError::FontInvalid {
            path: path.to_path_buf(),
            source,
        });
    }

    for candidate in FONT_CANDIDATES {
        if let Ok(data) = fs::read(candidate) {
            if let Ok(font) = FontVec::try_from_vec(data) {
                tracing::debug!(font = %candidate, "using system font");
                return Ok(font);
            }
        }
    }
    Err(CloudError::FontNotFound)
}

/// A rasterized word: row-major greyscale coverage, 0 = transparent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    pub width: u32,
    pub height: u32,
    pub coverage: Vec<u8>,
}

impl Sprite {
    /// Coverage value at `(x, y)`; out-of-bounds reads return 0.
    pub fn coverage_at(&self, x: u32, y: u32) -> u8 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        self.coverage[y as usize * self.width as usize + x as usize]
    }

    /// The sprite rotated a quarter turn clockwise.
    pub fn rotated(&self) -> Sprite {
        let (w, h) = (self.width as usize, self.height as usize);
        let mut coverage = vec![0u8; w * h];
        for y in 0..h {
            for x in 0..w {
                // (x, y) maps to (h - 1 - y, x) in the rotated sprite.
                coverage[x * h + (h - 1 - y)] = self.coverage[y * w + x];
            }
        }
        Sprite {
            width: self.height,
            height: self.width,
            coverage,
        }
    }
}

/// Rasterize `word` at `px` pixels into a tight coverage sprite.
///
/// Returns `None` when nothing drawable comes out of the font (no outlines,
/// or a degenerate bounding box at very small sizes).
pub fn shape_word(font: &FontVec, word: &str, px: f32) -> Option<Sprite> {
    if px <= 0.0 || word.is_empty() {
        return None;
    }

    let scale = PxScale::from(px);
    let scaled = font.as_scaled(scale);

    let mut caret = 0.0f32;
    let mut prev: Option<GlyphId> = None;
    let mut outlined = Vec::new();
    for c in word.chars() {
        let id = scaled.glyph_id(c);
        if let Some(prev) = prev {
            caret += scaled.kern(prev, id);
        }
        let glyph = id.with_scale_and_position(scale, point(caret, scaled.ascent()));
        caret += scaled.h_advance(id);
        prev = Some(id);
        if let Some(outline) = font.outline_glyph(glyph) {
            outlined.push(outline);
        }
    }
    if outlined.is_empty() {
        return None;
    }

    let mut min_x = f32::MAX;
    let mut min_y = f32::MAX;
    let mut max_x = f32::MIN;
    let mut max_y = f32::MIN;
    for outline in &outlined {
        let bounds = outline.px_bounds();
        min_x = min_x.min(bounds.min.x);
        min_y = min_y.min(bounds.min.y);
        max_x = max_x.max(bounds.max.x);
        max_y = max_y.max(bounds.max.y);
    }

    let width = (max_x - min_x).ceil() as u32;
    let height = (max_y - min_y).ceil() as u32;
    if width == 0 || height == 0 {
        return None;
    }

    let mut coverage = vec![0u8; width as usize * height as usize];
    for outline in &outlined {
        let bounds = outline.px_bounds();
        let offset_x = (bounds.min.x - min_x).floor() as i64;
        let offset_y = (bounds.min.y - min_y).floor() as i64;
        outline.draw(|x, y, c| {
            let px = offset_x + i64::from(x);
            let py = offset_y + i64::from(y);
            if px < 0 || py < 0 || px >= i64::from(width) || py >= i64::from(height) {
                return;
            }
            let idx = py as usize * width as usize + px as usize;
            let value = (c * 255.0) as u8;
            if value > coverage[idx] {
                coverage[idx] = value;
            }
        });
    }

    Some(Sprite {
        width,
        height,
        coverage,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Font-dependent tests resolve a system font; absent one, they skip.
    fn system_font() -> Option<FontVec> {
        load_font(None).ok()
    }

    #[test]
    fn test_sprite_rotation_transposes() {
        let sprite = Sprite {
            width: 3,
            height: 2,
            coverage: vec![1, 2, 3, 4, 5, 6],
        };
        let rotated = sprite.rotated();

        assert_eq!(rotated.width, 2);
        assert_eq!(rotated.height, 3);
        // Row (1 2 3) becomes the right-hand column, top to bottom: 4 1 / 5 2 / 6 3.
        assert_eq!(rotated.coverage, vec![4, 1, 5, 2, 6, 3]);
    }

    #[test]
    fn test_sprite_rotation_roundtrip_dimensions() {
        let sprite = Sprite {
            width: 5,
            height: 3,
            coverage: vec![7; 15],
        };
        let back = sprite.rotated().rotated().rotated().rotated();
        assert_eq!(back, sprite);
    }

    #[test]
    fn test_coverage_at_out_of_bounds() {
        let sprite = Sprite {
            width: 2,
            height: 2,
            coverage: vec![9, 9, 9, 9],
        };
        assert_eq!(sprite.coverage_at(2, 0), 0);
        assert_eq!(sprite.coverage_at(0, 2), 0);
        assert_eq!(sprite.coverage_at(1, 1), 9);
    }

    #[test]
    fn test_shape_word_produces_coverage() {
        let Some(font) = system_font() else {
            eprintln!("no system font available; skipping");
            return;
        };

        let sprite = shape_word(&font, "hello", 32.0).expect("sprite");
        assert!(sprite.width > 0);
        assert!(sprite.height > 0);
        assert!(sprite.coverage.iter().any(|&c| c > 0));
    }

    #[test]
    fn test_shape_word_scales_with_size() {
        let Some(font) = system_font() else {
            eprintln!("no system font available; skipping");
            return;
        };

        let small = shape_word(&font, "word", 16.0).expect("sprite");
        let large = shape_word(&font, "word", 64.0).expect("sprite");
        assert!(large.width > small.width);
        assert!(large.height > small.height);
    }

    #[test]
    fn test_shape_word_degenerate_inputs() {
        let Some(font) = system_font() else {
            eprintln!("no system font available; skipping");
            return;
        };

        assert!(shape_word(&font, "", 32.0).is_none());
        assert!(shape_word(&font, "word", 0.0).is_none());
    }
}
