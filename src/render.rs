//! Rasterization of placed words
//!
//! The renderer paints layout output onto an RGBA canvas: background fill,
//! optional mask contour, then each word re-rasterized at `scale` times the
//! layout resolution with a palette color.

use ab_glyph::FontVec;
use image::{Rgba, RgbaImage};
use rand::rngs::StdRng;
use rand::Rng;

use crate::error::CloudError;
use crate::layout::engine::PlacedWord;
use crate::layout::glyphs::shape_word;
use crate::layout::mask::MaskRegion;

/// Word colors used when no custom palette is configured.
pub const DEFAULT_PALETTE: [&str; 5] = ["#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd"];

/// Parse a CSS color string ("white", "#1f77b4") into RGBA bytes.
pub fn parse_color(value: &str) -> Result<[u8; 4], CloudError> {
    csscolorparser::parse(value)
        .map(|color| color.to_rgba8())
        .map_err(|source| CloudError::InvalidColor {
            value: value.to_string(),
            source,
        })
}

/// Canvas painter for layout output.
#[derive(Debug, Clone)]
pub struct Renderer {
    /// Background color (CSS color string).
    pub background: String,
    /// Word colors, picked at random per word.
    pub palette: Vec<String>,
    /// Resolution multiplier over the layout canvas.
    pub scale: u32,
    /// Mask outline width in layout pixels; 0 disables the contour.
    pub contour_width: u32,
    /// Mask outline color.
    pub contour_color: String,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            background: "white".to_string(),
            palette: DEFAULT_PALETTE.iter().map(|s| s.to_string()).collect(),
            scale: 3,
            contour_width: 0,
            contour_color: "black".to_string(),
        }
    }
}

impl Renderer {
    /// Paint `placements` from a `width x height` layout onto a fresh canvas
    /// of `width * scale x height * scale` pixels.
    pub fn paint(
        &self,
        font: &FontVec,
        placements: &[PlacedWord],
        width: u32,
        height: u32,
        mask: Option<&MaskRegion>,
        rng: &mut StdRng,
    ) -> Result<RgbaImage, CloudError> {
        let scale = self.scale.max(1);
        let background = parse_color(&self.background)?;
        let palette: Vec<[u8; 4]> = self
            .palette
            .iter()
            .map(|color| parse_color(color))
            .collect::<Result<_, _>>()?;

        let mut canvas = RgbaImage::from_pixel(width * scale, height * scale, Rgba(background));

        if let Some(mask) = mask {
            if self.contour_width > 0 {
                self.draw_contour(&mut canvas, mask, scale)?;
            }
        }

        for placement in placements {
            let color = if palette.is_empty() {
                [0, 0, 0, 255]
            } else {
                palette[rng.gen_range(0..palette.len())]
            };
            let Some(mut sprite) =
                shape_word(font, &placement.word, placement.font_size * scale as f32)
            else {
                continue;
            };
            if placement.rotated {
                sprite = sprite.rotated();
            }
            blit(
                &mut canvas,
                &sprite,
                placement.x * scale,
                placement.y * scale,
                color,
            );
        }

        Ok(canvas)
    }

    /// Trace the mask boundary as filled discs along each boundary pixel.
    fn draw_contour(
        &self,
        canvas: &mut RgbaImage,
        mask: &MaskRegion,
        scale: u32,
    ) -> Result<(), CloudError> {
        let color = parse_color(&self.contour_color)?;
        let radius = i64::from((self.contour_width * scale) / 2).max(1);
        for (bx, by) in mask.boundary() {
            let center_x = i64::from(bx * scale + scale / 2);
            let center_y = i64::from(by * scale + scale / 2);
            for dy in -radius..=radius {
                for dx in -radius..=radius {
                    if dx * dx + dy * dy > radius * radius {
                        continue;
                    }
                    let (x, y) = (center_x + dx, center_y + dy);
                    if x >= 0
                        && y >= 0
                        && (x as u32) < canvas.width()
                        && (y as u32) < canvas.height()
                    {
                        canvas.put_pixel(x as u32, y as u32, Rgba(color));
                    }
                }
            }
        }
        Ok(())
    }
}

/// Alpha-blend a coverage sprite onto the canvas at `(offset_x, offset_y)`.
fn blit(
    canvas: &mut RgbaImage,
    sprite: &crate::layout::glyphs::Sprite,
    offset_x: u32,
    offset_y: u32,
    color: [u8; 4],
) {
    for sy in 0..sprite.height {
        for sx in 0..sprite.width {
            let coverage = sprite.coverage_at(sx, sy);
            if coverage == 0 {
                continue;
            }
            let (x, y) = (offset_x + sx, offset_y + sy);
            if x < canvas.width() && y < canvas.height() {
                let pixel = canvas.get_pixel_mut(x, y);
                *pixel = blend(*pixel, color, coverage);
            }
        }
    }
}

fn blend(dst: Rgba<u8>, color: [u8; 4], coverage: u8) -> Rgba<u8> {
    let alpha = u16::from(coverage);
    let inverse = 255 - alpha;
    let channel = |c: u8, d: u8| ((u16::from(c) * alpha + u16::from(d) * inverse) / 255) as u8;
    Rgba([
        channel(color[0], dst[0]),
        channel(color[1], dst[1]),
        channel(color[2], dst[2]),
        255,
    ])
}
