//! Greedy word placement
//!
//! Words are placed in descending frequency order. The first word starts at
//! the maximum font size; each subsequent size interpolates on the count
//! ratio to the previous word (`relative_scaling`). When a word does not fit
//! anywhere, the engine retries the flipped orientation at the same size,
//! then shrinks by `font_step` until `min_font_size` is undercut, at which
//! point layout stops: every remaining word is at most as large.

use ab_glyph::FontVec;
use rand::rngs::StdRng;
use rand::Rng;

use crate::frequency::WordCount;
use crate::layout::glyphs::{shape_word, Sprite};
use crate::layout::mask::MaskRegion;
use crate::layout::occupancy::OccupancyGrid;

/// Placement parameters.
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Smallest font size tried before giving up on a word.
    pub min_font_size: f32,
    /// Font size of the most frequent word.
    pub max_font_size: f32,
    /// Size decrement when a word does not fit.
    pub font_step: f32,
    /// 0 = size by rank only, 1 = size proportional to count ratio.
    pub relative_scaling: f32,
    /// Probability of horizontal orientation; the rest rotate a quarter turn.
    pub prefer_horizontal: f32,
    /// Free pixels kept around each word.
    pub margin: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            min_font_size: 10.0,
            max_font_size: 150.0,
            font_step: 1.0,
            relative_scaling: 0.5,
            prefer_horizontal: 0.9,
            margin: 2,
        }
    }
}

/// A word with its final position, size and orientation on the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedWord {
    pub word: String,
    pub count: usize,
    pub font_size: f32,
    pub x: u32,
    pub y: u32,
    pub rotated: bool,
}

/// Greedy placement engine.
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    config: LayoutConfig,
}

impl LayoutEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: LayoutConfig) -> Self {
        Self { config }
    }

    /// Place `entries` (descending count order) on a `width x height` canvas.
    ///
    /// Returns the words that found room, in placement order. Placements
    /// never overlap each other, the blocked mask region, or the canvas
    /// bounds.
    pub fn layout(
        &self,
        font: &FontVec,
        entries: &[WordCount],
        width: u32,
        height: u32,
        mask: Option<&MaskRegion>,
        rng: &mut StdRng,
    ) -> Vec<PlacedWord> {
        let mut grid = match mask {
            Some(mask) => OccupancyGrid::with_blocked(width, height, mask.blocked_pixels()),
            None => OccupancyGrid::new(width, height),
        };

        let margin = self.config.margin;
        let rotate_chance = f64::from((1.0 - self.config.prefer_horizontal).clamp(0.0, 1.0));

        let mut placements = Vec::new();
        let mut font_size = self.config.max_font_size.min(height as f32);
        let mut last_count: Option<usize> = None;

        'words: for entry in entries {
            if let Some(last) = last_count {
                let ratio = entry.count as f32 / last as f32;
                font_size *=
                    self.config.relative_scaling * ratio + (1.0 - self.config.relative_scaling);
            }
            last_count = Some(entry.count);

            let mut rotated = rng.gen_bool(rotate_chance);
            let mut position: Option<(u32, u32, Sprite)> = None;

            while font_size >= self.config.min_font_size {
                let Some(sprite) = oriented_sprite(font, &entry.word, font_size, rotated) else {
                    tracing::debug!(word = %entry.word, "nothing drawable, skipping");
                    continue 'words;
                };
                if let Some((x, y)) = pick_opening(&grid, &sprite, margin, rng) {
                    position = Some((x, y, sprite));
                    break;
                }
                // Same size, other orientation, before shrinking.
                if let Some(flipped) = oriented_sprite(font, &entry.word, font_size, !rotated) {
                    if let Some((x, y)) = pick_opening(&grid, &flipped, margin, rng) {
                        rotated = !rotated;
                        position = Some((x, y, flipped));
                        break;
                    }
                }
                font_size -= self.config.font_step;
            }

            let Some((slot_x, slot_y, sprite)) = position else {
                tracing::debug!(word = %entry.word, "no room left, stopping layout");
                break;
            };

            let x = slot_x + margin / 2;
            let y = slot_y + margin / 2;
            grid.stamp(x, y, &sprite);
            placements.push(PlacedWord {
                word: entry.word.clone(),
                count: entry.count,
                font_size,
                x,
                y,
                rotated,
            });
        }

        placements
    }
}

fn oriented_sprite(font: &FontVec, word: &str, px: f32, rotated: bool) -> Option<Sprite> {
    let sprite = shape_word(font, word, px)?;
    Some(if rotated { sprite.rotated() } else { sprite })
}

/// Random free slot for the sprite plus its margin, if any exists.
fn pick_opening(
    grid: &OccupancyGrid,
    sprite: &Sprite,
    margin: u32,
    rng: &mut StdRng,
) -> Option<(u32, u32)> {
    let openings = grid.openings(sprite.width + margin, sprite.height + margin);
    if openings.is_empty() {
        None
    } else {
        Some(openings[rng.gen_range(0..openings.len())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::glyphs::load_font;
    use rand::SeedableRng;

    fn system_font() -> Option<FontVec> {
        load_font(None).ok()
    }

    fn entries(pairs: &[(&str, usize)]) -> Vec<WordCount> {
        pairs
            .iter()
            .map(|(word, count)| WordCount {
                word: (*word).to_string(),
                count: *count,
            })
            .collect()
    }

    fn small_config() -> LayoutConfig {
        LayoutConfig {
            min_font_size: 6.0,
            max_font_size: 40.0,
            ..LayoutConfig::default()
        }
    }

    #[test]
    fn test_layout_places_words() {
        let Some(font) = system_font() else {
            eprintln!("no system font available; skipping");
            return;
        };
        let engine = LayoutEngine::with_config(small_config());
        let mut rng = StdRng::seed_from_u64(7);

        let words = entries(&[("alpha", 5), ("beta", 3), ("gamma", 2)]);
        let placements = engine.layout(&font, &words, 300, 200, None, &mut rng);

        assert!(!placements.is_empty());
        assert_eq!(placements[0].word, "alpha");
    }

    #[test]
    fn test_font_sizes_follow_frequency() {
        let Some(font) = system_font() else {
            eprintln!("no system font available; skipping");
            return;
        };
        let engine = LayoutEngine::with_config(small_config());
        let mut rng = StdRng::seed_from_u64(1);

        let words = entries(&[("first", 10), ("second", 5), ("third", 1)]);
        let placements = engine.layout(&font, &words, 400, 300, None, &mut rng);

        for pair in placements.windows(2) {
            assert!(
                pair[0].font_size >= pair[1].font_size,
                "font sizes must not grow as counts fall"
            );
        }
    }

    #[test]
    fn test_placements_do_not_overlap() {
        let Some(font) = system_font() else {
            eprintln!("no system font available; skipping");
            return;
        };
        let engine = LayoutEngine::with_config(small_config());
        let mut rng = StdRng::seed_from_u64(42);

        let words = entries(&[
            ("one", 8),
            ("two", 6),
            ("three", 5),
            ("four", 4),
            ("five", 3),
            ("six", 2),
        ]);
        let (width, height) = (300u32, 200u32);
        let placements = engine.layout(&font, &words, width, height, None, &mut rng);
        assert!(placements.len() >= 2);

        // Re-rasterize every placement and count per-pixel coverage.
        let mut hits = vec![0u8; width as usize * height as usize];
        for placement in &placements {
            let sprite = oriented_sprite(&font, &placement.word, placement.font_size, placement.rotated)
                .expect("sprite");
            for sy in 0..sprite.height {
                for sx in 0..sprite.width {
                    if sprite.coverage_at(sx, sy) == 0 {
                        continue;
                    }
                    let x = placement.x + sx;
                    let y = placement.y + sy;
                    assert!(x < width && y < height, "placement leaves the canvas");
                    hits[y as usize * width as usize + x as usize] += 1;
                }
            }
        }
        assert!(
            hits.iter().all(|&h| h <= 1),
            "two words share at least one pixel"
        );
    }

    #[test]
    fn test_layout_respects_mask() {
        let Some(font) = system_font() else {
            eprintln!("no system font available; skipping");
            return;
        };
        use image::{GrayImage, Luma};

        // Left half white (blocked), right half dark (allowed).
        let mut image = GrayImage::from_pixel(200, 100, Luma([0]));
        for y in 0..100 {
            for x in 0..100 {
                image.put_pixel(x, y, Luma([255]));
            }
        }
        let mask = MaskRegion::from_luma(&image);

        let engine = LayoutEngine::with_config(LayoutConfig {
            min_font_size: 6.0,
            max_font_size: 24.0,
            ..LayoutConfig::default()
        });
        let mut rng = StdRng::seed_from_u64(3);
        let words = entries(&[("masked", 4), ("words", 2)]);
        let placements = engine.layout(&font, &words, 200, 100, Some(&mask), &mut rng);

        assert!(!placements.is_empty());
        for placement in &placements {
            assert!(placement.x >= 100, "word placed inside the blocked half");
        }
    }

    #[test]
    fn test_layout_empty_entries() {
        let Some(font) = system_font() else {
            eprintln!("no system font available; skipping");
            return;
        };
        let engine = LayoutEngine::new();
        let mut rng = StdRng::seed_from_u64(0);
        assert!(engine.layout(&font, &[], 100, 100, None, &mut rng).is_empty());
    }

    #[test]
    fn test_layout_seeded_determinism() {
        let Some(font) = system_font() else {
            eprintln!("no system font available; skipping");
            return;
        };
        let engine = LayoutEngine::with_config(small_config());
        let words = entries(&[("seeded", 4), ("layout", 2), ("run", 1)]);

        let mut rng_a = StdRng::seed_from_u64(99);
        let mut rng_b = StdRng::seed_from_u64(99);
        let a = engine.layout(&font, &words, 250, 150, None, &mut rng_a);
        let b = engine.layout(&font, &words, 250, 150, None, &mut rng_b);
        assert_eq!(a, b);
    }
}
