//! Cloud generation front door
//!
//! [`WordCloud`] ties the pipeline together: tokenize, tally, lay out,
//! paint. [`CloudConfig`] mirrors the knobs of the classic word-cloud
//! tools; [`GeneratedCloud`] carries the image together with the frequency
//! table and placements so callers can report on what was drawn.

use std::path::{Path, PathBuf};

use image::RgbaImage;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::error::CloudError;
use crate::frequency::FrequencyTable;
use crate::layout::engine::{LayoutConfig, LayoutEngine, PlacedWord};
use crate::layout::glyphs::load_font;
use crate::layout::mask::MaskRegion;
use crate::nlp::tokenizer::Tokenizer;
use crate::render::{Renderer, DEFAULT_PALETTE};

/// Cloud generation settings.
///
/// All fields have serde defaults, so a configuration file only needs to
/// name the knobs it changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CloudConfig {
    /// Canvas width in layout pixels (ignored when a mask is set).
    pub width: u32,
    /// Canvas height in layout pixels (ignored when a mask is set).
    pub height: u32,
    /// Background color (CSS color string).
    pub background_color: String,
    /// Cap on the number of distinct words drawn.
    pub max_words: usize,
    /// Smallest font size tried before a word is given up on.
    pub min_font_size: f32,
    /// Font size of the most frequent word.
    pub max_font_size: f32,
    /// Size decrement when a word does not fit.
    pub font_step: f32,
    /// 0 = size by rank only, 1 = size proportional to count ratio.
    pub relative_scaling: f32,
    /// Probability of horizontal orientation.
    pub prefer_horizontal: f32,
    /// Output resolution multiplier.
    pub scale: u32,
    /// Free pixels kept around each word.
    pub margin: u32,
    /// Font file to use; system fonts are probed when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_path: Option<PathBuf>,
    /// Mask image constraining placement; white pixels are excluded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mask_path: Option<PathBuf>,
    /// Mask outline width in layout pixels; 0 disables the contour.
    pub contour_width: u32,
    /// Mask outline color.
    pub contour_color: String,
    /// Word colors, picked at random per word.
    pub palette: Vec<String>,
    /// RNG seed; unseeded runs use entropy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for CloudConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 800,
            background_color: "white".to_string(),
            max_words: 200,
            min_font_size: 10.0,
            max_font_size: 150.0,
            font_step: 1.0,
            relative_scaling: 0.5,
            prefer_horizontal: 0.9,
            scale: 3,
            margin: 2,
            font_path: None,
            mask_path: None,
            contour_width: 0,
            contour_color: "black".to_string(),
            palette: DEFAULT_PALETTE.iter().map(|s| s.to_string()).collect(),
            seed: None,
        }
    }
}

/// The result of a generation run.
#[derive(Debug, Clone)]
pub struct GeneratedCloud {
    /// The rendered image, `width * scale x height * scale` pixels.
    pub image: RgbaImage,
    /// Words that found room on the canvas, in placement order.
    pub placements: Vec<PlacedWord>,
    /// The full frequency table behind the cloud.
    pub frequencies: FrequencyTable,
}

impl GeneratedCloud {
    /// Write the image to `path` (format chosen by extension).
    pub fn save(&self, path: &Path) -> Result<(), CloudError> {
        self.image.save(path)?;
        Ok(())
    }
}

/// Word cloud generator.
#[derive(Debug, Clone, Default)]
pub struct WordCloud {
    tokenizer: Tokenizer,
    config: CloudConfig,
}

impl WordCloud {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the tokenizer.
    pub fn with_tokenizer(mut self, tokenizer: Tokenizer) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: CloudConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &CloudConfig {
        &self.config
    }

    /// Generate a cloud from raw text.
    ///
    /// Stages: tokenize, tally, lay out, paint. Fails with
    /// [`CloudError::EmptyVocabulary`] when nothing countable remains after
    /// normalization and stopword filtering.
    pub fn generate_from_text(&self, text: &str) -> Result<GeneratedCloud, CloudError> {
        let tokens = self.tokenizer.tokenize(text);
        let frequencies = FrequencyTable::from_tokens(tokens);
        if frequencies.is_empty() {
            return Err(CloudError::EmptyVocabulary);
        }
        tracing::info!(
            tokens = frequencies.total(),
            distinct = frequencies.len(),
            "tallied input"
        );

        let entries = frequencies.top_n(self.config.max_words);
        let font = load_font(self.config.font_path.as_deref())?;
        let mask = match &self.config.mask_path {
            Some(path) => Some(MaskRegion::from_path(path)?),
            None => None,
        };
        // A mask dictates the canvas dimensions, as the classic tools do.
        let (width, height) = match &mask {
            Some(mask) => (mask.width, mask.height),
            None => (self.config.width, self.config.height),
        };

        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let engine = LayoutEngine::with_config(LayoutConfig {
            min_font_size: self.config.min_font_size,
            max_font_size: self.config.max_font_size,
            font_step: self.config.font_step,
            relative_scaling: self.config.relative_scaling,
            prefer_horizontal: self.config.prefer_horizontal,
            margin: self.config.margin,
        });
        let placements = engine.layout(&font, &entries, width, height, mask.as_ref(), &mut rng);
        tracing::info!(
            placed = placements.len(),
            requested = entries.len(),
            "layout finished"
        );

        let renderer = Renderer {
            background: self.config.background_color.clone(),
            palette: self.config.palette.clone(),
            scale: self.config.scale,
            contour_width: self.config.contour_width,
            contour_color: self.config.contour_color.clone(),
        };
        let image = renderer.paint(&font, &placements, width, height, mask.as_ref(), &mut rng)?;

        Ok(GeneratedCloud {
            image,
            placements,
            frequencies,
        })
    }
}
