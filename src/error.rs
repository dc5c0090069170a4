//! Error types for cloud generation.
//!
//! The library reports failures through [`CloudError`]; the binary wraps
//! them with `anyhow` context at the console boundary.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while generating a word cloud.
#[derive(Debug, Error)]
pub enum CloudError {
    /// The input text produced no countable words (empty, or all stopwords).
    #[error("input text contains no countable words")]
    EmptyVocabulary,

    /// No font was configured and none of the well-known system fonts exist.
    #[error("no usable font found; set `font_path` or install the DejaVu or Liberation fonts")]
    FontNotFound,

    /// A font file existed but could not be parsed.
    #[error("failed to parse font {}", .path.display())]
    FontInvalid {
        path: PathBuf,
        #[source]
        source: ab_glyph::InvalidFont,
    },

    /// A configured color string was not a recognizable CSS color.
    #[error("invalid color {value:?}")]
    InvalidColor {
        value: String,
        #[source]
        source: csscolorparser::ParseColorError,
    },

    /// File-level I/O failure, with the offending path attached.
    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Decode or encode failure from the image codec layer.
    #[error(transparent)]
    Image(#[from] image::ImageError),
}
