//! rapid-wordcloud — word-frequency analysis and word cloud rendering.
//!
//! The crate turns plain text into a word cloud in four stages:
//!
//! 1. **Normalize** — lowercase, strip punctuation, collapse whitespace
//!    ([`nlp::normalize`]).
//! 2. **Tally** — count words, excluding stopwords ([`frequency`]).
//! 3. **Lay out** — greedily pack word sprites, sized by frequency, into a
//!    bounded canvas without overlap ([`layout`]).
//! 4. **Paint** — rasterize the placements to an RGBA image ([`render`]).
//!
//! [`WordCloud`] is the front door:
//!
//! ```no_run
//! use rapid_wordcloud::{CloudConfig, WordCloud};
//!
//! let cloud = WordCloud::new()
//!     .with_config(CloudConfig::default())
//!     .generate_from_text("hello world hello")?;
//! cloud.save("wordcloud.png".as_ref())?;
//! # Ok::<(), rapid_wordcloud::CloudError>(())
//! ```

pub mod cloud;
pub mod config;
pub mod error;
pub mod frequency;
pub mod layout;
pub mod nlp;
pub mod render;

pub use cloud::{CloudConfig, GeneratedCloud, WordCloud};
pub use error::CloudError;
pub use frequency::{FrequencyTable, WordCount};
pub use nlp::stopwords::StopwordFilter;
pub use nlp::tokenizer::Tokenizer;
