//! Optional configuration overlay
//!
//! The binary takes no flags or environment variables. Settings come from
//! an optional `wordcloud.toml` next to the input file; a missing file
//! means defaults, and an unparseable file is reported and ignored.

use std::fs;
use std::path::Path;

use crate::cloud::CloudConfig;

/// Name of the optional configuration file looked up in the working directory.
pub const CONFIG_FILENAME: &str = "wordcloud.toml";

/// Load `wordcloud.toml` from `dir`, falling back to defaults.
pub fn load_from_dir(dir: &Path) -> CloudConfig {
    let path = dir.join(CONFIG_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(_) => return CloudConfig::default(),
    };
    match toml::from_str(&content) {
        Ok(config) => {
            tracing::debug!(path = %path.display(), "loaded configuration");
            config
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "ignoring unparseable configuration");
            CloudConfig::default()
        }
    }
}
