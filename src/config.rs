//! Sheet configuration loaded from JSON.
//!
//! Every key is optional; missing ones keep their defaults:
//!
//! ```json
//! { "geometry": { "tagWidthMm": 40 }, "fontBounds": { "minMm": 1.5 } }
//! ```

use crate::error::{Error, Result};
use crate::types::TagSheetConfig;
use std::fs;
use std::path::Path;

impl TagSheetConfig {
    /// Parse a config from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        let config: TagSheetConfig = serde_json::from_str(text).map_err(|e| Error::Config {
            message: e.to_string(),
        })?;
        let bounds = &config.font_bounds;
        let finite = bounds.min_mm.is_finite() && bounds.max_mm.is_finite();
        if !(finite && bounds.min_mm <= bounds.max_mm) {
            return Err(Error::Config {
                message: format!(
                    "font bounds must be finite with minMm <= maxMm (got {} / {})",
                    bounds.min_mm, bounds.max_mm
                ),
            });
        }
        Ok(config)
    }

    /// Read and parse a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let config = Self::from_json(&text)?;
        tracing::debug!(path = %path.display(), ?config, "loaded sheet config");
        Ok(config)
    }
}
