//! Construction-time configuration for [`ClearEdit`](crate::widget::widgets::ClearEdit).
//!
//! Configuration is plain data read from TOML:
//!
//! ```toml
//! quick_delete = true
//! decoration_padding = 8.0
//! max_length = 16
//! ```
//!
//! Every key is optional. Icon images are not part of the file; they are
//! supplied separately as an [`IconSet`](crate::widget::widgets::IconSet).

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use clearedit_core::logging::targets;

use crate::error::{ConfigError, ConfigResult};

/// Default gap between the text and the clear icon, in pixels.
pub const DEFAULT_DECORATION_PADDING: f32 = 8.0;

/// Configuration for a clearable text field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClearEditConfig {
    /// Show the clear icon and intercept the delete key.
    pub quick_delete: bool,
    /// Gap between the text and the clear icon.
    pub decoration_padding: f32,
    /// Maximum content length in characters; 0 means unlimited.
    pub max_length: usize,
}

impl Default for ClearEditConfig {
    fn default() -> Self {
        Self {
            quick_delete: true,
            decoration_padding: DEFAULT_DECORATION_PADDING,
            max_length: 0,
        }
    }
}

impl ClearEditConfig {
    /// Parse and validate a configuration from TOML text.
    pub fn from_toml_str(s: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
        let config = Self::from_toml_str(&content)?;
        debug!(target: targets::CONFIG, path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Serialize to pretty-printed TOML.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check values that parse but cannot be used.
    pub fn validate(&self) -> ConfigResult<()> {
        if !self.decoration_padding.is_finite() {
            return Err(ConfigError::invalid_value(
                "decoration_padding",
                "must be a finite number",
            ));
        }
        if self.decoration_padding < 0.0 {
            return Err(ConfigError::invalid_value(
                "decoration_padding",
                format!("must not be negative, got {}", self.decoration_padding),
            ));
        }
        Ok(())
    }

    /// The length limit, or `None` when unlimited.
    pub fn length_limit(&self) -> Option<usize> {
        (self.max_length > 0).then_some(self.max_length)
    }

    /// Set quick-delete mode using builder pattern.
    pub fn with_quick_delete(mut self, quick_delete: bool) -> Self {
        self.quick_delete = quick_delete;
        self
    }

    /// Set the decoration padding using builder pattern.
    pub fn with_decoration_padding(mut self, padding: f32) -> Self {
        self.decoration_padding = padding;
        self
    }

    /// Set the maximum length using builder pattern.
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }
}
