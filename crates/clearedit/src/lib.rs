//! ClearEdit - a single-line text field with a clear icon.
//!
//! The field shows a clear icon at its trailing edge while it has focus and
//! holds text. Tapping the icon clears the content, or passes the tap to a
//! caller-supplied handler. Hit testing follows the layout direction, so the
//! icon sits on the left under right-to-left layout.
//!
//! # Quick Start
//!
//! ```ignore
//! use clearedit::prelude::*;
//!
//! let config = ClearEditConfig::from_toml_str("max_length = 16")?;
//! let icons = IconSet::new(
//!     IconImage::square("clear_normal", 24),
//!     IconImage::square("clear_pressed", 24),
//! );
//!
//! let mut field = ClearEdit::from_config(&config, icons);
//! field.set_size(Size::new(240.0, 40.0));
//! field.set_focused(true);
//! field.set_text("hunter2");
//!
//! // Tap the icon.
//! field.touch_event(&TouchEvent::at(TouchAction::Down, 230.0, 20.0));
//! field.touch_event(&TouchEvent::at(TouchAction::Up, 230.0, 20.0));
//! assert!(field.text().is_empty());
//! ```
//!
//! # Logging
//!
//! The crate logs through `tracing` under the targets in
//! [`clearedit_core::logging::targets`]. It never installs a subscriber.

pub mod config;
pub mod error;
pub mod prelude;
pub mod widget;

pub use config::ClearEditConfig;
pub use error::{ConfigError, ConfigResult};
