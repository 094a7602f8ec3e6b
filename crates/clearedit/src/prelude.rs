//! Convenient re-exports for building clearable text fields.
//!
//! ```ignore
//! use clearedit::prelude::*;
//! ```

pub use clearedit_core::{Insets, LayoutDirection, Point, Signal, Size};

pub use crate::config::ClearEditConfig;
pub use crate::error::{ConfigError, ConfigResult};
pub use crate::widget::widgets::{
    ClearEdit, IconSet, IconVariant, LineEdit, PasswordDeletedHandler, TextDeletedHandler,
};
pub use crate::widget::{
    IconImage, Key, KeyPressEvent, KeyboardModifiers, TouchAction, TouchEvent, Widget,
    WidgetEvent,
};
