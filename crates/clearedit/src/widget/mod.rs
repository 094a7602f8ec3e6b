//! Widget system for ClearEdit.
//!
//! This module provides the widget architecture the text fields are built on:
//!
//! - [`Widget`] trait: The base trait for all widgets
//! - [`WidgetBase`]: Common implementation for widget functionality
//! - Widget events for key, touch and focus input
//! - [`IconImage`] and [`Decoration`] for icons drawn beside text
//!
//! # Event Handling
//!
//! Events are delivered through [`Widget::event`]. A widget that handles an
//! event returns `true` and marks it accepted; unaccepted input events
//! propagate to the parent.

mod base;
mod events;
mod icon;
mod traits;
pub mod widgets;

pub use base::{FocusPolicy, WidgetBase};
pub use events::{
    EventBase, FocusInEvent, FocusOutEvent, FocusReason, Key, KeyPressEvent, KeyboardModifiers,
    ResizeEvent, TouchAction, TouchEvent, WidgetEvent,
};
pub use icon::{Decoration, IconImage};
pub use traits::Widget;
