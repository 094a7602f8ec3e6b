//! Single-line text field with a clear icon.
//!
//! [`ClearEdit`] wraps a [`LineEdit`] and shows a clear icon at the trailing
//! edge while the field has focus and contains text. Tapping the icon clears
//! the field, or hands the tap to a registered handler first. In quick-delete
//! mode the delete key also notifies a "password deleted" listener.
//!
//! The pieces are split by concern:
//!
//! - [`IconDecoration`]: the two icon variants and the trailing slot
//! - [`VisibilityController`]: the `deletable` flag
//! - [`TouchGestureHandler`]: hit testing and the press/release sequence
//! - [`DeleteDispatcher`]: external handler or default clear
//! - [`KeyDispatcher`]: delete-key interception
//! - [`ContentWatcher`]: length-limit checks on every content change
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use clearedit::prelude::*;
//!
//! let icons = IconSet::new(
//!     IconImage::square("clear_normal", 24),
//!     IconImage::square("clear_pressed", 24),
//! );
//! let mut edit = ClearEdit::new(icons);
//! edit.set_size(Size::new(240.0, 40.0));
//! edit.set_focused(true);
//! edit.set_text("hello");
//! assert!(edit.is_deletable());
//!
//! edit.set_text_deleted_handler(Some(Arc::new(|| {
//!     println!("clear tapped");
//!     false
//! })));
//! ```

mod decoration;
mod dispatch;
mod gesture;
mod key;
mod visibility;
mod watcher;

pub use decoration::{IconDecoration, IconSet, IconVariant};
pub use dispatch::{DeleteDispatcher, DeleteOutcome, TextDeletedHandler};
pub use gesture::{GestureOutcome, GestureState, IconHitRegion, TouchGestureHandler};
pub use key::{DELETE_KEY, KeyDispatcher, PasswordDeletedHandler};
pub use visibility::{VisibilityChange, VisibilityController};
pub use watcher::ContentWatcher;

use tracing::debug;

use clearedit_core::logging::{span_names, targets};
use clearedit_core::{Insets, LayoutDirection, PerfSpan, Signal, Size};

use super::LineEdit;
use crate::config::ClearEditConfig;
use crate::widget::{KeyPressEvent, TouchEvent, Widget, WidgetBase, WidgetEvent};

/// A single-line text field with a clear icon.
///
/// # Signals
///
/// - `limit_reached`: Emitted with the configured maximum each time an edit
///   leaves the content at exactly that length
/// - `deletable_changed`: Emitted when the clear icon appears or disappears
///
/// Content edits should go through [`set_text`](Self::set_text),
/// [`insert_text`](Self::insert_text), [`clear_content`](Self::clear_content)
/// and the event methods. Edits made through [`line_edit_mut`](Self::line_edit_mut)
/// are picked up by the next of those calls or by
/// [`process_content_changes`](Self::process_content_changes).
pub struct ClearEdit {
    line_edit: LineEdit,
    decoration: IconDecoration,
    visibility: VisibilityController,
    gesture: TouchGestureHandler,
    deleter: DeleteDispatcher,
    keys: KeyDispatcher,

    /// Installed the first time quick-delete is enabled and kept afterwards.
    watcher: Option<ContentWatcher>,

    quick_delete: bool,
    decoration_padding: f32,
    max_length: usize,

    /// Signal emitted when an edit leaves the content at the maximum length.
    pub limit_reached: Signal<usize>,

    /// Signal emitted when the clear icon is shown (`true`) or hidden (`false`).
    pub deletable_changed: Signal<bool>,
}

impl ClearEdit {
    /// Create a field with the default configuration.
    pub fn new(icons: IconSet) -> Self {
        Self::from_config(&ClearEditConfig::default(), icons)
    }

    /// Create a field from a configuration and a set of icons.
    pub fn from_config(config: &ClearEditConfig, icons: IconSet) -> Self {
        let mut line_edit = LineEdit::new();
        line_edit.set_max_length(config.length_limit());

        let mut edit = Self {
            line_edit,
            decoration: IconDecoration::new(icons),
            visibility: VisibilityController::new(),
            gesture: TouchGestureHandler::new(),
            deleter: DeleteDispatcher::new(),
            keys: KeyDispatcher::new(),
            watcher: None,
            quick_delete: false,
            decoration_padding: config.decoration_padding,
            max_length: config.max_length,
            limit_reached: Signal::new(),
            deletable_changed: Signal::new(),
        };
        edit.set_quick_delete(config.quick_delete);
        edit
    }

    // =========================================================================
    // Quick-delete Mode
    // =========================================================================

    /// Whether quick-delete mode is enabled.
    pub fn is_quick_delete(&self) -> bool {
        self.quick_delete
    }

    /// Enable or disable quick-delete mode.
    ///
    /// Enabling installs the content watcher (once) and applies the decoration
    /// padding. Disabling leaves the watcher in place.
    pub fn set_quick_delete(&mut self, quick_delete: bool) {
        if self.quick_delete == quick_delete {
            return;
        }
        self.quick_delete = quick_delete;

        if quick_delete {
            if self.watcher.is_none() {
                self.watcher = Some(ContentWatcher::install(&self.line_edit, self.max_length));
            }
            self.line_edit.set_decoration_padding(self.decoration_padding);
        }
        debug!(target: targets::MODE, quick_delete, "quick-delete mode changed");
    }

    /// Register or remove the handler offered clear-icon taps.
    pub fn set_text_deleted_handler(&mut self, handler: Option<TextDeletedHandler>) {
        self.deleter.set_handler(handler);
    }

    /// Register or remove the listener notified on the delete key.
    pub fn set_password_deleted_handler(&mut self, listener: Option<PasswordDeletedHandler>) {
        self.keys.set_listener(listener);
    }

    // =========================================================================
    // Content
    // =========================================================================

    /// Get the current text.
    pub fn text(&self) -> &str {
        self.line_edit.text()
    }

    /// The configured maximum length (0 = unlimited).
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Replace the content, leaving the cursor at the end.
    pub fn set_text(&mut self, text: impl Into<String>) -> bool {
        let changed = self.line_edit.set_text(text);
        self.process_content_changes();
        changed
    }

    /// Insert text at the cursor.
    pub fn insert_text(&mut self, text: &str) -> bool {
        let changed = self.line_edit.insert_text(text);
        self.process_content_changes();
        changed
    }

    /// Remove all content and put the cursor at position 0.
    pub fn clear_content(&mut self) -> bool {
        let changed = self.line_edit.clear();
        self.line_edit.set_selection(0, 0);
        self.process_content_changes();
        changed
    }

    /// Handle content changes queued since the last call.
    ///
    /// Emits `limit_reached` once per change that landed on the limit, then
    /// re-evaluates icon visibility with the current focus.
    pub fn process_content_changes(&mut self) {
        let Some(hits) = self.watcher.as_ref().and_then(ContentWatcher::take_changes) else {
            return;
        };
        for _ in 0..hits {
            self.limit_reached.emit(self.max_length);
        }
        let focused = self.line_edit.has_focus();
        self.update_visibility(focused);
    }

    // =========================================================================
    // Focus and Geometry
    // =========================================================================

    /// Whether the field has focus.
    pub fn has_focus(&self) -> bool {
        self.line_edit.has_focus()
    }

    /// Record a focus change from the platform.
    ///
    /// Losing focus abandons any press on the icon.
    pub fn set_focused(&mut self, focused: bool) {
        self.line_edit.widget_base_mut().set_focused(focused);
        if !focused {
            self.gesture.reset();
        }
        if self.quick_delete {
            self.update_visibility(focused);
        }
    }

    /// Set the field size.
    pub fn set_size(&mut self, size: Size) {
        self.line_edit.widget_base_mut().set_size(size);
    }

    /// Set the content padding.
    pub fn set_padding(&mut self, padding: Insets) {
        self.line_edit.widget_base_mut().set_padding(padding);
    }

    /// Set the layout direction.
    pub fn set_layout_direction(&mut self, direction: LayoutDirection) {
        self.line_edit.widget_base_mut().set_layout_direction(direction);
    }

    // =========================================================================
    // Icon State
    // =========================================================================

    /// Which icon variant is attached.
    pub fn attached_variant(&self) -> IconVariant {
        self.decoration.attached()
    }

    /// Whether the clear icon is shown.
    pub fn is_deletable(&self) -> bool {
        self.visibility.is_deletable()
    }

    /// Whether a press on the icon is unresolved.
    pub fn is_press_active(&self) -> bool {
        self.gesture.is_press_active()
    }

    /// Width of the attached icon, or zero.
    pub fn decoration_width(&self) -> f32 {
        self.decoration.width()
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Handle a key press. Returns `true` if it was consumed.
    pub fn key_press(&mut self, event: &KeyPressEvent) -> bool {
        let handled = self.keys.dispatch(self.quick_delete, event, &mut self.line_edit);
        self.process_content_changes();
        handled
    }

    /// Handle a touch event. Returns `true` if the icon or the field consumed it.
    pub fn touch_event(&mut self, event: &TouchEvent) -> bool {
        let _span = PerfSpan::new(span_names::GESTURE);

        let state = GestureState {
            quick_delete: self.quick_delete,
            deletable: self.visibility.is_deletable(),
        };
        let outcome = self.gesture.handle(
            event,
            state,
            &mut self.line_edit,
            &mut self.decoration,
            &self.deleter,
        );
        let handled = match outcome {
            GestureOutcome::Consumed => true,
            GestureOutcome::PassThrough => self.line_edit.handle_touch(event),
        };
        self.process_content_changes();
        handled
    }

    // =========================================================================
    // Base Field
    // =========================================================================

    /// The wrapped text field.
    pub fn line_edit(&self) -> &LineEdit {
        &self.line_edit
    }

    /// The wrapped text field, mutably.
    pub fn line_edit_mut(&mut self) -> &mut LineEdit {
        &mut self.line_edit
    }

    fn update_visibility(&mut self, focused: bool) {
        match self
            .visibility
            .update(focused, &mut self.line_edit, &mut self.decoration)
        {
            VisibilityChange::Shown => self.deletable_changed.emit(true),
            VisibilityChange::Hidden => self.deletable_changed.emit(false),
            VisibilityChange::Unchanged => {}
        }
    }
}

impl Widget for ClearEdit {
    fn widget_base(&self) -> &WidgetBase {
        self.line_edit.widget_base()
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        self.line_edit.widget_base_mut()
    }

    fn event(&mut self, event: &mut WidgetEvent) -> bool {
        let handled = match event {
            WidgetEvent::KeyPress(e) => self.key_press(e),
            WidgetEvent::Touch(e) => self.touch_event(e),
            WidgetEvent::FocusIn(_) => {
                self.set_focused(true);
                true
            }
            WidgetEvent::FocusOut(_) => {
                self.set_focused(false);
                true
            }
            WidgetEvent::Resize(e) => {
                self.set_size(e.new_size);
                true
            }
        };
        if handled {
            event.accept();
        }
        handled
    }
}

static_assertions::assert_impl_all!(ClearEdit: Send, Sync);
