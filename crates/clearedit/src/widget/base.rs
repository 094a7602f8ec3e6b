//! Widget base implementation.
//!
//! This module provides `WidgetBase`, the common implementation details
//! for all widgets. It handles size, padding, layout direction, enabled and
//! focus state, and the repaint flag.

use clearedit_core::{Insets, LayoutDirection, Property, Signal, Size};

/// Focus policy determines how a widget can receive keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPolicy {
    /// The widget does not accept focus.
    #[default]
    NoFocus,
    /// The widget accepts focus by touch only.
    TouchFocus,
    /// The widget accepts focus by tabbing and by touch.
    StrongFocus,
}

/// The base implementation for all widgets.
///
/// Widget implementations include this as a field and delegate common
/// operations to it.
///
/// # Example
///
/// ```ignore
/// use clearedit::widget::{Widget, WidgetBase, WidgetEvent};
///
/// struct Badge {
///     base: WidgetBase,
/// }
///
/// impl Widget for Badge {
///     fn widget_base(&self) -> &WidgetBase { &self.base }
///     fn widget_base_mut(&mut self) -> &mut WidgetBase { &mut self.base }
///     fn event(&mut self, _event: &mut WidgetEvent) -> bool { false }
/// }
/// ```
pub struct WidgetBase {
    /// The widget's size.
    size: Size,

    /// Padding between the widget's edges and its content.
    padding: Insets,

    /// Direction text and decorations flow in.
    layout_direction: LayoutDirection,

    /// Whether the widget is enabled (can receive input).
    enabled: bool,

    /// How the widget accepts focus.
    focus_policy: FocusPolicy,

    /// Whether the widget currently has focus.
    focused: Property<bool>,

    /// Whether the widget needs to be repainted.
    needs_repaint: bool,

    /// Signal emitted when the size changes.
    pub size_changed: Signal<Size>,

    /// Signal emitted when focus is gained (`true`) or lost (`false`).
    pub focus_changed: Signal<bool>,
}

impl WidgetBase {
    /// Create a new widget base.
    pub fn new() -> Self {
        Self {
            size: Size::ZERO,
            padding: Insets::ZERO,
            layout_direction: LayoutDirection::default(),
            enabled: true,
            focus_policy: FocusPolicy::NoFocus,
            focused: Property::new(false),
            needs_repaint: true,
            size_changed: Signal::new(),
            focus_changed: Signal::new(),
        }
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// Get the widget's size.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Set the widget's size.
    pub fn set_size(&mut self, size: Size) {
        if self.size != size {
            self.size = size;
            self.update();
            self.size_changed.emit(size);
        }
    }

    /// Resize the widget.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.set_size(Size::new(width, height));
    }

    /// Get the widget's width.
    #[inline]
    pub fn width(&self) -> f32 {
        self.size.width
    }

    /// Get the widget's height.
    #[inline]
    pub fn height(&self) -> f32 {
        self.size.height
    }

    /// Get the content padding.
    pub fn padding(&self) -> Insets {
        self.padding
    }

    /// Set the content padding.
    pub fn set_padding(&mut self, padding: Insets) {
        if self.padding != padding {
            self.padding = padding;
            self.update();
        }
    }

    /// Get the layout direction.
    pub fn layout_direction(&self) -> LayoutDirection {
        self.layout_direction
    }

    /// Set the layout direction.
    pub fn set_layout_direction(&mut self, direction: LayoutDirection) {
        if self.layout_direction != direction {
            self.layout_direction = direction;
            self.update();
        }
    }

    // =========================================================================
    // Enabled State
    // =========================================================================

    /// Check if the widget is enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Set whether the widget is enabled.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            self.enabled = enabled;
            self.update();
        }
    }

    // =========================================================================
    // Focus
    // =========================================================================

    /// Get the focus policy.
    pub fn focus_policy(&self) -> FocusPolicy {
        self.focus_policy
    }

    /// Set the focus policy.
    pub fn set_focus_policy(&mut self, policy: FocusPolicy) {
        self.focus_policy = policy;
    }

    /// Check if the widget can receive focus.
    pub fn is_focusable(&self) -> bool {
        self.enabled && self.focus_policy != FocusPolicy::NoFocus
    }

    /// Check if the widget currently has focus.
    pub fn has_focus(&self) -> bool {
        self.focused.get()
    }

    /// Record a focus change.
    ///
    /// Returns `true` if the focus state actually changed.
    pub fn set_focused(&mut self, focused: bool) -> bool {
        if self.focused.set(focused) {
            self.update();
            self.focus_changed.emit(focused);
            true
        } else {
            false
        }
    }

    // =========================================================================
    // Repaint
    // =========================================================================

    /// Check if the widget needs to be repainted.
    pub fn needs_repaint(&self) -> bool {
        self.needs_repaint
    }

    /// Schedule a repaint.
    pub fn update(&mut self) {
        self.needs_repaint = true;
    }

    /// Clear the repaint flag after painting.
    pub fn clear_repaint_flag(&mut self) {
        self.needs_repaint = false;
    }
}

impl Default for WidgetBase {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_widget_base_defaults() {
        let base = WidgetBase::new();
        assert_eq!(base.size(), Size::ZERO);
        assert_eq!(base.padding(), Insets::ZERO);
        assert_eq!(base.layout_direction(), LayoutDirection::LeftToRight);
        assert!(base.is_enabled());
        assert!(!base.is_focusable());
        assert!(!base.has_focus());
        assert!(base.needs_repaint());
    }

    #[test]
    fn test_focus_change_is_transition_only() {
        let mut base = WidgetBase::new();
        let count = Arc::new(AtomicUsize::new(0));
        let c = count.clone();
        base.focus_changed.connect(move |_| {
            c.fetch_add(1, Ordering::SeqCst);
        });

        assert!(base.set_focused(true));
        assert!(!base.set_focused(true));
        assert!(base.set_focused(false));
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_resize_marks_for_repaint() {
        let mut base = WidgetBase::new();
        base.clear_repaint_flag();
        base.resize(200.0, 40.0);
        assert!(base.needs_repaint());
        assert_eq!(base.width(), 200.0);
        assert_eq!(base.height(), 40.0);
    }

    #[test]
    fn test_focusable_requires_policy_and_enabled() {
        let mut base = WidgetBase::new();
        base.set_focus_policy(FocusPolicy::StrongFocus);
        assert!(base.is_focusable());
        base.set_enabled(false);
        assert!(!base.is_focusable());
    }
}
