//! The core widget trait.

use clearedit_core::{Insets, LayoutDirection, Size};

use super::base::WidgetBase;
use super::events::WidgetEvent;

/// The core trait for all widgets.
///
/// Implementors hold a [`WidgetBase`] and route incoming events through
/// [`event`](Self::event). The provided methods delegate to the base.
pub trait Widget: Send + Sync {
    // =========================================================================
    // Required Methods
    // =========================================================================

    /// Get a reference to the widget's base.
    fn widget_base(&self) -> &WidgetBase;

    /// Get a mutable reference to the widget's base.
    fn widget_base_mut(&mut self) -> &mut WidgetBase;

    /// Handle an event.
    ///
    /// Returns `true` if the event was handled. Handlers that consume an
    /// event also mark it accepted.
    fn event(&mut self, event: &mut WidgetEvent) -> bool;

    // =========================================================================
    // Geometry
    // =========================================================================

    /// Get the widget's size.
    fn size(&self) -> Size {
        self.widget_base().size()
    }

    /// Get the widget's width.
    fn width(&self) -> f32 {
        self.widget_base().width()
    }

    /// Get the widget's height.
    fn height(&self) -> f32 {
        self.widget_base().height()
    }

    /// Get the content padding.
    fn padding(&self) -> Insets {
        self.widget_base().padding()
    }

    /// Get the layout direction.
    fn layout_direction(&self) -> LayoutDirection {
        self.widget_base().layout_direction()
    }

    // =========================================================================
    // State
    // =========================================================================

    /// Check if the widget is enabled.
    fn is_enabled(&self) -> bool {
        self.widget_base().is_enabled()
    }

    /// Check if the widget currently has focus.
    fn has_focus(&self) -> bool {
        self.widget_base().has_focus()
    }

    /// Check if the widget needs to be repainted.
    fn needs_repaint(&self) -> bool {
        self.widget_base().needs_repaint()
    }
}
