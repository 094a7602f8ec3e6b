//! Decides whether the clear icon is shown.

use tracing::debug;

use clearedit_core::logging::targets;

use super::decoration::{IconDecoration, IconVariant};
use crate::widget::widgets::LineEdit;

/// Result of a visibility update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityChange {
    /// The icon was attached.
    Shown,
    /// The icon was removed.
    Hidden,
    /// Nothing changed.
    Unchanged,
}

/// Tracks the `deletable` flag: true exactly while the clear icon is attached.
///
/// Updates attach or detach only on transitions, so repeated calls with the
/// same inputs do not touch the field.
#[derive(Debug, Default)]
pub struct VisibilityController {
    deletable: bool,
}

impl VisibilityController {
    /// Create a controller with the icon hidden.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the clear icon is currently shown.
    pub fn is_deletable(&self) -> bool {
        self.deletable
    }

    /// Re-evaluate visibility for the field's content and `focused`.
    pub fn update(
        &mut self,
        focused: bool,
        field: &mut LineEdit,
        decoration: &mut IconDecoration,
    ) -> VisibilityChange {
        let change = if field.is_empty() {
            // Always clear the slot; a pressed icon may linger from a gesture.
            let was_attached = self.deletable || decoration.attached().is_attached();
            decoration.detach(field);
            self.deletable = false;
            if was_attached {
                VisibilityChange::Hidden
            } else {
                VisibilityChange::Unchanged
            }
        } else if focused && !self.deletable {
            if decoration.attach(IconVariant::Normal, field) {
                self.deletable = true;
                VisibilityChange::Shown
            } else {
                VisibilityChange::Unchanged
            }
        } else if !focused && self.deletable {
            decoration.detach(field);
            self.deletable = false;
            VisibilityChange::Hidden
        } else {
            VisibilityChange::Unchanged
        };

        if change != VisibilityChange::Unchanged {
            debug!(
                target: targets::VISIBILITY,
                ?change,
                focused,
                width = decoration.width(),
                "clear icon visibility changed"
            );
        }
        change
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::{IconImage, Widget};
    use crate::widget::widgets::clear_edit::IconSet;

    fn setup(text: &str) -> (VisibilityController, LineEdit, IconDecoration) {
        let decoration = IconDecoration::new(IconSet::new(
            IconImage::square("normal", 24),
            IconImage::square("pressed", 24),
        ));
        (VisibilityController::new(), LineEdit::with_text(text), decoration)
    }

    #[test]
    fn test_shown_when_focused_with_content() {
        let (mut vis, mut field, mut deco) = setup("abc");
        assert_eq!(vis.update(true, &mut field, &mut deco), VisibilityChange::Shown);
        assert!(vis.is_deletable());
        assert_eq!(deco.attached(), IconVariant::Normal);
    }

    #[test]
    fn test_repeated_update_is_noop() {
        let (mut vis, mut field, mut deco) = setup("abc");
        vis.update(true, &mut field, &mut deco);
        field.widget_base_mut().clear_repaint_flag();
        assert_eq!(vis.update(true, &mut field, &mut deco), VisibilityChange::Unchanged);
        assert!(!field.needs_repaint());
    }

    #[test]
    fn test_hidden_on_focus_loss() {
        let (mut vis, mut field, mut deco) = setup("abc");
        vis.update(true, &mut field, &mut deco);
        assert_eq!(vis.update(false, &mut field, &mut deco), VisibilityChange::Hidden);
        assert!(!vis.is_deletable());
        assert!(field.trailing_decoration().is_none());
    }

    #[test]
    fn test_empty_content_hides_regardless_of_focus() {
        let (mut vis, mut field, mut deco) = setup("abc");
        vis.update(true, &mut field, &mut deco);
        field.clear();
        assert_eq!(vis.update(true, &mut field, &mut deco), VisibilityChange::Hidden);
        assert!(!vis.is_deletable());
        assert_eq!(vis.update(true, &mut field, &mut deco), VisibilityChange::Unchanged);
    }

    #[test]
    fn test_unfocused_field_stays_hidden() {
        let (mut vis, mut field, mut deco) = setup("abc");
        assert_eq!(vis.update(false, &mut field, &mut deco), VisibilityChange::Unchanged);
        assert!(!vis.is_deletable());
    }

    #[test]
    fn test_missing_icon_never_deletable() {
        let mut vis = VisibilityController::new();
        let mut field = LineEdit::with_text("abc");
        let mut deco = IconDecoration::new(IconSet::none());
        assert_eq!(vis.update(true, &mut field, &mut deco), VisibilityChange::Unchanged);
        assert!(!vis.is_deletable());
    }
}
