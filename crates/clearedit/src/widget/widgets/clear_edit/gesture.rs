//! Touch handling for the clear icon.
//!
//! The icon sits at the layout-trailing edge of the content area: the right
//! edge under left-to-right layout and the left edge under right-to-left. A
//! press that lands on the icon swaps in the pressed variant; the matching
//! release dispatches the delete.
//!
//! Dragging off the icon reverts the variant but keeps the press alive, so
//! sliding back onto the icon and releasing still clears the field.

use tracing::{debug, trace};

use clearedit_core::logging::targets;
use clearedit_core::{Insets, LayoutDirection, Point};

use super::decoration::{IconDecoration, IconVariant};
use super::dispatch::DeleteDispatcher;
use crate::widget::widgets::LineEdit;
use crate::widget::{TouchAction, TouchEvent, Widget};

/// Whether the icon logic consumed a touch event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    /// The event was handled by the icon logic.
    Consumed,
    /// The event should go to the base field.
    PassThrough,
}

impl GestureOutcome {
    /// Whether the event was consumed.
    pub fn is_consumed(self) -> bool {
        self == GestureOutcome::Consumed
    }
}

/// Horizontal hit region of the attached icon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconHitRegion {
    /// Width of the field.
    pub field_width: f32,
    /// Content padding of the field.
    pub padding: Insets,
    /// Width of the attached decoration.
    pub decoration_width: f32,
    /// Layout direction of the field.
    pub direction: LayoutDirection,
}

impl IconHitRegion {
    /// Whether the field can hold the icon plus both horizontal paddings.
    pub fn fits(&self) -> bool {
        self.field_width >= self.decoration_width + self.padding.left + self.padding.right
    }

    /// X coordinate where the icon begins under left-to-right layout.
    pub fn right_edge(&self) -> f32 {
        self.field_width - self.padding.right - self.decoration_width
    }

    /// Whether `x` falls on the icon.
    pub fn contains_x(&self, x: f32) -> bool {
        match self.direction {
            LayoutDirection::LeftToRight => x > self.right_edge(),
            LayoutDirection::RightToLeft => x < self.padding.left + self.decoration_width,
        }
    }

    /// Whether a drag to `(x, y)` has left the icon band or the field.
    pub fn is_outside_band(&self, x: f32, y: f32, field_height: f32) -> bool {
        x < self.right_edge() || y < 0.0 || y > field_height
    }
}

/// Mode flags the gesture handler reads but does not own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GestureState {
    /// Whether quick-delete mode is enabled.
    pub quick_delete: bool,
    /// Whether the clear icon is shown.
    pub deletable: bool,
}

/// Drives the press/release sequence on the clear icon.
#[derive(Debug, Default)]
pub struct TouchGestureHandler {
    press_active: bool,
}

impl TouchGestureHandler {
    /// Create a handler with no press in progress.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a press that began on the icon is still unresolved.
    pub fn is_press_active(&self) -> bool {
        self.press_active
    }

    /// Abandon any press in progress.
    pub fn reset(&mut self) {
        self.press_active = false;
    }

    /// Handle one touch event.
    ///
    /// Each action is handled on its own; a press is never evaluated as a
    /// release in the same call.
    pub fn handle(
        &mut self,
        event: &TouchEvent,
        state: GestureState,
        field: &mut LineEdit,
        decoration: &mut IconDecoration,
        dispatcher: &DeleteDispatcher,
    ) -> GestureOutcome {
        if !state.quick_delete || field.is_empty() || !field.has_focus() {
            return GestureOutcome::PassThrough;
        }

        let region = IconHitRegion {
            field_width: field.width(),
            padding: field.padding(),
            decoration_width: decoration.width(),
            direction: field.layout_direction(),
        };
        if !region.fits() {
            trace!(target: targets::GESTURE, ?region, "field too narrow for clear icon");
            return GestureOutcome::PassThrough;
        }

        let Point { x, y } = event.local_pos;
        let on_icon = region.contains_x(x);
        trace!(target: targets::GESTURE, action = ?event.action, x, y, on_icon, "touch");

        match event.action {
            TouchAction::Down if on_icon && state.deletable => {
                self.press_active = true;
                decoration.attach(IconVariant::Pressed, field);
                debug!(target: targets::GESTURE, "clear icon pressed");
                GestureOutcome::Consumed
            }
            TouchAction::Up if on_icon && state.deletable && self.press_active => {
                decoration.attach(IconVariant::Normal, field);
                let outcome = dispatcher.dispatch(field);
                debug!(target: targets::GESTURE, ?outcome, "clear icon released");
                if outcome.handled_externally() {
                    GestureOutcome::PassThrough
                } else {
                    self.press_active = false;
                    GestureOutcome::Consumed
                }
            }
            TouchAction::Move => {
                if region.is_outside_band(x, y, field.height()) {
                    decoration.revert_to_normal(field);
                }
                GestureOutcome::PassThrough
            }
            TouchAction::Cancel | TouchAction::Outside => {
                if std::mem::replace(&mut self.press_active, false) {
                    debug!(target: targets::GESTURE, "clear icon press cancelled");
                }
                decoration.revert_to_normal(field);
                GestureOutcome::PassThrough
            }
            _ => GestureOutcome::PassThrough,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::IconImage;
    use crate::widget::widgets::clear_edit::{IconSet, VisibilityController};
    use std::sync::Arc;

    const ENABLED: GestureState = GestureState {
        quick_delete: true,
        deletable: true,
    };

    struct Rig {
        handler: TouchGestureHandler,
        field: LineEdit,
        decoration: IconDecoration,
        dispatcher: DeleteDispatcher,
    }

    impl Rig {
        fn new(direction: LayoutDirection) -> Self {
            let mut field = LineEdit::with_text("hello");
            field.widget_base_mut().resize(200.0, 40.0);
            field.widget_base_mut().set_padding(Insets::symmetric(10.0, 4.0));
            field.widget_base_mut().set_layout_direction(direction);
            field.widget_base_mut().set_focused(true);

            let mut decoration = IconDecoration::new(IconSet::new(
                IconImage::square("normal", 24),
                IconImage::square("pressed", 24),
            ));
            VisibilityController::new().update(true, &mut field, &mut decoration);

            Self {
                handler: TouchGestureHandler::new(),
                field,
                decoration,
                dispatcher: DeleteDispatcher::new(),
            }
        }

        fn touch(&mut self, action: TouchAction, x: f32, y: f32) -> GestureOutcome {
            self.handler.handle(
                &TouchEvent::at(action, x, y),
                ENABLED,
                &mut self.field,
                &mut self.decoration,
                &self.dispatcher,
            )
        }
    }

    fn region(direction: LayoutDirection) -> IconHitRegion {
        IconHitRegion {
            field_width: 200.0,
            padding: Insets::symmetric(10.0, 4.0),
            decoration_width: 24.0,
            direction,
        }
    }

    #[test]
    fn test_hit_region_ltr() {
        let region = region(LayoutDirection::LeftToRight);
        assert_eq!(region.right_edge(), 166.0);
        assert!(region.contains_x(170.0));
        assert!(!region.contains_x(166.0));
        assert!(!region.contains_x(20.0));
    }

    #[test]
    fn test_hit_region_rtl() {
        let region = region(LayoutDirection::RightToLeft);
        assert!(region.contains_x(20.0));
        assert!(!region.contains_x(34.0));
        assert!(!region.contains_x(170.0));
    }

    #[test]
    fn test_hit_region_fits() {
        let mut region = region(LayoutDirection::LeftToRight);
        assert!(region.fits());
        region.field_width = 44.0;
        assert!(region.fits());
        region.field_width = 43.0;
        assert!(!region.fits());
    }

    #[test]
    fn test_tap_clears() {
        let mut rig = Rig::new(LayoutDirection::LeftToRight);
        assert_eq!(rig.touch(TouchAction::Down, 180.0, 20.0), GestureOutcome::Consumed);
        assert_eq!(rig.decoration.attached(), IconVariant::Pressed);
        assert!(rig.handler.is_press_active());

        assert_eq!(rig.touch(TouchAction::Up, 180.0, 20.0), GestureOutcome::Consumed);
        assert!(rig.field.is_empty());
        assert!(!rig.handler.is_press_active());
        assert_eq!(rig.decoration.attached(), IconVariant::Normal);
    }

    #[test]
    fn test_press_off_icon_passes_through() {
        let mut rig = Rig::new(LayoutDirection::LeftToRight);
        assert_eq!(rig.touch(TouchAction::Down, 50.0, 20.0), GestureOutcome::PassThrough);
        assert!(!rig.handler.is_press_active());
        assert_eq!(rig.decoration.attached(), IconVariant::Normal);
    }

    #[test]
    fn test_release_without_press_passes_through() {
        let mut rig = Rig::new(LayoutDirection::LeftToRight);
        assert_eq!(rig.touch(TouchAction::Up, 180.0, 20.0), GestureOutcome::PassThrough);
        assert_eq!(rig.field.text(), "hello");
    }

    #[test]
    fn test_drag_out_reverts_but_keeps_press() {
        let mut rig = Rig::new(LayoutDirection::LeftToRight);
        rig.touch(TouchAction::Down, 180.0, 20.0);
        rig.touch(TouchAction::Move, 100.0, 20.0);
        assert_eq!(rig.decoration.attached(), IconVariant::Normal);
        assert!(rig.handler.is_press_active());

        rig.touch(TouchAction::Move, 180.0, 20.0);
        assert_eq!(rig.touch(TouchAction::Up, 180.0, 20.0), GestureOutcome::Consumed);
        assert!(rig.field.is_empty());
    }

    #[test]
    fn test_vertical_drag_out_reverts() {
        let mut rig = Rig::new(LayoutDirection::LeftToRight);
        rig.touch(TouchAction::Down, 180.0, 20.0);
        rig.touch(TouchAction::Move, 180.0, 41.0);
        assert_eq!(rig.decoration.attached(), IconVariant::Normal);
    }

    #[test]
    fn test_cancel_reverts_without_delete() {
        let mut rig = Rig::new(LayoutDirection::LeftToRight);
        rig.touch(TouchAction::Down, 180.0, 20.0);
        assert_eq!(rig.touch(TouchAction::Cancel, 180.0, 20.0), GestureOutcome::PassThrough);
        assert_eq!(rig.decoration.attached(), IconVariant::Normal);
        assert_eq!(rig.field.text(), "hello");
        assert!(!rig.handler.is_press_active());
    }

    #[test]
    fn test_release_after_cancel_needs_new_press() {
        let mut rig = Rig::new(LayoutDirection::LeftToRight);
        rig.touch(TouchAction::Down, 180.0, 20.0);
        rig.touch(TouchAction::Outside, 180.0, 20.0);
        assert!(!rig.handler.is_press_active());

        assert_eq!(rig.touch(TouchAction::Down, 50.0, 20.0), GestureOutcome::PassThrough);
        rig.touch(TouchAction::Move, 180.0, 20.0);
        assert_eq!(rig.touch(TouchAction::Up, 180.0, 20.0), GestureOutcome::PassThrough);
        assert_eq!(rig.field.text(), "hello");
    }

    #[test]
    fn test_rtl_tap_on_leading_edge() {
        let mut rig = Rig::new(LayoutDirection::RightToLeft);
        assert_eq!(rig.touch(TouchAction::Down, 180.0, 20.0), GestureOutcome::PassThrough);
        assert_eq!(rig.touch(TouchAction::Down, 15.0, 20.0), GestureOutcome::Consumed);
        assert_eq!(rig.touch(TouchAction::Up, 15.0, 20.0), GestureOutcome::Consumed);
        assert!(rig.field.is_empty());
    }

    #[test]
    fn test_external_handler_keeps_press() {
        let mut rig = Rig::new(LayoutDirection::LeftToRight);
        rig.dispatcher.set_handler(Some(Arc::new(|| true)));
        rig.touch(TouchAction::Down, 180.0, 20.0);
        assert_eq!(rig.touch(TouchAction::Up, 180.0, 20.0), GestureOutcome::PassThrough);
        assert_eq!(rig.field.text(), "hello");
        assert!(rig.handler.is_press_active());
        assert_eq!(rig.decoration.attached(), IconVariant::Normal);
    }

    #[test]
    fn test_narrow_field_passes_through() {
        let mut rig = Rig::new(LayoutDirection::LeftToRight);
        rig.field.widget_base_mut().resize(40.0, 40.0);
        assert_eq!(rig.touch(TouchAction::Down, 39.0, 20.0), GestureOutcome::PassThrough);
        assert!(!rig.handler.is_press_active());
    }

    #[test]
    fn test_unfocused_passes_through() {
        let mut rig = Rig::new(LayoutDirection::LeftToRight);
        rig.field.widget_base_mut().set_focused(false);
        assert_eq!(rig.touch(TouchAction::Down, 180.0, 20.0), GestureOutcome::PassThrough);
    }

    #[test]
    fn test_quick_delete_off_passes_through() {
        let mut rig = Rig::new(LayoutDirection::LeftToRight);
        let outcome = rig.handler.handle(
            &TouchEvent::at(TouchAction::Down, 180.0, 20.0),
            GestureState {
                quick_delete: false,
                deletable: true,
            },
            &mut rig.field,
            &mut rig.decoration,
            &rig.dispatcher,
        );
        assert_eq!(outcome, GestureOutcome::PassThrough);
    }

    #[test]
    fn test_missing_pressed_image_still_consumes() {
        let mut rig = Rig::new(LayoutDirection::LeftToRight);
        rig.decoration = IconDecoration::new(IconSet {
            normal: Some(IconImage::square("normal", 24)),
            pressed: None,
        });
        rig.decoration.attach(IconVariant::Normal, &mut rig.field);

        assert_eq!(rig.touch(TouchAction::Down, 180.0, 20.0), GestureOutcome::Consumed);
        assert_eq!(rig.decoration.attached(), IconVariant::Normal);
        assert_eq!(rig.touch(TouchAction::Up, 180.0, 20.0), GestureOutcome::Consumed);
        assert!(rig.field.is_empty());
    }
}
