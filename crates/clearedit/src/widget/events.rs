//! Widget-specific event types.
//!
//! This module defines the input events a text field reacts to: key presses,
//! single-pointer touch actions, focus changes and resizes. All positions are
//! in widget-local coordinates.

use clearedit_core::{Point, Size};

/// Keyboard modifiers that may be held during input events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct KeyboardModifiers {
    /// The Shift key is held.
    pub shift: bool,
    /// The Control key is held (Cmd on macOS).
    pub control: bool,
    /// The Alt key is held (Option on macOS).
    pub alt: bool,
    /// The Meta/Super key is held.
    pub meta: bool,
}

impl KeyboardModifiers {
    /// No modifiers pressed.
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
        meta: false,
    };

    /// Shift modifier only.
    pub const SHIFT: Self = Self {
        shift: true,
        control: false,
        alt: false,
        meta: false,
    };

    /// Control modifier only.
    pub const CTRL: Self = Self {
        shift: false,
        control: true,
        alt: false,
        meta: false,
    };

    /// Check if any modifier is pressed.
    pub fn any(&self) -> bool {
        self.shift || self.control || self.alt || self.meta
    }

    /// Check if no modifiers are pressed.
    pub fn none(&self) -> bool {
        !self.any()
    }
}

/// Common data for all widget events.
#[derive(Debug, Clone, Copy)]
pub struct EventBase {
    /// Whether the event has been accepted (handled).
    accepted: bool,
}

impl Default for EventBase {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBase {
    /// Create a new event base.
    pub fn new() -> Self {
        Self { accepted: false }
    }

    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    /// Accept the event, preventing further propagation.
    pub fn accept(&mut self) {
        self.accepted = true;
    }

    /// Ignore the event, allowing further propagation.
    pub fn ignore(&mut self) {
        self.accepted = false;
    }
}

/// Resize event, sent when a widget's size changes.
#[derive(Debug, Clone, Copy)]
pub struct ResizeEvent {
    /// Base event data.
    pub base: EventBase,
    /// The old size.
    pub old_size: Size,
    /// The new size.
    pub new_size: Size,
}

impl ResizeEvent {
    /// Create a new resize event.
    pub fn new(old_size: Size, new_size: Size) -> Self {
        Self {
            base: EventBase::new(),
            old_size,
            new_size,
        }
    }
}

/// Focus in event, sent when the widget gains keyboard focus.
#[derive(Debug, Clone, Copy)]
pub struct FocusInEvent {
    /// Base event data.
    pub base: EventBase,
    /// The reason focus was gained.
    pub reason: FocusReason,
}

impl FocusInEvent {
    /// Create a new focus in event.
    pub fn new(reason: FocusReason) -> Self {
        Self {
            base: EventBase::new(),
            reason,
        }
    }
}

/// Focus out event, sent when the widget loses keyboard focus.
#[derive(Debug, Clone, Copy)]
pub struct FocusOutEvent {
    /// Base event data.
    pub base: EventBase,
    /// The reason focus was lost.
    pub reason: FocusReason,
}

impl FocusOutEvent {
    /// Create a new focus out event.
    pub fn new(reason: FocusReason) -> Self {
        Self {
            base: EventBase::new(),
            reason,
        }
    }
}

/// Reason for focus change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusReason {
    /// Focus changed due to a pointer press.
    Touch,
    /// Focus changed due to Tab key.
    Tab,
    /// Focus changed due to Shift+Tab (backtab).
    Backtab,
    /// Focus changed programmatically.
    #[default]
    Other,
}

/// Keyboard key codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum Key {
    // Letters
    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,

    // Numbers (main keyboard)
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    // Navigation
    ArrowUp, ArrowDown, ArrowLeft, ArrowRight,
    Home, End,

    // Editing
    Backspace, Delete, Insert,
    Enter, Tab,

    // Whitespace
    Space,

    // Control
    Escape,

    // Unknown/unmapped key
    Unknown(u16),
}

impl Key {
    /// Check if this is a navigation key.
    pub fn is_navigation(&self) -> bool {
        matches!(
            self,
            Key::ArrowUp
                | Key::ArrowDown
                | Key::ArrowLeft
                | Key::ArrowRight
                | Key::Home
                | Key::End
        )
    }

    /// Check if this key removes text.
    pub fn is_deletion(&self) -> bool {
        matches!(self, Key::Backspace | Key::Delete)
    }
}

/// Key press event, sent when a key is pressed.
#[derive(Debug, Clone)]
pub struct KeyPressEvent {
    /// Base event data.
    pub base: EventBase,
    /// The key that was pressed.
    pub key: Key,
    /// Keyboard modifiers held during the event.
    pub modifiers: KeyboardModifiers,
    /// The text input from this key press (if any).
    ///
    /// For printable keys, this contains the character that would be typed.
    /// For non-printable keys, this is empty.
    pub text: String,
    /// Whether this is a key repeat event (key held down).
    pub is_repeat: bool,
}

impl KeyPressEvent {
    /// Create a new key press event.
    pub fn new(key: Key, modifiers: KeyboardModifiers, text: impl Into<String>, is_repeat: bool) -> Self {
        Self {
            base: EventBase::new(),
            key,
            modifiers,
            text: text.into(),
            is_repeat,
        }
    }

    /// A plain press of a non-printing key.
    pub fn key(key: Key) -> Self {
        Self::new(key, KeyboardModifiers::NONE, "", false)
    }
}

/// The phase of a single-pointer touch gesture.
///
/// Within one gesture the platform delivers `Down`, any number of `Move`s,
/// then exactly one of `Up` or `Cancel`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TouchAction {
    /// The pointer went down.
    Down,
    /// The pointer moved while down.
    Move,
    /// The pointer was lifted.
    Up,
    /// The gesture was aborted by the platform.
    Cancel,
    /// The pointer went down outside the widget's window.
    Outside,
    /// The pointer is hovering without being down.
    Hover,
}

/// Touch event, sent for each pointer action over the widget.
#[derive(Debug, Clone, Copy)]
pub struct TouchEvent {
    /// Base event data.
    pub base: EventBase,
    /// What the pointer did.
    pub action: TouchAction,
    /// Position in widget-local coordinates.
    pub local_pos: Point,
}

impl TouchEvent {
    /// Create a new touch event.
    pub fn new(action: TouchAction, local_pos: Point) -> Self {
        Self {
            base: EventBase::new(),
            action,
            local_pos,
        }
    }

    /// Create a touch event at `(x, y)`.
    pub fn at(action: TouchAction, x: f32, y: f32) -> Self {
        Self::new(action, Point::new(x, y))
    }
}

/// Enum wrapping all widget event types.
#[derive(Debug)]
pub enum WidgetEvent {
    /// Resize event.
    Resize(ResizeEvent),
    /// Touch event.
    Touch(TouchEvent),
    /// Focus in event.
    FocusIn(FocusInEvent),
    /// Focus out event.
    FocusOut(FocusOutEvent),
    /// Key press event.
    KeyPress(KeyPressEvent),
}

impl WidgetEvent {
    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        match self {
            Self::Resize(e) => e.base.is_accepted(),
            Self::Touch(e) => e.base.is_accepted(),
            Self::FocusIn(e) => e.base.is_accepted(),
            Self::FocusOut(e) => e.base.is_accepted(),
            Self::KeyPress(e) => e.base.is_accepted(),
        }
    }

    /// Accept the event.
    pub fn accept(&mut self) {
        match self {
            Self::Resize(e) => e.base.accept(),
            Self::Touch(e) => e.base.accept(),
            Self::FocusIn(e) => e.base.accept(),
            Self::FocusOut(e) => e.base.accept(),
            Self::KeyPress(e) => e.base.accept(),
        }
    }

    /// Ignore the event.
    pub fn ignore(&mut self) {
        match self {
            Self::Resize(e) => e.base.ignore(),
            Self::Touch(e) => e.base.ignore(),
            Self::FocusIn(e) => e.base.ignore(),
            Self::FocusOut(e) => e.base.ignore(),
            Self::KeyPress(e) => e.base.ignore(),
        }
    }

    /// Check if this event should propagate to parent widgets.
    ///
    /// Input events propagate if not accepted; resize and focus events are
    /// specific to the widget.
    pub fn should_propagate(&self) -> bool {
        match self {
            Self::Resize(_) | Self::FocusIn(_) | Self::FocusOut(_) => false,
            Self::Touch(_) | Self::KeyPress(_) => !self.is_accepted(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_accept_ignore() {
        let mut event = WidgetEvent::Touch(TouchEvent::at(TouchAction::Down, 1.0, 2.0));
        assert!(!event.is_accepted());
        assert!(event.should_propagate());

        event.accept();
        assert!(event.is_accepted());
        assert!(!event.should_propagate());

        event.ignore();
        assert!(!event.is_accepted());
    }

    #[test]
    fn test_focus_events_do_not_propagate() {
        let event = WidgetEvent::FocusIn(FocusInEvent::new(FocusReason::Tab));
        assert!(!event.should_propagate());
    }

    #[test]
    fn test_key_classification() {
        assert!(Key::Backspace.is_deletion());
        assert!(Key::Delete.is_deletion());
        assert!(!Key::A.is_deletion());
        assert!(Key::Home.is_navigation());
        assert!(KeyboardModifiers::NONE.none());
        assert!(KeyboardModifiers::CTRL.any());
    }
}
