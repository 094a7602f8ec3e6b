//! Delete-key interception.

use std::fmt;
use std::sync::Arc;

use tracing::trace;

use clearedit_core::logging::targets;

use crate::widget::widgets::LineEdit;
use crate::widget::{Key, KeyPressEvent};

/// Listener notified after the delete key edits a quick-delete field.
///
/// The return value is currently ignored.
pub type PasswordDeletedHandler = Arc<dyn Fn() -> bool + Send + Sync>;

/// The key that triggers the password-deleted notification.
pub const DELETE_KEY: Key = Key::Backspace;

/// Routes key presses to the field and notifies on the delete key.
#[derive(Default)]
pub struct KeyDispatcher {
    listener: Option<PasswordDeletedHandler>,
}

impl KeyDispatcher {
    /// Create a dispatcher with no listener.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register or replace (`Some`) or remove (`None`) the listener.
    pub fn set_listener(&mut self, listener: Option<PasswordDeletedHandler>) {
        self.listener = listener;
    }

    /// Whether a listener is registered.
    pub fn has_listener(&self) -> bool {
        self.listener.is_some()
    }

    /// Handle a key press.
    ///
    /// Outside quick-delete mode, or for any key other than [`DELETE_KEY`],
    /// the field decides. Otherwise the field edits first, the listener is
    /// notified and the press is always consumed.
    pub fn dispatch(&self, quick_delete: bool, event: &KeyPressEvent, field: &mut LineEdit) -> bool {
        if !quick_delete || event.key != DELETE_KEY {
            return field.handle_key_press(event);
        }

        field.handle_key_press(event);
        if let Some(listener) = &self.listener {
            let handled = listener();
            trace!(target: targets::KEY, handled, "password deleted listener notified");
        }
        true
    }
}

impl fmt::Debug for KeyDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyDispatcher")
            .field("has_listener", &self.has_listener())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting_dispatcher() -> (KeyDispatcher, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let c = calls.clone();
        let mut dispatcher = KeyDispatcher::new();
        dispatcher.set_listener(Some(Arc::new(move || {
            c.fetch_add(1, Ordering::SeqCst);
            false
        })));
        (dispatcher, calls)
    }

    #[test]
    fn test_delete_key_edits_then_notifies() {
        let (dispatcher, calls) = counting_dispatcher();
        let mut field = LineEdit::with_text("abc");

        assert!(dispatcher.dispatch(true, &KeyPressEvent::key(Key::Backspace), &mut field));
        assert_eq!(field.text(), "ab");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_consumed_even_when_field_is_empty() {
        let (dispatcher, calls) = counting_dispatcher();
        let mut field = LineEdit::new();

        assert!(dispatcher.dispatch(true, &KeyPressEvent::key(Key::Backspace), &mut field));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_quick_delete_off_never_notifies() {
        let (dispatcher, calls) = counting_dispatcher();
        let mut field = LineEdit::with_text("abc");

        dispatcher.dispatch(false, &KeyPressEvent::key(Key::Backspace), &mut field);
        assert_eq!(field.text(), "ab");
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_other_keys_go_to_field() {
        let (dispatcher, calls) = counting_dispatcher();
        let mut field = LineEdit::with_text("abc");

        assert!(!dispatcher.dispatch(true, &KeyPressEvent::key(Key::Escape), &mut field));
        dispatcher.dispatch(true, &KeyPressEvent::key(Key::Delete), &mut field);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_no_listener() {
        let dispatcher = KeyDispatcher::new();
        let mut field = LineEdit::with_text("abc");
        assert!(dispatcher.dispatch(true, &KeyPressEvent::key(Key::Backspace), &mut field));
        assert_eq!(field.text(), "ab");
    }
}
