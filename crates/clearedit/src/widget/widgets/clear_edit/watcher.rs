//! Content-change watcher.
//!
//! Subscribes to the field's `text_changed` signal and queues the character
//! length of every change. The owning widget drains the queue after each
//! operation, checks the length limit and re-runs visibility.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{info, trace};

use clearedit_core::ConnectionId;
use clearedit_core::logging::targets;

use crate::widget::widgets::LineEdit;

/// Watches a field's content for length-limit hits.
#[derive(Debug)]
pub struct ContentWatcher {
    max_length: usize,
    pending: Arc<Mutex<Vec<usize>>>,
    connection: ConnectionId,
}

impl ContentWatcher {
    /// Subscribe to `field`'s content changes.
    ///
    /// `max_length` of zero disables the limit check.
    pub fn install(field: &LineEdit, max_length: usize) -> Self {
        let pending = Arc::new(Mutex::new(Vec::new()));
        let queue = pending.clone();
        let connection = field.text_changed.connect(move |text: &String| {
            queue.lock().push(text.chars().count());
        });
        trace!(target: targets::WATCHER, max_length, "content watcher installed");

        Self {
            max_length,
            pending,
            connection,
        }
    }

    /// The configured maximum length (0 = unlimited).
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// The signal connection feeding this watcher.
    pub fn connection(&self) -> ConnectionId {
        self.connection
    }

    /// Whether a content length of `len` hits the limit.
    ///
    /// Equality, not a latch: every change that lands on the limit counts.
    pub fn limit_reached(&self, len: usize) -> bool {
        self.max_length > 0 && len == self.max_length
    }

    /// Drain queued changes, returning how many hit the limit.
    ///
    /// Returns `None` if nothing changed since the last call.
    pub fn take_changes(&self) -> Option<usize> {
        let changes = std::mem::take(&mut *self.pending.lock());
        if changes.is_empty() {
            return None;
        }

        let hits = changes.iter().filter(|&&len| self.limit_reached(len)).count();
        if hits > 0 {
            info!(
                target: targets::WATCHER,
                max_length = self.max_length,
                hits,
                "input length limit reached"
            );
        }
        Some(hits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_changes() {
        let field = LineEdit::new();
        let watcher = ContentWatcher::install(&field, 3);
        assert_eq!(watcher.take_changes(), None);
    }

    #[test]
    fn test_counts_exact_limit_hits() {
        let mut field = LineEdit::new();
        let watcher = ContentWatcher::install(&field, 3);

        field.set_text("ab");
        assert_eq!(watcher.take_changes(), Some(0));
        field.insert_text("c");
        assert_eq!(watcher.take_changes(), Some(1));
        field.delete_char_before();
        field.insert_text("d");
        assert_eq!(watcher.take_changes(), Some(1));
        assert_eq!(watcher.take_changes(), None);
    }

    #[test]
    fn test_lengths_are_in_chars() {
        let mut field = LineEdit::new();
        let watcher = ContentWatcher::install(&field, 2);
        field.set_text("éé");
        assert_eq!(watcher.take_changes(), Some(1));
    }

    #[test]
    fn test_zero_disables_limit() {
        let mut field = LineEdit::new();
        let watcher = ContentWatcher::install(&field, 0);
        field.set_text("");
        field.set_text("abc");
        assert!(!watcher.limit_reached(0));
        assert_eq!(watcher.take_changes(), Some(0));
    }

    #[test]
    fn test_single_subscription() {
        let field = LineEdit::new();
        let watcher = ContentWatcher::install(&field, 0);
        assert_eq!(field.text_changed.connection_count(), 1);
        assert!(field.text_changed.disconnect(watcher.connection()));
    }
}
