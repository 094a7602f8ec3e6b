//! Runs the clear action when the icon is tapped.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use clearedit_core::logging::targets;

use crate::widget::widgets::LineEdit;

/// Handler offered a clear-icon tap before the default clear.
///
/// Returns `true` if it fully handled the deletion; the field is then left
/// untouched.
pub type TextDeletedHandler = Arc<dyn Fn() -> bool + Send + Sync>;

/// What happened when a delete was dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The registered handler consumed the deletion.
    HandledExternally,
    /// The field was cleared. `changed` is false if it was already empty.
    Cleared { changed: bool },
}

impl DeleteOutcome {
    /// Whether the registered handler consumed the deletion.
    pub fn handled_externally(self) -> bool {
        matches!(self, DeleteOutcome::HandledExternally)
    }
}

/// Offers a tap to the registered handler, falling back to clearing the field.
#[derive(Default)]
pub struct DeleteDispatcher {
    handler: Option<TextDeletedHandler>,
}

impl DeleteDispatcher {
    /// Create a dispatcher with no handler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register or replace (`Some`) or remove (`None`) the handler.
    pub fn set_handler(&mut self, handler: Option<TextDeletedHandler>) {
        self.handler = handler;
    }

    /// Whether a handler is registered.
    pub fn has_handler(&self) -> bool {
        self.handler.is_some()
    }

    /// Dispatch a delete against `field`.
    pub fn dispatch(&self, field: &mut LineEdit) -> DeleteOutcome {
        if let Some(handler) = &self.handler {
            if handler() {
                debug!(target: targets::DELETE, "delete handled externally");
                return DeleteOutcome::HandledExternally;
            }
        }

        let changed = field.clear();
        field.set_selection(0, 0);
        debug!(target: targets::DELETE, changed, "field cleared");
        DeleteOutcome::Cleared { changed }
    }
}

impl fmt::Debug for DeleteDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeleteDispatcher")
            .field("has_handler", &self.has_handler())
            .finish()
    }
}
