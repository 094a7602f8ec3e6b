//! Standard widgets for ClearEdit.
//!
//! - [`LineEdit`]: Single-line text input
//! - [`ClearEdit`]: Single-line text input with a clear icon

pub mod clear_edit;
mod line_edit;

pub use clear_edit::{
    ClearEdit, DeleteOutcome, GestureOutcome, IconSet, IconVariant, PasswordDeletedHandler,
    TextDeletedHandler,
};
pub use line_edit::LineEdit;
