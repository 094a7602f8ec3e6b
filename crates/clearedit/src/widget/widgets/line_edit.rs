//! Single-line text input widget.
//!
//! The LineEdit widget provides a single-line text editor with support for:
//! - Text editing with cursor and selection
//! - Read-only mode
//! - Maximum length constraint
//! - A trailing decoration slot (an icon drawn after the text)
//!
//! # Example
//!
//! ```ignore
//! use clearedit::widget::widgets::LineEdit;
//!
//! let mut edit = LineEdit::new().with_max_length(16);
//!
//! edit.text_changed.connect(|text| {
//!     println!("Text changed: {}", text);
//! });
//!
//! edit.set_text("hello");
//! ```

use unicode_segmentation::UnicodeSegmentation;

use clearedit_core::Signal;

use crate::widget::{
    Decoration, FocusPolicy, Key, KeyPressEvent, TouchAction, TouchEvent, Widget, WidgetBase,
    WidgetEvent,
};

/// A single-line text input widget.
///
/// Cursor and selection positions are byte offsets into the text and always
/// sit on grapheme boundaries. Lengths reported to callers are in characters.
///
/// # Signals
///
/// - `text_changed`: Emitted when the text content changes
///
/// # Keyboard Shortcuts
///
/// - Arrow keys: Move cursor
/// - Shift+Arrow keys: Extend selection
/// - Home/End: Move to start/end of line
/// - Backspace: Delete character before cursor
/// - Delete: Delete character after cursor
/// - Ctrl+Backspace: Delete word before cursor
/// - Ctrl+A: Select all text
pub struct LineEdit {
    /// Widget base for common functionality.
    base: WidgetBase,

    /// The actual text content.
    text: String,

    /// Current cursor position (byte offset in text).
    cursor_pos: usize,

    /// Selection anchor position (byte offset). If Some, selection extends from anchor to cursor.
    selection_anchor: Option<usize>,

    /// Whether the widget is read-only.
    read_only: bool,

    /// Maximum text length in characters (None = unlimited).
    max_length: Option<usize>,

    /// Icon drawn at the layout-trailing edge of the content area.
    trailing_decoration: Option<Decoration>,

    /// Gap between the text and the trailing decoration.
    decoration_padding: f32,

    /// Whether a pointer press is in progress.
    is_pressed: bool,

    /// Signal emitted when text changes.
    pub text_changed: Signal<String>,
}

impl LineEdit {
    /// Create a new empty LineEdit.
    pub fn new() -> Self {
        let mut base = WidgetBase::new();
        base.set_focus_policy(FocusPolicy::StrongFocus);

        Self {
            base,
            text: String::new(),
            cursor_pos: 0,
            selection_anchor: None,
            read_only: false,
            max_length: None,
            trailing_decoration: None,
            decoration_padding: 0.0,
            is_pressed: false,
            text_changed: Signal::new(),
        }
    }

    /// Create a new LineEdit with initial text.
    pub fn with_text(text: impl Into<String>) -> Self {
        let mut edit = Self::new();
        edit.text = text.into();
        edit.cursor_pos = edit.text.len();
        edit
    }

    // =========================================================================
    // Text Access
    // =========================================================================

    /// Get the current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the text length in characters.
    pub fn text_length(&self) -> usize {
        self.text.chars().count()
    }

    /// Whether the field holds no text.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Set the text content.
    ///
    /// The cursor moves to the end of the new text and any selection is
    /// cleared, whether or not the content changed. If max_length is set, the
    /// text is truncated. Returns `true` if the content changed.
    pub fn set_text(&mut self, text: impl Into<String>) -> bool {
        let mut new_text = text.into();

        if let Some(max) = self.max_length {
            if new_text.chars().count() > max {
                new_text = new_text.chars().take(max).collect();
            }
        }

        let changed = self.text != new_text;
        if changed {
            self.text = new_text;
        }
        self.cursor_pos = self.text.len();
        self.selection_anchor = None;
        self.base.update();

        if changed {
            self.text_changed.emit(self.text.clone());
        }
        changed
    }

    /// Clear all text.
    pub fn clear(&mut self) -> bool {
        self.set_text("")
    }

    // =========================================================================
    // Read-only / Max Length
    // =========================================================================

    /// Check if the widget is read-only.
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Set read-only mode.
    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    /// Get the maximum text length.
    pub fn max_length(&self) -> Option<usize> {
        self.max_length
    }

    /// Set the maximum text length (in characters).
    pub fn set_max_length(&mut self, max: Option<usize>) {
        self.max_length = max;
        if let Some(max) = max {
            if self.text_length() > max {
                let truncated: String = self.text.chars().take(max).collect();
                self.set_text(truncated);
            }
        }
    }

    /// Set max length using builder pattern.
    pub fn with_max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Whether the input method may offer spelling suggestions.
    ///
    /// Suggestions are never offered; clearable fields are commonly used for
    /// secrets and search terms.
    pub fn suggestions_enabled(&self) -> bool {
        false
    }

    // =========================================================================
    // Cursor and Selection
    // =========================================================================

    /// Get the cursor position (byte offset).
    pub fn cursor_position(&self) -> usize {
        self.cursor_pos
    }

    /// Set the cursor position, clearing any selection.
    pub fn set_cursor_position(&mut self, pos: usize) {
        self.set_selection(pos, pos);
    }

    /// Select the byte range between `anchor` and `cursor`.
    ///
    /// Both ends are clamped to the text and snapped to grapheme boundaries.
    /// Equal ends collapse the selection to a cursor.
    pub fn set_selection(&mut self, anchor: usize, cursor: usize) {
        let anchor = self.snap_to_grapheme_boundary(anchor.min(self.text.len()));
        let cursor = self.snap_to_grapheme_boundary(cursor.min(self.text.len()));
        self.cursor_pos = cursor;
        self.selection_anchor = (anchor != cursor).then_some(anchor);
        self.base.update();
    }

    /// Check if there is a selection.
    pub fn has_selection(&self) -> bool {
        self.selection_anchor.is_some() && self.selection_anchor != Some(self.cursor_pos)
    }

    /// Get the selected text.
    pub fn selected_text(&self) -> &str {
        match self.selection_range() {
            Some((start, end)) => &self.text[start..end],
            None => "",
        }
    }

    /// Get the selection range (start, end) in byte offsets.
    pub fn selection_range(&self) -> Option<(usize, usize)> {
        self.selection_anchor.map(|anchor| {
            let start = anchor.min(self.cursor_pos);
            let end = anchor.max(self.cursor_pos);
            (start, end)
        })
    }

    /// Select all text.
    pub fn select_all(&mut self) {
        if !self.text.is_empty() {
            self.selection_anchor = Some(0);
            self.cursor_pos = self.text.len();
            self.base.update();
        }
    }

    // =========================================================================
    // Trailing Decoration
    // =========================================================================

    /// The decoration currently drawn at the trailing edge, if any.
    pub fn trailing_decoration(&self) -> Option<&Decoration> {
        self.trailing_decoration.as_ref()
    }

    /// Attach (`Some`) or detach (`None`) the trailing decoration.
    pub fn set_trailing_decoration(&mut self, decoration: Option<Decoration>) {
        if self.trailing_decoration != decoration {
            self.trailing_decoration = decoration;
            self.base.update();
        }
    }

    /// Gap between the text and the trailing decoration.
    pub fn decoration_padding(&self) -> f32 {
        self.decoration_padding
    }

    /// Set the gap between the text and the trailing decoration.
    pub fn set_decoration_padding(&mut self, padding: f32) {
        if self.decoration_padding != padding {
            self.decoration_padding = padding;
            self.base.update();
        }
    }

    // =========================================================================
    // Editing
    // =========================================================================

    /// Insert text at the cursor position, replacing any selection.
    ///
    /// Returns `true` if the content changed.
    pub fn insert_text(&mut self, text: &str) -> bool {
        if self.read_only || text.is_empty() {
            return false;
        }

        let mut changed = false;
        if self.has_selection() {
            changed = self.remove_selection();
        }

        let insert: String = match self.max_length {
            Some(max) => {
                let allowed = max.saturating_sub(self.text_length());
                text.chars().take(allowed).collect()
            }
            None => text.to_owned(),
        };

        if !insert.is_empty() {
            self.text.insert_str(self.cursor_pos, &insert);
            self.cursor_pos += insert.len();
            changed = true;
        }

        if changed {
            self.base.update();
            self.text_changed.emit(self.text.clone());
        }
        changed
    }

    /// Delete the selected text.
    pub fn delete_selection(&mut self) -> bool {
        if self.read_only || !self.remove_selection() {
            return false;
        }
        self.base.update();
        self.text_changed.emit(self.text.clone());
        true
    }

    /// Delete character before cursor (backspace).
    pub fn delete_char_before(&mut self) -> bool {
        if self.read_only {
            return false;
        }
        if self.has_selection() {
            return self.delete_selection();
        }
        if self.cursor_pos == 0 {
            return false;
        }

        let prev_pos = self.prev_grapheme_boundary(self.cursor_pos);
        self.replace_range(prev_pos, self.cursor_pos);
        true
    }

    /// Delete character after cursor (delete).
    pub fn delete_char_after(&mut self) -> bool {
        if self.read_only {
            return false;
        }
        if self.has_selection() {
            return self.delete_selection();
        }
        if self.cursor_pos >= self.text.len() {
            return false;
        }

        let next_pos = self.next_grapheme_boundary(self.cursor_pos);
        self.replace_range(self.cursor_pos, next_pos);
        true
    }

    /// Delete word before cursor.
    pub fn delete_word_before(&mut self) -> bool {
        if self.read_only {
            return false;
        }
        if self.has_selection() {
            return self.delete_selection();
        }
        if self.cursor_pos == 0 {
            return false;
        }

        let word_start = self.word_boundary_before(self.cursor_pos);
        self.replace_range(word_start, self.cursor_pos);
        true
    }

    // =========================================================================
    // Event Handling
    // =========================================================================

    /// Handle a key press event.
    ///
    /// Returns `true` if the key was handled.
    pub fn handle_key_press(&mut self, event: &KeyPressEvent) -> bool {
        let shift = event.modifiers.shift;
        let ctrl = event.modifiers.control || event.modifiers.meta;

        match event.key {
            Key::ArrowLeft => {
                self.move_cursor(self.prev_grapheme_boundary(self.cursor_pos), shift);
                true
            }
            Key::ArrowRight => {
                self.move_cursor(self.next_grapheme_boundary(self.cursor_pos), shift);
                true
            }
            Key::Home => {
                self.move_cursor(0, shift);
                true
            }
            Key::End => {
                self.move_cursor(self.text.len(), shift);
                true
            }
            Key::Backspace => {
                if ctrl {
                    self.delete_word_before();
                } else {
                    self.delete_char_before();
                }
                true
            }
            Key::Delete => {
                self.delete_char_after();
                true
            }
            Key::A if ctrl => {
                self.select_all();
                true
            }
            _ => {
                if !event.text.is_empty() && !ctrl && !event.modifiers.alt {
                    let filtered: String = event.text.chars().filter(|c| !c.is_control()).collect();
                    self.insert_text(&filtered);
                    true
                } else {
                    false
                }
            }
        }
    }

    /// Default touch handling.
    ///
    /// A press on an enabled field places the cursor at the end of the text and
    /// is consumed together with its moves and release. Placing the caret under
    /// the pointer needs text metrics and is left to the renderer.
    pub fn handle_touch(&mut self, event: &TouchEvent) -> bool {
        if !self.base.is_enabled() {
            return false;
        }

        match event.action {
            TouchAction::Down => {
                self.is_pressed = true;
                self.move_cursor(self.text.len(), false);
                true
            }
            TouchAction::Move => self.is_pressed,
            TouchAction::Up => std::mem::replace(&mut self.is_pressed, false),
            TouchAction::Cancel | TouchAction::Outside => {
                self.is_pressed = false;
                false
            }
            TouchAction::Hover => false,
        }
    }

    // =========================================================================
    // Internal: Editing
    // =========================================================================

    /// Remove the selected range without notifying.
    fn remove_selection(&mut self) -> bool {
        match self.selection_range() {
            Some((start, end)) if start != end => {
                self.text.replace_range(start..end, "");
                self.cursor_pos = start;
                self.selection_anchor = None;
                true
            }
            _ => {
                self.selection_anchor = None;
                false
            }
        }
    }

    /// Remove `start..end`, leave the cursor at `start`, and notify.
    fn replace_range(&mut self, start: usize, end: usize) {
        self.text.replace_range(start..end, "");
        self.cursor_pos = start;
        self.selection_anchor = None;
        self.base.update();
        self.text_changed.emit(self.text.clone());
    }

    fn move_cursor(&mut self, pos: usize, extend_selection: bool) {
        if extend_selection {
            if self.selection_anchor.is_none() {
                self.selection_anchor = Some(self.cursor_pos);
            }
        } else {
            self.selection_anchor = None;
        }
        self.cursor_pos = pos;
        self.base.update();
    }

    // =========================================================================
    // Internal: Grapheme/Word Boundaries
    // =========================================================================

    /// Find the previous grapheme boundary.
    fn prev_grapheme_boundary(&self, pos: usize) -> usize {
        self.text
            .grapheme_indices(true)
            .map(|(offset, _)| offset)
            .take_while(|&offset| offset < pos)
            .last()
            .unwrap_or(0)
    }

    /// Find the next grapheme boundary.
    fn next_grapheme_boundary(&self, pos: usize) -> usize {
        self.text
            .grapheme_indices(true)
            .map(|(offset, g)| offset + g.len())
            .find(|&end| end > pos)
            .unwrap_or(self.text.len())
    }

    /// Snap a position to the nearest grapheme boundary.
    fn snap_to_grapheme_boundary(&self, pos: usize) -> usize {
        for (offset, grapheme) in self.text.grapheme_indices(true) {
            let next_offset = offset + grapheme.len();
            if pos <= offset {
                return offset;
            }
            if pos < next_offset {
                return if pos - offset <= next_offset - pos {
                    offset
                } else {
                    next_offset
                };
            }
        }
        self.text.len()
    }

    /// Find word boundary before position.
    fn word_boundary_before(&self, pos: usize) -> usize {
        let before: Vec<(usize, char)> = self.text[..pos].char_indices().collect();
        let mut idx = before.len();

        // Skip whitespace/punctuation
        while idx > 0 && !before[idx - 1].1.is_alphanumeric() {
            idx -= 1;
        }
        // Skip word characters
        while idx > 0 && before[idx - 1].1.is_alphanumeric() {
            idx -= 1;
        }

        before.get(idx).map_or(pos, |&(offset, _)| offset)
    }
}

impl Default for LineEdit {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for LineEdit {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn event(&mut self, event: &mut WidgetEvent) -> bool {
        let handled = match event {
            WidgetEvent::KeyPress(e) => self.handle_key_press(e),
            WidgetEvent::Touch(e) => self.handle_touch(e),
            WidgetEvent::FocusIn(_) => {
                self.base.set_focused(true);
                true
            }
            WidgetEvent::FocusOut(_) => {
                self.base.set_focused(false);
                self.is_pressed = false;
                true
            }
            WidgetEvent::Resize(e) => {
                self.base.set_size(e.new_size);
                true
            }
        };
        if handled {
            event.accept();
        }
        handled
    }
}

// Ensure LineEdit is Send + Sync
static_assertions::assert_impl_all!(LineEdit: Send, Sync);
