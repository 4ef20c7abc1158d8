use ratatui::crossterm::event::KeyEvent;
use ratatui::style::Style;
use tui_textarea::TextArea;

use crate::theme;

const PLACEHOLDER: &str = "Search IPC sections, offenses, punishments...";

/// Single-line search field
pub struct InputState {
    pub textarea: TextArea<'static>,
}

impl InputState {
    pub fn new() -> Self {
        let mut textarea = TextArea::default();
        textarea.set_cursor_line_style(Style::default());
        textarea.set_cursor_style(theme::input::CURSOR);
        textarea.set_placeholder_text(PLACEHOLDER);
        textarea.set_placeholder_style(Style::default().fg(theme::input::PLACEHOLDER));

        Self { textarea }
    }

    pub fn query(&self) -> &str {
        self.textarea.lines()[0].as_ref()
    }

    /// Replace the whole field, leaving the cursor at the end.
    pub fn set_query(&mut self, text: &str) {
        self.textarea.select_all();
        self.textarea.cut();
        self.textarea.insert_str(single_line(text));
    }

    pub fn clear(&mut self) {
        self.set_query("");
    }

    /// Feed an editing key to the field; returns whether the text changed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let before = self.query().to_string();
        self.textarea.input(key);
        // Ctrl+M and friends insert line breaks; keep the field on one line
        if self.textarea.lines().len() > 1 {
            let joined = self.textarea.lines().join(" ");
            self.set_query(&joined);
        }
        self.query() != before
    }

    /// Insert pasted text at the cursor, flattening line breaks.
    pub fn paste(&mut self, text: &str) -> bool {
        let flat = single_line(text);
        if flat.is_empty() {
            return false;
        }
        self.textarea.insert_str(flat)
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

fn single_line(text: &str) -> String {
    text.replace(['\r', '\n'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    #[test]
    fn test_new_input_is_empty() {
        let input = InputState::new();
        assert_eq!(input.query(), "");
    }

    #[test]
    fn test_typing_changes_text() {
        let mut input = InputState::new();
        assert!(input.handle_key(key(KeyCode::Char('t'))));
        assert!(input.handle_key(key(KeyCode::Char('h'))));
        assert_eq!(input.query(), "th");
    }

    #[test]
    fn test_cursor_movement_does_not_change_text() {
        let mut input = InputState::new();
        input.set_query("theft");
        assert!(!input.handle_key(key(KeyCode::Left)));
        assert_eq!(input.query(), "theft");
    }

    #[test]
    fn test_backspace_on_empty_is_no_change() {
        let mut input = InputState::new();
        assert!(!input.handle_key(key(KeyCode::Backspace)));
    }

    #[test]
    fn test_set_query_replaces_text() {
        let mut input = InputState::new();
        input.set_query("murder");
        input.set_query("theft");
        assert_eq!(input.query(), "theft");
        assert_eq!(input.textarea.cursor(), (0, 5));
    }

    #[test]
    fn test_set_query_flattens_newlines() {
        let mut input = InputState::new();
        input.set_query("a\nb");
        assert_eq!(input.textarea.lines().len(), 1);
        assert_eq!(input.query(), "a b");
    }

    #[test]
    fn test_clear() {
        let mut input = InputState::new();
        input.set_query("fraud");
        input.clear();
        assert_eq!(input.query(), "");
    }

    #[test]
    fn test_paste_inserts_at_cursor() {
        let mut input = InputState::new();
        input.set_query("house ");
        assert!(input.paste("breaking\r\n"));
        assert_eq!(input.query(), "house breaking  ");
    }

    #[test]
    fn test_paste_empty() {
        let mut input = InputState::new();
        assert!(!input.paste(""));
    }
}
