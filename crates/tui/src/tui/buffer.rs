/// Single-line editable text with a byte cursor kept on char boundaries.
#[derive(Debug, Clone, Default)]
pub struct TextBuffer {
    text: String,
    cursor: usize,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn set<T: Into<String>>(&mut self, value: T) {
        self.text = value.into();
        self.cursor = self.text.len();
    }

    pub fn insert_char(&mut self, ch: char) {
        if ch.is_control() {
            return;
        }
        self.text.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
    }

    pub fn backspace(&mut self) {
        if let Some((idx, _)) = self.text[..self.cursor].char_indices().next_back() {
            self.text.drain(idx..self.cursor);
            self.cursor = idx;
        }
    }

    pub fn delete_char(&mut self) {
        if let Some(ch) = self.text[self.cursor..].chars().next() {
            let end = self.cursor + ch.len_utf8();
            self.text.drain(self.cursor..end);
        }
    }

    pub fn move_left(&mut self) {
        if let Some((idx, _)) = self.text[..self.cursor].char_indices().next_back() {
            self.cursor = idx;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(ch) = self.text[self.cursor..].chars().next() {
            self.cursor += ch.len_utf8();
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    /// Cursor position counted in chars, for placing the terminal caret.
    pub fn cursor_column(&self) -> usize {
        self.text[..self.cursor].chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_places_cursor_at_end() {
        let mut buffer = TextBuffer::new();
        buffer.set("#fff");

        assert_eq!(buffer.as_str(), "#fff");
        assert_eq!(buffer.cursor_column(), 4);
    }

    #[test]
    fn edits_happen_at_the_cursor() {
        let mut buffer = TextBuffer::new();
        buffer.set("rgb(1,2)");
        buffer.move_left();
        buffer.insert_char(',');
        buffer.insert_char('3');
        assert_eq!(buffer.as_str(), "rgb(1,2,3)");

        buffer.move_home();
        buffer.delete_char();
        buffer.move_end();
        buffer.backspace();
        assert_eq!(buffer.as_str(), "gb(1,2,3");
    }

    #[test]
    fn ignores_control_characters_and_handles_multibyte() {
        let mut buffer = TextBuffer::new();
        buffer.insert_char('\n');
        buffer.insert_char('é');
        buffer.insert_char('a');
        buffer.move_left();
        buffer.backspace();
        assert_eq!(buffer.as_str(), "a");
        assert_eq!(buffer.cursor_column(), 0);
    }
}
