use unicode_width::UnicodeWidthStr;

/// Single-line text field with a byte-offset cursor kept on char boundaries.
#[derive(Debug, Default, Clone)]
pub struct InputField {
    text: String,
    cursor: usize,
}

impl InputField {
    pub fn text(&self) -> &str {
        &self.text
    }

    #[cfg(test)]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Replaces the contents and moves the cursor to the end.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Display column of the cursor.
    pub fn caret_col(&self) -> u16 {
        UnicodeWidthStr::width(&self.text[..self.cursor]) as u16
    }

    pub fn left(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        while self.cursor > 0 && !self.text.is_char_boundary(self.cursor) {
            self.cursor -= 1;
        }
    }

    pub fn right(&mut self) {
        if self.cursor >= self.text.len() {
            return;
        }
        self.cursor += 1;
        while self.cursor < self.text.len() && !self.text.is_char_boundary(self.cursor) {
            self.cursor += 1;
        }
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn insert(&mut self, ch: char) {
        self.text.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let end = self.cursor;
        self.left();
        self.text.drain(self.cursor..end);
    }

    pub fn delete(&mut self) {
        if self.cursor >= self.text.len() {
            return;
        }
        let start = self.cursor;
        self.right();
        self.text.drain(start..self.cursor);
        self.cursor = start;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(text: &str) -> InputField {
        let mut input = InputField::default();
        input.set_text(text);
        input
    }

    #[test]
    fn test_insert_at_cursor() {
        let mut input = field("exmple.com");
        input.home();
        input.right();
        input.right();
        input.insert('a');
        assert_eq!(input.text(), "example.com");
        assert_eq!(input.cursor(), 3);
    }

    #[test]
    fn test_backspace_and_delete() {
        let mut input = field("abcd");
        input.backspace();
        assert_eq!(input.text(), "abc");

        input.home();
        input.delete();
        assert_eq!(input.text(), "bc");
        assert_eq!(input.cursor(), 0);

        input.backspace();
        assert_eq!(input.text(), "bc");

        input.end();
        input.delete();
        assert_eq!(input.text(), "bc");
    }

    #[test]
    fn test_multibyte_boundaries() {
        let mut input = field("añ🦀");
        input.left();
        assert_eq!(input.cursor(), "añ".len());
        input.backspace();
        assert_eq!(input.text(), "a🦀");
        input.delete();
        assert_eq!(input.text(), "a");
        input.insert('é');
        assert_eq!(input.text(), "aé");
        assert_eq!(input.cursor(), "aé".len());
    }

    #[test]
    fn test_caret_col_uses_display_width() {
        let mut input = field("日本");
        assert_eq!(input.caret_col(), 4);
        input.left();
        assert_eq!(input.caret_col(), 2);
    }

    #[test]
    fn test_clear() {
        let mut input = field("example.com");
        input.clear();
        assert_eq!(input.text(), "");
        assert_eq!(input.cursor(), 0);
    }
}
