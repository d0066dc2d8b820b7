use crate::util::unicode;

/// A single-line text field: a buffer plus a byte-offset cursor that always
/// sits on a grapheme boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineInput {
    buffer: String,
    cursor: usize,
    /// Maximum length in characters (None = unbounded)
    max_chars: Option<usize>,
}

impl LineInput {
    /// An empty, unbounded field
    pub fn new() -> Self {
        LineInput::default()
    }

    /// A field pre-filled with `text`, cursor at the end
    pub fn with_text(text: &str) -> Self {
        LineInput {
            buffer: text.to_string(),
            cursor: text.len(),
            max_chars: None,
        }
    }

    /// Limit the field to `max` characters
    pub fn max_chars(mut self, max: usize) -> Self {
        self.max_chars = Some(max);
        self
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Empty the field
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    /// Insert a character at the cursor. Returns false if the field is full.
    pub fn insert(&mut self, c: char) -> bool {
        if self
            .max_chars
            .is_some_and(|max| self.buffer.chars().count() >= max)
        {
            return false;
        }
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
        true
    }

    /// Delete the grapheme before the cursor
    pub fn backspace(&mut self) {
        if let Some(prev) = unicode::prev_grapheme_boundary(&self.buffer, self.cursor) {
            self.buffer.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    /// Delete the grapheme under the cursor
    pub fn delete(&mut self) {
        if let Some(next) = unicode::next_grapheme_boundary(&self.buffer, self.cursor) {
            self.buffer.drain(self.cursor..next);
        }
    }

    /// Delete from the start of the previous word up to the cursor
    pub fn delete_word_back(&mut self) {
        let start = unicode::word_boundary_left(&self.buffer, self.cursor);
        self.buffer.drain(start..self.cursor);
        self.cursor = start;
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = unicode::prev_grapheme_boundary(&self.buffer, self.cursor) {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = unicode::next_grapheme_boundary(&self.buffer, self.cursor) {
            self.cursor = next;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.buffer.len();
    }
}
