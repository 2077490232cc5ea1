use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyModifiers;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::WidgetRef;
use textwrap::Options;
use unicode_segmentation::GraphemeCursor;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use textcounter_core::char_count;

/// Multi-line text-entry surface.
///
/// Owns the live text and the cursor; the host only ever reads the text back
/// through the control's outputs. An optional maximum-length constraint caps
/// the character count the way an HTML `maxlength` attribute would: edits
/// that would push the count past the cap are truncated, existing overflow
/// is left untouched.
#[derive(Debug)]
pub struct TextArea {
    text: String,
    cursor: usize,
    preferred_col: Option<usize>,
    max_chars: Option<usize>,
}

impl TextArea {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            cursor: 0,
            preferred_col: None,
            max_chars: None,
        }
    }

    pub fn with_text(text: &str) -> Self {
        let mut ta = Self::new();
        ta.text.push_str(text);
        ta.cursor = ta.text.len();
        ta
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn set_cursor(&mut self, pos: usize) {
        self.cursor = pos.min(self.text.len());
        self.preferred_col = None;
    }

    /// (Re)apply or clear the maximum-length constraint. Only future inserts
    /// are affected; text already over the cap stays as typed.
    pub fn set_max_chars(&mut self, max_chars: Option<usize>) {
        self.max_chars = max_chars;
    }

    pub fn max_chars(&self) -> Option<usize> {
        self.max_chars
    }

    /// Insert at the cursor, truncated so the total character count never
    /// exceeds the configured cap.
    pub fn insert_str(&mut self, text: &str) {
        let admitted = match self.max_chars {
            Some(cap) => {
                let room = cap.saturating_sub(char_count(&self.text));
                match text.char_indices().nth(room) {
                    Some((end, _)) => &text[..end],
                    None => text,
                }
            }
            None => text,
        };
        if admitted.is_empty() {
            return;
        }
        self.text.insert_str(self.cursor, admitted);
        self.cursor += admitted.len();
        self.preferred_col = None;
    }

    /// Delete the grapheme cluster before the cursor.
    pub fn delete_backward(&mut self) {
        let start = self.prev_boundary(self.cursor);
        self.text.replace_range(start..self.cursor, "");
        self.cursor = start;
        self.preferred_col = None;
    }

    /// Delete the grapheme cluster after the cursor.
    pub fn delete_forward(&mut self) {
        let end = self.next_boundary(self.cursor);
        self.text.replace_range(self.cursor..end, "");
        self.preferred_col = None;
    }

    /// Delete from the start of the previous word up to the cursor.
    pub fn delete_backward_word(&mut self) {
        let start = self.beginning_of_previous_word();
        self.text.replace_range(start..self.cursor, "");
        self.cursor = start;
        self.preferred_col = None;
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor = self.prev_boundary(self.cursor);
        self.preferred_col = None;
    }

    pub fn move_cursor_right(&mut self) {
        self.cursor = self.next_boundary(self.cursor);
        self.preferred_col = None;
    }

    pub fn move_cursor_up(&mut self) {
        match self.text[..self.cursor].rfind('\n') {
            Some(prev_nl) => {
                let target_col = self.target_col();
                let line_start = self.beginning_of_line(prev_nl);
                self.move_to_display_col(line_start, prev_nl, target_col);
            }
            None => {
                self.cursor = 0;
                self.preferred_col = None;
            }
        }
    }

    pub fn move_cursor_down(&mut self) {
        let target_col = self.target_col();
        match self.text[self.cursor..].find('\n') {
            Some(rel) => {
                let line_start = self.cursor + rel + 1;
                let line_end = self.end_of_line(line_start);
                self.move_to_display_col(line_start, line_end, target_col);
            }
            None => {
                self.cursor = self.text.len();
                self.preferred_col = None;
            }
        }
    }

    pub fn move_cursor_to_beginning_of_line(&mut self) {
        self.cursor = self.beginning_of_line(self.cursor);
        self.preferred_col = None;
    }

    pub fn move_cursor_to_end_of_line(&mut self) {
        self.cursor = self.end_of_line(self.cursor);
        self.preferred_col = None;
    }

    /// Apply a key event to the surface. Unhandled keys (function keys,
    /// modifier chords without a binding) leave the state untouched.
    pub fn input(&mut self, event: KeyEvent) {
        match event {
            KeyEvent {
                code: KeyCode::Char(c),
                modifiers: KeyModifiers::NONE | KeyModifiers::SHIFT,
                ..
            } => self.insert_str(&c.to_string()),
            KeyEvent {
                code: KeyCode::Enter,
                ..
            } => self.insert_str("\n"),
            KeyEvent {
                code: KeyCode::Backspace,
                ..
            } => self.delete_backward(),
            KeyEvent {
                code: KeyCode::Delete,
                ..
            } => self.delete_forward(),
            KeyEvent {
                code: KeyCode::Char('w'),
                modifiers: KeyModifiers::CONTROL,
                ..
            } => self.delete_backward_word(),
            KeyEvent {
                code: KeyCode::Left,
                ..
            } => self.move_cursor_left(),
            KeyEvent {
                code: KeyCode::Right,
                ..
            } => self.move_cursor_right(),
            KeyEvent {
                code: KeyCode::Up, ..
            } => self.move_cursor_up(),
            KeyEvent {
                code: KeyCode::Down,
                ..
            } => self.move_cursor_down(),
            KeyEvent {
                code: KeyCode::Home,
                ..
            } => self.move_cursor_to_beginning_of_line(),
            KeyEvent {
                code: KeyCode::End, ..
            } => self.move_cursor_to_end_of_line(),
            other => {
                tracing::debug!("unhandled key event in TextArea: {other:?}");
            }
        }
    }

    fn prev_boundary(&self, pos: usize) -> usize {
        let mut gc = GraphemeCursor::new(pos, self.text.len(), false);
        match gc.prev_boundary(&self.text, 0) {
            Ok(Some(boundary)) => boundary,
            _ => 0,
        }
    }

    fn next_boundary(&self, pos: usize) -> usize {
        let mut gc = GraphemeCursor::new(pos, self.text.len(), false);
        match gc.next_boundary(&self.text, 0) {
            Ok(Some(boundary)) => boundary,
            _ => self.text.len(),
        }
    }

    fn beginning_of_line(&self, pos: usize) -> usize {
        self.text[..pos].rfind('\n').map(|i| i + 1).unwrap_or(0)
    }

    fn end_of_line(&self, pos: usize) -> usize {
        self.text[pos..]
            .find('\n')
            .map(|i| i + pos)
            .unwrap_or(self.text.len())
    }

    fn beginning_of_previous_word(&self) -> usize {
        match self.text[..self.cursor].rfind(|c: char| !c.is_whitespace()) {
            Some(last_non_ws) => self.text[..last_non_ws]
                .rfind(|c: char| c.is_whitespace())
                .map(|i| i + 1)
                .unwrap_or(0),
            None => 0,
        }
    }

    fn target_col(&mut self) -> usize {
        match self.preferred_col {
            Some(c) => c,
            None => {
                let bol = self.beginning_of_line(self.cursor);
                let c = self.text[bol..self.cursor].width();
                self.preferred_col = Some(c);
                c
            }
        }
    }

    fn move_to_display_col(&mut self, line_start: usize, line_end: usize, target_col: usize) {
        let mut width_so_far = 0usize;
        for (i, g) in self.text[line_start..line_end].grapheme_indices(true) {
            width_so_far += g.width();
            if width_so_far > target_col {
                self.cursor = line_start + i;
                return;
            }
        }
        self.cursor = line_end;
    }

    fn wrapped_lines(&self, width: u16) -> Vec<String> {
        if width == 0 {
            return Vec::new();
        }
        textwrap::wrap(
            &self.text,
            Options::new(width as usize).wrap_algorithm(textwrap::WrapAlgorithm::FirstFit),
        )
        .into_iter()
        .map(|line| line.into_owned())
        .collect()
    }
}

impl Default for TextArea {
    fn default() -> Self {
        Self::new()
    }
}

impl WidgetRef for &TextArea {
    fn render_ref(&self, area: Rect, buf: &mut Buffer) {
        for (i, line) in self
            .wrapped_lines(area.width)
            .iter()
            .take(area.height as usize)
            .enumerate()
        {
            buf.set_string(area.x, area.y + i as u16, line, Style::default());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn insert_appends_at_cursor() {
        let mut ta = TextArea::with_text("hello");
        ta.insert_str("!");
        assert_eq!(ta.text(), "hello!");
        assert_eq!(ta.cursor(), 6);

        ta.set_cursor(0);
        ta.insert_str("X");
        assert_eq!(ta.text(), "Xhello!");
        assert_eq!(ta.cursor(), 1);
    }

    #[test]
    fn max_chars_truncates_inserts() {
        let mut ta = TextArea::with_text("hell");
        ta.set_max_chars(Some(5));
        ta.insert_str("o world");
        assert_eq!(ta.text(), "hello");

        // At the cap, further inserts are dropped entirely.
        ta.insert_str("!");
        assert_eq!(ta.text(), "hello");
    }

    #[test]
    fn max_chars_counts_characters_not_bytes() {
        let mut ta = TextArea::new();
        ta.set_max_chars(Some(2));
        ta.insert_str("日本語");
        assert_eq!(ta.text(), "日本");
    }

    #[test]
    fn clearing_max_chars_lifts_the_cap() {
        let mut ta = TextArea::with_text("hello");
        ta.set_max_chars(Some(5));
        ta.insert_str("!");
        assert_eq!(ta.text(), "hello");
        ta.set_max_chars(None);
        ta.insert_str("!");
        assert_eq!(ta.text(), "hello!");
    }

    #[test]
    fn existing_overflow_survives_the_cap() {
        let mut ta = TextArea::with_text("abcdef");
        ta.set_max_chars(Some(3));
        assert_eq!(ta.text(), "abcdef");
        ta.insert_str("g");
        assert_eq!(ta.text(), "abcdef");
        ta.delete_backward();
        assert_eq!(ta.text(), "abcde");
    }

    #[test]
    fn backspace_and_delete_handle_edges() {
        let mut ta = TextArea::with_text("abc");
        ta.set_cursor(1);
        ta.delete_backward();
        assert_eq!(ta.text(), "bc");
        assert_eq!(ta.cursor(), 0);

        // Backspace at start is a no-op.
        ta.delete_backward();
        assert_eq!(ta.text(), "bc");

        ta.delete_forward();
        assert_eq!(ta.text(), "c");

        // Delete at end is a no-op.
        ta.set_cursor(1);
        ta.delete_forward();
        assert_eq!(ta.text(), "c");
    }

    #[test]
    fn backspace_removes_whole_grapheme() {
        let mut ta = TextArea::with_text("a👍");
        ta.delete_backward();
        assert_eq!(ta.text(), "a");
    }

    #[test]
    fn delete_backward_word_stops_at_word_start() {
        let mut ta = TextArea::with_text("foo bar");
        ta.delete_backward_word();
        assert_eq!(ta.text(), "foo ");
        assert_eq!(ta.cursor(), 4);

        let mut ta = TextArea::with_text("hello   world  ");
        ta.delete_backward_word();
        assert_eq!(ta.text(), "hello   ");
    }

    #[test]
    fn horizontal_movement_is_grapheme_aware() {
        let mut ta = TextArea::with_text("a👍b");
        ta.move_cursor_left();
        let after_first = ta.cursor();
        ta.move_cursor_left();
        let after_second = ta.cursor();
        assert!(after_second < after_first);

        ta.move_cursor_right();
        ta.move_cursor_right();
        assert_eq!(ta.cursor(), ta.text().len());
    }

    #[test]
    fn vertical_movement_preserves_display_column() {
        let mut ta = TextArea::with_text("short\nloooooooooong\nmid");
        let second_line_start = 6;
        ta.set_cursor(second_line_start + 5);

        ta.move_cursor_up();
        assert_eq!(ta.cursor(), 5); // clamped to first line's length

        ta.move_cursor_up();
        assert_eq!(ta.cursor(), 0);

        ta.move_cursor_down();
        assert!(ta.cursor() >= second_line_start);

        // Down on the last line jumps to the end of text.
        ta.move_cursor_down();
        ta.move_cursor_down();
        assert_eq!(ta.cursor(), ta.text().len());
    }

    #[test]
    fn home_and_end_target_line_bounds() {
        let mut ta = TextArea::with_text("one\ntwo");
        ta.set_cursor(5);
        ta.input(key(KeyCode::Home));
        assert_eq!(ta.cursor(), 4);
        ta.input(key(KeyCode::End));
        assert_eq!(ta.cursor(), 7);
    }

    #[test]
    fn key_events_edit_the_text() {
        let mut ta = TextArea::new();
        for c in "hi".chars() {
            ta.input(key(KeyCode::Char(c)));
        }
        ta.input(key(KeyCode::Enter));
        ta.input(key(KeyCode::Char('!')));
        assert_eq!(ta.text(), "hi\n!");

        ta.input(key(KeyCode::Backspace));
        assert_eq!(ta.text(), "hi\n");
    }

    #[test]
    fn render_wraps_and_clips_to_area() {
        let ta = TextArea::with_text("hello world here");
        let area = Rect::new(0, 0, 6, 2);
        let mut buf = Buffer::empty(Rect::new(0, 0, 6, 3));
        (&ta).render_ref(area, &mut buf);

        let row = |y: u16| -> String {
            (0..6).map(|x| buf[(x, y)].symbol().to_string()).collect()
        };
        assert_eq!(row(0).trim_end(), "hello");
        assert_eq!(row(1).trim_end(), "world");
        // Third wrapped line is clipped by the 2-row area.
        assert_eq!(row(2).trim_end(), "");
    }
}
