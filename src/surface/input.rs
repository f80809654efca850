use unicode_width::{UnicodeWidthChar as _, UnicodeWidthStr as _};

/// A single line text input.
///
/// `pos` and `scroll` are char indexes into `value`; `scroll` is the first
/// char that fits on screen.
#[derive(Debug)]
pub struct Input {
    width: usize,
    value: String,
    scroll: usize,
    pos: usize,
    focus: bool,
}

impl Input {
    pub fn new(value: &str) -> Self {
        let mut input = Self {
            width: 80,
            value: String::new(),
            scroll: 0,
            pos: 0,
            focus: false,
        };
        input.set_value(value);
        input
    }

    pub fn render(&self, out: &mut impl textmode::Textmode) {
        out.write_str(self.visible_value());
    }

    pub fn resize(&mut self, width: usize) {
        self.width = width.max(1);
        self.set_pos(self.pos);
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, s: &str) {
        self.value = s.to_string();
        self.scroll = 0;
        self.set_pos(s.chars().count());
    }

    pub fn focus(&mut self) {
        self.focus = true;
    }

    pub fn has_focus(&self) -> bool {
        self.focus
    }

    pub fn add_input(&mut self, s: &str) {
        self.value.insert_str(self.byte_pos(), s);
        self.inc_pos(s.chars().count());
    }

    pub fn backspace(&mut self) {
        while self.pos > 0 {
            self.dec_pos(1);
            let width =
                self.value.remove(self.byte_pos()).width().unwrap_or(0);
            if width > 0 {
                break;
            }
        }
    }

    pub fn clear_backwards(&mut self) {
        self.value = self.value.chars().skip(self.pos).collect();
        self.scroll = 0;
        self.set_pos(0);
    }

    pub fn cursor_left(&mut self) {
        if self.pos == 0 {
            return;
        }
        self.dec_pos(1);
        while let Some(c) = self.value.chars().nth(self.pos) {
            if self.pos > 0 && c.width().unwrap_or(0) == 0 {
                self.dec_pos(1);
            } else {
                break;
            }
        }
    }

    pub fn cursor_right(&mut self) {
        if self.pos == self.value.chars().count() {
            return;
        }
        self.inc_pos(1);
        while let Some(c) = self.value.chars().nth(self.pos) {
            if c.width().unwrap_or(0) == 0 {
                self.inc_pos(1);
            } else {
                break;
            }
        }
    }

    /// Screen columns between the start of the visible text and the cursor.
    pub fn cursor_offset(&self) -> usize {
        self.value[self.byte_at(self.scroll)..self.byte_pos()].width()
    }

    fn set_pos(&mut self, pos: usize) {
        self.pos = pos;
        if self.pos < self.scroll || self.cursor_offset() >= self.width {
            self.scroll = self.pos;
            let mut extra_scroll = self.width / 2;
            while extra_scroll > 0 && self.scroll > 0 {
                self.scroll -= 1;
                extra_scroll = extra_scroll.saturating_sub(
                    self.value
                        .chars()
                        .nth(self.scroll)
                        .and_then(|c| c.width())
                        .unwrap_or(1),
                );
            }
        }
    }

    fn inc_pos(&mut self, inc: usize) {
        self.set_pos(self.pos + inc);
    }

    fn dec_pos(&mut self, dec: usize) {
        self.set_pos(self.pos - dec);
    }

    fn byte_pos(&self) -> usize {
        self.byte_at(self.pos)
    }

    fn byte_at(&self, idx: usize) -> usize {
        self.value
            .char_indices()
            .nth(idx)
            .map_or(self.value.len(), |(i, _)| i)
    }

    fn visible_value(&self) -> &str {
        let start = self.byte_at(self.scroll);
        let mut end = self.value.len();
        let mut width = 0;
        for (i, c) in self.value.char_indices().skip(self.scroll) {
            if width >= self.width {
                end = i;
                break;
            }
            width += c.width().unwrap_or(1);
        }
        &self.value[start..end]
    }
}
