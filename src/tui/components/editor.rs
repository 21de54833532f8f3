//! Multi-line text input.
//!
//! Owns the text being analyzed as a list of lines plus a cursor. Editing is
//! deliberately minimal (insert, delete, cursor motion) since the widget is
//! about analyzing text, not authoring it. No undo history.

use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Position, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Paragraph},
    Frame,
};

use super::{Component, Palette};

pub struct Editor {
    /// Never empty; an empty buffer is one empty line.
    lines: Vec<String>,
    /// Cursor line index.
    row: usize,
    /// Cursor offset within the line, in chars.
    col: usize,
    scroll_row: usize,
    scroll_col: usize,
}

impl Editor {
    /// Editor seeded with `text`, cursor at the end.
    #[must_use]
    pub fn new(text: &str) -> Self {
        let lines: Vec<String> = if text.is_empty() {
            vec![String::new()]
        } else {
            text.split('\n').map(String::from).collect()
        };
        let row = lines.len() - 1;
        let col = char_len(&lines[row]);
        Self {
            lines,
            row,
            col,
            scroll_row: 0,
            scroll_col: 0,
        }
    }

    /// Current buffer contents as one string.
    #[must_use]
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    fn insert_char(&mut self, c: char) {
        let line = &mut self.lines[self.row];
        let at = byte_offset(line, self.col);
        line.insert(at, c);
        self.col += 1;
    }

    fn insert_newline(&mut self) {
        let line = &mut self.lines[self.row];
        let at = byte_offset(line, self.col);
        let rest = line.split_off(at);
        self.lines.insert(self.row + 1, rest);
        self.row += 1;
        self.col = 0;
    }

    fn backspace(&mut self) {
        if self.col > 0 {
            self.col -= 1;
            let line = &mut self.lines[self.row];
            let at = byte_offset(line, self.col);
            line.remove(at);
        } else if self.row > 0 {
            let removed = self.lines.remove(self.row);
            self.row -= 1;
            self.col = char_len(&self.lines[self.row]);
            self.lines[self.row].push_str(&removed);
        }
    }

    fn delete(&mut self) {
        let line_len = char_len(&self.lines[self.row]);
        if self.col < line_len {
            let line = &mut self.lines[self.row];
            let at = byte_offset(line, self.col);
            line.remove(at);
        } else if self.row + 1 < self.lines.len() {
            let next = self.lines.remove(self.row + 1);
            self.lines[self.row].push_str(&next);
        }
    }

    fn move_left(&mut self) {
        if self.col > 0 {
            self.col -= 1;
        } else if self.row > 0 {
            self.row -= 1;
            self.col = char_len(&self.lines[self.row]);
        }
    }

    fn move_right(&mut self) {
        if self.col < char_len(&self.lines[self.row]) {
            self.col += 1;
        } else if self.row + 1 < self.lines.len() {
            self.row += 1;
            self.col = 0;
        }
    }

    fn move_up(&mut self) {
        if self.row > 0 {
            self.row -= 1;
            self.col = self.col.min(char_len(&self.lines[self.row]));
        }
    }

    fn move_down(&mut self) {
        if self.row + 1 < self.lines.len() {
            self.row += 1;
            self.col = self.col.min(char_len(&self.lines[self.row]));
        }
    }

    /// Render the textarea. The border switches to the warning color while
    /// the character limit is exceeded.
    pub fn render(&mut self, frame: &mut Frame, area: Rect, palette: &Palette, over_limit: bool) {
        let border = if over_limit {
            palette.warning
        } else {
            palette.border
        };
        let block = Block::bordered()
            .title(" Text ")
            .border_style(Style::new().fg(border));
        let inner = block.inner(area);

        self.keep_cursor_visible(inner);

        let lines: Vec<Line> = self.lines.iter().map(|l| Line::raw(l.as_str())).collect();
        let paragraph = Paragraph::new(lines)
            .style(Style::new().fg(palette.text))
            .scroll((self.scroll_row as u16, self.scroll_col as u16))
            .block(block);
        frame.render_widget(paragraph, area);

        if inner.width > 0 && inner.height > 0 {
            let x = inner.x + (self.col - self.scroll_col) as u16;
            let y = inner.y + (self.row - self.scroll_row) as u16;
            frame.set_cursor_position(Position { x, y });
        }
    }

    fn keep_cursor_visible(&mut self, inner: Rect) {
        let height = inner.height.max(1) as usize;
        let width = inner.width.max(1) as usize;
        if self.row < self.scroll_row {
            self.scroll_row = self.row;
        } else if self.row >= self.scroll_row + height {
            self.scroll_row = self.row + 1 - height;
        }
        if self.col < self.scroll_col {
            self.scroll_col = self.col;
        } else if self.col >= self.scroll_col + width {
            self.scroll_col = self.col + 1 - width;
        }
    }
}

impl Component for Editor {
    fn handle_event(&mut self, event: &Event) -> bool {
        let Event::Key(key) = event else {
            return false;
        };
        if key.kind != KeyEventKind::Press {
            return false;
        }
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return false;
        }

        match key.code {
            KeyCode::Char(c) => self.insert_char(c),
            KeyCode::Enter => self.insert_newline(),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Up => self.move_up(),
            KeyCode::Down => self.move_down(),
            KeyCode::Home => self.col = 0,
            KeyCode::End => self.col = char_len(&self.lines[self.row]),
            _ => return false,
        }
        true
    }
}

fn char_len(line: &str) -> usize {
    line.chars().count()
}

/// Byte offset of the `col`-th char, or the line's end past the last char.
fn byte_offset(line: &str, col: usize) -> usize {
    line.char_indices()
        .nth(col)
        .map_or(line.len(), |(offset, _)| offset)
}
