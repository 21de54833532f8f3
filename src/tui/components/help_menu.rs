//! HelpMenu component - overlay showing keyboard shortcuts.

use crossterm::event::{Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
    Frame,
};

use super::{Component, Palette};

const KEYBINDINGS: &[(&str, &str)] = &[
    ("type", "edit text"),
    ("arrows", "move cursor"),
    ("ctrl+e", "toggle exclude spaces"),
    ("ctrl+l", "toggle character limit"),
    ("ctrl+↑/↓", "adjust character limit"),
    ("ctrl+d", "expand letter density"),
    ("ctrl+t", "switch theme"),
    ("F1", "close help"),
    ("esc", "quit"),
];

/// Help menu popup showing keyboard shortcuts. While open it swallows all
/// key input so typing cannot reach the editor underneath.
#[derive(Default)]
pub struct HelpMenu {
    visible: bool,
}

impl HelpMenu {
    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, palette: &Palette) {
        if !self.visible {
            return;
        }

        let width = 38u16;
        #[allow(clippy::cast_possible_truncation)]
        let height = (KEYBINDINGS.len() as u16) + 2;
        let x = area.width.saturating_sub(width + 1);
        let y = area.height.saturating_sub(height + 2);
        let popup_area = Rect::new(x, y, width, height);

        frame.render_widget(Clear, popup_area);

        let block = Block::bordered()
            .title(" Help ")
            .border_style(Style::new().fg(palette.accent));

        let key_style = Style::new().fg(palette.accent);
        let help_lines: Vec<Line> = KEYBINDINGS
            .iter()
            .map(|(key, desc)| {
                Line::from(vec![
                    Span::styled(format!("{key:>9}"), key_style),
                    Span::styled(format!("  {desc}"), Style::new().fg(palette.text)),
                ])
            })
            .collect();

        frame.render_widget(Paragraph::new(help_lines).block(block), popup_area);
    }
}

impl Component for HelpMenu {
    fn handle_event(&mut self, event: &Event) -> bool {
        if !self.visible {
            return false;
        }

        let Event::Key(key) = event else {
            return false;
        };
        if key.kind != KeyEventKind::Press {
            return false;
        }

        if matches!(key.code, KeyCode::Esc | KeyCode::F(1)) {
            self.visible = false;
        }
        true
    }
}
