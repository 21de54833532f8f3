//! Letter density panel with proportional bars.

use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::{Component, Palette};
use crate::analysis::LetterDensityEntry;

/// How many entries are shown while the panel is collapsed.
const DENSITY_PREVIEW_LEN: usize = 5;

/// Width reserved for the letter prefix and the `count (pp.pp%)` suffix.
const ROW_CHROME_WIDTH: u16 = 18;

#[derive(Default)]
pub struct DensityPanel {
    expanded: bool,
}

impl DensityPanel {
    /// Entries visible at the current expansion state.
    fn visible<'a>(&self, entries: &'a [LetterDensityEntry]) -> &'a [LetterDensityEntry] {
        if self.expanded {
            entries
        } else {
            &entries[..entries.len().min(DENSITY_PREVIEW_LEN)]
        }
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        palette: &Palette,
        entries: &[LetterDensityEntry],
    ) {
        let mut lines = vec![Line::styled(
            "Letter Density",
            Style::new()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        )];

        if entries.is_empty() {
            lines.push(Line::styled(
                "Enter some text to see letter density analysis.",
                Style::new().fg(palette.dim),
            ));
        } else {
            let bar_width = area.width.saturating_sub(ROW_CHROME_WIDTH).max(1);
            for entry in self.visible(entries) {
                lines.push(density_row(entry, bar_width, palette));
            }
            if entries.len() > DENSITY_PREVIEW_LEN {
                let label = if self.expanded {
                    "see less (ctrl+d)"
                } else {
                    "see more (ctrl+d)"
                };
                lines.push(Line::styled(label, Style::new().fg(palette.accent)));
            }
        }

        frame.render_widget(Paragraph::new(lines), area);
    }
}

fn density_row(entry: &LetterDensityEntry, bar_width: u16, palette: &Palette) -> Line<'static> {
    let filled = (f64::from(bar_width) * entry.percentage_value() / 100.0).round() as u16;
    let filled = filled.min(bar_width);
    let track = bar_width - filled;

    Line::from(vec![
        Span::styled(format!("{} ", entry.letter), Style::new().fg(palette.text)),
        Span::styled("█".repeat(filled as usize), Style::new().fg(palette.accent)),
        Span::styled("█".repeat(track as usize), Style::new().fg(palette.bar_track)),
        Span::styled(
            format!(" {} ({}%)", entry.count, entry.percentage),
            Style::new().fg(palette.dim),
        ),
    ])
}

impl Component for DensityPanel {
    fn handle_event(&mut self, event: &Event) -> bool {
        let Event::Key(key) = event else {
            return false;
        };
        if key.kind != KeyEventKind::Press {
            return false;
        }
        if key.code == KeyCode::Char('d') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.expanded = !self.expanded;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyEvent;

    use super::*;
    use crate::analysis::letter_density;

    fn ctrl_d() -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL))
    }

    #[test]
    fn test_collapsed_shows_at_most_five_entries() {
        let panel = DensityPanel::default();
        let entries = letter_density("abcdefgh");
        assert_eq!(panel.visible(&entries).len(), 5);
    }

    #[test]
    fn test_expand_toggle() {
        let mut panel = DensityPanel::default();
        let entries = letter_density("abcdefgh");

        assert!(panel.handle_event(&ctrl_d()));
        assert_eq!(panel.visible(&entries).len(), 8);

        assert!(panel.handle_event(&ctrl_d()));
        assert_eq!(panel.visible(&entries).len(), 5);
    }

    #[test]
    fn test_short_lists_are_untouched() {
        let panel = DensityPanel::default();
        let entries = letter_density("abc");
        assert_eq!(panel.visible(&entries).len(), 3);
    }

    #[test]
    fn test_plain_d_is_ignored() {
        let mut panel = DensityPanel::default();
        let plain = Event::Key(KeyEvent::new(KeyCode::Char('d'), KeyModifiers::NONE));
        assert!(!panel.handle_event(&plain));
    }
}
