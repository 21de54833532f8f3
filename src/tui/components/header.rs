//! Header line with app title and active theme.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::Palette;
use crate::config::ThemeKind;

pub fn render(frame: &mut Frame, area: Rect, palette: &Palette, theme: ThemeKind) {
    let theme_label = match theme {
        ThemeKind::Dark => "dark",
        ThemeKind::Light => "light",
    };
    let theme_width = u16::try_from(8 + theme_label.len()).unwrap_or(u16::MAX);

    let [title_area, theme_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(theme_width)]).areas(area);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Character Counter",
            Style::new()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ))),
        title_area,
    );
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("theme: ", Style::new().fg(palette.dim)),
            Span::styled(theme_label, Style::new().fg(palette.text)),
        ])),
        theme_area,
    );
}
