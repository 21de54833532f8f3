//! Status bar with keybindings and active option flags.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::Palette;
use crate::config::Config;

const KEYBINDINGS: &[(&str, &str)] = &[
    ("F1", "help"),
    ("^E", "spaces"),
    ("^L", "limit"),
    ("^T", "theme"),
    ("Esc", "quit"),
];

pub fn render(frame: &mut Frame, area: Rect, palette: &Palette, config: &Config) {
    let separator = Span::styled(" │ ", Style::new().fg(palette.dim));
    let keybind_spans = KEYBINDINGS.iter().enumerate().flat_map(|(i, (key, desc))| {
        let prefix = (i > 0).then(|| separator.clone());
        prefix.into_iter().chain([
            Span::styled(*key, Style::new().fg(palette.accent)),
            Span::styled(format!(": {desc}"), Style::new().fg(palette.dim)),
        ])
    });

    let option_status = build_option_status(config);
    let option_span = (!option_status.is_empty())
        .then(|| Span::styled(format!(" [{option_status}]"), Style::new().fg(palette.text)));

    let spans: Vec<Span> = keybind_spans.chain(option_span).collect();
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn build_option_status(config: &Config) -> String {
    let mut parts = Vec::new();
    if config.exclude_spaces {
        parts.push("no-space".to_owned());
    }
    if config.limit_enabled {
        if let Some(limit) = config.character_limit {
            parts.push(format!("limit {limit}"));
        }
    }
    parts.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_status_lists_active_options() {
        let config = Config::default();
        assert_eq!(build_option_status(&config), "no-space, limit 300");
    }

    #[test]
    fn test_option_status_empty_when_nothing_active() {
        let config = Config {
            exclude_spaces: false,
            character_limit: None,
            limit_enabled: false,
            ..Config::default()
        };
        assert_eq!(build_option_status(&config), "");
    }
}
