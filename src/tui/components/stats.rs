//! Stat cards: total characters, word count, sentence count, reading time.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use super::Palette;
use crate::tui::app::Snapshot;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    palette: &Palette,
    snapshot: &Snapshot,
    exclude_spaces: bool,
) {
    let [reading_area, cards_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("Approx. reading time: ", Style::new().fg(palette.dim)),
            Span::styled(snapshot.reading_time.as_str(), Style::new().fg(palette.text)),
        ])),
        reading_area,
    );

    let [chars_area, words_area, sentences_area] = Layout::horizontal([
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
    ])
    .areas(cards_area);

    let characters_label = if exclude_spaces {
        "Total Characters (no space)"
    } else {
        "Total Characters"
    };
    card(
        frame,
        chars_area,
        palette.card_characters,
        palette.card_text,
        &snapshot.characters.to_string(),
        characters_label,
    );
    card(
        frame,
        words_area,
        palette.card_words,
        palette.card_text,
        &snapshot.words.to_string(),
        "Word Count",
    );
    // Zero-padded to two digits, as in the original cards.
    card(
        frame,
        sentences_area,
        palette.card_sentences,
        palette.card_text,
        &format!("{:02}", snapshot.sentences),
        "Sentence Count",
    );
}

fn card(frame: &mut Frame, area: Rect, background: Color, ink: Color, value: &str, label: &str) {
    let block = Block::new().style(Style::new().bg(background));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::styled(
            format!(" {value}"),
            Style::new().fg(ink).add_modifier(Modifier::BOLD),
        ),
        Line::styled(format!(" {label}"), Style::new().fg(ink)),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}
