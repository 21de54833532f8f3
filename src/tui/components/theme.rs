//! Color palettes for the dark and light themes.

use ratatui::style::Color;

use crate::config::ThemeKind;

/// Resolved colors for one theme.
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub dim: Color,
    pub border: Color,
    /// Purple accent used for highlights and density bars.
    pub accent: Color,
    /// Border/warning color for over-limit input.
    pub warning: Color,
    pub card_characters: Color,
    pub card_words: Color,
    pub card_sentences: Color,
    /// Ink on top of the stat cards.
    pub card_text: Color,
    /// Unfilled part of a density bar.
    pub bar_track: Color,
}

const DARK: Palette = Palette {
    background: Color::Rgb(18, 19, 26),
    text: Color::White,
    dim: Color::Rgb(64, 66, 84),
    border: Color::Rgb(42, 43, 55),
    accent: Color::Rgb(211, 160, 250),
    warning: Color::Rgb(218, 55, 1),
    card_characters: Color::Rgb(211, 160, 250),
    card_words: Color::Rgb(255, 159, 0),
    card_sentences: Color::Rgb(254, 129, 89),
    card_text: Color::Rgb(18, 19, 26),
    bar_track: Color::Rgb(33, 34, 44),
};

const LIGHT: Palette = Palette {
    background: Color::White,
    text: Color::Rgb(18, 19, 26),
    dim: Color::Rgb(64, 66, 84),
    border: Color::Rgb(229, 228, 239),
    accent: Color::Rgb(194, 124, 248),
    warning: Color::Rgb(218, 55, 1),
    card_characters: Color::Rgb(211, 160, 250),
    card_words: Color::Rgb(255, 159, 0),
    card_sentences: Color::Rgb(254, 129, 89),
    card_text: Color::Rgb(18, 19, 26),
    bar_track: Color::Rgb(242, 242, 247),
};

impl Palette {
    /// Palette for the given theme.
    #[must_use]
    pub const fn for_theme(kind: ThemeKind) -> &'static Self {
        match kind {
            ThemeKind::Dark => &DARK,
            ThemeKind::Light => &LIGHT,
        }
    }
}
