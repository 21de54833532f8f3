//! Application state for the TUI.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Paragraph},
    Frame,
};

use super::components::{
    header, stats, status_bar, Component, DensityPanel, Editor, HelpMenu, Palette,
};
use crate::{
    analysis::{self, LetterDensityEntry},
    config::Config,
};

/// Step used by the limit adjustment keys.
const LIMIT_STEP: usize = 10;

/// Limit applied when the limit checkbox is re-enabled with no stored value.
const DEFAULT_LIMIT: usize = 300;

/// Everything the TUI needs to start.
pub struct Settings {
    pub text: String,
    pub config: Config,
}

/// All metrics derived from the current text, recomputed from scratch on
/// every frame. Nothing here is cached between keystrokes.
pub struct Snapshot {
    pub characters: usize,
    pub words: usize,
    pub sentences: usize,
    pub reading_time: String,
    pub density: Vec<LetterDensityEntry>,
    /// `Some(limit)` while the character count exceeds the enabled limit.
    pub over_limit: Option<usize>,
}

/// Application state.
pub struct App {
    editor: Editor,
    density: DensityPanel,
    help: HelpMenu,
    pub config: Config,
    /// Whether app should exit.
    pub should_exit: bool,
}

impl App {
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self {
            editor: Editor::new(&settings.text),
            density: DensityPanel::default(),
            help: HelpMenu::default(),
            config: settings.config,
            should_exit: false,
        }
    }

    /// Derive all metrics from the current text and options.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let text = self.editor.text();
        let characters = analysis::character_count(&text, self.config.exclude_spaces);
        let words = analysis::word_count(&text);
        let over_limit = self
            .config
            .limit_enabled
            .then_some(self.config.character_limit)
            .flatten()
            .filter(|limit| characters > *limit);

        Snapshot {
            characters,
            words,
            sentences: analysis::sentence_count(&text),
            reading_time: analysis::reading_time(words),
            density: analysis::letter_density(&text),
            over_limit,
        }
    }

    /// Route a terminal event: help overlay first, then global chords,
    /// then the density panel, and finally the editor.
    pub fn handle_event(&mut self, event: &Event) {
        if self.help.handle_event(event) {
            return;
        }
        if let Event::Key(key) = event {
            if key.kind == KeyEventKind::Press && self.handle_global_key(key) {
                return;
            }
        }
        if self.density.handle_event(event) {
            return;
        }
        self.editor.handle_event(event);
    }

    fn handle_global_key(&mut self, key: &KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return self.handle_control_key(key.code);
        }
        match key.code {
            KeyCode::F(1) => {
                self.help.toggle();
                true
            }
            KeyCode::Esc => {
                self.should_exit = true;
                true
            }
            _ => false,
        }
    }

    fn handle_control_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q' | 'c') => {
                self.should_exit = true;
                true
            }
            KeyCode::Char('e') => {
                self.config.exclude_spaces = !self.config.exclude_spaces;
                tracing::debug!(exclude_spaces = self.config.exclude_spaces, "toggled");
                true
            }
            KeyCode::Char('l') => {
                self.toggle_limit();
                true
            }
            KeyCode::Char('t') => {
                self.config.theme = self.config.theme.toggled();
                true
            }
            KeyCode::Up => {
                self.adjust_limit(true);
                true
            }
            KeyCode::Down => {
                self.adjust_limit(false);
                true
            }
            // ctrl+d belongs to the density panel
            _ => false,
        }
    }

    /// Disabling drops the stored limit; re-enabling restores the default,
    /// matching the original checkbox behavior.
    fn toggle_limit(&mut self) {
        if self.config.limit_enabled {
            self.config.limit_enabled = false;
            self.config.character_limit = None;
        } else {
            self.config.limit_enabled = true;
            self.config.character_limit = self.config.character_limit.or(Some(DEFAULT_LIMIT));
        }
    }

    fn adjust_limit(&mut self, increase: bool) {
        if !self.config.limit_enabled {
            return;
        }
        if let Some(limit) = self.config.character_limit {
            self.config.character_limit = Some(if increase {
                limit + LIMIT_STEP
            } else {
                limit.saturating_sub(LIMIT_STEP)
            });
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let palette = Palette::for_theme(self.config.theme);
        let area = frame.area();

        frame.render_widget(
            Block::new().style(Style::new().bg(palette.background)),
            area,
        );

        let [header_area, editor_area, warning_area, stats_area, density_area, status_area] =
            Layout::vertical([
                Constraint::Length(1),
                Constraint::Min(6),
                Constraint::Length(1),
                Constraint::Length(4),
                Constraint::Fill(1),
                Constraint::Length(1),
            ])
            .areas(area);

        let snapshot = self.snapshot();

        header::render(frame, header_area, palette, self.config.theme);
        self.editor
            .render(frame, editor_area, palette, snapshot.over_limit.is_some());

        if let Some(limit) = snapshot.over_limit {
            frame.render_widget(
                Paragraph::new(Line::styled(
                    format!("⚠ Limit reached! Your text exceeds {limit} characters."),
                    Style::new()
                        .fg(palette.warning)
                        .add_modifier(Modifier::BOLD),
                )),
                warning_area,
            );
        }

        stats::render(
            frame,
            stats_area,
            palette,
            &snapshot,
            self.config.exclude_spaces,
        );
        self.density
            .render(frame, density_area, palette, &snapshot.density);
        status_bar::render(frame, status_area, palette, &self.config);

        self.help.render(frame, area, palette);
    }
}
