//! TUI for analyzing text as it is typed.

pub mod app;
mod components;

use std::{io::stdout, time::Duration};

use app::{App, Settings};
use crossterm::{
    event::EventStream,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use futures::StreamExt;
use ratatui::prelude::*;
use tokio::time::sleep;

use crate::{config, error::Result};

pub async fn run(settings: Settings) -> Result<()> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let mut app = App::new(settings);
    let mut event_stream = EventStream::new();

    while !app.should_exit {
        terminal.draw(|frame| app.render(frame))?;

        tokio::select! {
            Some(Ok(event)) = event_stream.next() => {
                app.handle_event(&event);
            }
            () = sleep(Duration::from_millis(250)) => {}
        }
    }

    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    if let Err(e) = config::save(&app.config) {
        tracing::warn!("Could not save settings: {e}");
    }

    Ok(())
}
