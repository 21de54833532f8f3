mod analysis;
mod config;
mod error;
mod tui;

use std::path::PathBuf;

use clap::Parser;
use config::ThemeKind;
use tui::app::Settings;

/// Text seeded into the editor when no file is given, same as the widget
/// this tool grew out of.
const SEED_TEXT: &str = "Design is the silent ambassador of your brand. \
    Simplicity is key to effective communication, creating clarity in every \
    interaction. A great design transforms complex ideas into elegant \
    solutions, making them easy to understand. It blends aesthetics and \
    functionality seamlessly.";

#[derive(Parser)]
#[command(name = "textlens")]
#[command(about = "Real-time text analysis in the terminal")]
struct Cli {
    /// File to preload into the editor
    file: Option<PathBuf>,
    /// Count characters with whitespace removed
    #[arg(long)]
    exclude_spaces: bool,
    /// Character limit for the over-length warning
    #[arg(long)]
    limit: Option<usize>,
    /// Color theme
    #[arg(long, value_enum)]
    theme: Option<ThemeKind>,
    /// Write a debug log to /tmp/textlens.log
    #[arg(long)]
    log: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // The TUI owns the terminal, so logs go to a file
    if cli.log {
        let log_file =
            std::fs::File::create("/tmp/textlens.log").expect("Failed to create log file");
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::from_default_env()
                    .add_directive("textlens=debug".parse().unwrap()),
            )
            .with_writer(log_file)
            .with_ansi(false)
            .with_target(false)
            .init();
    }

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> error::Result<()> {
    let mut config = config::load()?;
    if cli.exclude_spaces {
        config.exclude_spaces = true;
    }
    if let Some(limit) = cli.limit {
        config.character_limit = Some(limit);
        config.limit_enabled = true;
    }
    if let Some(theme) = cli.theme {
        config.theme = theme;
    }

    let text = match &cli.file {
        Some(path) => std::fs::read_to_string(path)?,
        None => SEED_TEXT.to_owned(),
    };

    tui::run(Settings { text, config }).await
}
