//! Quiz Composer - terminal authoring form for multiple-choice quizzes
//!
//! A Ratatui-based TUI for writing a quiz, its questions and options, and
//! their French and Arabic translations, then submitting it as a
//! form-encoded body.

mod app;
mod config;
mod platform;
mod state;
mod submit;
mod ui;

use anyhow::{Context, Result};
use app::App;
use config::ComposerConfig;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::{self, File};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use submit::FileSink;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_FILE_NAME: &str = "quiz-composer.log";

#[tokio::main]
async fn main() -> Result<()> {
    let (config, config_error) = match ComposerConfig::load() {
        Ok(config) => (config, None),
        Err(err) => (ComposerConfig::default(), Some(err)),
    };

    init_logging(&config)?;
    if let Some(err) = config_error {
        tracing::warn!("using default configuration: {err:#}");
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let sink = FileSink::new(config.resolved_output_dir());
    let mut app = App::new(&config, Box::new(sink));
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        tracing::error!("{err:#}");
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    tracing::info!("session closed");
    Ok(())
}

/// Install the tracing subscriber. The terminal belongs to the UI, so logs
/// go to a file unless the config asks for stderr or no data dir exists.
fn init_logging(config: &ComposerConfig) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "quiz_composer=info".into());

    let log_dir = config
        .log_to_file()
        .then(ComposerConfig::log_dir)
        .flatten();

    match log_dir {
        Some(dir) => {
            fs::create_dir_all(&dir)
                .with_context(|| format!("creating log directory {}", dir.display()))?;
            let path = dir.join(LOG_FILE_NAME);
            let file = File::options()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("opening {}", path.display()))?;
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(Arc::new(file)),
                )
                .init();
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
                .init();
        }
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Windows reports releases as well
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                // Global quit: Ctrl+C
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
                {
                    app.request_quit();
                } else {
                    app.handle_key(key).await?;
                }
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
