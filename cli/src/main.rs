//! Folio CLI - Binary entry point and terminal session management.
//!
//! # Architecture
//!
//! The CLI bridges [`folio_engine`] (interaction state) and [`folio_tui`]
//! (rendering), providing RAII-based terminal management with guaranteed
//! cleanup.
//!
//! ```text
//! main() -> load config + content -> PageCoordinator::mount -> TerminalSession
//!                                                                  |
//!                                                                  v
//!                                                              run_page()
//! ```
//!
//! # Event Loop
//!
//! A fixed 16ms render cadence:
//!
//! 1. Wait for frame tick
//! 2. Drain input queue (non-blocking via [`folio_tui::InputPump`])
//! 3. Advance page timers (`page.tick(elapsed)`)
//! 4. Advance the viewport's smooth scroll
//! 5. Render frame

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use std::{
    fs::{self, OpenOptions},
    io::{Stdout, Write, stdout},
    path::PathBuf,
    sync::Mutex,
    time::{Duration, Instant},
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use folio_config::{
    EnvColorSchemeHint, FilePreferenceStore, FolioConfig, folio_home, load_content,
};
use folio_engine::{
    ASCII_CARET, PageCoordinator, PageEnvironment, PageSettings, PreferenceStore, UNICODE_CARET,
    UnavailableStore,
};
use folio_tui::{DocumentTheme, InputPump, Page, PageView, PageViewport, draw, handle_events};
use folio_types::SiteContent;

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let (log_file, init_warnings) = open_folio_log_file();

    if let Some((log_path, file)) = log_file {
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init();

        tracing::info!(path = %log_path.display(), "Logging initialized");
        for warning in init_warnings {
            tracing::warn!("{warning}");
        }
        return;
    }

    // No log file: stay silent rather than write over the TUI.
    tracing_subscriber::registry().with(env_filter).init();
}

fn open_folio_log_file() -> (Option<(PathBuf, fs::File)>, Vec<String>) {
    let mut warnings = Vec::new();

    for candidate in folio_log_file_candidates() {
        if let Some(parent) = candidate.parent()
            && let Err(e) = fs::create_dir_all(parent)
        {
            warnings.push(format!(
                "Failed to create log dir {}: {e}",
                parent.display()
            ));
            continue;
        }

        match OpenOptions::new()
            .create(true)
            .append(true)
            .open(&candidate)
        {
            Ok(file) => return (Some((candidate, file)), warnings),
            Err(e) => {
                warnings.push(format!(
                    "Failed to open log file {}: {e}",
                    candidate.display()
                ));
            }
        }
    }

    (None, warnings)
}

fn folio_log_file_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    // Primary: ~/.folio/logs/folio.log
    if let Some(home) = folio_home() {
        candidates.push(home.join("logs").join("folio.log"));
    }

    // Fallback: ./.folio/logs/folio.log
    candidates.push(PathBuf::from(".folio").join("logs").join("folio.log"));

    candidates
}

/// RAII wrapper for terminal state with guaranteed cleanup on drop.
///
/// Raw mode, the alternate screen and alternate scroll mode (1007, which turns
/// the scroll wheel into Up/Down keys without capturing the mouse) are all
/// restored on drop, including after panics and early returns.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self> {
        enable_raw_mode()?;

        let mut out = stdout();
        if let Err(err) = execute!(out, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err.into());
        }
        // Enable alternate scroll mode: CSI ? 1007 h
        let _ = out.write_all(b"\x1b[?1007h");
        let _ = out.flush();

        let terminal = match Terminal::new(CrosstermBackend::new(out)) {
            Ok(t) => t,
            Err(err) => {
                let _ = disable_raw_mode();
                let mut out = stdout();
                let _ = out.write_all(b"\x1b[?1007l");
                let _ = out.flush();
                let _ = execute!(out, LeaveAlternateScreen);
                return Err(err.into());
            }
        };

        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        // Disable alternate scroll mode: CSI ? 1007 l
        let backend = self.terminal.backend_mut();
        let _ = backend.write_all(b"\x1b[?1007l");
        let _ = Write::flush(backend);
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

/// Everything the page needs, resolved before the terminal is touched.
struct Startup {
    config: FolioConfig,
    content: SiteContent,
}

fn load_startup() -> Result<Startup> {
    let config = FolioConfig::load()
        .context("failed to load configuration")?
        .unwrap_or_default();

    let content = match config.content_path() {
        Some(path) => load_content(&path).context("failed to load page content")?,
        None => SiteContent::builtin(),
    };

    Ok(Startup { config, content })
}

fn mount_page(startup: Startup) -> Result<Page> {
    let Startup { config, content } = startup;
    let options = config.ui_options();

    let store: Box<dyn PreferenceStore> = match FilePreferenceStore::default_location() {
        Some(store) => {
            tracing::debug!(path = %store.path().display(), "Using preference file");
            Box::new(store)
        }
        None => {
            tracing::warn!("No home directory, theme preference will not persist");
            Box::new(UnavailableStore)
        }
    };

    let settings = PageSettings {
        reveal_interval: config.typewriter.interval(),
        caret_blink: config.typewriter.caret_blink(),
        caret_glyph: if options.ascii_only {
            ASCII_CARET
        } else {
            UNICODE_CARET
        },
        reduced_motion: options.reduced_motion,
    };

    let page = PageCoordinator::mount(
        content,
        settings,
        PageEnvironment {
            store,
            hint: EnvColorSchemeHint::detect(config.theme.system),
            surface: DocumentTheme::new(),
            viewport: PageViewport::new(options.reduced_motion),
        },
    )
    .context("invalid page content")?;
    Ok(page)
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    // Content and config defects are reported before the terminal changes mode.
    let startup = load_startup()?;
    let view = PageView::new(startup.config.ui_options(), startup.config.layout.breakpoint);
    let mut page = mount_page(startup)?;

    let result = {
        let mut session = TerminalSession::new()?;
        run_page(&mut session.terminal, &mut page, view).await
    };

    page.unmount();

    if let Err(err) = &result {
        tracing::error!("Session ended with error: {err:?}");
    }
    result
}

const FRAME_DURATION: Duration = Duration::from_millis(16);

async fn run_page<B>(
    terminal: &mut Terminal<B>,
    page: &mut Page,
    mut view: PageView,
) -> Result<()>
where
    B: Backend + Write,
    B::Error: Send + Sync + 'static,
{
    view.set_width(terminal.size()?.width);
    let mut input = InputPump::new();
    let mut frames = tokio::time::interval(FRAME_DURATION);
    frames.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
    let mut last_frame = Instant::now();

    let result: Result<()> = loop {
        frames.tick().await;

        // Non-blocking input (drain queue only)
        let quit_now = match handle_events(page, &mut view, &mut input) {
            Ok(q) => q,
            Err(e) => break Err(e),
        };
        if quit_now {
            break Ok(());
        }

        let now = Instant::now();
        let elapsed = now.duration_since(last_frame);
        last_frame = now;
        page.tick(elapsed);
        page.viewport_mut().advance(elapsed);

        if let Err(e) = terminal.draw(|frame| draw(frame, page, &mut view)) {
            break Err(e.into());
        }
    };

    input.shutdown().await;
    result
}
