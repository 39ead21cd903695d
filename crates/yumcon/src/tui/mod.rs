use crate::logging::LogBuffer;
use crate::rt;
use anyhow::Context;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};
use yumcon_core::audit::{AuditLog, AuditOutcome};
use yumcon_core::model::{StaticRepoSummary, VirtualRepoConfig};
use yumcon_core::service::RepoService;
use yumcon_core::virtual_target::VirtualTargetEditor;

mod app_core;
mod draw;
mod handle;
mod jobs;

const LOG_PANEL_HEIGHT: u16 = 7;

const MAIN_MENU: [&str; 3] = ["Static repositories", "Virtual repository editor", "Quit"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum View {
    Main,
    Repos,
    VirtualRepo,
    Message,
}

/// What the TUI opens with; carried over from the CLI flags.
pub struct StartOptions {
    pub virtual_repo: Option<VirtualRepoConfig>,
}

pub fn run_tui(
    service: Arc<dyn RepoService>,
    audit: &AuditLog,
    log_buffer: LogBuffer,
    start: StartOptions,
) -> anyhow::Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    info!("Starting TUI");
    let result = run_app(&mut terminal, service, audit, log_buffer, start);

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    if let Err(err) = &result {
        error!(error = %err, "TUI exited with error");
    }
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    service: Arc<dyn RepoService>,
    audit: &AuditLog,
    log_buffer: LogBuffer,
    start: StartOptions,
) -> anyhow::Result<()> {
    let mut app = ConsoleApp::new(service, audit.clone(), log_buffer, start);
    app.startup();
    let mut last_tick = Instant::now();
    let tick_rate = Duration::from_millis(200);
    debug!(tick_rate_ms = tick_rate.as_millis(), "TUI event loop started");

    loop {
        terminal.draw(|frame| app.draw(frame))?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
            && app.handle_key(key)?
        {
            return Ok(());
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }

        app.poll_repo_events();
        app.poll_save_events();
    }
}

struct ConsoleApp {
    service: Arc<dyn RepoService>,
    audit: AuditLog,
    log_buffer: LogBuffer,
    view: View,
    menu_index: usize,
    message: String,
    message_return_view: View,
    repos: Vec<StaticRepoSummary>,
    repos_loading: bool,
    repos_rx: Option<mpsc::Receiver<Result<Vec<StaticRepoSummary>, String>>>,
    /// Seed for the virtual-repo editor; a fresh editor (and a fresh repo
    /// snapshot) is built from it every time the view is entered.
    virtual_config: Option<VirtualRepoConfig>,
    editor: Option<VirtualTargetEditor>,
    editor_cursor: usize,
    save_rx: Option<mpsc::Receiver<Result<(), String>>>,
}
