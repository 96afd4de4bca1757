//! Quizdesk TUI
//!
//! 1. Key press -> Dashboard.handle_event() -> Action
//! 2. Action dispatched to EffectStore
//! 3. Reducer flips the busy flag and returns an effect
//! 4. EffectHandler spawns the request; its result comes back as an action
//! 5. If state changed, re-render
//!
//! # Usage
//!
//! ```sh
//! # Default config location
//! cargo run -p quizdesk
//!
//! # Explicit config file
//! cargo run -p quizdesk -- --config ./quizdesk.toml
//! ```

use std::cell::RefCell;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use quizdesk_core::{EffectRuntime, EffectStore, EventKind, EventOutcome, LoggingMiddleware};
use ratatui::{backend::CrosstermBackend, Terminal};

use quizdesk::action::Action;
use quizdesk::api::ApiClient;
use quizdesk::components::{Component, Dashboard, DashboardProps};
use quizdesk::config::Config;
use quizdesk::diagnostics::TracingSink;
use quizdesk::effect::EffectHandler;
use quizdesk::logging::init_tracing;
use quizdesk::reducer::reducer;
use quizdesk::state::AppState;

#[derive(Parser, Debug)]
#[command(name = "quizdesk")]
#[command(about = "Terminal client for a local quiz API")]
struct Args {
    /// Config file to use instead of the default location
    #[arg(long, short)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Config problems are reported before the terminal is taken over
    let config = match &args.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("loading configuration")?;
    let base_url = config.api_base()?;

    init_tracing(&config.log_file);
    tracing::info!(%base_url, "starting quizdesk");

    // ===== Terminal setup =====
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let handler = EffectHandler::new(ApiClient::new(base_url.clone()), Arc::new(TracingSink));
    let result = run_app(&mut terminal, AppState::new(base_url.as_str()), &config, handler).await;

    // ===== Cleanup =====
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result.context("running event loop")
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    state: AppState,
    config: &Config,
    handler: EffectHandler,
) -> io::Result<()> {
    let store = EffectStore::new(state, reducer, LoggingMiddleware::verbose());
    let mut runtime = EffectRuntime::from_store(store);

    // Tick timer for busy spinners
    runtime
        .subscriptions()
        .interval("tick", config.tick_interval(), || Action::Tick);

    let dashboard = RefCell::new(Dashboard::default());

    runtime
        .run(
            terminal,
            |frame, area, state| {
                dashboard
                    .borrow_mut()
                    .render(frame, area, DashboardProps { state });
            },
            |event, state| {
                if let EventKind::Resize(..) = event {
                    return EventOutcome::ignored().with_render();
                }
                EventOutcome::from_actions(
                    dashboard
                        .borrow_mut()
                        .handle_event(event, DashboardProps { state }),
                )
            },
            |action| matches!(action, Action::Quit),
            |effect, ctx| handler.handle(effect, ctx),
        )
        .await
}
