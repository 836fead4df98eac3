// Adota - terminal client for a pet adoption service
//
// Lists the animals available for adoption and lets the user narrow the list
// by type and gender. Every filter change reloads from the backend; only the
// most recently started request may update the screen.
//
// Architecture:
// - API (reqwest): Fetches the available-animals listing, or a local demo catalogue
// - Listing: Page controller owning filter, loading flag and request generations
// - TUI (ratatui): Card grid, filter dialog, detail modal, logs panel
// - CLI (clap): Token/config management and a headless `list` command
// - Outcomes flow from fetch tasks to the page over an mpsc channel

mod animals;
mod api;
mod cli;
mod config;
mod diagnostics;
mod listing;
mod logging;
mod session;
mod tui;

use animals::{AnimalFilter, SharedAnimals};
use anyhow::{Context, Result};
use api::{AnimalsApi, DemoApi, HttpAnimalsApi};
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use diagnostics::TracingSink;
use listing::{AvailableAnimalsPage, ListingView, PageDeps};
use logging::{LogBuffer, LogOutput};
use session::{FileTokenStore, StaticToken, TokenSource};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::mpsc;
use tui::theme::Theme;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // `config --path` and `config --reset` must work even with a broken config file
    if cli::handle_config_command(&cli)? {
        return Ok(());
    }

    // A broken config file is reported before anything else runs
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprint!("{}", config_error_box(&e, Config::config_path().as_deref()));
            std::process::exit(1);
        }
    };

    // Management commands that need the loaded config (token, config --show)
    if cli::handle_cli(&cli, &config)? {
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    // In TUI mode: capture logs to buffer (prevents garbling the display)
    // In list mode: logs go to stderr so stdout stays clean
    let log_buffer = LogBuffer::new();
    let output = match cli.command {
        Some(Commands::List { .. }) => LogOutput::Stderr,
        _ => LogOutput::Tui(log_buffer.clone()),
    };
    // The guard must be kept alive for the duration of the program to ensure logs flush
    let _file_guard = logging::init(&config.logging, output);

    tracing::info!(version = config::VERSION, "Starting adota");

    let deps = build_deps(&config)?;

    match cli.command {
        Some(Commands::List { kind, gender, json }) => {
            run_list(deps, AnimalFilter::new(kind, gender), json).await
        }
        _ => {
            tracing::info!("Starting TUI");
            let result = tui::run_tui(deps, log_buffer, Theme::by_name(&config.theme)).await;
            if let Err(e) = &result {
                tracing::error!("TUI error: {:?}", e);
            }
            tracing::info!("Shutdown complete");
            result
        }
    }
}

/// Boxed startup error; every line of a multi-line cause stays inside the box
fn config_error_box(err: &anyhow::Error, config_path: Option<&Path>) -> String {
    let mut lines: Vec<String> = format!("{:#}", err).lines().map(str::to_string).collect();
    if let Some(path) = config_path {
        lines.push(String::new());
        lines.push(format!("Fix or remove {}", path.display()));
        lines.push("(or run `adota config --reset`)".to_string());
    }

    let mut out = String::from("\n╭─ CONFIG ERROR ─────────────────────────────────────────\n");
    for line in lines {
        if line.is_empty() {
            out.push_str("│\n");
        } else {
            out.push_str(&format!("│ {}\n", line));
        }
    }
    out.push_str("╰────────────────────────────────────────────────────────\n");
    out
}

/// Pick the fetch client and token source from config
fn build_deps(config: &Config) -> Result<PageDeps> {
    let api: Arc<dyn AnimalsApi> = if config.demo_mode {
        tracing::info!("Running in DEMO MODE - serving the built-in catalogue");
        Arc::new(DemoApi::new())
    } else {
        let client = HttpAnimalsApi::new(&config.api_url, config.request_timeout())
            .with_context(|| format!("Failed to create API client for {}", config.api_url))?;
        tracing::debug!(url = %config.api_url, "Using adoption API");
        Arc::new(client)
    };

    let tokens: Arc<dyn TokenSource> = match &config.token_override {
        Some(token) => Arc::new(StaticToken(token.clone())),
        None => Arc::new(FileTokenStore::new(config.token_path.clone())),
    };

    Ok(PageDeps {
        api,
        tokens,
        sink: Arc::new(TracingSink),
        animals: SharedAnimals::default(),
    })
}

/// Headless listing: one fetch, printed to stdout
async fn run_list(deps: PageDeps, filter: Option<AnimalFilter>, json: bool) -> Result<()> {
    let (outcome_tx, mut outcome_rx) = mpsc::unbounded_channel();
    let mut page = AvailableAnimalsPage::new(deps, outcome_tx);

    match filter {
        Some(filter) => page.handle_filter_available_animals(filter),
        None => {
            page.mount();
        }
    }

    tracing::debug!(generation = page.generation(), "Waiting for listing");

    while let Some(outcome) = outcome_rx.recv().await {
        if page.apply_outcome(outcome) {
            break;
        }
    }

    if let Some(e) = page.last_error() {
        anyhow::bail!("{}: {}", listing::FETCH_FAILED, e);
    }

    let state = page.state();
    if json {
        println!("{}", serde_json::to_string_pretty(&state.animals)?);
        return Ok(());
    }

    println!("{}", tui::views::PAGE_TITLE);
    if let Some(filter) = &state.filter {
        println!("filtro: {}", filter.describe());
    }
    println!();

    match state.view() {
        ListingView::Populated(animals) => {
            for animal in animals {
                println!(
                    "  {} · {} · {} · {}",
                    animal.name, animal.kind, animal.gender, animal.breed
                );
            }
        }
        ListingView::Empty(ctx) => {
            tracing::debug!(page = ctx.tag(), "Nothing to list");
            let (headline, hint) = tui::components::empty_state::messages(ctx);
            println!("  {}", headline);
            println!("  {}", hint);
        }
        ListingView::Loading => {}
    }

    Ok(())
}
