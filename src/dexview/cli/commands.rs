//! # CLI Dispatch
//!
//! - `run()`: parses arguments, installs logging, dispatches
//! - `init_context()`: loads config and applies per-run overrides
//! - `handle_*()`: per-command handlers that drive the controller and print
//!
//! Handlers return an [`ExitCode`] rather than exiting: a failed catalog or
//! detail load is already shown to the user through the rendered screen, so it
//! maps to a failure code instead of an `Err`. `Err` is reserved for problems
//! outside the screen (config I/O, HTTP client setup, stdin).

use super::render::{render_cards, render_config, render_detail, render_messages, render_status};
use super::setup::{Cli, Commands};
use super::shell;
use clap::Parser;
use dexview::config::{config_dir, DexConfig};
use dexview::controller::CatalogController;
use dexview::error::{DexError, Result};
use dexview::source::http::HttpSource;
use dexview::source::EntitySource;
use dexview::view::{DetailPanel, Message};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

struct AppContext {
    config: DexConfig,
    config_dir: PathBuf,
    use_color: Option<bool>,
}

pub async fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List { search }) => handle_list(&ctx, search.as_deref()).await,
        Some(Commands::Search { term }) => handle_list(&ctx, Some(term.as_str())).await,
        Some(Commands::Show { id }) => handle_show(&ctx, &id).await,
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Browse) | None => handle_browse(&ctx).await,
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "dexview=debug" } else { "error" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    // A subscriber may already be installed when embedded in tests.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = config_dir()?;
    let mut config = DexConfig::load(&config_dir)?;

    if let Some(url) = &cli.base_url {
        config.set("base-url", url).map_err(DexError::Config)?;
    }
    if let Some(limit) = cli.limit {
        config.page_limit = Some(limit);
    }

    Ok(AppContext {
        config,
        config_dir,
        use_color: if cli.no_color { Some(false) } else { None },
    })
}

fn controller(ctx: &AppContext) -> Result<CatalogController<HttpSource>> {
    let source = HttpSource::new(&ctx.config)?;
    Ok(CatalogController::new(
        Arc::new(source),
        ctx.config.sprite_url.clone(),
    ))
}

async fn handle_list(ctx: &AppContext, query: Option<&str>) -> Result<ExitCode> {
    let mut ctl = controller(ctx)?;

    ctl.begin_catalog_load();
    if std::io::stderr().is_terminal() {
        eprint!("{}", render_status(ctl.screen(), ctx.use_color));
    }
    let result = ctl.source().fetch_listing().await;
    if ctl.finish_catalog_load(result).is_err() {
        eprint!("{}", render_status(ctl.screen(), ctx.use_color));
        return Ok(ExitCode::FAILURE);
    }

    if let Some(query) = query {
        ctl.filter(query);
    }

    let screen = ctl.screen();
    print!("{}", render_cards(&screen.cards, &screen.query, ctx.use_color));
    print!(
        "{}",
        render_messages(&ctl.screen_mut().take_messages(), ctx.use_color)
    );
    Ok(ExitCode::SUCCESS)
}

async fn handle_show(ctx: &AppContext, id: &str) -> Result<ExitCode> {
    let mut ctl = controller(ctx)?;
    ctl.load_detail(id).await;

    let panel = &ctl.screen().detail;
    let output = render_detail(panel, ctx.use_color);
    if let DetailPanel::Failed { .. } = panel {
        eprint!("{}", output);
        return Ok(ExitCode::FAILURE);
    }
    print!("{}", output);
    Ok(ExitCode::SUCCESS)
}

async fn handle_browse(ctx: &AppContext) -> Result<ExitCode> {
    let mut ctl = controller(ctx)?;
    shell::run(&mut ctl, ctx.use_color).await
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<ExitCode> {
    let mut config = DexConfig::load(&ctx.config_dir)?;

    match (key, value) {
        (None, _) => print!("{}", render_config(&config.entries(), ctx.use_color)),
        (Some(key), None) => match config.get(&key) {
            Some(value) => println!("{}", value),
            None => {
                let message = Message::error(format!("Unknown config key: {}", key));
                eprint!("{}", render_messages(&[message], ctx.use_color));
                return Ok(ExitCode::FAILURE);
            }
        },
        (Some(key), Some(value)) => {
            if let Err(e) = config.set(&key, &value) {
                eprint!("{}", render_messages(&[Message::error(e)], ctx.use_color));
                return Ok(ExitCode::FAILURE);
            }
            config.save(&ctx.config_dir)?;
            let shown = config.get(&key).unwrap_or(value);
            let message = Message::success(format!("{} set to {}", key, shown));
            print!("{}", render_messages(&[message], ctx.use_color));
        }
    }
    Ok(ExitCode::SUCCESS)
}
