//! # CLI Layer
//!
//! Dispatches parsed arguments to handlers. Handlers build a [`Session`] over a
//! [`TermSurface`], feed it events, and print the resulting frame.
//!
//! When the catalog fails to load, every handler prints the session's error frame on
//! stdout and then returns the load error, so `main` reports the detail on stderr and
//! exits non-zero.

use super::browse::{parse_command, BrowseCommand, HELP};
use super::render::{MessageLevel, TermSurface};
use super::setup::{Cli, Commands};
use clap::Parser;
use console::Term;
use coursedex::config::CatalogConfig;
use coursedex::error::{CatalogError, Result};
use coursedex::filter::{DepartmentFilter, LevelBucket};
use coursedex::session::{CriteriaEvent, Session, SessionState};
use coursedex::store::fs::FileSource;
use directories::ProjectDirs;
use std::io::{self, BufRead};
use std::path::PathBuf;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

struct AppContext {
    config: CatalogConfig,
    config_dir: PathBuf,
    data_file: PathBuf,
    use_color: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List {
            search,
            department,
            level,
        }) => handle_list(&ctx, search, department, level),
        Some(Commands::Departments) => handle_departments(&ctx),
        Some(Commands::Levels) => handle_levels(&ctx),
        Some(Commands::Browse) => handle_browse(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&ctx, None, None, None),
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = match &cli.config_dir {
        Some(dir) => dir.clone(),
        None => ProjectDirs::from("org", "coursedex", "coursedex")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .ok_or_else(|| CatalogError::Config("Could not determine config dir".into()))?,
    };

    let config = CatalogConfig::load(&config_dir).unwrap_or_else(|e| {
        warn!(error = %e, dir = %config_dir.display(), "unreadable config, using defaults");
        CatalogConfig::default()
    });
    let data_file = cli
        .data
        .clone()
        .unwrap_or_else(|| config.data_file.clone());
    let use_color = !cli.no_color && Term::stdout().features().colors_supported();
    debug!(data = %data_file.display(), use_color, "context ready");

    Ok(AppContext {
        config,
        config_dir,
        data_file,
        use_color,
    })
}

fn start_session(ctx: &AppContext, surface: TermSurface) -> Session<TermSurface> {
    let mut session = Session::new(surface);
    session.bootstrap(&FileSource::new(&ctx.data_file));
    session
}

/// Prints the error frame of a failed session and hands back its load error.
fn fail(session: Session<TermSurface>) -> Result<()> {
    print!("{}", session.surface().frame());
    match session.into_parts() {
        (SessionState::Failed(err), _) => Err(err.into()),
        _ => Ok(()),
    }
}

fn handle_list(
    ctx: &AppContext,
    search: Option<String>,
    department: Option<String>,
    level: Option<String>,
) -> Result<()> {
    let mut events = Vec::new();
    if let Some(text) = search {
        events.push(CriteriaEvent::SearchChanged(text));
    }
    if let Some(name) = department {
        events.push(CriteriaEvent::DepartmentChanged(
            name.parse::<DepartmentFilter>()?,
        ));
    }
    if let Some(floor) = level {
        events.push(CriteriaEvent::LevelChanged(floor.parse::<LevelBucket>()?));
    }

    let mut session = start_session(ctx, TermSurface::new(ctx.use_color));
    if session.state().load_error().is_some() {
        return fail(session);
    }

    for event in events {
        session.dispatch(event);
    }
    print!("{}", session.surface().frame());
    Ok(())
}

fn handle_departments(ctx: &AppContext) -> Result<()> {
    let session = start_session(ctx, TermSurface::new(ctx.use_color));
    if session.state().load_error().is_some() {
        return fail(session);
    }

    let departments = session
        .state()
        .browser()
        .map(|browser| browser.departments().to_vec())
        .unwrap_or_default();
    print!(
        "{}",
        session
            .surface()
            .renderer()
            .text_list(&departments, "No departments.")
    );
    Ok(())
}

fn handle_levels(ctx: &AppContext) -> Result<()> {
    let lines: Vec<String> = ctx
        .config
        .level_buckets
        .iter()
        .map(|floor| format!("{} ({}-{})", floor, floor, floor.saturating_add(99)))
        .collect();
    let surface = TermSurface::new(ctx.use_color);
    print!("{}", surface.renderer().text_list(&lines, "No level buckets configured."));
    Ok(())
}

fn handle_browse(ctx: &AppContext) -> Result<()> {
    let surface = TermSurface::new(ctx.use_color).with_options(ctx.config.level_buckets.clone());
    let mut session = start_session(ctx, surface);
    if session.state().load_error().is_some() {
        return fail(session);
    }

    let term = Term::stdout();
    draw(&term, &session);
    print!(
        "{}",
        session
            .surface()
            .renderer()
            .message("Type `help` for commands.", MessageLevel::Info)
    );

    for line in io::stdin().lock().lines() {
        let line = line?;
        match parse_command(&line) {
            Ok(BrowseCommand::Filter(event)) => {
                session.dispatch(event);
                draw(&term, &session);
            }
            Ok(BrowseCommand::Help) => println!("{}", HELP),
            Ok(BrowseCommand::Quit) => break,
            Ok(BrowseCommand::Nothing) => {}
            Err(e) => print!(
                "{}",
                session
                    .surface()
                    .renderer()
                    .message(&e.to_string(), MessageLevel::Warning)
            ),
        }
    }
    Ok(())
}

/// Redraws the whole frame, clearing the screen first when attached to a terminal.
fn draw(term: &Term, session: &Session<TermSurface>) {
    if term.is_term() {
        let _ = term.clear_screen();
    }
    print!("{}", session.surface().frame());
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let surface = TermSurface::new(ctx.use_color);
    let renderer = surface.renderer();

    match (key.as_deref(), value) {
        (None, _) => {
            println!("data-file = {}", ctx.config.data_file.display());
            println!("level-buckets = {}", ctx.config.level_buckets_display());
        }
        (Some("data-file"), None) => println!("{}", ctx.config.data_file.display()),
        (Some("data-file"), Some(v)) => {
            // Writes start from the file on disk, never from the startup fallback.
            let mut config = CatalogConfig::load(&ctx.config_dir)?;
            config.data_file = PathBuf::from(v);
            config.save(&ctx.config_dir)?;
            print!(
                "{}",
                renderer.message(
                    &format!("data-file set to {}", config.data_file.display()),
                    MessageLevel::Success
                )
            );
        }
        (Some("level-buckets"), None) => println!("{}", ctx.config.level_buckets_display()),
        (Some("level-buckets"), Some(v)) => {
            let mut config = CatalogConfig::load(&ctx.config_dir)?;
            config.set_level_buckets_from_str(&v)?;
            config.save(&ctx.config_dir)?;
            print!(
                "{}",
                renderer.message(
                    &format!("level-buckets set to {}", config.level_buckets_display()),
                    MessageLevel::Success
                )
            );
        }
        (Some(other), _) => {
            return Err(CatalogError::Config(format!(
                "Unknown config key: {}",
                other
            )))
        }
    }
    Ok(())
}
