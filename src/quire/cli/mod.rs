//! # CLI Layer
//!
//! This module is **one possible UI client** for quire; it is not the application
//! itself. It is the only place that knows about stdout/stderr, parses arguments and
//! formats output for humans. Everything else goes through [`QuireApi`].
//!
//! - `setup`: clap definitions
//! - `render`: terminal output
//! - `run()`: builds the [`AppContext`] and dispatches to the `handle_*` functions

pub mod render;
pub mod setup;

use directories::ProjectDirs;
use log::{debug, warn};
use quire::api::{ConfigAction, QuireApi};
use quire::config::QuireConfig;
use quire::error::{QuireError, Result};
use quire::store::fs::FileStore;
use render::{print_config, print_diaries, print_diary, print_messages};
use setup::{Cli, Commands};
use std::io::{IsTerminal, Read};
use std::path::PathBuf;

/// Overrides the data directory.
pub const HOME_ENV: &str = "QUIRE_HOME";

struct AppContext {
    api: QuireApi<FileStore>,
}

pub fn run(cli: Cli) -> Result<()> {
    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::New { name }) => handle_new(&mut ctx, name.join(" ")),
        Some(Commands::List) | None => handle_list(&ctx),
        Some(Commands::Show { diary, page }) => handle_show(&ctx, &diary, page),
        Some(Commands::Write { diary, text }) => handle_write(&mut ctx, &diary, text),
        Some(Commands::Delete { diaries }) => handle_delete(&mut ctx, &diaries),
        Some(Commands::Export { output }) => handle_export(&ctx, output),
        Some(Commands::Import { path }) => handle_import(&mut ctx, path),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
    }
}

fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "quire", "quire")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| QuireError::Api("Could not determine the data directory".to_string()))
}

fn init_context() -> Result<AppContext> {
    let dir = data_dir()?;
    debug!("data directory: {}", dir.display());

    let config = QuireConfig::load(&dir).unwrap_or_else(|e| {
        warn!("could not read config, using defaults: {}", e);
        QuireConfig::default()
    });
    let store = FileStore::new(dir.clone());
    Ok(AppContext {
        api: QuireApi::new(store, dir, &config),
    })
}

fn handle_new(ctx: &mut AppContext, name: String) -> Result<()> {
    let result = ctx.api.create_diary(&name)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_diaries()?;
    print_diaries(&result.listed_diaries);
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &AppContext, diary: &str, page: Option<usize>) -> Result<()> {
    let result = ctx.api.show_diary(diary, page)?;
    if let Some(dd) = result.listed_diaries.first() {
        print_diary(dd, &result.listed_pages);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_write(ctx: &mut AppContext, diary: &str, words: Vec<String>) -> Result<()> {
    let text = if words.is_empty() {
        read_stdin()?
    } else {
        words.join(" ")
    };
    if text.trim().is_empty() {
        return Err(QuireError::Api("Nothing to write".to_string()));
    }
    let result = ctx.api.write(diary, &text)?;
    print_messages(&result.messages);
    Ok(())
}

fn read_stdin() -> Result<String> {
    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Ok(String::new());
    }
    let mut text = String::new();
    stdin.read_to_string(&mut text).map_err(QuireError::Io)?;
    Ok(text.trim_end_matches('\n').to_string())
}

fn handle_delete(ctx: &mut AppContext, diaries: &[String]) -> Result<()> {
    let result = ctx.api.delete_diaries(diaries)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(ctx: &AppContext, output: Option<PathBuf>) -> Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let result = ctx.api.export_diaries(output.as_deref(), &cwd)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_import(ctx: &mut AppContext, path: PathBuf) -> Result<()> {
    let result = ctx.api.import_diaries(&path)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            print_config(config);
        }
    }
    print_messages(&result.messages);
    Ok(())
}
