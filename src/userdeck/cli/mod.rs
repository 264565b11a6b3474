//! # CLI Layer
//!
//! This module is **one possible UI client** for userdeck, not the
//! application itself. It is the only place that:
//! - Parses arguments
//! - Installs the log subscriber
//! - Writes to stdout/stderr
//!
//! Errors bubble up to `main`, which prints them and exits non-zero.

mod args;
mod print;

use args::{Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use print::{print_messages, print_user_details, print_users};
use std::path::PathBuf;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;
use userdeck::api::{ConfigAction, UserEdit, UserdeckApi};
use userdeck::config::UserdeckConfig;
use userdeck::error::{Result, UserdeckError};
use userdeck::model::UserInput;
use userdeck::store::fs_backend::FsBackend;

struct AppContext {
    api: UserdeckApi<FsBackend>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List) | None => handle_list(&ctx),
        Some(Commands::Create {
            name,
            email,
            avatar_url,
        }) => handle_create(&ctx, UserInput::new(name, email, avatar_url)),
        Some(Commands::Show { user }) => handle_show(&ctx, &user),
        Some(Commands::Edit {
            user,
            name,
            email,
            avatar_url,
        }) => handle_edit(
            &ctx,
            &user,
            UserEdit {
                name,
                email,
                avatar_url,
            },
        ),
        Some(Commands::Delete { user }) => handle_delete(&ctx, &user),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("userdeck={}", default_level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }
    ProjectDirs::from("com", "userdeck", "userdeck")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| UserdeckError::Config("Could not determine data directory".to_string()))
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let dir = data_dir(cli)?;
    let config = UserdeckConfig::load(&dir).map_err(|e| {
        warn!(error = %e, "could not load config");
        UserdeckError::Config(format!(
            "could not read {}: {}",
            dir.join("config.json").display(),
            e
        ))
    })?;
    debug!(data_dir = %dir.display(), key = %config.storage_key, "starting");

    let backend = FsBackend::new(dir.clone());
    let api = UserdeckApi::new(backend, config, dir);
    Ok(AppContext { api })
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_users();
    print_users(&result.listed_users);
    print_messages(&result.messages);
    Ok(())
}

fn handle_create(ctx: &AppContext, input: UserInput) -> Result<()> {
    let result = ctx.api.create_user(&input)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &AppContext, user: &str) -> Result<()> {
    let result = ctx.api.show_user(user)?;
    print_user_details(&result.listed_users);
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(ctx: &AppContext, user: &str, edit: UserEdit) -> Result<()> {
    let result = ctx.api.edit_user(user, edit)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &AppContext, user: &str) -> Result<()> {
    let result = ctx.api.delete_user(user)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    print_messages(&result.messages);
    Ok(())
}
