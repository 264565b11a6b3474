//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every userdeck operation, whatever UI sits on top.
//!
//! The API:
//! - **Dispatches** to the matching command function
//! - **Carries context** the commands need (the store, id strategy, config dir)
//! - **Returns structured types** (`Result<CmdResult>`), never strings
//!
//! Business logic stays in `commands/*.rs`; printing stays in the CLI.
//!
//! `UserdeckApi<B: KeyValueBackend>` is generic over the storage backend:
//! `FsBackend` in production, `MemBackend` in tests.

use crate::commands;
use crate::config::UserdeckConfig;
use crate::error::Result;
use crate::model::UserInput;
use crate::store::{KeyValueBackend, UserStore};
use std::path::{Path, PathBuf};

/// The main API facade for userdeck operations.
pub struct UserdeckApi<B: KeyValueBackend> {
    store: UserStore<B>,
    config: UserdeckConfig,
    config_dir: PathBuf,
}

impl<B: KeyValueBackend> UserdeckApi<B> {
    /// Builds the store from `backend` using the configured storage key.
    pub fn new(backend: B, config: UserdeckConfig, config_dir: impl Into<PathBuf>) -> Self {
        let store = UserStore::new(backend, config.storage_key.clone());
        Self {
            store,
            config,
            config_dir: config_dir.into(),
        }
    }

    pub fn list_users(&self) -> commands::CmdResult {
        commands::list::run(&self.store)
    }

    pub fn show_user(&self, selector: &str) -> Result<commands::CmdResult> {
        commands::show::run(&self.store, selector)
    }

    pub fn create_user(&self, input: &UserInput) -> Result<commands::CmdResult> {
        commands::create::run(&self.store, self.config.id_strategy, input)
    }

    pub fn edit_user(&self, selector: &str, edit: UserEdit) -> Result<commands::CmdResult> {
        commands::edit::run(&self.store, selector, edit)
    }

    pub fn delete_user(&self, selector: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&self.store, selector)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    pub fn store(&self) -> &UserStore<B> {
        &self.store
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel, UserEdit};
