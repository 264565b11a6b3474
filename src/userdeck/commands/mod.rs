use crate::config::UserdeckConfig;
use crate::index::DisplayUser;
use crate::model::User;

pub mod config;
pub mod create;
pub mod delete;
pub mod edit;
pub mod helpers;
pub mod list;
pub mod show;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_users: Vec<User>,
    pub listed_users: Vec<DisplayUser>,
    pub config: Option<UserdeckConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_users(mut self, users: Vec<DisplayUser>) -> Self {
        self.listed_users = users;
        self
    }

    pub fn with_config(mut self, config: UserdeckConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// Field changes for an edit. `None` keeps the stored value, the way the
/// edit form starts out filled with the current user.
#[derive(Debug, Clone, Default)]
pub struct UserEdit {
    pub name: Option<String>,
    pub email: Option<String>,
    pub avatar_url: Option<String>,
}
