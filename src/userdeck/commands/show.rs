use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::{KeyValueBackend, UserStore};

use super::helpers::resolve_user;

pub fn run<B: KeyValueBackend>(store: &UserStore<B>, selector: &str) -> Result<CmdResult> {
    let found = resolve_user(store, selector)?;
    Ok(CmdResult::default().with_listed_users(vec![found]))
}
