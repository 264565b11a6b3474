use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::id::IdStrategy;
use crate::model::UserInput;
use crate::store::{KeyValueBackend, UserStore};
use crate::validation::validate_form;

pub fn run<B: KeyValueBackend>(
    store: &UserStore<B>,
    ids: IdStrategy,
    input: &UserInput,
) -> Result<CmdResult> {
    validate_form(input)?;
    let user = input.trimmed().into_user(ids.generate());
    store.add(user.clone())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "User created: {} <{}>",
        user.name, user.email
    )));
    result.affected_users.push(user);
    Ok(result)
}
