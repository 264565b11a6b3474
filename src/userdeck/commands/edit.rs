use crate::commands::{CmdMessage, CmdResult, UserEdit};
use crate::error::Result;
use crate::model::UserInput;
use crate::store::{KeyValueBackend, UserStore};
use crate::validation::validate_form;

use super::helpers::resolve_user;

pub fn run<B: KeyValueBackend>(
    store: &UserStore<B>,
    selector: &str,
    edit: UserEdit,
) -> Result<CmdResult> {
    let current = resolve_user(store, selector)?.user;

    let mut input = UserInput::from(&current);
    if let Some(name) = edit.name {
        input.name = name;
    }
    if let Some(email) = edit.email {
        input.email = email;
    }
    if let Some(avatar_url) = edit.avatar_url {
        input.avatar_url = avatar_url;
    }
    validate_form(&input)?;

    let user = input.trimmed().into_user(current.id.clone());

    let mut result = CmdResult::default();
    if user == current {
        result.add_message(CmdMessage::info(format!("No changes for {}", user.name)));
        return Ok(result);
    }

    store.update(user.clone())?;
    result.add_message(CmdMessage::success(format!(
        "User updated: {} <{}>",
        user.name, user.email
    )));
    result.affected_users.push(user);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::error::{UserdeckError, ValidationError};
    use crate::store::mem_backend::fixtures::StoreFixture;
    use crate::store::DEFAULT_STORAGE_KEY;

    #[test]
    fn changes_only_given_fields() {
        let fixture = StoreFixture::new().with_users(2);
        let before = fixture.store.get("2").unwrap();

        let edit = UserEdit {
            name: Some("  Bea Souza ".into()),
            ..Default::default()
        };
        run(&fixture.store, "2", edit).unwrap();

        let after = fixture.store.get("2").unwrap();
        assert_eq!(after.name, "Bea Souza");
        assert_eq!(after.email, before.email);
        assert_eq!(after.avatar_url, before.avatar_url);
        assert_eq!(fixture.store.list_all()[1].id, "2");
    }

    #[test]
    fn empty_edit_leaves_store_equal() {
        let fixture = StoreFixture::new().with_users(3);
        let before = fixture.store.list_all();

        let result = run(&fixture.store, "2", UserEdit::default()).unwrap();

        assert_eq!(fixture.store.list_all(), before);
        assert!(result.messages[0].content.starts_with("No changes"));
    }

    #[test]
    fn unchanged_edit_does_not_write() {
        let fixture = StoreFixture::new().with_users(2);
        let raw_before = fixture.backend().raw(DEFAULT_STORAGE_KEY);
        fixture.backend().set_simulate_write_error(true);

        let edit = UserEdit {
            name: Some(" User 1 ".into()),
            ..Default::default()
        };
        let result = run(&fixture.store, "1", edit).unwrap();

        assert_eq!(result.messages[0].level, MessageLevel::Info);
        assert!(result.affected_users.is_empty());
        assert_eq!(fixture.backend().raw(DEFAULT_STORAGE_KEY), raw_before);
    }

    #[test]
    fn rejects_invalid_url() {
        let fixture = StoreFixture::new().with_users(1);
        let edit = UserEdit {
            avatar_url: Some("nope".into()),
            ..Default::default()
        };

        let err = run(&fixture.store, "1", edit).unwrap_err();

        assert!(matches!(
            err,
            UserdeckError::Validation(ValidationError::InvalidUrl)
        ));
    }

    #[test]
    fn rejects_email_of_another_user() {
        let fixture = StoreFixture::new().with_users(2);
        let edit = UserEdit {
            email: Some("USER1@example.com".into()),
            ..Default::default()
        };

        let err = run(&fixture.store, "2", edit).unwrap_err();

        assert!(matches!(err, UserdeckError::DuplicateEmail(_)));
    }

    #[test]
    fn missing_user_is_not_found() {
        let fixture = StoreFixture::new();
        let err = run(&fixture.store, "ghost", UserEdit::default()).unwrap_err();
        assert!(matches!(err, UserdeckError::NotFound(_)));
    }
}
