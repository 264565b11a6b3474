use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{KeyValueBackend, UserStore};

use super::helpers::resolve_user;

pub fn run<B: KeyValueBackend>(store: &UserStore<B>, selector: &str) -> Result<CmdResult> {
    let target = resolve_user(store, selector)?;
    let removed = store.delete(&target.user.id)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "User deleted ({}): {} <{}>",
        target.index, removed.name, removed.email
    )));
    result.affected_users.push(removed);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UserdeckError;
    use crate::store::mem_backend::fixtures::StoreFixture;

    #[test]
    fn deletes_by_position() {
        let fixture = StoreFixture::new().with_users(3);

        let result = run(&fixture.store, "3").unwrap();

        assert_eq!(result.affected_users[0].id, "3");
        let ids: Vec<_> = fixture
            .store
            .list_all()
            .into_iter()
            .map(|u| u.id)
            .collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn missing_user_is_not_found_and_nothing_changes() {
        let fixture = StoreFixture::new().with_users(2);
        let before = fixture.store.list_all();

        let err = run(&fixture.store, "ghost").unwrap_err();

        assert!(matches!(err, UserdeckError::NotFound(_)));
        assert_eq!(fixture.store.list_all(), before);
    }

    #[test]
    fn write_failure_surfaces_as_persistence_error() {
        let fixture = StoreFixture::new().with_users(1);
        fixture.backend().set_simulate_write_error(true);

        let err = run(&fixture.store, "1").unwrap_err();

        assert!(matches!(err, UserdeckError::Persistence(_)));
        assert_eq!(fixture.store.list_all().len(), 1);
    }
}
