use crate::commands::{CmdMessage, CmdResult};
use crate::index::index_users;
use crate::store::{KeyValueBackend, UserStore};
use tracing::warn;

/// Lists every user. Never fails: an unreadable store lists as empty with a
/// warning attached, so there is always something to show.
pub fn run<B: KeyValueBackend>(store: &UserStore<B>) -> CmdResult {
    let mut result = CmdResult::default();
    let users = match store.try_list_all() {
        Ok(users) => users,
        Err(e) => {
            warn!(key = %store.key(), error = %e, "could not read users, listing none");
            result.add_message(CmdMessage::warning(format!("Could not load users: {}", e)));
            Vec::new()
        }
    };
    result.with_listed_users(index_users(users))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::mem_backend::fixtures::StoreFixture;

    #[test]
    fn lists_users_in_stored_order() {
        let fixture = StoreFixture::new().with_users(3);

        let result = run(&fixture.store);

        let ids: Vec<_> = result
            .listed_users
            .iter()
            .map(|d| (d.index, d.user.id.clone()))
            .collect();
        assert_eq!(
            ids,
            vec![
                (1, "1".to_string()),
                (2, "2".to_string()),
                (3, "3".to_string())
            ]
        );
        assert!(result.messages.is_empty());
    }

    #[test]
    fn read_failure_lists_empty_with_warning() {
        let fixture = StoreFixture::new().with_users(2);
        fixture.backend().set_simulate_read_error(true);

        let result = run(&fixture.store);

        assert!(result.listed_users.is_empty());
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
    }
}
