//! # Display Indexes
//!
//! Ids are long and awkward to type, so the list numbers users `1, 2, 3...`
//! in stored order and every command that targets a single user accepts
//! either form:
//!
//! ```text
//! userdeck show 2
//! userdeck show 3f2b8c1e-9d4a-4c7b-a1e2-5f6d7c8b9a0e
//! ```
//!
//! An exact id always wins over a position, so a user whose id is literally
//! `"2"` is still reachable by that id.

use crate::error::{Result, UserdeckError};
use crate::model::User;

/// A user paired with its 1-based position in the stored list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayUser {
    pub index: usize,
    pub user: User,
}

/// Numbers users in the order given, starting at 1.
pub fn index_users(users: Vec<User>) -> Vec<DisplayUser> {
    users
        .into_iter()
        .enumerate()
        .map(|(i, user)| DisplayUser { index: i + 1, user })
        .collect()
}

/// Finds the user a selector refers to: exact id first, then list position.
pub fn select_user(users: &[User], selector: &str) -> Result<DisplayUser> {
    let selector = selector.trim();

    if let Some(pos) = users.iter().position(|u| u.id == selector) {
        return Ok(DisplayUser {
            index: pos + 1,
            user: users[pos].clone(),
        });
    }

    if let Ok(n) = selector.parse::<usize>() {
        if n >= 1 && n <= users.len() {
            return Ok(DisplayUser {
                index: n,
                user: users[n - 1].clone(),
            });
        }
    }

    Err(UserdeckError::NotFound(selector.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn users() -> Vec<User> {
        vec![
            User::new("a1", "Ana", "ana@x.com", "https://x.com/a.png"),
            User::new("2", "Bea", "bea@x.com", "https://x.com/b.png"),
            User::new("c3", "Caio", "caio@x.com", "https://x.com/c.png"),
        ]
    }

    #[test]
    fn numbers_from_one_in_order() {
        let indexed = index_users(users());
        let pairs: Vec<_> = indexed
            .iter()
            .map(|d| (d.index, d.user.id.as_str()))
            .collect();
        assert_eq!(pairs, vec![(1, "a1"), (2, "2"), (3, "c3")]);
    }

    #[test]
    fn selects_by_id() {
        let found = select_user(&users(), "c3").unwrap();
        assert_eq!(found.index, 3);
        assert_eq!(found.user.name, "Caio");
    }

    #[test]
    fn selects_by_position() {
        let found = select_user(&users(), "1").unwrap();
        assert_eq!(found.user.id, "a1");
    }

    #[test]
    fn exact_id_beats_position() {
        // "2" is Bea's id and also position 2, both agree here
        assert_eq!(select_user(&users(), "2").unwrap().user.name, "Bea");

        let mut shuffled = users();
        shuffled.swap(0, 1);
        // Bea now sits at position 1 but still owns id "2"
        assert_eq!(select_user(&shuffled, "2").unwrap().user.name, "Bea");
    }

    #[test]
    fn out_of_range_is_not_found() {
        assert!(matches!(
            select_user(&users(), "0"),
            Err(UserdeckError::NotFound(_))
        ));
        assert!(matches!(
            select_user(&users(), "4"),
            Err(UserdeckError::NotFound(_))
        ));
        assert!(matches!(
            select_user(&users(), "nobody"),
            Err(UserdeckError::NotFound(_))
        ));
    }
}
