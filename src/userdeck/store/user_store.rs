use super::backend::KeyValueBackend;
use crate::error::{Result, UserdeckError};
use crate::model::User;
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, warn};

/// Key the collection lives under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "users";

/// The single owner of the persisted user collection.
///
/// The whole collection is stored as one JSON array under one key. Every
/// mutation reads the full collection, checks the invariants, and writes the
/// full collection back, all while holding a store-wide lock. Two callers
/// sharing a `&UserStore` therefore cannot interleave and lose each other's
/// writes or slip in a duplicate email.
pub struct UserStore<B: KeyValueBackend> {
    backend: B,
    key: String,
    write_lock: Mutex<()>,
}

impl<B: KeyValueBackend> UserStore<B> {
    pub fn new(backend: B, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// All users in insertion order.
    ///
    /// A failed read or an undecodable blob yields an empty list. The failure
    /// is logged; use [`try_list_all`](Self::try_list_all) to see it.
    pub fn list_all(&self) -> Vec<User> {
        match self.try_list_all() {
            Ok(users) => users,
            Err(e) => {
                warn!(key = %self.key, error = %e, "could not read users, treating store as empty");
                Vec::new()
            }
        }
    }

    pub fn try_list_all(&self) -> Result<Vec<User>> {
        let Some(raw) = self.backend.get(&self.key)? else {
            return Ok(Vec::new());
        };
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }
        let users: Vec<User> = serde_json::from_str(&raw)?;
        Ok(users)
    }

    pub fn get(&self, id: &str) -> Result<User> {
        self.try_list_all()?
            .into_iter()
            .find(|u| u.id == id)
            .ok_or_else(|| UserdeckError::NotFound(id.to_string()))
    }

    /// Appends a new user.
    ///
    /// Fails with `DuplicateEmail` if any stored user has the same email
    /// ignoring case, and with `DuplicateId` if the id is already taken.
    pub fn add(&self, user: User) -> Result<()> {
        let _guard = self.lock();
        let mut users = self.load_for_write()?;

        if users.iter().any(|u| u.same_email(&user.email)) {
            return Err(UserdeckError::DuplicateEmail(user.email));
        }
        if users.iter().any(|u| u.id == user.id) {
            return Err(UserdeckError::DuplicateId(user.id));
        }

        debug!(id = %user.id, "adding user");
        users.push(user);
        self.persist(&users)
    }

    /// Replaces the stored user that has `user.id`, keeping its position.
    pub fn update(&self, user: User) -> Result<()> {
        let _guard = self.lock();
        let mut users = self.load_for_write()?;

        let idx = users
            .iter()
            .position(|u| u.id == user.id)
            .ok_or_else(|| UserdeckError::NotFound(user.id.clone()))?;

        if users
            .iter()
            .any(|u| u.id != user.id && u.same_email(&user.email))
        {
            return Err(UserdeckError::DuplicateEmail(user.email));
        }

        debug!(id = %user.id, "updating user");
        users[idx] = user;
        self.persist(&users)
    }

    pub fn delete(&self, id: &str) -> Result<User> {
        let _guard = self.lock();
        let mut users = self.load_for_write()?;

        let idx = users
            .iter()
            .position(|u| u.id == id)
            .ok_or_else(|| UserdeckError::NotFound(id.to_string()))?;

        debug!(id = %id, "deleting user");
        let removed = users.remove(idx);
        self.persist(&users)?;
        Ok(removed)
    }

    fn lock(&self) -> MutexGuard<'_, ()> {
        self.write_lock.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Read failures abort the mutation instead of reading as an empty list.
    fn load_for_write(&self) -> Result<Vec<User>> {
        self.try_list_all().map_err(|e| {
            warn!(key = %self.key, error = %e, "could not read users before write");
            UserdeckError::Persistence(format!("could not read stored users: {}", e))
        })
    }

    fn persist(&self, users: &[User]) -> Result<()> {
        let blob = serde_json::to_string_pretty(users)
            .map_err(|e| UserdeckError::Persistence(e.to_string()))?;
        self.backend.set(&self.key, &blob).map_err(|e| {
            warn!(key = %self.key, error = %e, "could not write users");
            UserdeckError::Persistence(e.to_string())
        })?;
        debug!(key = %self.key, count = users.len(), "persisted users");
        Ok(())
    }
}
