use super::backend::KeyValueBackend;
use crate::error::{Result, UserdeckError};
use std::collections::HashMap;
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

/// In-memory key-value backend for testing.
///
/// Can be told to fail reads or writes so the store's error paths can be
/// exercised without a broken disk.
#[derive(Default)]
pub struct MemBackend {
    values: Mutex<HashMap<String, String>>,
    simulate_read_error: AtomicBool,
    simulate_write_error: AtomicBool,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable read error simulation for testing error handling.
    pub fn set_simulate_read_error(&self, simulate: bool) {
        self.simulate_read_error.store(simulate, Ordering::SeqCst);
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.store(simulate, Ordering::SeqCst);
    }

    /// Test helper to seed a raw value, bypassing the store.
    pub fn insert_raw(&self, key: &str, value: &str) {
        self.values_mut().insert(key.to_string(), value.to_string());
    }

    /// Test helper to peek at the raw value under `key`.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.values_mut().get(key).cloned()
    }

    fn values_mut(&self) -> MutexGuard<'_, HashMap<String, String>> {
        // Every mutation is a single insert, so a poisoned map is still consistent.
        self.values.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl KeyValueBackend for MemBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        if self.simulate_read_error.load(Ordering::SeqCst) {
            return Err(UserdeckError::Io(io::Error::other("Simulated read error")));
        }
        Ok(self.values_mut().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        if self.simulate_write_error.load(Ordering::SeqCst) {
            return Err(UserdeckError::Io(io::Error::other("Simulated write error")));
        }
        self.values_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::User;
    use crate::store::user_store::{UserStore, DEFAULT_STORAGE_KEY};

    pub struct StoreFixture {
        pub store: UserStore<MemBackend>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: UserStore::new(MemBackend::new(), DEFAULT_STORAGE_KEY),
            }
        }

        pub fn with_users(self, count: usize) -> Self {
            for i in 0..count {
                let n = i + 1;
                let user = User::new(
                    n.to_string(),
                    format!("User {}", n),
                    format!("user{}@example.com", n),
                    format!("https://example.com/avatars/{}.png", n),
                );
                self.store.add(user).unwrap();
            }
            self
        }

        pub fn with_user(self, id: &str, name: &str, email: &str) -> Self {
            let user = User::new(id, name, email, format!("https://example.com/{}.png", id));
            self.store.add(user).unwrap();
            self
        }

        pub fn backend(&self) -> &MemBackend {
            self.store.backend()
        }
    }
}
