use crate::error::Result;

/// Abstract interface for the raw key-value medium.
///
/// This trait handles the "how" of storage (filesystem vs memory), while
/// [`UserStore`](super::user_store::UserStore) handles the "what" (the user
/// collection and its invariants). Values are opaque strings.
pub trait KeyValueBackend: Send + Sync {
    /// Read the value stored under `key`.
    /// Returns Ok(None) if nothing was ever written there.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

impl<B: KeyValueBackend + ?Sized> KeyValueBackend for Box<B> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}
