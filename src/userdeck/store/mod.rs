//! # Storage Layer
//!
//! Storage is split in two:
//!
//! - [`backend::KeyValueBackend`]: the raw medium, a string-to-string map
//!   with `get` and `set`. It knows nothing about users.
//! - [`user_store::UserStore`]: the user collection on top of one key of
//!   that medium, enforcing the id and email invariants.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: production storage, one JSON file per key,
//!   written atomically through a temp file and rename.
//! - [`mem_backend::MemBackend`]: in-memory storage for tests, with switches
//!   to simulate read and write failures.
//!
//! ## Storage Format
//!
//! For `FsBackend` with the default key:
//! ```text
//! <data dir>/
//! ├── users.json          # Every user (JSON array)
//! └── config.json         # Settings
//! ```
//!
//! The collection is always read and written whole. Stores are meant for a
//! personal list of users, so a full round trip per mutation is cheap and
//! there is never a half-written collection on disk.

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;
pub mod user_store;

pub use backend::KeyValueBackend;
pub use user_store::{UserStore, DEFAULT_STORAGE_KEY};
