//! # Userdeck Architecture
//!
//! Userdeck keeps a small local list of users (name, email, avatar URL). It is a
//! **UI-agnostic library** with a CLI client on top; any other front end
//! would call the same API.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prints results, sets up logging        │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Form validation, id assignment, user-facing messages     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - UserStore: the collection and its invariants             │
//! │  - KeyValueBackend: FsBackend (production), MemBackend      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//!
//! The [`store::UserStore`] is the only thing that touches persisted state.
//! It guarantees one record per id and no two records sharing an email
//! (ignoring case), whatever its callers did or did not validate. Every
//! mutation rewrites the whole collection under a single key.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Create, list, show, edit, delete and config flows
//! - [`store`]: Storage abstraction, backends and the user store
//! - [`model`]: `User` and raw form input
//! - [`validation`]: Field predicates and form validation
//! - [`id`]: Identifier generation
//! - [`index`]: Selecting users by id or list position
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod id;
pub mod index;
pub mod model;
pub mod store;
pub mod validation;
