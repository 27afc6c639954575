//! # The Digest
//!
//! The Digest is a weekly newsletter site: a home page, an about page, a searchable
//! archive of past issues, an FAQ, and forms to subscribe, get in touch and sign in.
//! This crate is that site with the browser taken out. Everything a page does is a
//! plain Rust operation; the `digest` binary is one client that renders it to a terminal.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders pages and toasts               │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands and form controllers           │
//! │  - Owns catalog, configuration and the notification hub     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs) and Controllers (forms/*.rs) │
//! │  - Archive search, paging, lookup; form state and submit    │
//! │  - Operates on Rust types, returns Rust types               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Data (catalog.rs, content.rs)                              │
//! │  - Issue catalog, built in or loaded from JSON              │
//! │  - Static page copy                                         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O in the Core
//!
//! From `api.rs` inward, code never writes to stdout or stderr and never exits the
//! process. User feedback from forms goes through the [`notify::Notify`] collaborator;
//! whoever mounts a UI subscribes to the [`notify::NotificationHub`] and shows it.
//!
//! ## Testing Strategy
//!
//! 1. **Commands and controllers**: unit tests next to the code. Most testing lives here.
//! 2. **API** (`api.rs`): dispatch and wiring, with a temporary home directory.
//! 3. **CLI** (`tests/`): end-to-end through the `digest` binary.
//!
//! ## Module Overview
//!
//! - [`api`]: facade used by every client
//! - [`catalog`]: the ordered issue catalog and its validation
//! - [`commands`]: archive search, paging and issue lookup, configuration
//! - [`config`]: `config.json` settings and the home directory
//! - [`content`]: static copy shown on the pages
//! - [`error`]: error types
//! - [`forms`]: form, accordion and menu controllers
//! - [`model`]: issue records and notification severity
//! - [`notify`]: notification hub
//! - [`routes`]: site paths and navigation

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod forms;
pub mod model;
pub mod notify;
pub mod routes;
