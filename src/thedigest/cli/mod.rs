//! # CLI Behavior
//!
//! This is **one possible UI client** for The Digest, not the site itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and output formatting.
//!
//! For the overall architecture, see the crate-level documentation of `thedigest`.
//!
//! ## Pages
//!
//! Running `digest` with no arguments renders the home page. Any other page is one
//! `digest page <path>` away, and the common ones have their own subcommands:
//!
//! - `digest archive` lists the latest issues, `--page 2` loads older ones
//! - `digest search ai` filters the archive by title, excerpt and tag
//! - `digest issue 52` is the same as `digest page /archive/52`
//! - `digest faq -t 3` opens the third answer (the first is open by default)
//!
//! `digest page <path> --menu` renders the page with the navigation menu expanded.
//!
//! ## Forms
//!
//! `subscribe`, `quick-subscribe`, `contact` and `signin` fill a form from flags and
//! submit it. The outcome is shown as a toast:
//!
//! ```text
//! ✔ Welcome to The Digest!
//!   Thank you for subscribing. Check your email for confirmation.
//! ```
//!
//! A rejected submission prints a `✖` toast and exits with status 1.
//!
//! A password sign-in waits `sign_in_delay_ms` before succeeding, like a round trip to
//! a server would. Set it to 0 with `digest config sign_in_delay_ms 0` to skip the wait.
//!
//! ## Color
//!
//! Styles are applied when stdout supports color. `--no-color` turns them off.

mod commands;
mod pages;
mod render;
pub mod setup;
mod styles;
mod templates;

pub use commands::run;
