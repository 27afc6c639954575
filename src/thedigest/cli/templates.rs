//! # CLI Templates
//!
//! Terminal output is rendered from minijinja templates kept as standalone `.tmp` files
//! next to this module, so they can be edited and diffed without touching Rust. They are
//! embedded here with `include_str!` and registered by name in the renderer.
//!
//! Conventions:
//!
//! 1. **Whitespace**: the environment trims blocks, so a line holding only a `{% %}` tag
//!    produces no output. An inline loop (`{% for -%} ... {%- endfor %}`) swallows its
//!    own line break; the empty line after it supplies one.
//! 2. **Composition**: `shell.tmp` wraps every page and includes the page body by name.
//!    Each archive entry includes `issue_card.tmp`.
//! 3. **Logic stays in Rust**: widths, truncation, joined tag lists and star ratings are
//!    computed before rendering. Templates branch on what is shown, never on styling.

pub const SHELL: (&str, &str) = ("shell.tmp", include_str!("templates/shell.tmp"));
pub const HOME: (&str, &str) = ("home.tmp", include_str!("templates/home.tmp"));
pub const ABOUT: (&str, &str) = ("about.tmp", include_str!("templates/about.tmp"));
pub const ARCHIVE: (&str, &str) = ("archive.tmp", include_str!("templates/archive.tmp"));
pub const ISSUE_CARD: (&str, &str) = ("issue_card.tmp", include_str!("templates/issue_card.tmp"));
pub const ISSUE: (&str, &str) = ("issue.tmp", include_str!("templates/issue.tmp"));
pub const CONTACT: (&str, &str) = ("contact.tmp", include_str!("templates/contact.tmp"));
pub const FAQ: (&str, &str) = ("faq.tmp", include_str!("templates/faq.tmp"));
pub const SUBSCRIBE: (&str, &str) = ("subscribe.tmp", include_str!("templates/subscribe.tmp"));
pub const SIGN_IN: (&str, &str) = ("signin.tmp", include_str!("templates/signin.tmp"));
pub const LEGAL: (&str, &str) = ("legal.tmp", include_str!("templates/legal.tmp"));
pub const MESSAGES: (&str, &str) = ("messages.tmp", include_str!("templates/messages.tmp"));
pub const TOAST: (&str, &str) = ("toast.tmp", include_str!("templates/toast.tmp"));
pub const CONFIG: (&str, &str) = ("config.tmp", include_str!("templates/config.tmp"));

pub const ALL: &[(&str, &str)] = &[
    SHELL, HOME, ABOUT, ARCHIVE, ISSUE_CARD, ISSUE, CONTACT, FAQ, SUBSCRIBE, SIGN_IN, LEGAL,
    MESSAGES, TOAST, CONFIG,
];
