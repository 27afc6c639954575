//! # Rendering Module
//!
//! Styled terminal output from the templates in `templates/`.
//!
//! Layout calculations (widths, truncation, labels) stay in Rust; see `pages.rs`.
//! Templates handle presentation:
//! - Style selection through semantic names
//! - Section order and spacing
//! - What to show for empty or open/closed states
//!
//! Every page body is wrapped in `shell.tmp`, which draws the navigation header, the
//! optional open menu, and the footer.

use super::pages::{Page, LINE_WIDTH};
use super::styles::{names, register_style_filter, DIGEST_THEME};
use super::templates;
use minijinja::{context, Environment};
use serde::Serialize;
use thedigest::commands::{CmdMessage, MessageLevel};
use thedigest::config::DigestConfig;
use thedigest::content::{COPYRIGHT, SITE_NAME, TAGLINE};
use thedigest::error::{DigestError, Result};
use thedigest::forms::nav::NavMenu;
use thedigest::notify::Notification;
use thedigest::routes::{is_active, NavItem, Route, CALLS_TO_ACTION, NAVIGATION};

#[derive(Debug, Clone, Serialize)]
struct NavLink {
    name: &'static str,
    path: String,
    style: &'static str,
}

impl NavLink {
    fn new(item: &NavItem, current: Route) -> Self {
        Self {
            name: item.name,
            path: item.route.path(),
            style: if is_active(item, current) {
                names::NAV_ACTIVE
            } else {
                names::NAV
            },
        }
    }
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: &'static str,
}

#[derive(Serialize)]
struct ConfigEntry {
    key: &'static str,
    value: String,
}

pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    pub fn new(use_color: bool) -> Result<Self> {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_keep_trailing_newline(true);
        register_style_filter(&mut env, DIGEST_THEME.clone(), use_color);

        for &(name, source) in templates::ALL {
            env.add_template(name, source).map_err(render_error)?;
        }
        Ok(Self { env })
    }

    fn render<S: Serialize>(&self, name: &str, data: S) -> Result<String> {
        self.env
            .get_template(name)
            .and_then(|tmpl| tmpl.render(data))
            .map_err(render_error)
    }

    /// Renders a page body inside the navigation shell.
    pub fn render_page(&self, page: &Page, menu: NavMenu) -> Result<String> {
        let nav: Vec<NavLink> = NAVIGATION
            .iter()
            .map(|item| NavLink::new(item, page.route))
            .collect();
        let ctas: Vec<NavLink> = CALLS_TO_ACTION
            .iter()
            .map(|item| NavLink::new(item, page.route))
            .collect();
        let menu_items: Vec<NavLink> = nav.iter().chain(ctas.iter()).cloned().collect();
        let quick_links = NAVIGATION
            .iter()
            .map(|item| item.name)
            .collect::<Vec<_>>()
            .join(" · ");

        self.render(
            templates::SHELL.0,
            context! {
                site_name => SITE_NAME,
                nav,
                ctas,
                menu => menu_items,
                menu_open => menu.open,
                rule => "─".repeat(LINE_WIDTH),
                body => page.body,
                page => &page.data,
                tagline => TAGLINE,
                quick_links,
                legal_links => format!(
                    "{} {} · {} {}",
                    Route::Privacy.title(),
                    Route::Privacy.path(),
                    Route::Terms.title(),
                    Route::Terms.path()
                ),
                copyright => COPYRIGHT,
            },
        )
    }

    pub fn render_messages(&self, messages: &[CmdMessage]) -> String {
        if messages.is_empty() {
            return String::new();
        }

        let messages: Vec<MessageData> = messages
            .iter()
            .map(|msg| MessageData {
                content: msg.content.clone(),
                style: match msg.level {
                    MessageLevel::Info => names::INFO,
                    MessageLevel::Success => names::SUCCESS,
                    MessageLevel::Error => names::ERROR,
                },
            })
            .collect();

        self.render(templates::MESSAGES.0, context! { messages })
            .unwrap_or_else(|_| {
                messages
                    .iter()
                    .map(|m| format!("{}\n", m.content))
                    .collect()
            })
    }

    pub fn render_toast(&self, notification: &Notification) -> String {
        let (marker, style) = if notification.is_destructive() {
            ("✖", names::TOAST_DESTRUCTIVE)
        } else {
            ("✔", names::TOAST)
        };

        self.render(
            templates::TOAST.0,
            context! {
                marker,
                style,
                title => &notification.title,
                description => &notification.description,
            },
        )
        .unwrap_or_else(|_| format!("{}\n  {}\n", notification.title, notification.description))
    }

    pub fn render_config(&self, config: &DigestConfig) -> Result<String> {
        let entries: Vec<ConfigEntry> = config
            .entries()
            .into_iter()
            .map(|(key, value)| ConfigEntry { key, value })
            .collect();
        self.render(templates::CONFIG.0, context! { entries })
    }
}

fn render_error(e: minijinja::Error) -> DigestError {
    DigestError::Api(format!("Render error: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::pages;
    use thedigest::api::DigestApi;
    use thedigest::forms::faq::FaqAccordion;
    use thedigest::model::Severity;
    use thedigest::notify::NotificationHub;

    fn plain() -> Renderer {
        Renderer::new(false).unwrap()
    }

    fn api() -> (tempfile::TempDir, DigestApi) {
        let temp = tempfile::tempdir().unwrap();
        let api = DigestApi::open(temp.path().to_path_buf(), NotificationHub::default()).unwrap();
        (temp, api)
    }

    fn render_route(route: Route) -> String {
        let (_temp, api) = api();
        let page = pages::for_route(&api, route).unwrap();
        plain().render_page(&page, NavMenu::default()).unwrap()
    }

    #[test]
    fn test_every_route_renders_inside_the_shell() {
        for route in [
            Route::Home,
            Route::About,
            Route::Archive,
            Route::Issue(52),
            Route::Contact,
            Route::Faq,
            Route::Subscribe,
            Route::SignIn,
            Route::Privacy,
            Route::Terms,
        ] {
            let output = render_route(route);
            assert!(output.starts_with("The Digest\n"), "{route}");
            assert!(output.contains("© 2024 The Digest. All rights reserved."), "{route}");
            assert!(!output.contains("(!?)"), "unknown style on {route}");
        }
    }

    #[test]
    fn test_header_lists_navigation_in_order() {
        let output = render_route(Route::About);
        let header = output.lines().nth(1).unwrap();
        assert!(header.starts_with("Home  About  Archive  Contact  FAQ"));
        assert!(header.contains("[Subscribe] [Sign In]"));
        assert!(header.ends_with('☰'));
    }

    #[test]
    fn test_open_menu_lists_paths() {
        let (_temp, api) = api();
        let page = pages::for_route(&api, Route::Contact).unwrap();
        let output = plain()
            .render_page(&page, NavMenu::default().toggle())
            .unwrap();

        assert!(output.contains("  Contact  /contact"));
        assert!(output.contains("  Sign In  /signin"));
        assert!(output.lines().nth(1).unwrap().ends_with('✕'));
    }

    #[test]
    fn test_home_shows_hero_stats_and_testimonials() {
        let output = render_route(Route::Home);
        assert!(output.contains("Stay Ahead with The Digest"));
        assert!(output.contains("  52  Issues Sent"));
        assert!(output.contains("★★★★★"));
        assert!(output.contains("Michael Chen, Entrepreneur"));
    }

    #[test]
    fn test_archive_lists_cards_and_footer() {
        let output = render_route(Route::Archive);
        assert!(output.contains("Issue #52  Latest"));
        assert!(output.contains("January 16, 2024 · 6 min"));
        assert!(output.contains("Remote Work · Productivity · Technology"));
        assert!(output.contains("Read More → /archive/47"));
        assert!(output.contains("Showing latest 6 of 52 issues"));
        assert!(!output.contains("Load Older Issues"));
    }

    #[test]
    fn test_archive_search_without_matches() {
        let (_temp, api) = api();
        let page = pages::archive(&api, "zzz", 1).unwrap();
        let output = plain().render_page(&page, NavMenu::default()).unwrap();

        assert!(output.contains("0 results for \"zzz\""));
        assert!(output.contains("No issues found matching \"zzz\""));
        assert!(output.contains("[Clear Search]"));
        assert!(!output.contains("Issue #"));
        assert!(!output.contains("Showing latest"));
    }

    #[test]
    fn test_archive_search_summary() {
        let (_temp, api) = api();
        let page = pages::archive(&api, "hype", 1).unwrap();
        let output = plain().render_page(&page, NavMenu::default()).unwrap();

        assert!(output.contains("1 result for \"hype\""));
        assert!(output.contains("AI in Business: Beyond the Hype"));
        assert!(!output.contains("Leadership Lessons from 2023"));

        let page = pages::archive(&api, "ai", 1).unwrap();
        let output = plain().render_page(&page, NavMenu::default()).unwrap();
        assert!(output.contains("2 results for \"ai\""));
        assert!(output.contains("Sustainable Business Practices"));
    }

    #[test]
    fn test_issue_detail_shows_full_excerpt() {
        let output = render_route(Route::Issue(49));
        assert!(output.contains("The Data-Driven Decision Making Revolution"));
        assert!(output.contains("8 min read"));
        assert!(output.contains("to make better strategic decisions and drive growth."));
    }

    #[test]
    fn test_faq_shows_only_open_answers() {
        let page = pages::faq(&FaqAccordion::default().toggle(3));
        let output = plain().render_page(&page, NavMenu::default()).unwrap();

        assert!(output.contains("▾ 1. How often is The Digest sent?"));
        assert!(output.contains("▸ 2. Can I unsubscribe at any time?"));
        assert!(output.contains("▾ 4. Is The Digest free?"));
        assert!(output.contains("delivered every Tuesday morning at 8 AM EST"));
        assert!(output.contains("completely free"));
        assert!(!output.contains("No questions asked."));
    }

    #[test]
    fn test_legal_pages_use_route_title() {
        let output = render_route(Route::Terms);
        assert!(output.contains("Terms of Service\nLast updated: January 2024"));
        assert!(output.contains("Acceptance of Terms"));
    }

    #[test]
    fn test_render_messages_empty() {
        assert_eq!(plain().render_messages(&[]), "");
    }

    #[test]
    fn test_render_messages_multiple() {
        let output = plain().render_messages(&[
            CmdMessage::info("first"),
            CmdMessage::error("second"),
        ]);
        assert_eq!(output, "first\nsecond\n");
    }

    #[test]
    fn test_render_toast_variants() {
        let hub = NotificationHub::default();
        let ok = hub.publish("Message sent!", "Thanks.", Severity::Normal);
        let bad = hub.publish("Email required", "Enter it.", Severity::Destructive);

        let renderer = plain();
        assert_eq!(renderer.render_toast(&ok), "✔ Message sent!\n  Thanks.\n");
        assert_eq!(renderer.render_toast(&bad), "✖ Email required\n  Enter it.\n");
    }

    #[test]
    fn test_render_config_lists_every_key() {
        let output = plain().render_config(&DigestConfig::default()).unwrap();
        assert!(output.starts_with("sign_in_delay_ms = 1000\n"));
        assert!(output.contains("archive_page_size = 6\n"));
        assert!(output.contains("catalog_path = \n"));
    }

    #[test]
    fn test_render_with_color_includes_ansi() {
        let (_temp, api) = api();
        let page = pages::for_route(&api, Route::Faq).unwrap();
        let output = Renderer::new(true)
            .unwrap()
            .render_page(&page, NavMenu::default())
            .unwrap();
        assert!(output.contains("\x1b["));
    }
}
