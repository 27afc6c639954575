//! # CLI Dispatch
//!
//! `run()` parses arguments, builds an [`AppContext`] and hands each subcommand to a
//! `handle_*` function. Handlers call [`DigestApi`] and print what comes back; they
//! hold no site logic of their own.
//!
//! Toasts are not printed by handlers. The context subscribes to the process-wide
//! [`NotificationHub`] for its whole lifetime and prints every notification as it is
//! published, including the one a pending sign-in raises after its delay.
//!
//! A rejected form submission returns its validation error from `run()`, so the binary
//! exits non-zero after the destructive toast is already on screen.

use super::pages::{self, Page};
use super::render::Renderer;
use super::setup::{Cli, Commands};
use clap::Parser;
use console::Term;
use std::sync::Arc;
use thedigest::api::DigestApi;
use thedigest::commands::config::ConfigAction;
use thedigest::commands::{self, CmdMessage};
use thedigest::config::{digest_home, DigestConfig};
use thedigest::content::FAQS;
use thedigest::error::{DigestError, Result};
use thedigest::forms::contact::{ContactEvent, ContactForm};
use thedigest::forms::faq::FaqAccordion;
use thedigest::forms::nav::NavMenu;
use thedigest::forms::quick_subscribe::QuickSubscribeForm;
use thedigest::forms::signin::{SignInEvent, SignInForm, SignInMode, SignInOutcome};
use thedigest::forms::subscribe::{SubscribeEvent, SubscribeForm};
use thedigest::notify::{NotificationHub, Subscription};
use thedigest::routes::Route;
use tracing::debug;
use tracing_subscriber::EnvFilter;

struct AppContext {
    api: DigestApi,
    renderer: Arc<Renderer>,
    _toasts: Subscription,
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let use_color = !cli.no_color && Term::stdout().features().colors_supported();
    let renderer = Renderer::new(use_color)?;

    // Config must stay reachable when the configured catalog fails to load.
    if let Some(Commands::Config { key, value }) = &cli.command {
        return handle_config(&renderer, key.clone(), value.clone());
    }

    let ctx = init_context(renderer)?;

    match cli.command {
        None => handle_route(&ctx, Route::Home, NavMenu::default()),
        Some(Commands::Page { path, menu }) => handle_page(&ctx, &path, menu),
        Some(Commands::Archive { search, page }) => {
            handle_archive(&ctx, search.as_deref().unwrap_or(""), page)
        }
        Some(Commands::Search { query }) => handle_archive(&ctx, &query, 1),
        Some(Commands::Issue { id }) => handle_issue(&ctx, id),
        Some(Commands::Faq { toggles }) => handle_faq(&ctx, &toggles),
        Some(Commands::Subscribe {
            email,
            first_name,
            interests,
            agree_terms,
            no_marketing,
        }) => {
            let mut form = SubscribeForm::default()
                .apply(SubscribeEvent::Email(email))
                .apply(SubscribeEvent::FirstName(first_name.unwrap_or_default()))
                .apply(SubscribeEvent::TermsAgreed(agree_terms))
                .apply(SubscribeEvent::AllowMarketing(!no_marketing));
            for name in interests {
                form = form.apply(SubscribeEvent::Interest {
                    name,
                    checked: true,
                });
            }
            handle_subscribe(&ctx, form)
        }
        Some(Commands::QuickSubscribe { email }) => handle_quick_subscribe(&ctx, email),
        Some(Commands::Contact {
            name,
            email,
            subject,
            message,
        }) => {
            let form = ContactForm::default()
                .apply(ContactEvent::Name(name))
                .apply(ContactEvent::Email(email))
                .apply(ContactEvent::Subject(subject))
                .apply(ContactEvent::Message(message));
            handle_contact(&ctx, form)
        }
        Some(Commands::SignIn {
            email,
            password,
            magic_link,
            remember_me,
            forgot_password,
        }) => {
            let mut form = SignInForm::default()
                .apply(SignInEvent::Email(email))
                .apply(SignInEvent::Password(password.unwrap_or_default()))
                .apply(SignInEvent::RememberMe(remember_me));
            if magic_link {
                form = form.apply(SignInEvent::ToggleMode);
            }
            if forgot_password {
                handle_forgot_password(&ctx, &form)
            } else {
                handle_sign_in(&ctx, form).await
            }
        }
        Some(Commands::Config { .. }) => Ok(()),
    }
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn init_context(renderer: Renderer) -> Result<AppContext> {
    let home = digest_home()?;
    let api = DigestApi::open(home, NotificationHub::global().clone())?;
    let renderer = Arc::new(renderer);

    let toast_renderer = Arc::clone(&renderer);
    let toasts = api
        .hub()
        .subscribe(move |n| print!("{}", toast_renderer.render_toast(n)));

    Ok(AppContext {
        api,
        renderer,
        _toasts: toasts,
    })
}

fn print_page(ctx: &AppContext, page: &Page, menu: NavMenu) -> Result<()> {
    let output = ctx.renderer.render_page(page, menu)?;
    print!("{}", output);
    Ok(())
}

fn print_messages(ctx: &AppContext, messages: &[CmdMessage]) {
    let output = ctx.renderer.render_messages(messages);
    if !output.is_empty() {
        print!("{}", output);
    }
}

fn handle_route(ctx: &AppContext, route: Route, menu: NavMenu) -> Result<()> {
    let page = pages::for_route(&ctx.api, route)?;
    print_page(ctx, &page, menu)
}

fn handle_page(ctx: &AppContext, path: &str, open_menu: bool) -> Result<()> {
    let mut menu = NavMenu::default();
    let route = menu.navigate(ctx.api.resolve(path)?);
    if open_menu {
        menu = menu.toggle();
    }
    debug!(%route, menu_open = menu.open, "rendering page");
    handle_route(ctx, route, menu)
}

fn handle_archive(ctx: &AppContext, query: &str, page: usize) -> Result<()> {
    let page = pages::archive(&ctx.api, query, page)?;
    print_page(ctx, &page, NavMenu::default())
}

fn handle_issue(ctx: &AppContext, id: u32) -> Result<()> {
    let page = pages::issue(&ctx.api, id)?;
    print_page(ctx, &page, NavMenu::default())
}

/// Toggles are numbered from 1, as shown on the page.
fn handle_faq(ctx: &AppContext, toggles: &[usize]) -> Result<()> {
    let mut accordion = FaqAccordion::default();
    for &number in toggles {
        if number == 0 || number > FAQS.len() {
            return Err(DigestError::Api(format!(
                "No question {}; choose 1-{}",
                number,
                FAQS.len()
            )));
        }
        accordion = accordion.toggle(number - 1);
    }
    print_page(ctx, &pages::faq(&accordion), NavMenu::default())
}

fn handle_subscribe(ctx: &AppContext, mut form: SubscribeForm) -> Result<()> {
    let submitted = ctx.api.subscribe(&mut form)?;

    let mut messages = Vec::new();
    if !submitted.interests.is_empty() {
        messages.push(CmdMessage::info(format!(
            "Topics: {}",
            submitted.interests.join(", ")
        )));
    }
    if !submitted.allow_marketing {
        messages.push(CmdMessage::info("You won't receive feature updates."));
    }
    print_messages(ctx, &messages);
    Ok(())
}

fn handle_quick_subscribe(ctx: &AppContext, email: Option<String>) -> Result<()> {
    let mut form = QuickSubscribeForm::default().with_email(email.unwrap_or_default());
    ctx.api.quick_subscribe(&mut form)?;
    Ok(())
}

fn handle_contact(ctx: &AppContext, mut form: ContactForm) -> Result<()> {
    ctx.api.contact(&mut form)?;
    Ok(())
}

fn handle_forgot_password(ctx: &AppContext, form: &SignInForm) -> Result<()> {
    ctx.api.forgot_password(form)
}

async fn handle_sign_in(ctx: &AppContext, mut form: SignInForm) -> Result<()> {
    let pending = form.mode() == SignInMode::Password;
    let handle = ctx.api.sign_in(&mut form)?;
    if pending {
        print_messages(ctx, &[CmdMessage::info("Signing in...")]);
    }

    match handle.wait().await? {
        SignInOutcome::SignedIn { remember_me, .. } if remember_me => {
            print_messages(ctx, &[CmdMessage::info("You'll stay signed in on this device.")]);
        }
        outcome => debug!(?outcome, "sign-in finished"),
    }
    Ok(())
}

fn handle_config(renderer: &Renderer, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = commands::config::run(&digest_home()?, action)?;
    if show_all {
        let config = result.config.clone().unwrap_or_else(DigestConfig::default);
        print!("{}", renderer.render_config(&config)?);
    }

    let output = renderer.render_messages(&result.messages);
    if !output.is_empty() {
        print!("{}", output);
    }
    Ok(())
}
