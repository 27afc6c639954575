//! # API Facade
//!
//! The single entry point for every digest operation, whatever UI is driving it.
//!
//! `DigestApi` owns the loaded catalog, the configuration and the notification hub,
//! then dispatches:
//!
//! - archive reads to `commands::{search, archive}`,
//! - configuration changes to `commands::config`,
//! - form submissions to the controllers in `forms`, with the hub as their notifier.
//!
//! It never prints and never exits. Controllers stay owned by the caller; the API
//! only supplies what a submission needs (notifier, delay).

use crate::catalog::Catalog;
use crate::commands::{self, config::ConfigAction, CmdResult};
use crate::config::DigestConfig;
use crate::error::{DigestError, Result};
use crate::forms::contact::ContactForm;
use crate::forms::quick_subscribe::QuickSubscribeForm;
use crate::forms::signin::{SignInForm, SignInHandle};
use crate::forms::subscribe::SubscribeForm;
use crate::notify::NotificationHub;
use crate::routes::Route;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

pub struct DigestApi {
    catalog: Catalog,
    config: DigestConfig,
    home: PathBuf,
    hub: NotificationHub,
}

impl DigestApi {
    pub fn new(catalog: Catalog, config: DigestConfig, home: PathBuf, hub: NotificationHub) -> Self {
        hub.configure(config.notification_limit, config.notification_duration());
        Self {
            catalog,
            config,
            home,
            hub,
        }
    }

    /// Loads `config.json` from `home` and the catalog it points at.
    ///
    /// A relative `catalog_path` is resolved against `home`.
    pub fn open(home: PathBuf, hub: NotificationHub) -> Result<Self> {
        let config = DigestConfig::load(&home)?;
        let catalog = match &config.catalog_path {
            Some(path) => Catalog::load(home.join(path))?,
            None => Catalog::builtin()?,
        };
        debug!(home = %home.display(), issues = catalog.len(), "digest api opened");
        Ok(Self::new(catalog, config, home, hub))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn settings(&self) -> &DigestConfig {
        &self.config
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    pub fn hub(&self) -> &NotificationHub {
        &self.hub
    }

    /// Parses a path, and for issue pages checks the issue exists.
    pub fn resolve(&self, path: &str) -> Result<Route> {
        let route: Route = path.parse()?;
        if let Route::Issue(id) = route {
            if self.catalog.get(id).is_none() {
                return Err(DigestError::IssueNotFound(id));
            }
        }
        Ok(route)
    }

    pub fn search_archive(&self, query: &str) -> Result<CmdResult> {
        commands::search::run(&self.catalog, query)
    }

    pub fn archive_page(&self, page: usize) -> Result<CmdResult> {
        commands::archive::run(
            &self.catalog,
            page,
            self.config.archive_page_size,
            self.config.catalog_total_issues,
        )
    }

    pub fn view_issue(&self, id: u32) -> Result<CmdResult> {
        commands::archive::view(&self.catalog, id)
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.home, action)
    }

    pub fn subscribe(&self, form: &mut SubscribeForm) -> Result<SubscribeForm> {
        form.submit(&self.hub)
    }

    pub fn quick_subscribe(&self, form: &mut QuickSubscribeForm) -> Result<String> {
        form.submit(&self.hub)
    }

    pub fn contact(&self, form: &mut ContactForm) -> Result<ContactForm> {
        form.submit(&self.hub)
    }

    /// Must be called from within a tokio runtime for password sign-ins.
    pub fn sign_in(&self, form: &mut SignInForm) -> Result<SignInHandle> {
        form.submit(Arc::new(self.hub.clone()), self.config.sign_in_delay())
    }

    pub fn forgot_password(&self, form: &SignInForm) -> Result<()> {
        form.forgot_password(&self.hub)
    }
}
