use crate::error::DigestError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A page of the site, addressed by its path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Route {
    Home,
    About,
    Archive,
    Issue(u32),
    Contact,
    Faq,
    Subscribe,
    SignIn,
    Privacy,
    Terms,
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::About => "/about".to_string(),
            Route::Archive => "/archive".to_string(),
            Route::Issue(id) => format!("/archive/{}", id),
            Route::Contact => "/contact".to_string(),
            Route::Faq => "/faq".to_string(),
            Route::Subscribe => "/subscribe".to_string(),
            Route::SignIn => "/signin".to_string(),
            Route::Privacy => "/privacy".to_string(),
            Route::Terms => "/terms".to_string(),
        }
    }

    /// Browser-tab style title.
    pub fn title(&self) -> String {
        match self {
            Route::Home => "Home".to_string(),
            Route::About => "About".to_string(),
            Route::Archive => "Archive".to_string(),
            Route::Issue(id) => format!("Issue #{}", id),
            Route::Contact => "Contact".to_string(),
            Route::Faq => "FAQ".to_string(),
            Route::Subscribe => "Subscribe".to_string(),
            Route::SignIn => "Sign In".to_string(),
            Route::Privacy => "Privacy Policy".to_string(),
            Route::Terms => "Terms of Service".to_string(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

impl FromStr for Route {
    type Err = DigestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DigestError::UnknownRoute(String::new()));
        }
        if trimmed.contains("//") {
            return Err(DigestError::UnknownRoute(trimmed.to_string()));
        }
        let path = match trimmed.strip_suffix('/') {
            Some(rest) if !rest.is_empty() => rest,
            _ => trimmed,
        };
        let route = match path {
            "/" => Route::Home,
            "/about" => Route::About,
            "/archive" => Route::Archive,
            "/contact" => Route::Contact,
            "/faq" => Route::Faq,
            "/subscribe" => Route::Subscribe,
            "/signin" => Route::SignIn,
            "/privacy" => Route::Privacy,
            "/terms" => Route::Terms,
            other => match other.strip_prefix("/archive/") {
                Some(id) => parse_issue_id(id)
                    .map(Route::Issue)
                    .ok_or_else(|| DigestError::UnknownRoute(trimmed.to_string()))?,
                None => return Err(DigestError::UnknownRoute(trimmed.to_string())),
            },
        };
        Ok(route)
    }
}

/// Issue ids are written exactly as `path()` prints them: plain digits, no leading zero.
fn parse_issue_id(id: &str) -> Option<u32> {
    if id.is_empty() || id.starts_with('0') || !id.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    id.parse().ok()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    pub route: Route,
}

/// Primary navigation, in header order.
pub const NAVIGATION: &[NavItem] = &[
    NavItem {
        name: "Home",
        route: Route::Home,
    },
    NavItem {
        name: "About",
        route: Route::About,
    },
    NavItem {
        name: "Archive",
        route: Route::Archive,
    },
    NavItem {
        name: "Contact",
        route: Route::Contact,
    },
    NavItem {
        name: "FAQ",
        route: Route::Faq,
    },
];

/// Calls to action shown after the navigation links.
pub const CALLS_TO_ACTION: &[NavItem] = &[
    NavItem {
        name: "Subscribe",
        route: Route::Subscribe,
    },
    NavItem {
        name: "Sign In",
        route: Route::SignIn,
    },
];

/// A nav item is active only on its exact path; `/archive/52` does not light up "Archive".
pub fn is_active(item: &NavItem, current: Route) -> bool {
    item.route.path() == current.path()
}
