use crate::routes::Route;

/// The collapsible mobile navigation menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMenu {
    pub open: bool,
}

impl NavMenu {
    pub fn toggle(self) -> Self {
        Self { open: !self.open }
    }

    /// Following any link closes the menu.
    pub fn navigate(&mut self, route: Route) -> Route {
        self.open = false;
        route
    }
}
