//! Navigation bar.

use crate::route::Route;

/// Icon drawn instead of a text label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Cart,
    Avatar,
}

/// One navigation link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub route: Route,
    pub icon: Option<Icon>,
}

impl NavLink {
    const fn text(label: &'static str, route: Route) -> Self {
        Self {
            label,
            route,
            icon: None,
        }
    }

    const fn icon(label: &'static str, route: Route, icon: Icon) -> Self {
        Self {
            label,
            route,
            icon: Some(icon),
        }
    }
}

/// The site-wide navigation bar: logo, catalogue links and user links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavBar {
    pub logo: NavLink,
    pub main_nav: Vec<NavLink>,
    pub user_nav: Vec<NavLink>,
}

impl NavBar {
    pub fn new() -> Self {
        Self {
            logo: NavLink::text("clothie", Route::Home),
            main_nav: vec![
                NavLink::text("New in", Route::NewIn),
                NavLink::text("Clothing", Route::Clothing),
                NavLink::text("Accessories", Route::Accessories),
            ],
            user_nav: vec![
                NavLink::icon("Cart", Route::Cart, Icon::Cart),
                NavLink::icon("Account", Route::User, Icon::Avatar),
            ],
        }
    }

    /// Every link, logo first.
    pub fn links(&self) -> impl Iterator<Item = &NavLink> {
        std::iter::once(&self.logo)
            .chain(self.main_nav.iter())
            .chain(self.user_nav.iter())
    }

    /// Route of the link with this label, ignoring case.
    pub fn route_for(&self, label: &str) -> Option<Route> {
        self.links()
            .find(|link| link.label.eq_ignore_ascii_case(label))
            .map(|link| link.route)
    }
}

impl Default for NavBar {
    fn default() -> Self {
        Self::new()
    }
}
