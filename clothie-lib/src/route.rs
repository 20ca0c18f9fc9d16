//! Client-side routes.

use std::fmt;

/// A page the storefront can navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    NewIn,
    Clothing,
    Accessories,
    Cart,
    User,
}

impl Route {
    /// All routes, in navigation order.
    pub const ALL: [Route; 6] = [
        Route::Home,
        Route::NewIn,
        Route::Clothing,
        Route::Accessories,
        Route::Cart,
        Route::User,
    ];

    /// The URL path of this route.
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::NewIn => "/clothing/new-in",
            Self::Clothing => "/clothing",
            Self::Accessories => "/clothing/accs",
            Self::Cart => "/cart",
            Self::User => "/user",
        }
    }

    /// Resolve a path to a route. Unknown paths resolve to nothing.
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|route| route.path() == path)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_round_trip() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
    }

    #[test]
    fn test_unknown_path() {
        assert_eq!(Route::from_path("/checkout"), None);
        assert_eq!(Route::from_path("/clothing/"), None);
    }
}
