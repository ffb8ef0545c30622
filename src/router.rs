//! Route table, protected-route gate and the navigator

use tokio::sync::watch;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Dashboard,
    Trackers,
    Campaigns,
    Channels,
    Targets,
    Sites,
    Tokens,
    TokenGenerator,
    NotFound,
}

impl Route {
    pub const ALL: [Route; 10] = [
        Route::Login,
        Route::Dashboard,
        Route::Trackers,
        Route::Campaigns,
        Route::Channels,
        Route::Targets,
        Route::Sites,
        Route::Tokens,
        Route::TokenGenerator,
        Route::NotFound,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Dashboard => "/",
            Route::Trackers => "/trackers",
            Route::Campaigns => "/campaigns",
            Route::Channels => "/channels",
            Route::Targets => "/targets",
            Route::Sites => "/sites",
            Route::Tokens => "/tokens",
            Route::TokenGenerator => "/tokens/new",
            Route::NotFound => "*",
        }
    }

    /// Match a path against the route table. Query strings, fragments and a
    /// trailing slash are ignored.
    pub fn from_path(path: &str) -> Route {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };

        Route::ALL
            .into_iter()
            .find(|r| *r != Route::NotFound && r.path() == path)
            .unwrap_or(Route::NotFound)
    }

    pub fn is_protected(&self) -> bool {
        !matches!(self, Route::Login | Route::NotFound)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Login => "Sign in",
            Route::Dashboard => "Dashboard",
            Route::Trackers => "Trackers",
            Route::Campaigns => "Campaigns",
            Route::Channels => "Channels",
            Route::Targets => "Targets",
            Route::Sites => "Sites",
            Route::Tokens => "Tokens",
            Route::TokenGenerator => "Token Generator",
            Route::NotFound => "Not Found",
        }
    }
}

/// Apply the auth gate to a requested route.
pub fn resolve(requested: Route, authenticated: bool) -> Route {
    match requested {
        r if r.is_protected() && !authenticated => Route::Login,
        Route::Login if authenticated => Route::Dashboard,
        r => r,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub route: Route,
    pub label: &'static str,
    pub shortcut: char,
}

/// Sidebar entries, in display order
pub const NAV_ITEMS: [NavItem; 7] = [
    NavItem { route: Route::Dashboard, label: "Dashboard", shortcut: '1' },
    NavItem { route: Route::Trackers, label: "Trackers", shortcut: '2' },
    NavItem { route: Route::Campaigns, label: "Campaigns", shortcut: '3' },
    NavItem { route: Route::Channels, label: "Channels", shortcut: '4' },
    NavItem { route: Route::Targets, label: "Targets", shortcut: '5' },
    NavItem { route: Route::Sites, label: "Sites", shortcut: '6' },
    NavItem { route: Route::Tokens, label: "Tokens", shortcut: '7' },
];

pub fn nav_item_for_shortcut(c: char) -> Option<&'static NavItem> {
    NAV_ITEMS.iter().find(|item| item.shortcut == c)
}

/// Requested location, shared by everything that may redirect.
#[derive(Clone)]
pub struct Navigator {
    location: watch::Sender<Route>,
}

impl Navigator {
    pub fn new(initial: Route) -> Self {
        let (location, _) = watch::channel(initial);
        Self { location }
    }

    pub fn current(&self) -> Route {
        *self.location.borrow()
    }

    pub fn navigate(&self, route: Route) {
        self.location.send_if_modified(|current| {
            if *current == route {
                false
            } else {
                *current = route;
                true
            }
        });
    }

    pub fn navigate_path(&self, path: &str) {
        self.navigate(Route::from_path(path));
    }

    pub fn subscribe(&self) -> watch::Receiver<Route> {
        self.location.subscribe()
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(Route::Dashboard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path_matches_table() {
        assert_eq!(Route::from_path("/"), Route::Dashboard);
        assert_eq!(Route::from_path(""), Route::Dashboard);
        assert_eq!(Route::from_path("/login"), Route::Login);
        assert_eq!(Route::from_path("/trackers/"), Route::Trackers);
        assert_eq!(Route::from_path("/tokens/new"), Route::TokenGenerator);
        assert_eq!(Route::from_path("/tokens?page=2"), Route::Tokens);
        assert_eq!(Route::from_path("/nope"), Route::NotFound);
        assert_eq!(Route::from_path("*"), Route::NotFound);
    }

    #[test]
    fn test_every_route_path_roundtrips() {
        for route in Route::ALL {
            if route != Route::NotFound {
                assert_eq!(Route::from_path(route.path()), route);
            }
        }
    }

    #[test]
    fn test_gate_unauthenticated() {
        for route in Route::ALL {
            let resolved = resolve(route, false);
            if route.is_protected() {
                assert_eq!(resolved, Route::Login, "{:?}", route);
            } else {
                assert_eq!(resolved, route);
            }
        }
    }

    #[test]
    fn test_gate_authenticated() {
        assert_eq!(resolve(Route::Login, true), Route::Dashboard);
        assert_eq!(resolve(Route::Sites, true), Route::Sites);
        assert_eq!(resolve(Route::NotFound, true), Route::NotFound);
    }

    #[test]
    fn test_navigator_notifies_only_on_change() {
        let nav = Navigator::new(Route::Dashboard);
        let mut rx = nav.subscribe();
        nav.navigate(Route::Dashboard);
        assert!(!rx.has_changed().unwrap());
        nav.navigate_path("/sites");
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), Route::Sites);
    }

    #[test]
    fn test_shortcuts_unique() {
        assert_eq!(nav_item_for_shortcut('7').map(|i| i.route), Some(Route::Tokens));
        assert!(nav_item_for_shortcut('9').is_none());
    }
}
