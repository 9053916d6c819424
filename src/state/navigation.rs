//! Navigation-related state types.
//!
//! The navigation bar shows a brand label and one link per view. Each view
//! is addressed by a route, `/` for the home page and `/favorites` for the
//! favorites page.

/// Brand label shown at the left of the navigation bar.
///
pub const NAV_BRAND: &str = "Movie Website";

/// Specifying the different views.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum View {
    Home,
    Favorites,
}

impl View {
    /// Return the route addressing this view.
    ///
    pub fn route(&self) -> &'static str {
        match self {
            View::Home => "/",
            View::Favorites => "/favorites",
        }
    }

    /// Return the view addressed by `route`. A trailing slash is ignored.
    ///
    pub fn from_route(route: &str) -> Option<View> {
        match route.trim_end_matches('/') {
            "" => Some(View::Home),
            "/favorites" => Some(View::Favorites),
            _ => None,
        }
    }

    /// Return the view after this one, wrapping around.
    ///
    pub fn next(&self) -> View {
        match self {
            View::Home => View::Favorites,
            View::Favorites => View::Home,
        }
    }

    /// Return the heading of the main panel for this view.
    ///
    pub fn title(&self) -> &'static str {
        match self {
            View::Home => "Movies",
            View::Favorites => "Your Favorites",
        }
    }
}

/// A link shown in the navigation bar.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct NavLink {
    pub label: &'static str,
    pub view: View,
}

impl NavLink {
    pub fn route(&self) -> &'static str {
        self.view.route()
    }
}

/// Return the navigation bar links, in display order.
///
pub fn nav_links() -> [NavLink; 2] {
    [
        NavLink {
            label: "Home Page",
            view: View::Home,
        },
        NavLink {
            label: "Favorites",
            view: View::Favorites,
        },
    ]
}
