//! Page routes and the session gate in front of them.
//!
//! Two states only: without a session every protected route resolves to
//! `/login`; with one, `/login` resolves to `/dashboard`. Loading is just
//! "unauthenticated with a login in flight".

#[cfg(test)]
#[path = "router_test.rs"]
mod router_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Dashboard,
    Exercises,
    Workouts,
    Analytics,
    AiAnalytics,
}

/// Order of links in the shell header.
pub const NAV_ROUTES: [Route; 5] = [
    Route::Dashboard,
    Route::Exercises,
    Route::Workouts,
    Route::Analytics,
    Route::AiAnalytics,
];

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Dashboard => "/dashboard",
            Route::Exercises => "/exercises",
            Route::Workouts => "/workouts",
            Route::Analytics => "/analytics",
            Route::AiAnalytics => "/ai-analytics",
        }
    }

    pub fn from_path(path: &str) -> Option<Route> {
        let path = path.trim_end_matches('/');
        [Route::Login]
            .into_iter()
            .chain(NAV_ROUTES)
            .find(|r| r.path() == path)
    }

    pub fn title(self) -> &'static str {
        match self {
            Route::Login => "Login",
            Route::Dashboard => "Dashboard",
            Route::Exercises => "Exercises",
            Route::Workouts => "Workouts",
            Route::Analytics => "Analytics",
            Route::AiAnalytics => "AI Coach",
        }
    }

    pub fn is_protected(self) -> bool {
        self != Route::Login
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub route: Route,
    pub redirected: bool,
}

pub fn guard(requested: Route, authenticated: bool) -> Resolution {
    let route = match (authenticated, requested) {
        (false, r) if r.is_protected() => Route::Login,
        (true, Route::Login) => Route::Dashboard,
        (_, r) => r,
    };
    Resolution {
        route,
        redirected: route != requested,
    }
}

#[derive(Debug)]
pub struct Router {
    current: Route,
    requested: Option<Route>,
}

impl Router {
    pub fn new(authenticated: bool) -> Self {
        Router {
            current: guard(Route::Dashboard, authenticated).route,
            requested: None,
        }
    }

    pub fn current(&self) -> Route {
        self.current
    }

    /// The protected route that was last bounced to `/login`. Only shown as a
    /// hint; signing in always lands on `/dashboard`.
    pub fn requested(&self) -> Option<Route> {
        self.requested
    }

    pub fn navigate(&mut self, requested: Route, authenticated: bool) -> Route {
        let resolution = guard(requested, authenticated);
        if resolution.redirected {
            tracing::debug!(
                from = requested.path(),
                to = resolution.route.path(),
                "route redirected"
            );
        }
        self.requested = (resolution.redirected && resolution.route == Route::Login).then_some(requested);
        self.current = resolution.route;
        self.current
    }

    /// Unknown paths land on the dashboard, then go through the guard like any other.
    pub fn navigate_path(&mut self, path: &str, authenticated: bool) -> Route {
        let requested = Route::from_path(path).unwrap_or(Route::Dashboard);
        self.navigate(requested, authenticated)
    }

    /// Re-applies the guard after the session changed under the current route.
    /// Returns true when the route changed.
    pub fn sync(&mut self, authenticated: bool) -> bool {
        let before = self.current;
        self.navigate(before, authenticated) != before
    }
}
