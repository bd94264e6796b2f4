use et_api::Session;

use std::fmt;

use log::debug;

/// The four screens of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    Dashboard,
    Transactions,
}

impl Route {
    pub const ALL: [Route; 4] = [
        Self::Login,
        Self::Register,
        Self::Dashboard,
        Self::Transactions,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Register => "/register",
            Self::Dashboard => "/",
            Self::Transactions => "/expenses",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|route| route.path() == path)
    }

    pub fn is_protected(&self) -> bool {
        matches!(self, Self::Dashboard | Self::Transactions)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Render(Route),
    Redirect(Route),
}

/// Lets protected routes through only while a session token exists.
///
/// The token itself is never inspected; an expired one surfaces later as a
/// rejected API call.
#[derive(Clone)]
pub struct RouteGuard {
    session: Session,
}

impl RouteGuard {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    pub fn resolve(&self, route: Route) -> Navigation {
        if route.is_protected() && !self.session.is_authenticated() {
            debug!("Redirecting {} to {}", route, Route::Login);
            return Navigation::Redirect(Route::Login);
        }

        Navigation::Render(route)
    }
}
