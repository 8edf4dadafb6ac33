use flatdues_common::models::auth::{Principal, Role};

/// Navigable screens of the portal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    /// Admin self-signup entry point
    AdminSignup,
    AdminHome,
    AdminBills,
    AdminResidents,
    ResidentHome,
    /// "/" - resolves to a role home or the login screen
    Home,
}

/// Outcome of a navigation decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// Render the requested route
    Proceed,
    /// Go somewhere else instead
    Redirect(Route),
    /// Unknown path: render a not-found state, never redirect
    NotFound,
}

impl Route {
    pub fn parse(path: &str) -> Option<Route> {
        match path {
            "/" => Some(Route::Home),
            "/login" => Some(Route::Login),
            "/api/auth/admin/signup" => Some(Route::AdminSignup),
            "/admin" => Some(Route::AdminHome),
            "/admin/bills" => Some(Route::AdminBills),
            "/admin/residents" => Some(Route::AdminResidents),
            "/resident" => Some(Route::ResidentHome),
            _ => None,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::AdminSignup => "/api/auth/admin/signup",
            Route::AdminHome => "/admin",
            Route::AdminBills => "/admin/bills",
            Route::AdminResidents => "/admin/residents",
            Route::ResidentHome => "/resident",
            Route::Home => "/",
        }
    }

    /// Role a principal must hold to see this route, if any
    pub fn required_role(&self) -> Option<Role> {
        match self {
            Route::AdminHome | Route::AdminBills | Route::AdminResidents => Some(Role::Admin),
            Route::ResidentHome => Some(Role::Resident),
            Route::Login | Route::AdminSignup | Route::Home => None,
        }
    }
}

/// Landing screen for a role
pub fn home_for(role: Role) -> Route {
    match role {
        Role::Admin => Route::AdminHome,
        Role::Resident => Route::ResidentHome,
    }
}

/// Decide what to do with a navigation to `path`.
///
/// Evaluated on every navigation, not once at startup: logout can remove the
/// principal at runtime. A denied route never renders; the redirect target is
/// the principal's own home, so a mis-typed role lands somewhere useful
/// rather than on an error page.
pub fn navigate(principal: Option<&Principal>, path: &str) -> Navigation {
    match Route::parse(path) {
        Some(route) => decide(principal, route),
        None => Navigation::NotFound,
    }
}

/// Guard decision for an already-parsed route.
pub fn decide(principal: Option<&Principal>, route: Route) -> Navigation {
    // A principal without a token is never treated as authenticated
    let principal = principal.filter(|p| p.is_authenticated());

    if route == Route::Home {
        return match principal {
            Some(p) => Navigation::Redirect(home_for(p.role)),
            None => Navigation::Redirect(Route::Login),
        };
    }

    match route.required_role() {
        None => match (route, principal) {
            // Already signed in: the login screen forwards to the role home
            (Route::Login, Some(p)) => Navigation::Redirect(home_for(p.role)),
            _ => Navigation::Proceed,
        },
        Some(required) => match principal {
            None => Navigation::Redirect(Route::Login),
            Some(p) if p.role == required => Navigation::Proceed,
            Some(p) => Navigation::Redirect(home_for(p.role)),
        },
    }
}
