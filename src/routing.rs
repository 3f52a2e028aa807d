//! Dashboard routing and session-presence guards.

use tracing::warn;

use crate::api::ApiClient;
use crate::core::errors::Result;
use crate::models::models::UserRecord;
use crate::session::SessionStore;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Login,
    StudentDashboard,
    SocietyDashboard,
    AdminDashboard,
    SocietyBoardDashboard,
    RegistrarDashboard,
    ViceChancellorDashboard,
}

/// Pick the dashboard for a logged-in identity.
///
/// Admin flag wins; its role string is matched after trimming and
/// lowercasing, and anything unrecognized lands on the generic admin
/// dashboard rather than failing. Then the society-owner flag, then the
/// student dashboard.
pub fn route_for(user: &UserRecord) -> Route {
    if user.is_admin {
        let role = user
            .role
            .as_deref()
            .unwrap_or("")
            .trim()
            .to_lowercase();
        match role.as_str() {
            "society_board" => Route::SocietyBoardDashboard,
            "registrar" => Route::RegistrarDashboard,
            "vc" | "vice_chancellor" => Route::ViceChancellorDashboard,
            "" => Route::AdminDashboard,
            other => {
                warn!(role = other, "unknown admin role, using generic admin dashboard");
                Route::AdminDashboard
            }
        }
    } else if user.owns_society {
        Route::SocietyDashboard
    } else {
        Route::StudentDashboard
    }
}

/// Authenticate and decide the landing dashboard. Persists the token and
/// normalized user record on success; clears any stored session when the
/// backend rejects the credentials.
pub async fn login_and_route(
    api: &ApiClient,
    session: &mut SessionStore,
    registration_no: &str,
    password: &str,
) -> Result<Route> {
    match api.login(registration_no, password).await {
        Ok(resp) => {
            let route = route_for(&resp.user);
            session.establish(resp.token, resp.user)?;
            Ok(route)
        }
        Err(err) => {
            if err.is_auth_failure() {
                let _ = session.clear();
            }
            Err(err)
        }
    }
}

/// Guard for screens that need a session: `Some(Route::Login)` redirects,
/// `None` lets the screen render. Evaluated from stored session presence
/// only; the token is not re-validated with the backend.
pub fn guard_authenticated(session: &SessionStore) -> Option<Route> {
    if session.is_authenticated() {
        None
    } else {
        Some(Route::Login)
    }
}

/// Guard for guest-only screens (login, signup): an existing session
/// redirects to the student dashboard.
pub fn guard_guest_only(session: &SessionStore) -> Option<Route> {
    if session.is_authenticated() {
        Some(Route::StudentDashboard)
    } else {
        None
    }
}
