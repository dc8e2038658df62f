#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::{Role, User};

/// Session state tracking the current user and the initial auth lookup.
///
/// Provided as an `RwSignal` context at the app root. Pages observe it
/// reactively: a component that copies fields out of it inside an
/// `Effect` re-populates on every session change and drops that
/// subscription when the component is disposed.
#[derive(Clone, Debug)]
pub struct SessionState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        // `loading` starts true so pages hold their login redirect
        // until the initial /api/auth/me lookup settles.
        Self {
            user: None,
            loading: true,
        }
    }
}

/// Landing route for a user, chosen by role.
///
/// ADMIN and EMPLOYEE share the admin landing page; everyone else,
/// including an unresolved session, lands on the user page.
pub fn landing_route(user: Option<&User>) -> &'static str {
    match user {
        Some(u) if matches!(u.role, Role::Admin | Role::Employee) => "/admin-main",
        _ => "/user-main",
    }
}
